pub mod downsample;
pub mod gradient;
pub mod layout;
pub mod raster;
