pub mod accessor;
pub mod buffer;
pub mod format;
