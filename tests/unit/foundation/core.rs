use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(
        Rgba8::parse_hex("#ff0000").unwrap(),
        Rgba8::rgba(255, 0, 0, 255)
    );
    assert_eq!(
        Rgba8::parse_hex("0000FF80").unwrap(),
        Rgba8::rgba(0, 0, 255, 128)
    );
    assert!(Rgba8::parse_hex("#fff").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
}

#[test]
fn display_is_lowercase_hex_with_alpha() {
    assert_eq!(Rgba8::rgba(1, 171, 255, 0).to_string(), "#01abff00");
    let back: Rgba8 = Rgba8::WHITE.to_string().parse().unwrap();
    assert_eq!(back, Rgba8::WHITE);
}

#[test]
fn deserializes_hex_object_and_array() {
    let c: Rgba8 = serde_json::from_value(json!("#102030")).unwrap();
    assert_eq!(c, Rgba8::rgba(16, 32, 48, 255));

    let c: Rgba8 = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 255));

    let c: Rgba8 = serde_json::from_value(json!([9, 8, 7, 6])).unwrap();
    assert_eq!(c, Rgba8::rgba(9, 8, 7, 6));

    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}
