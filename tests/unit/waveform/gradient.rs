use super::*;

#[test]
fn equal_colors_give_flat_fill() {
    let c = Rgba8::rgba(10, 200, 30, 255);
    let table = color_table(17, c, c);
    assert_eq!(table.len(), 17);
    assert!(table.iter().all(|&x| x == c));
}

#[test]
fn blends_from_center_to_edges() {
    let center = Rgba8::rgba(255, 255, 255, 255);
    let outer = Rgba8::rgba(0, 0, 0, 255);
    let table = color_table(8, center, outer);
    assert_eq!(table.len(), 8);

    // center_row = 4
    assert_eq!(table[4], center);
    assert_eq!(table[0], outer);
    // |2 - 4| / 4 = 0.5 -> 127.5 truncated
    assert_eq!(table[2], Rgba8::rgba(127, 127, 127, 255));
    assert_eq!(table[6], table[2]);
    // |7 - 4| / 4 = 0.75 -> 63.75 truncated
    assert_eq!(table[7], Rgba8::rgba(63, 63, 63, 255));
}

#[test]
fn tiny_tracks_do_not_divide_by_zero() {
    let center = Rgba8::WHITE;
    let outer = Rgba8::BLACK;
    assert!(color_table(0, center, outer).is_empty());
    assert_eq!(color_table(1, center, outer), vec![center]);
    assert_eq!(color_table(2, center, outer), vec![outer, center]);
}
