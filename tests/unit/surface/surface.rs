use super::*;

#[test]
fn paint_copies_block_rows() {
    let mut s = InMemorySurface::new(6, 6);
    s.paint_region(3, 3, 3, 3, &[255; 36]);
    assert_eq!(s.pixel(3, 3), Some([255, 255, 255, 255]));
    assert_eq!(s.pixel(5, 5), Some([255, 255, 255, 255]));
    assert_eq!(s.pixel(2, 3), Some([0, 0, 0, 0]));
    assert_eq!(s.opaque_pixel_count(), 9);
    assert_eq!(s.paint_calls(), 1);

    s.paint_region(3, 3, 3, 3, &[0; 36]);
    assert_eq!(s.opaque_pixel_count(), 0);
    assert_eq!(s.paint_calls(), 2);
}

#[test]
fn rejects_out_of_bounds_and_wrong_size() {
    let mut s = InMemorySurface::new(6, 6);
    s.paint_region(-1, 0, 3, 3, &[255; 36]);
    s.paint_region(4, 0, 3, 3, &[255; 36]);
    s.paint_region(0, 0, 3, 3, &[255; 12]);
    assert_eq!(s.paint_calls(), 0);
    assert_eq!(s.opaque_pixel_count(), 0);
    assert_eq!(s.pixel(6, 0), None);
}

#[test]
fn resize_clears_buffer() {
    let mut s = InMemorySurface::new(3, 3);
    s.paint_region(0, 0, 3, 3, &[255; 36]);
    s.resize(6, 3);
    assert_eq!(s.data().len(), 6 * 3 * 4);
    assert_eq!(s.opaque_pixel_count(), 0);
}
