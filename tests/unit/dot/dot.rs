use super::*;
use crate::surface::InMemorySurface;
use std::collections::HashSet;

fn manager(w: u32, h: u32) -> DotManager {
    let mut m = DotManager::new(GridData::new(CellSize::new(3, 3), 130));
    m.resolve_size(w, h);
    m
}

#[test]
fn index_at_round_trips_every_cell() {
    for (w, h) in [(1, 1), (3, 7), (10, 4), (33, 16)] {
        let m = manager(w * 3, h * 3);
        let mut seen = HashSet::new();
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let idx = m.index_at(x, y).unwrap();
                assert!(idx.0 < (w * h) as usize);
                assert!(seen.insert(idx));
                let dot = m.dot(idx).unwrap();
                assert_eq!((dot.pixel_x, dot.pixel_y), (x * 3, y * 3));
            }
        }
        assert_eq!(seen.len(), (w * h) as usize);
    }
}

#[test]
fn index_at_rejects_left_right_top_and_flat_overflow() {
    let m = manager(30, 30);
    assert_eq!(m.index_at(-1, 0), None);
    assert_eq!(m.index_at(10, 0), None);
    assert_eq!(m.index_at(0, -1), None);
    assert_eq!(m.index_at(0, 10), None);
    assert_eq!(m.index_at(9, 9), Some(DotIndex(99)));
}

#[test]
fn index_at_has_no_separate_bottom_edge_check() {
    // Rows below the grid are rejected by the flat range: (x, 10) maps to 100 + x.
    let m = manager(30, 30);
    assert_eq!(m.index_at(0, 9), Some(DotIndex(90)));
    assert_eq!(m.index_at(0, 10), None);
    assert_eq!(m.len(), 100);
}

#[test]
fn fill_and_clear_are_idempotent() {
    let mut m = manager(9, 9);
    let mut s = InMemorySurface::new(9, 9);
    let idx = m.index_at(1, 1).unwrap();

    m.fill(idx, &mut s);
    m.fill(idx, &mut s);
    assert!(m.is_filled(idx));
    assert_eq!(s.paint_calls(), 1);
    assert_eq!(s.pixel(3, 3), Some([255, 255, 255, 255]));

    m.clear(idx, &mut s);
    m.clear(idx, &mut s);
    assert!(!m.is_filled(idx));
    assert_eq!(s.paint_calls(), 2);
    assert_eq!(s.pixel(3, 3), Some([0, 0, 0, 0]));
}

#[test]
fn stale_index_is_ignored() {
    let mut m = manager(9, 9);
    let mut s = InMemorySurface::new(9, 9);
    m.fill(DotIndex(1000), &mut s);
    assert_eq!(s.paint_calls(), 0);
    assert!(!m.is_filled(DotIndex(1000)));
}

#[test]
fn reset_and_resize_clear_everything() {
    let mut m = manager(9, 9);
    let mut s = InMemorySurface::new(9, 9);
    for i in 0..9 {
        m.fill(DotIndex(i), &mut s);
    }
    assert_eq!(m.filled_count(), 9);

    m.reset(&mut s);
    assert_eq!(m.filled_count(), 0);
    assert_eq!(s.opaque_pixel_count(), 0);

    m.fill(DotIndex(0), &mut s);
    m.resolve_size(12, 6);
    assert_eq!(m.len(), 8);
    assert_eq!(m.filled_count(), 0);
}
