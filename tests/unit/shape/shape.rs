use super::*;
use crate::foundation::core::CellSize;
use crate::grid::GridData;
use crate::surface::InMemorySurface;

fn setup() -> (DotManager, InMemorySurface) {
    let mut dots = DotManager::new(GridData::new(CellSize::new(3, 3), 130));
    dots.resolve_size(30, 30);
    (dots, InMemorySurface::new(30, 30))
}

fn row(n: i32) -> Vec<GridCoord> {
    (0..n).map(|x| GridCoord::new(x, 2)).collect()
}

#[test]
fn completes_after_delay_plus_length_ticks() {
    let (mut dots, mut surface) = setup();
    for (d, n) in [(0u32, 1i32), (0, 5), (3, 4), (7, 10)] {
        dots.reset(&mut surface);
        let mut s = Shape::new(ShapeId(1), ShapeKind::LineHorizontal, row(n), d, DrawType::Fill);
        let mut ticks = 0u32;
        while !s.tick(&mut dots, &mut surface) {
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert_eq!(ticks + 1, d + n as u32);
        assert_eq!(dots.filled_count(), n as usize);
    }
}

#[test]
fn paints_in_sequence_order_one_per_tick() {
    let (mut dots, mut surface) = setup();
    let mut s = Shape::new(ShapeId(1), ShapeKind::LineHorizontal, row(3), 1, DrawType::Fill);
    s.tick(&mut dots, &mut surface);
    assert_eq!(dots.filled_count(), 0);
    s.tick(&mut dots, &mut surface);
    assert!(dots.is_filled(dots.index_at(0, 2).unwrap()));
    assert!(!dots.is_filled(dots.index_at(1, 2).unwrap()));
    s.tick(&mut dots, &mut surface);
    assert!(dots.is_filled(dots.index_at(1, 2).unwrap()));
    assert_eq!(surface.paint_calls(), 2);
}

#[test]
fn complete_shape_is_inert() {
    let (mut dots, mut surface) = setup();
    let mut s = Shape::new(ShapeId(1), ShapeKind::LineHorizontal, row(1), 0, DrawType::Fill);
    assert!(s.tick(&mut dots, &mut surface));
    dots.reset(&mut surface);
    assert!(s.tick(&mut dots, &mut surface));
    assert_eq!(dots.filled_count(), 0);
}

#[test]
fn empty_shape_never_completes() {
    let (mut dots, mut surface) = setup();
    let mut s = Shape::new(
        ShapeId(1),
        ShapeKind::Glyph {
            width: 3,
            height: 5,
        },
        Vec::new(),
        0,
        DrawType::Fill,
    );
    for _ in 0..10_000 {
        assert!(!s.tick(&mut dots, &mut surface));
    }
    assert!(!s.is_complete());
    s.stop();
    assert!(s.tick(&mut dots, &mut surface));
}

#[test]
fn stop_skips_remaining_positions() {
    let (mut dots, mut surface) = setup();
    let mut s = Shape::new(ShapeId(1), ShapeKind::LineHorizontal, row(5), 0, DrawType::Fill);
    s.tick(&mut dots, &mut surface);
    s.stop();
    assert!(s.tick(&mut dots, &mut surface));
    assert_eq!(dots.filled_count(), 1);
}

#[test]
fn off_grid_positions_consume_a_step() {
    let (mut dots, mut surface) = setup();
    let positions = vec![GridCoord::new(-1, 0), GridCoord::new(50, 0), GridCoord::new(0, 0)];
    let mut s = Shape::new(ShapeId(1), ShapeKind::LineHorizontal, positions, 0, DrawType::Fill);
    assert!(!s.tick(&mut dots, &mut surface));
    assert!(!s.tick(&mut dots, &mut surface));
    assert!(s.tick(&mut dots, &mut surface));
    assert_eq!(dots.filled_count(), 1);
}

#[test]
fn clear_mode_erases() {
    let (mut dots, mut surface) = setup();
    let mut fill = Shape::new(ShapeId(1), ShapeKind::LineHorizontal, row(4), 0, DrawType::Fill);
    let mut clear = Shape::new(ShapeId(2), ShapeKind::LineHorizontal, row(4), 0, DrawType::Clear);
    while !fill.tick(&mut dots, &mut surface) {}
    assert_eq!(dots.filled_count(), 4);
    while !clear.tick(&mut dots, &mut surface) {}
    assert_eq!(dots.filled_count(), 0);
    assert_eq!(surface.opaque_pixel_count(), 0);
}
