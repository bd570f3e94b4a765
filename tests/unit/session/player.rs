use super::*;

#[test]
fn player_fits_the_container_before_building() {
    let p = Player::with_defaults(900, 600).unwrap();
    assert_eq!(
        p.size(),
        DisplaySize {
            width_px: 600,
            height_px: 600
        }
    );
    assert_eq!(p.matrix().grid().width_in_cells(), 200);
    assert_eq!(p.frames(), 0);
}

#[test]
fn advance_ticks_only_when_a_step_is_due() {
    let mut p = Player::with_defaults(600, 600).unwrap();
    assert!(!p.advance(10.0, 600, 600));
    assert!(p.advance(10.0, 600, 600));
    assert_eq!(p.frames(), 1);
}

#[test]
fn advance_resizes_when_the_container_changes() {
    let mut p = Player::with_defaults(600, 600).unwrap();
    p.run(120);
    assert!(p.matrix().filled_dot_count() > 0);

    assert!(p.advance(20.0, 300, 450));
    assert_eq!(p.size().width_px, 300);
    assert_eq!(p.surface().width(), 300);
    assert_eq!(p.matrix().grid().height_in_cells(), 150);
}

#[test]
fn resize_to_the_same_fit_keeps_state() {
    let mut p = Player::with_defaults(600, 600).unwrap();
    p.run(120);
    let filled = p.matrix().filled_dot_count();
    p.resize(800, 600);
    assert_eq!(p.matrix().filled_dot_count(), filled);
}

#[test]
fn pointer_at_hits_the_header() {
    let mut p = Player::with_defaults(600, 600).unwrap();
    let region = &p.interactive().regions()[0];
    let (px, py) = (region.rect.x + 15, region.rect.y + 15);

    assert_eq!(
        p.pointer_at(px, py, PointerEvent::Click),
        Some(Navigation::MenuOpen)
    );
    assert_eq!(p.matrix().current_view_id(), "project-menu");
    assert_eq!(p.pointer_at(-100, -100, PointerEvent::Click), None);
}

#[test]
fn stats_reflect_painting() {
    let mut p = Player::with_defaults(600, 600).unwrap();
    p.run(200);
    let stats = p.stats();
    assert_eq!(stats.frames, 200);
    assert!(stats.paint_calls > 0);
    assert_eq!(stats.filled_dots, p.matrix().filled_dot_count());
    assert_eq!(stats.current_view, "intro");
    // Every filled dot is a 3x3 opaque block on the surface.
    assert_eq!(p.surface().opaque_pixel_count(), stats.filled_dots * 9);
}
