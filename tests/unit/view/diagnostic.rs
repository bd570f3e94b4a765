use super::*;
use crate::component::ComponentKind;
use crate::view::test_support::Rig;

#[test]
fn start_lays_out_every_section() {
    let mut rig = Rig::new(200, 300);
    let mut view = TestView::new();
    view.start(&mut rig.ctx(), 0);

    let kinds: Vec<_> = rig
        .components
        .components()
        .iter()
        .map(|c| std::mem::discriminant(c.kind()))
        .collect();
    // Top line, six glyph rows, three rectangles, two filler rows, bottom line.
    assert_eq!(kinds.len(), 13);
    assert_eq!(kinds[0], std::mem::discriminant(&ComponentKind::LineWidthFull));
    assert_eq!(kinds[12], std::mem::discriminant(&ComponentKind::LineWidthFull));

    let comps = rig.components.components();
    assert_eq!(comps[0].origin().y, 14);
    assert_eq!(comps[1].origin().y, 28);
    // 300 cells = 42 lines; bottom line two lines up.
    assert_eq!(comps[12].origin().y, 7 * 40);
}

#[test]
fn rectangles_use_each_ordering_with_staggered_delays() {
    let mut rig = Rig::new(200, 300);
    let mut view = TestView::new();
    view.start(&mut rig.ctx(), 0);

    let rects: Vec<_> = rig
        .components
        .components()
        .iter()
        .filter(|c| matches!(c.kind(), ComponentKind::Rectangle { .. }))
        .map(|c| (c.origin().x, c.style().delay, c.style().strategy))
        .collect();
    assert_eq!(
        rects,
        vec![
            (0, 66, FillStrategyType::Reverse),
            (9, 134, FillStrategyType::Random),
            (18, 200, FillStrategyType::PassThrough),
        ]
    );
}

#[test]
fn settled_page_is_drawn_and_stop_clears_it() {
    let mut rig = Rig::new(200, 300);
    let mut view = TestView::new();
    view.start(&mut rig.ctx(), 0);
    rig.settle();
    assert!(rig.dots.filled_count() > 0);
    assert!(rig.is_filled(0, 14));
    assert!(rig.is_filled(199, 14));

    view.stop(&mut rig.ctx(), 0);
    rig.settle();
    assert_eq!(rig.dots.filled_count(), 0);
}

#[test]
fn inactive_page_never_redraws() {
    let mut rig = Rig::new(200, 300);
    let mut view = TestView::new();
    for _ in 0..500 {
        view.tick(&mut rig.ctx());
    }
    assert_eq!(rig.components.active_count(), 0);
}

#[test]
fn active_page_redraws_now_and_then() {
    let mut rig = Rig::new(200, 300);
    let mut view = TestView::new();
    view.start(&mut rig.ctx(), 0);
    rig.settle();
    for _ in 0..2_000 {
        view.tick(&mut rig.ctx());
    }
    assert!(rig.components.active_count() > 0);
}
