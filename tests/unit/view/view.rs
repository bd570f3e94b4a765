use super::test_support::Rig;
use super::*;
use crate::foundation::core::CellSize;
use crate::interactive::InteractiveCall;

#[test]
fn rollover_clear_pass_erases_text_and_surround() {
    assert_eq!(
        rollover_draw_types(DrawType::Clear, true),
        (DrawType::Clear, DrawType::Clear)
    );
    assert_eq!(
        rollover_draw_types(DrawType::Clear, false),
        (DrawType::Clear, DrawType::Clear)
    );
}

#[test]
fn rollover_fill_pass_inverts_rows_under_the_pointer() {
    assert_eq!(
        rollover_draw_types(DrawType::Fill, true),
        (DrawType::Clear, DrawType::Fill)
    );
    assert_eq!(
        rollover_draw_types(DrawType::Fill, false),
        (DrawType::Fill, DrawType::Clear)
    );
}

#[test]
fn rectangles_block_splits_into_three_cell_strips() {
    let mut rig = Rig::new(40, 40);
    let mut ctx = rig.ctx();
    ctx.add_rectangles_block(GridCoord::new(2, 3), 7, 4, Style::new(10, 0, DrawType::Fill));

    let strips = rig.components.components();
    assert_eq!(strips.len(), 3);
    let widths: Vec<_> = strips
        .iter()
        .map(|c| match c.kind() {
            crate::component::ComponentKind::Rectangle { width, height } => (*width, *height),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(widths, vec![(3, 4), (3, 4), (1, 4)]);
    let xs: Vec<_> = strips.iter().map(|c| c.origin().x).collect();
    assert_eq!(xs, vec![2, 5, 8]);
    let delays: Vec<_> = strips.iter().map(|c| c.style().delay).collect();
    assert_eq!(delays, vec![10, 11, 12]);
}

#[test]
fn rectangles_block_with_no_width_adds_nothing() {
    let mut rig = Rig::new(20, 20);
    rig.ctx()
        .add_rectangles_block(GridCoord::new(0, 0), 0, 4, Style::default());
    assert_eq!(rig.components.active_count(), 0);
}

#[test]
fn surround_is_one_line_tall_and_two_cells_wider() {
    let mut rig = Rig::new(60, 60);
    let geometry = ItemGeometry { x: 10, y: 20, width: 8 };
    rig.ctx()
        .add_surround(geometry, 0, FillStrategyType::Reverse, DrawType::Fill);
    rig.settle();

    // (9, 19) .. (18, 25) inclusive.
    assert_eq!(rig.dots.filled_count(), 10 * 7);
    assert!(rig.is_filled(9, 19));
    assert!(rig.is_filled(18, 25));
    assert!(!rig.is_filled(19, 19));
    assert!(!rig.is_filled(9, 26));
}

#[test]
fn item_rect_scales_by_cell_size_and_character_height() {
    let mut rig = Rig::with_cell(CellSize::new(3, 2), 300, 200);
    let ctx = rig.ctx();
    let rect = ctx.item_rect(ItemGeometry { x: 4, y: 7, width: 10 });
    assert_eq!(rect, PixelRect::new(12, 14, 30, 10));

    let empty = ctx.item_rect(ItemGeometry { x: 0, y: 0, width: -5 });
    assert_eq!(empty.width, 0);
}

#[test]
fn grid_lines_counts_whole_lines() {
    let mut rig = Rig::new(10, 50);
    assert_eq!(rig.ctx().grid_lines(), 7);
}

#[test]
fn base_stop_unregisters_every_region() {
    let mut rig = Rig::new(100, 100);
    let mut base = ViewBase::new("list");
    base.begin_start(0);
    {
        let mut ctx = rig.ctx();
        base.register_region(&mut ctx, 0, ItemGeometry { x: 1, y: 1, width: 4 });
        base.register_region(&mut ctx, 1, ItemGeometry { x: 1, y: 9, width: 4 });
    }
    assert_eq!(rig.interactive.regions().len(), 2);
    let second = base.region_ids().nth(1).unwrap();
    assert_eq!(base.item_for_region(second), Some(1));

    base.begin_stop(&mut rig.interactive, 0);
    assert!(!base.is_active());
    assert!(rig.interactive.regions().is_empty());
    assert_eq!(base.item_for_region(second), None);
    assert!(matches!(
        rig.interactive.calls().last(),
        Some(InteractiveCall::Unregister { .. })
    ));
}

#[test]
fn set_item_grows_the_geometry_list() {
    let mut base = ViewBase::new("v");
    let g = ItemGeometry { x: 3, y: 4, width: 5 };
    base.set_item(2, g);
    assert_eq!(base.items().len(), 3);
    assert_eq!(base.items()[2], g);
    assert_eq!(base.items()[0], ItemGeometry::default());
}
