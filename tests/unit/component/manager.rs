use super::*;
use crate::component::{ComponentBuilder, Style};
use crate::config::LayoutConstants;
use crate::foundation::core::{CellSize, GridCoord};
use crate::grid::GridData;
use crate::shape::{DrawType, GlyphTable, ShapeManager};
use crate::surface::InMemorySurface;

fn setup() -> (ShapeManager, DotManager, InMemorySurface) {
    let mut d = DotManager::new(GridData::new(CellSize::new(1, 1), 130));
    d.resolve_size(20, 20);
    (
        ShapeManager::new(GlyphTable::builtin().unwrap(), 0),
        d,
        InMemorySurface::new(20, 20),
    )
}

#[test]
fn evicts_on_the_completing_tick() {
    let (mut sm, mut d, mut s) = setup();
    let mut cm = ComponentManager::new();
    {
        let mut b = ComponentBuilder::new(&mut sm, 20, LayoutConstants::default());
        // 1, 2 and 3 cell lines.
        for (y, w) in [(0, 1), (1, 2), (2, 3)] {
            cm.add(b.rectangle(GridCoord::new(0, y), w, 1, Style::default()));
        }
    }
    assert_eq!(cm.active_count(), 3);

    let mut counts = Vec::new();
    for _ in 0..3 {
        let before = cm.active_count();
        let evicted = cm.tick(&mut d, &mut sm, &mut s);
        assert_eq!(cm.active_count(), before - evicted);
        counts.push(evicted);
    }
    assert_eq!(counts, vec![1, 1, 1]);
    assert_eq!(cm.active_count(), 0);
    assert_eq!(d.filled_count(), 6);
}

#[test]
fn eviction_preserves_order_of_survivors() {
    let (mut sm, mut d, mut s) = setup();
    let mut cm = ComponentManager::new();
    {
        let mut b = ComponentBuilder::new(&mut sm, 20, LayoutConstants::default());
        cm.add(b.rectangle(GridCoord::new(0, 0), 5, 1, Style::default()));
        cm.add(b.rectangle(GridCoord::new(0, 1), 1, 1, Style::default()));
        cm.add(b.rectangle(GridCoord::new(0, 2), 5, 1, Style::default()));
    }
    assert_eq!(cm.tick(&mut d, &mut sm, &mut s), 1);
    let ys: Vec<i32> = cm.components().iter().map(|c| c.origin().y).collect();
    assert_eq!(ys, vec![0, 2]);
}

#[test]
fn reset_and_stop_unstarted() {
    let (mut sm, mut d, mut s) = setup();
    let mut cm = ComponentManager::new();
    {
        let mut b = ComponentBuilder::new(&mut sm, 20, LayoutConstants::default());
        cm.add(b.rectangle(GridCoord::new(0, 0), 2, 2, Style::new(50, 0, DrawType::Fill)));
        cm.add(b.rectangle(GridCoord::new(0, 5), 2, 2, Style::default()));
    }
    cm.stop_unstarted_shapes();
    assert_eq!(cm.tick(&mut d, &mut sm, &mut s), 1);
    assert_eq!(cm.active_count(), 1);

    cm.reset(&mut sm);
    assert_eq!(cm.active_count(), 0);
    assert_eq!(cm.tick(&mut d, &mut sm, &mut s), 0);
}

#[test]
fn eviction_and_reset_release_shape_ids() {
    let (mut sm, mut d, mut s) = setup();
    let mut cm = ComponentManager::new();
    {
        let mut b = ComponentBuilder::new(&mut sm, 20, LayoutConstants::default());
        cm.add(b.rectangle(GridCoord::new(0, 0), 1, 1, Style::default()));
        cm.add(b.rectangle(GridCoord::new(0, 1), 3, 1, Style::default()));
        cm.add(b.rectangle(GridCoord::new(0, 2), 2, 2, Style::new(50, 0, DrawType::Fill)));
    }
    assert_eq!(sm.shape_count(), 3);

    assert_eq!(cm.tick(&mut d, &mut sm, &mut s), 1);
    assert_eq!(sm.shape_count(), 2);

    cm.reset(&mut sm);
    assert_eq!(sm.shape_count(), 0);
}
