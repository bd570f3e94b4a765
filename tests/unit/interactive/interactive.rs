use super::*;

fn data(view: &str, item: usize) -> RegionData {
    RegionData {
        view_id: view.to_string(),
        item,
    }
}

#[test]
fn regions_are_padded_and_hit_tested() {
    let mut layer = InMemoryInteractiveLayer::new();
    let id = layer.register_region(PixelRect::new(20, 20, 30, 15), data("header", 0));
    let r = layer.region(id).unwrap();
    assert_eq!(r.rect, PixelRect::new(10, 10, 50, 35));
    assert_eq!(layer.region_at(10, 10), Some(id));
    assert_eq!(layer.region_at(59, 44), Some(id));
    assert_eq!(layer.region_at(60, 44), None);
}

#[test]
fn ids_are_monotonic_and_not_reused() {
    let mut layer = InMemoryInteractiveLayer::with_border(0);
    let a = layer.register_region(PixelRect::new(0, 0, 5, 5), data("menu", 0));
    layer.unregister_region(a);
    let b = layer.register_region(PixelRect::new(0, 0, 5, 5), data("menu", 0));
    assert!(b > a);
    assert_eq!(layer.regions().len(), 1);
}

#[test]
fn topmost_region_wins_overlap() {
    let mut layer = InMemoryInteractiveLayer::with_border(0);
    let _a = layer.register_region(PixelRect::new(0, 0, 10, 10), data("menu", 0));
    let b = layer.register_region(PixelRect::new(5, 5, 10, 10), data("menu", 1));
    assert_eq!(layer.region_at(6, 6), Some(b));
}

#[test]
fn call_log_records_order() {
    let mut layer = InMemoryInteractiveLayer::new();
    let a = layer.register_region(PixelRect::new(0, 0, 1, 1), data("intro", 0));
    layer.unregister_region(a);
    layer.unregister_region(RegionId(99));
    assert_eq!(
        layer.calls(),
        &[
            InteractiveCall::Register {
                id: a,
                view_id: "intro".to_string()
            },
            InteractiveCall::Unregister { id: a },
            InteractiveCall::Unregister { id: RegionId(99) },
        ]
    );
    layer.clear_calls();
    assert!(layer.calls().is_empty());
}
