use super::*;

#[test]
fn landscape_becomes_a_square() {
    assert_eq!(
        fit_display(1920, 1080, 3),
        DisplaySize {
            width_px: 1080,
            height_px: 1080
        }
    );
}

#[test]
fn portrait_keeps_the_full_container() {
    assert_eq!(
        fit_display(390, 844, 3),
        DisplaySize {
            width_px: 390,
            height_px: 844
        }
    );
}

#[test]
fn width_rounds_down_to_whole_cells() {
    let fitted = fit_display(400, 900, 3);
    assert_eq!(fitted.width_px, 399);
    // Height is left as is.
    assert_eq!(fitted.height_px, 900);
}

#[test]
fn square_container_counts_as_portrait() {
    assert_eq!(fit_display(500, 500, 4).width_px, 500);
}

#[test]
fn zero_cell_width_does_not_divide_by_zero() {
    assert_eq!(fit_display(10, 20, 0).width_px, 10);
}

#[test]
fn tracker_reports_only_changes() {
    let mut t = DisplayTracker::new();
    assert_eq!(t.current(), None);
    let first = t.update(900, 600, 3).unwrap();
    assert_eq!(first.width_px, 600);
    assert_eq!(t.update(900, 600, 3), None);
    // A different container that fits to the same size is not a change.
    assert_eq!(t.update(1000, 600, 3), None);
    assert!(t.update(1000, 700, 3).is_some());
}

#[test]
fn tracker_seeded_with_a_size_skips_the_first_report() {
    let mut t = DisplayTracker::with_size(fit_display(300, 300, 3));
    assert_eq!(t.update(300, 300, 3), None);
}
