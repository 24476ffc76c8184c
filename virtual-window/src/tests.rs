use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    /// Whole-pixel values keep the float arithmetic exact.
    fn gen_px(&mut self, start: u64, end_exclusive: u64) -> f64 {
        self.gen_range_u64(start, end_exclusive) as f64
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn intersects(top: f64, height: f64, scroll_top: f64, viewport_height: f64) -> bool {
    top < scroll_top + viewport_height && top + height > scroll_top
}

fn assert_range_valid(range: Option<VisibleRange>, count: usize) {
    match range {
        None => assert_eq!(count, 0, "empty range for a non-empty collection"),
        Some(r) => {
            assert!(count > 0, "range for an empty collection: {r:?}");
            assert!(r.start_index <= r.end_index, "inverted range: {r:?}");
            assert!(r.end_index < count, "range past the end: {r:?} (count={count})");
        }
    }
}

fn indexes_of(window: &impl Window) -> Vec<usize> {
    let mut out = Vec::new();
    window.collect_window_indexes(&mut out);
    out
}

// ---------------------------------------------------------------------------------------------
// FixedWindow

fn fixed(count: usize, item_height: f64, viewport_height: f64, overscan: usize) -> FixedWindow {
    FixedWindow::new(
        FixedWindowOptions::new(count, item_height)
            .with_viewport_height(viewport_height)
            .with_overscan(overscan),
    )
}

#[test]
fn fixed_range_at_the_top() {
    let w = fixed(1000, 50.0, 400.0, 3);
    assert_eq!(w.total_height(), 50_000.0);
    assert_eq!(w.window_range(), Some(VisibleRange::new(0, 11)));
    assert_eq!(w.visible_range(), Some(VisibleRange::new(0, 8)));
}

#[test]
fn fixed_range_after_scrolling() {
    let mut w = fixed(1000, 50.0, 400.0, 3);
    w.set_scroll_top(2500.0);
    assert_eq!(w.window_range(), Some(VisibleRange::new(47, 61)));
    assert_eq!(w.visible_range(), Some(VisibleRange::new(50, 58)));
}

#[test]
fn fixed_empty_collection_has_no_range() {
    let mut w = fixed(0, 50.0, 400.0, 3);
    assert_eq!(w.total_height(), 0.0);
    assert_eq!(w.window_range(), None);
    assert!(indexes_of(&w).is_empty());
    assert_eq!(w.scroll_percent(), None);

    w.set_scroll_top(1_000.0);
    assert_eq!(w.window_range(), None);
}

#[test]
fn fixed_tolerates_out_of_range_scroll_offsets() {
    let mut w = fixed(20, 10.0, 50.0, 2);
    w.set_scroll_top(-75.0);
    assert_eq!(w.window_range(), Some(VisibleRange::new(0, 0)));

    w.set_scroll_top(10_000.0);
    assert_eq!(w.window_range(), Some(VisibleRange::new(19, 19)));

    w.set_scroll_top(f64::NAN);
    assert_eq!(w.scroll_top(), 0.0);
}

#[test]
fn fixed_emits_absolute_styles() {
    let w = FixedWindow::new(
        FixedWindowOptions::new(10, 20.0)
            .with_viewport_height(45.0)
            .with_viewport_width(Some(300.0))
            .with_overscan(0),
    );
    let items: Vec<String> = (0..10).map(|i| alloc::format!("row {i}")).collect();
    let mut out = Vec::new();
    w.collect_window_items(&items, &mut out);

    let indexes: Vec<usize> = out.iter().map(|it| it.index).collect();
    assert_eq!(indexes, [0, 1, 2]);
    assert_eq!(out[2].item, "row 2");
    assert_eq!(
        out[2].style,
        ItemStyle {
            top: 40.0,
            left: 0.0,
            width: Some(300.0),
            height: 20.0,
        }
    );
}

#[test]
fn fixed_short_item_slice_is_skipped_not_indexed() {
    let w = fixed(10, 10.0, 100.0, 0);
    let items = [1u8, 2, 3];
    let mut seen = Vec::new();
    w.for_each_window_item(&items, |it| seen.push(*it.item));
    assert_eq!(seen, [1, 2, 3]);
}

#[test]
fn fixed_invalid_geometry_is_clamped_or_rejected() {
    let w = fixed(10, 0.0, -5.0, 0);
    assert_eq!(w.item_height(), MIN_EXTENT);
    assert_eq!(w.viewport_height(), MIN_EXTENT);

    let err = FixedWindow::try_new(FixedWindowOptions::new(10, -1.0).with_viewport_height(10.0))
        .unwrap_err();
    assert_eq!(
        err,
        WindowError::InvalidGeometry {
            field: "item_height",
            value: -1.0,
        }
    );
    assert!(FixedWindow::try_new(FixedWindowOptions::new(10, 5.0)).is_err());
    assert!(
        FixedWindow::try_new(FixedWindowOptions::new(10, 5.0).with_viewport_height(10.0)).is_ok()
    );
}

#[test]
fn fixed_ranges_are_valid_and_cover_every_visible_item() {
    let mut rng = Lcg::new(0x5eed_f1ed);
    for _ in 0..500 {
        let count = rng.gen_range_usize(0, 400);
        let item_height = rng.gen_px(1, 80);
        let viewport_height = rng.gen_px(1, 600);
        let overscan = rng.gen_range_usize(0, 5);
        let mut w = fixed(count, item_height, viewport_height, overscan);

        let max = w.max_scroll_top() as u64;
        let scroll_top = rng.gen_range_u64(0, max + 1) as f64;
        w.set_scroll_top(scroll_top);

        let visible = w.visible_range();
        assert_range_valid(visible, count);
        assert_range_valid(w.window_range(), count);
        for i in 0..count {
            let top = i as f64 * item_height;
            if intersects(top, item_height, scroll_top, viewport_height) {
                assert!(
                    visible.is_some_and(|r| r.contains(i)),
                    "item {i} visible but not in {visible:?} (scroll={scroll_top})"
                );
            }
        }

        if let (Some(v), Some(o)) = (visible, w.window_range()) {
            assert_eq!(o.start_index, v.start_index.saturating_sub(overscan));
            assert_eq!(o.end_index, (v.end_index + overscan).min(count - 1));
        }
    }
}

#[test]
fn scroll_to_index_offset_aligns_and_clamps() {
    let mut w = fixed(100, 10.0, 50.0, 0);
    assert_eq!(w.scroll_to_index_offset(20, Align::Start), 200.0);
    assert_eq!(w.scroll_to_index_offset(20, Align::End), 160.0);
    assert_eq!(w.scroll_to_index_offset(20, Align::Center), 180.0);

    w.set_scroll_top(180.0);
    assert_eq!(w.scroll_to_index_offset(20, Align::Auto), 180.0);
    assert_eq!(w.scroll_to_index_offset(10, Align::Auto), 100.0);
    assert_eq!(w.scroll_to_index_offset(40, Align::Auto), 360.0);

    // Past the end clamps to the last item, then to the max scroll offset.
    assert_eq!(w.scroll_to_index_offset(999, Align::Start), 950.0);
    assert_eq!(fixed(0, 10.0, 50.0, 0).scroll_to_index_offset(3, Align::End), 0.0);
}

#[test]
fn frame_state_round_trips_scroll_geometry() {
    let mut a = fixed(100, 10.0, 50.0, 0);
    a.set_scroll_top(123.0);
    let frame = a.frame_state();

    let mut b = fixed(100, 10.0, 80.0, 0);
    b.restore_frame_state(frame);
    assert_eq!(b.scroll_top(), 123.0);
    assert_eq!(b.viewport_height(), 50.0);
    assert_eq!(a.window_range(), b.window_range());
}

// ---------------------------------------------------------------------------------------------
// VariableWindow

fn variable(count: usize, estimate: f64, viewport_height: f64, overscan: usize) -> VariableWindow {
    VariableWindow::new(
        VariableWindowOptions::new(count, estimate)
            .with_viewport_height(viewport_height)
            .with_overscan(overscan),
    )
}

fn tops(w: &VariableWindow) -> Vec<f64> {
    w.positions().iter().map(|p| p.top).collect()
}

#[test]
fn variable_positions_start_from_the_estimate() {
    let w = variable(5, 20.0, 100.0, 0);
    assert_eq!(tops(&w), [0.0, 20.0, 40.0, 60.0, 80.0]);
    assert_eq!(w.total_height(), 100.0);
    assert_eq!(w.measured_len(), 0);
}

#[test]
fn variable_measurement_shifts_following_items() {
    let mut w = variable(5, 20.0, 100.0, 0);
    assert_eq!(w.measure(0, 35.0), Measurement::Updated { delta: 15.0 });
    assert_eq!(tops(&w), [0.0, 35.0, 55.0, 75.0, 95.0]);
    assert_eq!(w.total_height(), 115.0);
    assert_eq!(w.position(0).map(|p| p.height), Some(35.0));
    assert!(w.is_measured(0));
    assert!(!w.is_measured(1));
}

#[test]
fn variable_range_uses_binary_search_over_positions() {
    let mut w = variable(100, 10.0, 50.0, 2);
    w.set_scroll_top(95.0);
    assert_eq!(w.visible_range(), Some(VisibleRange::new(9, 14)));
    assert_eq!(w.window_range(), Some(VisibleRange::new(7, 16)));

    w.measure(3, 100.0);
    assert_eq!(w.visible_range(), Some(VisibleRange::new(3, 5)));
    assert_eq!(w.window_range(), Some(VisibleRange::new(1, 7)));
    assert_eq!(w.index_at_offset(135.0), Some(4));
}

#[test]
fn variable_measurement_is_idempotent() {
    let mut w = variable(10, 20.0, 100.0, 0);
    assert!(w.measure(2, 30.0).is_updated());
    let version = w.version();
    let positions = w.positions().to_vec();

    assert_eq!(w.measure(2, 30.0), Measurement::Unchanged);
    assert_eq!(w.version(), version);
    assert_eq!(w.positions(), positions.as_slice());

    // Confirming the estimate records the item as measured without recomputing anything.
    assert_eq!(w.measure(4, 20.0), Measurement::Unchanged);
    assert!(w.is_measured(4));
    assert_eq!(w.version(), version);
}

#[test]
fn variable_scrolling_does_not_rebuild_positions() {
    let mut w = variable(1_000, 20.0, 300.0, 3);
    let version = w.version();
    for step in 0..200 {
        w.set_scroll_top(step as f64 * 37.0);
        let _ = w.window_range();
    }
    assert_eq!(w.version(), version);
}

#[test]
fn variable_rejects_corrupt_measurements() {
    let mut w = variable(4, 20.0, 100.0, 0);
    w.measure(1, 50.0);
    let version = w.version();

    assert_eq!(w.measure(1, f64::NAN), Measurement::Rejected);
    assert_eq!(w.measure(1, -3.0), Measurement::Rejected);
    assert_eq!(w.measure(1, f64::INFINITY), Measurement::Rejected);
    assert_eq!(w.measure(9, 10.0), Measurement::OutOfBounds);

    assert_eq!(w.position(1).map(|p| p.height), Some(50.0));
    assert_eq!(w.version(), version);
    assert_eq!(w.total_height(), 110.0);
}

#[test]
fn variable_zero_heights_collapse_without_breaking_ranges() {
    let mut w = variable(5, 20.0, 100.0, 1);
    let n = w.measure_many((0..5).map(|i| (i, 0.0)));
    assert_eq!(n, 5);
    assert_eq!(w.total_height(), 0.0);
    assert_eq!(tops(&w), [0.0; 5]);
    assert_eq!(w.visible_range(), Some(VisibleRange::new(0, 4)));
    assert_eq!(w.scroll_percent(), None);
}

#[test]
fn variable_batch_measurement_rebuilds_once() {
    let mut w = variable(10, 10.0, 100.0, 0);
    let version = w.version();
    let updated = w.measure_many([(7, 30.0), (2, 15.0), (2, 15.0), (5, f64::NAN), (4, 10.0)]);
    assert_eq!(updated, 2);
    assert_eq!(w.version(), version + 1);
    assert_eq!(w.total_height(), 100.0 + 20.0 + 5.0);
    assert_eq!(w.position(3).map(|p| p.top), Some(35.0));
    assert_eq!(w.position(8).map(|p| p.top), Some(105.0));
}

#[test]
fn resize_item_above_viewport_adjusts_scroll() {
    let mut w = variable(100, 10.0, 50.0, 0);
    w.set_scroll_top(200.0);

    assert_eq!(w.resize_item(0, 30.0), 20.0);
    assert_eq!(w.scroll_top(), 220.0);

    // Items at or below the scroll offset do not move the viewport.
    assert_eq!(w.resize_item(50, 30.0), 0.0);
    assert_eq!(w.scroll_top(), 220.0);
    assert_eq!(w.resize_item(0, 30.0), 0.0);
    assert_eq!(w.resize_item(500, 30.0), 0.0);
}

#[test]
fn variable_append_keeps_measurements() {
    let mut w = variable(5, 20.0, 100.0, 0);
    w.measure(1, 40.0);
    w.set_count(10);
    assert!(w.is_measured(1));
    assert_eq!(w.total_height(), 40.0 + 9.0 * 20.0);
    assert_eq!(w.position(9).map(|p| p.top), Some(200.0));
}

#[test]
fn variable_dataset_change_resets_measurements() {
    let mut w = variable(10, 20.0, 50.0, 0);
    w.measure(1, 40.0);
    w.measure(8, 5.0);
    w.set_scroll_top(150.0);

    // Shrinking means the indexes no longer describe the same items.
    w.set_count(3);
    assert_eq!(w.measured_len(), 0);
    assert_eq!(w.total_height(), 60.0);
    assert_eq!(w.scroll_top(), 10.0);

    w.measure(0, 25.0);
    w.reset(4);
    assert_eq!(w.measured_len(), 0);
    assert_eq!(w.scroll_top(), 0.0);
    assert_eq!(tops(&w), [0.0, 20.0, 40.0, 60.0]);
}

#[test]
fn variable_estimate_changes_keep_measurements() {
    let mut w = variable(3, 20.0, 50.0, 0);
    w.measure(0, 5.0);
    w.set_estimated_item_height(10.0);
    assert_eq!(tops(&w), [0.0, 5.0, 15.0]);

    w.set_estimated_item_height(-1.0);
    assert_eq!(w.estimated_item_height(), MIN_EXTENT);
    w.reset_measurements();
    assert_eq!(w.total_height(), 3.0);
}

#[test]
fn variable_invalid_estimate_is_clamped_or_rejected() {
    let w = variable(3, 0.0, 100.0, 0);
    assert_eq!(w.estimated_item_height(), MIN_EXTENT);

    let err = VariableWindow::try_new(
        VariableWindowOptions::new(3, f64::NAN).with_viewport_height(100.0),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        WindowError::InvalidGeometry {
            field: "estimated_item_height",
            ..
        }
    ));
}

#[test]
fn variable_empty_collection_is_well_defined() {
    let mut w = variable(0, 20.0, 100.0, 2);
    assert_eq!(w.total_height(), 0.0);
    assert_eq!(w.visible_range(), None);
    assert_eq!(w.index_at_offset(10.0), None);
    assert!(indexes_of(&w).is_empty());
    assert_eq!(w.measure(0, 10.0), Measurement::OutOfBounds);

    w.set_count(2);
    assert_eq!(w.window_range(), Some(VisibleRange::new(0, 1)));
}

#[test]
fn variable_table_stays_monotonic_and_ranges_cover_visible_items() {
    let mut rng = Lcg::new(0xdead_beef);
    for _ in 0..200 {
        let count = rng.gen_range_usize(0, 150);
        let estimate = rng.gen_px(1, 60);
        let viewport_height = rng.gen_px(1, 500);
        let overscan = rng.gen_range_usize(0, 4);
        let mut w = variable(count, estimate, viewport_height, overscan);

        for _ in 0..rng.gen_range_usize(0, 60) {
            let index = rng.gen_range_usize(0, count + 2);
            let height = match rng.gen_range_usize(0, 10) {
                0 => f64::NAN,
                1 => -rng.gen_px(1, 20),
                2 => 0.0,
                _ => rng.gen_px(1, 120),
            };
            if rng.gen_bool() {
                w.measure(index, height);
            } else {
                w.measure_many([(index, height)]);
            }

            let positions = w.positions();
            assert_eq!(positions.len(), count);
            for pair in positions.windows(2) {
                assert!(pair[0].height >= 0.0);
                assert_eq!(pair[1].top, pair[0].top + pair[0].height);
            }
            let last_bottom = positions.last().map_or(0.0, |p| p.bottom());
            assert_eq!(w.total_height(), last_bottom);
        }

        let max = w.max_scroll_top() as u64;
        let scroll_top = rng.gen_range_u64(0, max + 1) as f64;
        w.set_scroll_top(scroll_top);

        let visible = w.visible_range();
        assert_range_valid(visible, count);
        assert_range_valid(w.window_range(), count);
        for (i, p) in w.positions().iter().enumerate() {
            if intersects(p.top, p.height, scroll_top, viewport_height) {
                assert!(
                    visible.is_some_and(|r| r.contains(i)),
                    "item {i} ({p:?}) visible but not in {visible:?} (scroll={scroll_top})"
                );
            }
        }

        let mounted = indexes_of(&w);
        if let Some(r) = w.window_range() {
            assert_eq!(mounted, r.iter().collect::<Vec<_>>());
        }
    }
}

// ---------------------------------------------------------------------------------------------
// GridWindow

fn grid(count: usize, container_width: f64) -> GridWindow {
    GridWindow::new(
        GridWindowOptions::new(count, 200.0, 100.0)
            .with_gap(10.0)
            .with_container_width(container_width)
            .with_viewport_height(1_000.0)
            .with_overscan(0),
    )
}

#[test]
fn grid_columns_follow_container_width() {
    let w = grid(7, 620.0);
    assert_eq!(w.column_count(), 2);
    assert_eq!(w.row_count(), 4);
    assert_eq!(w.total_height(), 440.0);
}

#[test]
fn grid_partial_last_row_is_skipped_not_padded() {
    let w = grid(7, 620.0);
    let mut styles = Vec::new();
    w.for_each_placement(&mut |i, s| styles.push((i, s)));
    assert_eq!(styles.len(), 7);
    assert_eq!(
        styles[6],
        (
            6,
            ItemStyle {
                top: 330.0,
                left: 0.0,
                width: Some(200.0),
                height: 100.0,
            }
        )
    );
    assert_eq!(styles[5].1.left, 210.0);
    assert_eq!(w.window_range(), Some(VisibleRange::new(0, 6)));
}

#[test]
fn grid_reflows_on_resize_and_forced_columns() {
    let mut w = grid(7, 620.0);
    w.set_container_width(840.0);
    assert_eq!(w.column_count(), 4);
    assert_eq!(w.row_count(), 2);
    assert_eq!(w.cell_of(6), (1, 2));
    let style = w.item_style(6).unwrap();
    assert_eq!((style.top, style.left), (110.0, 420.0));

    w.set_forced_column_count(NonZeroUsize::new(3));
    w.set_container_width(100.0);
    assert_eq!(w.column_count(), 3);
    assert_eq!(w.row_count(), 3);

    w.set_forced_column_count(None);
    assert_eq!(w.column_count(), 1);
    w.set_container_width(0.0);
    assert_eq!(w.column_count(), 1);
    w.set_container_width(f64::NAN);
    assert_eq!(w.container_width(), 0.0);
}

#[test]
fn grid_row_range_tracks_scroll() {
    let mut w = GridWindow::new(
        GridWindowOptions::new(100, 100.0, 50.0)
            .with_container_width(400.0)
            .with_viewport_height(200.0)
            .with_overscan(1),
    );
    assert_eq!(w.column_count(), 4);
    w.set_scroll_top(500.0);
    assert_eq!(w.row_range(), Some(VisibleRange::new(9, 15)));
    assert_eq!(w.window_range(), Some(VisibleRange::new(36, 63)));
    assert_eq!(w.visible_range(), Some(VisibleRange::new(40, 59)));
    assert_eq!(indexes_of(&w), (36..=63).collect::<Vec<_>>());
}

#[test]
fn grid_empty_and_invalid_geometry() {
    let w = grid(0, 620.0);
    assert_eq!(w.row_count(), 0);
    assert_eq!(w.total_height(), 0.0);
    assert_eq!(w.window_range(), None);

    let w = GridWindow::new(GridWindowOptions::new(4, -10.0, 0.0).with_gap(-2.0));
    assert_eq!(w.options().item_width, MIN_EXTENT);
    assert_eq!(w.options().gap, 0.0);

    let err = GridWindow::try_new(
        GridWindowOptions::new(4, 10.0, 10.0)
            .with_viewport_height(100.0)
            .with_gap(-2.0),
    )
    .unwrap_err();
    assert_eq!(
        err,
        WindowError::InvalidGeometry {
            field: "gap",
            value: -2.0,
        }
    );
}

#[test]
fn grid_ranges_cover_every_visible_cell() {
    let mut rng = Lcg::new(0x0001_9e1d);
    for _ in 0..300 {
        let count = rng.gen_range_usize(0, 300);
        let item_width = rng.gen_px(1, 120);
        let item_height = rng.gen_px(1, 120);
        let gap = rng.gen_px(0, 16);
        let container_width = rng.gen_px(0, 1_200);
        let viewport_height = rng.gen_px(1, 800);
        let mut w = GridWindow::new(
            GridWindowOptions::new(count, item_width, item_height)
                .with_gap(gap)
                .with_container_width(container_width)
                .with_viewport_height(viewport_height)
                .with_overscan(rng.gen_range_usize(0, 3)),
        );

        let max = w.max_scroll_top() as u64;
        let scroll_top = rng.gen_range_u64(0, max + 1) as f64;
        w.set_scroll_top(scroll_top);

        let visible = w.visible_range();
        assert_range_valid(visible, count);
        assert_range_valid(w.window_range(), count);
        for i in 0..count {
            let style = w.item_style(i).unwrap();
            if intersects(style.top, style.height, scroll_top, viewport_height) {
                assert!(visible.is_some_and(|r| r.contains(i)), "cell {i} missing");
            }
        }

        let mounted = indexes_of(&w);
        assert!(mounted.windows(2).all(|p| p[0] < p[1]));
        if let Some(r) = w.window_range() {
            assert_eq!(mounted, r.iter().collect::<Vec<_>>());
        }
    }
}

// ---------------------------------------------------------------------------------------------
// End-reached detection

#[test]
fn end_reached_fires_once_per_excursion_past_the_threshold() {
    let mut w = fixed(100, 10.0, 100.0, 0);
    let mut d = EndReachedDetector::new(0.8);
    let mut fired = 0usize;
    let mut scroll = |w: &mut FixedWindow, d: &mut EndReachedDetector, top: f64| {
        w.set_scroll_top(top);
        if d.evaluate(w.scroll_top(), w.viewport_height(), w.total_height()) {
            fired += 1;
        }
    };

    // 0.85
    scroll(&mut w, &mut d, 750.0);
    assert_eq!(d.state(), EndReachedState::Fired);
    for top in [760.0, 800.0, 850.0, 900.0] {
        scroll(&mut w, &mut d, top);
    }
    // 0.5, then 0.85 again
    scroll(&mut w, &mut d, 400.0);
    assert!(d.is_armed());
    scroll(&mut w, &mut d, 750.0);
    assert_eq!(fired, 2);
}

#[test]
fn end_reached_random_walk_fires_only_on_upward_crossings() {
    let mut rng = Lcg::new(42);
    let mut w = variable(500, 30.0, 400.0, 2);
    let mut d = EndReachedDetector::new(0.9);
    let mut above = false;
    for _ in 0..2_000 {
        let max = w.max_scroll_top() as u64;
        w.set_scroll_top(rng.gen_range_u64(0, max + 1) as f64);
        let percent = w.scroll_percent().unwrap();
        let fired = d.evaluate(w.scroll_top(), w.viewport_height(), w.total_height());
        let now_above = percent >= 0.9;
        assert_eq!(fired, now_above && !above);
        above = now_above;
    }
}

// ---------------------------------------------------------------------------------------------
// Configuration

#[cfg(feature = "serde")]
#[test]
fn options_deserialize_from_host_config() {
    let json = r#"{
        "count": 7,
        "item_width": 200.0,
        "item_height": 100.0,
        "gap": 10.0,
        "column_count": null,
        "container_width": 620.0,
        "viewport_height": 400.0,
        "overscan": 2,
        "initial_scroll_top": 0.0
    }"#;
    let options: GridWindowOptions = serde_json::from_str(json).unwrap();
    assert_eq!(options.validate(), Ok(()));
    assert_eq!(GridWindow::new(options).column_count(), 2);

    let frame = FrameState {
        scroll_top: 12.5,
        viewport_height: 300.0,
    };
    let text = serde_json::to_string(&frame).unwrap();
    assert_eq!(serde_json::from_str::<FrameState>(&text).unwrap(), frame);
}
