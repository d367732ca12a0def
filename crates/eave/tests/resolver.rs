//! End-to-end scenarios driving the resolver through the public API,
//! one per device family the heuristics exist for.

use eave::{
    CutoutInfo, EdgeInsets, Expanse, Rect, SafeArea, WindowInsets,
    host::{VendorFlag, VendorMetric},
    tutils::{FakeHost, FakeView, FakeWindow},
};

fn full_window_view(w: f32, h: f32) -> FakeView {
    FakeView::new()
        .size(Expanse::new(w, h))
        .visible_rect(Rect::new(0.0, 0.0, w, h))
}

/// A current device: cutout API available, gesture navigation off,
/// everything reported through the window insets.
#[test]
fn modern_device_with_cutout() {
    let sa = SafeArea::new();
    let host = FakeHost::new().real_display(Expanse::new(1080.0, 2340.0));
    let window = FakeWindow::new()
        .size(Expanse::new(1080.0, 2340.0))
        .insets(WindowInsets {
            system_window: EdgeInsets::new(0.0, 0.0, 126.0, 0.0),
            stable: EdgeInsets::new(0.0, 0.0, 126.0, 0.0),
            cutout: Some(CutoutInfo {
                safe: EdgeInsets::new(77.0, 0.0, 0.0, 0.0),
            }),
        });
    let view = full_window_view(1080.0, 2340.0);
    assert_eq!(
        sa.safe_area_insets(&host, &window, &view),
        Some(EdgeInsets::new(77.0, 0.0, 126.0, 0.0))
    );
}

/// A Huawei device predating the cutout API: the notch comes from the
/// vendor bridge and the hidden bar from the geometric heuristic.
#[test]
fn pre_cutout_huawei_with_hidden_bar() {
    let sa = SafeArea::new();
    let host = FakeHost::new()
        .api_level(26)
        .brand("HUAWEI")
        .real_display(Expanse::new(1080.0, 2244.0))
        .display(Expanse::new(1080.0, 2112.0))
        .vendor_flag(VendorFlag::HuaweiHasNotch, true)
        .vendor_metric(VendorMetric::HuaweiNotchHeight, 84.0)
        .dimension("navigation_bar_height", 132.0);
    // 2244 / 1080 = 2.078: all-screen. Reported height leaves room for
    // the bar (2112 + 132 = 2244), and the 132px discrepancy is not
    // explained by the 84px notch, so the bar counts as shown.
    let window = FakeWindow::new()
        .size(Expanse::new(1080.0, 2244.0))
        .insets(WindowInsets {
            system_window: EdgeInsets::zero(),
            stable: EdgeInsets::zero(),
            cutout: None,
        });
    let view = full_window_view(1080.0, 2244.0);
    assert_eq!(
        sa.safe_area_insets(&host, &window, &view),
        Some(EdgeInsets::new(84.0, 0.0, 132.0, 0.0))
    );
}

/// A scrolled child view that pokes into the status-bar region only:
/// clipping trims the other three edges away.
#[test]
fn scrolled_child_overlaps_top_edge_only() {
    let sa = SafeArea::new();
    let host = FakeHost::new();
    let window = FakeWindow::new()
        .size(Expanse::new(1080.0, 2340.0))
        .insets(WindowInsets {
            system_window: EdgeInsets::new(63.0, 0.0, 126.0, 0.0),
            stable: EdgeInsets::new(63.0, 0.0, 126.0, 0.0),
            cutout: None,
        });
    let view = FakeView::new()
        .size(Expanse::new(1080.0, 400.0))
        .visible_rect(Rect::new(0.0, 10.0, 1080.0, 400.0));
    assert_eq!(
        sa.safe_area_insets(&host, &window, &view),
        Some(EdgeInsets::new(53.0, 0.0, 0.0, 0.0))
    );
}

/// The query pair works together: the frame places a child in root
/// coordinates, and insets for the same child clip accordingly.
#[test]
fn frame_and_insets_agree_on_placement() {
    let sa = SafeArea::new();
    let host = FakeHost::new();
    let window = FakeWindow::new()
        .size(Expanse::new(1000.0, 2000.0))
        .insets(WindowInsets {
            system_window: EdgeInsets::new(60.0, 0.0, 100.0, 0.0),
            stable: EdgeInsets::new(60.0, 0.0, 100.0, 0.0),
            cutout: None,
        })
        .translation(eave::Point::new(0.0, 1600.0));
    let view = FakeView::new()
        .size(Expanse::new(1000.0, 400.0))
        .drawing_rect(Rect::new(0.0, 0.0, 1000.0, 400.0))
        .visible_rect(Rect::new(0.0, 1600.0, 1000.0, 400.0));

    let frame = sa.frame(&window, &view).unwrap();
    assert_eq!(frame, Rect::new(0.0, 1600.0, 1000.0, 400.0));

    // The view touches the bottom edge of the window, so it inherits
    // the full bottom inset and nothing else.
    assert_eq!(
        sa.safe_area_insets(&host, &window, &view),
        Some(EdgeInsets::new(0.0, 0.0, 100.0, 0.0))
    );
}

/// Re-querying after a layout change recomputes from current state;
/// nothing per-view is cached.
#[test]
fn requery_reflects_new_layout() {
    let sa = SafeArea::new();
    let host = FakeHost::new();
    let window = FakeWindow::new()
        .size(Expanse::new(1000.0, 2000.0))
        .insets(WindowInsets {
            system_window: EdgeInsets::new(60.0, 0.0, 0.0, 0.0),
            stable: EdgeInsets::new(60.0, 0.0, 0.0, 0.0),
            cutout: None,
        });

    let unmeasured = FakeView::new().size(Expanse::new(1000.0, 0.0));
    assert_eq!(sa.safe_area_insets(&host, &window, &unmeasured), None);

    let laid_out = full_window_view(1000.0, 2000.0);
    assert_eq!(
        sa.safe_area_insets(&host, &window, &laid_out),
        Some(EdgeInsets::new(60.0, 0.0, 0.0, 0.0))
    );
}
