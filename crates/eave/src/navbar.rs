//! Soft navigation-bar visibility heuristics.
//!
//! A zero bottom inset on an all-screen device is ambiguous: the
//! device may have no navigation bar, or the bar may be minimized by
//! gesture navigation and still owed space. There is no unified OS API
//! for this, so the answer comes from per-brand settings keys and,
//! failing that, raw display geometry.

use crate::host::{Host, api};
use crate::vendor::{SettingsTable, VendorRegistry};

/// Height discrepancies below this are treated as rounding noise.
const HEIGHT_TOLERANCE: f32 = 0.01;

/// The platform's navigation bar height resource, or 0 when missing.
pub fn navigation_bar_height(host: &dyn Host) -> f32 {
    host.dimension("navigation_bar_height")
        .unwrap_or(0.0)
        .max(0.0)
}

/// Is a soft navigation bar currently shown?
///
/// Only consulted when the OS-reported bottom inset is zero on an
/// all-screen device. Reads the brand's settings toggle where one
/// exists; a stored value of 0 means the bar is not minimized, i.e.
/// shown. Any settings failure degrades to "not shown".
pub fn is_soft_navigation_bar_shown(
    host: &dyn Host,
    registry: &VendorRegistry,
    top_inset: f32,
) -> bool {
    let nav = registry.nav_setting(host.brand());
    if host.api_level() < api::LOLLIPOP {
        return host
            .system_setting(nav.key, 0)
            .map(|v| v == 0)
            .unwrap_or(false);
    }
    match nav.table {
        SettingsTable::Secure => host
            .secure_setting(nav.key, 0)
            .map(|v| v == 0)
            .unwrap_or(false),
        // Brands whose toggle lives in the system table are not
        // readable there on modern platforms; fall back to geometry.
        SettingsTable::System => has_navigation_bar(host, top_inset),
    }
}

/// Geometric fallback: infer the bar from the difference between the
/// real display size and the size currently reported to the app.
fn has_navigation_bar(host: &dyn Host, top_inset: f32) -> bool {
    let Some(real) = host.real_display_size() else {
        return false;
    };
    let Some(reported) = host.display_size() else {
        return false;
    };
    // Some skins in gesture mode report a display height that,
    // together with the bar height, exceeds the physical height.
    // Inconsistent data: assume no bar.
    if reported.h + navigation_bar_height(host) > real.h {
        return false;
    }
    real.w - reported.w > 0.0
        || (real.h - reported.h > 0.0
            && (real.h - reported.h - top_inset).abs() > HEIGHT_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use geom::Expanse;

    use super::*;
    use crate::tutils::FakeHost;

    fn registry() -> VendorRegistry {
        VendorRegistry::standard()
    }

    #[test]
    fn vivo_secure_setting_zero_means_shown() {
        let host = FakeHost::new()
            .brand("vivo")
            .secure_setting("navigation_gesture_on", 0);
        assert!(is_soft_navigation_bar_shown(&host, &registry(), 0.0));
    }

    #[test]
    fn vivo_secure_setting_one_means_hidden() {
        let host = FakeHost::new()
            .brand("vivo")
            .secure_setting("navigation_gesture_on", 1);
        assert!(!is_soft_navigation_bar_shown(&host, &registry(), 0.0));
    }

    #[test]
    fn oppo_reads_secure_table() {
        let host = FakeHost::new()
            .brand("OPPO")
            .secure_setting("hide_navigationbar_enable", 1);
        assert!(!is_soft_navigation_bar_shown(&host, &registry(), 0.0));
    }

    #[test]
    fn legacy_platform_reads_system_table() {
        let host = FakeHost::new()
            .api_level(19)
            .brand("vivo")
            .system_setting("navigation_gesture_on", 0);
        assert!(is_soft_navigation_bar_shown(&host, &registry(), 0.0));
    }

    #[test]
    fn settings_failure_means_not_shown() {
        // No settings configured: the fake reports lookup failure.
        let host = FakeHost::new().brand("oppo").failing_settings();
        assert!(!is_soft_navigation_bar_shown(&host, &registry(), 0.0));
    }

    #[test]
    fn geometric_height_discrepancy_means_shown() {
        let host = FakeHost::new()
            .brand("huawei")
            .real_display(Expanse::new(1080.0, 2340.0))
            .display(Expanse::new(1080.0, 2174.0))
            .dimension("navigation_bar_height", 126.0);
        // 2340 - 2174 - 63 = 103 > 0.01
        assert!(is_soft_navigation_bar_shown(&host, &registry(), 63.0));
    }

    #[test]
    fn geometric_discrepancy_explained_by_top_inset() {
        let host = FakeHost::new()
            .brand("huawei")
            .real_display(Expanse::new(1080.0, 2340.0))
            .display(Expanse::new(1080.0, 2277.0))
            .dimension("navigation_bar_height", 0.0);
        // 2340 - 2277 - 63 = 0: the status bar accounts for it all.
        assert!(!is_soft_navigation_bar_shown(&host, &registry(), 63.0));
    }

    #[test]
    fn geometric_width_discrepancy_means_shown() {
        let host = FakeHost::new()
            .brand("unknown")
            .real_display(Expanse::new(1080.0, 2340.0))
            .display(Expanse::new(954.0, 2340.0));
        assert!(is_soft_navigation_bar_shown(&host, &registry(), 0.0));
    }

    #[test]
    fn inconsistent_vendor_data_means_not_shown() {
        let host = FakeHost::new()
            .brand("huawei")
            .real_display(Expanse::new(1080.0, 2340.0))
            .display(Expanse::new(1080.0, 2340.0))
            .dimension("navigation_bar_height", 126.0);
        // reported + bar exceeds the physical height.
        assert!(!is_soft_navigation_bar_shown(&host, &registry(), 0.0));
    }

    #[test]
    fn missing_display_metrics_means_not_shown() {
        let host = FakeHost::new().brand("huawei");
        assert!(!is_soft_navigation_bar_shown(&host, &registry(), 0.0));
    }

    #[test]
    fn bar_height_resource() {
        let host = FakeHost::new().dimension("navigation_bar_height", 126.0);
        assert_eq!(navigation_bar_height(&host), 126.0);
        assert_eq!(navigation_bar_height(&FakeHost::new()), 0.0);
    }
}
