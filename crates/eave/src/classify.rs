//! All-screen device classification.

use std::sync::OnceLock;

use crate::host::{Host, api};

/// Aspect ratio (long side over short side) at or above which a device
/// is considered all-screen. Approximates bezel-less devices that are
/// likely to use gesture navigation instead of a three-button bar.
const ALL_SCREEN_RATIO: f32 = 1.97;

/// Memoized all-screen classification.
///
/// Display geometry is static for the life of the process, so the
/// answer is computed once and cached in a single-assignment cell.
/// Every outcome is cached, including the negative answer for
/// platforms too old to report real display sizes. Concurrent first
/// calls may race to compute; the computation is deterministic and
/// side-effect free, so whichever write wins is correct.
#[derive(Debug, Default)]
pub struct DeviceClass {
    cell: OnceLock<bool>,
}

impl DeviceClass {
    /// A classifier with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this an all-screen device? Best-effort: any failure to read
    /// display geometry classifies as not all-screen. Never errors.
    pub fn is_all_screen(&self, host: &dyn Host) -> bool {
        *self.cell.get_or_init(|| Self::compute(host))
    }

    fn compute(host: &dyn Host) -> bool {
        // Pre-Lollipop hardware always has a bezel.
        if host.api_level() < api::LOLLIPOP {
            return false;
        }
        let Some(size) = host.real_display_size() else {
            return false;
        };
        let p = size.portrait();
        if p.w <= 0.0 {
            return false;
        }
        p.h / p.w >= ALL_SCREEN_RATIO
    }
}

#[cfg(test)]
mod tests {
    use geom::Expanse;
    use proptest::prelude::*;

    use super::*;
    use crate::tutils::FakeHost;

    #[test]
    fn tall_device_is_all_screen() {
        // 2340 / 1080 = 2.167
        let host = FakeHost::new().real_display(Expanse::new(1080.0, 2340.0));
        assert!(DeviceClass::new().is_all_screen(&host));
    }

    #[test]
    fn squat_device_is_not() {
        // 1920 / 1080 = 1.778
        let host = FakeHost::new().real_display(Expanse::new(1080.0, 1920.0));
        assert!(!DeviceClass::new().is_all_screen(&host));
    }

    #[test]
    fn landscape_reading_is_normalized() {
        let host = FakeHost::new().real_display(Expanse::new(2340.0, 1080.0));
        assert!(DeviceClass::new().is_all_screen(&host));
    }

    #[test]
    fn old_platform_is_never_all_screen() {
        let host = FakeHost::new()
            .api_level(19)
            .real_display(Expanse::new(1080.0, 2340.0));
        assert!(!DeviceClass::new().is_all_screen(&host));
    }

    #[test]
    fn missing_display_service_degrades_to_false() {
        let host = FakeHost::new();
        assert!(!DeviceClass::new().is_all_screen(&host));
    }

    #[test]
    fn first_answer_is_cached() {
        let dc = DeviceClass::new();
        let tall = FakeHost::new().real_display(Expanse::new(1080.0, 2340.0));
        let squat = FakeHost::new().real_display(Expanse::new(1080.0, 1920.0));
        assert!(dc.is_all_screen(&tall));
        // Hypothetical input change after the first computation does
        // not alter the cached answer.
        assert!(dc.is_all_screen(&squat));
    }

    #[test]
    fn negative_outcome_is_cached_too() {
        let dc = DeviceClass::new();
        let old = FakeHost::new()
            .api_level(19)
            .real_display(Expanse::new(1080.0, 2340.0));
        let tall = FakeHost::new().real_display(Expanse::new(1080.0, 2340.0));
        assert!(!dc.is_all_screen(&old));
        assert!(!dc.is_all_screen(&tall));
    }

    proptest! {
        #[test]
        fn ratio_threshold(w in 1.0f32..5000.0, h in 1.0f32..5000.0) {
            let host = FakeHost::new().real_display(Expanse::new(w, h));
            let expect = h.max(w) / h.min(w) >= 1.97;
            prop_assert_eq!(DeviceClass::new().is_all_screen(&host), expect);
        }
    }
}
