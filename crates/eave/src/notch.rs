//! Notch and display-cutout height detection.

use crate::host::{Host, Window, api};
use crate::vendor::{NotchProbe, VendorRegistry};

/// Status-bar estimate, in density-independent pixels, used when no
/// resource reports a height at all.
const DEFAULT_STATUS_BAR_DP: f32 = 25.0;

/// Height of the display notch in device pixels, or 0 when there is
/// none or nothing can be determined.
///
/// On platforms with the cutout API the answer is authoritative: a
/// window that reports insets without a cutout has no notch and vendor
/// probing is skipped. Older platforms fall back to the vendor adapter
/// chain, where the first definitive answer wins. Every stage is
/// fault-tolerant; nothing here ever errors.
pub fn notch_height(host: &dyn Host, window: &dyn Window, registry: &VendorRegistry) -> f32 {
    if host.api_level() >= api::P {
        return match window.insets() {
            Some(wi) => match wi.cutout {
                Some(c) => c.safe.top.max(0.0),
                None => 0.0,
            },
            None => 0.0,
        };
    }
    for adapter in registry.adapters() {
        match adapter.probe_notch(host) {
            NotchProbe::Height(h) => return h.max(0.0),
            NotchProbe::Present => return status_bar_estimate(host),
            NotchProbe::Unsupported => {}
        }
    }
    0.0
}

/// Generic notch-height estimate for vendors that only flag presence:
/// the public status bar resource, then the private platform table,
/// then a fixed 25dp converted to pixels.
fn status_bar_estimate(host: &dyn Host) -> f32 {
    if let Some(h) = host.dimension("status_bar_height") {
        return h.max(0.0);
    }
    if let Some(h) = host.internal_dimension("status_bar_height") {
        return h.max(0.0);
    }
    dip_to_px(host, DEFAULT_STATUS_BAR_DP)
}

/// Convert density-independent pixels to device pixels, rounding the
/// way the platform does.
fn dip_to_px(host: &dyn Host, dp: f32) -> f32 {
    (dp * host.density() + 0.5).floor()
}
