//! Vendor adapter registry.
//!
//! OEM skins expose notch and navigation-bar information through
//! mutually incompatible, undocumented channels. Each channel is
//! wrapped in a [`VendorAdapter`]; the [`VendorRegistry`] holds them in
//! probe order and answers two questions on behalf of whichever vendor
//! can: "does this device have a notch, and how tall is it?" and
//! "which settings entry records the navigation-bar mode for this
//! brand?". A device without a given vendor's API simply answers
//! unsupported and the registry moves on.

use crate::host::{Host, Probe, VendorFlag, VendorMetric};

/// Which settings table a navigation-bar toggle lives in on modern
/// platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTable {
    /// The legacy system table.
    System,
    /// The secure table.
    Secure,
}

/// The settings entry that records a brand's navigation-bar mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSetting {
    /// Settings key to read.
    pub key: &'static str,
    /// Table the key lives in on modern platforms. Legacy platforms
    /// read everything from the system table.
    pub table: SettingsTable,
}

/// The fallback when no adapter claims the device's brand.
pub const DEFAULT_NAV_SETTING: NavSetting = NavSetting {
    key: "navigationbar_is_min",
    table: SettingsTable::System,
};

/// A vendor's answer to the notch question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotchProbe {
    /// The device has a notch of the given height in pixels. A height
    /// of zero is definitive: the vendor answered, probing stops.
    Height(f32),
    /// The device has a notch but the vendor API does not report its
    /// size; callers estimate from the status bar height.
    Present,
    /// No answer from this vendor's APIs.
    Unsupported,
}

/// A single vendor's capability provider.
pub trait VendorAdapter {
    /// Adapter name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Does this adapter cover the given brand? `brand` is already
    /// lowercased by the registry.
    fn matches(&self, brand: &str) -> bool;

    /// The settings entry holding this brand's navigation-bar toggle.
    fn nav_setting(&self) -> NavSetting;

    /// Probe for a display notch.
    fn probe_notch(&self, _host: &dyn Host) -> NotchProbe {
        NotchProbe::Unsupported
    }
}

/// Xiaomi declares the notch through a public dimension resource.
struct Xiaomi;

impl VendorAdapter for Xiaomi {
    fn name(&self) -> &'static str {
        "xiaomi"
    }

    fn matches(&self, brand: &str) -> bool {
        brand.contains("xiaomi")
    }

    fn nav_setting(&self) -> NavSetting {
        NavSetting {
            key: "force_fsg_nav_bar",
            table: SettingsTable::System,
        }
    }

    fn probe_notch(&self, host: &dyn Host) -> NotchProbe {
        match host.dimension("notch_height") {
            Some(h) if h > 0.0 => NotchProbe::Height(h),
            _ => NotchProbe::Unsupported,
        }
    }
}

/// Huawei answers both the presence and the size of the notch through
/// its own utility API, bridged by the host.
struct Huawei;

impl VendorAdapter for Huawei {
    fn name(&self) -> &'static str {
        "huawei"
    }

    fn matches(&self, brand: &str) -> bool {
        brand.contains("huawei")
    }

    fn nav_setting(&self) -> NavSetting {
        NavSetting {
            key: "navigationbar_is_min",
            table: SettingsTable::System,
        }
    }

    fn probe_notch(&self, host: &dyn Host) -> NotchProbe {
        match host.vendor_flag(VendorFlag::HuaweiHasNotch) {
            Probe::Val(true) => {
                // The size query can be absent even when the presence
                // query works; a zero height is then the vendor's final
                // word, matching the OEM API's own fallback.
                NotchProbe::Height(
                    host.vendor_metric(VendorMetric::HuaweiNotchHeight)
                        .unwrap_or(0.0),
                )
            }
            Probe::Val(false) => NotchProbe::Unsupported,
            Probe::Unsupported => {
                tracing::debug!("huawei notch bridge unsupported on this host");
                NotchProbe::Unsupported
            }
        }
    }
}

/// Oppo flags notched screens through a system feature declaration and
/// never reports a size.
struct Oppo;

impl VendorAdapter for Oppo {
    fn name(&self) -> &'static str {
        "oppo"
    }

    fn matches(&self, brand: &str) -> bool {
        brand.contains("oppo")
    }

    fn nav_setting(&self) -> NavSetting {
        NavSetting {
            key: "hide_navigationbar_enable",
            table: SettingsTable::Secure,
        }
    }

    fn probe_notch(&self, host: &dyn Host) -> NotchProbe {
        if host.has_system_feature("com.oppo.feature.screen.heteromorphism") {
            NotchProbe::Present
        } else {
            NotchProbe::Unsupported
        }
    }
}

/// Vivo flags notched screens through a feature query bridged by the
/// host and never reports a size.
struct Vivo;

impl VendorAdapter for Vivo {
    fn name(&self) -> &'static str {
        "vivo"
    }

    fn matches(&self, brand: &str) -> bool {
        brand.contains("vivo")
    }

    fn nav_setting(&self) -> NavSetting {
        NavSetting {
            key: "navigation_gesture_on",
            table: SettingsTable::Secure,
        }
    }

    fn probe_notch(&self, host: &dyn Host) -> NotchProbe {
        match host.vendor_flag(VendorFlag::VivoNotchedDisplay) {
            Probe::Val(true) => NotchProbe::Present,
            _ => NotchProbe::Unsupported,
        }
    }
}

/// Ordered set of vendor adapters. Pluggable: hosts can append their
/// own adapters for skins the built-in set does not cover.
pub struct VendorRegistry {
    adapters: Vec<Box<dyn VendorAdapter>>,
}

impl VendorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// The built-in adapters, in notch probe order: the resource probe
    /// first, then the Huawei bridge, then the feature-flag vendors.
    pub fn standard() -> Self {
        let mut r = Self::new();
        r.register(Xiaomi);
        r.register(Huawei);
        r.register(Oppo);
        r.register(Vivo);
        r
    }

    /// Append an adapter. Probe order is registration order.
    pub fn register(&mut self, adapter: impl VendorAdapter + 'static) {
        self.adapters.push(Box::new(adapter));
    }

    /// Iterate adapters in probe order.
    pub fn adapters(&self) -> impl Iterator<Item = &dyn VendorAdapter> {
        self.adapters.iter().map(|a| a.as_ref())
    }

    /// The navigation-bar settings entry for a brand, matched
    /// case-insensitively by substring. Unknown brands get
    /// [`DEFAULT_NAV_SETTING`].
    pub fn nav_setting(&self, brand: &str) -> NavSetting {
        let brand = brand.to_lowercase();
        self.adapters
            .iter()
            .find(|a| a.matches(&brand))
            .map(|a| a.nav_setting())
            .unwrap_or(DEFAULT_NAV_SETTING)
    }
}

impl Default for VendorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
