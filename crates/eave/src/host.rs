//! Read-only trait seams over the host GUI framework.
//!
//! The resolver never mutates or retains anything it reaches through
//! these traits; every handle is borrowed for a single query. All
//! accessors are fallible-soft: a missing service, resource or vendor
//! API answers with `None`/[`Probe::Unsupported`] and the caller moves
//! on to its next strategy.

use geom::{EdgeInsets, Expanse, Rect};

use crate::Result;

/// Android API level constants the resolution logic branches on.
pub mod api {
    /// First level where real display metrics are available.
    pub const JELLY_BEAN_MR1: u32 = 17;
    /// First level where the secure settings table is consulted and
    /// where an all-screen device is possible at all.
    pub const LOLLIPOP: u32 = 21;
    /// First level with the root window insets API.
    pub const MARSHMALLOW: u32 = 23;
    /// First level with the display cutout API.
    pub const P: u32 = 28;
}

/// Outcome of a single best-effort capability probe.
///
/// This is the explicit alternative to exception-driven control flow:
/// each fallback stage answers with a value or with `Unsupported`, and
/// `Unsupported` is the normal case on devices without the probed
/// vendor API, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe<T> {
    /// The probe succeeded and produced a value.
    Val(T),
    /// The capability is absent on this device.
    Unsupported,
}

impl<T> Probe<T> {
    /// Convert to an `Option`, mapping `Unsupported` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Probe::Val(v) => Some(v),
            Probe::Unsupported => None,
        }
    }

    /// The probed value, or `default` when unsupported.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Probe::Val(v) => v,
            Probe::Unsupported => default,
        }
    }

    /// True if the capability is absent.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Probe::Unsupported)
    }
}

impl<T> From<Option<T>> for Probe<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Probe::Val(v),
            None => Probe::Unsupported,
        }
    }
}

/// Vendor boolean capabilities a host may be able to bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorFlag {
    /// Huawei's notch query (`HwNotchSizeUtil.hasNotchInScreen`).
    HuaweiHasNotch,
    /// Vivo's display feature query for a notched screen
    /// (`FtFeature.isFeatureSupport(0x20)`).
    VivoNotchedDisplay,
}

/// Vendor numeric capabilities a host may be able to bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorMetric {
    /// Height in pixels of the Huawei notch
    /// (`HwNotchSizeUtil.getNotchSize()[1]`).
    HuaweiNotchHeight,
}

/// Read-only access to device-level state: platform version, brand,
/// display geometry, resource tables and settings tables.
pub trait Host {
    /// The platform API level.
    fn api_level(&self) -> u32;

    /// The device brand string. Hosts fall back to the manufacturer
    /// string when the brand is empty.
    fn brand(&self) -> &str;

    /// Display density: device pixels per density-independent pixel.
    fn density(&self) -> f32;

    /// The real, non-letterboxed display size. `None` when the display
    /// service is unavailable or the platform predates real metrics.
    fn real_display_size(&self) -> Option<Expanse>;

    /// The display size currently reported to the app, which may be
    /// letterboxed by system UI.
    fn display_size(&self) -> Option<Expanse>;

    /// Look up a named public dimension resource, in device pixels.
    fn dimension(&self, name: &str) -> Option<f32>;

    /// Look up a named dimension in the private platform resource
    /// table. Last-ditch path when the public resource is missing.
    fn internal_dimension(&self, name: &str) -> Option<f32>;

    /// Does the platform declare the named system feature?
    fn has_system_feature(&self, name: &str) -> bool;

    /// Read the legacy system settings table. `None` when the lookup
    /// itself fails, `Some(default)` when the key is merely unset.
    fn system_setting(&self, key: &str, default: i32) -> Option<i32>;

    /// Read the secure settings table, with the same conventions as
    /// [`Host::system_setting`].
    fn secure_setting(&self, key: &str, default: i32) -> Option<i32>;

    /// Query a vendor boolean capability.
    fn vendor_flag(&self, flag: VendorFlag) -> Probe<bool>;

    /// Query a vendor numeric capability.
    fn vendor_metric(&self, metric: VendorMetric) -> Probe<f32>;
}

/// Insets as reported by the modern window insets API.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowInsets {
    /// Insets of the system windows (status bar, navigation bar, and
    /// the soft keyboard when open).
    pub system_window: EdgeInsets,
    /// Stable insets, which exclude transient overlays such as the
    /// soft keyboard.
    pub stable: EdgeInsets,
    /// The display cutout description, when the platform reports one.
    /// `None` from a platform with the cutout API means there is
    /// authoritatively no cutout.
    pub cutout: Option<CutoutInfo>,
}

/// Description of a display cutout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutInfo {
    /// Insets content must keep from each edge to avoid the cutout.
    pub safe: EdgeInsets,
}

/// Read-only access to the root window of a view hierarchy.
pub trait Window {
    /// The size of the window's root view.
    fn size(&self) -> Expanse;

    /// The current root window insets. `None` before the window is
    /// attached or on platforms predating the insets API.
    fn insets(&self) -> Option<WindowInsets>;

    /// The portion of the display this window occupies, excluding
    /// system chrome. Legacy substitute for [`Window::insets`].
    fn visible_display_frame(&self) -> Rect;

    /// Translate `rect` from `view`'s coordinate space into this
    /// window's root coordinate space. Fails when the view is not
    /// actually a descendant of the root, which can happen transiently
    /// while views unmount.
    fn offset_descendant_rect(&self, view: &dyn View, rect: Rect) -> Result<Rect>;
}

/// Read-only access to a single view in the hierarchy.
pub trait View {
    /// The view's measured size. A zero height means the view has not
    /// been laid out yet.
    fn size(&self) -> Expanse;

    /// The visible portion of the view, in window coordinates.
    fn global_visible_rect(&self) -> Rect;

    /// Whether the view is still attached to a parent.
    fn has_parent(&self) -> bool;

    /// The view's drawing rectangle in its own coordinate space.
    fn drawing_rect(&self) -> Rect;
}
