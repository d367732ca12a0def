use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use geom::{Expanse, Point, Rect};

use crate::error::Error;
use crate::host::{
    Host, Probe, VendorFlag, VendorMetric, View, Window, WindowInsets,
};
use crate::{Result, host::api};

/// A configurable [`Host`] fake. Builder methods consume and return
/// `self` so tests read as a single chained expression. Everything not
/// configured behaves like an absent capability: lookups answer `None`
/// or unsupported, features are undeclared, settings return their
/// defaults.
///
/// Settings-table reads are counted so tests can assert that the
/// navigation-bar heuristic was never consulted.
pub struct FakeHost {
    api_level: u32,
    brand: String,
    density: f32,
    real_display: Option<Expanse>,
    display: Option<Expanse>,
    dimensions: HashMap<String, f32>,
    internal_dimensions: HashMap<String, f32>,
    features: HashSet<String>,
    system_settings: HashMap<String, i32>,
    secure_settings: HashMap<String, i32>,
    vendor_flags: HashMap<VendorFlag, bool>,
    vendor_metrics: HashMap<VendorMetric, f32>,
    settings_fail: bool,
    settings_reads: Cell<u32>,
}

impl FakeHost {
    /// A modern, vendor-free device with nothing configured.
    pub fn new() -> Self {
        Self {
            api_level: api::P,
            brand: String::new(),
            density: 1.0,
            real_display: None,
            display: None,
            dimensions: HashMap::new(),
            internal_dimensions: HashMap::new(),
            features: HashSet::new(),
            system_settings: HashMap::new(),
            secure_settings: HashMap::new(),
            vendor_flags: HashMap::new(),
            vendor_metrics: HashMap::new(),
            settings_fail: false,
            settings_reads: Cell::new(0),
        }
    }

    /// Set the platform API level.
    pub fn api_level(mut self, level: u32) -> Self {
        self.api_level = level;
        self
    }

    /// Set the device brand string.
    pub fn brand(mut self, brand: &str) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the display density.
    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Report a real display size.
    pub fn real_display(mut self, size: Expanse) -> Self {
        self.real_display = Some(size);
        self
    }

    /// Report an app-visible display size.
    pub fn display(mut self, size: Expanse) -> Self {
        self.display = Some(size);
        self
    }

    /// Define a public dimension resource.
    pub fn dimension(mut self, name: &str, px: f32) -> Self {
        self.dimensions.insert(name.into(), px);
        self
    }

    /// Define a private platform dimension resource.
    pub fn internal_dimension(mut self, name: &str, px: f32) -> Self {
        self.internal_dimensions.insert(name.into(), px);
        self
    }

    /// Declare a system feature.
    pub fn feature(mut self, name: &str) -> Self {
        self.features.insert(name.into());
        self
    }

    /// Store a value in the system settings table.
    pub fn system_setting(mut self, key: &str, value: i32) -> Self {
        self.system_settings.insert(key.into(), value);
        self
    }

    /// Store a value in the secure settings table.
    pub fn secure_setting(mut self, key: &str, value: i32) -> Self {
        self.secure_settings.insert(key.into(), value);
        self
    }

    /// Bridge a vendor boolean capability.
    pub fn vendor_flag(mut self, flag: VendorFlag, value: bool) -> Self {
        self.vendor_flags.insert(flag, value);
        self
    }

    /// Bridge a vendor numeric capability.
    pub fn vendor_metric(mut self, metric: VendorMetric, value: f32) -> Self {
        self.vendor_metrics.insert(metric, value);
        self
    }

    /// Make every settings lookup fail, as a thrown platform error
    /// would.
    pub fn failing_settings(mut self) -> Self {
        self.settings_fail = true;
        self
    }

    /// How many settings-table reads have happened.
    pub fn settings_reads(&self) -> u32 {
        self.settings_reads.get()
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for FakeHost {
    fn api_level(&self) -> u32 {
        self.api_level
    }

    fn brand(&self) -> &str {
        &self.brand
    }

    fn density(&self) -> f32 {
        self.density
    }

    fn real_display_size(&self) -> Option<Expanse> {
        self.real_display
    }

    fn display_size(&self) -> Option<Expanse> {
        self.display
    }

    fn dimension(&self, name: &str) -> Option<f32> {
        self.dimensions.get(name).copied()
    }

    fn internal_dimension(&self, name: &str) -> Option<f32> {
        self.internal_dimensions.get(name).copied()
    }

    fn has_system_feature(&self, name: &str) -> bool {
        self.features.contains(name)
    }

    fn system_setting(&self, key: &str, default: i32) -> Option<i32> {
        self.settings_reads.set(self.settings_reads.get() + 1);
        if self.settings_fail {
            return None;
        }
        Some(self.system_settings.get(key).copied().unwrap_or(default))
    }

    fn secure_setting(&self, key: &str, default: i32) -> Option<i32> {
        self.settings_reads.set(self.settings_reads.get() + 1);
        if self.settings_fail {
            return None;
        }
        Some(self.secure_settings.get(key).copied().unwrap_or(default))
    }

    fn vendor_flag(&self, flag: VendorFlag) -> Probe<bool> {
        self.vendor_flags.get(&flag).copied().into()
    }

    fn vendor_metric(&self, metric: VendorMetric) -> Probe<f32> {
        self.vendor_metrics.get(&metric).copied().into()
    }
}

/// A configurable [`Window`] fake.
///
/// Descendant rect translation is modeled as a fixed offset: windows
/// with no translation configured reject every view, the way the real
/// coordinate translation rejects views outside the hierarchy.
pub struct FakeWindow {
    size: Expanse,
    insets: Option<WindowInsets>,
    visible_frame: Rect,
    translation: Option<Point>,
}

impl FakeWindow {
    /// An unattached window with no insets and a zero frame.
    pub fn new() -> Self {
        Self {
            size: Expanse::new(0.0, 0.0),
            insets: None,
            visible_frame: Rect::zero(),
            translation: None,
        }
    }

    /// Set the root view size.
    pub fn size(mut self, size: Expanse) -> Self {
        self.size = size;
        self
    }

    /// Report window insets.
    pub fn insets(mut self, insets: WindowInsets) -> Self {
        self.insets = Some(insets);
        self
    }

    /// Set the legacy visible display frame.
    pub fn visible_frame(mut self, frame: Rect) -> Self {
        self.visible_frame = frame;
        self
    }

    /// Make descendant translation succeed with the given offset.
    pub fn translation(mut self, offset: Point) -> Self {
        self.translation = Some(offset);
        self
    }
}

impl Default for FakeWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl Window for FakeWindow {
    fn size(&self) -> Expanse {
        self.size
    }

    fn insets(&self) -> Option<WindowInsets> {
        self.insets
    }

    fn visible_display_frame(&self) -> Rect {
        self.visible_frame
    }

    fn offset_descendant_rect(&self, _view: &dyn View, rect: Rect) -> Result<Rect> {
        match self.translation {
            Some(offset) => Ok(rect.translate(offset.x, offset.y)),
            None => Err(Error::Geometry(
                "view is not a descendant of this window".into(),
            )),
        }
    }
}

/// A configurable [`View`] fake.
pub struct FakeView {
    size: Expanse,
    visible_rect: Rect,
    drawing_rect: Rect,
    has_parent: bool,
}

impl FakeView {
    /// An attached, zero-sized view.
    pub fn new() -> Self {
        Self {
            size: Expanse::new(0.0, 0.0),
            visible_rect: Rect::zero(),
            drawing_rect: Rect::zero(),
            has_parent: true,
        }
    }

    /// Set the measured size.
    pub fn size(mut self, size: Expanse) -> Self {
        self.size = size;
        self
    }

    /// Set the globally visible rectangle, in window coordinates.
    pub fn visible_rect(mut self, rect: Rect) -> Self {
        self.visible_rect = rect;
        self
    }

    /// Set the drawing rectangle, in the view's own coordinates.
    pub fn drawing_rect(mut self, rect: Rect) -> Self {
        self.drawing_rect = rect;
        self
    }

    /// Detach the view from its parent.
    pub fn detached(mut self) -> Self {
        self.has_parent = false;
        self
    }
}

impl Default for FakeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for FakeView {
    fn size(&self) -> Expanse {
        self.size
    }

    fn global_visible_rect(&self) -> Rect {
        self.visible_rect
    }

    fn has_parent(&self) -> bool {
        self.has_parent
    }

    fn drawing_rect(&self) -> Rect {
        self.drawing_rect
    }
}
