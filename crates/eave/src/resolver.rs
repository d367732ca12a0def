//! Safe-area inset composition and per-view clipping.

use geom::{EdgeInsets, Rect};

use crate::classify::DeviceClass;
use crate::host::{Host, View, Window, api};
use crate::vendor::VendorRegistry;
use crate::{navbar, notch};

/// The safe-area resolver. Stateless apart from the memoized device
/// classification; construct one per process and query it on every
/// layout pass.
#[derive(Default)]
pub struct SafeArea {
    device: DeviceClass,
    registry: VendorRegistry,
}

impl SafeArea {
    /// A resolver with the standard vendor registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver with a custom vendor registry.
    pub fn with_registry(registry: VendorRegistry) -> Self {
        Self {
            device: DeviceClass::new(),
            registry,
        }
    }

    /// The safe-area insets of `view`, clipped to the part of the
    /// window it occupies.
    ///
    /// Returns `None` while the view is unmeasured or the window has
    /// not produced insets yet; callers retry on the next layout pass.
    /// A view fully inside the window's safe interior reports all-zero
    /// insets; a view overlapping a window edge reports only the
    /// overlapping portion. Every returned component is >= 0.
    pub fn safe_area_insets(
        &self,
        host: &dyn Host,
        window: &dyn Window,
        view: &dyn View,
    ) -> Option<EdgeInsets> {
        // The view has not been laid out yet.
        if view.size().h == 0.0 {
            return None;
        }
        let root = self.root_window_insets(host, window)?;

        // Reduce each root inset by however much of that edge lies
        // outside the view's visible rectangle.
        let win = window.size();
        let visible = view.global_visible_rect();
        let size = view.size();
        Some(
            EdgeInsets {
                top: root.top - visible.tl.y,
                left: root.left - visible.tl.x,
                bottom: (visible.tl.y + size.h - win.h).min(0.0) + root.bottom,
                right: (visible.tl.x + size.w - win.w).min(0.0) + root.right,
            }
            .clamp_non_negative(),
        )
    }

    /// Window-level insets before per-view clipping.
    fn root_window_insets(&self, host: &dyn Host, window: &dyn Window) -> Option<EdgeInsets> {
        if host.api_level() >= api::MARSHMALLOW {
            let wi = window.insets()?;
            let mut top = wi.system_window.top;
            if top <= 0.0 {
                top = notch::notch_height(host, window, &self.registry);
            }
            // The system bottom inset includes the soft keyboard, the
            // stable one does not. Take the min so the keyboard never
            // leaks into the safe area while hidden-bar devices still
            // resolve correctly.
            let mut bottom = wi.system_window.bottom.min(wi.stable.bottom);
            if bottom <= 0.0 && self.device.is_all_screen(host) {
                bottom = self.synthesized_bottom(host, top, bottom);
            }
            Some(EdgeInsets {
                top,
                right: wi.system_window.right,
                bottom,
                left: wi.system_window.left,
            })
        } else {
            // Pre-insets-API path: derive everything from the visible
            // display frame against the root view's bounds.
            let frame = window.visible_display_frame();
            let win = window.size();
            let mut top = frame.tl.y;
            if top <= 0.0 {
                top = notch::notch_height(host, window, &self.registry);
            }
            let mut bottom = win.h - frame.bottom();
            if bottom <= 0.0 && self.device.is_all_screen(host) {
                // Half the top inset keeps content from sitting flush
                // against the bottom edge when nothing better is known.
                bottom = self.synthesized_bottom(host, top, top / 2.0);
            }
            Some(EdgeInsets {
                top,
                right: win.w - frame.right(),
                bottom,
                left: frame.tl.x,
            })
        }
    }

    /// Bottom inset for an all-screen device whose reported bottom is
    /// zero: the navigation bar height when the bar turns out to be
    /// shown, otherwise `fallback`.
    fn synthesized_bottom(&self, host: &dyn Host, top: f32, fallback: f32) -> f32 {
        if navbar::is_soft_navigation_bar_shown(host, &self.registry, top) {
            let nav = navbar::navigation_bar_height(host);
            if nav > 0.0 {
                return nav;
            }
        }
        fallback
    }

    /// The drawing rectangle of `view` translated into the root
    /// coordinate space of `window`.
    ///
    /// Returns `None` when the view is already detached (unmount race)
    /// or is not a descendant of the window's root. Both are expected,
    /// recoverable conditions.
    pub fn frame(&self, window: &dyn Window, view: &dyn View) -> Option<Rect> {
        if !view.has_parent() {
            return None;
        }
        let offset = match window.offset_descendant_rect(view, view.drawing_rect()) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("view frame translation failed: {e}");
                return None;
            }
        };
        let size = view.size();
        Some(Rect {
            tl: offset.tl,
            w: size.w,
            h: size.h,
        })
    }
}
