use std::time::Instant;

use translate_core::autosize::{fit_height, safety_margin, InputGeometry};
use translate_core::Debouncer;

use super::constants::{INPUT_MIN_HEIGHT, RESIZE_DEBOUNCE};

/// Tracks the height of the auto-growing source input.
///
/// A fit is requested on mount and on every edit; window resizes request
/// one through a debouncer. The next laid-out frame answers the request.
pub struct InputSizer {
    height: Option<f32>,
    needs_fit: bool,
    resize: Debouncer,
    last_screen: Option<egui::Rect>,
}

impl Default for InputSizer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSizer {
    pub fn new() -> Self {
        Self {
            height: None,
            needs_fit: true,
            resize: Debouncer::new(RESIZE_DEBOUNCE).with_max_wait(RESIZE_DEBOUNCE),
            last_screen: None,
        }
    }

    pub fn request_fit(&mut self) {
        self.needs_fit = true;
    }

    /// Feeds the current window rect; returns when to repaint for a pending resize fit.
    pub fn observe_window(&mut self, screen: egui::Rect, now: Instant) -> Option<Instant> {
        if let Some(previous) = self.last_screen {
            if previous != screen {
                self.resize.call(now);
            }
        }
        self.last_screen = Some(screen);

        if self.resize.poll(now) {
            self.needs_fit = true;
        }
        self.resize.deadline()
    }

    /// Height to lay the input out with this frame.
    pub fn height(&self, fallback: f32) -> f32 {
        self.height.unwrap_or_else(|| fallback.max(INPUT_MIN_HEIGHT))
    }

    /// Applies a pending fit using this frame's geometry; returns whether the height changed.
    pub fn fit(&mut self, geometry: &InputGeometry) -> bool {
        if !self.needs_fit {
            return false;
        }
        self.needs_fit = false;
        let mut fitted = fit_height(geometry).max(INPUT_MIN_HEIGHT);
        if let Some(ceiling) = height_ceiling(geometry) {
            fitted = fitted.min(ceiling);
        }
        let changed = self.height.map_or(true, |height| (height - fitted).abs() > 0.5);
        self.height = Some(fitted);
        changed
    }

    /// Forgets window tracking so the next mount fits from scratch.
    pub fn reset(&mut self) {
        self.resize.cancel();
        self.last_screen = None;
        self.needs_fit = true;
    }
}

/// Tallest height that keeps the input a safety margin above its container's bottom.
fn height_ceiling(geometry: &InputGeometry) -> Option<f32> {
    let container_bottom = geometry.container_bottom?;
    if geometry.input_bottom == 0.0 || container_bottom == 0.0 {
        return None;
    }
    let margin = safety_margin(geometry.line_height);
    Some((container_bottom - margin - geometry.input_top).max(0.0))
}
