//! Height fitting for the auto-growing source text input.
//!
//! The input grows with its content until it would come within a safety
//! margin of its container's bottom edge; from there it is clamped and
//! scrolls instead.

/// Margin used when the input's line height is unknown or unusable.
pub const DEFAULT_SAFETY_MARGIN: f32 = 30.0;

/// Extra space added on top of one line height.
pub const LINE_HEIGHT_PADDING: f32 = 4.0;

/// Geometry of the input and its container, in the same coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputGeometry {
    pub input_top: f32,
    /// Bottom edge as currently laid out; `0.0` means "not laid out yet".
    pub input_bottom: f32,
    /// Height the content needs without any clamping.
    pub content_height: f32,
    /// `None` when there is no container to fit into.
    pub container_bottom: Option<f32>,
    pub line_height: Option<f32>,
}

/// Parses a CSS-style pixel length such as `"24px"`.
pub fn parse_css_px(value: &str) -> Option<f32> {
    let number = value.trim().strip_suffix("px")?;
    number
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|px| px.is_finite())
}

/// One line height plus padding, or [`DEFAULT_SAFETY_MARGIN`].
pub fn safety_margin(line_height: Option<f32>) -> f32 {
    match line_height {
        Some(height) if height.is_finite() && height > 0.0 => height + LINE_HEIGHT_PADDING,
        _ => DEFAULT_SAFETY_MARGIN,
    }
}

/// Height the input should take for the given geometry.
pub fn fit_height(geometry: &InputGeometry) -> f32 {
    let natural = geometry.content_height.max(0.0);
    let Some(container_bottom) = geometry.container_bottom else {
        return natural;
    };
    if geometry.input_bottom == 0.0 || container_bottom == 0.0 {
        return natural;
    }

    let margin = safety_margin(geometry.line_height);
    if container_bottom - geometry.input_top - natural < margin {
        (container_bottom - margin - geometry.input_top).max(0.0)
    } else {
        natural
    }
}
