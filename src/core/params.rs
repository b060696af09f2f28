// Live visual parameters and the derived strings they compile to.
//
// Derived values (color strings, filter lists, class rule declarations)
// are pure functions of the current state, recomputed eagerly on every
// control change and never cached.

/// Interactive ripples get double the ambient border width, capped here.
pub const RIPPLE_BORDER_MAX_PX: f32 = 40.0;

/// Current value of every user-adjustable control. The live source of
/// truth is the control widgets themselves; this struct carries the
/// embedded defaults and the derivation functions.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterState {
    pub caustic_hue: f32,
    pub caustic_sat: f32,
    pub caustic_lit: f32,
    /// Rendered as border width, in px.
    pub caustic_strength: f32,
    pub caustic_blur_px: f32,
    pub bg_hue: f32,
    pub bg_sat: f32,
    pub bg_lit: f32,
    pub bg_brightness: f32,
    pub bg_contrast: f32,
    pub bg_opacity: f32,
}

impl Default for ParameterState {
    fn default() -> Self {
        Self {
            caustic_hue: 185.0,
            caustic_sat: 70.0,
            caustic_lit: 85.0,
            caustic_strength: 4.0,
            caustic_blur_px: 6.0,
            bg_hue: 200.0,
            bg_sat: 65.0,
            bg_lit: 35.0,
            bg_brightness: 1.0,
            bg_contrast: 1.0,
            bg_opacity: 1.0,
        }
    }
}

/// Compile separate hue/saturation/lightness controls into an `hsla()`
/// color string.
pub fn hsla(hue: f32, sat: f32, lit: f32, alpha: f32) -> String {
    format!("hsla({hue}, {sat}%, {lit}%, {alpha})")
}

impl ParameterState {
    pub fn caustic_color(&self) -> String {
        hsla(self.caustic_hue, self.caustic_sat, self.caustic_lit, 1.0)
    }

    pub fn background_color(&self) -> String {
        hsla(self.bg_hue, self.bg_sat, self.bg_lit, 1.0)
    }

    pub fn background_filter(&self) -> String {
        format!(
            "brightness({}) contrast({})",
            self.bg_brightness, self.bg_contrast
        )
    }

    pub fn caustic_blur_filter(&self) -> String {
        format!("blur({}px)", self.caustic_blur_px)
    }

    /// Declarations for the ambient caustic class rule.
    pub fn caustic_declarations(&self) -> String {
        format!(
            "border-width: {}px; border-color: {};",
            self.caustic_strength,
            self.caustic_color()
        )
    }

    /// Declarations for the interactive ripple class rule.
    pub fn ripple_declarations(&self) -> String {
        let width = (self.caustic_strength * 2.0).min(RIPPLE_BORDER_MAX_PX);
        format!(
            "border-width: {}px; border-color: {};",
            width,
            self.caustic_color()
        )
    }
}
