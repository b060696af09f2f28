//! Scene tuning and DOM contract constants.
//!
//! Grid spacing, element sizing, and animation timing defaults live on
//! `core::field::FieldLayout`; everything here is either interaction tuning
//! or part of the contract with the static page (ids, class names).

use crate::core::ClickPolicy;

// Minimum real-time gap between accepted move-driven ripple spawns.
pub const MIN_RIPPLE_GAP_MS: f64 = 60.0;

// Clicks and taps spawn immediately; the debouncer exists to keep
// continuous move streams from flooding the pool.
pub const CLICK_POLICY: ClickPolicy = ClickPolicy::Bypass;

// The .interactive-caustic class renders at a fixed 100px square, so half
// of that centers a ripple's wrapper on the interaction point. Reading the
// computed style at runtime would give the same number.
pub const RIPPLE_HALF_SIZE_PX: f32 = 50.0;

// CSS class contract with the static stylesheet
pub const CAUSTIC_CLASS: &str = "caustic";
pub const RIPPLE_CLASS: &str = "interactive-caustic";
pub const RIPPLE_ANIMATING_CLASS: &str = "animating-ripple";
pub const CAUSTIC_SELECTOR: &str = ".caustic";
pub const RIPPLE_SELECTOR: &str = ".interactive-caustic";
pub const CONTROL_GROUP_CLASS: &str = "control-group";

// Container and control element ids
pub const CAUSTIC_CONTAINER_ID: &str = "causticContainer";
pub const BACKGROUND_CONTAINER_ID: &str = "backgroundContainer";
pub const CONTROL_MENU_ID: &str = "controlMenu";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const RESET_BUTTON_ID: &str = "resetToDefaults";

pub const CAUSTIC_HUE_ID: &str = "causticColorHue";
pub const CAUSTIC_SAT_ID: &str = "causticColorSat";
pub const CAUSTIC_LIT_ID: &str = "causticColorLit";
pub const CAUSTIC_COLOR_COMPILED_ID: &str = "causticColorCompiledInput";
pub const CAUSTIC_STRENGTH_ID: &str = "causticStrength";
pub const CAUSTIC_BLUR_ID: &str = "causticBlur";

pub const BG_HUE_ID: &str = "backgroundBgColorHue";
pub const BG_SAT_ID: &str = "backgroundBgColorSat";
pub const BG_LIT_ID: &str = "backgroundBgColorLit";
pub const BG_COLOR_COMPILED_ID: &str = "backgroundBgColorCompiledInput";
pub const BG_BRIGHTNESS_ID: &str = "backgroundBrightness";
pub const BG_CONTRAST_ID: &str = "backgroundContrast";
pub const BG_OPACITY_ID: &str = "backgroundOpacity";

// Controls carry their reset value in this attribute.
pub const DEFAULT_VALUE_ATTR: &str = "data-default-value";
