use crate::constants::*;
use crate::core::ParameterState;
use crate::dom;
use crate::styleblock::StyleBlock;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles to every control widget. The widgets themselves are the live
/// source of truth for parameter values; `snapshot` reads them into a
/// `ParameterState` whenever a derived value needs recomputing.
pub struct Controls {
    pub caustic_hue: web::HtmlInputElement,
    pub caustic_sat: web::HtmlInputElement,
    pub caustic_lit: web::HtmlInputElement,
    pub caustic_color_compiled: web::HtmlInputElement,
    pub caustic_strength: web::HtmlInputElement,
    pub caustic_blur: web::HtmlInputElement,
    pub bg_hue: web::HtmlInputElement,
    pub bg_sat: web::HtmlInputElement,
    pub bg_lit: web::HtmlInputElement,
    pub bg_color_compiled: web::HtmlInputElement,
    pub bg_brightness: web::HtmlInputElement,
    pub bg_contrast: web::HtmlInputElement,
    pub bg_opacity: web::HtmlInputElement,
    pub menu: web::HtmlElement,
}

impl Controls {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            caustic_hue: dom::get_input(document, CAUSTIC_HUE_ID)?,
            caustic_sat: dom::get_input(document, CAUSTIC_SAT_ID)?,
            caustic_lit: dom::get_input(document, CAUSTIC_LIT_ID)?,
            caustic_color_compiled: dom::get_input(document, CAUSTIC_COLOR_COMPILED_ID)?,
            caustic_strength: dom::get_input(document, CAUSTIC_STRENGTH_ID)?,
            caustic_blur: dom::get_input(document, CAUSTIC_BLUR_ID)?,
            bg_hue: dom::get_input(document, BG_HUE_ID)?,
            bg_sat: dom::get_input(document, BG_SAT_ID)?,
            bg_lit: dom::get_input(document, BG_LIT_ID)?,
            bg_color_compiled: dom::get_input(document, BG_COLOR_COMPILED_ID)?,
            bg_brightness: dom::get_input(document, BG_BRIGHTNESS_ID)?,
            bg_contrast: dom::get_input(document, BG_CONTRAST_ID)?,
            bg_opacity: dom::get_input(document, BG_OPACITY_ID)?,
            menu: dom::get_element(document, CONTROL_MENU_ID)?,
        })
    }

    pub fn snapshot(&self) -> ParameterState {
        let defaults = ParameterState::default();
        ParameterState {
            caustic_hue: read(&self.caustic_hue, defaults.caustic_hue),
            caustic_sat: read(&self.caustic_sat, defaults.caustic_sat),
            caustic_lit: read(&self.caustic_lit, defaults.caustic_lit),
            caustic_strength: read(&self.caustic_strength, defaults.caustic_strength),
            caustic_blur_px: read(&self.caustic_blur, defaults.caustic_blur_px),
            bg_hue: read(&self.bg_hue, defaults.bg_hue),
            bg_sat: read(&self.bg_sat, defaults.bg_sat),
            bg_lit: read(&self.bg_lit, defaults.bg_lit),
            bg_brightness: read(&self.bg_brightness, defaults.bg_brightness),
            bg_contrast: read(&self.bg_contrast, defaults.bg_contrast),
            bg_opacity: read(&self.bg_opacity, defaults.bg_opacity),
        }
    }
}

fn read(input: &web::HtmlInputElement, fallback: f32) -> f32 {
    let v = input.value_as_number();
    if v.is_finite() {
        v as f32
    } else {
        fallback
    }
}

/// Shared handles fanned out to the control change handlers.
#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub controls: Rc<Controls>,
    pub style: Rc<StyleBlock>,
    pub background: web::HtmlElement,
    pub caustic_container: web::HtmlElement,
}

// ---------------- Recompute functions ----------------
// Each is a pure function of the current control values, applied either to
// a single container's inline style or to the shared style block.

pub fn apply_background_color(w: &ControlWiring) {
    let color = w.controls.snapshot().background_color();
    w.controls.bg_color_compiled.set_value(&color);
    let _ = w.background.style().set_property("background-color", &color);
}

pub fn apply_background_filters(w: &ControlWiring) {
    let filter = w.controls.snapshot().background_filter();
    let _ = w.background.style().set_property("filter", &filter);
}

pub fn apply_background_opacity(w: &ControlWiring) {
    let opacity = w.controls.snapshot().bg_opacity;
    let _ = w
        .background
        .style()
        .set_property("opacity", &format!("{opacity}"));
}

pub fn apply_caustic_blur(w: &ControlWiring) {
    let filter = w.controls.snapshot().caustic_blur_filter();
    let _ = w.caustic_container.style().set_property("filter", &filter);
}

/// Border width and color for both caustic classes go through the shared
/// style block: hundreds of ambient elements pick up the change from one
/// rule rewrite per class.
pub fn apply_caustic_rules(w: &ControlWiring) {
    let params = w.controls.snapshot();
    w.controls
        .caustic_color_compiled
        .set_value(&params.caustic_color());
    w.style
        .rewrite(CAUSTIC_SELECTOR, &params.caustic_declarations());
    w.style
        .rewrite(RIPPLE_SELECTOR, &params.ripple_declarations());
}

// ---------------- Wiring ----------------

pub fn wire(w: &ControlWiring) {
    bind(&w.controls.bg_hue, w, apply_background_color);
    bind(&w.controls.bg_sat, w, apply_background_color);
    bind(&w.controls.bg_lit, w, apply_background_color);
    bind(&w.controls.bg_brightness, w, apply_background_filters);
    bind(&w.controls.bg_contrast, w, apply_background_filters);
    bind(&w.controls.bg_opacity, w, apply_background_opacity);
    bind(&w.controls.caustic_blur, w, apply_caustic_blur);
    bind(&w.controls.caustic_hue, w, apply_caustic_rules);
    bind(&w.controls.caustic_sat, w, apply_caustic_rules);
    bind(&w.controls.caustic_lit, w, apply_caustic_rules);
    bind(&w.controls.caustic_strength, w, apply_caustic_rules);

    let w_reset = w.clone();
    dom::add_click_listener(&w.document, RESET_BUTTON_ID, move || {
        reset_to_defaults(&w_reset);
    });
}

fn bind(input: &web::HtmlInputElement, w: &ControlWiring, recompute: fn(&ControlWiring)) {
    let w = w.clone();
    dom::add_change_listener(input.as_ref(), move || recompute(&w));
}

/// Restore every range control in the menu to its `data-default-value` and
/// re-dispatch its change event, cascading through every recompute function.
/// A control without the attribute keeps its current value.
pub fn reset_to_defaults(w: &ControlWiring) {
    let ranges = match w.controls.menu.query_selector_all("input[type=\"range\"]") {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[reset] range query failed: {e:?}");
            return;
        }
    };
    for i in 0..ranges.length() {
        let Some(node) = ranges.get(i) else { continue };
        let Ok(input) = node.dyn_into::<web::HtmlInputElement>() else {
            continue;
        };
        match input.get_attribute(DEFAULT_VALUE_ATTR) {
            Some(default) => input.set_value(&default),
            None => log::debug!("[reset] {} has no {DEFAULT_VALUE_ATTR}", input.id()),
        }
        if let Ok(ev) = web::Event::new("change") {
            let _ = input.dispatch_event(&ev);
        }
    }
}
