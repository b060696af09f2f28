use crate::constants::CAUSTIC_CLASS;
use crate::core::field::{self, CausticSpec, FieldLayout};
use crate::dom;
use glam::Vec2;
use rand::Rng;
use web_sys as web;

/// Generate the ambient grid for the viewport and append one element per
/// cell to the caustic container. Elements are immutable after this; the
/// CSS animation engine drives them for the life of the page.
pub fn build_ambient_field(
    document: &web::Document,
    container: &web::Element,
    viewport: Vec2,
    layout: &FieldLayout,
    rng: &mut impl Rng,
) -> usize {
    let specs = field::generate(viewport, layout, rng);
    for spec in &specs {
        append_caustic(document, container, spec);
    }
    specs.len()
}

fn append_caustic(document: &web::Document, container: &web::Element, spec: &CausticSpec) {
    let el = dom::create_div(document);
    let style = el.style();
    let _ = style.set_property("width", &format!("{}px", spec.width_px));
    let _ = style.set_property("height", &format!("{}px", spec.height_px));
    let _ = style.set_property("left", &format!("{}px", spec.position.x));
    let _ = style.set_property("top", &format!("{}px", spec.position.y));
    let _ = style.set_property("animation-delay", &format!("{}s", spec.delay_s));
    let _ = style.set_property("animation-duration", &format!("{}s", spec.duration_s));
    if spec.reversed {
        let _ = style.set_property("animation-direction", "reverse");
    }
    let _ = style.set_property("opacity", &format!("{}", spec.opacity));
    el.set_class_name(CAUSTIC_CLASS);
    let _ = container.append_child(&el);
}
