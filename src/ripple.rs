use crate::constants::{RIPPLE_ANIMATING_CLASS, RIPPLE_CLASS, RIPPLE_HALF_SIZE_PX};
use crate::core::pool::RippleSlot;
use crate::dom;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A pooled ripple backed by DOM elements.
///
/// The 1x1 px wrapper is what gets translated; its own box never moves
/// while the inner element animates, so centering math stays stable across
/// the whole animation.
pub struct DomRippleSlot {
    wrapper: web::HtmlElement,
    el: web::HtmlElement,
    animating: Rc<Cell<bool>>,
}

impl DomRippleSlot {
    pub fn new(document: &web::Document, container: &web::Element) -> Self {
        let wrapper = dom::create_div(document);
        let wrapper_style = wrapper.style();
        let _ = wrapper_style.set_property("width", "1px");
        let _ = wrapper_style.set_property("height", "1px");

        let el = dom::create_div(document);
        let _ = el.class_list().add_1(RIPPLE_CLASS);

        // Completion subscription, registered once per instance: when the
        // ripple animation ends, hide the element, drop the animating marker
        // class (so re-adding it restarts the animation), and free the slot.
        let animating = Rc::new(Cell::new(false));
        {
            let flag = animating.clone();
            let el_done = el.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::AnimationEvent| {
                let _ = el_done.style().set_property("opacity", "0");
                let _ = el_done.class_list().remove_1(RIPPLE_ANIMATING_CLASS);
                flag.set(false);
            }) as Box<dyn FnMut(_)>);
            let _ = el
                .add_event_listener_with_callback("animationend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let _ = wrapper.append_child(&el);
        let _ = container.append_child(&wrapper);
        Self {
            wrapper,
            el,
            animating,
        }
    }
}

impl RippleSlot for DomRippleSlot {
    fn animating(&self) -> bool {
        self.animating.get()
    }

    fn begin(&mut self, at: Vec2) {
        let x = at.x - RIPPLE_HALF_SIZE_PX;
        let y = at.y - RIPPLE_HALF_SIZE_PX;
        let _ = self
            .wrapper
            .style()
            .set_property("transform", &format!("translateX({x}px) translateY({y}px)"));
        let _ = self.el.style().set_property("opacity", "1");
        let _ = self.el.class_list().add_1(RIPPLE_ANIMATING_CLASS);
        self.animating.set(true);
    }
}
