use crate::constants::{CLICK_POLICY, CONTROL_GROUP_CLASS, CONTROL_MENU_ID, MENU_TOGGLE_ID};
use crate::core::pool::SpawnOutcome;
use crate::core::{ClickPolicy, Debouncer, RipplePool};
use crate::dom;
use crate::ripple::DomRippleSlot;
use crate::ui;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared handles fanned out to the interaction handlers.
#[derive(Clone)]
pub struct SceneWiring {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub pool: Rc<RefCell<RipplePool<DomRippleSlot>>>,
    pub debounce: Rc<RefCell<Debouncer>>,
}

pub fn wire_interaction_handlers(w: &SceneWiring) {
    wire_pointer_move(w);
    wire_touch_move(w);
    wire_click(w);
    wire_resize();
}

fn spawn_ripple(w: &SceneWiring, at: Vec2) {
    let document = w.document.clone();
    let container = w.container.clone();
    let outcome = w
        .pool
        .borrow_mut()
        .spawn(at, || DomRippleSlot::new(&document, &container));
    if let SpawnOutcome::Grew(i) = outcome {
        log::debug!("[pool] all slots animating; grew to {}", i + 1);
    }
}

/// A move over the control panel is a drag-in-progress: re-dispatch the
/// change event so styles track the thumb live, and spawn nothing.
fn control_target(ev: &web::Event) -> Option<web::Element> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    if el.class_list().contains(CONTROL_GROUP_CLASS) || el.tag_name() == "INPUT" {
        Some(el)
    } else {
        None
    }
}

fn redispatch_change(el: &web::Element) {
    if let Ok(ev) = web::Event::new("change") {
        let _ = el.dispatch_event(&ev);
    }
}

fn wire_pointer_move(w: &SceneWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(el) = control_target(&ev) {
            redispatch_change(&el);
            return;
        }
        ev.prevent_default();
        if !w.debounce.borrow_mut().should_fire(dom::now_ms()) {
            return;
        }
        spawn_ripple(&w, Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    }) as Box<dyn FnMut(_)>);
    if let Some(win) = web::window() {
        let _ = win.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touch_move(w: &SceneWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(el) = control_target(&ev) {
            redispatch_change(&el);
            return;
        }
        ev.prevent_default();
        // Only the first touch point drives ripples.
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        if !w.debounce.borrow_mut().should_fire(dom::now_ms()) {
            return;
        }
        spawn_ripple(&w, Vec2::new(touch.client_x() as f32, touch.client_y() as f32));
    }) as Box<dyn FnMut(_)>);
    if let Some(win) = web::window() {
        // Non-passive so prevent_default can stop scroll/zoom gestures.
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}

fn is_menu_toggle(el: &web::Element) -> bool {
    el.id() == MENU_TOGGLE_ID
        || el
            .parent_element()
            .map(|p| p.id() == MENU_TOGGLE_ID)
            .unwrap_or(false)
}

fn wire_click(w: &SceneWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
            if is_menu_toggle(&el) {
                ev.prevent_default();
                ui::toggle_menu(&w.document);
                return;
            }
            // Clicks inside the panel belong to the controls.
            let menu_selector = format!("#{CONTROL_MENU_ID}");
            if matches!(el.closest(&menu_selector), Ok(Some(_))) {
                return;
            }
        }
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        match CLICK_POLICY {
            ClickPolicy::Bypass => spawn_ripple(&w, at),
            ClickPolicy::Debounced => {
                if w.debounce.borrow_mut().should_fire(dom::now_ms()) {
                    spawn_ripple(&w, at);
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(win) = web::window() {
        let _ = win.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize() {
    // No incremental re-layout: the grid and all parameters reset to the
    // embedded defaults with the page. Orientation changes also fire
    // resize, but older mobile browsers only deliver orientationchange.
    let closure = Closure::wrap(Box::new(move || {
        if let Some(win) = web::window() {
            let _ = win.location().reload();
        }
    }) as Box<dyn FnMut()>);
    if let Some(win) = web::window() {
        let _ = win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        let _ = win.add_event_listener_with_callback(
            "orientationchange",
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}
