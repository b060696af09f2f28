#![cfg(target_arch = "wasm32")]
use crate::constants::{BACKGROUND_CONTAINER_ID, CAUSTIC_CONTAINER_ID, MIN_RIPPLE_GAP_MS};
use crate::core::{initial_slot_count, Debouncer, FieldLayout, RipplePool};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod controls;
mod core;
mod dom;
mod events;
mod ripple;
mod scene;
mod styleblock;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("caustics-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let caustic_container = dom::get_element(&document, CAUSTIC_CONTAINER_ID)?;
    let background = dom::get_element(&document, BACKGROUND_CONTAINER_ID)?;

    // DOM elements lay out in CSS px, so no device-pixel-ratio adjustment.
    let viewport = Vec2::new(
        window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
        window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
    );

    let layout = FieldLayout::default();
    let mut rng = rand::thread_rng();
    let count = scene::build_ambient_field(
        &document,
        &caustic_container,
        viewport,
        &layout,
        &mut rng,
    );
    log::info!(
        "[field] {count} ambient elements for {}x{} at spacing {}",
        viewport.x,
        viewport.y,
        layout.spacing_px
    );

    // Pre-size the ripple pool for sustained input at the minimum gap.
    let pool = {
        let document = document.clone();
        let container = caustic_container.clone();
        RipplePool::new(initial_slot_count(MIN_RIPPLE_GAP_MS), || {
            ripple::DomRippleSlot::new(&document, &container)
        })
    };
    log::info!("[pool] {} ripple slots pre-allocated", pool.len());

    let style = Rc::new(styleblock::StyleBlock::install(&document)?);
    let ctrls = Rc::new(controls::Controls::lookup(&document)?);
    let control_wiring = controls::ControlWiring {
        document: document.clone(),
        controls: ctrls,
        style,
        background,
        caustic_container: caustic_container.clone(),
    };
    controls::wire(&control_wiring);

    events::wire_interaction_handlers(&events::SceneWiring {
        document,
        container: caustic_container,
        pool: Rc::new(RefCell::new(pool)),
        debounce: Rc::new(RefCell::new(Debouncer::new(MIN_RIPPLE_GAP_MS))),
    });

    // Everything starts from the embedded defaults; this also performs the
    // first recompute pass over every control.
    controls::reset_to_defaults(&control_wiring);
    Ok(())
}
