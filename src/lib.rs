#![cfg(target_arch = "wasm32")]
use crate::core::{Catalog, Input, SceneConfig, Session};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod audio;
mod constants;
pub mod core;
mod dom;
mod events;
mod overlay;
mod scene;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stolen-roses starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The module may be started before the markup is parsed
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let closure = Closure::once(move || {
            if let Err(e) = wire_session(&doc) {
                log::error!("init error: {:?}", e);
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        closure.forget();
        return Ok(());
    }
    wire_session(&document)
}

fn wire_session(document: &web::Document) -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] session already wired; ignoring");
        return Ok(());
    }

    let config = SceneConfig::from_query(&dom::location_search());
    let catalog = Catalog::default();
    let page = app::Page::attach(document)?;
    let app = app::App::new(Session::new(catalog), page);

    let app_for_regions = Rc::clone(&app);
    scene::inject_hotspots(
        document,
        &app.page.hotspot_container,
        &catalog,
        config,
        move |id| app::dispatch(&app_for_regions, Input::Activate(id.to_string())),
    )?;

    events::wire_buttons(&app);
    events::wire_global_keydown(document, app.clone());

    app::start(&app);
    Ok(())
}
