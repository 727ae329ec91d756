use crate::app::{self, App};
use crate::core::Input;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(document: &web::Document, app: Rc<App>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        app::dispatch(&app, Input::Key(ev.key()));
    }) as Box<dyn FnMut(_)>);
    if let Err(e) =
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
    {
        log::warn!("keydown listener failed: {:?}", e);
    }
    closure.forget();
}
