use crate::app::{self, App};
use crate::core::Input;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// True when the click landed on the element itself rather than a child.
#[inline]
fn targets_self(ev: &web::MouseEvent, el: &web::Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|t| &t == el)
        .unwrap_or(false)
}

pub fn wire_buttons(app: &Rc<App>) {
    let page = &app.page;

    let a = app.clone();
    dom::add_click_listener(&page.modal_close, move |_| {
        app::dispatch(&a, Input::CloseModal);
    });

    // Backdrop: only clicks outside the dialog content
    let a = app.clone();
    let modal = page.modal.clone();
    dom::add_click_listener(&page.modal, move |ev| {
        if targets_self(&ev, &modal) {
            app::dispatch(&a, Input::BackdropClick);
        }
    });

    let a = app.clone();
    dom::add_click_listener(&page.music_toggle, move |_| {
        app::dispatch(&a, Input::ToggleMusic);
    });

    let a = app.clone();
    dom::add_click_listener(&page.unlock_button, move |_| {
        app::dispatch(&a, Input::Unlock);
    });
}
