use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn require(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))
}

/// Look up an element by id, creating an empty `<div>` under `<body>` when
/// the page does not provide one.
pub fn get_or_create_div(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(id) {
        return Ok(el);
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?;
    el.set_id(id);
    body.append_child(&el).map_err(|e| anyhow!("{:?}", e))?;
    Ok(el)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    let res = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = res {
        log::warn!("classList update failed for .{}: {:?}", class, e);
    }
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
        log::warn!("click listener on #{} failed: {:?}", el.id(), e);
    }
    closure.forget();
}

/// Run `f` once after `delay_ms`. Pending timers die with the page.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        log::warn!("setTimeout failed: {:?}", e);
    }
    closure.forget();
}

pub fn location_search() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
