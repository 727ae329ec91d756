use crate::constants::{ACTIVE_CLASS, DARK_OVERLAY_ID, HIDDEN_CLASS, WING_SHADOW_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    dom::set_class(el, HIDDEN_CLASS, false);
}

#[inline]
pub fn hide(el: &web::Element) {
    dom::set_class(el, HIDDEN_CLASS, true);
}

/// The darkening layer and the wing silhouette that flash on each new find.
pub struct FlickerOverlays {
    dark: web::Element,
    wing: web::Element,
}

impl FlickerOverlays {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            dark: dom::get_or_create_div(document, DARK_OVERLAY_ID)?,
            wing: dom::get_or_create_div(document, WING_SHADOW_ID)?,
        })
    }

    pub fn set_active(&self, on: bool) {
        dom::set_class(&self.dark, ACTIVE_CLASS, on);
        dom::set_class(&self.wing, ACTIVE_CLASS, on);
    }
}
