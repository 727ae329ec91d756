use crate::constants::{DEBUG_CLASS, HOTSPOT_CLASS};
use crate::core::{Catalog, SceneConfig};
use crate::dom;
use anyhow::anyhow;
use web_sys as web;

/// Create one clickable region per catalog entry inside `container`.
/// Regions are returned in catalog order.
pub fn inject_hotspots(
    document: &web::Document,
    container: &web::Element,
    catalog: &Catalog,
    config: SceneConfig,
    on_activate: impl Fn(&'static str) + Clone + 'static,
) -> anyhow::Result<Vec<web::Element>> {
    let mut regions = Vec::with_capacity(catalog.len());
    for hotspot in catalog.iter() {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow!("{:?}", e))?;
        dom::set_class(&el, HOTSPOT_CLASS, true);
        if config.debug {
            dom::set_class(&el, DEBUG_CLASS, true);
        }
        el.set_attribute("data-id", hotspot.id)
            .and_then(|_| el.set_attribute("style", &hotspot.placement.css()))
            .map_err(|e| anyhow!("{:?}", e))?;
        if let Some(label) = catalog.label(hotspot.id) {
            _ = el.set_attribute("title", &label);
        }

        let on_activate = on_activate.clone();
        let id = hotspot.id;
        dom::add_click_listener(&el, move |_| on_activate(id));

        container
            .append_child(&el)
            .map_err(|e| anyhow!("{:?}", e))?;
        regions.push(el);
    }
    log::info!(
        "[scene] {} hotspots injected{}",
        regions.len(),
        if config.debug { " (debug)" } else { "" }
    );
    Ok(regions)
}
