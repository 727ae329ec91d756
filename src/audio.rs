use anyhow::anyhow;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping background track behind the music toggle.
pub struct Music {
    el: web::HtmlAudioElement,
}

impl Music {
    pub fn new(src: &str, volume: f64) -> anyhow::Result<Self> {
        let el = web::HtmlAudioElement::new_with_src(src).map_err(|e| anyhow!("{:?}", e))?;
        el.set_loop(true);
        el.set_volume(volume);
        Ok(Self { el })
    }

    /// Start playback. Browsers may refuse without a prior user gesture; the
    /// refusal arrives asynchronously and is handed to `on_rejected`.
    pub fn play(&self, on_rejected: impl FnOnce() + 'static) {
        let started: Result<js_sys::Promise, _> = self.el.play();
        match started {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[music] play rejected: {:?}", e);
                    on_rejected();
                }
            }),
            Err(e) => {
                log::warn!("[music] play failed: {:?}", e);
                on_rejected();
            }
        }
    }

    pub fn pause(&self) {
        if let Err(e) = self.el.pause() {
            log::warn!("[music] pause failed: {:?}", e);
        }
    }

    pub fn set_volume(&self, volume: f64) {
        self.el.set_volume(volume.clamp(0.0, 1.0));
    }
}
