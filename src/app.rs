use crate::audio::Music;
use crate::constants::*;
use crate::core::{Command, Commands, Input, Session, BASE_VOLUME};
use crate::dom;
use crate::overlay::{self, FlickerOverlays};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Handles to every node the session drives.
pub struct Page {
    pub hotspot_container: web::Element,
    pub modal: web::Element,
    pub modal_close: web::Element,
    pub clue_text: web::Element,
    pub progress: web::Element,
    pub music_toggle: web::Element,
    pub unlock_button: web::Element,
    pub final_message: web::Element,
    pub final_title: web::Element,
    pub final_text: web::Element,
    pub overlays: FlickerOverlays,
    pub music: Music,
}

impl Page {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            hotspot_container: dom::require(document, HOTSPOT_CONTAINER_ID)?,
            modal: dom::require(document, MODAL_ID)?,
            modal_close: dom::require(document, MODAL_CLOSE_ID)?,
            clue_text: dom::require(document, CLUE_TEXT_ID)?,
            progress: dom::require(document, PROGRESS_ID)?,
            music_toggle: dom::require(document, MUSIC_TOGGLE_ID)?,
            unlock_button: dom::require(document, UNLOCK_BUTTON_ID)?,
            final_message: dom::require(document, FINAL_MESSAGE_ID)?,
            final_title: dom::require(document, FINAL_TITLE_ID)?,
            final_text: dom::require(document, FINAL_TEXT_ID)?,
            overlays: FlickerOverlays::attach(document)?,
            music: Music::new(MUSIC_SRC, BASE_VOLUME)?,
        })
    }

    fn first_hotspot(&self) -> Option<web::Element> {
        self.hotspot_container
            .query_selector(&format!(".{HOTSPOT_CLASS}"))
            .ok()
            .flatten()
    }
}

/// Session context for the page: the controller plus the nodes it drives.
pub struct App {
    pub session: RefCell<Session>,
    pub page: Page,
}

impl App {
    pub fn new(session: Session, page: Page) -> Rc<Self> {
        Rc::new(Self {
            session: RefCell::new(session),
            page,
        })
    }
}

pub fn start(app: &Rc<App>) {
    let mut out = Commands::new();
    app.session.borrow_mut().start(&mut out);
    apply_all(app, out);
}

/// Feed one input through the session and apply the resulting effects.
/// The session borrow ends before any effect runs, so effects may dispatch.
pub fn dispatch(app: &Rc<App>, input: Input) {
    let mut out = Commands::new();
    let result = app.session.borrow_mut().handle(input, &mut out);
    if let Err(e) = result {
        log::warn!("[session] {}", e);
    }
    apply_all(app, out);
}

fn apply_all(app: &Rc<App>, out: Commands) {
    for cmd in out {
        apply(app, cmd);
    }
}

fn apply(app: &Rc<App>, cmd: Command) {
    let page = &app.page;
    match cmd {
        Command::SetProgress(text) => dom::set_text(&page.progress, &text),
        Command::SetHint(on) => {
            if let Some(first) = page.first_hotspot() {
                dom::set_class(&first, HINT_CLASS, on);
            }
        }
        Command::SetFlicker(on) => page.overlays.set_active(on),
        Command::ShowModal(clue) => {
            dom::set_text(&page.clue_text, clue);
            overlay::show(&page.modal);
        }
        Command::HideModal => overlay::hide(&page.modal),
        Command::ShowUnlock => overlay::show(&page.unlock_button),
        Command::ShowFinal { title, body } => {
            dom::set_text(&page.final_title, title);
            dom::set_text(&page.final_text, body);
            overlay::show(&page.final_message);
        }
        Command::SetMusicIndicator(on) => dom::set_text(
            &page.music_toggle,
            if on { SOUND_ON_GLYPH } else { SOUND_OFF_GLYPH },
        ),
        Command::PlayMusic(attempt) => {
            let a = app.clone();
            page.music
                .play(move || dispatch(&a, Input::PlaybackRejected(attempt)));
        }
        Command::PauseMusic => page.music.pause(),
        Command::SetVolume(v) => page.music.set_volume(v),
        Command::Schedule { delay, task } => {
            let a = app.clone();
            let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
            dom::set_timeout(ms, move || dispatch(&a, Input::Elapsed(task)));
        }
    }
}
