use super::catalog::Catalog;
use super::command::{Command, Commands, Input, Task};
use super::constants::{FINAL_BODY, FINAL_TITLE, UNLOCK_DELAY};
use super::effects::{Flicker, MusicState};
use super::error::SessionError;
use super::modal::{is_dismiss_key, ModalState};
use super::progress::{progress_text, Phase, ProgressState};
use super::scene::Hint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Found { completed: bool },
    Replay,
}

/// Interaction controller for one page session.
///
/// Owns every piece of mutable game state. Each entry point appends the side
/// effects it needs to `out`, in the order the page must apply them.
pub struct Session {
    catalog: Catalog,
    progress: ProgressState,
    modal: ModalState,
    flicker: Flicker,
    music: MusicState,
    hint: Hint,
    unlock_revealed: bool,
    revealed: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            progress: ProgressState::new(),
            modal: ModalState::default(),
            flicker: Flicker::default(),
            music: MusicState::default(),
            hint: Hint::default(),
            unlock_revealed: false,
            revealed: false,
        }
    }

    /// Initial publish plus the onboarding hint timer.
    pub fn start(&mut self, out: &mut Commands) {
        self.publish_progress(out);
        out.push(Command::SetMusicIndicator(self.progress.music_playing));
        self.hint.arm(out);
    }

    pub fn handle(&mut self, input: Input, out: &mut Commands) -> Result<(), SessionError> {
        match input {
            Input::Activate(id) => self.activate(&id, out).map(|_| ()),
            Input::CloseModal | Input::BackdropClick => {
                self.close_modal(out);
                Ok(())
            }
            Input::Key(key) => {
                self.key_down(&key, out);
                Ok(())
            }
            Input::ToggleMusic => {
                self.toggle_music(out);
                Ok(())
            }
            Input::PlaybackRejected(attempt) => {
                self.playback_rejected(attempt, out);
                Ok(())
            }
            Input::Unlock => self.reveal(out),
            Input::Elapsed(task) => {
                self.elapsed(task, out);
                Ok(())
            }
        }
    }

    pub fn activate(&mut self, id: &str, out: &mut Commands) -> Result<Activation, SessionError> {
        let hotspot = self
            .catalog
            .get(id)
            .ok_or_else(|| SessionError::UnknownHotspot(id.to_string()))?;

        let activation = if self.progress.mark_found(hotspot.id) {
            self.publish_progress(out);
            self.flicker.trigger(out);
            let completed = self.phase() == Phase::Complete;
            if completed {
                log::info!("[session] all {} fragments found", self.catalog.len());
                out.push(Command::Schedule {
                    delay: UNLOCK_DELAY,
                    task: Task::RevealUnlock,
                });
            }
            Activation::Found { completed }
        } else {
            Activation::Replay
        };
        log::debug!("[session] activate {} -> {:?}", hotspot.id, activation);

        self.modal.open(hotspot.clue);
        out.push(Command::ShowModal(hotspot.clue));
        Ok(activation)
    }

    pub fn close_modal(&mut self, out: &mut Commands) {
        self.modal.close();
        out.push(Command::HideModal);
    }

    /// Returns `true` if the key dismissed the dialog.
    pub fn key_down(&mut self, key: &str, out: &mut Commands) -> bool {
        if is_dismiss_key(key) && self.modal.is_visible() {
            self.close_modal(out);
            true
        } else {
            false
        }
    }

    pub fn toggle_music(&mut self, out: &mut Commands) {
        if self.progress.music_playing {
            self.progress.music_playing = false;
            self.music.pause(out);
            log::info!("[music] paused");
        } else {
            self.progress.music_playing = true;
            self.music.play(out);
            log::info!("[music] playing at volume {:.2}", self.music.volume());
        }
    }

    /// The environment refused to start playback; fall back to the muted
    /// state. Refusals for superseded attempts are ignored.
    pub fn playback_rejected(&mut self, attempt: u32, out: &mut Commands) {
        if attempt != self.music.attempt() || !self.progress.music_playing {
            log::debug!("[music] ignoring stale refusal for attempt {}", attempt);
            return;
        }
        self.progress.music_playing = false;
        out.push(Command::SetMusicIndicator(false));
    }

    pub fn reveal(&mut self, out: &mut Commands) -> Result<(), SessionError> {
        if !self.unlock_revealed {
            return Err(SessionError::UnlockNotAvailable);
        }
        if self.revealed {
            return Ok(());
        }
        self.revealed = true;
        out.push(Command::ShowFinal {
            title: FINAL_TITLE,
            body: FINAL_BODY,
        });
        if self.progress.music_playing {
            self.music.begin_fade(out);
        }
        log::info!("[session] final message revealed");
        Ok(())
    }

    pub fn elapsed(&mut self, task: Task, out: &mut Commands) {
        match task {
            Task::StartHint => self.hint.show(out),
            Task::EndHint => self.hint.hide(out),
            Task::EndFlicker(generation) => self.flicker.end(generation, out),
            Task::RevealUnlock => {
                if self.phase() == Phase::Complete && !self.unlock_revealed {
                    self.unlock_revealed = true;
                    out.push(Command::ShowUnlock);
                }
            }
            Task::FadeTick => {
                if self.music.fade_tick(out) {
                    self.progress.music_playing = false;
                    log::info!("[music] faded out");
                }
            }
        }
    }

    fn publish_progress(&self, out: &mut Commands) {
        out.push(Command::SetProgress(progress_text(
            self.progress.found_count(),
            self.catalog.len(),
        )));
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn music(&self) -> &MusicState {
        &self.music
    }

    pub fn flicker(&self) -> &Flicker {
        &self.flicker
    }

    pub fn hint(&self) -> Hint {
        self.hint
    }

    pub fn phase(&self) -> Phase {
        self.progress.phase(self.catalog.len())
    }

    pub fn unlock_revealed(&self) -> bool {
        self.unlock_revealed
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn progress_text(&self) -> String {
        progress_text(self.progress.found_count(), self.catalog.len())
    }
}
