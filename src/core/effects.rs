// Timed visual feedback and background-track control.

use super::command::{Command, Commands, Task};
use super::constants::{BASE_VOLUME, FADE_FLOOR, FADE_STEP, FADE_TICK, FLICKER_DURATION};

/// Flicker overlays. Each trigger bumps a generation so that a reset armed by
/// an earlier trigger does not cut a newer flicker short.
#[derive(Clone, Debug, Default)]
pub struct Flicker {
    generation: u32,
    active: bool,
}

impl Flicker {
    pub fn trigger(&mut self, out: &mut Commands) {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        out.push(Command::SetFlicker(true));
        out.push(Command::Schedule {
            delay: FLICKER_DURATION,
            task: Task::EndFlicker(self.generation),
        });
    }

    pub fn end(&mut self, generation: u32, out: &mut Commands) {
        if self.active && generation == self.generation {
            self.active = false;
            out.push(Command::SetFlicker(false));
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeStep {
    Lowered(f64),
    Silenced,
}

/// One tick of the closing fade. Volumes stay on a 0.01 grid so repeated
/// subtraction does not drift past the floor.
pub fn fade_step(volume: f64) -> FadeStep {
    if volume > FADE_FLOOR + 1e-9 {
        let next = ((volume - FADE_STEP) * 100.0).round() / 100.0;
        FadeStep::Lowered(next.max(0.0))
    } else {
        FadeStep::Silenced
    }
}

/// Mirror of the audio handle's volume plus the fade-out ticker state.
/// Whether the track is playing lives in `ProgressState`.
#[derive(Clone, Debug)]
pub struct MusicState {
    volume: f64,
    fading: bool,
    attempt: u32,
}

impl Default for MusicState {
    fn default() -> Self {
        Self {
            volume: BASE_VOLUME,
            fading: false,
            attempt: 0,
        }
    }
}

impl MusicState {
    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    /// Tag of the most recent play attempt.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn play(&mut self, out: &mut Commands) {
        self.fading = false;
        // A finished fade leaves the handle silent; bring it back up
        if self.volume <= 0.0 {
            self.volume = BASE_VOLUME;
            out.push(Command::SetVolume(self.volume));
        }
        self.attempt = self.attempt.wrapping_add(1);
        // Indicator first: a refusal reported while `PlayMusic` is being
        // applied must be the last word on the glyph
        out.push(Command::SetMusicIndicator(true));
        out.push(Command::PlayMusic(self.attempt));
    }

    pub fn pause(&mut self, out: &mut Commands) {
        self.fading = false;
        out.push(Command::PauseMusic);
        out.push(Command::SetMusicIndicator(false));
    }

    pub fn begin_fade(&mut self, out: &mut Commands) {
        if self.fading {
            return;
        }
        self.fading = true;
        out.push(Command::Schedule {
            delay: FADE_TICK,
            task: Task::FadeTick,
        });
    }

    /// Advance the fade by one tick. Returns `true` once the track has been
    /// silenced and paused.
    pub fn fade_tick(&mut self, out: &mut Commands) -> bool {
        if !self.fading {
            return false;
        }
        match fade_step(self.volume) {
            FadeStep::Lowered(v) => {
                self.volume = v;
                out.push(Command::SetVolume(v));
                out.push(Command::Schedule {
                    delay: FADE_TICK,
                    task: Task::FadeTick,
                });
                false
            }
            FadeStep::Silenced => {
                self.volume = 0.0;
                self.fading = false;
                out.push(Command::SetVolume(0.0));
                out.push(Command::PauseMusic);
                out.push(Command::SetMusicIndicator(false));
                true
            }
        }
    }
}
