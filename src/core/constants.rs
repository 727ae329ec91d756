// Timing and audio tuning constants for the session logic.

use std::time::Duration;

// Onboarding hint on the first hotspot
pub const HINT_DELAY: Duration = Duration::from_millis(900);
pub const HINT_DURATION: Duration = Duration::from_millis(1200);

// Flicker overlays stay active this long after a new find
pub const FLICKER_DURATION: Duration = Duration::from_millis(600);

// Wait for the flicker to settle before offering the unlock action
pub const UNLOCK_DELAY: Duration = Duration::from_millis(800);

// Background track
pub const BASE_VOLUME: f64 = 0.3;
pub const FADE_STEP: f64 = 0.05;
pub const FADE_FLOOR: f64 = 0.05; // at or below this the track is silenced
pub const FADE_TICK: Duration = Duration::from_millis(100);

// Closing reveal copy
pub const FINAL_TITLE: &str = "The Garden Remembers";
pub const FINAL_BODY: &str =
    "You were never meant to steal beauty. You were meant to cultivate it.";
