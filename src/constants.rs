// Page wiring: element ids, class names and assets the markup provides.

// Scene
pub const HOTSPOT_CONTAINER_ID: &str = "hotspot-container";
pub const DARK_OVERLAY_ID: &str = "dark-overlay";
pub const WING_SHADOW_ID: &str = "wing-shadow";

// Clue dialog
pub const MODAL_ID: &str = "modal";
pub const MODAL_CLOSE_ID: &str = "modal-close";
pub const CLUE_TEXT_ID: &str = "clue-text";

// HUD and ending
pub const PROGRESS_ID: &str = "progress-indicator";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const UNLOCK_BUTTON_ID: &str = "unlock-button";
pub const FINAL_MESSAGE_ID: &str = "final-message";
pub const FINAL_TITLE_ID: &str = "final-title";
pub const FINAL_TEXT_ID: &str = "final-text";

// Classes toggled by the stylesheet
pub const HOTSPOT_CLASS: &str = "hotspot";
pub const DEBUG_CLASS: &str = "debug";
pub const HINT_CLASS: &str = "hint";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

// Music toggle glyphs
pub const SOUND_ON_GLYPH: &str = "\u{1F50A}"; // 🔊
pub const SOUND_OFF_GLYPH: &str = "\u{1F507}"; // 🔇

pub const MUSIC_SRC: &str = "./assets/music.mp3";
