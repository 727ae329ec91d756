// Inputs the session reacts to and the side effects it asks the page to
// perform. Keeping both as plain data lets the controller run without a DOM.

use smallvec::SmallVec;
use std::time::Duration;

/// Deferred work. The page layer arms a timer and feeds the task back in as
/// `Input::Elapsed` when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    StartHint,
    EndHint,
    // Carries the flicker generation it belongs to
    EndFlicker(u32),
    RevealUnlock,
    FadeTick,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SetProgress(String),
    SetHint(bool),
    SetFlicker(bool),
    ShowModal(&'static str),
    HideModal,
    ShowUnlock,
    ShowFinal {
        title: &'static str,
        body: &'static str,
    },
    SetMusicIndicator(bool),
    // Tagged with the play attempt so a late refusal can be matched to it
    PlayMusic(u32),
    PauseMusic,
    SetVolume(f64),
    Schedule { delay: Duration, task: Task },
}

pub type Commands = SmallVec<[Command; 8]>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Activate(String),
    CloseModal,
    BackdropClick,
    Key(String),
    ToggleMusic,
    PlaybackRejected(u32),
    Unlock,
    Elapsed(Task),
}
