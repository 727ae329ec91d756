// Host-side tests for the interaction controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod roses {
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod command {
        include!("../src/core/command.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod effects {
        include!("../src/core/effects.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod modal {
        include!("../src/core/modal.rs");
    }
    pub mod progress {
        include!("../src/core/progress.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod session {
        include!("../src/core/session.rs");
    }
}

use rand::prelude::*;
use roses::catalog::HOTSPOTS;
use roses::command::{Command, Commands, Input, Task};
use roses::constants::*;
use roses::error::SessionError;
use roses::progress::Phase;
use roses::scene::Hint;
use roses::session::{Activation, Session};
use std::collections::HashSet;

fn scheduled(out: &Commands) -> Vec<(std::time::Duration, Task)> {
    out.iter()
        .filter_map(|c| match c {
            Command::Schedule { delay, task } => Some((*delay, *task)),
            _ => None,
        })
        .collect()
}

fn progress_of(out: &Commands) -> Option<String> {
    out.iter().rev().find_map(|c| match c {
        Command::SetProgress(t) => Some(t.clone()),
        _ => None,
    })
}

fn find_all(session: &mut Session) -> Commands {
    let mut last = Commands::new();
    for h in HOTSPOTS.iter() {
        last.clear();
        session.activate(h.id, &mut last).unwrap();
    }
    last
}

#[test]
fn start_publishes_zero_progress_and_arms_hint() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.start(&mut out);
    assert_eq!(progress_of(&out).as_deref(), Some("Fragments: 0 / 6"));
    assert!(out.contains(&Command::SetMusicIndicator(false)));
    assert_eq!(scheduled(&out), vec![(HINT_DELAY, Task::StartHint)]);
}

#[test]
fn hint_shows_once_then_clears() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.elapsed(Task::StartHint, &mut out);
    assert_eq!(out[0], Command::SetHint(true));
    assert_eq!(scheduled(&out), vec![(HINT_DURATION, Task::EndHint)]);

    out.clear();
    session.elapsed(Task::EndHint, &mut out);
    assert_eq!(out.as_slice(), &[Command::SetHint(false)]);
    assert_eq!(session.hint(), Hint::Done);

    // A second start never re-arms it
    out.clear();
    session.elapsed(Task::StartHint, &mut out);
    session.start(&mut out);
    assert!(!out.contains(&Command::SetHint(true)));
    assert!(scheduled(&out).is_empty());
    assert_eq!(session.progress().found_count(), 0);
}

#[test]
fn new_find_publishes_before_opening_modal() {
    let mut session = Session::default();
    let mut out = Commands::new();
    let act = session.activate("rose-3", &mut out).unwrap();
    assert_eq!(act, Activation::Found { completed: false });

    let progress_at = out
        .iter()
        .position(|c| matches!(c, Command::SetProgress(_)))
        .unwrap();
    let flicker_at = out
        .iter()
        .position(|c| *c == Command::SetFlicker(true))
        .unwrap();
    let modal_at = out
        .iter()
        .position(|c| matches!(c, Command::ShowModal(_)))
        .unwrap();
    assert!(progress_at < flicker_at && flicker_at < modal_at);
    assert!(session.flicker().is_active());
    assert_eq!(progress_of(&out).as_deref(), Some("Fragments: 1 / 6"));
    assert_eq!(
        out[modal_at],
        Command::ShowModal("Third among the stolen: beauty taken, never earned.")
    );
    assert!(session.modal().is_visible());
}

#[test]
fn replay_reopens_clue_without_touching_progress() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.activate("rose-2", &mut out).unwrap();
    session.close_modal(&mut out);
    let before = session.progress_text();

    out.clear();
    let act = session.activate("rose-2", &mut out).unwrap();
    assert_eq!(act, Activation::Replay);
    assert_eq!(out.as_slice(), &[Command::ShowModal(HOTSPOTS[1].clue)]);
    assert_eq!(session.progress().found_count(), 1);
    assert_eq!(session.progress_text(), before);
    assert_eq!(session.modal().text(), HOTSPOTS[1].clue);
}

#[test]
fn unknown_hotspot_is_rejected_without_side_effects() {
    let mut session = Session::default();
    let mut out = Commands::new();
    let err = session.activate("tulip-9", &mut out).unwrap_err();
    assert_eq!(err, SessionError::UnknownHotspot("tulip-9".into()));
    assert!(out.is_empty());
    assert_eq!(session.progress().found_count(), 0);
    assert!(!session.modal().is_visible());
}

#[test]
fn five_finds_keep_unlock_hidden() {
    let mut session = Session::default();
    for (i, h) in HOTSPOTS.iter().take(5).enumerate() {
        let mut out = Commands::new();
        session.activate(h.id, &mut out).unwrap();
        assert_eq!(progress_of(&out), Some(format!("Fragments: {} / 6", i + 1)));
        assert!(!scheduled(&out).iter().any(|(_, t)| *t == Task::RevealUnlock));
    }
    assert_eq!(session.phase(), Phase::InProgress);

    // An early timer cannot reveal the unlock action
    let mut out = Commands::new();
    session.elapsed(Task::RevealUnlock, &mut out);
    assert!(out.is_empty());
    assert!(!session.unlock_revealed());
}

#[test]
fn sixth_find_completes_and_schedules_unlock() {
    let mut session = Session::default();
    let out = find_all(&mut session);
    assert_eq!(progress_of(&out).as_deref(), Some("Fragments: 6 / 6"));
    assert!(out.contains(&Command::SetFlicker(true)));
    assert!(scheduled(&out).contains(&(UNLOCK_DELAY, Task::RevealUnlock)));
    assert_eq!(session.phase(), Phase::Complete);
    assert!(!session.unlock_revealed());

    let mut out = Commands::new();
    session.elapsed(Task::RevealUnlock, &mut out);
    assert_eq!(out.as_slice(), &[Command::ShowUnlock]);
    assert!(session.unlock_revealed());

    // Only once
    out.clear();
    session.elapsed(Task::RevealUnlock, &mut out);
    assert!(out.is_empty());
}

#[test]
fn completion_fires_exactly_once() {
    let mut session = Session::default();
    find_all(&mut session);
    for h in HOTSPOTS.iter() {
        let mut out = Commands::new();
        let act = session.activate(h.id, &mut out).unwrap();
        assert_eq!(act, Activation::Replay);
        assert!(scheduled(&out).is_empty());
    }
    assert_eq!(session.phase(), Phase::Complete);
}

#[test]
fn random_sequences_count_distinct_ids() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let mut session = Session::default();
        let mut seen = HashSet::new();
        let mut completions = 0;
        let len = rng.gen_range(0..30);
        for _ in 0..len {
            let h = HOTSPOTS[rng.gen_range(0..HOTSPOTS.len())];
            let mut out = Commands::new();
            if let Activation::Found { completed: true } = session.activate(h.id, &mut out).unwrap() {
                completions += 1;
            }
            seen.insert(h.id);
            assert_eq!(session.progress().found_count(), seen.len());
            assert_eq!(
                session.progress_text(),
                format!("Fragments: {} / 6", seen.len())
            );
        }
        let expected = usize::from(seen.len() == HOTSPOTS.len());
        assert_eq!(completions, expected);
    }
}

#[test]
fn modal_dismissal_paths() {
    let mut session = Session::default();
    let mut out = Commands::new();

    // Escape while hidden does nothing
    assert!(!session.key_down("Escape", &mut out));
    assert!(out.is_empty());

    session.activate("rose-1", &mut out).unwrap();
    out.clear();
    assert!(!session.key_down("Enter", &mut out));
    assert!(session.modal().is_visible());
    assert!(session.key_down("Escape", &mut out));
    assert_eq!(out.as_slice(), &[Command::HideModal]);
    assert!(!session.modal().is_visible());

    session.activate("rose-1", &mut out).unwrap();
    session.handle(Input::BackdropClick, &mut out).unwrap();
    assert!(!session.modal().is_visible());

    session.activate("rose-1", &mut out).unwrap();
    session.handle(Input::CloseModal, &mut out).unwrap();
    // Closing twice is harmless
    session.handle(Input::CloseModal, &mut out).unwrap();
    assert!(!session.modal().is_visible());
}

#[test]
fn reveal_requires_unlock() {
    let mut session = Session::default();
    let mut out = Commands::new();
    assert_eq!(
        session.reveal(&mut out),
        Err(SessionError::UnlockNotAvailable)
    );
    find_all(&mut session);
    assert_eq!(
        session.handle(Input::Unlock, &mut out),
        Err(SessionError::UnlockNotAvailable)
    );
    assert!(!session.revealed());
}

#[test]
fn reveal_shows_final_message_once() {
    let mut session = Session::default();
    find_all(&mut session);
    let mut out = Commands::new();
    session.elapsed(Task::RevealUnlock, &mut out);

    out.clear();
    session.handle(Input::Unlock, &mut out).unwrap();
    assert_eq!(
        out.as_slice(),
        &[Command::ShowFinal {
            title: "The Garden Remembers",
            body: "You were never meant to steal beauty. You were meant to cultivate it.",
        }]
    );
    assert!(session.revealed());

    out.clear();
    session.handle(Input::Unlock, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn music_toggle_on_and_off() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.handle(Input::ToggleMusic, &mut out).unwrap();
    assert!(session.progress().music_playing);
    assert_eq!(
        out.as_slice(),
        &[Command::SetMusicIndicator(true), Command::PlayMusic(1)]
    );
    assert!((session.music().volume() - 0.3).abs() < 1e-9);

    out.clear();
    session.handle(Input::ToggleMusic, &mut out).unwrap();
    assert!(!session.progress().music_playing);
    assert_eq!(
        out.as_slice(),
        &[Command::PauseMusic, Command::SetMusicIndicator(false)]
    );
    assert!((session.music().volume() - 0.3).abs() < 1e-9);
}

#[test]
fn rejected_playback_falls_back_to_muted() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.toggle_music(&mut out);
    out.clear();
    session.handle(Input::PlaybackRejected(1), &mut out).unwrap();
    assert_eq!(out.as_slice(), &[Command::SetMusicIndicator(false)]);
    assert!(!session.progress().music_playing);

    // Next toggle tries to play again rather than pausing
    out.clear();
    session.toggle_music(&mut out);
    assert!(out.contains(&Command::PlayMusic(2)));
}

// Replays a toggle the way the page applies it, with the refusal arriving
// synchronously while `PlayMusic` is being applied.
#[test]
fn immediate_refusal_leaves_muted_glyph() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.toggle_music(&mut out);

    let mut glyph_on = false;
    for cmd in out {
        match cmd {
            Command::SetMusicIndicator(on) => glyph_on = on,
            Command::PlayMusic(attempt) => {
                let mut nested = Commands::new();
                session.playback_rejected(attempt, &mut nested);
                for c in nested {
                    if let Command::SetMusicIndicator(on) = c {
                        glyph_on = on;
                    }
                }
            }
            _ => {}
        }
    }
    assert!(!glyph_on);
    assert!(!session.progress().music_playing);
}

#[test]
fn late_refusal_from_earlier_attempt_is_ignored() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.toggle_music(&mut out); // attempt 1, still pending
    session.toggle_music(&mut out); // off
    session.toggle_music(&mut out); // attempt 2

    out.clear();
    session.handle(Input::PlaybackRejected(1), &mut out).unwrap();
    assert!(out.is_empty());
    assert!(session.progress().music_playing);

    session.handle(Input::PlaybackRejected(2), &mut out).unwrap();
    assert_eq!(out.as_slice(), &[Command::SetMusicIndicator(false)]);
    assert!(!session.progress().music_playing);
}

#[test]
fn refusal_after_pause_is_ignored() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.toggle_music(&mut out);
    session.toggle_music(&mut out);
    out.clear();
    session.handle(Input::PlaybackRejected(1), &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn reveal_while_playing_fades_to_silence() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.toggle_music(&mut out);
    find_all(&mut session);
    session.elapsed(Task::RevealUnlock, &mut out);

    out.clear();
    session.reveal(&mut out).unwrap();
    assert_eq!(scheduled(&out), vec![(FADE_TICK, Task::FadeTick)]);

    let mut volumes = Vec::new();
    let mut ticks = 0;
    loop {
        out.clear();
        session.elapsed(Task::FadeTick, &mut out);
        ticks += 1;
        for c in &out {
            if let Command::SetVolume(v) = c {
                volumes.push(*v);
            }
        }
        if out.contains(&Command::PauseMusic) {
            break;
        }
        assert_eq!(scheduled(&out), vec![(FADE_TICK, Task::FadeTick)]);
        assert!(ticks < 20, "fade never finished");
    }
    assert_eq!(volumes, vec![0.25, 0.2, 0.15, 0.1, 0.05, 0.0]);
    assert!(!session.progress().music_playing);
    assert!(out.contains(&Command::SetMusicIndicator(false)));

    // Stray tick after the fade is ignored
    out.clear();
    session.elapsed(Task::FadeTick, &mut out);
    assert!(out.is_empty());
}

#[test]
fn reveal_while_muted_does_not_fade() {
    let mut session = Session::default();
    find_all(&mut session);
    let mut out = Commands::new();
    session.elapsed(Task::RevealUnlock, &mut out);
    out.clear();
    session.reveal(&mut out).unwrap();
    assert!(scheduled(&out).is_empty());
    assert!(!session.music().is_fading());
}

#[test]
fn pausing_mid_fade_stops_ticking() {
    let mut session = Session::default();
    let mut out = Commands::new();
    session.toggle_music(&mut out);
    find_all(&mut session);
    session.elapsed(Task::RevealUnlock, &mut out);
    session.reveal(&mut out).unwrap();
    session.elapsed(Task::FadeTick, &mut out);
    session.toggle_music(&mut out);

    out.clear();
    session.elapsed(Task::FadeTick, &mut out);
    assert!(out.is_empty());
    assert!((session.music().volume() - 0.25).abs() < 1e-9);
}
