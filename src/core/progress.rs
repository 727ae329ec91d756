// Session-wide progress: which fragments have been found and whether the
// background track is playing. Nothing here is persisted.

use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Complete,
}

#[derive(Clone, Debug, Default)]
pub struct ProgressState {
    found: FnvHashSet<&'static str>,
    pub music_playing: bool,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a find. Returns `false` when the id was already found.
    pub fn mark_found(&mut self, id: &'static str) -> bool {
        self.found.insert(id)
    }

    pub fn is_found(&self, id: &str) -> bool {
        self.found.contains(id)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn phase(&self, total: usize) -> Phase {
        if total > 0 && self.found.len() >= total {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }
}

/// Status line shown in the progress indicator.
#[inline]
pub fn progress_text(found: usize, total: usize) -> String {
    format!("Fragments: {found} / {total}")
}
