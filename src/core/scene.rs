// Scene options and the one-time onboarding hint.

use super::command::{Command, Commands, Task};
use super::constants::{HINT_DELAY, HINT_DURATION};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneConfig {
    /// Outline every hotspot so placements can be checked against the art.
    pub debug: bool,
}

impl SceneConfig {
    /// Read options from a URL query string such as `?debug` or `?debug=1`.
    pub fn from_query(query: &str) -> Self {
        let debug = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| {
                let mut kv = pair.splitn(2, '=');
                let key = kv.next()?;
                (key == "debug").then(|| kv.next().unwrap_or("1"))
            })
            .any(|value| !matches!(value, "0" | "false" | "off"));
        Self { debug }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hint {
    #[default]
    Pending,
    Showing,
    Done,
}

impl Hint {
    pub fn arm(&self, out: &mut Commands) {
        if *self == Hint::Pending {
            out.push(Command::Schedule {
                delay: HINT_DELAY,
                task: Task::StartHint,
            });
        }
    }

    pub fn show(&mut self, out: &mut Commands) {
        if *self != Hint::Pending {
            return;
        }
        *self = Hint::Showing;
        out.push(Command::SetHint(true));
        out.push(Command::Schedule {
            delay: HINT_DURATION,
            task: Task::EndHint,
        });
    }

    pub fn hide(&mut self, out: &mut Commands) {
        if *self == Hint::Showing {
            *self = Hint::Done;
            out.push(Command::SetHint(false));
        }
    }
}
