use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown hotspot id `{0}`")]
    UnknownHotspot(String),
    #[error("final reveal requested before the unlock action was shown")]
    UnlockNotAvailable,
}
