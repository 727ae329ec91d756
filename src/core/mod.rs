pub mod catalog;
pub mod command;
pub mod constants;
pub mod effects;
pub mod error;
pub mod modal;
pub mod progress;
pub mod scene;
pub mod session;

pub use catalog::*;
pub use command::*;
pub use constants::*;
pub use effects::*;
pub use error::*;
pub use modal::*;
pub use progress::*;
pub use scene::*;
pub use session::*;
