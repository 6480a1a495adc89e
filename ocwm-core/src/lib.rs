//! Session core of the ocwm window manager.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of ocwm is to do one thing and to do that one thing
// well: manage windows.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod animation;
mod callback;
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod hooks;
pub mod keybindings;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

pub use callback::Callback;
pub use command::Command;
pub use config::{Config, Registrations};
pub use display_action::DisplayAction;
pub use display_event::{ButtonEvent, DisplayEvent, KeyEvent};
pub use display_servers::{DisplayServer, HeadlessDisplayServer};
pub use errors::{OcwmError, Result};
pub use models::{Manager, Mode, View, ViewHandle, Workspace, WorkspaceId};
pub use state::State;
pub use utils::child_process;
pub use utils::modmask_lookup::ModMask;

/// Version reported by the binaries.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
