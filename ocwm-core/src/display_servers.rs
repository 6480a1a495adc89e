mod headless_display_server;

use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::ViewHandle;
use crate::DisplayEvent;

use futures::prelude::*;
use std::pin::Pin;

pub use self::headless_display_server::{HeadlessDisplayServer, HeadlessNode};

/// The compositing backend, as seen by the session core.
pub trait DisplayServer {
    /// # Errors
    ///
    /// Failing to acquire the backend is fatal at startup.
    fn new() -> Result<Self>
    where
        Self: Sized;

    fn get_next_events(&mut self) -> Vec<DisplayEvent>;

    fn execute_action(&mut self, act: DisplayAction);

    /// Topmost view under the point, with the point in surface-local coordinates.
    fn view_at(&self, x: f64, y: f64) -> Option<(ViewHandle, f64, f64)>;

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);

    fn shutdown(&mut self) {}
}
