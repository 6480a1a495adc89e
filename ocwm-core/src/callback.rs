use crate::command::Command;
use crate::errors::Result;
use crate::models::View;
use std::fmt;
use std::rc::Rc;

type CallbackFn = dyn Fn(Option<&View>) -> Result<Vec<Command>>;

/// Reference-counted handler registered by the configuration for a
/// keybinding or a hook.
///
/// Callbacks never touch the session directly: they return commands which
/// run once the current dispatch step has finished. Keybinding callbacks get
/// `None`, hook callbacks the view the event is about. Dropping the last
/// clone releases whatever the closure captured.
#[derive(Clone)]
pub struct Callback(Rc<CallbackFn>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Option<&View>) -> Result<Vec<Command>> + 'static,
    {
        Self(Rc::new(f))
    }

    /// # Errors
    ///
    /// Returns whatever error the handler reports.
    pub fn call(&self, view: Option<&View>) -> Result<Vec<Command>> {
        (self.0)(view)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}
