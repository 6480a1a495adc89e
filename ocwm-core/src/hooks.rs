//! Lifecycle notifications delivered to configuration callbacks.
use crate::callback::Callback;
use crate::command::Command;
use crate::errors::OcwmError;
use crate::models::View;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    WindowOpen,
    WindowClose,
    WindowFocus,
}

pub const HOOK_EVENTS: [HookEvent; 3] = [
    HookEvent::WindowOpen,
    HookEvent::WindowClose,
    HookEvent::WindowFocus,
];

impl FromStr for HookEvent {
    type Err = OcwmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "window_open" => Ok(Self::WindowOpen),
            "window_close" => Ok(Self::WindowClose),
            "window_focus" => Ok(Self::WindowFocus),
            _ => Err(OcwmError::UnknownHook(s.to_owned())),
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WindowOpen => "window_open",
            Self::WindowClose => "window_close",
            Self::WindowFocus => "window_focus",
        })
    }
}

/// At most one subscriber per event.
#[derive(Debug, Default, Clone)]
pub struct HookBus {
    window_open: Option<Callback>,
    window_close: Option<Callback>,
    window_focus: Option<Callback>,
}

impl HookBus {
    fn slot(&mut self, event: HookEvent) -> &mut Option<Callback> {
        match event {
            HookEvent::WindowOpen => &mut self.window_open,
            HookEvent::WindowClose => &mut self.window_close,
            HookEvent::WindowFocus => &mut self.window_focus,
        }
    }

    /// Subscribes `callback`, returning the subscriber it replaced.
    pub fn register(&mut self, event: HookEvent, callback: Callback) -> Option<Callback> {
        self.slot(event).replace(callback)
    }

    #[must_use]
    pub fn subscriber(&self, event: HookEvent) -> Option<&Callback> {
        match event {
            HookEvent::WindowOpen => self.window_open.as_ref(),
            HookEvent::WindowClose => self.window_close.as_ref(),
            HookEvent::WindowFocus => self.window_focus.as_ref(),
        }
    }

    /// Runs the subscriber of `event`, if any. A failing subscriber is logged
    /// and its commands are dropped.
    pub fn fire(&self, event: HookEvent, view: &View) -> Vec<Command> {
        let Some(callback) = self.subscriber(event) else {
            return vec![];
        };
        match callback.call(Some(view)) {
            Ok(commands) => commands,
            Err(err) => {
                tracing::error!("Hook {} failed for view {}: {}", event, view.handle, err);
                vec![]
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.window_open = None;
        self.window_close = None;
        self.window_focus = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        HOOK_EVENTS
            .iter()
            .filter(|e| self.subscriber(**e).is_some())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
