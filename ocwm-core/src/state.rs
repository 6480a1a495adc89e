//! Mutable session state.
use crate::animation::{AnimationScheduler, EffectSettings};
use crate::command::Command;
use crate::errors::{OcwmError, Result};
use crate::hooks::{HookBus, HookEvent};
use crate::keybindings::Keybindings;
use crate::models::{
    Mode, Output, ViewHandle, ViewRegistry, Workspace, WorkspaceId, Xyhw, FALLBACK_HEIGHT,
    FALLBACK_WIDTH,
};
use crate::{Callback, DisplayAction};
use std::collections::VecDeque;

/// Number of workspaces created at startup, named "1" and up.
pub const DEFAULT_WORKSPACE_COUNT: i32 = 9;

#[derive(Debug)]
pub struct State {
    pub views: ViewRegistry,
    pub workspaces: Vec<Workspace>,
    pub active_workspace: WorkspaceId,
    pub outputs: Vec<Output>,
    pub animations: AnimationScheduler,
    pub effects: EffectSettings,
    pub mode: Mode,
    /// Pointer position in layout coordinates.
    pub cursor: (f64, f64),
    /// View holding keyboard focus.
    pub focused: Option<ViewHandle>,
    pub pointer_focus: Option<ViewHandle>,
    pub keybindings: Keybindings,
    pub hooks: HookBus,
    /// Actions for the display server, in order.
    pub actions: VecDeque<DisplayAction>,
    /// Commands returned by callbacks, run once the current dispatch step ends.
    pub deferred: VecDeque<Command>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// A session with the default workspaces, the first one active.
    #[must_use]
    pub fn new() -> Self {
        let mut workspaces: Vec<Workspace> = (1..=DEFAULT_WORKSPACE_COUNT)
            .map(|id| Workspace::new(id, id.to_string()))
            .collect();
        if let Some(first) = workspaces.first_mut() {
            first.visible = true;
        }
        Self {
            views: ViewRegistry::default(),
            workspaces,
            active_workspace: 1,
            outputs: vec![],
            animations: AnimationScheduler::default(),
            effects: EffectSettings::default(),
            mode: Mode::default(),
            cursor: (0.0, 0.0),
            focused: None,
            pointer_focus: None,
            keybindings: Keybindings::default(),
            hooks: HookBus::default(),
            actions: VecDeque::new(),
            deferred: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn workspace(&self, id: WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.id == id)
    }

    pub fn workspace_mut(&mut self, id: WorkspaceId) -> Option<&mut Workspace> {
        self.workspaces.iter_mut().find(|ws| ws.id == id)
    }

    #[must_use]
    pub fn active_workspace(&self) -> Option<&Workspace> {
        self.workspace(self.active_workspace)
    }

    /// `None` means the active workspace.
    ///
    /// # Errors
    ///
    /// Will error if the workspace does not exist.
    pub fn resolve_workspace(&self, id: Option<WorkspaceId>) -> Result<WorkspaceId> {
        let id = id.unwrap_or(self.active_workspace);
        self.workspace(id)
            .map(|ws| ws.id)
            .ok_or(OcwmError::WorkspaceNotFound(id))
    }

    /// `None` means the focused view.
    #[must_use]
    pub fn resolve_view(&self, handle: Option<ViewHandle>) -> Option<ViewHandle> {
        handle
            .or(self.focused)
            .filter(|handle| self.views.contains(*handle))
    }

    /// Area available to layouts: the first output, or a fallback while none
    /// is attached.
    #[must_use]
    pub fn usable_area(&self) -> Xyhw {
        self.outputs.first().map_or(
            Xyhw::new(0, 0, FALLBACK_WIDTH, FALLBACK_HEIGHT),
            |output| Xyhw::new(0, 0, output.width, output.height),
        )
    }

    /// Enables or disables the view's node.
    pub fn set_view_visible(&mut self, handle: ViewHandle, visible: bool) {
        if let Some(view) = self.views.get_mut(handle) {
            view.visible = visible;
            self.actions
                .push_back(DisplayAction::SetVisible(handle, visible));
        }
    }

    pub(crate) fn fire_hook(&mut self, event: HookEvent, handle: ViewHandle) {
        let Some(view) = self.views.get(handle) else {
            return;
        };
        let commands = self.hooks.fire(event, view);
        self.deferred.extend(commands);
    }

    /// Runs a keybinding callback. Failures are logged and queue nothing.
    pub(crate) fn run_callback(&mut self, callback: &Callback) {
        match callback.call(None) {
            Ok(commands) => self.deferred.extend(commands),
            Err(err) => tracing::error!("Callback failed: {}", err),
        }
    }
}
