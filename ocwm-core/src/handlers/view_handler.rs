use crate::hooks::HookEvent;
use crate::models::{Mode, View, ViewHandle, Xyhw};
use crate::{DisplayAction, State};

impl State {
    /// Registers a new toplevel on the active workspace. It stays unmapped
    /// until the client maps it.
    pub fn view_created_handler(&mut self, mut view: View) {
        view.workspace = Some(self.active_workspace);
        view.mapped = false;
        view.floating = false;
        view.visible = true;
        view.set_opacity(1.0);
        view.scale = 1.0;
        let handle = view.handle;
        if self.views.insert(view) {
            tracing::debug!("View {} created on workspace {}", handle, self.active_workspace);
        } else {
            tracing::warn!("View {} was already registered", handle);
        }
    }

    pub fn view_mapped_handler(&mut self, handle: ViewHandle) {
        let Some(view) = self.views.get_mut(handle) else {
            tracing::debug!("Map for unknown view {}", handle);
            return;
        };
        view.mapped = true;
        let workspace = view.workspace;

        if workspace != Some(self.active_workspace) {
            self.set_view_visible(handle, false);
        }
        self.focus_view(handle);
        if let Some(id) = workspace {
            self.apply_layout(id);
        }
        self.animate_open(handle);
        self.fire_hook(HookEvent::WindowOpen, handle);
    }

    pub fn view_unmapped_handler(&mut self, handle: ViewHandle) {
        let Some(view) = self.views.get_mut(handle) else {
            tracing::debug!("Unmap for unknown view {}", handle);
            return;
        };
        view.mapped = false;
        let workspace = view.workspace;

        self.release_view(handle);
        self.fire_hook(HookEvent::WindowClose, handle);
        if let Some(id) = workspace {
            self.apply_layout(id);
        }
    }

    /// Drops the view and everything that refers to it. Animations still
    /// running on it are canceled without their completions.
    pub fn view_destroyed_handler(&mut self, handle: ViewHandle) {
        let canceled = self.animations.cancel_for_view(handle);
        if canceled > 0 {
            tracing::debug!("Canceled {} animations of view {}", canceled, handle);
        }
        self.release_view(handle);
        match self.views.remove(handle) {
            Some(view) if view.mapped => {
                if let Some(id) = view.workspace {
                    self.apply_layout(id);
                }
            }
            Some(_) => {}
            None => tracing::debug!("Destroy for unknown view {}", handle),
        }
    }

    pub fn view_geometry_handler(&mut self, handle: ViewHandle, geometry: Xyhw) {
        if let Some(view) = self.views.get_mut(handle) {
            view.geometry = geometry;
        }
    }

    /// Clears focus, pointer focus and grabs held by the view.
    fn release_view(&mut self, handle: ViewHandle) {
        if self.focused == Some(handle) {
            self.focused = None;
        }
        if self.pointer_focus == Some(handle) {
            self.pointer_focus = None;
        }
        if self.mode.grabbed() == Some(handle) {
            self.mode = Mode::Passthrough;
        }
    }

    /// Returns `false` if the view is unknown.
    pub fn set_floating(&mut self, handle: ViewHandle, floating: bool) -> bool {
        let Some(view) = self.views.get_mut(handle) else {
            return false;
        };
        view.floating = floating;
        if let Some(id) = view.workspace {
            self.apply_layout(id);
        }
        true
    }

    pub fn toggle_floating(&mut self, handle: ViewHandle) -> bool {
        let Some(floating) = self.views.get(handle).map(|v| v.floating) else {
            return false;
        };
        self.set_floating(handle, !floating)
    }

    pub fn set_fullscreen(&mut self, handle: ViewHandle, fullscreen: bool) -> bool {
        let Some(view) = self.views.get_mut(handle) else {
            return false;
        };
        view.fullscreen = fullscreen;
        let workspace = view.workspace;
        self.actions
            .push_back(DisplayAction::SetFullscreen(handle, fullscreen));
        if let Some(id) = workspace {
            self.apply_layout(id);
        }
        true
    }

    /// Opacity is clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, handle: ViewHandle, opacity: f32) -> bool {
        let Some(view) = self.views.get_mut(handle) else {
            return false;
        };
        view.set_opacity(opacity);
        let opacity = view.opacity();
        self.actions
            .push_back(DisplayAction::SetOpacity(handle, opacity));
        true
    }

    pub fn set_blur(&mut self, handle: ViewHandle, enabled: bool) -> bool {
        let Some(view) = self.views.get_mut(handle) else {
            return false;
        };
        view.blur = enabled;
        self.actions.push_back(DisplayAction::SetBlur(handle, enabled));
        true
    }
}
