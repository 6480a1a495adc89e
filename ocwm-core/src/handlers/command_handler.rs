use crate::animation::Completion;
use crate::command::Command;
use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::{OcwmError, Result};
use crate::models::ViewHandle;
use crate::utils::child_process::exec_shell;
use crate::{DisplayAction, Manager};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Runs one command. Failures are logged and otherwise dropped.
    pub fn command_handler(&mut self, command: &Command) {
        if let Err(err) = self.process_internal(command) {
            tracing::error!("{:?} failed: {}", command, err);
        }
    }

    fn process_internal(&mut self, command: &Command) -> Result<()> {
        let state = &mut self.state;
        match command {
            Command::Execute(shell) => {
                exec_shell(shell, &mut self.children);
            }
            Command::Log(message) => tracing::info!("{}", message),

            Command::SwitchWorkspace(id) => {
                state.switch_workspace(*id)?;
            }
            Command::SendViewToWorkspace { view, workspace } => {
                let handle = focused_or(state.resolve_view(*view), *view)?;
                state.send_view_to_workspace(handle, *workspace)?;
            }
            Command::SetLayout { workspace, layout } => {
                let id = state.resolve_workspace(*workspace)?;
                state.set_layout(id, *layout)?;
            }
            Command::SetMasterRatio { workspace, ratio } => {
                let id = state.resolve_workspace(*workspace)?;
                state.set_master_ratio(id, *ratio)?;
            }
            Command::SetGap { workspace, gap } => {
                let id = state.resolve_workspace(*workspace)?;
                state.set_gap(id, *gap)?;
            }
            Command::SetMasterCount { workspace, count } => {
                let id = state.resolve_workspace(*workspace)?;
                state.set_master_count(id, *count)?;
            }

            Command::SetFloating { view, floating } => {
                let handle = focused_or(state.resolve_view(*view), *view)?;
                state.set_floating(handle, *floating);
            }
            Command::ToggleFloating(view) => {
                let handle = focused_or(state.resolve_view(*view), *view)?;
                state.toggle_floating(handle);
            }
            Command::SetOpacity { view, opacity } => {
                let handle = focused_or(state.resolve_view(*view), *view)?;
                state.set_opacity(handle, *opacity);
            }
            Command::SetBlur { view, enabled } => {
                let handle = focused_or(state.resolve_view(*view), *view)?;
                state.set_blur(handle, *enabled);
            }

            Command::EnableEffects(enabled) => state.set_effects_enabled(*enabled),
            Command::SetAnimationDurations { open, close } => {
                state.set_animation_durations(*open, *close)?;
            }

            Command::CloseView(view) => {
                let handle = focused_or(state.resolve_view(*view), *view)?;
                let completion: Completion = Box::new(move |_| vec![Command::KillView(Some(handle))]);
                if state.animate_close(handle, Some(completion)).is_none() {
                    state.actions.push_back(DisplayAction::CloseView(handle));
                }
            }
            Command::KillView(view) => {
                let handle = focused_or(state.resolve_view(*view), *view)?;
                state.actions.push_back(DisplayAction::CloseView(handle));
            }

            Command::Reload => self.reload_config(),
            Command::Quit => self.quit(),
        }
        Ok(())
    }
}

/// The resolved view, or an error naming what was asked for.
fn focused_or(resolved: Option<ViewHandle>, requested: Option<ViewHandle>) -> Result<ViewHandle> {
    resolved.ok_or_else(|| match requested {
        Some(handle) => OcwmError::ViewNotFound(handle),
        None => OcwmError::InvalidParameter("no view is focused".to_owned()),
    })
}
