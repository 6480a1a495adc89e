use anyhow::{bail, ensure, Context, Result};
use ocwm_core::layouts::Layout;
use ocwm_core::{Command, ViewHandle};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Command names usable in the configuration file. The argument, if any,
/// travels as a string next to it and is parsed by [`BaseCommand::to_command`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    Execute,
    Log,
    SwitchWorkspace,
    SendToWorkspace,
    SetLayout,
    SetMasterRatio,
    SetGap,
    SetMasterCount,
    SetFloating,
    ToggleFloating,
    SetOpacity,
    SetBlur,
    EnableEffects,
    /// `"open"` or `"open,close"`, in milliseconds.
    SetAnimationDurations,
    CloseWindow,
    KillWindow,
    Reload,
    Quit,
}

impl BaseCommand {
    /// Builds the core command, targeting the active workspace and the
    /// focused view.
    ///
    /// # Errors
    ///
    /// Will error if `value` is missing or malformed for this command.
    pub fn to_command(self, value: &str) -> Result<Command> {
        let value = value.trim();
        let command = match self {
            Self::Execute => {
                ensure!(!value.is_empty(), "value must not be empty");
                Command::Execute(value.to_owned())
            }
            Self::Log => Command::Log(value.to_owned()),
            Self::SwitchWorkspace => Command::SwitchWorkspace(
                i32::from_str(value).context("invalid workspace id for SwitchWorkspace")?,
            ),
            Self::SendToWorkspace => Command::SendViewToWorkspace {
                view: None,
                workspace: i32::from_str(value)
                    .context("invalid workspace id for SendToWorkspace")?,
            },
            Self::SetLayout => Command::SetLayout {
                workspace: None,
                layout: Layout::from_str(value)
                    .context("could not parse layout for command SetLayout")?,
            },
            Self::SetMasterRatio => Command::SetMasterRatio {
                workspace: None,
                ratio: f32::from_str(value).context("invalid ratio for SetMasterRatio")?,
            },
            Self::SetGap => Command::SetGap {
                workspace: None,
                gap: i32::from_str(value).context("invalid gap for SetGap")?,
            },
            Self::SetMasterCount => Command::SetMasterCount {
                workspace: None,
                count: i32::from_str(value).context("invalid count for SetMasterCount")?,
            },
            Self::SetFloating => Command::SetFloating {
                view: None,
                floating: bool::from_str(value).context("invalid boolean for SetFloating")?,
            },
            Self::ToggleFloating => Command::ToggleFloating(None),
            Self::SetOpacity => Command::SetOpacity {
                view: None,
                opacity: f32::from_str(value).context("invalid opacity for SetOpacity")?,
            },
            Self::SetBlur => Command::SetBlur {
                view: None,
                enabled: bool::from_str(value).context("invalid boolean for SetBlur")?,
            },
            Self::EnableEffects => Command::EnableEffects(
                bool::from_str(value).context("invalid boolean for EnableEffects")?,
            ),
            Self::SetAnimationDurations => parse_durations(value)?,
            Self::CloseWindow => Command::CloseView(None),
            Self::KillWindow => Command::KillView(None),
            Self::Reload => Command::Reload,
            Self::Quit => Command::Quit,
        };
        Ok(command)
    }
}

fn parse_durations(value: &str) -> Result<Command> {
    let mut parts = value.split(',').map(str::trim);
    let open = parts
        .next()
        .map(i64::from_str)
        .transpose()
        .context("invalid open duration for SetAnimationDurations")?;
    let Some(open) = open else {
        bail!("SetAnimationDurations needs at least an open duration");
    };
    let close = parts
        .next()
        .map(i64::from_str)
        .transpose()
        .context("invalid close duration for SetAnimationDurations")?;
    ensure!(parts.next().is_none(), "SetAnimationDurations takes at most two values");
    Ok(Command::SetAnimationDurations { open, close })
}

/// Points a command that acts on the focused view at `handle` instead.
#[must_use]
pub fn target_view(command: Command, handle: ViewHandle) -> Command {
    let view = Some(handle);
    match command {
        Command::SendViewToWorkspace {
            view: None,
            workspace,
        } => Command::SendViewToWorkspace { view, workspace },
        Command::SetFloating {
            view: None,
            floating,
        } => Command::SetFloating { view, floating },
        Command::ToggleFloating(None) => Command::ToggleFloating(view),
        Command::SetOpacity {
            view: None,
            opacity,
        } => Command::SetOpacity { view, opacity },
        Command::SetBlur {
            view: None,
            enabled,
        } => Command::SetBlur { view, enabled },
        Command::CloseView(None) => Command::CloseView(view),
        Command::KillView(None) => Command::KillView(view),
        other => other,
    }
}
