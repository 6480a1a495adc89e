use crate::layouts::Layout;
use crate::models::{ViewHandle, WorkspaceId};
use serde::{Deserialize, Serialize};

/// A state mutation requested by a callback or by the configuration.
///
/// `workspace: None` targets the active workspace, `view: None` the view
/// holding keyboard focus.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command {
    Execute(String),
    Log(String),
    SwitchWorkspace(WorkspaceId),
    SendViewToWorkspace {
        view: Option<ViewHandle>,
        workspace: WorkspaceId,
    },
    SetLayout {
        workspace: Option<WorkspaceId>,
        layout: Layout,
    },
    SetMasterRatio {
        workspace: Option<WorkspaceId>,
        ratio: f32,
    },
    SetGap {
        workspace: Option<WorkspaceId>,
        gap: i32,
    },
    SetMasterCount {
        workspace: Option<WorkspaceId>,
        count: i32,
    },
    SetFloating {
        view: Option<ViewHandle>,
        floating: bool,
    },
    ToggleFloating(Option<ViewHandle>),
    SetOpacity {
        view: Option<ViewHandle>,
        opacity: f32,
    },
    SetBlur {
        view: Option<ViewHandle>,
        enabled: bool,
    },
    EnableEffects(bool),
    SetAnimationDurations {
        open: i64,
        close: Option<i64>,
    },
    /// Ask the client to close, playing the close animation first when effects are on.
    CloseView(Option<ViewHandle>),
    /// Ask the client to close right away.
    KillView(Option<ViewHandle>),
    Reload,
    Quit,
}
