mod manager;
mod mode;
mod output;
mod view;
mod view_registry;
mod workspace;
mod xyhw;

pub use manager::Manager;
pub use mode::{Edges, Mode, MoveGrab, ResizeGrab};
pub use output::{Output, FALLBACK_HEIGHT, FALLBACK_WIDTH};
pub use view::{View, ViewHandle};
pub use view_registry::ViewRegistry;
pub use workspace::{
    Workspace, WorkspaceId, DEFAULT_GAP, DEFAULT_MASTER_COUNT, DEFAULT_MASTER_RATIO,
};
pub use xyhw::Xyhw;
