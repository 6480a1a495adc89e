use crate::errors::{OcwmError, Result};
use crate::layouts::Layout;
use crate::models::{ViewHandle, Workspace, WorkspaceId};
use crate::State;

impl State {
    /// # Errors
    ///
    /// Will error if a workspace with the same id already exists.
    pub fn create_workspace(&mut self, id: WorkspaceId, name: impl Into<String>) -> Result<()> {
        if self.workspace(id).is_some() {
            return Err(OcwmError::DuplicateWorkspace(id));
        }
        self.workspaces.push(Workspace::new(id, name));
        Ok(())
    }

    /// Makes `id` the active workspace.
    ///
    /// Every view of the old workspace is hidden and every view of the new
    /// one shown, then the new workspace is laid out. Returns `false` if it
    /// was already active.
    ///
    /// # Errors
    ///
    /// Will error if the workspace does not exist.
    pub fn switch_workspace(&mut self, id: WorkspaceId) -> Result<bool> {
        if self.workspace(id).is_none() {
            return Err(OcwmError::WorkspaceNotFound(id));
        }
        if id == self.active_workspace {
            return Ok(false);
        }

        let previous = self.active_workspace;
        for handle in self.views.on_workspace(previous) {
            self.set_view_visible(handle, false);
        }
        if let Some(ws) = self.workspace_mut(previous) {
            ws.visible = false;
        }

        for handle in self.views.on_workspace(id) {
            self.set_view_visible(handle, true);
        }
        if let Some(ws) = self.workspace_mut(id) {
            ws.visible = true;
        }
        self.active_workspace = id;
        tracing::debug!("Switched from workspace {} to {}", previous, id);

        self.apply_layout(id);
        Ok(true)
    }

    /// # Errors
    ///
    /// Will error if the workspace does not exist.
    pub fn set_layout(&mut self, id: WorkspaceId, layout: Layout) -> Result<()> {
        let ws = self
            .workspace_mut(id)
            .ok_or(OcwmError::WorkspaceNotFound(id))?;
        ws.layout = layout;
        self.apply_layout(id);
        Ok(())
    }

    /// # Errors
    ///
    /// Will error if the workspace does not exist or the ratio is outside `(0, 1)`.
    pub fn set_master_ratio(&mut self, id: WorkspaceId, ratio: f32) -> Result<()> {
        self.workspace_mut(id)
            .ok_or(OcwmError::WorkspaceNotFound(id))?
            .set_master_ratio(ratio)?;
        self.apply_layout(id);
        Ok(())
    }

    /// # Errors
    ///
    /// Will error if the workspace does not exist or the gap is negative.
    pub fn set_gap(&mut self, id: WorkspaceId, gap: i32) -> Result<()> {
        self.workspace_mut(id)
            .ok_or(OcwmError::WorkspaceNotFound(id))?
            .set_gap(gap)?;
        self.apply_layout(id);
        Ok(())
    }

    /// # Errors
    ///
    /// Will error if the workspace does not exist or the count is below one.
    pub fn set_master_count(&mut self, id: WorkspaceId, count: i32) -> Result<()> {
        self.workspace_mut(id)
            .ok_or(OcwmError::WorkspaceNotFound(id))?
            .set_master_count(count)?;
        self.apply_layout(id);
        Ok(())
    }

    /// Moves a view to another workspace, hiding it unless that workspace
    /// is the active one.
    ///
    /// # Errors
    ///
    /// Will error if the view or the workspace does not exist.
    pub fn send_view_to_workspace(&mut self, handle: ViewHandle, id: WorkspaceId) -> Result<()> {
        if self.workspace(id).is_none() {
            return Err(OcwmError::WorkspaceNotFound(id));
        }
        let view = self
            .views
            .get_mut(handle)
            .ok_or(OcwmError::ViewNotFound(handle))?;
        let previous = view.workspace.replace(id);
        if previous == Some(id) {
            return Ok(());
        }

        self.set_view_visible(handle, id == self.active_workspace);
        if let Some(previous) = previous {
            self.apply_layout(previous);
        }
        self.apply_layout(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::OcwmError;
    use crate::layouts::Layout;
    use crate::{DisplayAction, Manager};

    fn visibility_changes(actions: &[DisplayAction]) -> Vec<(u32, bool)> {
        actions
            .iter()
            .filter_map(|act| match act {
                DisplayAction::SetVisible(handle, visible) => Some((handle.0, *visible)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn creating_a_duplicate_workspace_fails() {
        let mut manager = Manager::new_test();
        assert!(matches!(
            manager.state.create_workspace(3, "three"),
            Err(OcwmError::DuplicateWorkspace(3))
        ));
        manager.state.create_workspace(10, "ten").unwrap();
        let ws = manager.state.workspace(10).unwrap();
        assert_eq!(ws.name, "ten");
        assert_eq!(ws.layout, Layout::Floating);
        assert!(!ws.visible);
    }

    #[test]
    fn switching_to_the_active_workspace_is_a_no_op() {
        let mut manager = Manager::new_test();
        manager.open_test_view();
        manager.state.actions.clear();
        assert!(!manager.state.switch_workspace(1).unwrap());
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn switching_to_an_unknown_workspace_changes_nothing() {
        let mut manager = Manager::new_test();
        assert!(matches!(
            manager.state.switch_workspace(42),
            Err(OcwmError::WorkspaceNotFound(42))
        ));
        assert_eq!(manager.state.active_workspace, 1);
        assert!(manager.state.workspace(1).unwrap().visible);
    }

    #[test]
    fn switching_hides_old_views_and_shows_new_ones_once() {
        let mut manager = Manager::new_test();
        let a = manager.open_test_view();
        let b = manager.open_test_view();
        manager.state.switch_workspace(2).unwrap();
        let c = manager.open_test_view();
        manager.state.switch_workspace(1).unwrap();

        manager.state.actions.clear();
        assert!(manager.state.switch_workspace(2).unwrap());
        let changes = visibility_changes(manager.state.actions.make_contiguous());
        assert_eq!(changes, vec![(a.0, false), (b.0, false), (c.0, true)]);

        assert_eq!(manager.state.active_workspace, 2);
        assert!(manager.state.workspace(2).unwrap().visible);
        assert!(!manager.state.workspace(1).unwrap().visible);
        assert_eq!(
            manager.state.workspaces.iter().filter(|ws| ws.visible).count(),
            1
        );
    }

    #[test]
    fn switching_lays_out_the_new_workspace() {
        let mut manager = Manager::new_test();
        manager.state.set_layout(2, Layout::Monocle).unwrap();
        manager.state.switch_workspace(2).unwrap();
        let handle = manager.open_test_view();
        manager.state.switch_workspace(1).unwrap();
        manager.state.set_gap(2, 0).unwrap();

        manager.state.actions.clear();
        manager.state.switch_workspace(2).unwrap();
        assert!(manager
            .state
            .actions
            .contains(&DisplayAction::ResizeView(handle, 1920, 1080)));
    }

    #[test]
    fn invalid_parameters_are_rejected_without_change() {
        let mut manager = Manager::new_test();
        assert!(manager.state.set_master_ratio(1, 1.0).is_err());
        assert!(manager.state.set_master_ratio(1, 0.0).is_err());
        assert!(manager.state.set_gap(1, -1).is_err());
        assert!(manager.state.set_master_count(1, 0).is_err());
        assert!(manager.state.set_gap(42, 4).is_err());

        let ws = manager.state.workspace(1).unwrap();
        assert!((ws.master_ratio() - 0.55).abs() < f32::EPSILON);
        assert_eq!(ws.gap(), 10);
        assert_eq!(ws.master_count(), 1);
    }

    #[test]
    fn parameter_changes_re_run_the_layout() {
        let mut manager = Manager::new_test();
        manager.state.set_layout(1, Layout::MasterStack).unwrap();
        let handle = manager.open_test_view();
        manager.state.set_gap(1, 0).unwrap();
        let view = manager.state.views.get(handle).unwrap();
        assert_eq!((view.x, view.y), (0, 0));
        assert_eq!((view.geometry.w(), view.geometry.h()), (1056, 1080));

        manager.state.set_master_ratio(1, 0.5).unwrap();
        let view = manager.state.views.get(handle).unwrap();
        assert_eq!(view.geometry.w(), 960);
    }

    #[test]
    fn a_gap_wider_than_the_output_is_shrunk_to_fit() {
        let mut manager = Manager::new_test();
        manager.state.set_layout(1, Layout::Grid).unwrap();
        let handle = manager.open_test_view();

        manager.state.actions.clear();
        manager.state.set_gap(1, i32::MAX).unwrap();
        // largest gap leaving room on the short side: (1080 - 1) / 2 = 539
        assert!(manager
            .state
            .actions
            .contains(&DisplayAction::ResizeView(handle, 842, 2)));
        let view = manager.state.views.get(handle).unwrap();
        assert_eq!((view.x, view.y), (539, 539));
    }

    #[test]
    fn sending_a_view_away_hides_it_and_re_tiles_both_workspaces() {
        let mut manager = Manager::new_test();
        manager.state.set_layout(1, Layout::MasterStack).unwrap();
        let stays = manager.open_test_view();
        let leaves = manager.open_test_view();

        manager.state.actions.clear();
        manager.state.send_view_to_workspace(leaves, 3).unwrap();
        assert_eq!(manager.state.views.get(leaves).unwrap().workspace, Some(3));
        assert!(!manager.state.views.get(leaves).unwrap().visible);
        assert!(manager
            .state
            .actions
            .contains(&DisplayAction::ResizeView(stays, 1046, 1060)));
        assert!(manager.state.send_view_to_workspace(leaves, 42).is_err());
    }
}
