use crate::layouts::Placement;
use crate::models::{ViewHandle, WorkspaceId, Xyhw};
use crate::{DisplayAction, State};

impl State {
    /// Re-runs the workspace's layout policy over its tiled views. Does
    /// nothing while the workspace is not visible.
    pub fn apply_layout(&mut self, id: WorkspaceId) {
        let Some(workspace) = self.workspace(id) else {
            return;
        };
        if !workspace.visible {
            return;
        }
        let params = workspace.layout_params(self.usable_area());
        let layout = workspace.layout;
        let tiled = self.views.tiled(id);

        for placement in layout.arrange(&params, &tiled, self.focused) {
            match placement {
                Placement::Tile(handle, xyhw) => self.place_view(handle, xyhw),
                Placement::Focus(handle, xyhw) => {
                    self.place_view(handle, xyhw);
                    self.set_view_visible(handle, true);
                }
                Placement::Hide(handle) => self.set_view_visible(handle, false),
            }
        }
    }

    fn place_view(&mut self, handle: ViewHandle, xyhw: Xyhw) {
        let Some(view) = self.views.get_mut(handle) else {
            return;
        };
        view.x = xyhw.x();
        view.y = xyhw.y();
        view.geometry.set_w(xyhw.w());
        view.geometry.set_h(xyhw.h());
        self.actions
            .push_back(DisplayAction::MoveView(handle, xyhw.x(), xyhw.y()));
        self.actions
            .push_back(DisplayAction::ResizeView(handle, xyhw.w(), xyhw.h()));
    }
}

#[cfg(test)]
mod tests {
    use crate::layouts::Layout;
    use crate::{DisplayAction, Manager};

    #[test]
    fn hidden_workspaces_are_not_laid_out() {
        let mut manager = Manager::new_test();
        manager.state.set_layout(2, Layout::Grid).unwrap();
        manager.state.actions.clear();
        manager.state.apply_layout(2);
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn applying_twice_gives_the_same_geometry() {
        let mut manager = Manager::new_test();
        manager.state.set_layout(1, Layout::Grid).unwrap();
        for _ in 0..5 {
            manager.open_test_view();
        }
        manager.state.actions.clear();
        manager.state.apply_layout(1);
        let first: Vec<DisplayAction> = manager.state.actions.drain(..).collect();
        let views_after_first = manager.state.views.clone();
        manager.state.apply_layout(1);
        let second: Vec<DisplayAction> = manager.state.actions.drain(..).collect();
        assert_eq!(first, second);
        assert_eq!(
            views_after_first.iter().collect::<Vec<_>>(),
            manager.state.views.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn monocle_hides_everything_but_the_focused_view() {
        let mut manager = Manager::new_test();
        manager.state.set_layout(1, Layout::Monocle).unwrap();
        let first = manager.open_test_view();
        let second = manager.open_test_view();
        assert!(manager.state.views.get(second).unwrap().visible);
        assert!(!manager.state.views.get(first).unwrap().visible);
        let hidden = manager.display_server.node(first).unwrap();
        assert!(!hidden.enabled);
    }
}
