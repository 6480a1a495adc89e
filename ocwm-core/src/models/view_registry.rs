use super::{View, ViewHandle, WorkspaceId};

/// Every view known to the session, in registration order.
#[derive(Debug, Default, Clone)]
pub struct ViewRegistry {
    views: Vec<View>,
}

impl ViewRegistry {
    /// Adds a view. Returns `false` and leaves the registry untouched if the
    /// handle is already registered.
    pub fn insert(&mut self, view: View) -> bool {
        if self.contains(view.handle) {
            return false;
        }
        self.views.push(view);
        true
    }

    pub fn remove(&mut self, handle: ViewHandle) -> Option<View> {
        let index = self.views.iter().position(|v| v.handle == handle)?;
        Some(self.views.remove(index))
    }

    #[must_use]
    pub fn get(&self, handle: ViewHandle) -> Option<&View> {
        self.views.iter().find(|v| v.handle == handle)
    }

    pub fn get_mut(&mut self, handle: ViewHandle) -> Option<&mut View> {
        self.views.iter_mut().find(|v| v.handle == handle)
    }

    #[must_use]
    pub fn contains(&self, handle: ViewHandle) -> bool {
        self.views.iter().any(|v| v.handle == handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Handles of every view tagged with the workspace, mapped or not.
    #[must_use]
    pub fn on_workspace(&self, id: WorkspaceId) -> Vec<ViewHandle> {
        self.views
            .iter()
            .filter(|v| v.has_workspace(id))
            .map(|v| v.handle)
            .collect()
    }

    /// Handles of the views the layout engine arranges on the workspace.
    #[must_use]
    pub fn tiled(&self, id: WorkspaceId) -> Vec<ViewHandle> {
        self.views
            .iter()
            .filter(|v| v.has_workspace(id) && v.is_tiled())
            .map(|v| v.handle)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(id: u32, workspace: WorkspaceId, mapped: bool) -> View {
        let mut view = View::new(ViewHandle(id), None, None);
        view.workspace = Some(workspace);
        view.mapped = mapped;
        view
    }

    #[test]
    fn inserting_a_known_handle_should_be_refused() {
        let mut registry = ViewRegistry::default();
        assert!(registry.insert(view(1, 1, false)));
        assert!(!registry.insert(view(1, 2, true)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(ViewHandle(1)).map(|v| v.workspace), Some(Some(1)));
    }

    #[test]
    fn tiled_views_keep_registration_order() {
        let mut registry = ViewRegistry::default();
        registry.insert(view(3, 1, true));
        registry.insert(view(1, 1, true));
        registry.insert(view(2, 2, true));
        registry.insert(view(4, 1, false));
        let mut floating = view(5, 1, true);
        floating.floating = true;
        registry.insert(floating);
        assert_eq!(registry.tiled(1), vec![ViewHandle(3), ViewHandle(1)]);
        assert_eq!(
            registry.on_workspace(1),
            vec![ViewHandle(3), ViewHandle(1), ViewHandle(4), ViewHandle(5)]
        );
    }

    #[test]
    fn removing_should_return_the_view() {
        let mut registry = ViewRegistry::default();
        registry.insert(view(1, 1, true));
        registry.insert(view(2, 1, true));
        let removed = registry.remove(ViewHandle(1));
        assert_eq!(removed.map(|v| v.handle), Some(ViewHandle(1)));
        assert!(registry.remove(ViewHandle(1)).is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(ViewHandle(2)));
    }
}
