use crate::models::{Edges, Mode, ResizeGrab, ViewHandle, Xyhw};
use crate::{DisplayAction, State};

impl State {
    /// Starts an interactive resize of the given edges. Only the view under
    /// the pointer may ask for one; other requests are ignored.
    pub fn begin_resize(&mut self, handle: ViewHandle, edges: Edges) -> bool {
        if self.pointer_focus != Some(handle) {
            tracing::debug!("Ignoring resize request from {} without pointer focus", handle);
            return false;
        }
        let Some(view) = self.views.get(handle) else {
            return false;
        };
        let start = view.layout_box();
        let mut border_x = start.x();
        if edges.contains(Edges::RIGHT) {
            border_x += start.w();
        }
        let mut border_y = start.y();
        if edges.contains(Edges::BOTTOM) {
            border_y += start.h();
        }

        let (x, y) = self.cursor;
        self.mode = Mode::Resize(ResizeGrab {
            handle,
            anchor_x: x - f64::from(border_x),
            anchor_y: y - f64::from(border_y),
            start,
            edges,
        });
        true
    }

    pub(crate) fn process_resize(&mut self, grab: ResizeGrab) {
        let Some(view) = self.views.get_mut(grab.handle) else {
            self.mode = Mode::Passthrough;
            return;
        };
        let target = resize_box(&grab, self.cursor);
        view.x = target.x() - view.geometry.x();
        view.y = target.y() - view.geometry.y();
        view.geometry.set_w(target.w());
        view.geometry.set_h(target.h());
        self.actions
            .push_back(DisplayAction::MoveView(grab.handle, view.x, view.y));
        self.actions
            .push_back(DisplayAction::ResizeView(grab.handle, target.w(), target.h()));
    }
}

/// The window box after dragging the grabbed edges to the pointer. Opposite
/// edges never cross; the box is at least 1x1.
fn resize_box(grab: &ResizeGrab, cursor: (f64, f64)) -> Xyhw {
    let border_x = (cursor.0 - grab.anchor_x) as i32;
    let border_y = (cursor.1 - grab.anchor_y) as i32;

    let mut left = grab.start.x();
    let mut right = grab.start.right();
    let mut top = grab.start.y();
    let mut bottom = grab.start.bottom();

    if grab.edges.contains(Edges::TOP) {
        top = border_y.min(bottom - 1);
    } else if grab.edges.contains(Edges::BOTTOM) {
        bottom = border_y.max(top + 1);
    }
    if grab.edges.contains(Edges::LEFT) {
        left = border_x.min(right - 1);
    } else if grab.edges.contains(Edges::RIGHT) {
        right = border_x.max(left + 1);
    }

    Xyhw::new(left, top, right - left, bottom - top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::View;

    fn state_with_view() -> (State, ViewHandle) {
        let mut state = State::new();
        let handle = ViewHandle(1);
        let mut view = View::new(handle, None, None);
        view.x = 100;
        view.y = 100;
        view.geometry = Xyhw::new(5, 5, 400, 300);
        state.views.insert(view);
        state.pointer_focus = Some(handle);
        (state, handle)
    }

    #[test]
    fn resizes_are_ignored_without_pointer_focus() {
        let (mut state, handle) = state_with_view();
        state.pointer_focus = None;
        assert!(!state.begin_resize(handle, Edges::RIGHT));
        assert!(state.mode.is_passthrough());
    }

    #[test]
    fn dragging_the_bottom_right_corner() {
        let (mut state, handle) = state_with_view();
        state.cursor = (505.0, 405.0);
        assert!(state.begin_resize(handle, Edges::BOTTOM | Edges::RIGHT));
        let Mode::Resize(grab) = state.mode else {
            panic!("expected a resize grab, got {:?}", state.mode);
        };
        assert_eq!((grab.anchor_x, grab.anchor_y), (0.0, 0.0));
        assert_eq!(grab.start, Xyhw::new(105, 105, 400, 300));

        state.cursor = (605.0, 455.0);
        state.process_resize(grab);
        let view = state.views.get(handle).unwrap();
        assert_eq!((view.x, view.y), (100, 100));
        assert_eq!((view.geometry.w(), view.geometry.h()), (500, 350));
        assert_eq!(
            state.actions.pop_back(),
            Some(DisplayAction::ResizeView(handle, 500, 350))
        );
    }

    #[test]
    fn dragging_the_top_left_corner_moves_the_view() {
        let (mut state, handle) = state_with_view();
        state.cursor = (105.0, 105.0);
        state.begin_resize(handle, Edges::TOP | Edges::LEFT);
        let Mode::Resize(grab) = state.mode else {
            panic!("expected a resize grab");
        };
        state.cursor = (55.0, 85.0);
        state.process_resize(grab);
        let view = state.views.get(handle).unwrap();
        assert_eq!((view.x, view.y), (50, 80));
        assert_eq!(view.layout_box(), Xyhw::new(55, 85, 450, 320));
    }

    #[test]
    fn edges_never_cross() {
        let start = Xyhw::new(100, 100, 200, 200);
        let all = [
            Edges::TOP,
            Edges::BOTTOM,
            Edges::LEFT,
            Edges::RIGHT,
            Edges::TOP | Edges::LEFT,
            Edges::TOP | Edges::RIGHT,
            Edges::BOTTOM | Edges::LEFT,
            Edges::BOTTOM | Edges::RIGHT,
        ];
        for edges in all {
            let grab = ResizeGrab {
                handle: ViewHandle(1),
                anchor_x: 3.5,
                anchor_y: -7.25,
                start,
                edges,
            };
            for x in (-400..=800).step_by(37) {
                for y in (-400..=800).step_by(41) {
                    let target = resize_box(&grab, (f64::from(x), f64::from(y)));
                    assert!(target.right() > target.x(), "{edges:?} at {x},{y}");
                    assert!(target.bottom() > target.y(), "{edges:?} at {x},{y}");
                }
            }
        }
    }
}
