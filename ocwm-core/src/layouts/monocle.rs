use super::{LayoutParams, Placement};
use crate::models::{ViewHandle, Xyhw};

/// Layout which gives only one view the full usable area. The focused view
/// wins if it is tiled here, otherwise the first one; every other view is hidden.
pub fn arrange(
    params: &LayoutParams,
    views: &[ViewHandle],
    focused: Option<ViewHandle>,
) -> Vec<Placement> {
    let Some(first) = views.first() else {
        return vec![];
    };
    let shown = focused
        .filter(|handle| views.contains(handle))
        .unwrap_or(*first);

    let area = params.area;
    let gap = params.gap;
    let full = Xyhw::new(
        area.x() + gap,
        area.y() + gap,
        (area.w() - 2 * gap).max(1),
        (area.h() - 2 * gap).max(1),
    );

    views
        .iter()
        .map(|handle| {
            if *handle == shown {
                Placement::Focus(*handle, full)
            } else {
                Placement::Hide(*handle)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LayoutParams {
        LayoutParams {
            area: Xyhw::new(0, 0, 1920, 1080),
            gap: 10,
            master_ratio: 0.55,
            master_count: 1,
        }
    }

    #[test]
    fn the_focused_view_fills_the_area() {
        let views = [ViewHandle(1), ViewHandle(2), ViewHandle(3)];
        let placed = arrange(&params(), &views, Some(ViewHandle(2)));
        assert_eq!(
            placed,
            vec![
                Placement::Hide(ViewHandle(1)),
                Placement::Focus(ViewHandle(2), Xyhw::new(10, 10, 1900, 1060)),
                Placement::Hide(ViewHandle(3)),
            ]
        );
    }

    #[test]
    fn the_first_view_wins_when_focus_is_elsewhere() {
        let views = [ViewHandle(1), ViewHandle(2)];
        let placed = arrange(&params(), &views, Some(ViewHandle(9)));
        assert_eq!(
            placed[0],
            Placement::Focus(ViewHandle(1), Xyhw::new(10, 10, 1900, 1060))
        );
        assert_eq!(placed[1], Placement::Hide(ViewHandle(2)));
    }
}
