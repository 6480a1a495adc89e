use super::{LayoutParams, Placement};
use crate::models::{ViewHandle, Xyhw};

/// Master column on the left holding up to `master_count` views, the rest
/// stacked in a column on the right.
pub fn arrange(params: &LayoutParams, views: &[ViewHandle]) -> Vec<Placement> {
    let area = params.area;
    let gap = params.gap;
    let count = views.len() as i32;

    let master_width = (f64::from(area.w()) * f64::from(params.master_ratio)).floor() as i32;
    let stack_width = area.w() - master_width - gap;

    let master_count = params.master_count.max(1).min(count);
    let stack_count = count - master_count;

    let master_height =
        ((area.h() - (master_count + 1).saturating_mul(gap)) / master_count).max(1);
    let stack_height = if stack_count > 0 {
        ((area.h() - (stack_count + 1).saturating_mul(gap)) / stack_count).max(1)
    } else {
        0
    };

    views
        .iter()
        .enumerate()
        .map(|(index, handle)| {
            let index = index as i32;
            let cell = if index < master_count {
                Xyhw::new(
                    area.x() + gap,
                    area.y() + gap + index * (master_height + gap),
                    (master_width - gap).max(1),
                    master_height,
                )
            } else {
                let row = index - master_count;
                Xyhw::new(
                    area.x() + master_width + gap,
                    area.y() + gap + row * (stack_height + gap),
                    (stack_width - gap).max(1),
                    stack_height,
                )
            };
            Placement::Tile(*handle, cell)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(master_count: i32) -> LayoutParams {
        LayoutParams {
            area: Xyhw::new(0, 0, 1920, 1080),
            gap: 10,
            master_ratio: 0.55,
            master_count,
        }
    }

    fn cells(placements: &[Placement]) -> Vec<Xyhw> {
        placements
            .iter()
            .filter_map(|p| match p {
                Placement::Tile(_, xyhw) => Some(*xyhw),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn three_views_with_one_master() {
        let views = [ViewHandle(1), ViewHandle(2), ViewHandle(3)];
        let placed = cells(&arrange(&params(1), &views));
        // master width 1056, stack width 854, master height 1060, stack height 525
        assert_eq!(
            placed,
            vec![
                Xyhw::new(10, 10, 1046, 1060),
                Xyhw::new(1066, 10, 844, 525),
                Xyhw::new(1066, 545, 844, 525),
            ]
        );
    }

    #[test]
    fn a_single_view_only_fills_the_master_column() {
        let placed = cells(&arrange(&params(1), &[ViewHandle(7)]));
        assert_eq!(placed, vec![Xyhw::new(10, 10, 1046, 1060)]);
    }

    #[test]
    fn master_count_is_capped_by_the_number_of_views() {
        let views = [ViewHandle(1), ViewHandle(2)];
        let placed = cells(&arrange(&params(5), &views));
        // both views in the master column: (1080 - 3 * 10) / 2
        assert_eq!(
            placed,
            vec![Xyhw::new(10, 10, 1046, 525), Xyhw::new(10, 545, 1046, 525)]
        );
    }

    #[test]
    fn cells_are_offset_by_the_area_origin() {
        let mut offset = params(1);
        offset.area = Xyhw::new(100, 50, 1920, 1080);
        let placed = cells(&arrange(&offset, &[ViewHandle(1), ViewHandle(2)]));
        assert_eq!(placed[0].x(), 110);
        assert_eq!(placed[0].y(), 60);
        assert_eq!(placed[1].x(), 1166);
    }
}
