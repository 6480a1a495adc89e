use super::{LayoutParams, Placement};
use crate::models::{ViewHandle, Xyhw};

/// Square-ish grid filled row by row.
pub fn arrange(params: &LayoutParams, views: &[ViewHandle]) -> Vec<Placement> {
    let area = params.area;
    let gap = params.gap;
    let (cols, rows) = dimensions(views.len());

    let cell_width = ((area.w() - (cols + 1).saturating_mul(gap)) / cols).max(1);
    let cell_height = ((area.h() - (rows + 1).saturating_mul(gap)) / rows).max(1);

    views
        .iter()
        .enumerate()
        .map(|(index, handle)| {
            let index = index as i32;
            let col = index % cols;
            let row = index / cols;
            let cell = Xyhw::new(
                area.x() + gap + col * (cell_width + gap),
                area.y() + gap + row * (cell_height + gap),
                cell_width,
                cell_height,
            );
            Placement::Tile(*handle, cell)
        })
        .collect()
}

/// Columns and rows needed for `count` cells.
fn dimensions(count: usize) -> (i32, i32) {
    let count = count.max(1);
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);
    (cols as i32, rows as i32)
}
