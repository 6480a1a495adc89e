//! Geometry policies for the tiled views of a workspace.
mod grid;
mod master_stack;
mod monocle;

use crate::errors::OcwmError;
use crate::models::{ViewHandle, Xyhw};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    #[default]
    Floating,
    MasterStack,
    Grid,
    Monocle,
}

pub const LAYOUTS: [Layout; 4] = [
    Layout::Floating,
    Layout::MasterStack,
    Layout::Grid,
    Layout::Monocle,
];

/// Inputs of a layout pass besides the views themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub area: Xyhw,
    pub gap: i32,
    pub master_ratio: f32,
    pub master_count: i32,
}

impl LayoutParams {
    /// Shrinks the gap so that one inset cell still has room on both axes.
    fn fitted(&self) -> Self {
        let room = (self.area.w().min(self.area.h()) - 1).max(0) / 2;
        Self {
            gap: self.gap.clamp(0, room),
            ..*self
        }
    }
}

/// One geometry assignment produced by a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Position and size the view.
    Tile(ViewHandle, Xyhw),
    /// Position and size the view, and make sure it is shown.
    Focus(ViewHandle, Xyhw),
    Hide(ViewHandle),
}

impl Layout {
    /// Computes placements for `tiled`, given in registration order. `focused`
    /// is the view holding keyboard focus, if any.
    ///
    /// This is a pure function of its arguments.
    #[must_use]
    pub fn arrange(
        self,
        params: &LayoutParams,
        tiled: &[ViewHandle],
        focused: Option<ViewHandle>,
    ) -> Vec<Placement> {
        if tiled.is_empty() {
            return vec![];
        }
        let params = &params.fitted();
        match self {
            Self::Floating => vec![],
            Self::MasterStack => master_stack::arrange(params, tiled),
            Self::Grid => grid::arrange(params, tiled),
            Self::Monocle => monocle::arrange(params, tiled, focused),
        }
    }
}

impl FromStr for Layout {
    type Err = OcwmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "floating" => Ok(Self::Floating),
            "master-stack" | "masterstack" | "tile" => Ok(Self::MasterStack),
            "grid" => Ok(Self::Grid),
            "monocle" | "max" => Ok(Self::Monocle),
            _ => Err(OcwmError::UnknownLayout(s.to_owned())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Floating => "floating",
            Self::MasterStack => "master-stack",
            Self::Grid => "grid",
            Self::Monocle => "monocle",
        };
        f.write_str(name)
    }
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

    fn handles(n: u32) -> Vec<ViewHandle> {
        (1..=n).map(ViewHandle).collect()
    }

    #[test]
    fn layout_names_should_round_trip_through_display() {
        for layout in LAYOUTS {
            assert_eq!(layout.to_string().parse::<Layout>().ok(), Some(layout));
        }
    }

    #[test]
    fn aliases_should_parse() {
        assert_eq!("tile".parse::<Layout>().ok(), Some(Layout::MasterStack));
        assert_eq!("max".parse::<Layout>().ok(), Some(Layout::Monocle));
        assert_eq!("MasterStack".parse::<Layout>().ok(), Some(Layout::MasterStack));
        assert!("spiral".parse::<Layout>().is_err());
    }

    #[test]
    fn floating_should_not_place_anything() {
        assert!(Layout::Floating.arrange(&params(), &handles(3), None).is_empty());
    }

    #[test]
    fn empty_workspaces_should_not_place_anything() {
        for layout in LAYOUTS {
            assert!(layout.arrange(&params(), &[], None).is_empty());
        }
    }

    #[test]
    fn oversized_gaps_should_still_give_positive_cells() {
        let mut huge = params();
        huge.gap = i32::MAX;
        for layout in LAYOUTS {
            for n in [1, 2, 5, 12] {
                for placement in layout.arrange(&huge, &handles(n), None) {
                    if let Placement::Tile(_, cell) | Placement::Focus(_, cell) = placement {
                        assert!(cell.w() >= 1 && cell.h() >= 1, "{layout}: {cell:?}");
                        assert!(cell.x() >= 0 && cell.y() >= 0, "{layout}: {cell:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn gaps_that_fit_should_be_left_alone() {
        assert_eq!(params().fitted(), params());
        let mut wide = params();
        wide.gap = 5000;
        assert_eq!(wide.fitted().gap, 539);
    }

    #[test]
    fn arranging_twice_should_give_identical_results() {
        let views = handles(5);
        for layout in LAYOUTS {
            let first = layout.arrange(&params(), &views, Some(ViewHandle(2)));
            let second = layout.arrange(&params(), &views, Some(ViewHandle(2)));
            assert_eq!(first, second);
        }
    }
}
