use crate::errors::{OcwmError, Result};
use crate::layouts::{Layout, LayoutParams};
use crate::models::Xyhw;
use serde::{Deserialize, Serialize};

pub type WorkspaceId = i32;

pub const DEFAULT_MASTER_RATIO: f32 = 0.55;
pub const DEFAULT_MASTER_COUNT: i32 = 1;
pub const DEFAULT_GAP: i32 = 10;

/// A named virtual desktop with its own layout policy and parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub layout: Layout,
    pub visible: bool,
    master_ratio: f32,
    master_count: i32,
    gap: i32,
}

impl Workspace {
    #[must_use]
    pub fn new(id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            layout: Layout::default(),
            visible: false,
            master_ratio: DEFAULT_MASTER_RATIO,
            master_count: DEFAULT_MASTER_COUNT,
            gap: DEFAULT_GAP,
        }
    }

    #[must_use]
    pub const fn master_ratio(&self) -> f32 {
        self.master_ratio
    }

    #[must_use]
    pub const fn master_count(&self) -> i32 {
        self.master_count
    }

    #[must_use]
    pub const fn gap(&self) -> i32 {
        self.gap
    }

    /// # Errors
    ///
    /// Rejects ratios outside the open interval `(0, 1)` without changing anything.
    pub fn set_master_ratio(&mut self, ratio: f32) -> Result<()> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(OcwmError::InvalidParameter(format!(
                "master ratio must be between 0 and 1 (exclusive), got {ratio}"
            )));
        }
        self.master_ratio = ratio;
        Ok(())
    }

    /// # Errors
    ///
    /// Rejects negative gaps without changing anything.
    pub fn set_gap(&mut self, gap: i32) -> Result<()> {
        if gap < 0 {
            return Err(OcwmError::InvalidParameter(format!(
                "gap must be non-negative, got {gap}"
            )));
        }
        self.gap = gap;
        Ok(())
    }

    /// # Errors
    ///
    /// Rejects counts below one without changing anything.
    pub fn set_master_count(&mut self, count: i32) -> Result<()> {
        if count < 1 {
            return Err(OcwmError::InvalidParameter(format!(
                "master count must be at least 1, got {count}"
            )));
        }
        self.master_count = count;
        Ok(())
    }

    #[must_use]
    pub const fn layout_params(&self, area: Xyhw) -> LayoutParams {
        LayoutParams {
            area,
            gap: self.gap,
            master_ratio: self.master_ratio,
            master_count: self.master_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_workspaces_should_use_defaults() {
        let ws = Workspace::new(3, "3");
        assert_eq!(ws.layout, Layout::Floating);
        assert!(!ws.visible);
        assert!((ws.master_ratio() - 0.55).abs() < f32::EPSILON);
        assert_eq!(ws.master_count(), 1);
        assert_eq!(ws.gap(), 10);
    }

    #[test]
    fn out_of_range_ratios_should_be_rejected_without_mutation() {
        let mut ws = Workspace::new(1, "1");
        for ratio in [0.0, 1.0, -0.5, 1.5, f32::NAN] {
            assert!(ws.set_master_ratio(ratio).is_err());
            assert!((ws.master_ratio() - DEFAULT_MASTER_RATIO).abs() < f32::EPSILON);
        }
        assert!(ws.set_master_ratio(0.7).is_ok());
        assert!((ws.master_ratio() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn negative_gap_and_zero_master_count_should_be_rejected() {
        let mut ws = Workspace::new(1, "1");
        assert!(ws.set_gap(-1).is_err());
        assert_eq!(ws.gap(), DEFAULT_GAP);
        assert!(ws.set_gap(0).is_ok());
        assert_eq!(ws.gap(), 0);
        assert!(ws.set_master_count(0).is_err());
        assert_eq!(ws.master_count(), DEFAULT_MASTER_COUNT);
        assert!(ws.set_master_count(2).is_ok());
        assert_eq!(ws.master_count(), 2);
    }
}
