//! Size policies, layout axes, and per-child size hints.

use crate::geometry::Size;

/// How a widget may grow along one axis once its minimum is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// Grows to its size hint, then only takes leftover space.
    Preferred,
    /// Shrink-to-content: grows to its size hint early, before other policies.
    Minimum,
    /// Grows to its size hint and never beyond.
    Maximum,
    /// Takes every spare cell available.
    #[default]
    Expanding,
}

impl SizePolicy {
    /// Whether the policy takes part in leftover levelling.
    #[inline]
    pub const fn levels(self) -> bool {
        matches!(self, SizePolicy::Preferred | SizePolicy::Minimum)
    }
}

/// Main axis along which a box stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Children side by side, left to right.
    #[default]
    Horizontal,
    /// Children stacked top to bottom.
    Vertical,
}

impl LayoutMode {
    /// The component of `size` along this axis.
    #[inline]
    pub const fn main(self, size: Size) -> i32 {
        match self {
            LayoutMode::Horizontal => size.width,
            LayoutMode::Vertical => size.height,
        }
    }

    /// The component of `size` across this axis.
    #[inline]
    pub const fn cross(self, size: Size) -> i32 {
        match self {
            LayoutMode::Horizontal => size.height,
            LayoutMode::Vertical => size.width,
        }
    }

    /// Build a size from main and cross extents.
    #[inline]
    pub const fn size(self, main: i32, cross: i32) -> Size {
        match self {
            LayoutMode::Horizontal => Size { width: main, height: cross },
            LayoutMode::Vertical => Size { width: cross, height: main },
        }
    }
}

/// Everything the distributor needs to know about one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeHints {
    /// Extent the child must never go below.
    pub min: Size,
    /// Extent the child would like absent constraints.
    pub preferred: Size,
    /// Horizontal policy.
    pub policy_x: SizePolicy,
    /// Vertical policy.
    pub policy_y: SizePolicy,
}

impl SizeHints {
    /// Hints with the same policy on both axes.
    pub const fn new(min: Size, preferred: Size, policy: SizePolicy) -> Self {
        Self { min, preferred, policy_x: policy, policy_y: policy }
    }

    /// Override the per-axis policies (builder).
    pub const fn with_policies(mut self, x: SizePolicy, y: SizePolicy) -> Self {
        self.policy_x = x;
        self.policy_y = y;
        self
    }

    /// Minimum extent along `mode`.
    #[inline]
    pub const fn min_along(&self, mode: LayoutMode) -> i32 {
        mode.main(self.min)
    }

    /// Preferred extent along `mode`.
    #[inline]
    pub const fn preferred_along(&self, mode: LayoutMode) -> i32 {
        mode.main(self.preferred)
    }

    /// Policy along `mode`.
    #[inline]
    pub const fn policy_along(&self, mode: LayoutMode) -> SizePolicy {
        match mode {
            LayoutMode::Horizontal => self.policy_x,
            LayoutMode::Vertical => self.policy_y,
        }
    }
}
