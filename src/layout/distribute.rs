//! The space distributor: split a box's main-axis extent among its children.
//!
//! Space is handed out one cell at a time, round-robin, in five phases:
//!
//! 1. every child below its minimum hint;
//! 2. `Minimum` children below their size hint;
//! 3. `Preferred` / `Maximum` children below their size hint;
//! 4. `Expanding` children, without bound;
//! 5. levelling: each round, every `Preferred` / `Minimum` child at the
//!    smallest current extent gets one more cell.
//!
//! Each phase runs until a full pass grants nothing. The whole procedure stops
//! the moment the budget is spent, so later phases may never run. Because
//! eligibility depends only on the current extents, the order of grants is the
//! same for every budget; a larger budget only extends it.

use super::policy::{LayoutMode, SizeHints, SizePolicy};

/// Extents for `items` along `mode`, one per item, in order.
///
/// The result sums to `total` whenever `total` covers every minimum hint and
/// some child can absorb the remainder (an `Expanding`, `Preferred` or
/// `Minimum` policy). When `total` is below the summed minimums the floors are
/// filled best-effort, earlier children first within each round. A budget of
/// zero or less yields all zeros.
pub fn distribute(items: &[SizeHints], total: i32, mode: LayoutMode) -> Vec<i32> {
    let mut sizes = vec![0; items.len()];
    if items.is_empty() || total <= 0 {
        return sizes;
    }
    let mut remaining = total;

    let phases: [&dyn Fn(&SizeHints, i32) -> bool; 4] = [
        &|item: &SizeHints, size: i32| size < item.min_along(mode),
        &|item: &SizeHints, size: i32| {
            item.policy_along(mode) == SizePolicy::Minimum && size < item.preferred_along(mode)
        },
        &|item: &SizeHints, size: i32| {
            matches!(item.policy_along(mode), SizePolicy::Preferred | SizePolicy::Maximum)
                && size < item.preferred_along(mode)
        },
        &|item: &SizeHints, _: i32| item.policy_along(mode) == SizePolicy::Expanding,
    ];

    for eligible in phases {
        if !grow_while(items, &mut sizes, &mut remaining, eligible) {
            return sizes;
        }
    }

    level(items, &mut sizes, &mut remaining, mode);
    sizes
}

/// Round-robin one cell per eligible item until a pass grants nothing.
///
/// Returns `false` once the budget is spent.
fn grow_while(
    items: &[SizeHints],
    sizes: &mut [i32],
    remaining: &mut i32,
    eligible: &dyn Fn(&SizeHints, i32) -> bool,
) -> bool {
    loop {
        let mut granted = false;
        for (item, size) in items.iter().zip(sizes.iter_mut()) {
            if *remaining <= 0 {
                return false;
            }
            if eligible(item, *size) {
                *size += 1;
                *remaining -= 1;
                granted = true;
            }
        }
        if !granted {
            return *remaining > 0;
        }
    }
}

/// Hand leftover cells to the smallest `Preferred` / `Minimum` children.
fn level(items: &[SizeHints], sizes: &mut [i32], remaining: &mut i32, mode: LayoutMode) {
    while *remaining > 0 {
        let floor = items
            .iter()
            .zip(sizes.iter())
            .filter(|(item, _)| item.policy_along(mode).levels())
            .map(|(_, &size)| size)
            .min();
        let Some(floor) = floor else {
            return;
        };
        for (item, size) in items.iter().zip(sizes.iter_mut()) {
            if *remaining <= 0 {
                return;
            }
            if item.policy_along(mode).levels() && *size == floor {
                *size += 1;
                *remaining -= 1;
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
