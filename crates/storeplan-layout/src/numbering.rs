//! Branch-number assignment for table structures.
//!
//! A table run has an optional front end cap, N side locations on each side,
//! and an optional back end cap. Branch numbers are assigned from a
//! contiguous range; which physical slot gets which number depends on the
//! numbering rule (clockwise or counter-clockwise) and on whether numbering
//! starts at the low or the high corner of the run.
//!
//! Invariant: the assigned numbers are exactly
//! `start..=start + total - 1`, no gaps, no duplicates, where
//! `total = 2N + (front cap? 1) + (back cap? 1)`. This holds for all four
//! rule × reverse combinations and under end-cap suppression.

use serde::{Deserialize, Serialize};

/// Direction the branch numbering walks around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingRule {
    Clockwise,
    CounterClockwise,
}

/// Input to [`branch_plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingSpec {
    pub rule: NumberingRule,
    /// Numbering starts at the high corner of the run instead of the low one.
    pub reverse: bool,
    /// First (lowest) branch number of the structure.
    pub start_branch: u64,
    /// Side locations per side (N).
    pub side_count: u32,
    /// Front end cap suppressed.
    pub no_front: bool,
    /// Back end cap suppressed.
    pub no_back: bool,
}

/// Branch numbers assigned to each physical slot of one table structure.
///
/// `left[i]` / `right[i]` follow the run from the front cap toward the back
/// cap. For horizontal tables the builder maps "left" to the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPlan {
    pub front: Option<u64>,
    pub left: Vec<u64>,
    pub right: Vec<u64>,
    pub back: Option<u64>,
}

impl BranchPlan {
    /// Total branch numbers assigned.
    pub fn total_count(&self) -> usize {
        self.left.len()
            + self.right.len()
            + usize::from(self.front.is_some())
            + usize::from(self.back.is_some())
    }

    /// Every assigned branch number, in front / left / right / back order.
    pub fn all(&self) -> impl Iterator<Item = u64> + '_ {
        self.front
            .into_iter()
            .chain(self.left.iter().copied())
            .chain(self.right.iter().copied())
            .chain(self.back.into_iter())
    }
}

/// Computes the branch numbers for one table structure.
///
/// The non-reversed clockwise baseline numbers the left side descending from
/// `side_start + N - 1` and the right side ascending from `side_start + N`;
/// counter-clockwise exchanges the two side sequences; `reverse` mirrors
/// every number within the total range, so the high corner becomes the
/// starting corner.
pub fn branch_plan(spec: &NumberingSpec) -> BranchPlan {
    let n = spec.side_count as u64;
    let front_count = u64::from(!spec.no_front);
    let back_count = u64::from(!spec.no_back);
    let total = 2 * n + front_count + back_count;

    if total == 0 {
        return BranchPlan {
            front: None,
            left: Vec::new(),
            right: Vec::new(),
            back: None,
        };
    }

    let lo = spec.start_branch;
    let hi = lo + total - 1;
    let side_lo = lo + front_count;

    let mut left: Vec<u64> = (0..n).map(|i| side_lo + n - 1 - i).collect();
    let mut right: Vec<u64> = (0..n).map(|i| side_lo + n + i).collect();
    if spec.rule == NumberingRule::CounterClockwise {
        std::mem::swap(&mut left, &mut right);
    }

    let mut plan = BranchPlan {
        front: (!spec.no_front).then_some(lo),
        left,
        right,
        back: (!spec.no_back).then_some(hi),
    };

    if spec.reverse {
        let mirror = |x: u64| lo + hi - x;
        plan.front = plan.front.map(mirror);
        plan.back = plan.back.map(mirror);
        for v in plan.left.iter_mut().chain(plan.right.iter_mut()) {
            *v = mirror(*v);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(rule: NumberingRule, reverse: bool) -> NumberingSpec {
        NumberingSpec {
            rule,
            reverse,
            start_branch: 1,
            side_count: 4,
            no_front: false,
            no_back: false,
        }
    }

    fn assert_contiguous(plan: &BranchPlan, start: u64) {
        let mut nums: Vec<u64> = plan.all().collect();
        nums.sort_unstable();
        let expected: Vec<u64> = (start..start + nums.len() as u64).collect();
        assert_eq!(nums, expected, "branch numbers must be contiguous");
    }

    #[test]
    fn test_clockwise_baseline() {
        let plan = branch_plan(&spec(NumberingRule::Clockwise, false));
        assert_eq!(plan.front, Some(1));
        assert_eq!(plan.left, vec![5, 4, 3, 2]);
        assert_eq!(plan.right, vec![6, 7, 8, 9]);
        assert_eq!(plan.back, Some(10));
    }

    #[test]
    fn test_counter_clockwise_swaps_sides() {
        let plan = branch_plan(&spec(NumberingRule::CounterClockwise, false));
        assert_eq!(plan.front, Some(1));
        assert_eq!(plan.left, vec![6, 7, 8, 9]);
        assert_eq!(plan.right, vec![5, 4, 3, 2]);
        assert_eq!(plan.back, Some(10));
    }

    #[test]
    fn test_reverse_clockwise_mirrors_range() {
        let plan = branch_plan(&spec(NumberingRule::Clockwise, true));
        assert_eq!(plan.front, Some(10));
        assert_eq!(plan.left, vec![6, 7, 8, 9]);
        assert_eq!(plan.right, vec![5, 4, 3, 2]);
        assert_eq!(plan.back, Some(1));
    }

    #[test]
    fn test_reverse_counter_clockwise() {
        let plan = branch_plan(&spec(NumberingRule::CounterClockwise, true));
        assert_eq!(plan.front, Some(10));
        assert_eq!(plan.left, vec![5, 4, 3, 2]);
        assert_eq!(plan.right, vec![6, 7, 8, 9]);
        assert_eq!(plan.back, Some(1));
    }

    #[test]
    fn test_all_permutations_are_contiguous() {
        for rule in [NumberingRule::Clockwise, NumberingRule::CounterClockwise] {
            for reverse in [false, true] {
                let plan = branch_plan(&spec(rule, reverse));
                assert_eq!(plan.total_count(), 10);
                assert_contiguous(&plan, 1);
            }
        }
    }

    #[test]
    fn test_no_front_shrinks_range() {
        let plan = branch_plan(&NumberingSpec {
            no_front: true,
            ..spec(NumberingRule::Clockwise, false)
        });
        assert_eq!(plan.front, None);
        assert_eq!(plan.total_count(), 9);
        assert_contiguous(&plan, 1);
        assert!(plan.all().all(|b| b <= 9), "branch 10 must not be assigned");
    }

    #[test]
    fn test_no_back_shrinks_range() {
        let plan = branch_plan(&NumberingSpec {
            no_back: true,
            ..spec(NumberingRule::Clockwise, false)
        });
        assert_eq!(plan.back, None);
        assert_eq!(plan.total_count(), 9);
        assert_contiguous(&plan, 1);
    }

    #[test]
    fn test_caps_only() {
        let plan = branch_plan(&NumberingSpec {
            side_count: 0,
            ..spec(NumberingRule::Clockwise, false)
        });
        assert_eq!(plan.front, Some(1));
        assert_eq!(plan.back, Some(2));
        assert!(plan.left.is_empty());
    }

    #[test]
    fn test_empty_structure() {
        let plan = branch_plan(&NumberingSpec {
            side_count: 0,
            no_front: true,
            no_back: true,
            ..spec(NumberingRule::Clockwise, false)
        });
        assert_eq!(plan.total_count(), 0);
    }

    #[test]
    fn test_nonunit_start_branch() {
        let plan = branch_plan(&NumberingSpec {
            start_branch: 21,
            ..spec(NumberingRule::Clockwise, false)
        });
        assert_eq!(plan.front, Some(21));
        assert_eq!(plan.back, Some(30));
        assert_contiguous(&plan, 21);
    }
}
