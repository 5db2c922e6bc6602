use std::collections::BTreeSet;
use std::ops::AddAssign;

use ndarray::{Array2, ArrayView3, Zip};
use num_traits::Zero;

use crate::error::{MergeError, Result};

/// Positions within a merge group that are excluded from the sum.
///
/// The same set applies to every group of a run. Construction enforces
/// that every position lies in `[0, group_size)` and that at least one
/// position per group remains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkipSet(BTreeSet<usize>);

impl SkipSet {
    pub fn new(indices: &[usize], group_size: usize) -> Result<Self> {
        if group_size == 0 {
            return Err(MergeError::InvalidGroupSize(0));
        }
        let set: BTreeSet<usize> = indices.iter().copied().collect();
        if let Some(&index) = set.iter().find(|&&i| i >= group_size) {
            return Err(MergeError::SkipIndexOutOfRange { index, group_size });
        }
        if set.len() >= group_size {
            return Err(MergeError::SkipSetTooLarge {
                len: set.len(),
                group_size,
            });
        }
        Ok(Self(set))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.0.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

/// Sum the frames of one group elementwise, leaving out skipped positions.
///
/// Accumulation happens in `A`, so narrow source types can be summed
/// without overflow. A skip set covering every position of the group
/// produces a zero frame; forbidding that is the job of run-level
/// validation, not the reducer.
pub fn reduce_group<T, A>(group: ArrayView3<'_, T>, skip: &SkipSet) -> Array2<A>
where
    T: Copy,
    A: Copy + Zero + AddAssign + From<T>,
{
    let (_, height, width) = group.dim();
    let mut acc = Array2::<A>::zeros((height, width));

    for (position, frame) in group.outer_iter().enumerate() {
        if skip.contains(position) {
            continue;
        }
        Zip::from(&mut acc).and(&frame).for_each(|a, &v| {
            *a += A::from(v);
        });
    }

    acc
}
