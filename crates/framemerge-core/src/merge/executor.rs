use std::ops::AddAssign;

use ndarray::{s, Array2, Array3, ArrayView3, Axis};
use num_traits::Zero;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::{MergeError, Result};

use super::plan::merge_plan;
use super::reduce::{reduce_group, SkipSet};

/// Execution mode for a merge run. Both strategies produce identical
/// output; only wall-clock behavior differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Concurrent,
}

/// Worker count used when none is configured.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Merge a frame stack into one summed frame per group.
///
/// Plans the group offsets, reduces each group with `skip` applied, and
/// returns the merged frames in plan order. A failure in any group aborts
/// the whole run; no partial result is returned.
pub fn execute<T, A>(
    source: ArrayView3<'_, T>,
    group_size: usize,
    skip: &SkipSet,
    strategy: Strategy,
    workers: Option<usize>,
) -> Result<Array3<A>>
where
    T: Copy + Sync,
    A: Copy + Zero + AddAssign + From<T> + Send,
{
    if group_size == 0 {
        return Err(MergeError::InvalidGroupSize(0));
    }

    let (total, height, width) = source.dim();
    let plan = merge_plan(total, group_size);
    let workers = workers.unwrap_or_else(default_worker_count);

    let merged = match strategy {
        // workers <= 1 always takes the sequential path.
        Strategy::Concurrent if workers > 1 => {
            merge_concurrent(source, group_size, skip, &plan, workers)?
        }
        _ => merge_sequential(source, group_size, skip, &plan)?,
    };

    let mut out = Array3::<A>::zeros((plan.len(), height, width));
    for (i, frame) in merged.into_iter().enumerate() {
        out.index_axis_mut(Axis(0), i).assign(&frame);
    }
    Ok(out)
}

fn merge_sequential<T, A>(
    source: ArrayView3<'_, T>,
    group_size: usize,
    skip: &SkipSet,
    plan: &[usize],
) -> Result<Vec<Array2<A>>>
where
    T: Copy,
    A: Copy + Zero + AddAssign + From<T>,
{
    plan.iter()
        .map(|&start| Ok(reduce_group(group_view(source, start, group_size)?, skip)))
        .collect()
}

fn merge_concurrent<T, A>(
    source: ArrayView3<'_, T>,
    group_size: usize,
    skip: &SkipSet,
    plan: &[usize],
    workers: usize,
) -> Result<Vec<Array2<A>>>
where
    T: Copy + Sync,
    A: Copy + Zero + AddAssign + From<T> + Send,
{
    // Fresh pool per run, torn down when this function returns.
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| MergeError::WorkerPool(e.to_string()))?;

    // Each unit reads only its own group view; the collect below is the
    // only synchronization point.
    let mut results: Vec<(usize, Array2<A>)> = pool.install(|| {
        plan.par_iter()
            .map(|&start| {
                let group = group_view(source, start, group_size)?;
                Ok((start, reduce_group(group, skip)))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    // Workers complete in arbitrary order; plan order is restored here.
    results.sort_by_key(|&(start, _)| start);
    Ok(results.into_iter().map(|(_, frame)| frame).collect())
}

fn group_view<T>(
    source: ArrayView3<'_, T>,
    start: usize,
    group_size: usize,
) -> Result<ArrayView3<'_, T>> {
    let total = source.dim().0;
    match start.checked_add(group_size) {
        Some(end) if end <= total => Ok(source.slice_move(s![start..end, .., ..])),
        _ => Err(MergeError::GroupOutOfRange {
            start,
            group_size,
            total,
        }),
    }
}
