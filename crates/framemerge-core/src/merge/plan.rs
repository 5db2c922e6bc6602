/// Compute the start offset of every merge group.
///
/// `[0, total_frames)` is partitioned into consecutive blocks of
/// `group_size`; a trailing partial block is dropped, never padded. The
/// result is empty when `total_frames < group_size`. Callers validate
/// `group_size > 0`; a zero group size yields an empty plan.
pub fn merge_plan(total_frames: usize, group_size: usize) -> Vec<usize> {
    if group_size == 0 {
        return Vec::new();
    }
    let n_groups = total_frames / group_size;
    (0..n_groups).map(|i| i * group_size).collect()
}
