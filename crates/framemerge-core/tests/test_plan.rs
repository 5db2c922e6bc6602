use framemerge_core::merge::plan::merge_plan;

#[test]
fn test_plan_length_is_floor_division() {
    for total in 0..40 {
        for group_size in 1..8 {
            let plan = merge_plan(total, group_size);
            assert_eq!(plan.len(), total / group_size);
        }
    }
}

#[test]
fn test_offsets_step_by_group_size() {
    assert_eq!(merge_plan(10, 3), vec![0, 3, 6]);
}

#[test]
fn test_partial_trailing_group_dropped() {
    assert_eq!(merge_plan(6, 4), vec![0]);
}

#[test]
fn test_empty_when_too_few_frames() {
    assert!(merge_plan(2, 3).is_empty());
    assert!(merge_plan(0, 1).is_empty());
}

#[test]
fn test_every_group_fully_contained() {
    let total = 23;
    let group_size = 5;
    for start in merge_plan(total, group_size) {
        assert!(start + group_size <= total);
    }
}
