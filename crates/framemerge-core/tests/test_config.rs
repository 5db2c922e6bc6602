use framemerge_core::config::MergeConfig;
use framemerge_core::error::MergeError;

#[test]
fn test_default_roundtrip_toml() {
    let config = MergeConfig::default();
    let text = toml::to_string(&config).unwrap();
    let back: MergeConfig = toml::from_str(&text).unwrap();

    assert_eq!(back.n_frames, config.n_frames);
    assert_eq!(back.group_size, config.group_size);
    assert_eq!(back.data_location, "entry/data");
    assert_eq!(back.data_name, "data");
}

#[test]
fn test_minimal_toml_uses_defaults() {
    let config: MergeConfig = toml::from_str("input = \"run.h5\"\noutput = \"out.h5\"\n").unwrap();

    assert_eq!(config.n_frames, 10_000);
    assert_eq!(config.group_size, 10);
    assert!(config.skip.is_empty());
    assert!(config.workers.is_none());
    assert!(!config.sequential);
}

#[test]
fn test_zero_group_size_rejected() {
    let config = MergeConfig {
        group_size: 0,
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, MergeError::InvalidGroupSize(0)));
}

#[test]
fn test_out_of_range_skip_rejected() {
    let config = MergeConfig {
        group_size: 3,
        skip: vec![5],
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, MergeError::SkipIndexOutOfRange { .. }));
}

#[test]
fn test_skip_covering_group_rejected() {
    let config = MergeConfig {
        group_size: 2,
        skip: vec![0, 1],
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, MergeError::SkipSetTooLarge { .. }));
}

#[test]
fn test_valid_config_builds_skip_set() {
    let config = MergeConfig {
        group_size: 4,
        skip: vec![1, 3],
        ..Default::default()
    };
    let skip = config.validate().unwrap();
    assert_eq!(skip.len(), 2);
    assert!(skip.contains(1));
    assert!(skip.contains(3));
}
