//! Loading `config.yaml` from the working directory.
//!
//! Changing the working directory affects the whole process, so this binary
//! holds a single test.

use std::env;
use std::fs;
use yaml_lite::{configure, loader::DEFAULT_FILE, yaml, Error};

#[test]
fn test_configure_reads_default_file_from_working_directory() {
    let dir = env::temp_dir().join(format!("yaml_lite_default_config_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let previous = env::current_dir().unwrap();
    env::set_current_dir(&dir).unwrap();

    let missing = configure(None);

    fs::write(
        DEFAULT_FILE,
        "kros:\n  motor:\n    pid_controller:\n      kp: 7.0\n",
    )
    .unwrap();
    let loaded = configure(None);

    env::set_current_dir(&previous).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(missing, Err(Error::resource_not_found(DEFAULT_FILE)));
    assert_eq!(
        loaded.unwrap(),
        yaml!({"kros": {"motor": {"pid_controller": {"kp": 7.0}}}})
    );
}
