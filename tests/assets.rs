
use std::env;
use std::fs;
use std::path::PathBuf;

/// Scratch directory for files written by a test binary
#[allow(dead_code)]
pub fn test_tmp() -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push(format!("rhomb-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Path of a scratch file `name`, removing anything left from earlier runs
#[allow(dead_code)]
pub fn tmp_file(name: &str) -> PathBuf {
    let path = test_tmp().join(name);
    let _ = fs::remove_file(&path);
    path
}
