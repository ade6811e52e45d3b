//! Partition naturally-sorted backups into shots.

use crate::models::shot::Shot;
use std::path::Path;

/// Shot key of a file: the first `depth` underscore-separated tokens of its stem.
///
/// `shot3_1_bak1.hip` with depth 1 → `shot3`, with depth 2 → `shot3_1`.
pub fn shot_key(path: impl AsRef<Path>, depth: usize) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    stem.split('_').take(depth).collect::<Vec<_>>().join("_")
}

/// Run-length split: a new shot starts whenever the key changes from the
/// previous element. Equal keys separated by another key stay separate.
pub fn split_shots<T: AsRef<Path>>(files: Vec<T>, depth: usize) -> Vec<Shot<T>> {
    let mut shots: Vec<Shot<T>> = Vec::new();

    for file in files {
        let key = shot_key(&file, depth);

        match shots.last_mut() {
            Some(current) if current.key == key => current.files.push(file),
            _ => shots.push(Shot::new(key, file)),
        }
    }

    shots
}
