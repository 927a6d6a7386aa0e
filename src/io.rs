use glob::{glob_with, MatchOptions, Pattern};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::classify_line;
use crate::error::{LabelStatsError, Result};
use crate::types::ClassifiedObject;

const LABEL_EXTENSION: &str = "txt";

/// Read the val split identifiers. Lines are trimmed and blank lines dropped.
pub fn read_val_ids(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path).map_err(|source| LabelStatsError::ValFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_val_ids(&content))
}

pub fn parse_val_ids(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collect the `*.txt` label files directly inside `label_dir`, sorted by path.
pub fn collect_label_files(label_dir: &Path) -> Result<Vec<PathBuf>> {
    if !label_dir.is_dir() {
        return Err(LabelStatsError::LabelDir {
            path: label_dir.to_path_buf(),
        });
    }

    // Escape the directory so brackets or stars in its name match literally
    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&label_dir.to_string_lossy()),
        LABEL_EXTENSION
    );
    // Dotfiles such as `._000001.txt` are not label files
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let mut files = Vec::new();
    for entry in glob_with(&pattern, options)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Frame identifier of a label file: its base name without extension.
pub fn frame_id(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

/// Classify every line of one label file.
pub fn read_label_file(path: &Path) -> Result<Vec<ClassifiedObject>> {
    let content = fs::read_to_string(path).map_err(|source| LabelStatsError::LabelFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_label_content(&content))
}

pub fn parse_label_content(content: &str) -> Vec<ClassifiedObject> {
    content.lines().filter_map(classify_line).collect()
}
