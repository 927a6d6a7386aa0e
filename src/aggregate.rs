use indicatif::ProgressBar;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{LabelStatsError, Result};
use crate::io::{frame_id, read_label_file};
use crate::types::{ClassifiedObject, ProcessingStats, Split, SplitCounts};

/// Split a label file belongs to, by its frame identifier.
pub fn split_for(path: &Path, val_ids: &HashSet<String>) -> Split {
    match frame_id(path) {
        Some(id) if val_ids.contains(id) => Split::Val,
        _ => Split::Train,
    }
}

/// Count the objects of one file into the split's table.
pub fn accumulate(counts: &mut SplitCounts, split: Split, objects: &[ClassifiedObject]) {
    for object in objects {
        counts.record(split, *object);
    }
}

/// Parse and count all label files in parallel.
///
/// Each rayon worker folds into its own `SplitCounts`, merged by addition at the
/// end. The first unreadable file aborts the whole run.
pub fn count_label_files(
    label_files: &[PathBuf],
    val_ids: &HashSet<String>,
    pb: &ProgressBar,
) -> Result<SplitCounts> {
    label_files
        .par_iter()
        .map(|path| {
            let split = split_for(path, val_ids);
            let objects = read_label_file(path);
            pb.inc(1);
            objects.map(|objects| (split, objects))
        })
        .try_fold(SplitCounts::new, |mut counts, parsed| {
            let (split, objects) = parsed?;
            accumulate(&mut counts, split, &objects);
            Ok::<_, LabelStatsError>(counts)
        })
        .try_reduce(SplitCounts::new, |left, right| Ok(left.merge(right)))
}

/// Run statistics for a finished count.
pub fn collect_stats(
    label_files: &[PathBuf],
    val_ids: &HashSet<String>,
    counts: &SplitCounts,
) -> ProcessingStats {
    let val_files = label_files
        .iter()
        .filter(|path| split_for(path, val_ids) == Split::Val)
        .count();
    let seen: HashSet<&str> = label_files.iter().filter_map(|path| frame_id(path)).collect();
    let unmatched_val_ids = val_ids
        .iter()
        .filter(|id| !seen.contains(id.as_str()))
        .count();

    ProcessingStats {
        label_files: label_files.len(),
        train_files: label_files.len() - val_files,
        val_files,
        train_objects: counts.total(Split::Train),
        val_objects: counts.total(Split::Val),
        unmatched_val_ids,
    }
}
