use log::info;
use std::io::Write;
use std::path::Path;

use crate::aggregate::{collect_stats, count_label_files};
use crate::config::Args;
use crate::error::Result;
use crate::io::{collect_label_files, read_val_ids};
use crate::report::write_report;
use crate::types::{ProcessingStats, SplitCounts};
use crate::utils::create_progress_bar;

/// Count every label file under `label_dir`, split by the identifiers in `val_file`.
pub fn count_dataset(
    val_file: &Path,
    label_dir: &Path,
    show_progress: bool,
) -> Result<(SplitCounts, ProcessingStats)> {
    let val_ids = read_val_ids(val_file)?;
    info!("Read {} val identifiers.", val_ids.len());

    let label_files = collect_label_files(label_dir)?;
    info!("Found {} label files.", label_files.len());

    let pb = create_progress_bar(label_files.len() as u64, "Labels", show_progress);
    let counts = count_label_files(&label_files, &val_ids, &pb)?;
    pb.finish_with_message("Label counting complete");

    let stats = collect_stats(&label_files, &val_ids, &counts);
    Ok((counts, stats))
}

/// Full run: count the dataset and write the report to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<ProcessingStats> {
    let (counts, stats) = count_dataset(
        Path::new(&args.val_file),
        Path::new(&args.label_dir),
        !args.no_progress,
    )?;
    write_report(out, &counts)?;
    out.flush()?;
    Ok(stats)
}
