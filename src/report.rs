use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::types::{CountTable, Difficulty, DistanceBucket, Split, SplitCounts};

/// Bucket counts per difficulty, buckets ascending with `>80m` last.
pub fn group_by_difficulty(
    table: &CountTable,
) -> BTreeMap<Difficulty, BTreeMap<DistanceBucket, u64>> {
    let mut grouped: BTreeMap<Difficulty, BTreeMap<DistanceBucket, u64>> = Difficulty::ALL
        .iter()
        .map(|difficulty| (*difficulty, BTreeMap::new()))
        .collect();
    for (key, count) in table {
        if *count == 0 {
            continue;
        }
        if let Some(buckets) = grouped.get_mut(&key.difficulty) {
            *buckets.entry(key.bucket).or_insert(0) += count;
        }
    }
    grouped
}

/// Write the report block of one split.
pub fn write_split_report<W: Write>(
    out: &mut W,
    split: Split,
    table: &CountTable,
) -> io::Result<()> {
    writeln!(out, "{} Set Counts:", split.title())?;
    let grouped = group_by_difficulty(table);
    for difficulty in Difficulty::ALL {
        writeln!(out, "  {}:", difficulty.title())?;
        if let Some(buckets) = grouped.get(&difficulty) {
            for (bucket, count) in buckets {
                writeln!(out, "    {}: {}", bucket, count)?;
            }
        }
    }
    Ok(())
}

/// Write the train block followed by the val block.
pub fn write_report<W: Write>(out: &mut W, counts: &SplitCounts) -> io::Result<()> {
    for split in [Split::Train, Split::Val] {
        write_split_report(out, split, counts.table(split))?;
    }
    Ok(())
}

pub fn render_report(counts: &SplitCounts) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, counts)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
