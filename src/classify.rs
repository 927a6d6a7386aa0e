//! Per-record rules: line parsing, difficulty tiers and distance buckets.
//!
//! Every function here is pure. A record that fails any step yields `None` and is
//! left out of the counts without a trace.

use crate::types::{
    ClassifiedObject, Difficulty, DistanceBucket, LabelRecord, BUCKET_WIDTH, DISTANCE_CAP,
    MIN_LABEL_FIELDS, TARGET_CLASS,
};

const TYPE_FIELD: usize = 0;
const TRUNCATION_FIELD: usize = 1;
const OCCLUSION_FIELD: usize = 2;
const BBOX_TOP_FIELD: usize = 5;
const BBOX_BOTTOM_FIELD: usize = 7;
const LOCATION_FIELDS: [usize; 3] = [11, 12, 13];

fn parse_f64(field: &str) -> Option<f64> {
    field.parse().ok()
}

/// Split a label line into the fields we use.
///
/// Returns `None` for short lines, other object classes, and unparsable
/// bounding box or location fields.
pub fn parse_line(line: &str) -> Option<LabelRecord<'_>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_LABEL_FIELDS {
        return None;
    }
    if fields[TYPE_FIELD] != TARGET_CLASS {
        return None;
    }

    let bbox_top = parse_f64(fields[BBOX_TOP_FIELD])?;
    let bbox_bottom = parse_f64(fields[BBOX_BOTTOM_FIELD])?;

    let [x, y, z] = LOCATION_FIELDS;
    let location = [
        parse_f64(fields[x])?,
        parse_f64(fields[y])?,
        parse_f64(fields[z])?,
    ];

    Some(LabelRecord {
        object_type: fields[TYPE_FIELD],
        truncation: fields[TRUNCATION_FIELD],
        occlusion: fields[OCCLUSION_FIELD],
        bbox_top,
        bbox_bottom,
        location,
    })
}

/// Difficulty tier for a box of the given height. First matching rule wins.
pub fn difficulty(bbox_height: f64, occlusion: i64, truncation: f64) -> Option<Difficulty> {
    if bbox_height >= 40.0 && occlusion == 0 && truncation <= 0.15 {
        return Some(Difficulty::Easy);
    }
    if bbox_height >= 25.0 && occlusion == 1 && truncation <= 0.30 {
        return Some(Difficulty::Moderate);
    }
    if bbox_height >= 25.0 && occlusion == 2 && truncation <= 0.50 {
        return Some(Difficulty::Hard);
    }
    None
}

/// Difficulty from the raw truncation and occlusion fields.
///
/// Occlusion must be an integer literal; `"1.0"` does not qualify.
pub fn difficulty_from_fields(
    bbox_height: f64,
    occlusion: &str,
    truncation: &str,
) -> Option<Difficulty> {
    let truncation: f64 = truncation.parse().ok()?;
    let occlusion: i64 = occlusion.parse().ok()?;
    difficulty(bbox_height, occlusion, truncation)
}

/// Distance bucket for a distance in meters.
///
/// NaN and negative distances have no bucket.
pub fn distance_bucket(distance: f64) -> Option<DistanceBucket> {
    if distance >= DISTANCE_CAP as f64 {
        return Some(DistanceBucket::Beyond);
    }
    if distance.is_nan() || distance < 0.0 {
        return None;
    }
    let index = (distance / BUCKET_WIDTH as f64).floor() as u32;
    Some(DistanceBucket::Within {
        lower: index * BUCKET_WIDTH,
    })
}

pub fn classify_record(record: &LabelRecord<'_>) -> Option<ClassifiedObject> {
    let difficulty =
        difficulty_from_fields(record.bbox_height(), record.occlusion, record.truncation)?;
    let bucket = distance_bucket(record.distance())?;
    Some(ClassifiedObject { bucket, difficulty })
}

pub fn classify_line(line: &str) -> Option<ClassifiedObject> {
    parse_line(line).as_ref().and_then(classify_record)
}
