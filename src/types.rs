use std::collections::BTreeMap;
use std::fmt;

// Object class counted by this tool
pub const TARGET_CLASS: &str = "Car";

// Tags surrounding bucket and difficulty in a rendered count key
pub const CLASS_TAG: &str = "Car_3d";
pub const REVISION_TAG: &str = "R40";

// Minimum number of whitespace-separated fields in a KITTI label line
pub const MIN_LABEL_FIELDS: usize = 15;

// Width of one distance bucket in meters, and the distance at which buckets stop
pub const BUCKET_WIDTH: u32 = 10;
pub const DISTANCE_CAP: u32 = 80;

/// The fields of one KITTI label line that the classifier looks at.
///
/// Truncation and occlusion stay raw until classification, so a bad value there
/// drops the record at the same point the difficulty rules would.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRecord<'a> {
    pub object_type: &'a str,
    pub truncation: &'a str,
    pub occlusion: &'a str,
    pub bbox_top: f64,
    pub bbox_bottom: f64,
    pub location: [f64; 3],
}

impl LabelRecord<'_> {
    pub fn bbox_height(&self) -> f64 {
        self.bbox_bottom - self.bbox_top
    }

    /// Euclidean distance of the object from the sensor origin.
    pub fn distance(&self) -> f64 {
        let [x, y, z] = self.location;
        (x * x + y * y + z * z).sqrt()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    /// Report order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Hard => "hard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 10 m distance band, or everything at and beyond the cap.
///
/// The derived ordering puts `Within` buckets in ascending order of their lower
/// bound and `Beyond` after all of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistanceBucket {
    Within { lower: u32 },
    Beyond,
}

impl fmt::Display for DistanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceBucket::Within { lower } => write!(f, "{}-{}m", lower, lower + BUCKET_WIDTH),
            DistanceBucket::Beyond => write!(f, ">{}m", DISTANCE_CAP),
        }
    }
}

// A classified Car record: where it is and how hard it is
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedObject {
    pub bucket: DistanceBucket,
    pub difficulty: Difficulty,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Val,
}

impl Split {
    pub fn title(self) -> &'static str {
        match self {
            Split::Train => "Train",
            Split::Val => "Val",
        }
    }
}

/// Key of a count table entry. Renders as `Car_3d_{bucket}_{difficulty}_R40`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountKey {
    pub bucket: DistanceBucket,
    pub difficulty: Difficulty,
}

impl From<ClassifiedObject> for CountKey {
    fn from(object: ClassifiedObject) -> Self {
        CountKey {
            bucket: object.bucket,
            difficulty: object.difficulty,
        }
    }
}

impl fmt::Display for CountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            CLASS_TAG, self.bucket, self.difficulty, REVISION_TAG
        )
    }
}

pub type CountTable = BTreeMap<CountKey, u64>;

// Count tables for both splits
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitCounts {
    pub train: CountTable,
    pub val: CountTable,
}

impl SplitCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, split: Split) -> &CountTable {
        match split {
            Split::Train => &self.train,
            Split::Val => &self.val,
        }
    }

    pub fn record(&mut self, split: Split, object: ClassifiedObject) {
        let table = match split {
            Split::Train => &mut self.train,
            Split::Val => &mut self.val,
        };
        *table.entry(object.into()).or_insert(0) += 1;
    }

    /// Add every count of `other` into `self`.
    pub fn merge(mut self, other: SplitCounts) -> SplitCounts {
        for (key, count) in other.train {
            *self.train.entry(key).or_insert(0) += count;
        }
        for (key, count) in other.val {
            *self.val.entry(key).or_insert(0) += count;
        }
        self
    }

    pub fn total(&self, split: Split) -> u64 {
        self.table(split).values().sum()
    }
}

// Struct to hold run statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub label_files: usize,
    pub train_files: usize,
    pub val_files: usize,
    pub train_objects: u64,
    pub val_objects: u64,
    pub unmatched_val_ids: usize,
}

impl ProcessingStats {
    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Label files scanned: {}", self.label_files);
        log::info!(
            "Train files: {}, val files: {}",
            self.train_files,
            self.val_files
        );
        log::info!(
            "Classified objects: {} train, {} val",
            self.train_objects,
            self.val_objects
        );
        if self.unmatched_val_ids > 0 {
            log::warn!(
                "{} val identifiers have no label file in the label directory",
                self.unmatched_val_ids
            );
        }
    }
}
