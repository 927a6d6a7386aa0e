use clap::Parser;

/// Count KITTI Car_3d objects by difficulty and distance bucket for the train and val splits.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Text file listing the val frame identifiers, one per line
    #[arg(long = "val_file")]
    pub val_file: String,

    /// Directory containing the KITTI label files (*.txt)
    #[arg(short = 'd', long = "label_dir")]
    pub label_dir: String,

    /// Do not draw the progress bar on stderr
    #[arg(long = "no_progress")]
    pub no_progress: bool,
}
