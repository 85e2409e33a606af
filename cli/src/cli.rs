use std::path::PathBuf;

/// Historical map dataset tools
#[derive(clap::Parser, Debug)]
#[command(name = "histmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level for the requested verbosity.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Summarize a dataset: counts, year bounds, base layers
    Inspect(InspectArgs),

    /// Compose the visible map for a selection and year range (JSON)
    Compose(ComposeArgs),

    /// Record a page view with the analytics backend
    TrackVisit(TrackVisitArgs),

    /// Print total visits and the per-country breakdown
    Visits,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Dataset directory (mapData.json, layersData.json)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub dataset: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ComposeArgs {
    /// Dataset directory (mapData.json, layersData.json)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub dataset: PathBuf,

    /// Feature ids to select, in order (repeatable)
    #[arg(short, long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Select every feature in the dataset
    #[arg(long, conflicts_with = "select")]
    pub all: bool,

    /// First year of the range (defaults to the dataset minimum)
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<i32>,

    /// Last year of the range (defaults to the dataset maximum)
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<i32>,

    /// Ignore the year range and show everything
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub unbounded: bool,

    /// Output file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct TrackVisitArgs {
    /// Client address to record
    #[arg(long)]
    pub ip: Option<String>,

    /// Country to record
    #[arg(long)]
    pub country: Option<String>,

    /// City to record
    #[arg(long)]
    pub city: Option<String>,
}
