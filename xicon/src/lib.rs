use anyhow::Result;
use appiconset::{find_appiconsets, is_appiconset, is_xcassets, AppIconSet, FilterType};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

mod task;

pub use task::{print_error, TaskRunner};

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to an `.appiconset` or to an `.xcassets` containing icon sets
    #[clap(value_name = "PATH")]
    pub path: Option<PathBuf>,
    /// Resampling filter used when downscaling
    #[clap(long, value_enum, default_value_t = Filter::Lanczos3)]
    pub filter: Filter,
    /// Keep every progress line
    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => Self::Nearest,
            Filter::Triangle => Self::Triangle,
            Filter::CatmullRom => Self::CatmullRom,
            Filter::Gaussian => Self::Gaussian,
            Filter::Lanczos3 => Self::Lanczos3,
        }
    }
}

/// What the input path points at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    AppIconSet(PathBuf),
    Xcassets(PathBuf),
    Unrecognized(PathBuf),
}

impl Input {
    pub fn new(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("the specified path does not exist: {}", path.display());
        }
        let path = dunce::canonicalize(path)?;
        if !path.is_dir() {
            anyhow::bail!(
                "the specified path is not a directory, expecting either .appiconset or .xcassets: {}",
                path.display()
            );
        }
        Ok(if is_appiconset(&path) {
            Self::AppIconSet(path)
        } else if is_xcassets(&path) {
            Self::Xcassets(path)
        } else {
            Self::Unrecognized(path)
        })
    }
}

/// Regenerates the icon sets `input` refers to, one after the other.
///
/// The first failing icon set aborts the run.
pub fn run(input: &Input, filter: Filter, verbose: bool) -> Result<()> {
    let dirs = match input {
        Input::AppIconSet(path) => {
            println!("Processing a single .appiconset -> {}", path.display());
            vec![path.clone()]
        }
        Input::Xcassets(path) => {
            println!(
                "Searching for all .appiconset with 1024x1024 inside -> {}",
                path.display()
            );
            let dirs = find_appiconsets(path)?;
            if dirs.is_empty() {
                println!("No .appiconset with 1024x1024 found in: {}", path.display());
                return Ok(());
            }
            dirs
        }
        Input::Unrecognized(path) => {
            print_error(format_args!(
                "{} is neither .appiconset nor .xcassets, not sure how to handle it",
                path.display()
            ));
            return Ok(());
        }
    };
    let mut runner = TaskRunner::new(dirs.len(), verbose);
    for dir in dirs {
        let set = AppIconSet::new(&dir).with_filter(filter.into());
        runner.start_task(format!("Updating {}", set.dir().display()));
        set.process()?;
        runner.end_task();
    }
    Ok(())
}
