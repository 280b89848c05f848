//! Command-line configuration.
//!
//! Every flag can also be set through a `JOB_TRACKER_*` environment
//! variable. When no data file is given, `jobs.json` and `tracking.json`
//! are looked up in the per-user config directory:
//! - Linux: ~/.config/job-tracker/
//! - macOS: ~/Library/Application Support/job-tracker/
//! - Windows: %APPDATA%\job-tracker\

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::error::AppError;
use crate::state::store::JobStore;
use crate::state::tracking::TrackingCounts;

const APP_DIR: &str = "job-tracker";
const JOBS_FILE: &str = "jobs.json";
const TRACKING_FILE: &str = "tracking.json";

/// Track job applications with live text and status filtering.
#[derive(Parser, Debug, Clone)]
#[command(name = "job-tracker", author, version, about)]
pub struct Cli {
    /// Jobs JSON file (array of jobs)
    #[arg(long, env = "JOB_TRACKER_JOBS")]
    pub jobs: Option<PathBuf>,

    /// Tracking counts JSON file (object of status code to count)
    #[arg(long, env = "JOB_TRACKER_TRACKING")]
    pub tracking: Option<PathBuf>,

    /// Window theme
    #[arg(long, value_enum, default_value = "dark", env = "JOB_TRACKER_THEME")]
    pub theme: ThemeChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

impl Cli {
    /// Default log directive for the verbosity level
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// The jobs file to load, if any
    pub fn jobs_path(&self) -> Option<PathBuf> {
        self.jobs
            .clone()
            .or_else(|| existing_default(config_dir().as_deref(), JOBS_FILE))
    }

    /// The tracking counts file to load, if any
    pub fn tracking_path(&self) -> Option<PathBuf> {
        self.tracking
            .clone()
            .or_else(|| existing_default(config_dir().as_deref(), TRACKING_FILE))
    }

    /// Load the startup job store, falling back to the sample jobs
    pub fn load_jobs(&self) -> Result<(JobStore, Option<PathBuf>), AppError> {
        match self.jobs_path() {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading jobs");
                Ok((JobStore::load_blocking(&path)?, Some(path)))
            }
            None => {
                tracing::info!("no jobs file configured, using sample jobs");
                Ok((JobStore::sample(), None))
            }
        }
    }

    /// Load the startup tracking counts, falling back to the sample table
    pub fn load_tracking(&self) -> Result<TrackingCounts, AppError> {
        match self.tracking_path() {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading tracking counts");
                TrackingCounts::load_blocking(&path)
            }
            None => {
                tracing::info!("no tracking file configured, using sample counts");
                Ok(TrackingCounts::sample())
            }
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

fn existing_default(dir: Option<&Path>, file: &str) -> Option<PathBuf> {
    let path = dir?.join(file);
    path.is_file().then_some(path)
}
