use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::data::Status;
use super::filter::FilterState;
use super::store::JobStore;
use crate::error::AppError;

/// Per-status counts shown on the tracking bar.
///
/// Supplied independently of the job store and never derived from it,
/// so the two can disagree. See [`TrackingCounts::drift`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingCounts {
    counts: BTreeMap<Status, u32>,
}

/// A status whose tracked count differs from the number of jobs in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountDrift {
    pub status: Status,
    pub tracked: u32,
    pub actual: u32,
}

impl TrackingCounts {
    pub fn new(counts: impl IntoIterator<Item = (Status, u32)>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    /// The built-in count table that accompanies the sample jobs
    pub fn sample() -> Self {
        Self::new([
            (Status::Bookmarked, 2),
            (Status::Applying, 0),
            (Status::Applied, 1),
            (Status::Interviewing, 0),
            (Status::Rejected, 0),
        ])
    }

    /// Parse a JSON object mapping status codes to counts
    pub fn from_json(json: &str, source_name: &str) -> Result<Self, AppError> {
        let raw: HashMap<String, u32> =
            serde_json::from_str(json).map_err(|e| AppError::parse(source_name, &e))?;

        let mut counts = BTreeMap::new();
        for (code, count) in raw {
            let status = code.parse::<Status>()?;
            if counts.insert(status, count).is_some() {
                return Err(AppError::Parse {
                    source_name: source_name.to_string(),
                    reason: format!("status {status} is listed more than once (as \"{code}\")"),
                });
            }
        }

        Ok(Self { counts })
    }

    pub fn load_blocking(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|e| AppError::read(path, &e))?;
        Self::from_json(&json, &path.display().to_string())
    }

    /// Count for a status; statuses missing from the table count as zero
    pub fn count(&self, status: Status) -> u32 {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Compare the table against what the store actually holds
    pub fn drift(&self, store: &JobStore) -> Vec<CountDrift> {
        Status::ALL
            .into_iter()
            .filter_map(|status| {
                let tracked = self.count(status);
                let actual = store.count_with_status(status);
                (tracked != actual).then_some(CountDrift {
                    status,
                    tracked,
                    actual,
                })
            })
            .collect()
    }
}

/// Display model for one status toggle on the tracking bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingToggle {
    pub status: Status,
    /// Count text, or "--" when the toggle is disabled
    pub count_text: String,
    /// Disabled toggles cannot be clicked
    pub enabled: bool,
    pub selected: bool,
}

impl TrackingToggle {
    pub fn new(status: Status, filter: &FilterState, counts: &TrackingCounts) -> Self {
        let count = counts.count(status);
        let enabled = count > 0;

        Self {
            status,
            count_text: if enabled {
                count.to_string()
            } else {
                "--".to_string()
            },
            enabled,
            selected: is_selected(status, filter),
        }
    }
}

/// Toggles for every status, in tracking bar order
pub fn tracking_bar(filter: &FilterState, counts: &TrackingCounts) -> Vec<TrackingToggle> {
    Status::ALL
        .into_iter()
        .map(|status| TrackingToggle::new(status, filter, counts))
        .collect()
}

/// Apply a click on a status toggle.
///
/// Clicking the selected toggle clears the status filter; clicking any
/// other toggle selects it, replacing the previous selection. Clicks on
/// disabled toggles are ignored.
pub fn toggle_status(filter: &mut FilterState, status: Status, counts: &TrackingCounts) {
    if counts.count(status) == 0 {
        tracing::debug!(%status, "ignoring click on disabled toggle");
        return;
    }

    if is_selected(status, filter) {
        filter.status = None;
    } else {
        filter.status = Some(status);
    }
}

fn is_selected(status: Status, filter: &FilterState) -> bool {
    filter
        .status
        .is_some_and(|selected| selected.code().eq_ignore_ascii_case(status.code()))
}
