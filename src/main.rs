use clap::Parser;
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod config;
mod error;
mod logging;
mod state;
mod ui;

use error::AppError;
use state::data::Status;
use state::filter::FilterState;
use state::store::JobStore;
use state::tracking::{self, TrackingCounts};

/// Main application state
struct JobTracker {
    /// Jobs shown in the table (never edited by the UI)
    store: JobStore,
    /// Counts behind the tracking bar, kept separate from the store
    counts: TrackingCounts,
    /// Current text and status filters
    filter: FilterState,
    /// File the store came from; `None` means the built-in sample jobs
    source: Option<PathBuf>,
    /// Last failed load, shown instead of the row count
    load_error: Option<AppError>,
    theme: Theme,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User typed in the filter box
    FilterTextChanged(String),
    /// User clicked a status toggle
    StatusToggled(Status),
    /// User clicked "Clear"
    ClearFilters,
    /// User clicked "Open Jobs…"
    OpenJobs,
    /// Background load of a jobs file finished
    JobsLoaded(PathBuf, Result<JobStore, AppError>),
}

impl JobTracker {
    /// Create the application around already-loaded data
    fn new(
        store: JobStore,
        counts: TrackingCounts,
        source: Option<PathBuf>,
        theme: Theme,
    ) -> (Self, Task<Message>) {
        warn_on_drift(&counts, &store);
        tracing::info!(jobs = store.len(), "job tracker ready");

        (
            JobTracker {
                store,
                counts,
                filter: FilterState::new(),
                source,
                load_error: None,
                theme,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilterTextChanged(text) => {
                tracing::debug!(filter = %text, "filter text changed");
                self.filter.text = text;
                Task::none()
            }
            Message::StatusToggled(status) => {
                tracking::toggle_status(&mut self.filter, status, &self.counts);
                tracing::debug!(%status, selected = ?self.filter.status, "status toggled");
                Task::none()
            }
            Message::ClearFilters => {
                self.filter.reset();
                Task::none()
            }
            Message::OpenJobs => {
                let file = FileDialog::new()
                    .set_title("Open Jobs File")
                    .add_filter("JSON", &["json"])
                    .pick_file();

                match file {
                    Some(path) => {
                        tracing::info!(path = %path.display(), "loading jobs");
                        let source = path.clone();
                        Task::perform(JobStore::load(path), move |result| {
                            Message::JobsLoaded(source.clone(), result)
                        })
                    }
                    None => Task::none(),
                }
            }
            Message::JobsLoaded(path, Ok(store)) => {
                tracing::info!(path = %path.display(), jobs = store.len(), "jobs loaded");
                warn_on_drift(&self.counts, &store);
                self.store = store;
                self.source = Some(path);
                self.load_error = None;
                Task::none()
            }
            Message::JobsLoaded(path, Err(err)) => {
                tracing::error!(path = %path.display(), error = %err, "failed to load jobs");
                self.load_error = Some(err);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let rows = ui::table::rows(&self.store, &self.filter);
        let toggles = tracking::tracking_bar(&self.filter, &self.counts);

        let header = row![
            text("Job Tracker").size(32).width(Length::Fill),
            button("Open Jobs…")
                .on_press(Message::OpenJobs)
                .padding(10),
        ]
        .align_y(Alignment::Center);

        let status_line = match &self.load_error {
            Some(err) => text(err.to_string()).size(14).style(text::danger),
            None => text(self.summary(rows.len())).size(14),
        };

        let content: Column<Message> = column![
            header,
            ui::tracking_bar::view(&toggles),
            ui::search_bar::view(&self.filter.text, !self.filter.is_empty()),
            ui::table::view(&rows),
            status_line,
        ]
        .spacing(20)
        .padding(24);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn summary(&self, visible: usize) -> String {
        if self.store.is_empty() {
            return "No jobs loaded".to_string();
        }

        let source = match &self.source {
            Some(path) => path.display().to_string(),
            None => "sample data".to_string(),
        };
        format!("Showing {} of {} jobs ({})", visible, self.store.len(), source)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

/// Tracking counts are never re-derived from the jobs; surface disagreements instead
fn warn_on_drift(counts: &TrackingCounts, store: &JobStore) {
    for drift in counts.drift(store) {
        tracing::warn!(
            status = %drift.status,
            tracked = drift.tracked,
            actual = drift.actual,
            "tracking count does not match jobs"
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = config::Cli::parse();
    logging::init_logging(cli.log_level());

    let (store, source) = cli.load_jobs()?;
    let counts = cli.load_tracking()?;
    let theme = cli.theme.theme();

    iced::application("Job Tracker", JobTracker::update, JobTracker::view)
        .theme(JobTracker::theme)
        .centered()
        .run_with(move || JobTracker::new(store, counts, source, theme))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_app() -> JobTracker {
        JobTracker::new(
            JobStore::sample(),
            TrackingCounts::sample(),
            None,
            Theme::Dark,
        )
        .0
    }

    fn visible_ids(app: &JobTracker) -> Vec<u64> {
        ui::table::rows(&app.store, &app.filter)
            .iter()
            .map(|row| row.id)
            .collect()
    }

    #[test]
    fn test_initial_state_shows_all_jobs() {
        let app = sample_app();

        assert!(app.filter.is_empty());
        assert_eq!(visible_ids(&app), vec![1, 2, 3]);
        assert_eq!(app.summary(3), "Showing 3 of 3 jobs (sample data)");
    }

    #[test]
    fn test_typing_filters_rows() {
        let mut app = sample_app();

        let _ = app.update(Message::FilterTextChanged("toronto".to_string()));
        assert_eq!(visible_ids(&app), vec![2]);

        let _ = app.update(Message::FilterTextChanged("ENGINEER".to_string()));
        assert_eq!(visible_ids(&app), vec![1, 2, 3]);

        let _ = app.update(Message::FilterTextChanged("xyz".to_string()));
        assert!(visible_ids(&app).is_empty());
    }

    #[test]
    fn test_status_toggle_round_trip() {
        let mut app = sample_app();

        let _ = app.update(Message::StatusToggled(Status::Bookmarked));
        assert_eq!(visible_ids(&app), vec![2, 3]);

        let _ = app.update(Message::StatusToggled(Status::Bookmarked));
        assert_eq!(app.filter.status, None);
        assert_eq!(visible_ids(&app), vec![1, 2, 3]);
    }

    #[test]
    fn test_text_and_status_combine() {
        let mut app = sample_app();

        let _ = app.update(Message::StatusToggled(Status::Bookmarked));
        let _ = app.update(Message::FilterTextChanged("remote".to_string()));

        assert_eq!(visible_ids(&app), vec![3]);

        let _ = app.update(Message::ClearFilters);
        assert!(app.filter.is_empty());
        assert_eq!(visible_ids(&app), vec![1, 2, 3]);
    }

    #[test]
    fn test_jobs_loaded_replaces_store_and_keeps_filter() {
        let mut app = sample_app();
        let _ = app.update(Message::FilterTextChanged("engineer".to_string()));

        let store = JobStore::new(vec![
            state::data::Job::new(10).title("Data Engineer"),
            state::data::Job::new(11).title("Designer"),
        ])
        .unwrap();
        let _ = app.update(Message::JobsLoaded(PathBuf::from("jobs.json"), Ok(store)));

        assert_eq!(app.filter.text, "engineer");
        assert_eq!(visible_ids(&app), vec![10]);
        assert_eq!(app.source, Some(PathBuf::from("jobs.json")));
        assert!(app.load_error.is_none());
    }

    #[test]
    fn test_failed_load_keeps_previous_store() {
        let mut app = sample_app();

        let _ = app.update(Message::JobsLoaded(
            PathBuf::from("broken.json"),
            Err(AppError::DuplicateJobId(4)),
        ));

        assert_eq!(app.store, JobStore::sample());
        assert_eq!(app.load_error, Some(AppError::DuplicateJobId(4)));
        assert_eq!(app.source, None);
    }
}
