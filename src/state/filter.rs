use super::data::{Job, Status};

/// The two user-controlled filters of the job table.
///
/// Created empty when the view mounts; an empty filter restricts nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free text, matched case-insensitively against title, company and location
    pub text: String,
    /// Selected status toggle, if any
    pub status: Option<Status>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.status.is_none()
    }

    /// Clear both filters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Decide whether a job row is visible under the current filters.
    ///
    /// Text: a null field is never evaluated. The row is hidden only when it
    /// has at least one non-null text field and none of them contain the
    /// filter text. A row whose text fields are all null always passes.
    ///
    /// Status: with a status selected, the job must have a status whose code
    /// contains the selected code. A job without a status is hidden.
    pub fn matches(&self, job: &Job) -> bool {
        self.matches_text(job) && self.matches_status(job)
    }

    fn matches_text(&self, job: &Job) -> bool {
        let needle = self.text.to_lowercase();
        let mut fields = job.text_fields().into_iter().flatten().peekable();

        if fields.peek().is_none() {
            return true;
        }

        fields.any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_status(&self, job: &Job) -> bool {
        match self.status {
            None => true,
            Some(wanted) => job
                .status
                .is_some_and(|status| contains_ignore_case(status.code(), wanted.code())),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
