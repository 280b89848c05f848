/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the job store and the UI layer.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Where a job application currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Bookmarked,
    Applying,
    Applied,
    Interviewing,
    Rejected,
}

impl Status {
    /// All statuses, in tracking bar order
    pub const ALL: [Status; 5] = [
        Status::Bookmarked,
        Status::Applying,
        Status::Applied,
        Status::Interviewing,
        Status::Rejected,
    ];

    /// The raw status code as stored in job data (e.g. "APPLIED")
    pub fn code(self) -> &'static str {
        match self {
            Status::Bookmarked => "BOOKMARKED",
            Status::Applying => "APPLYING",
            Status::Applied => "APPLIED",
            Status::Interviewing => "INTERVIEWING",
            Status::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Status {
    type Err = AppError;

    /// Codes are matched case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::UnknownStatus(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// A single job application
///
/// Every text field is optional; a missing value renders as a blank cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique, stable identifier
    pub id: u64,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Link to the posting
    #[serde(default)]
    pub url: Option<String>,
    /// Free-form notes (not shown in the table)
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
}

impl Job {
    /// Create a job with only an id; fill the rest with the builder methods
    pub fn new(id: u64) -> Self {
        Self {
            id,
            job_title: None,
            company_name: None,
            location: None,
            url: None,
            description: None,
            status: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.job_title = Some(title.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company_name = Some(company.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// The fields the free-text filter looks at, in column order
    pub fn text_fields(&self) -> [Option<&str>; 3] {
        [
            self.job_title.as_deref(),
            self.company_name.as_deref(),
            self.location.as_deref(),
        ]
    }
}

/// Turn a raw status code into a display label.
///
/// The first character is upper-cased and the rest lower-cased,
/// so "APPLIED" becomes "Applied". `None` and "" pass through unchanged.
pub fn format_status(code: Option<&str>) -> Option<String> {
    let code = code?;
    let mut chars = code.chars();
    let Some(first) = chars.next() else {
        return Some(String::new());
    };

    let mut label: String = first.to_uppercase().collect();
    label.push_str(&chars.as_str().to_lowercase());
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status() {
        assert_eq!(format_status(Some("APPLIED")), Some("Applied".to_string()));
        assert_eq!(format_status(Some("interviewing")), Some("Interviewing".to_string()));
        assert_eq!(format_status(None), None);
        assert_eq!(format_status(Some("")), Some(String::new()));
    }

    #[test]
    fn test_status_labels() {
        let labels: Vec<String> = Status::ALL
            .iter()
            .filter_map(|s| format_status(Some(s.code())))
            .collect();
        assert_eq!(
            labels,
            vec!["Bookmarked", "Applying", "Applied", "Interviewing", "Rejected"]
        );
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("bookmarked".parse::<Status>().unwrap(), Status::Bookmarked);
        assert_eq!("Applied".parse::<Status>().unwrap(), Status::Applied);
        assert!(matches!(
            "OFFER".parse::<Status>(),
            Err(AppError::UnknownStatus(code)) if code == "OFFER"
        ));
    }

    #[test]
    fn test_job_deserialize_camel_case_with_nulls() {
        let json = r#"{
            "id": 7,
            "jobTitle": "Staff Engineer",
            "companyName": null,
            "status": "interviewing"
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();

        assert_eq!(job.id, 7);
        assert_eq!(job.job_title.as_deref(), Some("Staff Engineer"));
        assert_eq!(job.company_name, None);
        assert_eq!(job.location, None);
        assert_eq!(job.status, Some(Status::Interviewing));
    }
}
