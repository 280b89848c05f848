//! Read-only job table
//!
//! Rows are rebuilt from the store on every redraw; the store's order is kept.

use iced::widget::{column, container, scrollable, text, Column, Row};
use iced::{Element, Length};

use crate::state::data::{format_status, Job, Status};
use crate::state::filter::FilterState;
use crate::state::store::JobStore;
use crate::Message;

const TITLE_WIDTH: f32 = 240.0;
const CELL_WIDTH: f32 = 208.0;

const HEADERS: [(&str, f32); 4] = [
    ("Job Position", TITLE_WIDTH),
    ("Company", CELL_WIDTH),
    ("Location", CELL_WIDTH),
    ("Status", CELL_WIDTH),
];

/// Cell text for one visible job. Missing values are blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub status: String,
}

impl TableRow {
    pub fn from_job(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.job_title.clone().unwrap_or_default(),
            company: job.company_name.clone().unwrap_or_default(),
            location: job.location.clone().unwrap_or_default(),
            status: format_status(job.status.map(Status::code)).unwrap_or_default(),
        }
    }

    fn cells(&self) -> [&str; 4] {
        [&self.title, &self.company, &self.location, &self.status]
    }
}

/// The visible rows for the current filter
pub fn rows(store: &JobStore, filter: &FilterState) -> Vec<TableRow> {
    store.visible(filter).map(TableRow::from_job).collect()
}

pub fn view<'a>(rows: &[TableRow]) -> Element<'a, Message> {
    let header = Row::with_children(
        HEADERS
            .iter()
            .map(|(title, width)| cell(text(*title).size(15), *width)),
    );

    let body: Element<'a, Message> = if rows.is_empty() {
        cell(text("No matching jobs").size(14), TITLE_WIDTH)
    } else {
        Column::with_children(rows.iter().map(|row| {
            Row::with_children(
                row.cells()
                    .into_iter()
                    .zip(HEADERS)
                    .map(|(value, (_, width))| cell(text(value.to_string()).size(14), width)),
            )
            .into()
        }))
        .into()
    };

    column![header, scrollable(body).height(Length::Fill)]
        .spacing(2)
        .into()
}

fn cell<'a>(content: impl Into<Element<'a, Message>>, width: f32) -> Element<'a, Message> {
    container(content)
        .width(Length::Fixed(width))
        .padding(6)
        .style(container::bordered_box)
        .into()
}
