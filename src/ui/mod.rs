/// UI widgets for the tracker window
///
/// - Status toggles with counts (tracking_bar.rs)
/// - Text filter input (search_bar.rs)
/// - Job table (table.rs)

pub mod search_bar;
pub mod table;
pub mod tracking_bar;
