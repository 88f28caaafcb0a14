pub mod summary_service;

pub use summary_service::{SeasonTotals, SummaryService, YearTotals};
