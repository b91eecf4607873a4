/// Action-over-time documents.
pub mod series;
/// Results documents for report tables.
pub mod results;
