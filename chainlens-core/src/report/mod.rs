//! Shared building blocks for chain reports.
//!
//! - `records`: typed views over the `Results` collections of a results document
//! - `latex`: number formatting and tabular row assembly
/// Number formatting and LaTeX tabular helpers.
pub mod latex;
/// Entity records and selection rules (top entities, dominant sub-items).
pub mod records;

/// Number of entities listed in a report.
pub const TOP_ENTITIES: usize = 5;
/// Maximum number of sub-items listed per entity.
pub const TOP_SUB_ITEMS: usize = 3;
/// Minimum share (exclusive) a sub-item needs to be listed.
pub const SUB_ITEM_THRESHOLD: f64 = 0.10;
