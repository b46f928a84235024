//! Reporting core
//!
//! Pure aggregation over externally supplied record collections: the
//! demographic aggregator and the event rollup. Fetching and export live
//! in the service layer.

pub mod aggregate;
pub mod rollup;

pub use aggregate::{
    summarize_by, summarize_by_ethnic_group, summarize_by_school, summarize_by_year_level,
    CategorySummary, UNDEFINED_BUCKET,
};
pub use rollup::{
    count_participants, rollup_event, rollup_events, EventReport, EventRollup,
    EventWithParticipants, ParticipantCounts, RollupTotals,
};
