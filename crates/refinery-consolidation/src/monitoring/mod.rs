//! Run reporting: textual report and count-derived recommendations.

pub mod recommendations;
pub mod report;

pub use recommendations::recommendations;
pub use report::render_report;
