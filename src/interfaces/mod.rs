//! Input and output formats: CSV action scripts and summaries, JSON records.

pub mod csv;
pub mod json;
