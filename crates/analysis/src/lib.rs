//! TrizHub Analysis Pipeline
//!
//! Turns stored patent text into a TRIZ analysis record:
//! 1. Target the sections worth sending to the model
//! 2. Build the extraction prompt
//! 3. Call the chat model
//! 4. Parse the reply (falling back to an empty extraction)
//! 5. Resolve labels against the TRIZ reference data

pub mod analyzer;
pub mod parse;
pub mod prompt;
pub mod resolve;
pub mod sections;

pub use analyzer::Analyzer;
