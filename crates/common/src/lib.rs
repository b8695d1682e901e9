//! TrizHub Common Library
//!
//! Shared code for the TrizHub services including:
//! - Domain models (patents, analyses, citations)
//! - TRIZ reference data (principles, parameters, contradiction matrix)
//! - In-memory store and repository pattern
//! - LLM chat client abstraction
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod config;
pub mod errors;
pub mod llm;
pub mod metrics;
pub mod models;
pub mod store;
pub mod triz;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use llm::ChatModel;
pub use store::{Repository, Store};
pub use triz::TrizReference;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default chat model for patent analysis
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Number of TRIZ inventive principles
pub const PRINCIPLE_COUNT: usize = 40;

/// Number of TRIZ engineering parameters
pub const PARAMETER_COUNT: usize = 39;
