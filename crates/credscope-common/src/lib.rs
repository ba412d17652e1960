//! credscope-common — Shared types, errors, and configuration used across all Credscope crates.

pub mod applicant;
pub mod assessment;
pub mod config;
pub mod error;
pub mod theme;

// Re-export commonly used types
pub use applicant::{ApplicantInput, LoanPurpose, LoanType, ResidenceType};
pub use assessment::{RiskRating, ScoringResult};
pub use config::ServerConfig;
pub use error::{CredscopeError, Result};
pub use theme::Theme;
