//! credscope-web — Web front-end for Credscope
//! Serves the credit risk assessment form:
//!   - Applicant input form (four sections, 11 controls)
//!   - Live loan-to-income metric
//!   - Color-coded assessment results
//!   - JSON scoring API

pub mod handlers;
pub mod router;
pub mod state;
