//! Service layer for case-tracker
//!
//! Sits between the HTTP handlers and the store / extraction gateway.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod case_service;
mod error;
mod extraction_service;

pub use case_service::CaseService;
pub use error::ServiceError;
pub use extraction_service::ExtractionService;
