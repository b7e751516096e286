//! Quote request handling: form DTO, validation, and the HTTP handlers
//! for the submission page.

pub mod handlers;
pub mod models;
pub mod validation;

pub use models::{Orcamento, OrcamentoForm};
pub use validation::ValidationError;
