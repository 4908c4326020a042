//! Domain errors - the failure base shared by all service errors

mod domain_error;

pub use domain_error::{render_failure, DomainError};
