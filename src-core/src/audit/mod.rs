// Module declarations
pub(crate) mod audit_errors;
pub(crate) mod audit_model;
pub(crate) mod audit_relay;
pub(crate) mod audit_repository;
pub(crate) mod audit_traits;

// Re-export the public interface
pub use audit_model::{ChangeEvent, ChangeEventDB};
pub use audit_relay::{spawn_relay, AuditRelay};
pub use audit_repository::AuditLogRepository;
pub use audit_traits::AuditSinkTrait;

// Re-export error types for convenience
pub use audit_errors::{AuditError, Result};
