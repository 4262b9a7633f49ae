use super::audit_errors::Result;
use super::audit_model::ChangeEvent;

/// Append-only destination for change events. Writes must tolerate
/// duplicates; the relay delivers at least once.
pub trait AuditSinkTrait: Send + Sync {
    fn append(&self, event: &ChangeEvent) -> Result<()>;
}
