/// Engine-wide result, wrapping the typed errors of each module in `anyhow`.
///
/// Callers that need to tell failures apart downcast to [`crate::LedgerError`].
pub type Result<T = ()> = anyhow::Result<T>;
