use wellbeing_domain::shared::DomainError;

use super::ResultExt;

/// Run CPU-heavy work (password hashing) on tokio's blocking pool.
///
/// Both a panicking task and an error from `f` surface as
/// `DomainError::Infrastructure`.
pub async fn run_blocking<F, T, E>(f: F) -> Result<T, DomainError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .to_infra_err()?
        .to_infra_err()
}
