// src/common/fetch.rs

use std::future::Future;

use crate::common::error::{AppError, FetchOperation, StoreError};

/// Fronteira de falha de todas as leituras do dashboard.
/// Qualquer StoreError vira log + AppError::FetchFailed(operation); o erro original não sobe.
pub(crate) async fn guard_fetch<T, F>(operation: FetchOperation, fetch: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    fetch.await.map_err(|err| {
        tracing::error!(operation = ?operation, error = %err, "Database Error");
        AppError::FetchFailed(operation)
    })
}
