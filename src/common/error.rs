// src/common/error.rs

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Erros do colaborador de banco (DashboardStore).
// Nunca chegam ao cliente: o guard_fetch loga e troca por AppError::FetchFailed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Erro de banco de dados: {0}")]
    Database(#[from] sqlx::Error),

    // Semântica do `.single()`: exatamente uma linha
    #[error("Esperava {expected} linha(s), encontrou {found}")]
    UnexpectedRowCount { expected: usize, found: usize },

    // Relacionamento N:1 que não veio com exatamente um registro
    #[error("Relacionamento '{relation}' deveria ter 1 registro, veio com {found}")]
    BrokenRelationship { relation: &'static str, found: usize },
}

/// Operações de leitura do dashboard. O Display nomeia o recurso que falhou.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOperation {
    Revenue,
    LatestInvoices,
    CardData,
    FilteredInvoices,
    InvoicesPages,
    InvoiceById,
    Customers,
    FilteredCustomers,
}

impl fmt::Display for FetchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resource = match self {
            FetchOperation::Revenue => "revenue data",
            FetchOperation::LatestInvoices => "the latest invoices",
            FetchOperation::CardData => "card data",
            FetchOperation::FilteredInvoices => "invoices",
            FetchOperation::InvoicesPages => "total number of invoices",
            FetchOperation::InvoiceById => "invoice",
            FetchOperation::Customers => "all customers",
            FetchOperation::FilteredCustomers => "customer table",
        };
        f.write_str(resource)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Mensagem genérica de propósito: o detalhe fica só no log
    #[error("Failed to fetch {0}.")]
    FetchFailed(FetchOperation),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .map(|e| e.message.as_ref().map_or_else(|| e.code.to_string(), |m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::FetchFailed(_) => {
                let body = Json(json!({ "error": self.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
