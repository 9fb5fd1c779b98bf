// src/handlers/invoices.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::invoice::{InvoiceForm, InvoicesTable},
};

fn first_page() -> u32 {
    1
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InvoiceSearchParams {
    /// Busca em nome, e-mail, valor, data ou status
    #[serde(default)]
    #[param(example = "delba")]
    pub query: String,

    /// Página (começa em 1)
    #[serde(default = "first_page")]
    #[validate(range(min = 1, message = "A página começa em 1"))]
    #[param(example = 1, minimum = 1)]
    pub page: u32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InvoicePagesParams {
    #[serde(default)]
    pub query: String,
}

// GET /api/invoices
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Invoices",
    params(InvoiceSearchParams),
    responses(
        (status = 200, description = "Página da tabela de faturas (até 6 linhas)", body = Vec<InvoicesTable>),
        (status = 400, description = "Página inválida"),
        (status = 500, description = "Failed to fetch invoices.")
    )
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
    Query(params): Query<InvoiceSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let invoices = app_state
        .dashboard_service
        .fetch_filtered_invoices(&params.query, params.page)
        .await?;

    Ok((StatusCode::OK, Json(invoices)))
}

// GET /api/invoices/pages
#[utoipa::path(
    get,
    path = "/api/invoices/pages",
    tag = "Invoices",
    params(InvoicePagesParams),
    responses(
        (status = 200, description = "Total de páginas para a busca", body = i64),
        (status = 500, description = "Failed to fetch total number of invoices.")
    )
)]
pub async fn get_invoices_pages(
    State(app_state): State<AppState>,
    Query(params): Query<InvoicePagesParams>,
) -> Result<impl IntoResponse, AppError> {
    let pages = app_state
        .dashboard_service
        .fetch_invoices_pages(&params.query)
        .await?;

    Ok((StatusCode::OK, Json(pages)))
}

// GET /api/invoices/{id}
#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = "Invoices",
    params(
        ("id" = Uuid, Path, description = "ID da fatura")
    ),
    responses(
        (status = 200, description = "Fatura para o formulário de edição", body = InvoiceForm),
        (status = 500, description = "Failed to fetch invoice.")
    )
)]
pub async fn get_invoice(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = app_state.dashboard_service.fetch_invoice_by_id(id).await?;

    Ok((StatusCode::OK, Json(invoice)))
}
