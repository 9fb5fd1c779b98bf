// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    // Importamos os models para referenciar no Swagger
    models::{
        dashboard::{CardData, Revenue},
        invoice::LatestInvoice,
    },
};

// GET /api/dashboard/revenue
#[utoipa::path(
    get,
    path = "/api/dashboard/revenue",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Receita mensal para o gráfico", body = Vec<Revenue>),
        (status = 500, description = "Failed to fetch revenue data.")
    )
)]
pub async fn get_revenue(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let revenue = app_state.dashboard_service.fetch_revenue().await?;

    Ok((StatusCode::OK, Json(revenue)))
}

// GET /api/dashboard/latest-invoices
#[utoipa::path(
    get,
    path = "/api/dashboard/latest-invoices",
    tag = "Dashboard",
    responses(
        (status = 200, description = "As 5 faturas mais recentes", body = Vec<LatestInvoice>),
        (status = 500, description = "Failed to fetch the latest invoices.")
    )
)]
pub async fn get_latest_invoices(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = app_state.dashboard_service.fetch_latest_invoices().await?;

    Ok((StatusCode::OK, Json(invoices)))
}

// GET /api/dashboard/cards
#[utoipa::path(
    get,
    path = "/api/dashboard/cards",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contagens e totais pagos/pendentes", body = CardData),
        (status = 500, description = "Failed to fetch card data.")
    )
)]
pub async fn get_card_data(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cards = app_state.dashboard_service.fetch_card_data().await?;

    Ok((StatusCode::OK, Json(cards)))
}
