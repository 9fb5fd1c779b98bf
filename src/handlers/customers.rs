// src/handlers/customers.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::customer::{CustomerField, CustomersTable},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomerSearchParams {
    /// Busca em nome ou e-mail
    #[serde(default)]
    pub query: String,
}

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "Todos os clientes (id, nome) para selects", body = Vec<CustomerField>),
        (status = 500, description = "Failed to fetch all customers.")
    )
)]
pub async fn list_customers(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let customers = app_state.dashboard_service.fetch_customers().await?;

    Ok((StatusCode::OK, Json(customers)))
}

// GET /api/customers/table
#[utoipa::path(
    get,
    path = "/api/customers/table",
    tag = "Customers",
    params(CustomerSearchParams),
    responses(
        (status = 200, description = "Clientes com totais de faturas", body = Vec<CustomersTable>),
        (status = 500, description = "Failed to fetch customer table.")
    )
)]
pub async fn get_customers_table(
    State(app_state): State<AppState>,
    Query(params): Query<CustomerSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let customers = app_state
        .dashboard_service
        .fetch_filtered_customers(&params.query)
        .await?;

    Ok((StatusCode::OK, Json(customers)))
}
