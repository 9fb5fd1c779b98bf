// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_revenue,
        handlers::dashboard::get_latest_invoices,
        handlers::dashboard::get_card_data,

        // --- Invoices ---
        handlers::invoices::list_invoices,
        handlers::invoices::get_invoices_pages,
        handlers::invoices::get_invoice,

        // --- Customers ---
        handlers::customers::list_customers,
        handlers::customers::get_customers_table,
    ),
    components(
        schemas(
            // --- DASHBOARD ---
            models::dashboard::Revenue,
            models::dashboard::CardData,

            // --- Invoices ---
            models::invoice::InvoiceStatus,
            models::invoice::LatestInvoice,
            models::invoice::InvoicesTable,
            models::invoice::InvoiceForm,

            // --- Customers ---
            models::customer::CustomerField,
            models::customer::CustomersTable,
        )
    ),
    tags(
        (name = "Dashboard", description = "Gráfico de receita, últimas faturas e cards"),
        (name = "Invoices", description = "Tabela, paginação e formulário de faturas"),
        (name = "Customers", description = "Selects e tabela de clientes")
    )
)]
pub struct ApiDoc;

// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
