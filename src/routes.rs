// src/routes.rs

use axum::{routing::get, Router};

use crate::{config::AppState, docs, handlers};

pub fn router(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/revenue", get(handlers::dashboard::get_revenue))
        .route("/latest-invoices", get(handlers::dashboard::get_latest_invoices))
        .route("/cards", get(handlers::dashboard::get_card_data));

    let invoice_routes = Router::new()
        .route("/", get(handlers::invoices::list_invoices))
        .route("/pages", get(handlers::invoices::get_invoices_pages))
        .route("/{id}", get(handlers::invoices::get_invoice));

    let customer_routes = Router::new()
        .route("/", get(handlers::customers::list_customers))
        .route("/table", get(handlers::customers::get_customers_table));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/invoices", invoice_routes)
        .nest("/api/customers", customer_routes)
        .with_state(app_state)
}
