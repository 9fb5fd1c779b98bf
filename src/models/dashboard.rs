// src/models/dashboard.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// 1. Gráfico de receita (um ponto por mês)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Revenue {
    #[schema(example = "Jan")]
    pub month: String,
    #[schema(example = 2000)]
    pub revenue: i64,
}

// 2. Cards do topo
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub number_of_customers: i64,
    pub number_of_invoices: i64,
    #[schema(example = "$1,234.56")]
    pub total_paid_invoices: String,    // Já formatado como moeda
    #[schema(example = "$567.00")]
    pub total_pending_invoices: String, // Já formatado como moeda
}
