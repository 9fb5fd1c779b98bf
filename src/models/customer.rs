// src/models/customer.rs

use serde::Serialize;
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::invoice::{InvoiceAmount, InvoiceStatus};

// Mínimo necessário para os selects do frontend
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct CustomerField {
    pub id: Uuid,
    #[schema(example = "Lee Robinson")]
    pub name: String,
}

/// Cliente com as faturas vindo como array aninhado (json_agg).
/// Cliente sem fatura chega com array vazio, nunca NULL.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerInvoicesRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub invoices: Json<Vec<InvoiceAmount>>,
}

// Linha da tabela de clientes, com os totais calculados no service
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CustomersTable {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    // Centavos
    pub total_pending: i64,
    pub total_paid: i64,
}

impl From<CustomerInvoicesRow> for CustomersTable {
    fn from(row: CustomerInvoicesRow) -> Self {
        let invoices = row.invoices.0;
        let total_for = |status: InvoiceStatus| -> i64 {
            invoices
                .iter()
                .filter(|invoice| invoice.status == status)
                .map(|invoice| invoice.amount)
                .sum()
        };

        Self {
            total_invoices: invoices.len() as i64,
            total_pending: total_for(InvoiceStatus::Pending),
            total_paid: total_for(InvoiceStatus::Paid),
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
        }
    }
}
