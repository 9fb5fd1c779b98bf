// src/models/invoice.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "invoice_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending, // Aguardando pagamento
    Paid,    // Quitada
}

impl InvoiceStatus {
    /// Texto exatamente como o Postgres devolve em `status::text`.
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

// --- Linhas cruas (como o banco devolve) ---

/// Par (valor, status) usado nos totais do dashboard e da tabela de clientes.
/// Valor sempre em centavos.
#[derive(Debug, Clone, Deserialize, FromRow)]
pub struct InvoiceAmount {
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// Cliente resumido embutido numa fatura (relacionamento N:1).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceCustomer {
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Fatura com o cliente vindo como array aninhado (json_agg).
/// O array deveria ter sempre 1 elemento; quem estreita é o service.
#[derive(Debug, Clone, FromRow)]
pub struct LatestInvoiceRow {
    pub id: Uuid,
    pub amount: i64,
    pub customers: Json<Vec<InvoiceCustomer>>,
}

/// Registro da tabela `invoices` (valor em centavos).
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceRecord {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: InvoiceStatus,
}

// --- Projeções para a tela ---

// 1. Últimas faturas (card lateral do dashboard)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LatestInvoice {
    #[schema(example = "3958dc9e-712f-4377-85e9-fec4b6a6442a")]
    pub id: Uuid,
    #[schema(example = "Delba de Oliveira")]
    pub name: String,
    #[schema(example = "/customers/delba-de-oliveira.png")]
    pub image_url: String,
    #[schema(example = "delba@oliveira.com")]
    pub email: String,
    // Centavos
    #[schema(example = 15795)]
    pub amount: i64,
}

// 2. Linha da tabela de faturas (JOIN invoices x customers)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct InvoicesTable {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: NaiveDate,
    // Centavos
    pub amount: i64,
    pub status: InvoiceStatus,
}

// 3. Formulário de edição (valor já em reais/dólares)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    #[schema(example = "30.00")]
    pub amount: Decimal,
    pub status: InvoiceStatus,
}

impl From<InvoiceRecord> for InvoiceForm {
    fn from(record: InvoiceRecord) -> Self {
        Self {
            id: record.id,
            customer_id: record.customer_id,
            // Centavos -> unidade maior, divisão exata (escala 2)
            amount: Decimal::new(record.amount, 2),
            status: record.status,
        }
    }
}
