// src/db/store.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    common::error::StoreError,
    models::{
        customer::{CustomerField, CustomerInvoicesRow},
        dashboard::Revenue,
        invoice::{InvoiceAmount, InvoiceRecord, InvoicesTable, LatestInvoiceRow},
    },
};

/// O colaborador de banco do dashboard: só leituras, uma por consulta crua.
/// Ordenação e filtro ficam aqui; o formato final para a tela fica no service.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Pontos de receita ordenados por mês (ASC).
    async fn revenue(&self) -> Result<Vec<Revenue>, StoreError>;

    /// Faturas mais recentes (data DESC) com o cliente aninhado.
    async fn latest_invoices(&self, limit: i64) -> Result<Vec<LatestInvoiceRow>, StoreError>;

    async fn count_invoices(&self) -> Result<Option<i64>, StoreError>;

    async fn count_customers(&self) -> Result<Option<i64>, StoreError>;

    /// (valor, status) de todas as faturas.
    async fn invoice_amounts(&self) -> Result<Vec<InvoiceAmount>, StoreError>;

    /// Busca por substring (case-insensitive) em nome, e-mail, valor, data ou status.
    async fn filtered_invoices(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<InvoicesTable>, StoreError>;

    async fn count_filtered_invoices(&self, query: &str) -> Result<Option<i64>, StoreError>;

    /// Exatamente uma linha, senão StoreError::UnexpectedRowCount.
    async fn invoice_by_id(&self, id: Uuid) -> Result<InvoiceRecord, StoreError>;

    async fn customer_fields(&self) -> Result<Vec<CustomerField>, StoreError>;

    /// Busca por substring em nome ou e-mail, com as faturas aninhadas.
    async fn filtered_customers(&self, query: &str) -> Result<Vec<CustomerInvoicesRow>, StoreError>;
}

/// Contrato do `.single()`: zero ou mais de uma linha é erro.
pub fn expect_single<T>(rows: Vec<T>) -> Result<T, StoreError> {
    let found = rows.len();
    let mut rows = rows.into_iter();
    match (rows.next(), found) {
        (Some(row), 1) => Ok(row),
        _ => Err(StoreError::UnexpectedRowCount { expected: 1, found }),
    }
}

/// Estreita um relacionamento N:1 que chega como array para o único registro.
pub fn single_related<T>(related: Vec<T>, relation: &'static str) -> Result<T, StoreError> {
    let found = related.len();
    expect_single(related).map_err(|_| StoreError::BrokenRelationship { relation, found })
}
