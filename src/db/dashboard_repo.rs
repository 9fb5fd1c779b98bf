// src/db/dashboard_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::StoreError,
    db::store::{expect_single, DashboardStore},
    models::{
        customer::{CustomerField, CustomerInvoicesRow},
        dashboard::Revenue,
        invoice::{InvoiceAmount, InvoiceRecord, InvoicesTable, LatestInvoiceRow},
    },
};

// Predicado de busca da tabela de faturas. Colunas numéricas/data comparadas como texto.
const INVOICE_SEARCH: &str = r#"
    c.name ILIKE $1
    OR c.email ILIKE $1
    OR i.amount::text ILIKE $1
    OR i.date::text ILIKE $1
    OR i.status::text ILIKE $1
"#;

/// Monta o padrão `%termo%` escapando os curingas do LIKE,
/// para que a busca seja sempre substring literal.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

// O repositório do dashboard, responsável por todas as leituras no Postgres
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    async fn revenue(&self) -> Result<Vec<Revenue>, StoreError> {
        let data = sqlx::query_as::<_, Revenue>(
            "SELECT month, revenue FROM revenue ORDER BY month ASC",
        )
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }

    async fn latest_invoices(&self, limit: i64) -> Result<Vec<LatestInvoiceRow>, StoreError> {
        // O cliente vem como array (json_agg); o service estreita para 1 registro
        let data = sqlx::query_as::<_, LatestInvoiceRow>(
            r#"
            SELECT
                i.id, i.amount,
                COALESCE(
                    (SELECT json_agg(json_build_object(
                                'name', c.name,
                                'email', c.email,
                                'image_url', c.image_url))
                     FROM customers c
                     WHERE c.id = i.customer_id),
                    '[]'::json
                ) AS customers
            FROM invoices i
            ORDER BY i.date DESC
            LIMIT $1
            "#,
        )
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }

    async fn count_invoices(&self) -> Result<Option<i64>, StoreError> {
        let count = sqlx::query_scalar::<_, Option<i64>>("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn count_customers(&self) -> Result<Option<i64>, StoreError> {
        let count = sqlx::query_scalar::<_, Option<i64>>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn invoice_amounts(&self) -> Result<Vec<InvoiceAmount>, StoreError> {
        let data = sqlx::query_as::<_, InvoiceAmount>("SELECT amount, status FROM invoices")
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }

    async fn filtered_invoices(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<InvoicesTable>, StoreError> {
        let sql = format!(
            r#"
            SELECT
                i.id, i.customer_id, i.amount, i.date, i.status,
                c.name, c.email, c.image_url
            FROM invoices i
            JOIN customers c ON i.customer_id = c.id
            WHERE {INVOICE_SEARCH}
            ORDER BY i.date DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let data = sqlx::query_as::<_, InvoicesTable>(&sql)
            .bind(contains_pattern(query))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }

    async fn count_filtered_invoices(&self, query: &str) -> Result<Option<i64>, StoreError> {
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM invoices i
            JOIN customers c ON i.customer_id = c.id
            WHERE {INVOICE_SEARCH}
            "#
        );

        let count = sqlx::query_scalar::<_, Option<i64>>(&sql)
            .bind(contains_pattern(query))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn invoice_by_id(&self, id: Uuid) -> Result<InvoiceRecord, StoreError> {
        // fetch_all + expect_single: duplicado também é erro, não só "não achou"
        let rows = sqlx::query_as::<_, InvoiceRecord>(
            "SELECT id, customer_id, amount, status FROM invoices WHERE id = $1",
        )
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        expect_single(rows)
    }

    async fn customer_fields(&self) -> Result<Vec<CustomerField>, StoreError> {
        let data = sqlx::query_as::<_, CustomerField>(
            "SELECT id, name FROM customers ORDER BY name ASC",
        )
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }

    async fn filtered_customers(&self, query: &str) -> Result<Vec<CustomerInvoicesRow>, StoreError> {
        // LEFT JOIN + FILTER: cliente sem fatura recebe '[]' em vez de [null]
        let data = sqlx::query_as::<_, CustomerInvoicesRow>(
            r#"
            SELECT
                c.id, c.name, c.email, c.image_url,
                COALESCE(
                    json_agg(json_build_object('amount', i.amount, 'status', i.status))
                        FILTER (WHERE i.id IS NOT NULL),
                    '[]'::json
                ) AS invoices
            FROM customers c
            LEFT JOIN invoices i ON i.customer_id = c.id
            WHERE c.name ILIKE $1 OR c.email ILIKE $1
            GROUP BY c.id, c.name, c.email, c.image_url
            ORDER BY c.name ASC
            "#,
        )
            .bind(contains_pattern(query))
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }
}
