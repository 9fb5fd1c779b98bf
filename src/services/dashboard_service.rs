// src/services/dashboard_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::{
        currency::format_currency,
        error::{AppError, FetchOperation, StoreError},
        fetch::guard_fetch,
    },
    db::{store::single_related, DashboardStore},
    models::{
        customer::{CustomerField, CustomersTable},
        dashboard::{CardData, Revenue},
        invoice::{InvoiceForm, InvoiceStatus, InvoicesTable, LatestInvoice},
    },
};

pub const ITEMS_PER_PAGE: i64 = 6;
pub const LATEST_INVOICES_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DashboardStore>) -> Self {
        Self { store }
    }

    // =========================================================================
    //  DASHBOARD (gráfico, últimas faturas, cards)
    // =========================================================================

    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, AppError> {
        tracing::debug!("Buscando dados de receita");
        guard_fetch(FetchOperation::Revenue, self.store.revenue()).await
    }

    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoice>, AppError> {
        tracing::debug!("Buscando as últimas faturas");
        guard_fetch(FetchOperation::LatestInvoices, async {
            let rows = self.store.latest_invoices(LATEST_INVOICES_LIMIT).await?;

            rows.into_iter()
                .map(|row| -> Result<LatestInvoice, StoreError> {
                    let customer = single_related(row.customers.0, "customers")?;
                    Ok(LatestInvoice {
                        id: row.id,
                        name: customer.name,
                        image_url: customer.image_url,
                        email: customer.email,
                        amount: row.amount,
                    })
                })
                .collect::<Result<Vec<_>, StoreError>>()
        })
        .await
    }

    /// Três leituras independentes em paralelo; se qualquer uma falhar, falha tudo.
    pub async fn fetch_card_data(&self) -> Result<CardData, AppError> {
        tracing::debug!("Buscando dados dos cards");
        guard_fetch(FetchOperation::CardData, async {
            let (invoice_count, customer_count, amounts) = tokio::try_join!(
                self.store.count_invoices(),
                self.store.count_customers(),
                self.store.invoice_amounts(),
            )?;

            let total_for = |status: InvoiceStatus| -> i64 {
                amounts
                    .iter()
                    .filter(|invoice| invoice.status == status)
                    .map(|invoice| invoice.amount)
                    .sum()
            };

            Ok::<_, StoreError>(CardData {
                number_of_customers: customer_count.unwrap_or(0),
                number_of_invoices: invoice_count.unwrap_or(0),
                total_paid_invoices: format_currency(total_for(InvoiceStatus::Paid)),
                total_pending_invoices: format_currency(total_for(InvoiceStatus::Pending)),
            })
        })
        .await
    }

    // =========================================================================
    //  FATURAS
    // =========================================================================

    /// Página (1-indexada) da tabela de faturas. Página 0 é tratada como 1.
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<InvoicesTable>, AppError> {
        let offset = (i64::from(page.max(1)) - 1) * ITEMS_PER_PAGE;
        tracing::debug!(query, page, offset, "Buscando faturas filtradas");

        guard_fetch(
            FetchOperation::FilteredInvoices,
            self.store.filtered_invoices(query, ITEMS_PER_PAGE, offset),
        )
        .await
    }

    pub async fn fetch_invoices_pages(&self, query: &str) -> Result<i64, AppError> {
        tracing::debug!(query, "Contando páginas de faturas");
        let count = guard_fetch(
            FetchOperation::InvoicesPages,
            self.store.count_filtered_invoices(query),
        )
        .await?;

        Ok(total_pages(count.unwrap_or(0)))
    }

    /// Fatura para o formulário de edição, com o valor já em unidade maior.
    pub async fn fetch_invoice_by_id(&self, id: Uuid) -> Result<InvoiceForm, AppError> {
        tracing::debug!(%id, "Buscando fatura");
        let record = guard_fetch(FetchOperation::InvoiceById, self.store.invoice_by_id(id)).await?;

        Ok(InvoiceForm::from(record))
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn fetch_customers(&self) -> Result<Vec<CustomerField>, AppError> {
        tracing::debug!("Buscando todos os clientes");
        guard_fetch(FetchOperation::Customers, self.store.customer_fields()).await
    }

    pub async fn fetch_filtered_customers(&self, query: &str) -> Result<Vec<CustomersTable>, AppError> {
        tracing::debug!(query, "Buscando tabela de clientes");
        let rows = guard_fetch(
            FetchOperation::FilteredCustomers,
            self.store.filtered_customers(query),
        )
        .await?;

        Ok(rows.into_iter().map(CustomersTable::from).collect())
    }
}

fn total_pages(count: i64) -> i64 {
    let count = count.max(0);
    (count + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
}
