// src/test_utils.rs

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::StoreError,
    db::store::{expect_single, DashboardStore},
    models::{
        customer::{CustomerField, CustomerInvoicesRow},
        dashboard::Revenue,
        invoice::{
            InvoiceAmount, InvoiceCustomer, InvoiceRecord, InvoiceStatus, InvoicesTable,
            LatestInvoiceRow,
        },
    },
};

#[derive(Debug, Clone)]
pub struct CustomerFixture {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct InvoiceFixture {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

pub fn invoice(customer_id: Uuid, amount: i64, status: InvoiceStatus, (y, m, d): (i32, u32, u32)) -> InvoiceFixture {
    InvoiceFixture {
        id: Uuid::new_v4(),
        customer_id,
        amount,
        status,
        date: NaiveDate::from_ymd_opt(y, m, d).expect("invalid fixture date"),
    }
}

/// DashboardStore em memória com a mesma semântica de filtro/ordenação do Postgres.
/// `failing(metodo)` injeta falha de banco naquele método.
#[derive(Default)]
pub struct InMemoryStore {
    revenue: Vec<Revenue>,
    customers: Vec<CustomerFixture>,
    invoices: Vec<InvoiceFixture>,
    failing: HashSet<&'static str>,
    fail_all: bool,
    counts_unavailable: bool,
}

impl InMemoryStore {
    pub fn add_customer(&mut self, name: &str, email: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.customers.push(CustomerFixture {
            id,
            name: name.to_string(),
            email: email.to_string(),
            image_url: format!("/customers/{}.png", name.to_lowercase().replace(' ', "-")),
        });
        id
    }

    pub fn add_invoice(&mut self, invoice: InvoiceFixture) -> Uuid {
        let id = invoice.id;
        self.invoices.push(invoice);
        id
    }

    pub fn add_revenue(&mut self, month: &str, revenue: i64) {
        self.revenue.push(Revenue { month: month.to_string(), revenue });
    }

    pub fn failing(mut self, method: &'static str) -> Self {
        self.failing.insert(method);
        self
    }

    pub fn failing_everything(mut self) -> Self {
        self.fail_all = true;
        self
    }

    pub fn without_counts(mut self) -> Self {
        self.counts_unavailable = true;
        self
    }

    pub fn invoice_ids_by_date_desc(&self) -> Vec<Uuid> {
        self.invoices_by_date_desc().into_iter().map(|i| i.id).collect()
    }

    fn check(&self, method: &'static str) -> Result<(), StoreError> {
        if self.fail_all || self.failing.contains(method) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn invoices_by_date_desc(&self) -> Vec<&InvoiceFixture> {
        let mut invoices: Vec<&InvoiceFixture> = self.invoices.iter().collect();
        invoices.sort_by(|a, b| b.date.cmp(&a.date));
        invoices
    }

    fn customer(&self, id: Uuid) -> Option<&CustomerFixture> {
        self.customers.iter().find(|c| c.id == id)
    }

    // Equivalente ao JOIN + ILIKE da tabela de faturas
    fn matching_invoices(&self, query: &str) -> Vec<InvoicesTable> {
        self.invoices_by_date_desc()
            .into_iter()
            .filter_map(|invoice| {
                let customer = self.customer(invoice.customer_id)?;
                let columns = [
                    customer.name.clone(),
                    customer.email.clone(),
                    invoice.amount.to_string(),
                    invoice.date.to_string(),
                    invoice.status.as_str().to_string(),
                ];
                columns.iter().any(|column| contains_ignore_case(column, query)).then(|| InvoicesTable {
                    id: invoice.id,
                    customer_id: invoice.customer_id,
                    name: customer.name.clone(),
                    email: customer.email.clone(),
                    image_url: customer.image_url.clone(),
                    date: invoice.date,
                    amount: invoice.amount,
                    status: invoice.status,
                })
            })
            .collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl DashboardStore for InMemoryStore {
    async fn revenue(&self) -> Result<Vec<Revenue>, StoreError> {
        self.check("revenue")?;
        let mut revenue = self.revenue.clone();
        revenue.sort_by(|a, b| a.month.cmp(&b.month));
        Ok(revenue)
    }

    async fn latest_invoices(&self, limit: i64) -> Result<Vec<LatestInvoiceRow>, StoreError> {
        self.check("latest_invoices")?;
        Ok(self
            .invoices_by_date_desc()
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|invoice| LatestInvoiceRow {
                id: invoice.id,
                amount: invoice.amount,
                customers: Json(
                    self.customers
                        .iter()
                        .filter(|c| c.id == invoice.customer_id)
                        .map(|c| InvoiceCustomer {
                            name: c.name.clone(),
                            email: c.email.clone(),
                            image_url: c.image_url.clone(),
                        })
                        .collect(),
                ),
            })
            .collect())
    }

    async fn count_invoices(&self) -> Result<Option<i64>, StoreError> {
        self.check("count_invoices")?;
        Ok((!self.counts_unavailable).then(|| self.invoices.len() as i64))
    }

    async fn count_customers(&self) -> Result<Option<i64>, StoreError> {
        self.check("count_customers")?;
        Ok((!self.counts_unavailable).then(|| self.customers.len() as i64))
    }

    async fn invoice_amounts(&self) -> Result<Vec<InvoiceAmount>, StoreError> {
        self.check("invoice_amounts")?;
        Ok(self
            .invoices
            .iter()
            .map(|i| InvoiceAmount { amount: i.amount, status: i.status })
            .collect())
    }

    async fn filtered_invoices(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<InvoicesTable>, StoreError> {
        self.check("filtered_invoices")?;
        Ok(self
            .matching_invoices(query)
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }

    async fn count_filtered_invoices(&self, query: &str) -> Result<Option<i64>, StoreError> {
        self.check("count_filtered_invoices")?;
        Ok(Some(self.matching_invoices(query).len() as i64))
    }

    async fn invoice_by_id(&self, id: Uuid) -> Result<InvoiceRecord, StoreError> {
        self.check("invoice_by_id")?;
        let rows = self
            .invoices
            .iter()
            .filter(|i| i.id == id)
            .map(|i| InvoiceRecord {
                id: i.id,
                customer_id: i.customer_id,
                amount: i.amount,
                status: i.status,
            })
            .collect();
        expect_single(rows)
    }

    async fn customer_fields(&self) -> Result<Vec<CustomerField>, StoreError> {
        self.check("customer_fields")?;
        let mut fields: Vec<CustomerField> = self
            .customers
            .iter()
            .map(|c| CustomerField { id: c.id, name: c.name.clone() })
            .collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(fields)
    }

    async fn filtered_customers(&self, query: &str) -> Result<Vec<CustomerInvoicesRow>, StoreError> {
        self.check("filtered_customers")?;
        let mut rows: Vec<CustomerInvoicesRow> = self
            .customers
            .iter()
            .filter(|c| contains_ignore_case(&c.name, query) || contains_ignore_case(&c.email, query))
            .map(|c| CustomerInvoicesRow {
                id: c.id,
                name: c.name.clone(),
                email: c.email.clone(),
                image_url: c.image_url.clone(),
                invoices: Json(
                    self.invoices
                        .iter()
                        .filter(|i| i.customer_id == c.id)
                        .map(|i| InvoiceAmount { amount: i.amount, status: i.status })
                        .collect(),
                ),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

/// Base pequena para os testes: 4 clientes (um sem faturas), 8 faturas, 3 meses.
pub fn sample_store() -> InMemoryStore {
    let mut store = InMemoryStore::default();

    let delba = store.add_customer("Delba de Oliveira", "delba@oliveira.com");
    let lee = store.add_customer("Lee Robinson", "lee@robinson.com");
    let amy = store.add_customer("Amy Burns", "amy@burns.com");
    store.add_customer("Michael Novotny", "michael@novotny.com");

    store.add_invoice(invoice(delba, 15795, InvoiceStatus::Paid, (2022, 12, 6)));
    store.add_invoice(invoice(delba, 20348, InvoiceStatus::Paid, (2022, 11, 14)));
    store.add_invoice(invoice(delba, 8945, InvoiceStatus::Pending, (2023, 6, 3)));
    store.add_invoice(invoice(lee, 3040, InvoiceStatus::Paid, (2023, 8, 5)));
    store.add_invoice(invoice(lee, 44800, InvoiceStatus::Pending, (2023, 7, 16)));
    store.add_invoice(invoice(amy, 34577, InvoiceStatus::Pending, (2023, 8, 4)));
    store.add_invoice(invoice(amy, 54246, InvoiceStatus::Pending, (2023, 7, 1)));
    store.add_invoice(invoice(lee, 666, InvoiceStatus::Pending, (2023, 6, 27)));

    store.add_revenue("Mar", 2200);
    store.add_revenue("Jan", 2000);
    store.add_revenue("Feb", 1800);

    store
}
