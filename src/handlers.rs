// src/handlers.rs

pub mod customers;
pub mod dashboard;
pub mod invoices;
