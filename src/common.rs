// src/common.rs

pub mod currency;
pub mod error;
pub mod fetch;
