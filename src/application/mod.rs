//! Application layer containing the payment orchestration.
//!
//! This module defines the `PaymentProcessor`, the entry point for applying
//! payments. It talks to storage only through the `InvoiceRepository` port.

pub mod processor;
