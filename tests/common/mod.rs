#![allow(dead_code)]

use async_trait::async_trait;
use invoice_payments::domain::invoice::{Invoice, InvoiceType};
use invoice_payments::domain::payment::Payment;
use invoice_payments::domain::ports::InvoiceRepository;
use invoice_payments::error::Result;
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceRepository;
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

/// In-memory repository that counts `save` calls.
#[derive(Default, Clone)]
pub struct CountingRepository {
    inner: InMemoryInvoiceRepository,
    saves: Arc<AtomicUsize>,
}

impl CountingRepository {
    pub fn with_invoices(invoices: impl IntoIterator<Item = Invoice>) -> Self {
        Self {
            inner: InMemoryInvoiceRepository::with_invoices(invoices),
            saves: Arc::default(),
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InvoiceRepository for CountingRepository {
    async fn find(&self, reference: &str) -> Result<Option<Invoice>> {
        self.inner.find(reference).await
    }

    async fn save(&self, invoice: Invoice) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(invoice).await
    }

    async fn all(&self) -> Result<Vec<Invoice>> {
        self.inner.all().await
    }
}

pub fn invoice(
    reference: &str,
    amount: Decimal,
    amount_paid: Decimal,
    payments: &[Decimal],
    invoice_type: InvoiceType,
) -> Invoice {
    let mut invoice = Invoice::new(reference, amount, invoice_type);
    invoice.amount_paid = amount_paid;
    invoice.payments = payments
        .iter()
        .map(|amount| Payment::new(reference, *amount))
        .collect();
    invoice
}

pub fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create fixture");
    file.write_all(contents.as_bytes())
        .expect("Failed to write fixture");
    file
}
