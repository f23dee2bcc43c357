use super::invoice::Invoice;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn find(&self, reference: &str) -> Result<Option<Invoice>>;
    async fn save(&self, invoice: Invoice) -> Result<()>;
    async fn all(&self) -> Result<Vec<Invoice>>;
}

pub type InvoiceRepositoryBox = Box<dyn InvoiceRepository>;
