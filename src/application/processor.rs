use crate::domain::invoice::Invoice;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment::Payment;
use crate::domain::ports::InvoiceRepositoryBox;
use crate::error::{PaymentError, Result};
use tracing::{debug, info};

/// Applies incoming payments to the invoices they reference.
///
/// `PaymentProcessor` owns the invoice repository. Each call to
/// [`process_payment`](Self::process_payment) loads one invoice, decides the
/// outcome, and writes the invoice back exactly once unless it fails.
pub struct PaymentProcessor {
    repository: InvoiceRepositoryBox,
}

impl PaymentProcessor {
    pub fn new(repository: InvoiceRepositoryBox) -> Self {
        Self { repository }
    }

    /// Processes a single payment against the invoice matching its reference.
    ///
    /// Fails with [`PaymentError::NoMatchingInvoice`] if the reference is
    /// unknown and with [`PaymentError::InvalidInvoiceState`] if a zero-amount
    /// invoice carries payments. Nothing is saved on failure.
    pub async fn process_payment(&self, payment: Payment) -> Result<PaymentOutcome> {
        let mut invoice = self
            .repository
            .find(&payment.reference)
            .await?
            .ok_or(PaymentError::NoMatchingInvoice)?;

        let amount = payment.amount;
        let outcome = Self::apply(&mut invoice, payment)?;
        debug!(
            reference = %invoice.reference,
            amount = %amount,
            outcome = ?outcome,
            amount_paid = %invoice.amount_paid,
            tax_amount = %invoice.tax_amount,
            "payment classified"
        );

        self.repository.save(invoice).await?;
        Ok(outcome)
    }

    /// Consumes the processor and returns every invoice in the repository.
    pub async fn into_results(self) -> Result<Vec<Invoice>> {
        self.repository.all().await
    }

    fn apply(invoice: &mut Invoice, payment: Payment) -> Result<PaymentOutcome> {
        if invoice.amount.is_zero() {
            return if invoice.has_payments() {
                Err(PaymentError::InvalidInvoiceState)
            } else {
                Ok(PaymentOutcome::NoPaymentNeeded)
            };
        }

        let remaining = invoice.remaining()?;

        let outcome = if invoice.has_payments() {
            if invoice.amount == invoice.already_paid()? {
                PaymentOutcome::AlreadyFullyPaid
            } else if payment.amount > remaining {
                PaymentOutcome::ExceedsRemainingAmount
            } else if payment.amount == remaining {
                PaymentOutcome::FinalPartialPayment
            } else {
                PaymentOutcome::AnotherPartialPayment
            }
        } else if payment.amount > invoice.amount {
            PaymentOutcome::ExceedsInvoiceAmount
        } else if payment.amount == invoice.amount {
            PaymentOutcome::FullyPaid
        } else {
            PaymentOutcome::PartiallyPaid
        };

        if outcome.is_applied() {
            info!(
                reference = %invoice.reference,
                amount = %payment.amount,
                outcome = ?outcome,
                "applying payment"
            );
            if invoice.has_payments() {
                invoice.apply_repeat_payment(payment)?;
            } else {
                invoice.apply_first_payment(payment)?;
            }
        }

        Ok(outcome)
    }
}
