use super::payment::Payment;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Tax rate applied to taxable payments.
pub const TAX_RATE: Decimal = dec!(0.14);

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Standard,
    Commercial,
}

/// A billable record with its running payment figures.
///
/// The payment history is append-only. An invoice with an amount of zero is
/// expected to carry no payments; the processor refuses to touch one that does.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Invoice {
    /// Key under which the invoice is looked up.
    pub reference: String,
    /// Total amount invoiced.
    pub amount: Decimal,
    /// Amount applied so far.
    #[serde(default)]
    pub amount_paid: Decimal,
    /// Tax recorded so far.
    #[serde(default)]
    pub tax_amount: Decimal,
    /// Payments in the order they were applied.
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(rename = "type", default)]
    pub invoice_type: InvoiceType,
}

impl Invoice {
    pub fn new(reference: impl Into<String>, amount: Decimal, invoice_type: InvoiceType) -> Self {
        Self {
            reference: reference.into(),
            amount,
            amount_paid: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            payments: Vec::new(),
            invoice_type,
        }
    }

    pub fn has_payments(&self) -> bool {
        !self.payments.is_empty()
    }

    /// Sum of every recorded payment.
    pub fn already_paid(&self) -> Result<Decimal> {
        self.payments.iter().try_fold(Decimal::ZERO, |total, p| {
            total.checked_add(p.amount).ok_or_else(|| self.overflow())
        })
    }

    /// Amount still due according to `amount_paid`.
    pub fn remaining(&self) -> Result<Decimal> {
        self.amount
            .checked_sub(self.amount_paid)
            .ok_or_else(|| self.overflow())
    }

    /// Applies a payment to an invoice with no prior payments.
    ///
    /// Tax only accrues for commercial invoices. On overflow the invoice is
    /// left untouched.
    pub fn apply_first_payment(&mut self, payment: Payment) -> Result<()> {
        let amount_paid = self
            .amount_paid
            .checked_add(payment.amount)
            .ok_or_else(|| self.overflow())?;
        let tax_amount = if self.invoice_type == InvoiceType::Commercial {
            self.tax_amount
                .checked_add(tax_on(payment.amount).ok_or_else(|| self.overflow())?)
                .ok_or_else(|| self.overflow())?
        } else {
            self.tax_amount
        };

        self.amount_paid = amount_paid;
        self.tax_amount = tax_amount;
        self.payments.push(payment);
        Ok(())
    }

    /// Applies a payment to an invoice that already has payments.
    ///
    /// Both `amount_paid` and `tax_amount` are overwritten with the figures of
    /// this payment, regardless of invoice type.
    pub fn apply_repeat_payment(&mut self, payment: Payment) -> Result<()> {
        self.tax_amount = tax_on(payment.amount).ok_or_else(|| self.overflow())?;
        self.amount_paid = payment.amount;
        self.payments.push(payment);
        Ok(())
    }

    fn overflow(&self) -> PaymentError {
        PaymentError::AmountOverflow(self.reference.clone())
    }
}

fn tax_on(amount: Decimal) -> Option<Decimal> {
    amount.checked_mul(TAX_RATE)
}
