use std::fmt;

/// Business result of applying a payment to an invoice.
///
/// Rejections such as overpayment are outcomes, not errors: the invoice is
/// still persisted and the caller receives a status message.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentOutcome {
    NoPaymentNeeded,
    AlreadyFullyPaid,
    ExceedsRemainingAmount,
    FinalPartialPayment,
    AnotherPartialPayment,
    ExceedsInvoiceAmount,
    FullyPaid,
    PartiallyPaid,
}

impl PaymentOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoPaymentNeeded => "no payment needed",
            Self::AlreadyFullyPaid => "invoice was already fully paid",
            Self::ExceedsRemainingAmount => {
                "the payment is greater than the partial amount remaining"
            }
            Self::FinalPartialPayment => {
                "final partial payment received, invoice is now fully paid"
            }
            Self::AnotherPartialPayment => {
                "another partial payment received, still not fully paid"
            }
            Self::ExceedsInvoiceAmount => "the payment is greater than the invoice amount",
            Self::FullyPaid => "invoice is now fully paid",
            Self::PartiallyPaid => "invoice is now partially paid",
        }
    }

    /// Whether the payment was appended to the invoice.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            Self::FinalPartialPayment
                | Self::AnotherPartialPayment
                | Self::FullyPaid
                | Self::PartiallyPaid
        )
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
