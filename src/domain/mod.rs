//! Invoice and payment types, and the storage port the application depends on.

pub mod invoice;
pub mod outcome;
pub mod payment;
pub mod ports;
