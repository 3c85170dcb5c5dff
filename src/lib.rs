//! InvoiceKit invoice lifecycle library
//!
//! Draft, send and settle invoices with full or Pay-in-4 payment plans,
//! percentage discount codes and derived-on-read totals. Persistence sits
//! behind repository ports; in-memory adapters are included for tests and
//! embedded use.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::customers;
pub use modules::discounts;
pub use modules::installments;
pub use modules::invoices;
pub use modules::items;
pub use modules::payments;
