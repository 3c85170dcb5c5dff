// Invoices module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    AddLineItemCommand, CreateInvoiceCommand, Invoice, InvoiceDto, InvoiceStatus,
    InvoiceSummaryDto, LineItem, LineItemDto, PaymentPlan, RemoveLineItemCommand,
    UpdateInvoiceCommand,
};
pub use repositories::{InvoiceRepository, MemoryInvoiceRepository};
pub use services::InvoiceService;
