mod commands;
mod invoice;
mod line_item;

pub use commands::{
    AddLineItemCommand, CreateInvoiceCommand, InvoiceDto, InvoiceSummaryDto, LineItemDto,
    RemoveLineItemCommand, UpdateInvoiceCommand,
};
pub use invoice::{Invoice, InvoiceStatus, PaymentPlan};
pub use line_item::LineItem;
