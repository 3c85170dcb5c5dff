pub mod customers;
pub mod discounts;
pub mod installments;
pub mod invoices;
pub mod items;
pub mod payments;
