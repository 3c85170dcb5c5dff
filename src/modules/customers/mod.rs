pub mod repositories;

pub use repositories::{CustomerRepository, MemoryCustomerRepository};
