// Test helper modules
//
// Wires the services against the in-memory adapters so integration
// tests drive the real service layer end to end.

pub mod test_data;

pub use test_app::*;
pub use test_data::*;
