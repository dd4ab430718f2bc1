//! Standings persistence
//!
//! - `layout` - Shared record layout constants and record encoding
//! - `record_store` - Random-access reads and in-place writes over the standings file

pub mod layout;
pub mod record_store;

pub use layout::{RECORD_SIZE, STORE_SIZE};
pub use record_store::RecordStore;
