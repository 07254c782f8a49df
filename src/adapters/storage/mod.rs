//! Storage adapters for finalized invoices.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryInvoiceRepository;
pub use json_file::JsonFileRepository;
