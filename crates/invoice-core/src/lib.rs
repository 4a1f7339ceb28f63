pub mod pipeline;

pub use pipeline::{InvoiceEngine, ProcessOutcome};
