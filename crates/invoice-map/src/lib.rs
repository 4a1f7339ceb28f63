mod config;
mod engine;
mod parse;

pub use config::load_alias_table;
pub use engine::{FieldMapper, MappingOutcome};
pub use parse::{DateFormat, parse_amount, parse_date};
