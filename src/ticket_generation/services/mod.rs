pub mod field_builder;
pub mod ticket_assembler;

pub use field_builder::{FieldBuilder, COMPONENTS_ATTACHMENT, UNCATEGORIZED, VIOLATIONS_ATTACHMENT};
pub use ticket_assembler::{Extraction, TicketAssembler};
