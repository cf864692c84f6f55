mod file_tickets;
mod show_mandatory_fields;

pub use file_tickets::{duplicate_query, FileTicketsUseCase};
pub use show_mandatory_fields::{ShowMandatoryFieldsUseCase, KNOWN_FIELDS};
