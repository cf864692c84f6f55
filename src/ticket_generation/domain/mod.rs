pub mod report;
pub mod ticket;

pub use report::{resolve_path, PolicyStatus, ScanReport, Violation};
pub use ticket::{AttachmentPayload, PendingTicket, PendingTicketSet, TicketDraft, TicketFields};
