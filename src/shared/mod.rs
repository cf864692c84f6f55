pub mod error;
pub mod result;

pub use error::{ExitCode, TicketError};
pub use result::Result;
