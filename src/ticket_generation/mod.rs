/// Report-to-ticket transformation core
///
/// - **Domain** (`domain`): the parsed scan report and ticket structures
/// - **Policies** (`policies`): static lookup tables and payload size rules
/// - **Services** (`services`): field building and ticket assembly
pub mod domain;
pub mod policies;
pub mod services;
