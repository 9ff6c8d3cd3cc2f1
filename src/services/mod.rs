pub mod interaction;
pub mod ticket_source;
pub mod version_control;

pub use interaction::Interaction;
pub use ticket_source::{TicketSource, TicketSourceFactory};
pub use version_control::{RepoHandle, VersionControl};
