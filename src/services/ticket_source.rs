use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Credentials;
use crate::domain::ticket::{Ticket, User};
use crate::error::AppResult;

#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Open tickets assigned to the authenticated user.
    async fn fetch_open_tickets(&self) -> AppResult<Vec<Ticket>>;

    /// The user the credentials authenticate as.
    async fn fetch_current_user(&self) -> AppResult<User>;
}

/// Builds a ticket source from a credential snapshot.
///
/// The workflow invokes the factory after the configuration gate, so a
/// reconfiguration in the same run is always observed by the fetch that
/// follows; there is no shared mutable client to go stale.
pub type TicketSourceFactory =
    dyn Fn(&Credentials) -> AppResult<Arc<dyn TicketSource>> + Send + Sync;
