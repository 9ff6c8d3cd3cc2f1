use std::sync::Arc;

use crate::config::ZammadSettings;
use crate::services::{Interaction, TicketSourceFactory, VersionControl};

/// Everything a command needs: the durable settings plus the injected
/// capabilities (version control, prompts, ticket source construction).
pub struct AppContext {
    pub settings: ZammadSettings,
    pub vcs: Arc<dyn VersionControl>,
    pub ui: Arc<dyn Interaction>,
    pub tickets: Arc<TicketSourceFactory>,
}

impl AppContext {
    pub fn new(
        settings: ZammadSettings,
        vcs: Arc<dyn VersionControl>,
        ui: Arc<dyn Interaction>,
        tickets: Arc<TicketSourceFactory>,
    ) -> Self {
        Self {
            settings,
            vcs,
            ui,
            tickets,
        }
    }
}
