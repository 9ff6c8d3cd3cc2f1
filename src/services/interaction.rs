use crate::domain::ticket::Ticket;
use crate::error::AppResult;

/// User-facing prompts and reports. Every prompt can be declined; `None`
/// (or `false`) means the user cancelled, which is never an error.
pub trait Interaction: Send + Sync {
    fn confirm(&self, message: &str) -> AppResult<bool>;

    fn prompt_credentials(
        &self,
        current_url: &str,
        current_token: &str,
    ) -> AppResult<Option<(String, String)>>;

    fn choose_ticket(&self, tickets: &[Ticket]) -> AppResult<Option<Ticket>>;

    fn show_error(&self, message: &str);

    fn show_info(&self, message: &str);
}
