use std::io;

use dialoguer::{Confirm, Input, Password, Select};

use crate::domain::ticket::Ticket;
use crate::error::{AppError, AppResult};
use crate::services::Interaction;

/// Terminal prompts via dialoguer. Esc on a selectable prompt and an empty
/// credential entry both count as cancellation.
pub struct Console;

fn prompt_failed(err: dialoguer::Error) -> AppError {
    AppError::Io(io::Error::other(err))
}

impl Interaction for Console {
    fn confirm(&self, message: &str) -> AppResult<bool> {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact_opt()
            .map_err(prompt_failed)?;
        Ok(answer.unwrap_or(false))
    }

    fn prompt_credentials(
        &self,
        current_url: &str,
        _current_token: &str,
    ) -> AppResult<Option<(String, String)>> {
        let url: String = Input::new()
            .with_prompt("Zammad URL (e.g. https://your-instance.zammad.com)")
            .with_initial_text(current_url)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_failed)?;
        if url.trim().is_empty() {
            return Ok(None);
        }

        let token = Password::new()
            .with_prompt("API token")
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_failed)?;
        if token.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some((url, token)))
    }

    fn choose_ticket(&self, tickets: &[Ticket]) -> AppResult<Option<Ticket>> {
        let labels: Vec<String> = tickets.iter().map(ToString::to_string).collect();
        let choice = Select::new()
            .with_prompt("Select a ticket")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_failed)?;
        Ok(choice.map(|index| tickets[index].clone()))
    }

    fn show_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }

    fn show_info(&self, message: &str) {
        println!("{message}");
    }
}
