use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::domain::ticket::Ticket;
use crate::error::AppResult;
use crate::services::{Interaction, RepoHandle, TicketSource as _};
use crate::workflow::machine::{Event, Outcome, State};

/// Drives the workflow state machine: one side effect per state, the
/// resulting event fed back, no retries. All failures surface as a single
/// report at the terminal state; cancellation terminates silently.
pub async fn run_branch_workflow(ctx: &mut AppContext) -> AppResult<Outcome> {
    let mut state = State::CheckingRepository;
    loop {
        if let State::Finished(outcome) = state {
            report(ctx.ui.as_ref(), &outcome);
            return Ok(outcome);
        }

        let event = match &state {
            State::CheckingRepository => check_repository(ctx).await?,
            State::CheckingConfiguration { .. } => configuration_gate(ctx)?,
            State::FetchingTickets { .. } => fetch_tickets(ctx).await,
            State::SelectingTicket { tickets, .. } => select_ticket(ctx.ui.as_ref(), tickets)?,
            State::CreatingBranch { repo, ticket } => create_branch(ctx, repo, ticket).await?,
            State::Finished(_) => continue,
        };
        state = state.on(event);
    }
}

async fn check_repository(ctx: &AppContext) -> AppResult<Event> {
    let repositories = ctx.vcs.list_repositories().await?;
    Ok(match repositories.into_iter().next() {
        Some(repo) => Event::RepositoryFound(repo),
        None => Event::RepositoryMissing,
    })
}

fn configuration_gate(ctx: &mut AppContext) -> AppResult<Event> {
    if ctx.settings.is_configured() {
        return Ok(Event::ConfigurationPresent);
    }

    if !ctx
        .ui
        .confirm("Zammad is not configured. Would you like to configure it now?")?
    {
        return Ok(Event::ConfigurationCancelled);
    }

    let current_url = ctx.settings.base_url();
    let current_token = ctx.settings.api_token();
    let Some((url, token)) = ctx.ui.prompt_credentials(&current_url, &current_token)? else {
        return Ok(Event::ConfigurationCancelled);
    };

    // An empty entry is a no-op by policy; treat it as a cancelled attempt.
    if !ctx.settings.configure(&url, &token)? {
        return Ok(Event::ConfigurationCancelled);
    }
    Ok(Event::ConfigurationSaved)
}

async fn fetch_tickets(ctx: &AppContext) -> Event {
    let fetched = async {
        // Built from the current credential snapshot, so a reconfiguration
        // earlier in this run is always honored.
        let source = (ctx.tickets)(&ctx.settings.credentials())?;
        source.fetch_open_tickets().await
    }
    .await;

    match fetched {
        Ok(tickets) => Event::TicketsFetched(tickets),
        Err(err) => Event::FetchFailed(err.to_string()),
    }
}

fn select_ticket(ui: &dyn Interaction, tickets: &[Ticket]) -> AppResult<Event> {
    Ok(match ui.choose_ticket(tickets)? {
        Some(ticket) => Event::TicketPicked(ticket),
        None => Event::SelectionCancelled,
    })
}

async fn create_branch(ctx: &AppContext, repo: &RepoHandle, ticket: &Ticket) -> AppResult<Event> {
    if ctx.vcs.current_branch(repo).await?.is_none() {
        return Ok(Event::CurrentBranchUnknown);
    }

    let branch = BranchName::for_ticket(ticket);
    ctx.vcs.create_and_checkout(repo, &branch).await?;
    Ok(Event::BranchCreated(branch))
}

fn report(ui: &dyn Interaction, outcome: &Outcome) {
    match outcome {
        Outcome::BranchCreated { branch, ticket } => ui.show_info(&format!(
            "Created and checked out branch '{branch}' for ticket #{}: {}",
            ticket.number, ticket.title
        )),
        Outcome::NoRepository => {
            ui.show_error("Cannot create a branch: this project is not under Git version control.")
        }
        Outcome::NoTickets => ui.show_info("No open tickets found for the current user."),
        Outcome::FetchFailed(message) => {
            ui.show_error(&format!("Failed to fetch tickets: {message}"))
        }
        Outcome::NoCurrentBranch => {
            ui.show_error("Cannot create a branch: could not determine the current branch.")
        }
        Outcome::Cancelled => {}
    }
}
