use crate::domain::branch::BranchName;
use crate::domain::ticket::Ticket;
use crate::services::RepoHandle;

/// The ticket-to-branch workflow as a pure state machine. Each state names
/// the single side effect the driver performs next; the resulting event is
/// fed back through [`State::on`]. No I/O happens here.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    CheckingRepository,
    CheckingConfiguration {
        repo: RepoHandle,
    },
    FetchingTickets {
        repo: RepoHandle,
    },
    SelectingTicket {
        repo: RepoHandle,
        tickets: Vec<Ticket>,
    },
    CreatingBranch {
        repo: RepoHandle,
        ticket: Ticket,
    },
    Finished(Outcome),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    RepositoryFound(RepoHandle),
    RepositoryMissing,
    ConfigurationPresent,
    ConfigurationSaved,
    /// Declined the offer to configure, cancelled entry, or entered nothing.
    ConfigurationCancelled,
    TicketsFetched(Vec<Ticket>),
    FetchFailed(String),
    TicketPicked(Ticket),
    SelectionCancelled,
    BranchCreated(BranchName),
    CurrentBranchUnknown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    BranchCreated { branch: BranchName, ticket: Ticket },
    NoRepository,
    NoTickets,
    FetchFailed(String),
    NoCurrentBranch,
    /// Terminates silently; never reported as an error.
    Cancelled,
}

impl State {
    pub fn on(self, event: Event) -> State {
        use Event::*;

        match (self, event) {
            (State::CheckingRepository, RepositoryFound(repo)) => {
                State::CheckingConfiguration { repo }
            }
            (State::CheckingRepository, RepositoryMissing) => {
                State::Finished(Outcome::NoRepository)
            }
            (
                State::CheckingConfiguration { repo },
                ConfigurationPresent | ConfigurationSaved,
            ) => State::FetchingTickets { repo },
            (State::CheckingConfiguration { .. }, ConfigurationCancelled) => {
                State::Finished(Outcome::Cancelled)
            }
            (State::FetchingTickets { .. }, TicketsFetched(tickets)) if tickets.is_empty() => {
                State::Finished(Outcome::NoTickets)
            }
            (State::FetchingTickets { repo }, TicketsFetched(tickets)) => {
                State::SelectingTicket { repo, tickets }
            }
            (State::FetchingTickets { .. }, FetchFailed(message)) => {
                State::Finished(Outcome::FetchFailed(message))
            }
            (State::SelectingTicket { repo, .. }, TicketPicked(ticket)) => {
                State::CreatingBranch { repo, ticket }
            }
            (State::SelectingTicket { .. }, SelectionCancelled) => {
                State::Finished(Outcome::Cancelled)
            }
            (State::CreatingBranch { ticket, .. }, BranchCreated(branch)) => {
                State::Finished(Outcome::BranchCreated { branch, ticket })
            }
            (State::CreatingBranch { .. }, CurrentBranchUnknown) => {
                State::Finished(Outcome::NoCurrentBranch)
            }
            // An event that does not belong to the current gate leaves the
            // machine where it is.
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::ticket::test_support::ticket;

    fn repo() -> RepoHandle {
        RepoHandle {
            root: PathBuf::from("/work/project"),
        }
    }

    #[test]
    fn happy_path_reaches_branch_created() {
        let t = ticket(42, "1023", "Fix Login Bug!!");
        let branch = BranchName::for_ticket(&t);

        let state = State::CheckingRepository
            .on(Event::RepositoryFound(repo()))
            .on(Event::ConfigurationPresent)
            .on(Event::TicketsFetched(vec![t.clone()]))
            .on(Event::TicketPicked(t.clone()))
            .on(Event::BranchCreated(branch.clone()));

        assert_eq!(
            state,
            State::Finished(Outcome::BranchCreated { branch, ticket: t })
        );
    }

    #[test]
    fn missing_repository_terminates() {
        let state = State::CheckingRepository.on(Event::RepositoryMissing);
        assert_eq!(state, State::Finished(Outcome::NoRepository));
    }

    #[test]
    fn declined_configuration_cancels_silently() {
        let state = State::CheckingRepository
            .on(Event::RepositoryFound(repo()))
            .on(Event::ConfigurationCancelled);
        assert_eq!(state, State::Finished(Outcome::Cancelled));
    }

    #[test]
    fn fresh_configuration_proceeds_to_fetch() {
        let state = State::CheckingRepository
            .on(Event::RepositoryFound(repo()))
            .on(Event::ConfigurationSaved);
        assert_eq!(state, State::FetchingTickets { repo: repo() });
    }

    #[test]
    fn empty_ticket_list_is_a_terminal_info_not_an_error() {
        let state = State::FetchingTickets { repo: repo() }.on(Event::TicketsFetched(Vec::new()));
        assert_eq!(state, State::Finished(Outcome::NoTickets));
    }

    #[test]
    fn fetch_failure_carries_the_message() {
        let state = State::FetchingTickets { repo: repo() }
            .on(Event::FetchFailed("boom".to_string()));
        assert_eq!(
            state,
            State::Finished(Outcome::FetchFailed("boom".to_string()))
        );
    }

    #[test]
    fn selection_cancel_is_silent() {
        let state = State::SelectingTicket {
            repo: repo(),
            tickets: vec![ticket(1, "1", "t")],
        }
        .on(Event::SelectionCancelled);
        assert_eq!(state, State::Finished(Outcome::Cancelled));
    }

    #[test]
    fn unknown_current_branch_terminates() {
        let state = State::CreatingBranch {
            repo: repo(),
            ticket: ticket(1, "1", "t"),
        }
        .on(Event::CurrentBranchUnknown);
        assert_eq!(state, State::Finished(Outcome::NoCurrentBranch));
    }

    #[test]
    fn stray_event_does_not_move_the_machine() {
        let state = State::CheckingRepository.on(Event::SelectionCancelled);
        assert_eq!(state, State::CheckingRepository);
    }
}
