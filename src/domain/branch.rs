use std::fmt;

use crate::domain::ticket::Ticket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `feature/<id>-<sanitized title>`.
    ///
    /// Recomputed on demand; never persisted or cached.
    pub fn for_ticket(ticket: &Ticket) -> Self {
        Self(format!("feature/{}-{}", ticket.id, sanitize(&ticket.title)))
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps every character outside `[A-Za-z0-9-]` to a hyphen, then lowercases.
/// Deliberately naive: hyphen runs are kept one-for-one, nothing is trimmed
/// and nothing is capped.
fn sanitize(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::test_support::ticket;

    #[test]
    fn sanitizes_ticket_title() {
        let name = BranchName::for_ticket(&ticket(42, "1023", "Fix Login Bug!!"));
        assert_eq!(name.as_str(), "feature/42-fix-login-bug--");
    }

    #[test]
    fn keeps_hyphen_runs_one_for_one() {
        let name = BranchName::for_ticket(&ticket(9, "1024", "a?!b"));
        assert_eq!(name.as_str(), "feature/9-a--b");
    }

    #[test]
    fn accepts_empty_title() {
        let name = BranchName::for_ticket(&ticket(7, "1025", ""));
        assert_eq!(name.as_str(), "feature/7-");
    }

    #[test]
    fn accepts_all_symbol_title() {
        let name = BranchName::for_ticket(&ticket(7, "1026", "???"));
        assert_eq!(name.as_str(), "feature/7----");
    }

    #[test]
    fn name_has_prefix_and_restricted_charset() {
        let tickets = [
            ticket(1, "1", "Support UTF-8 Ümlauts"),
            ticket(250, "2", "  leading / trailing  "),
            ticket(3, "3", "already-sanitized-title"),
        ];
        for t in &tickets {
            let name = BranchName::for_ticket(t);
            let prefix = format!("feature/{}-", t.id);
            assert!(name.as_str().starts_with(&prefix));
            let rest = &name.as_str()[prefix.len()..];
            assert!(
                rest.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in {rest:?}"
            );
        }
    }

    #[test]
    fn sanitize_is_idempotent() {
        for input in ["Fix Login Bug!!", "ümlaut", "", "---", "MiXeD 123"] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }
}
