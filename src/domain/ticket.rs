use std::fmt;

use serde::Deserialize;

/// A ticket as returned by the Zammad search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    pub number: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Ticket {
    /// `id` and `number` are required; a record missing either is a
    /// malformed response, not a valid ticket.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.id == 0 {
            return Err(format!("ticket #{} has a non-positive id", self.number));
        }
        if self.number.is_empty() {
            return Err(format!("ticket {} has an empty number", self.id));
        }
        Ok(())
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.number, self.title)
    }
}

/// The authenticated Zammad user, from `api/v1/users/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("{} {}", self.firstname, self.lastname);
        let name = name.trim();
        if name.is_empty() {
            write!(f, "{} ({})", self.login, self.email)
        } else {
            write!(f, "{} ({})", name, self.email)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Ticket;

    pub(crate) fn ticket(id: u64, number: &str, title: &str) -> Ticket {
        Ticket {
            id,
            title: title.to_string(),
            number: number.to_string(),
            state: "open".to_string(),
            priority: "2 normal".to_string(),
            group: "Users".to_string(),
            customer: "customer@example.com".to_string(),
            created_at: "2024-05-01T09:00:00Z".to_string(),
            updated_at: "2024-05-02T10:00:00Z".to_string(),
        }
    }
}
