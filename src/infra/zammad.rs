use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::Credentials;
use crate::domain::ticket::{Ticket, User};
use crate::error::{AppError, AppResult};
use crate::services::TicketSource;

const SEARCH_PATH: &str = "api/v1/tickets/search";
const CURRENT_USER_PATH: &str = "api/v1/users/me";
/// Zammad state identifier for open tickets. Not user-configurable.
const OPEN_TICKETS_QUERY: &str = "state_id:4";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable Zammad API client built from a credential snapshot.
///
/// Construction is pure apart from TLS setup: it fails with `NotConfigured`
/// before any network activity when either credential is missing. A
/// reconfiguration is honored by building a new client, never by mutating
/// an existing one.
pub struct ZammadClient {
    http: Client,
    base_url: String,
}

impl ZammadClient {
    pub fn new(credentials: &Credentials) -> AppResult<Self> {
        if !credentials.is_configured() {
            return Err(AppError::NotConfigured);
        }

        let mut auth = HeaderValue::from_str(&format!("Token token={}", credentials.api_token))
            .map_err(|_| {
                AppError::Configuration(
                    "the API token contains characters that cannot be sent in a header"
                        .to_string(),
                )
            })?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .connect_timeout(REQUEST_TIMEOUT)
            .read_timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: credentials.base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl TicketSource for ZammadClient {
    async fn fetch_open_tickets(&self) -> AppResult<Vec<Ticket>> {
        let url = self.endpoint(SEARCH_PATH);
        debug!(%url, query = OPEN_TICKETS_QUERY, "requesting open tickets");

        let response = self
            .http
            .get(&url)
            .query(&[("query", OPEN_TICKETS_QUERY)])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body = %body, "ticket search response");

        decode_tickets(status, &body)
    }

    async fn fetch_current_user(&self) -> AppResult<User> {
        let url = self.endpoint(CURRENT_USER_PATH);
        debug!(%url, "requesting current user");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body = %body, "current user response");

        if !status.is_success() {
            return Err(AppError::Remote { status, body });
        }
        serde_json::from_str(&body).map_err(|err| AppError::MalformedResponse(err.to_string()))
    }
}

/// Maps the raw search response to the error taxonomy: non-2xx carries the
/// body verbatim, a blank 2xx body is zero tickets, anything unparseable or
/// invariant-violating is a malformed response.
fn decode_tickets(status: StatusCode, body: &str) -> AppResult<Vec<Ticket>> {
    if !status.is_success() {
        return Err(AppError::Remote {
            status,
            body: body.to_string(),
        });
    }
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tickets: Vec<Ticket> = serde_json::from_str(body)
        .map_err(|err| AppError::MalformedResponse(err.to_string()))?;
    for ticket in &tickets {
        ticket.validate().map_err(AppError::MalformedResponse)?;
    }
    Ok(tickets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Credentials {
        Credentials {
            base_url: "https://support.example.com/".to_string(),
            api_token: "abc123".to_string(),
        }
    }

    #[test]
    fn building_without_credentials_fails_before_any_request() {
        let missing_token = Credentials {
            base_url: "https://support.example.com/".to_string(),
            api_token: String::new(),
        };
        assert!(matches!(
            ZammadClient::new(&missing_token),
            Err(AppError::NotConfigured)
        ));

        let missing_url = Credentials {
            base_url: String::new(),
            api_token: "abc123".to_string(),
        };
        assert!(matches!(
            ZammadClient::new(&missing_url),
            Err(AppError::NotConfigured)
        ));
    }

    #[test]
    fn endpoint_joins_with_and_without_trailing_slash() {
        let client = ZammadClient::new(&configured()).unwrap();
        assert_eq!(
            client.endpoint(SEARCH_PATH),
            "https://support.example.com/api/v1/tickets/search"
        );

        let bare = ZammadClient::new(&Credentials {
            base_url: "https://support.example.com".to_string(),
            api_token: "abc123".to_string(),
        })
        .unwrap();
        assert_eq!(
            bare.endpoint(SEARCH_PATH),
            "https://support.example.com/api/v1/tickets/search"
        );
    }

    #[test]
    fn non_success_response_carries_body_verbatim() {
        let err = decode_tickets(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
            .unwrap_err();
        match &err {
            AppError::Remote { status, body } => {
                assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
        assert!(err.to_string().contains("upstream exploded"));
    }

    #[test]
    fn blank_success_body_is_zero_tickets() {
        assert!(decode_tickets(StatusCode::OK, "").unwrap().is_empty());
        assert!(decode_tickets(StatusCode::OK, "  \n").unwrap().is_empty());
    }

    #[test]
    fn empty_array_is_zero_tickets() {
        assert!(decode_tickets(StatusCode::OK, "[]").unwrap().is_empty());
    }

    #[test]
    fn parses_ticket_array() {
        let body = r#"[{
            "id": 42,
            "title": "Fix Login Bug!!",
            "number": "1023",
            "state": "open",
            "priority": "2 normal",
            "group": "Users",
            "customer": "jane@example.com",
            "created_at": "2024-05-01T09:00:00Z",
            "updated_at": "2024-05-02T10:00:00Z"
        }]"#;
        let tickets = decode_tickets(StatusCode::OK, body).unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, 42);
        assert_eq!(tickets[0].number, "1023");
    }

    #[test]
    fn unparseable_success_body_is_malformed() {
        assert!(matches!(
            decode_tickets(StatusCode::OK, "not json"),
            Err(AppError::MalformedResponse(_))
        ));
    }

    #[test]
    fn invariant_violating_record_is_malformed() {
        let body = r#"[{"id": 42, "title": "ok", "number": ""}]"#;
        assert!(matches!(
            decode_tickets(StatusCode::OK, body),
            Err(AppError::MalformedResponse(_))
        ));
    }
}
