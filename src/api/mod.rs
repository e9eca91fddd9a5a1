//! Event feed client
//!
//! The feed is a single JSON document. The hosted endpoint wraps the list as
//! `{"events": [...]}`; a bare array is accepted too. An object without an
//! `events` array is logged and read as an empty feed.

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::models::{Event, EventId};

/// Endpoint the original event list is served from
pub const DEFAULT_FEED_URL: &str = "https://stud.hosted.hr.nl/1052755/events.json";

/// Pull the event list out of a feed document
fn parse_feed(body: Value) -> Result<Vec<Event>> {
    let list = match body {
        Value::Array(_) => body,
        Value::Object(mut map) => match map.remove("events") {
            Some(events @ Value::Array(_)) => events,
            _ => {
                tracing::warn!("Event feed has no events array");
                return Ok(Vec::new());
            }
        },
        other => anyhow::bail!("Unexpected event feed document: {other}"),
    };

    serde_json::from_value(list).context("Invalid event in feed")
}

/// HTTP client for the event feed
pub struct FeedClient {
    client: Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("eventmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Feed URL this client reads from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current list of events
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch events")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Event feed error {status}: {body}");
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse event feed")?;

        let events = parse_feed(body)?;
        if events.is_empty() {
            tracing::warn!("Event feed at {} returned no events", self.url);
        } else {
            tracing::debug!("Fetched {} events", events.len());
        }

        Ok(events)
    }
}

/// Find an event by id in a fetched list
pub fn find_event<'a>(events: &'a [Event], id: &EventId) -> Option<&'a Event> {
    events.iter().find(|e| &e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const WRAPPED: &str = r#"{"events":[
        {"id":1,"title":"Markthal tour","description":"Guided","latitude":51.92,"longitude":4.49},
        {"id":2,"title":"Jazz","description":"Live","latitude":51.91,"longitude":4.47}
    ]}"#;

    async fn serve(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events.json"))
            .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
            .mount(&server)
            .await;
        server
    }

    fn client(server: &MockServer) -> FeedClient {
        FeedClient::new(
            &format!("{}/events.json", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_wrapped_feed() {
        let server = serve(200, WRAPPED).await;
        let events = client(&server).fetch_events().await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Markthal tour");
        assert_eq!(
            find_event(&events, &EventId::from(2)).map(|e| e.title.as_str()),
            Some("Jazz")
        );
        assert!(find_event(&events, &EventId::from(3)).is_none());
    }

    #[tokio::test]
    async fn test_bare_array_feed() {
        let server = serve(
            200,
            r#"[{"id":"a","title":"A","description":"d","latitude":0,"longitude":0}]"#,
        )
        .await;
        let events = client(&server).fetch_events().await.unwrap();
        assert_eq!(events[0].id, EventId::from("a"));
    }

    #[tokio::test]
    async fn test_empty_feed_is_ok() {
        let server = serve(200, r#"{"events":[]}"#).await;
        assert!(client(&server).fetch_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = serve(500, "boom").await;
        let err = client(&server).fetch_events().await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_missing_events_array_is_empty() {
        let server = serve(200, r#"{"items":[]}"#).await;
        assert!(client(&server).fetch_events().await.unwrap().is_empty());

        let server = serve(200, r#"{"events":"soon"}"#).await;
        assert!(client(&server).fetch_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_event_record_is_an_error() {
        let server = serve(200, r#"{"events":[{"id":1,"title":"no coords"}]}"#).await;
        assert!(client(&server).fetch_events().await.is_err());
    }

    #[tokio::test]
    async fn test_scalar_document_is_an_error() {
        let server = serve(200, r#""events""#).await;
        assert!(client(&server).fetch_events().await.is_err());

        let server = serve(200, "not json").await;
        assert!(client(&server).fetch_events().await.is_err());
    }

    #[tokio::test]
    async fn test_fractional_ids_in_feed() {
        let server = serve(
            200,
            r#"{"events":[{"id":2.5,"title":"A","description":"d","latitude":0,"longitude":0}]}"#,
        )
        .await;
        let events = client(&server).fetch_events().await.unwrap();
        assert_eq!(events[0].id, "2.5".parse::<EventId>().unwrap());
    }
}
