use crate::notifications::{CreatedMessage, Message};
use crate::resolve::PushRequest;
use crate::{Error, LIB_LOG_TARGET};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, trace, warn};
use url::Url;

const MESSAGE_PATH: &str = "message";

/// Error body returned by the server for a rejected request.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: String,
    #[serde(default, rename = "errorCode")]
    error_code: u16,
    #[serde(default, rename = "errorDescription")]
    error_description: String,
}

/// Deliver a resolved [`PushRequest`] with a single create message request.
pub async fn push(request: &PushRequest) -> Result<CreatedMessage, Error> {
    create_message(&request.url, &request.token, &request.message).await
}

/// Create `message` on the server at `base_url`, authenticated with the application `token`.
pub async fn create_message(base_url: &Url, token: &str, message: &Message) -> Result<CreatedMessage, Error> {
    let endpoint = message_endpoint(base_url)?;
    let client = Client::builder().use_rustls_tls().build()?;
    trace!(target: LIB_LOG_TARGET, "Create message payload: {}", message.to_json()?);

    let response = client.post(endpoint).bearer_auth(token).json(message).send().await?;
    debug!(target: LIB_LOG_TARGET, "Create message response - status: {} url: {}", response.status(), response.url());

    if !response.status().is_success() {
        return Err(delivery_error(response).await);
    }

    let body = response.text().await?;
    match serde_json::from_str(&body) {
        Ok(created) => Ok(created),
        Err(error) => {
            warn!(target: LIB_LOG_TARGET, "Unable to parse create message response: {}", error);
            Ok(CreatedMessage::from(message))
        }
    }
}

/// Url of the create message endpoint below `base_url`, keeping any sub path the server is hosted on.
pub fn message_endpoint(base_url: &Url) -> Result<Url, Error> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(MESSAGE_PATH).map_err(|_| Error::InvalidUrl(base_url.to_string()))
}

async fn delivery_error(response: Response) -> Error {
    let status = response.status();
    let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
    let description = match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error_description.is_empty() => {
            debug!(target: LIB_LOG_TARGET, "Server error: {} ({})", body.error, body.error_code);
            format!("{}: {}", body.error, body.error_description)
        }
        _ => reason,
    };
    Error::Delivery { status: status.as_u16(), description }
}

impl From<&Message> for CreatedMessage {
    fn from(value: &Message) -> Self {
        Self {
            id: 0,
            appid: 0,
            message: value.text().to_string(),
            title: value.title().to_string(),
            priority: value.priority(),
            date: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::message_endpoint;
    use url::Url;

    #[test]
    fn endpoint_at_root() {
        let url = Url::parse("https://push.example.com").unwrap();
        assert_eq!(message_endpoint(&url).unwrap().as_str(), "https://push.example.com/message");
    }

    #[test]
    fn endpoint_keeps_sub_path() {
        let url = Url::parse("https://example.com/gotify").unwrap();
        assert_eq!(message_endpoint(&url).unwrap().as_str(), "https://example.com/gotify/message");

        let url = Url::parse("https://example.com/gotify/").unwrap();
        assert_eq!(message_endpoint(&url).unwrap().as_str(), "https://example.com/gotify/message");
    }

    #[test]
    fn endpoint_drops_query() {
        let url = Url::parse("http://localhost:8080/?a=b").unwrap();
        assert_eq!(message_endpoint(&url).unwrap().as_str(), "http://localhost:8080/message");
    }
}
