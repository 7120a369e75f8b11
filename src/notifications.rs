//! Representation of the messages pushed to the server.

use crate::Error;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Value, json};

/// Extras key for client display metadata.
pub const CLIENT_DISPLAY: &str = "client::display";
/// Extras key for client notification metadata.
pub const CLIENT_NOTIFICATION: &str = "client::notification";

/// The message body sent to the create message endpoint.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Message {
    message: String,
    title: String,
    priority: i64,
    extras: Extras,
}

/// Optional metadata attached to a [`Message`] that changes how clients present it.
#[derive(Debug, PartialEq, Clone)]
pub enum Extra {
    /// Rendering hint for the message text, e.g. `text/markdown`.
    Display {
        /// Content type of the message text.
        content_type: String,
    },
    /// Url opened when the notification is clicked.
    Notification {
        /// Url to open.
        click_url: String,
    },
    /// Any other extension, passed to the server as is.
    Other {
        /// Extras key, conventionally `<top-level-namespace>::[<sub-namespace>::]<action>`.
        key: String,
        /// Arbitrary JSON value.
        value: Value,
    },
}

/// Collection of [`Extra`] values, serialized as a JSON object keyed by [`Extra::key`].
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Extras {
    entries: Vec<Extra>,
}

/// Message as returned by the server after it was created.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CreatedMessage {
    /// Server assigned message id.
    #[serde(default)]
    pub id: u64,
    /// Id of the application the token belongs to.
    #[serde(default)]
    pub appid: u64,
    /// Message text as stored by the server.
    #[serde(default)]
    pub message: String,
    /// Title as stored by the server.
    #[serde(default)]
    pub title: String,
    /// Priority as stored by the server.
    #[serde(default)]
    pub priority: i64,
    /// Creation timestamp.
    #[serde(default)]
    pub date: String,
}

impl Message {
    /// Create a new `Message` without extras. An empty title makes the server use the application name.
    pub fn new<S: AsRef<str>>(text: S, title: S, priority: i64) -> Message {
        Self {
            message: text.as_ref().into(),
            title: title.as_ref().into(),
            priority,
            extras: Extras::default(),
        }
    }

    /// Set the content type display extra, ignored when `content_type` is empty.
    pub fn with_content_type<S: AsRef<str>>(self, content_type: S) -> Message {
        match content_type.as_ref() {
            "" => self,
            content_type => self.with_extra(Extra::display(content_type)),
        }
    }

    /// Set the click url notification extra, ignored when `click_url` is empty.
    pub fn with_click_url<S: AsRef<str>>(self, click_url: S) -> Message {
        match click_url.as_ref() {
            "" => self,
            click_url => self.with_extra(Extra::notification(click_url)),
        }
    }

    /// Add an [`Extra`], replacing any existing one with the same key.
    pub fn with_extra(mut self, extra: Extra) -> Message {
        self.extras.insert(extra);
        self
    }

    /// Return the message text.
    pub fn text(&self) -> &str {
        &self.message
    }

    /// Return the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Return the priority.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Return attached extras.
    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Serialize `Message` to JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Extra {
    /// Create a [`Extra::Display`].
    pub fn display<S: AsRef<str>>(content_type: S) -> Extra {
        Extra::Display { content_type: content_type.as_ref().into() }
    }

    /// Create a [`Extra::Notification`].
    pub fn notification<S: AsRef<str>>(click_url: S) -> Extra {
        Extra::Notification { click_url: click_url.as_ref().into() }
    }

    /// Create a [`Extra::Other`].
    pub fn other<S: AsRef<str>>(key: S, value: Value) -> Extra {
        Extra::Other { key: key.as_ref().into(), value }
    }

    /// Return the extras key this value is stored under.
    pub fn key(&self) -> &str {
        match self {
            Extra::Display { .. } => CLIENT_DISPLAY,
            Extra::Notification { .. } => CLIENT_NOTIFICATION,
            Extra::Other { key, .. } => key,
        }
    }

    /// Return the JSON value stored under [`Extra::key`].
    pub fn value(&self) -> Value {
        match self {
            Extra::Display { content_type } => json!({ "contentType": content_type }),
            Extra::Notification { click_url } => json!({ "click": { "url": click_url } }),
            Extra::Other { value, .. } => value.clone(),
        }
    }
}

impl Extras {
    /// Insert an [`Extra`], replacing any existing one with the same key.
    pub fn insert(&mut self, extra: Extra) {
        match self.entries.iter_mut().find(|e| e.key() == extra.key()) {
            Some(existing) => *existing = extra,
            None => self.entries.push(extra),
        }
    }

    /// Return the [`Extra`] stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Extra> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Return true if no extras are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the number of extras.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for Extras {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for extra in &self.entries {
            map.serialize_entry(extra.key(), &extra.value())?;
        }
        map.end()
    }
}
