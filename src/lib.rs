#![warn(missing_docs)]
//! # Gotify-Push
//! A library and command line client that pushes a single message to a [Gotify] server.
//!
//!
//! ## Example
//! Resolve the push parameters against a [`Configuration`] and deliver them with [`push`].
//!
//! ```
//! use gotify_push::{push, read_config, Error, PushArgs};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let config = read_config(&["cli.json"]);
//!     let args = PushArgs { args: vec!["Backup finished".to_string()], priority: Some(5), ..Default::default() };
//!
//!     let request = args.resolve("", &config)?;
//!     let created = push(&request).await?;
//!     println!("message {} created", created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! [Gotify]: https://gotify.net

#[cfg(feature = "client")]
mod client;
mod configuration;
mod error;
pub mod notifications;
mod resolve;

#[cfg(feature = "client")]
pub use self::client::{create_message, message_endpoint, push};
pub use self::configuration::{Configuration, default_locations, read_config};
pub use self::error::Error;
pub use self::resolve::{
    PushArgs, PushRequest, read_from, read_stdin, resolve_layered, resolve_message_text, resolve_priority, resolve_token,
    resolve_url, unescape,
};

/// Logging target value used for the library.
pub const LIB_LOG_TARGET: &str = "gotify_push";
