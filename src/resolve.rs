//! Resolution of the effective push parameters from flags, arguments, stdin and configuration.

use crate::configuration::Configuration;
use crate::notifications::Message;
use crate::{Error, LIB_LOG_TARGET};
use std::io::{IsTerminal, Read};
use tracing::debug;
use url::Url;

/// Raw inputs of a push invocation as given on the command line.
#[derive(Debug, Default, Clone)]
pub struct PushArgs {
    /// Positional message words.
    pub args: Vec<String>,
    /// Message title, empty for the application name.
    pub title: String,
    /// Priority, `None` when the flag was not given.
    pub priority: Option<i64>,
    /// Token override.
    pub token: String,
    /// Server url override.
    pub url: String,
    /// Do not report success.
    pub quiet: bool,
    /// Content type display extra.
    pub content_type: String,
    /// Click url notification extra.
    pub click_url: String,
    /// Keep literal `\n` and `\t` in the message text.
    pub disable_unescape: bool,
}

/// Fully resolved request, ready to be delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct PushRequest {
    /// Server base url.
    pub url: Url,
    /// Application token.
    pub token: String,
    /// Message body.
    pub message: Message,
    /// Do not report success.
    pub quiet: bool,
}

impl PushArgs {
    /// Resolve every parameter against `stdin` and the loaded `config`.
    ///
    /// Nothing is sent; any error here happens before contacting the server.
    pub fn resolve(self, stdin: &str, config: &Result<Configuration, Error>) -> Result<PushRequest, Error> {
        let text = resolve_message_text(&self.args, stdin)?;
        let text = match self.disable_unescape {
            true => text,
            false => unescape(&text),
        };

        let token = resolve_token(&self.token, config)?;
        let url = resolve_url(&self.url, config)?;
        let priority = resolve_priority(self.priority, config);
        debug!(target: LIB_LOG_TARGET, "Resolved url: {} priority: {}", url, priority);

        let message = Message::new(text.as_str(), self.title.as_str(), priority)
            .with_content_type(&self.content_type)
            .with_click_url(&self.click_url);

        Ok(PushRequest { url, token, message, quiet: self.quiet })
    }
}

/// Pick the message text out of the positional arguments and stdin, exactly one must be non-empty.
pub fn resolve_message_text<S: AsRef<str>>(args: &[S], stdin: &str) -> Result<String, Error> {
    let from_args = args.iter().map(|a| a.as_ref()).collect::<Vec<_>>().join(" ");

    match (from_args.is_empty(), stdin.is_empty()) {
        (true, true) => Err(Error::MissingMessage),
        (false, false) => Err(Error::ConflictingMessageSource),
        (true, false) => Ok(stdin.to_string()),
        (false, true) => Ok(from_args),
    }
}

/// Replace literal `\n` and `\t` sequences with newline and tab.
pub fn unescape(text: &str) -> String {
    text.replace("\\n", "\n").replace("\\t", "\t")
}

/// Read all of stdin. An interactive terminal counts as empty input.
pub fn read_stdin() -> Result<String, Error> {
    let stdin = std::io::stdin();
    match stdin.is_terminal() {
        true => Ok(String::new()),
        false => read_from(stdin.lock()),
    }
}

/// Read `reader` to the end, replacing invalid UTF-8 with the replacement character.
pub fn read_from<R: Read>(mut reader: R) -> Result<String, Error> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Return `value` when it is set, otherwise `fallback`, otherwise the `missing` error.
pub fn resolve_layered<T>(value: Option<T>, fallback: Option<T>, missing: Error) -> Result<T, Error> {
    value.or(fallback).ok_or(missing)
}

/// Resolve the token from a non-empty override or the configuration.
pub fn resolve_token(token: &str, config: &Result<Configuration, Error>) -> Result<String, Error> {
    let configured = config.as_ref().ok().map(|c| c.token().to_string());
    resolve_layered(non_empty(token), configured, Error::MissingToken)
}

/// Resolve the server url from a non-empty override or the configuration and parse it.
pub fn resolve_url(url: &str, config: &Result<Configuration, Error>) -> Result<Url, Error> {
    let configured = config.as_ref().ok().map(|c| c.url().to_string());
    let url = resolve_layered(non_empty(url), configured, Error::MissingUrl)?;
    parse_url(&url)
}

/// Resolve the priority from an explicitly set flag, the configured default, or zero.
pub fn resolve_priority(priority: Option<i64>, config: &Result<Configuration, Error>) -> i64 {
    priority.or_else(|| config.as_ref().ok().map(|c| c.default_priority())).unwrap_or_default()
}

fn parse_url(url: &str) -> Result<Url, Error> {
    match Url::parse(url) {
        Ok(parsed) if !parsed.cannot_be_a_base() => Ok(parsed),
        _ => Err(Error::InvalidUrl(url.to_string())),
    }
}

fn non_empty(value: &str) -> Option<String> {
    match value.is_empty() {
        true => None,
        false => Some(value.to_string()),
    }
}
