//! The external text service the bacon counter reads from.

use async_trait::async_trait;
use url::Url;

use crate::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://baconipsum.com/api/";
const DEFAULT_MEAT_TYPE: &str = "all-meat";

/// The most paragraphs the upstream returns for a single call.
pub const MAX_PARAGRAPHS_PER_CALL: u32 = 100;

/// Variable holding the upstream API URL.
pub const BASE_URL_VARIABLE: &str = "bacon_api_url";
/// Variable holding the upstream text type (`all-meat` or `meat-and-filler`).
pub const MEAT_TYPE_VARIABLE: &str = "bacon_meat_type";
/// Variable selecting whether the text starts with "Bacon ipsum dolor amet".
pub const START_WITH_LOREM_VARIABLE: &str = "bacon_start_with_lorem";
/// Variable holding the number of paragraphs requested per call.
pub const PARAGRAPHS_PER_CALL_VARIABLE: &str = "bacon_paragraphs_per_call";

/// Fetches raw text from a URL.
///
/// Spin components implement this over outbound HTTP. The futures are not
/// `Send` because guest executors are single-threaded.
#[async_trait(?Send)]
pub trait TextSource {
    /// Issues one GET request and returns the response body as text.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Where and how the bacon counter requests its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    base_url: Url,
    meat_type: String,
    start_with_lorem: bool,
    paragraphs_per_call: u32,
}

impl Upstream {
    /// The public bacon ipsum API with its default query.
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            meat_type: DEFAULT_MEAT_TYPE.to_string(),
            start_with_lorem: true,
            paragraphs_per_call: MAX_PARAGRAPHS_PER_CALL,
        })
    }

    /// Builds the upstream configuration from variable values.
    ///
    /// `lookup` returns `Ok(None)` for variables without a value, which keep
    /// their default. Lookup failures are returned as they are.
    pub fn from_variables(lookup: impl Fn(&str) -> Result<Option<String>>) -> Result<Self> {
        let mut upstream = Self::new()?;

        if let Some(value) = lookup(BASE_URL_VARIABLE)? {
            upstream.base_url = parse_base_url(&value)?;
        }

        if let Some(value) = lookup(MEAT_TYPE_VARIABLE)? {
            let value = value.trim();
            if value.is_empty() {
                return Err(Error::invalid_variable(MEAT_TYPE_VARIABLE, "value is empty"));
            }
            upstream.meat_type = value.to_string();
        }

        if let Some(value) = lookup(START_WITH_LOREM_VARIABLE)? {
            upstream.start_with_lorem = match value.trim() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(Error::invalid_variable(
                        START_WITH_LOREM_VARIABLE,
                        format!("expected a boolean, got '{other}'"),
                    ))
                }
            };
        }

        if let Some(value) = lookup(PARAGRAPHS_PER_CALL_VARIABLE)? {
            let count: u32 = value
                .trim()
                .parse()
                .map_err(|e| Error::invalid_variable(PARAGRAPHS_PER_CALL_VARIABLE, e))?;
            if count == 0 || count > MAX_PARAGRAPHS_PER_CALL {
                return Err(Error::invalid_variable(
                    PARAGRAPHS_PER_CALL_VARIABLE,
                    format!("must be between 1 and {MAX_PARAGRAPHS_PER_CALL}"),
                ));
            }
            upstream.paragraphs_per_call = count;
        }

        Ok(upstream)
    }

    /// Sets the base URL of the text API.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// The number of paragraphs each call requests.
    pub fn paragraphs_per_call(&self) -> u32 {
        self.paragraphs_per_call
    }

    /// The URL requested for every chunk.
    pub fn chunk_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("type", &self.meat_type)
            .append_pair("paras", &self.paragraphs_per_call.to_string())
            .append_pair(
                "start-with-lorem",
                if self.start_with_lorem { "1" } else { "0" },
            )
            .append_pair("format", "text");
        url
    }
}

fn parse_base_url(value: &str) -> Result<Url> {
    let url =
        Url::parse(value.trim()).map_err(|e| Error::invalid_variable(BASE_URL_VARIABLE, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_variable(
            BASE_URL_VARIABLE,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}
