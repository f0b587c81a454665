//! Glue between the Spin guest interfaces and the workloads.

use async_trait::async_trait;
use spin_sdk::http::{IncomingResponse, Method, Request, Response};
use url::Url;

use crate::{path_info::PATH_INFO_HEADER, Error, Result, TextSource};

/// The path info of an inbound request, relative to the component route.
pub fn path_info(req: &Request) -> &str {
    req.header(PATH_INFO_HEADER)
        .and_then(|value| value.as_str())
        .unwrap_or_else(|| req.path())
}

/// Reads a Spin variable.
///
/// An undefined variable is absent. Any other failure, such as an
/// unreachable provider, is a configuration error.
pub fn variable(name: &str) -> Result<Option<String>> {
    match spin_sdk::variables::get(name) {
        Ok(value) => Ok(Some(value)),
        Err(spin_sdk::variables::Error::Undefined(reason)) => {
            tracing::debug!(name, %reason, "variable is undefined");
            Ok(None)
        }
        Err(err) => Err(Error::invalid_variable(name, format!("{err:?}"))),
    }
}

/// Converts a workload response into a Spin response.
pub fn into_response(res: http::Response<String>) -> Response {
    let (parts, body) = res.into_parts();
    let mut builder = Response::builder();
    builder.status(parts.status.as_u16());
    for (name, value) in &parts.headers {
        if let Ok(value) = value.to_str() {
            builder.header(name.as_str(), value);
        }
    }
    builder.body(body).build()
}

/// Fetches text through the host's outbound HTTP interface.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutboundHttp;

#[async_trait(?Send)]
impl TextSource for OutboundHttp {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let request = Request::builder()
            .method(Method::Get)
            .uri(url.as_str())
            .build();

        let response: IncomingResponse =
            spin_sdk::http::send(request)
                .await
                .map_err(|e| Error::Transport {
                    url: url.clone(),
                    source: anyhow::anyhow!("{e}"),
                })?;

        let status = response.status();
        if !(200..300).contains(&status) {
            tracing::warn!(%url, status, "upstream answered with a non-success status");
        }

        let body = response.into_body().await.map_err(|e| Error::Body {
            url: url.clone(),
            source: anyhow::anyhow!("{e}"),
        })?;

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
