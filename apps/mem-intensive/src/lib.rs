//! `GET /<paragraphs>` fetches that many paragraphs of bacon ipsum and
//! answers how often the word "bacon" occurs in them.

#![cfg(target_arch = "wasm32")]

use spin_sdk::http::{Request, Response};
use spin_sdk::http_component;
use spin_workloads::{bacon, response, spin, telemetry, Result, Upstream};

/// A Spin HTTP component that fills memory with fetched text.
#[http_component]
async fn handle_bacon_count(req: Request) -> Response {
    telemetry::init();
    spin::into_response(response::from_result(count(&req).await))
}

async fn count(req: &Request) -> Result<String> {
    let upstream = Upstream::from_variables(spin::variable)?;
    let report = bacon::run(spin::path_info(req), &upstream, &spin::OutboundHttp).await?;
    Ok(report.render())
}
