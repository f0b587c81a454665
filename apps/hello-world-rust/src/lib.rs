//! `GET /...` answers `Hello <instance>`, doing no work beyond routing.

#![cfg(target_arch = "wasm32")]

use spin_sdk::http::{Request, Response};
use spin_sdk::http_component;
use spin_workloads::{greeting, response, spin, telemetry};

/// A Spin HTTP component that only answers.
#[http_component]
fn handle_hello(_req: Request) -> Response {
    telemetry::init();
    spin::into_response(response::from_result(greeting::run(spin::variable)))
}
