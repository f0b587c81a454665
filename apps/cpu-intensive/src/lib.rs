//! `GET /<n>` answers `fib(<n>) = <value>`, computed the slow way.

#![cfg(target_arch = "wasm32")]

use spin_sdk::http::{Request, Response};
use spin_sdk::http_component;
use spin_workloads::{fibonacci, response, spin, telemetry};

/// A Spin HTTP component that keeps a CPU busy.
#[http_component]
fn handle_fibonacci(req: Request) -> Response {
    telemetry::init();
    let body = fibonacci::run(spin::path_info(&req));
    spin::into_response(response::text(body))
}
