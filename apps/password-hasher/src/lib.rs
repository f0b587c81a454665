//! `GET /?password=..&cpu=..&mem=..&sleep=..` answers the Argon2id PHC string
//! of the password, hashed at the requested cost.

#![cfg(target_arch = "wasm32")]

use spin_sdk::http::{Request, Response};
use spin_sdk::http_component;
use spin_workloads::{hasher, response, spin, telemetry};

/// A Spin HTTP component that hashes passwords.
#[http_component]
fn handle_password_hash(req: Request) -> Response {
    telemetry::init();
    let result = hasher::HashOptions::from_query(req.query())
        .and_then(|options| hasher::hash_password(&options));
    spin::into_response(response::from_result(result))
}
