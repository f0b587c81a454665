//! Workloads for exercising the resource limits of a Spin host.
//!
//! Each workload is a request-scoped computation that a Spin HTTP component
//! forwards to: a recursive Fibonacci (CPU), a word count over fetched text
//! (memory and outbound IO), an Argon2 password hash (CPU and memory with
//! caller-controlled cost) and a constant greeting as the baseline. Only the
//! optional `spin` module, compiled for wasm32 with the `spin` feature,
//! touches the Spin SDK, so the semantics build and test on the native target.

#![deny(missing_docs)]

pub mod bacon;
mod error;
pub mod fibonacci;
pub mod greeting;
pub mod hasher;
pub mod path_info;
pub mod response;
#[cfg(all(feature = "spin", target_arch = "wasm32"))]
pub mod spin;
pub mod telemetry;
pub mod upstream;

pub use error::{Error, Result};
pub use upstream::{TextSource, Upstream};
