//! The CPU-bound workload.

use crate::path_info;

/// The index computed when the request does not name one.
pub const DEFAULT_N: i64 = 42;

/// Computes the `n`th Fibonacci number by unmemoized recursion.
///
/// The exponential running time is the point of the workload. Negative
/// indices are returned unchanged and overflow wraps.
pub fn fib(n: i64) -> i64 {
    if n < 2 {
        return n;
    }
    fib(n - 2).wrapping_add(fib(n - 1))
}

/// The index requested by a path info, [`DEFAULT_N`] when absent or malformed.
pub fn parse_n(path_info: &str) -> i64 {
    path_info::param_or(path_info, DEFAULT_N)
}

/// Runs the workload for a request's path info and renders the response body.
pub fn run(path_info: &str) -> String {
    let n = parse_n(path_info);
    tracing::info!("Calculating fib({n})");
    render(n, fib(n))
}

fn render(n: i64, value: i64) -> String {
    format!("fib({n}) = {value}\n")
}
