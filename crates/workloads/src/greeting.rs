//! The baseline workload: a constant greeting that names the app instance.
//!
//! Density tests deploy many copies of the same component and tell them apart
//! by the instance number in the body.

use crate::{Error, Result};

/// Variable holding the number that identifies this app instance.
pub const INSTANCE_VARIABLE: &str = "instance_number";

/// The instance number used when the variable is not set.
pub const DEFAULT_INSTANCE: u32 = 1;

/// Renders the greeting of an instance.
pub fn render(instance: u32) -> String {
    format!("Hello {instance}")
}

/// Builds the response body from variable values.
pub fn run(lookup: impl Fn(&str) -> Result<Option<String>>) -> Result<String> {
    let instance = match lookup(INSTANCE_VARIABLE)? {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| Error::invalid_variable(INSTANCE_VARIABLE, e))?,
        None => DEFAULT_INSTANCE,
    };
    Ok(render(instance))
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;
    use http::StatusCode;

    use super::*;
    use crate::response;

    #[test]
    fn greets_default_instance() -> anyhow::Result<()> {
        let res = response::text(run(|_: &str| Ok(None))?);
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(res.body(), "Hello 1");
        Ok(())
    }

    #[test]
    fn greets_configured_instance() -> anyhow::Result<()> {
        assert_eq!(run(|_: &str| Ok(Some(" 17 ".to_string())))?, "Hello 17");
        Ok(())
    }

    #[test]
    fn malformed_instance_is_a_configuration_error() {
        let err = run(|_: &str| Ok(Some("seventeen".to_string()))).unwrap_err();
        assert!(matches!(&err, Error::InvalidVariable { name, .. } if name == INSTANCE_VARIABLE));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
