//! The password hashing workload.
//!
//! The cost of a request is controlled by its query string, e.g.
//! `?sleep=1000&cpu=50&mem=10000&password=hunter2`:
//!
//! * `sleep`: milliseconds to block before hashing, simulating generic IO.
//! * `cpu`: Argon2 iterations.
//! * `mem`: Argon2 memory cost in KiB.
//! * `password`: the password to hash.

use std::time::Duration;

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use tracing::instrument;

use crate::{Error, Result};

const DEFAULT_PASSWORD: &str = "boson42";
const DEFAULT_ITERATIONS: u32 = 5;
const DEFAULT_MEMORY_KIB: u32 = 1000;
const PARALLELISM: u32 = 1;
const OUTPUT_LEN: usize = 32;

/// Cost and input of one hashing request.
#[derive(Clone, PartialEq, Eq)]
pub struct HashOptions {
    /// The password to hash.
    pub password: String,
    /// Argon2 iterations.
    pub iterations: u32,
    /// Argon2 memory cost in KiB.
    pub memory_kib: u32,
    /// Time to block before hashing.
    pub sleep: Option<Duration>,
}

// Keeps the password out of logs and span fields.
impl std::fmt::Debug for HashOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashOptions")
            .field("iterations", &self.iterations)
            .field("memory_kib", &self.memory_kib)
            .field("sleep", &self.sleep)
            .finish_non_exhaustive()
    }
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            password: DEFAULT_PASSWORD.to_string(),
            iterations: DEFAULT_ITERATIONS,
            memory_kib: DEFAULT_MEMORY_KIB,
            sleep: None,
        }
    }
}

impl HashOptions {
    /// Parses the options from a URL query string (without the leading `?`).
    ///
    /// Unknown keys are ignored and the last occurrence of a key wins.
    pub fn from_query(query: &str) -> Result<Self> {
        let mut options = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "sleep" => {
                    let ms: u64 = value.parse().map_err(|e| Error::invalid_query("sleep", e))?;
                    options.sleep = Some(Duration::from_millis(ms));
                }
                "password" => options.password = value.into_owned(),
                "cpu" => {
                    options.iterations = value.parse().map_err(|e| Error::invalid_query("cpu", e))?;
                }
                "mem" => {
                    options.memory_kib = value.parse().map_err(|e| Error::invalid_query("mem", e))?;
                }
                _ => (),
            }
        }
        Ok(options)
    }
}

/// Hashes the password with Argon2id and verifies the result.
///
/// Returns the PHC string of the hash.
#[instrument(name = "hash_password", skip_all, fields(iterations = options.iterations, memory_kib = options.memory_kib))]
pub fn hash_password(options: &HashOptions) -> Result<String> {
    if let Some(sleep) = options.sleep {
        tracing::debug!(?sleep, "simulating IO");
        std::thread::sleep(sleep);
    }

    let params = Params::new(
        options.memory_kib,
        options.iterations,
        PARALLELISM,
        Some(OUTPUT_LEN),
    )
    .map_err(|e| Error::InvalidHashParams(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let salt = SaltString::generate(&mut OsRng);
    let phc = argon2
        .hash_password(options.password.as_bytes(), &salt)
        .map_err(|e| Error::Hash(e.to_string()))?
        .to_string();

    let parsed = PasswordHash::new(&phc).map_err(|e| Error::Hash(e.to_string()))?;
    argon2
        .verify_password(options.password.as_bytes(), &parsed)
        .map_err(|e| Error::Hash(format!("hash failed verification: {e}")))?;

    Ok(phc)
}
