use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id hasher. Cost parameters come from configuration so a deploy
/// can trade login latency for hardness; both operations run on the
/// blocking pool so they never stall the request executor.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Fails at startup when the cost parameters are out of range, rather
    /// than on the first login.
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> ApplicationResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|err| {
            ApplicationError::infrastructure(format!("invalid argon2 parameters: {err}"))
        })?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

async fn offload<T, F>(task: F) -> ApplicationResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        offload(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| {
                    ApplicationError::infrastructure(format!("password hashing failed: {err}"))
                })
        })
        .await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        offload(move || {
            // A hash that does not parse is corrupt storage, not a bad
            // credential; only a genuine mismatch maps to 401.
            let parsed = PasswordHash::new(&expected_hash).map_err(|err| {
                ApplicationError::infrastructure(format!("stored password hash is invalid: {err}"))
            })?;
            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(()),
                Err(HashError::Password) => {
                    Err(ApplicationError::unauthorized("invalid credentials"))
                }
                Err(err) => Err(ApplicationError::infrastructure(format!(
                    "password verification failed: {err}"
                ))),
            }
        })
        .await
    }
}
