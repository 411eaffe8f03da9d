mod password;
mod session_store;

pub use password::Argon2PasswordHasher;
pub use session_store::InMemorySessionStore;
