pub mod password;
pub mod token;

pub use password::{PasswordError, PasswordHasher};
pub use token::{hash_token, IssuedToken, TokenGenerator};
