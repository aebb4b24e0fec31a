use base64::{engine::general_purpose, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;

/// A freshly minted bearer token and the digest that gets persisted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub token_hash: String,
}

/// Opaque bearer token generator
///
/// Tokens are 256 random bits, URL-safe base64 without padding.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenGenerator;

impl TokenGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn issue(&self) -> IssuedToken {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);

        let token = general_purpose::URL_SAFE_NO_PAD.encode(bytes);
        let token_hash = hash_token(&token);

        IssuedToken { token, token_hash }
    }
}

/// Hex SHA-256 of a bearer token, the form stored in `sessions.token_hash`
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
