// Password hashing and verification

use crate::auth::error::AuthError;

/// bcrypt work factor. Fixed at 10 rounds; tunable here, not exposed to
/// callers.
const COST: u32 = 10;

/// Password service wrapping bcrypt hash/verify.
pub struct PasswordService;

impl PasswordService {
    /// Hash a plaintext password. bcrypt generates a random salt per call
    /// and embeds it in the digest, so nothing besides the digest needs to
    /// be stored.
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        if password.is_empty() {
            return Err(AuthError::Hash("empty plaintext".to_string()));
        }

        bcrypt::hash(password, COST).map_err(|e| AuthError::Hash(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// A malformed digest yields `false` rather than an error: callers treat
    /// it exactly like a wrong password instead of branching on a second
    /// failure path.
    pub fn verify_password(password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
