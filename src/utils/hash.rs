use sha2::{Digest, Sha256};

/// Compute SHA256 hash of content and return as lowercase hex string
pub fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}

/// Digest stored in the credential file in place of the password.
/// Salting with the username keeps equal passwords from sharing a digest.
pub fn password_digest(username: &str, password: &str) -> String {
    sha256_hex(&format!("{}:{}", username, password))
}
