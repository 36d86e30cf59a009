//! MFA key material.
//!
//! The challenge/response mechanics live entirely in the external MFA
//! provider; this module only models the encryption key handed to it.

use std::fmt;

/// Key length expected by the MFA secret encryption provider.
pub const KEY_LEN: usize = 32;

/// Opaque symmetric key protecting stored MFA secrets.
///
/// `Debug` never prints the key bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey([u8; KEY_LEN]);

impl EncryptionKey {
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey([redacted])")
    }
}

/// Source of fresh encryption keys.
///
/// Key generation is a collaborator concern (the encryption provider owns
/// its randomness); implementations outside tests wrap that provider.
pub trait EncryptionKeySource {
    fn new_key(&self) -> EncryptionKey;
}
