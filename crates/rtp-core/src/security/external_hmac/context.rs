//! Key-visible HMAC context

use std::any::Any;
use std::fmt;
use std::sync::atomic::{compiler_fence, Ordering};

use super::HMAC_KEY_LENGTH;
use crate::error::{ErrStatus, Result};
use crate::srtp::hmac::HmacSha1Engine;
use crate::srtp::AuthContext;

/// HMAC context that keeps the authentication key readable.
///
/// Owned by the stream's auth handle; the adapter fills it in `init` and the
/// application reads the key back through [`ExternalHmacContext::key`].
pub struct ExternalHmacContext {
    key: [u8; HMAC_KEY_LENGTH],
    key_length: usize,
    engine: HmacSha1Engine,
}

impl ExternalHmacContext {
    pub fn new() -> Self {
        Self {
            key: [0u8; HMAC_KEY_LENGTH],
            key_length: 0,
            engine: HmacSha1Engine::default(),
        }
    }

    /// The key loaded by the last successful `init`
    pub fn key(&self) -> &[u8] {
        &self.key[..self.key_length]
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Whether a key has been loaded
    pub fn is_initialized(&self) -> bool {
        self.engine.is_keyed()
    }

    /// Overwrite the stored key and drop the keyed MAC state
    pub(crate) fn wipe(&mut self) {
        for byte in self.key.iter_mut() {
            // SAFETY: `byte` is a valid, aligned `&mut u8` into `self.key`
            unsafe { std::ptr::write_volatile(byte, 0) };
        }
        compiler_fence(Ordering::SeqCst);
        self.key_length = 0;
        self.engine = HmacSha1Engine::default();
    }
}

impl Default for ExternalHmacContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext for ExternalHmacContext {
    fn init(&mut self, key: &[u8]) -> Result<()> {
        if key.len() > HMAC_KEY_LENGTH {
            return Err(ErrStatus::BadParam);
        }

        self.key.fill(0);
        self.key[..key.len()].copy_from_slice(key);
        self.key_length = key.len();
        self.engine.init(&self.key[..self.key_length])
    }

    fn start(&mut self) -> Result<()> {
        self.engine.start()
    }

    fn update(&mut self, message: &[u8]) -> Result<()> {
        self.engine.update(message)
    }

    fn compute(&mut self, message: &[u8], tag_len: usize, result: &mut [u8]) -> Result<()> {
        self.engine.compute(message, tag_len, result)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Drop for ExternalHmacContext {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for ExternalHmacContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalHmacContext")
            .field("key_length", &self.key_length)
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
