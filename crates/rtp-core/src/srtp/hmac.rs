//! Built-in HMAC-SHA1 authentication
//!
//! The keyed state lives inside the MAC; the raw key is not kept, so callers
//! of this auth type cannot read it back.

use std::any::Any;
use std::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::auth::{Auth, AuthContext, AuthTestCase, AuthType};
use super::{AuthTypeId, SRTP_HMAC_SHA1};
use crate::error::{ErrStatus, Result};

type HmacSha1Mac = Hmac<Sha1>;

/// SHA-1 digest length, the longest tag HMAC-SHA1 can produce
pub const HMAC_SHA1_DIGEST_LEN: usize = 20;

/// Longest key the built-in HMAC accepts
pub const HMAC_SHA1_MAX_KEY_LEN: usize = 20;

/// RFC 2202 test case 1 key
pub const RFC2202_CASE1_KEY: [u8; 20] = [0x0b; 20];

/// RFC 2202 test case 1 data
pub const RFC2202_CASE1_DATA: &[u8] = b"Hi There";

/// RFC 2202 test case 1 digest
pub const RFC2202_CASE1_TAG: [u8; 20] = [
    0xb6, 0x17, 0x31, 0x86, 0x55, 0x05, 0x72, 0x64, 0xe2, 0x8b, 0xc0, 0xb6, 0xfb, 0x37, 0x8c,
    0x8e, 0xf1, 0x46, 0xbe, 0x00,
];

static HMAC_SHA1_TEST_CASES: [AuthTestCase; 1] = [AuthTestCase {
    key: &RFC2202_CASE1_KEY,
    data: RFC2202_CASE1_DATA,
    tag: &RFC2202_CASE1_TAG,
}];

/// Keyed HMAC-SHA1 accumulator shared by the HMAC based contexts
#[derive(Clone, Default)]
pub(crate) struct HmacSha1Engine {
    keyed: Option<HmacSha1Mac>,
    running: Option<HmacSha1Mac>,
}

impl HmacSha1Engine {
    pub(crate) fn is_keyed(&self) -> bool {
        self.keyed.is_some()
    }

    pub(crate) fn init(&mut self, key: &[u8]) -> Result<()> {
        let mac = <HmacSha1Mac as Mac>::new_from_slice(key).map_err(|_| ErrStatus::InitFail)?;
        self.running = Some(mac.clone());
        self.keyed = Some(mac);
        Ok(())
    }

    pub(crate) fn start(&mut self) -> Result<()> {
        let keyed = self.keyed.as_ref().ok_or(ErrStatus::InitFail)?;
        self.running = Some(keyed.clone());
        Ok(())
    }

    pub(crate) fn update(&mut self, message: &[u8]) -> Result<()> {
        let running = self.running.as_mut().ok_or(ErrStatus::InitFail)?;
        running.update(message);
        Ok(())
    }

    /// Finish the message and restart from the keyed state
    pub(crate) fn compute(&mut self, message: &[u8], tag_len: usize, result: &mut [u8]) -> Result<()> {
        if tag_len > HMAC_SHA1_DIGEST_LEN || result.len() < tag_len {
            return Err(ErrStatus::BadParam);
        }
        let keyed = self.keyed.as_ref().ok_or(ErrStatus::InitFail)?;
        let mut mac = self
            .running
            .replace(keyed.clone())
            .unwrap_or_else(|| keyed.clone());

        mac.update(message);
        let digest = mac.finalize().into_bytes();
        result[..tag_len].copy_from_slice(&digest[..tag_len]);
        Ok(())
    }
}

impl fmt::Debug for HmacSha1Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSha1Engine")
            .field("keyed", &self.is_keyed())
            .finish()
    }
}

/// The library's own HMAC-SHA1 auth type
#[derive(Debug, Default, Clone, Copy)]
pub struct HmacSha1;

#[derive(Debug, Default)]
struct HmacSha1Context {
    engine: HmacSha1Engine,
}

impl AuthContext for HmacSha1Context {
    fn init(&mut self, key: &[u8]) -> Result<()> {
        if key.len() > HMAC_SHA1_MAX_KEY_LEN {
            return Err(ErrStatus::BadParam);
        }
        self.engine.init(key)
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

impl AuthType for HmacSha1 {
    fn id(&self) -> AuthTypeId {
        SRTP_HMAC_SHA1
    }

    fn description(&self) -> &'static str {
        "hmac sha-1 authentication function"
    }

    fn alloc(&self, key_len: usize, out_len: usize) -> Result<Auth> {
        if key_len > HMAC_SHA1_MAX_KEY_LEN || out_len > HMAC_SHA1_DIGEST_LEN {
            return Err(ErrStatus::BadParam);
        }
        Ok(Auth::new(
            SRTP_HMAC_SHA1,
            Box::new(HmacSha1Context::default()),
            key_len,
            out_len,
        ))
    }

    fn dealloc(&self, auth: Auth) -> Result<()> {
        if auth.context::<HmacSha1Context>().is_none() {
            return Err(ErrStatus::DeallocFail);
        }
        drop(auth);
        Ok(())
    }

    fn test_cases(&self) -> &[AuthTestCase] {
        &HMAC_SHA1_TEST_CASES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srtp::auth::auth_type_self_test;

    #[test]
    fn test_self_test_passes() {
        assert!(auth_type_self_test(&HmacSha1).is_ok());
    }

    #[test]
    fn test_alloc_rejects_oversized_lengths() {
        assert_eq!(HmacSha1.alloc(21, 10).unwrap_err(), ErrStatus::BadParam);
        assert_eq!(HmacSha1.alloc(20, 21).unwrap_err(), ErrStatus::BadParam);
        assert!(HmacSha1.alloc(20, 20).is_ok());
    }

    #[test]
    fn test_compute_before_init() {
        let mut auth = HmacSha1.alloc(20, 10).unwrap();
        let mut tag = [0u8; 10];
        assert_eq!(auth.compute(b"abc", 10, &mut tag).unwrap_err(), ErrStatus::InitFail);
    }

    #[test]
    fn test_engine_restarts_after_compute() {
        let mut engine = HmacSha1Engine::default();
        engine.init(&RFC2202_CASE1_KEY).unwrap();

        let mut first = [0u8; 20];
        engine.compute(RFC2202_CASE1_DATA, 20, &mut first).unwrap();
        let mut second = [0u8; 20];
        engine.compute(RFC2202_CASE1_DATA, 20, &mut second).unwrap();

        assert_eq!(first, RFC2202_CASE1_TAG);
        assert_eq!(second, RFC2202_CASE1_TAG);
    }
}
