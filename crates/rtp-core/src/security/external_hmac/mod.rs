//! External HMAC-SHA1 auth module
//!
//! Replaces the host's built-in HMAC so the application can read the
//! authentication key, and can compute tags itself instead of having every
//! packet hashed twice.
//!
//! The host picks auth functions by id. This module registers itself under
//! [`EXTERNAL_HMAC_SHA1`], one past the built-in HMAC-SHA1 id, so a stream
//! only uses it when its [`AuthPolicy`] names that id.
//!
//! ```rust
//! use rtckit_rtp_core::security::external_hmac::{
//!     external_hmac_sha1_80, register_external_hmac, ExternalHmacContext,
//! };
//! use rtckit_rtp_core::srtp::CryptoKernel;
//!
//! let kernel = CryptoKernel::new();
//! register_external_hmac(&kernel)?;
//!
//! let mut auth = kernel.alloc_auth_for(&external_hmac_sha1_80())?;
//! auth.init(&[0x0b; 20])?;
//! let key = auth.context::<ExternalHmacContext>().map(|ctx| ctx.key().to_vec());
//! assert_eq!(key, Some(vec![0x0b; 20]));
//! # Ok::<(), rtckit_rtp_core::ErrStatus>(())
//! ```

pub mod compat;
pub mod context;
pub mod rtp_auth;

use std::sync::Arc;

use tracing::{debug, error};

use crate::error::{ErrStatus, Result};
use crate::srtp::hmac::{RFC2202_CASE1_DATA, RFC2202_CASE1_KEY, RFC2202_CASE1_TAG};
use crate::srtp::{AuthPolicy, AuthTestCase, AuthType, AuthTypeId, CryptoKernel};

use compat::{SrtpAuth, SRTP_HMAC_SHA1};

pub use context::ExternalHmacContext;
pub use rtp_auth::{update_rtp_auth_tag, RtpAuthParams, MAX_PACKET_INDEX, ROC_LENGTH};

/// Auth type id the external module is registered under
pub const EXTERNAL_HMAC_SHA1: AuthTypeId = SRTP_HMAC_SHA1 + 1;

/// Maximum key length, which is also the longest tag produced
pub const HMAC_KEY_LENGTH: usize = 20;

static EXTERNAL_HMAC_TEST_CASES: [AuthTestCase; 1] = [AuthTestCase {
    key: &RFC2202_CASE1_KEY,
    data: RFC2202_CASE1_DATA,
    tag: &RFC2202_CASE1_TAG,
}];

/// The external module as an auth type the kernel can dispatch to
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalHmacAuth;

impl AuthType for ExternalHmacAuth {
    fn id(&self) -> AuthTypeId {
        EXTERNAL_HMAC_SHA1
    }

    fn description(&self) -> &'static str {
        "external hmac sha-1 authentication"
    }

    fn alloc(&self, key_len: usize, out_len: usize) -> Result<SrtpAuth> {
        external_hmac_alloc(key_len, out_len)
    }

    fn dealloc(&self, auth: SrtpAuth) -> Result<()> {
        external_hmac_dealloc(auth)
    }

    fn test_cases(&self) -> &[AuthTestCase] {
        &EXTERNAL_HMAC_TEST_CASES
    }
}

/// Allocate an auth handle backed by an [`ExternalHmacContext`].
///
/// Keys and tags longer than [`HMAC_KEY_LENGTH`] are not supported.
pub fn external_hmac_alloc(key_len: usize, out_len: usize) -> Result<SrtpAuth> {
    if key_len > HMAC_KEY_LENGTH || out_len > HMAC_KEY_LENGTH {
        debug!(
            "Unsupported external hmac lengths (key_len={}, out_len={})",
            key_len, out_len
        );
        return Err(ErrStatus::BadParam);
    }

    Ok(SrtpAuth::new(
        EXTERNAL_HMAC_SHA1,
        Box::new(ExternalHmacContext::new()),
        key_len,
        out_len,
    ))
}

/// Release a handle allocated by [`external_hmac_alloc`].
pub fn external_hmac_dealloc(auth: SrtpAuth) -> Result<()> {
    if auth.auth_type_id() != EXTERNAL_HMAC_SHA1
        || auth.context::<ExternalHmacContext>().is_none()
    {
        return Err(ErrStatus::DeallocFail);
    }
    // Dropping the context zeroes the key
    drop(auth);
    Ok(())
}

/// Install the external module in `kernel` under [`EXTERNAL_HMAC_SHA1`].
///
/// Safe to call more than once; later calls replace the entry with an
/// identical one.
pub fn register_external_hmac(kernel: &CryptoKernel) -> Result<()> {
    match kernel.replace_auth_type(Arc::new(ExternalHmacAuth), EXTERNAL_HMAC_SHA1) {
        Ok(()) => {
            debug!("External hmac registered with auth id {}", EXTERNAL_HMAC_SHA1);
            Ok(())
        }
        Err(status) => {
            error!("Error in replacing default auth module, error: {}", status);
            Err(ErrStatus::Fail)
        }
    }
}

/// Install the external module in the global kernel
pub fn external_crypto_init() -> Result<()> {
    register_external_hmac(CryptoKernel::global())
}

/// External HMAC-SHA1 with an 80-bit tag
pub fn external_hmac_sha1_80() -> AuthPolicy {
    AuthPolicy::builder()
        .auth_type(EXTERNAL_HMAC_SHA1)
        .key_len(HMAC_KEY_LENGTH)
        .tag_len(10)
        .build()
}

/// External HMAC-SHA1 with a 32-bit tag
pub fn external_hmac_sha1_32() -> AuthPolicy {
    AuthPolicy::builder()
        .auth_type(EXTERNAL_HMAC_SHA1)
        .key_len(HMAC_KEY_LENGTH)
        .tag_len(4)
        .build()
}
