//! SRTP authentication host
//!
//! This module models the part of the SRTP library that dispatches packet
//! authentication: the auth plug-in interface, the built-in auth types, the
//! crypto kernel holding the `id -> auth type` dispatch table, and the
//! per-stream policy that selects an auth type.
//!
//! Authentication types are identified by an unsigned integer. An
//! application can plug its own module into the kernel under a new id with
//! [`CryptoKernel::replace_auth_type`] and select it for a stream by
//! putting that id in the stream's [`AuthPolicy`].

pub mod auth;
pub mod crypto_kernel;
pub mod hmac;
pub mod null_auth;
pub mod policy;

#[cfg(feature = "libsrtp1")]
pub mod legacy;

pub use self::auth::{auth_type_self_test, Auth, AuthContext, AuthTestCase, AuthType};
pub use self::crypto_kernel::CryptoKernel;
pub use self::hmac::HmacSha1;
pub use self::null_auth::NullAuth;
pub use self::policy::{AuthPolicy, AuthPolicyBuilder};

/// Identifier of an authentication type in the kernel's dispatch table
pub type AuthTypeId = u32;

/// Null authentication (no tag)
pub const SRTP_NULL_AUTH: AuthTypeId = 0;
/// Universal hash, TMMH version 2
pub const SRTP_UST_TMMHV2: AuthTypeId = 1;
/// Universal hash, AES-128 XMAC
pub const SRTP_UST_AES_128_XMAC: AuthTypeId = 2;
/// Built-in HMAC-SHA1
pub const SRTP_HMAC_SHA1: AuthTypeId = 3;
