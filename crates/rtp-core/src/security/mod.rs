//! Security mechanisms for SRTP
//!
//! This module provides application-controlled SRTP authentication:
//!
//! - External HMAC: an HMAC-SHA1 auth module that is plugged into the host
//!   in place of the built-in one and keeps the key readable. Built only
//!   when both the `srtp` and `external-auth` features are enabled.

#[cfg(all(feature = "srtp", feature = "external-auth"))]
pub mod external_hmac;
