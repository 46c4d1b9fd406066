//! Identifiers under the names the 1.x host releases exported
//!
//! Only built with the `libsrtp1` feature. Code that must build against
//! either generation goes through `security::external_hmac::compat`.

use super::{Auth, AuthTypeId, SRTP_HMAC_SHA1};

/// 1.x name of the built-in HMAC-SHA1 id
pub const HMAC_SHA1: AuthTypeId = SRTP_HMAC_SHA1;

/// 1.x name of the allocated auth handle
pub type AuthT = Auth;
