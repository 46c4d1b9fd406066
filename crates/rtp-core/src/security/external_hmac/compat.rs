//! Host API generation shim
//!
//! The adapter names the host's HMAC id and auth handle through this module.
//! By default they resolve to the 2.x identifiers; with the `libsrtp1`
//! feature they resolve to the 1.x ones.

#[cfg(not(feature = "libsrtp1"))]
pub use crate::srtp::{Auth as SrtpAuth, SRTP_HMAC_SHA1};

#[cfg(feature = "libsrtp1")]
pub use crate::srtp::legacy::{AuthT as SrtpAuth, HMAC_SHA1 as SRTP_HMAC_SHA1};

/// Whether the adapter was built against the 1.x identifiers
pub const COMPILING_AGAINST_LIBSRTP1: bool = cfg!(feature = "libsrtp1");
