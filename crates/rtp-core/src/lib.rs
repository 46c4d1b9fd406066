//! # RTP-Core: SRTP authentication plumbing
//!
//! This crate contains the authentication side of SRTP:
//!
//! - [`srtp`]: the host's auth plug-in interface, built-in auth types, the
//!   crypto kernel dispatch table, and per-stream auth policies
//! - [`security::external_hmac`]: an HMAC-SHA1 module that replaces the
//!   built-in one so the application can read the authentication key
//!
//! ## Feature Flags
//!
//! - `srtp`: the SRTP host (enabled by default)
//! - `external-auth`: the external HMAC module; only built together with
//!   `srtp` (enabled by default)
//! - `libsrtp1`: build the external module against the 1.x host identifiers

pub mod error;
pub mod security;
#[cfg(feature = "srtp")]
pub mod srtp;

pub use error::{status_code, ErrStatus, Result};

#[cfg(all(feature = "srtp", feature = "external-auth"))]
pub use security::external_hmac::{
    external_crypto_init, register_external_hmac, ExternalHmacAuth, ExternalHmacContext,
    EXTERNAL_HMAC_SHA1, HMAC_KEY_LENGTH,
};

use tracing_subscriber::EnvFilter;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
///
/// Installs a `tracing` subscriber if none is set yet and, when the external
/// module is compiled in, registers it with the global crypto kernel.
/// Safe to call multiple times.
///
/// # Errors
///
/// Returns [`ErrStatus::Fail`] if the external module cannot be registered.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    #[cfg(all(feature = "srtp", feature = "external-auth"))]
    external_crypto_init()?;

    tracing::info!("RTP-Core v{} initialized", VERSION);
    Ok(())
}
