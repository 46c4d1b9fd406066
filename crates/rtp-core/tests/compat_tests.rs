//! Host generation compatibility tests
//!
//! The adapter must behave the same whether it names the host through the
//! 2.x identifiers or, with `libsrtp1`, through the 1.x ones. Run these with
//! and without `--features libsrtp1`.

#![cfg(all(feature = "srtp", feature = "external-auth"))]

use rtckit_rtp_core::security::external_hmac::compat::{
    SrtpAuth, COMPILING_AGAINST_LIBSRTP1, SRTP_HMAC_SHA1,
};
use rtckit_rtp_core::security::external_hmac::{
    external_hmac_alloc, external_hmac_dealloc, register_external_hmac, ExternalHmacContext,
    EXTERNAL_HMAC_SHA1, HMAC_KEY_LENGTH,
};
use rtckit_rtp_core::srtp::CryptoKernel;

const RFC2202_CASE1_DIGEST: &str = "b617318655057264e28bc0b6fb378c8ef146be00";

fn run_lifecycle(mut auth: SrtpAuth) -> Vec<u8> {
    auth.init(&[0x0b; 20]).unwrap();
    auth.start().unwrap();
    auth.update(b"Hi ").unwrap();

    let mut tag = vec![0u8; HMAC_KEY_LENGTH];
    auth.compute(b"There", HMAC_KEY_LENGTH, &mut tag).unwrap();

    assert_eq!(
        auth.context::<ExternalHmacContext>().map(|context| context.key_length()),
        Some(20)
    );
    external_hmac_dealloc(auth).unwrap();
    tag
}

#[test]
fn test_feature_flag_matches_build() {
    assert_eq!(COMPILING_AGAINST_LIBSRTP1, cfg!(feature = "libsrtp1"));
}

#[test]
fn test_external_id_follows_host_hmac_id() {
    assert_eq!(EXTERNAL_HMAC_SHA1, SRTP_HMAC_SHA1 + 1);
}

#[test]
fn test_lifecycle_through_host_names() {
    let auth: SrtpAuth = external_hmac_alloc(20, 20).unwrap();
    assert_eq!(auth.auth_type_id(), SRTP_HMAC_SHA1 + 1);
    assert_eq!(hex::encode(run_lifecycle(auth)), RFC2202_CASE1_DIGEST);
}

#[test]
fn test_lifecycle_through_kernel_registration() {
    let kernel = CryptoKernel::new();
    register_external_hmac(&kernel).unwrap();

    let auth: SrtpAuth = kernel.alloc_auth(SRTP_HMAC_SHA1 + 1, 20, 20).unwrap();
    assert_eq!(hex::encode(run_lifecycle(auth)), RFC2202_CASE1_DIGEST);
}

#[cfg(feature = "libsrtp1")]
mod libsrtp1 {
    use super::*;
    use rtckit_rtp_core::srtp::legacy::{AuthT, HMAC_SHA1};

    #[test]
    fn test_legacy_names_drive_the_adapter() {
        assert!(COMPILING_AGAINST_LIBSRTP1);
        assert_eq!(EXTERNAL_HMAC_SHA1, HMAC_SHA1 + 1);

        let auth: AuthT = external_hmac_alloc(20, 10).unwrap();
        assert_eq!(auth.out_len(), 10);
        assert_eq!(hex::encode(run_lifecycle(auth)), RFC2202_CASE1_DIGEST);
    }

    #[test]
    fn test_legacy_dealloc_rejects_builtin_handle() {
        let kernel = CryptoKernel::new();
        let builtin: AuthT = kernel.alloc_auth(HMAC_SHA1, 20, 10).unwrap();
        assert!(external_hmac_dealloc(builtin).is_err());
    }
}
