//! Application-side SRTP tag tests

#![cfg(all(feature = "srtp", feature = "external-auth"))]

use hmac::{Hmac, Mac};
use rtckit_rtp_core::security::external_hmac::{
    external_hmac_alloc, update_rtp_auth_tag, ExternalHmacContext, RtpAuthParams,
};
use sha1::Sha1;

fn sample_packet(tag_len: usize) -> Vec<u8> {
    let mut packet = vec![
        0x80, 0x6f, 0x12, 0x34, // V=2, PT=111, seq=0x1234
        0x00, 0x00, 0x03, 0xe8, // timestamp
        0xde, 0xad, 0xbe, 0xef, // SSRC
    ];
    packet.extend_from_slice(&[0x42; 40]);
    packet.extend(std::iter::repeat(0u8).take(tag_len));
    packet
}

fn reference_tag(key: &[u8], authenticated: &[u8], roc: u32, tag_len: usize) -> Vec<u8> {
    let mut mac = <Hmac<Sha1> as Mac>::new_from_slice(key).unwrap();
    mac.update(authenticated);
    mac.update(&roc.to_be_bytes());
    mac.finalize().into_bytes()[..tag_len].to_vec()
}

#[test]
fn test_tag_written_in_place() {
    let key = [0x13u8; 20];
    let params = RtpAuthParams::new(key.to_vec(), 10, (3 << 16) | 0x1234);
    let mut packet = sample_packet(10);
    let auth_len = packet.len() - 10;
    let header_and_payload = packet[..auth_len].to_vec();

    update_rtp_auth_tag(&mut packet, &params).unwrap();

    assert_eq!(&packet[..auth_len], header_and_payload.as_slice());
    assert_eq!(
        &packet[auth_len..],
        reference_tag(&key, &header_and_payload, 3, 10).as_slice()
    );
}

#[test]
fn test_roc_changes_tag() {
    let key = [0x13u8; 20];
    let mut first = sample_packet(4);
    let mut second = sample_packet(4);

    update_rtp_auth_tag(&mut first, &RtpAuthParams::new(key.to_vec(), 4, 0x1234)).unwrap();
    update_rtp_auth_tag(&mut second, &RtpAuthParams::new(key.to_vec(), 4, (1 << 16) | 0x1234))
        .unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_key_taken_from_registered_context() {
    let key: Vec<u8> = (0..20).collect();
    let mut auth = external_hmac_alloc(20, 10).unwrap();
    auth.init(&key).unwrap();

    let context = auth.context::<ExternalHmacContext>().unwrap();
    let params = RtpAuthParams::from_context(context, 10, 0);
    assert_eq!(params.key, key);

    let mut packet = sample_packet(10);
    let auth_len = packet.len() - 10;
    let authenticated = packet[..auth_len].to_vec();
    update_rtp_auth_tag(&mut packet, &params).unwrap();

    // The host computing the same tag through the adapter agrees
    let mut host_tag = [0u8; 10];
    auth.start().unwrap();
    auth.update(&authenticated).unwrap();
    auth.compute(&0u32.to_be_bytes(), 10, &mut host_tag).unwrap();
    assert_eq!(&packet[auth_len..], &host_tag);
}
