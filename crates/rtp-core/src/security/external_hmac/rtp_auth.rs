//! Application-side SRTP authentication tags
//!
//! With the key exposed by the external module, the send path can patch RTP
//! headers (e.g. absolute send time) after protection and then compute the
//! authentication tag once, directly in the outgoing buffer.
//!
//! Per RFC 3711 section 4.2 the tag covers the authenticated portion of the
//! packet followed by the 32-bit rollover counter.

use std::fmt;

use super::context::ExternalHmacContext;
use super::HMAC_KEY_LENGTH;
use crate::error::{ErrStatus, Result};
use crate::srtp::AuthContext;

/// Size of the rollover counter appended to the authenticated data
pub const ROC_LENGTH: usize = 4;

/// Largest packet index representable in 48 bits
pub const MAX_PACKET_INDEX: u64 = (1 << 48) - 1;

/// Parameters for computing an SRTP auth tag outside the host
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RtpAuthParams {
    /// Session authentication key
    pub key: Vec<u8>,
    /// Tag length in bytes
    pub tag_len: usize,
    /// 48-bit SRTP packet index (ROC << 16 | sequence number)
    pub packet_index: u64,
}

impl RtpAuthParams {
    pub fn new(key: impl Into<Vec<u8>>, tag_len: usize, packet_index: u64) -> Self {
        Self {
            key: key.into(),
            tag_len,
            packet_index,
        }
    }

    /// Take the key from an initialized external HMAC context
    pub fn from_context(context: &ExternalHmacContext, tag_len: usize, packet_index: u64) -> Self {
        Self::new(context.key(), tag_len, packet_index)
    }

    /// Rollover counter encoded in the packet index
    pub fn roc(&self) -> u32 {
        (self.packet_index >> 16) as u32
    }
}

impl fmt::Debug for RtpAuthParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RtpAuthParams")
            .field("key_len", &self.key.len())
            .field("tag_len", &self.tag_len)
            .field("packet_index", &self.packet_index)
            .finish()
    }
}

/// Recompute the auth tag that occupies the last `tag_len` bytes of `packet`.
pub fn update_rtp_auth_tag(packet: &mut [u8], params: &RtpAuthParams) -> Result<()> {
    let tag_len = params.tag_len;
    if tag_len == 0 || tag_len > HMAC_KEY_LENGTH {
        return Err(ErrStatus::BadParam);
    }
    if params.key.is_empty() || params.key.len() > HMAC_KEY_LENGTH {
        return Err(ErrStatus::BadParam);
    }
    if packet.len() <= tag_len {
        return Err(ErrStatus::BadParam);
    }
    if params.packet_index > MAX_PACKET_INDEX {
        return Err(ErrStatus::BadParam);
    }

    let auth_len = packet.len() - tag_len;
    let mut context = ExternalHmacContext::new();
    context.init(&params.key)?;
    context.update(&packet[..auth_len])?;

    let mut tag = [0u8; HMAC_KEY_LENGTH];
    context.compute(&params.roc().to_be_bytes(), tag_len, &mut tag)?;
    packet[auth_len..].copy_from_slice(&tag[..tag_len]);
    Ok(())
}
