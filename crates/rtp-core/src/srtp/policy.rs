//! Per-stream authentication policy
//!
//! A policy names the auth type a stream uses and the key and tag lengths
//! to allocate it with. The kernel only hands out a non-default auth type
//! when a policy asks for it by id.

use serde::{Deserialize, Serialize};

use super::{AuthTypeId, SRTP_HMAC_SHA1, SRTP_NULL_AUTH};

/// Authentication part of an SRTP stream policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthPolicy {
    /// Auth type id in the kernel's dispatch table
    pub auth_type: AuthTypeId,
    /// Authentication key length in bytes
    pub auth_key_len: usize,
    /// Authentication tag length in bytes
    pub auth_tag_len: usize,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self::hmac_sha1_80()
    }
}

impl AuthPolicy {
    /// HMAC-SHA1 with an 80-bit tag (AES_CM_128_HMAC_SHA1_80)
    pub fn hmac_sha1_80() -> Self {
        Self {
            auth_type: SRTP_HMAC_SHA1,
            auth_key_len: 20,
            auth_tag_len: 10,
        }
    }

    /// HMAC-SHA1 with a 32-bit tag (AES_CM_128_HMAC_SHA1_32)
    pub fn hmac_sha1_32() -> Self {
        Self {
            auth_type: SRTP_HMAC_SHA1,
            auth_key_len: 20,
            auth_tag_len: 4,
        }
    }

    /// No authentication
    pub fn null() -> Self {
        Self {
            auth_type: SRTP_NULL_AUTH,
            auth_key_len: 0,
            auth_tag_len: 0,
        }
    }

    /// Start building a policy from the HMAC-SHA1-80 defaults
    pub fn builder() -> AuthPolicyBuilder {
        AuthPolicyBuilder::new()
    }
}

/// Builder for AuthPolicy
#[derive(Debug, Clone)]
pub struct AuthPolicyBuilder {
    policy: AuthPolicy,
}

impl AuthPolicyBuilder {
    pub fn new() -> Self {
        Self {
            policy: AuthPolicy::default(),
        }
    }

    /// Select the auth type by id
    pub fn auth_type(mut self, auth_type: AuthTypeId) -> Self {
        self.policy.auth_type = auth_type;
        self
    }

    pub fn key_len(mut self, key_len: usize) -> Self {
        self.policy.auth_key_len = key_len;
        self
    }

    pub fn tag_len(mut self, tag_len: usize) -> Self {
        self.policy.auth_tag_len = tag_len;
        self
    }

    pub fn build(self) -> AuthPolicy {
        self.policy
    }
}
