//! Crypto kernel: the authentication dispatch table
//!
//! The kernel maps auth type ids to implementations. Streams allocate their
//! authentication state through it, and applications install their own
//! implementations with [`CryptoKernel::replace_auth_type`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::auth::{auth_type_self_test, Auth, AuthType};
use super::hmac::HmacSha1;
use super::null_auth::NullAuth;
use super::policy::AuthPolicy;
use super::{AuthTypeId, SRTP_HMAC_SHA1, SRTP_NULL_AUTH};
use crate::error::{ErrStatus, Result};

static GLOBAL_KERNEL: Lazy<CryptoKernel> = Lazy::new(CryptoKernel::new);

/// Registry of authentication types keyed by id
pub struct CryptoKernel {
    auth_types: RwLock<BTreeMap<AuthTypeId, Arc<dyn AuthType>>>,
}

impl CryptoKernel {
    /// Create a kernel with the built-in auth types loaded
    pub fn new() -> Self {
        let kernel = Self::empty();
        {
            let mut auth_types = kernel.auth_types.write();
            auth_types.insert(SRTP_NULL_AUTH, Arc::new(NullAuth) as Arc<dyn AuthType>);
            auth_types.insert(SRTP_HMAC_SHA1, Arc::new(HmacSha1) as Arc<dyn AuthType>);
        }
        kernel
    }

    /// Create a kernel with no auth types at all
    pub fn empty() -> Self {
        Self {
            auth_types: RwLock::new(BTreeMap::new()),
        }
    }

    /// The process-wide kernel
    pub fn global() -> &'static CryptoKernel {
        &GLOBAL_KERNEL
    }

    /// Add an auth type under an id that is not in use yet
    pub fn load_auth_type(&self, auth_type: Arc<dyn AuthType>, id: AuthTypeId) -> Result<()> {
        self.do_load_auth_type(auth_type, id, false)
    }

    /// Install an auth type under `id`, replacing whatever was there
    pub fn replace_auth_type(&self, auth_type: Arc<dyn AuthType>, id: AuthTypeId) -> Result<()> {
        self.do_load_auth_type(auth_type, id, true)
    }

    fn do_load_auth_type(
        &self,
        auth_type: Arc<dyn AuthType>,
        id: AuthTypeId,
        replace: bool,
    ) -> Result<()> {
        // Types that fail their known-answer tests never reach the table
        if let Err(status) = auth_type_self_test(auth_type.as_ref()) {
            warn!(
                "Rejecting auth type '{}' for id {}: {}",
                auth_type.description(),
                id,
                status
            );
            return Err(status);
        }

        let mut auth_types = self.auth_types.write();
        if let Some(existing) = auth_types.get(&id) {
            if !replace {
                warn!(
                    "Auth type id {} already in use by '{}'",
                    id,
                    existing.description()
                );
                return Err(ErrStatus::BadParam);
            }
            debug!(
                "Replacing auth type '{}' at id {} with '{}'",
                existing.description(),
                id,
                auth_type.description()
            );
        } else {
            debug!("Loading auth type '{}' at id {}", auth_type.description(), id);
        }

        auth_types.insert(id, auth_type);
        Ok(())
    }

    /// Look up the auth type registered under `id`
    pub fn get_auth_type(&self, id: AuthTypeId) -> Option<Arc<dyn AuthType>> {
        self.auth_types.read().get(&id).cloned()
    }

    /// Allocate authentication state from the type registered under `id`
    pub fn alloc_auth(&self, id: AuthTypeId, key_len: usize, tag_len: usize) -> Result<Auth> {
        let auth_type = self.get_auth_type(id).ok_or(ErrStatus::NoSuchOp)?;
        let mut auth = auth_type.alloc(key_len, tag_len)?;
        auth.set_allocator(Arc::clone(&auth_type));
        debug!(
            "Allocated '{}' auth (key_len={}, tag_len={})",
            auth_type.description(),
            key_len,
            tag_len
        );
        Ok(auth)
    }

    /// Allocate authentication state for a stream policy
    pub fn alloc_auth_for(&self, policy: &AuthPolicy) -> Result<Auth> {
        self.alloc_auth(policy.auth_type, policy.auth_key_len, policy.auth_tag_len)
    }

    /// Release authentication state through the type that allocated it.
    ///
    /// Handles allocated outside the kernel fall back to the type currently
    /// registered under the id the handle reports.
    pub fn dealloc_auth(&self, auth: Auth) -> Result<()> {
        let auth_type = match auth.allocator() {
            Some(allocator) => Arc::clone(allocator),
            None => self
                .get_auth_type(auth.auth_type_id())
                .ok_or(ErrStatus::NoSuchOp)?,
        };
        auth_type.dealloc(auth)
    }

    /// Ids currently present in the table, in ascending order
    pub fn auth_type_ids(&self) -> Vec<AuthTypeId> {
        self.auth_types.read().keys().copied().collect()
    }

    /// Re-run the self-test of every loaded auth type.
    ///
    /// Reports the first failure after logging all results.
    pub fn status(&self) -> Result<()> {
        let loaded: Vec<(AuthTypeId, Arc<dyn AuthType>)> = self
            .auth_types
            .read()
            .iter()
            .map(|(id, auth_type)| (*id, Arc::clone(auth_type)))
            .collect();

        let mut first_failure = None;
        for (id, auth_type) in loaded {
            match auth_type_self_test(auth_type.as_ref()) {
                Ok(()) => info!("auth func {}: {} (passed)", id, auth_type.description()),
                Err(status) => {
                    warn!(
                        "auth func {}: {} (failed: {})",
                        id,
                        auth_type.description(),
                        status
                    );
                    first_failure.get_or_insert(status);
                }
            }
        }

        match first_failure {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }
}

impl Default for CryptoKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CryptoKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoKernel")
            .field("auth_types", &self.auth_type_ids())
            .finish()
    }
}
