//! Authentication plug-in interface
//!
//! An authentication type is a factory ([`AuthType`]) for per-stream
//! authentication state ([`AuthContext`]). The kernel only ever talks to
//! these two traits, so any implementation can be installed in place of the
//! built-in ones.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::AuthTypeId;
use crate::error::{ErrStatus, Result};

/// Per-stream authentication state
///
/// The host calls `init` once with the session key, then for every packet
/// `start`, any number of `update`s, and one `compute`. Calls on a single
/// context are serialized by the owner of the stream.
pub trait AuthContext: Any + Send {
    /// Load the authentication key
    fn init(&mut self, key: &[u8]) -> Result<()>;

    /// Reset the per-message accumulation state
    fn start(&mut self) -> Result<()>;

    /// Feed more message bytes into the running computation
    fn update(&mut self, message: &[u8]) -> Result<()>;

    /// Feed `message`, then write `tag_len` bytes of the tag into `result`
    fn compute(&mut self, message: &[u8], tag_len: usize, result: &mut [u8]) -> Result<()>;

    /// Access the concrete context for inspection
    fn as_any(&self) -> &dyn Any;

    /// Mutable access to the concrete context
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// An authentication algorithm that can be registered with the kernel
pub trait AuthType: Send + Sync {
    /// Identifier the type reports for itself
    fn id(&self) -> AuthTypeId;

    /// Human readable description
    fn description(&self) -> &'static str;

    /// Allocate a handle for a key of `key_len` bytes producing `out_len` byte tags
    fn alloc(&self, key_len: usize, out_len: usize) -> Result<Auth>;

    /// Release a handle previously returned by [`AuthType::alloc`]
    fn dealloc(&self, auth: Auth) -> Result<()>;

    /// Known-answer tests run before the type is installed
    fn test_cases(&self) -> &[AuthTestCase] {
        &[]
    }
}

/// Known-answer test for an authentication type
#[derive(Debug, Clone, Copy)]
pub struct AuthTestCase {
    /// Authentication key
    pub key: &'static [u8],
    /// Message to authenticate
    pub data: &'static [u8],
    /// Expected tag; its length is the requested tag length
    pub tag: &'static [u8],
}

/// Allocated authentication handle
///
/// Owns the context of one stream together with the lengths it was
/// allocated for. Handles handed out by the kernel also remember the auth
/// type that allocated them, so they are released through that type even
/// after its table entry has been replaced.
pub struct Auth {
    type_id: AuthTypeId,
    allocator: Option<Arc<dyn AuthType>>,
    context: Box<dyn AuthContext>,
    out_len: usize,
    key_len: usize,
    prefix_len: usize,
}

impl Auth {
    /// Wrap a freshly allocated context
    pub fn new(
        type_id: AuthTypeId,
        context: Box<dyn AuthContext>,
        key_len: usize,
        out_len: usize,
    ) -> Self {
        Self {
            type_id,
            allocator: None,
            context,
            out_len,
            key_len,
            prefix_len: 0,
        }
    }

    /// Set the number of keystream prefix bytes this auth type consumes
    pub fn with_prefix_len(mut self, prefix_len: usize) -> Self {
        self.prefix_len = prefix_len;
        self
    }

    /// Id the allocating auth type reports for itself
    pub fn auth_type_id(&self) -> AuthTypeId {
        self.type_id
    }

    /// The auth type that allocated this handle, when it came from a kernel
    pub fn allocator(&self) -> Option<&Arc<dyn AuthType>> {
        self.allocator.as_ref()
    }

    pub(crate) fn set_allocator(&mut self, allocator: Arc<dyn AuthType>) {
        self.allocator = Some(allocator);
    }

    /// Tag length in bytes
    pub fn out_len(&self) -> usize {
        self.out_len
    }

    pub fn key_len(&self) -> usize {
        self.key_len
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn init(&mut self, key: &[u8]) -> Result<()> {
        self.context.init(key)
    }

    pub fn start(&mut self) -> Result<()> {
        self.context.start()
    }

    pub fn update(&mut self, message: &[u8]) -> Result<()> {
        self.context.update(message)
    }

    pub fn compute(&mut self, message: &[u8], tag_len: usize, result: &mut [u8]) -> Result<()> {
        self.context.compute(message, tag_len, result)
    }

    /// Borrow the context as its concrete type, if it is one
    pub fn context<T: AuthContext>(&self) -> Option<&T> {
        self.context.as_any().downcast_ref::<T>()
    }

    pub fn context_mut<T: AuthContext>(&mut self) -> Option<&mut T> {
        self.context.as_any_mut().downcast_mut::<T>()
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("type_id", &self.type_id)
            .field(
                "allocator",
                &self.allocator.as_ref().map(|auth_type| auth_type.description()),
            )
            .field("out_len", &self.out_len)
            .field("key_len", &self.key_len)
            .field("prefix_len", &self.prefix_len)
            .finish_non_exhaustive()
    }
}

/// Run the known-answer tests of an authentication type.
///
/// Fails with [`ErrStatus::CantCheck`] when the type has no test cases and
/// with [`ErrStatus::AlgoFail`] when a computed tag differs from the
/// expected one.
pub fn auth_type_self_test(auth_type: &dyn AuthType) -> Result<()> {
    let cases = auth_type.test_cases();
    if cases.is_empty() {
        return Err(ErrStatus::CantCheck);
    }

    for (index, case) in cases.iter().enumerate() {
        let mut auth = auth_type.alloc(case.key.len(), case.tag.len())?;
        let mut tag = vec![0u8; case.tag.len()];

        let computed = auth
            .init(case.key)
            .and_then(|_| auth.start())
            .and_then(|_| auth.compute(case.data, case.tag.len(), &mut tag));
        auth_type.dealloc(auth)?;
        computed?;

        if tag != case.tag {
            warn!(
                "Self-test case {} of '{}' produced a wrong tag",
                index,
                auth_type.description()
            );
            return Err(ErrStatus::AlgoFail);
        }
    }

    debug!(
        "Self-test of '{}' passed ({} cases)",
        auth_type.description(),
        cases.len()
    );
    Ok(())
}
