//! Null authentication
//!
//! Produces no tag. Used by streams that only encrypt.

use std::any::Any;

use super::auth::{Auth, AuthContext, AuthTestCase, AuthType};
use super::{AuthTypeId, SRTP_NULL_AUTH};
use crate::error::{ErrStatus, Result};

static NULL_AUTH_TEST_CASES: [AuthTestCase; 1] = [AuthTestCase {
    key: &[],
    data: &[0xaa; 8],
    tag: &[],
}];

/// Authentication type that accepts everything and writes nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAuth;

#[derive(Debug, Default)]
struct NullAuthContext;

impl AuthContext for NullAuthContext {
    fn init(&mut self, _key: &[u8]) -> Result<()> {
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, _message: &[u8]) -> Result<()> {
        Ok(())
    }

    fn compute(&mut self, _message: &[u8], _tag_len: usize, _result: &mut [u8]) -> Result<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl AuthType for NullAuth {
    fn id(&self) -> AuthTypeId {
        SRTP_NULL_AUTH
    }

    fn description(&self) -> &'static str {
        "null authentication function"
    }

    fn alloc(&self, key_len: usize, out_len: usize) -> Result<Auth> {
        Ok(Auth::new(
            SRTP_NULL_AUTH,
            Box::new(NullAuthContext),
            key_len,
            out_len,
        ))
    }

    fn dealloc(&self, auth: Auth) -> Result<()> {
        if auth.context::<NullAuthContext>().is_none() {
            return Err(ErrStatus::DeallocFail);
        }
        Ok(())
    }

    fn test_cases(&self) -> &[AuthTestCase] {
        &NULL_AUTH_TEST_CASES
    }
}
