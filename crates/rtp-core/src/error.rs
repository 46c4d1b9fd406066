//! Status codes reported by the SRTP host and its auth plug-ins
//!
//! The host signals failure through a numeric status enumeration rather
//! than unwinding. `ErrStatus` carries the failure values with their wire
//! numbering; success (`0`) is represented by `Ok(_)`.

use thiserror::Error;

/// Result type alias for SRTP operations
pub type Result<T> = std::result::Result<T, ErrStatus>;

/// Numeric status used by the host for success
pub const STATUS_OK: i32 = 0;

/// Failure statuses of the SRTP host
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrStatus {
    #[error("unspecified failure")]
    Fail = 1,
    #[error("unsupported parameter")]
    BadParam = 2,
    #[error("couldn't allocate memory")]
    AllocFail = 3,
    #[error("couldn't deallocate properly")]
    DeallocFail = 4,
    #[error("couldn't initialize")]
    InitFail = 5,
    #[error("can't process as much data as requested")]
    Terminus = 6,
    #[error("authentication failure")]
    AuthFail = 7,
    #[error("cipher failure")]
    CipherFail = 8,
    #[error("replay check failed (bad index)")]
    ReplayFail = 9,
    #[error("replay check failed (index too old)")]
    ReplayOld = 10,
    #[error("algorithm failed test routine")]
    AlgoFail = 11,
    #[error("unsupported operation")]
    NoSuchOp = 12,
    #[error("no appropriate context found")]
    NoCtx = 13,
    #[error("unable to perform desired validation")]
    CantCheck = 14,
    #[error("can't use key any more")]
    KeyExpired = 15,
    #[error("error in use of socket")]
    SocketErr = 16,
    #[error("error in use POSIX signals")]
    SignalErr = 17,
    #[error("nonce check failed")]
    NonceBad = 18,
    #[error("couldn't read data")]
    ReadFail = 19,
    #[error("couldn't write data")]
    WriteFail = 20,
    #[error("error parsing data")]
    ParseErr = 21,
    #[error("error encoding data")]
    EncodeErr = 22,
    #[error("error while using semaphores")]
    SemaphoreErr = 23,
    #[error("error while using pfkey")]
    PfkeyErr = 24,
}

impl ErrStatus {
    const ALL: [ErrStatus; 24] = [
        Self::Fail,
        Self::BadParam,
        Self::AllocFail,
        Self::DeallocFail,
        Self::InitFail,
        Self::Terminus,
        Self::AuthFail,
        Self::CipherFail,
        Self::ReplayFail,
        Self::ReplayOld,
        Self::AlgoFail,
        Self::NoSuchOp,
        Self::NoCtx,
        Self::CantCheck,
        Self::KeyExpired,
        Self::SocketErr,
        Self::SignalErr,
        Self::NonceBad,
        Self::ReadFail,
        Self::WriteFail,
        Self::ParseErr,
        Self::EncodeErr,
        Self::SemaphoreErr,
        Self::PfkeyErr,
    ];

    /// Numeric status code as the host reports it
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Map a numeric host status back to a failure.
    ///
    /// Returns `None` for success and for codes outside the enumeration.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.code() == code)
    }
}

/// Collapse a result into the host's numeric status code
pub fn status_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(status) => status.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_numbering() {
        assert_eq!(ErrStatus::Fail.code(), 1);
        assert_eq!(ErrStatus::BadParam.code(), 2);
        assert_eq!(ErrStatus::AlgoFail.code(), 11);
        assert_eq!(ErrStatus::PfkeyErr.code(), 24);
    }

    #[test]
    fn test_from_code() {
        for status in ErrStatus::ALL {
            assert_eq!(ErrStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ErrStatus::from_code(STATUS_OK), None);
        assert_eq!(ErrStatus::from_code(25), None);
        assert_eq!(ErrStatus::from_code(-1), None);
    }

    #[test]
    fn test_status_code() {
        assert_eq!(status_code(&Ok::<(), ErrStatus>(())), 0);
        assert_eq!(status_code::<()>(&Err(ErrStatus::DeallocFail)), 4);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ErrStatus::BadParam.to_string(), "unsupported parameter");
    }
}
