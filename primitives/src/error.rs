//! Error types for the Phoenix contract guest.
//!
//! Status codes are defined in ABI.md §5 (normative).

use core::fmt;

use thiserror::Error;

/// Status codes returned by the lifecycle exports (ABI.md §5, normative).
///
/// `instantiate`, `execute`, and `query` return `i32`. `0` = OK, non-zero
/// = error. These repr values MUST match ABI.md exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusCode {
    Ok = 0,
    OutOfMemory = 1,
    BadPointer = 2,
    ExecutionFailed = 3,
    Internal = 4,
}

impl StatusCode {
    /// Convert from an i32 status code read back by the host.
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::OutOfMemory),
            2 => Some(Self::BadPointer),
            3 => Some(Self::ExecutionFailed),
            4 => Some(Self::Internal),
            _ => None,
        }
    }

    /// Return the i32 representation of this status code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns true if this is the `Ok` variant.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::OutOfMemory => write!(f, "ERR_OUT_OF_MEMORY"),
            Self::BadPointer => write!(f, "ERR_BAD_POINTER"),
            Self::ExecutionFailed => write!(f, "ERR_EXECUTION_FAILED"),
            Self::Internal => write!(f, "ERR_INTERNAL"),
        }
    }
}

/// Failures of the heap arena (ABI.md §4).
///
/// The `allocate` export collapses all variants to the 0 sentinel; the
/// `deallocate` export discards `InvalidOffset` because its signature
/// returns void and must never trap.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// No gap between live regions can hold the request.
    #[error("region of {requested} bytes does not fit ({free} bytes free)")]
    OutOfMemory { requested: u32, free: u32 },

    /// The live-region index is at capacity.
    #[error("allocation index full ({max} live regions)")]
    IndexFull { max: usize },

    /// The offset is not the start of a live region (double free included).
    #[error("offset {offset:#x} is not the start of a live region")]
    InvalidOffset { offset: u32 },

    /// Aligning the requested size overflowed the address range.
    #[error("requested size overflows the heap address range")]
    SizeOverflow,
}

/// Guest-level error type covering every path a lifecycle export can fail on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuestError {
    /// Heap arena failure.
    #[error(transparent)]
    Alloc(#[from] AllocError),

    /// Domain-level contract failure.
    #[error("contract execution failed: {0}")]
    Execution(&'static str),
}

impl GuestError {
    /// Map to the ABI status code the host receives (ABI.md §5).
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Alloc(AllocError::InvalidOffset { .. }) => StatusCode::BadPointer,
            Self::Alloc(_) => StatusCode::OutOfMemory,
            Self::Execution(_) => StatusCode::ExecutionFailed,
        }
    }
}

/// Convenience result type for guest entry points.
pub type GuestResult<T> = core::result::Result<T, GuestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_repr_values() {
        // These MUST match ABI.md §5 exactly
        assert_eq!(StatusCode::Ok as i32, 0);
        assert_eq!(StatusCode::OutOfMemory as i32, 1);
        assert_eq!(StatusCode::BadPointer as i32, 2);
        assert_eq!(StatusCode::ExecutionFailed as i32, 3);
        assert_eq!(StatusCode::Internal as i32, 4);
    }

    #[test]
    fn test_status_code_from_i32_roundtrip() {
        for code in 0..=4 {
            let sc = StatusCode::from_i32(code).unwrap();
            assert_eq!(sc.as_i32(), code);
        }
    }

    #[test]
    fn test_status_code_from_i32_invalid() {
        assert_eq!(StatusCode::from_i32(-1), None);
        assert_eq!(StatusCode::from_i32(5), None);
        assert_eq!(StatusCode::from_i32(255), None);
    }

    #[test]
    fn test_status_code_is_ok() {
        assert!(StatusCode::Ok.is_ok());
        assert!(!StatusCode::BadPointer.is_ok());
    }

    #[test]
    fn test_alloc_error_status_mapping() {
        let oom: GuestError = AllocError::OutOfMemory {
            requested: 128,
            free: 64,
        }
        .into();
        assert_eq!(oom.status(), StatusCode::OutOfMemory);

        let full: GuestError = AllocError::IndexFull { max: 128 }.into();
        assert_eq!(full.status(), StatusCode::OutOfMemory);

        let overflow: GuestError = AllocError::SizeOverflow.into();
        assert_eq!(overflow.status(), StatusCode::OutOfMemory);

        let bad: GuestError = AllocError::InvalidOffset { offset: 0x40 }.into();
        assert_eq!(bad.status(), StatusCode::BadPointer);
    }

    #[test]
    fn test_execution_error_status_mapping() {
        let err = GuestError::Execution("unauthorized");
        assert_eq!(err.status(), StatusCode::ExecutionFailed);
    }

    #[test]
    fn test_error_display() {
        let err = AllocError::OutOfMemory {
            requested: 4096,
            free: 256,
        };
        let s = std::format!("{}", err);
        assert!(s.contains("4096"));
        assert!(s.contains("256"));

        let s = std::format!("{}", StatusCode::BadPointer);
        assert_eq!(s, "ERR_BAD_POINTER");
    }
}
