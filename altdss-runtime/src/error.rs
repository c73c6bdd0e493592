// Error types for the altdss runtime.

use std::ffi::NulError;
use std::path::PathBuf;

use thiserror::Error;

/// Rich error type for every binding operation.
#[derive(Debug, Error)]
pub enum DssError {
    /// Fault reported by the engine through the context's error channel.
    #[error("(#{code}) {description}")]
    Engine { code: i32, description: String },

    /// A complex scalar was requested but the scratch buffer did not hold
    /// exactly two values.
    #[error("invalid data for a complex number (got {count} values)")]
    InvalidComplex { count: usize },

    /// A string passed to the engine contained an interior NUL byte.
    #[error("string contains an interior NUL byte at position {position}")]
    InteriorNul { position: usize },

    /// The engine returned a null handle when asked for a new context.
    #[error("could not create a new DSS context")]
    ContextAllocation,

    /// The loaded engine library does not export this entry point.
    #[error("entry point not available in the loaded engine: {0}")]
    MissingEntryPoint(&'static str),

    /// The engine library could not be opened.
    #[error("failed to load DSS engine library {path}: {source}")]
    Library {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The engine returned an integer outside the range of a typed enum.
    #[error("unknown {kind} value: {value}")]
    UnknownEnumValue { kind: &'static str, value: i32 },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A JSON export from the engine did not parse.
    #[error("malformed JSON from the engine: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the runtime and the facade.
pub type DssResult<T> = Result<T, DssError>;

impl From<NulError> for DssError {
    fn from(err: NulError) -> Self {
        DssError::InteriorNul {
            position: err.nul_position(),
        }
    }
}

impl DssError {
    /// Engine error number, if this is an engine fault.
    pub fn engine_code(&self) -> Option<i32> {
        match self {
            DssError::Engine { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Read-and-clear an error-number cell.
///
/// A zero cell maps to `Ok(())`. Otherwise the description is fetched through
/// `describe`, the cell is reset to zero and the fault is returned.
///
/// # Safety
/// `cell` must be null or point to a live, writable `i32`.
pub unsafe fn take_error(cell: *mut i32, describe: impl FnOnce() -> String) -> DssResult<()> {
    if cell.is_null() {
        return Ok(());
    }
    let code = unsafe { cell.read() };
    if code == 0 {
        return Ok(());
    }
    let description = describe();
    unsafe { cell.write(0) };
    Err(DssError::Engine { code, description })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cell_is_ok() {
        let mut cell = 0i32;
        assert!(unsafe { take_error(&mut cell, || unreachable!()) }.is_ok());
    }

    #[test]
    fn nonzero_cell_is_reported_then_cleared() {
        let mut cell = 302i32;
        let err = unsafe { take_error(&mut cell, || "Line \"x\" not found".into()) }.unwrap_err();
        assert_eq!(err.engine_code(), Some(302));
        assert_eq!(err.to_string(), "(#302) Line \"x\" not found");
        assert_eq!(cell, 0);
        assert!(unsafe { take_error(&mut cell, || unreachable!()) }.is_ok());
    }

    #[test]
    fn null_cell_is_ok() {
        assert!(unsafe { take_error(std::ptr::null_mut(), || unreachable!()) }.is_ok());
    }

    #[test]
    fn nul_error_keeps_position() {
        let err: DssError = std::ffi::CString::new("ab\0c").unwrap_err().into();
        assert!(matches!(err, DssError::InteriorNul { position: 2 }));
    }

    #[test]
    fn display_formats_are_human_readable() {
        assert_eq!(
            DssError::InvalidComplex { count: 3 }.to_string(),
            "invalid data for a complex number (got 3 values)"
        );
        assert_eq!(
            DssError::MissingEntryPoint("lines.Get_Name").to_string(),
            "entry point not available in the loaded engine: lines.Get_Name"
        );
    }
}
