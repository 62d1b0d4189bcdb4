use geometry_core::DomainError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code passed across the FFI boundary
/// - `msg()` - Returns the error message for diagnostics
pub(crate) trait GeometryError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> GeometryErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `GeometryError` for FFI failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultGeometryError {
    code: GeometryErrorCode,
    msg: String,
}

impl DefaultGeometryError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_point"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: GeometryErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<DomainError> for DefaultGeometryError {
    fn from(error: DomainError) -> Self {
        let code = match error {
            DomainError::NonFinite { .. } => GeometryErrorCode::NonFinite,
            DomainError::OutOfRange { .. } => GeometryErrorCode::OutOfRange,
            DomainError::ZeroDivisor => GeometryErrorCode::ZeroDivisor,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl GeometryError for DefaultGeometryError {
    fn code(&self) -> GeometryErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by geometry functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// An input was NaN or infinite.
    NonFinite = 2,

    /// A distance does not fit in a signed 64-bit nanometer count.
    OutOfRange = 3,

    /// A divisor was zero.
    ZeroDivisor = 4,
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The `CString` lives here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, GeometryErrorCode)> = const { RefCell::new((None, GeometryErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, GeometryErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, GeometryErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made.
///
/// # Lifetime
/// The returned pointer is valid until the next geometry FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// int64_t nm = 0;
/// if (geometry_distance_new(NAN, Meter, &nm) != Ok) {
///     printf("distance rejected: %s\n", geometry_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn geometry_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `GeometryErrorCode::Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn geometry_get_last_error_code() -> GeometryErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
