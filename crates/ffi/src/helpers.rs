use crate::error::{with_last_error_mut, DefaultGeometryError, GeometryError, GeometryErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl GeometryError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = GeometryErrorCode::Ok;
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl GeometryError) -> GeometryErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the outcome of a fallible call: errors are stored, success clears the slot.
pub(crate) fn track_result<T>(result: Result<T, DefaultGeometryError>) -> Result<T, GeometryErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Write a tracked result through an out pointer.
///
/// # Safety
/// `out` must be null or valid for writes of `T`.
pub(crate) unsafe fn write_result<T>(
    out: *mut T,
    out_name: &str,
    result: Result<T, DefaultGeometryError>,
) -> GeometryErrorCode {
    if out.is_null() {
        return track_error(&DefaultGeometryError::null_pointer(out_name));
    }

    match track_result(result) {
        Ok(value) => {
            unsafe {
                *out = value;
            }
            GeometryErrorCode::Ok
        }
        Err(code) => code,
    }
}
