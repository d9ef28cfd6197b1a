//! C bindings for pairdist.
//!
//! Exposes the pairwise Euclidean distance kernel as a C shared library
//! (`get_distance`) for hosts that load native plugins, e.g. Python `ctypes`.
//! The generated header lives in `include/get_distance.h`.

#![allow(non_snake_case)]
#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::CStr;
use std::os::raw::{c_char, c_double, c_int};
use std::slice;

use fastPairdist::prelude::par_euclidean_into;
use pairdist::prelude::{Distance, DistanceError, euclidean_into};
use tracing::{Level, debug, warn};

/// Success.
pub const PAIRDIST_OK: c_int = 0;
/// A coordinate or output pointer was null while `len > 0`.
pub const PAIRDIST_ERR_NULL_POINTER: c_int = -1;
/// `len` was negative.
pub const PAIRDIST_ERR_NEGATIVE_LENGTH: c_int = -2;
/// A coordinate was NaN or infinite (checked entry point only).
pub const PAIRDIST_ERR_NON_FINITE: c_int = -3;
/// Any other rejection by the distance kernel.
pub const PAIRDIST_ERR_INVALID_INPUT: c_int = -4;

type DistanceFn = fn(&[f64], &[f64], &[f64], &[f64], &mut [f64]) -> Result<(), DistanceError>;

/// Sequential kernel that rejects non-finite coordinates.
fn euclidean_finite_into(
    x1: &[f64],
    y1: &[f64],
    x2: &[f64],
    y2: &[f64],
    dist: &mut [f64],
) -> Result<(), DistanceError> {
    Distance::new()
        .require_finite(true)
        .build()?
        .compute_into(x1, y1, x2, y2, dist)
}

/// Map a library error to a C status code.
pub fn status_from_error(err: &DistanceError) -> c_int {
    match err {
        DistanceError::InvalidNumericValue(_) => PAIRDIST_ERR_NON_FINITE,
        DistanceError::InvalidInput(_)
        | DistanceError::MismatchedInputs { .. }
        | DistanceError::MismatchedOutput { .. }
        | DistanceError::InvalidChunkSize { .. }
        | DistanceError::DuplicateParameter { .. } => PAIRDIST_ERR_INVALID_INPUT,
    }
}

/// Shared argument handling for every distance entry point.
unsafe fn run_distance(
    entry: &'static str,
    pass: DistanceFn,
    x1: *const c_double,
    y1: *const c_double,
    x2: *const c_double,
    y2: *const c_double,
    dist: *mut c_double,
    len: c_int,
) -> c_int {
    if len == 0 {
        debug!(entry, len, "empty input, nothing to do");
        return PAIRDIST_OK;
    }
    if len < 0 {
        warn!(entry, len, "rejected negative length");
        return PAIRDIST_ERR_NEGATIVE_LENGTH;
    }
    if x1.is_null() || y1.is_null() || x2.is_null() || y2.is_null() || dist.is_null() {
        warn!(entry, len, "rejected null pointer");
        return PAIRDIST_ERR_NULL_POINTER;
    }

    let n = len as usize;
    let x1 = slice::from_raw_parts(x1, n);
    let y1 = slice::from_raw_parts(y1, n);
    let x2 = slice::from_raw_parts(x2, n);
    let y2 = slice::from_raw_parts(y2, n);
    let dist = slice::from_raw_parts_mut(dist, n);

    match pass(x1, y1, x2, y2, dist) {
        Ok(()) => {
            debug!(entry, len, "computed distances");
            PAIRDIST_OK
        }
        Err(err) => {
            warn!(entry, len, error = %err, "rejected input");
            status_from_error(&err)
        }
    }
}

/// Compute `dist[i] = sqrt((x2[i]-x1[i])^2 + (y2[i]-y1[i])^2)` for `i < len`.
///
/// Returns `PAIRDIST_OK` or a negative status code. Nothing is written to
/// `dist` when the call is rejected.
///
/// # Safety
/// For `len > 0`, each pointer must reference `len` valid doubles and `dist`
/// must not overlap any input array.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn getDistance(
    x1: *const c_double,
    y1: *const c_double,
    x2: *const c_double,
    y2: *const c_double,
    dist: *mut c_double,
    len: c_int,
) -> c_int {
    run_distance("getDistance", euclidean_into::<f64>, x1, y1, x2, y2, dist, len)
}

/// Same as [`getDistance`], split across the rayon thread pool.
///
/// # Safety
/// Same requirements as [`getDistance`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn getDistanceParallel(
    x1: *const c_double,
    y1: *const c_double,
    x2: *const c_double,
    y2: *const c_double,
    dist: *mut c_double,
    len: c_int,
) -> c_int {
    run_distance(
        "getDistanceParallel",
        par_euclidean_into::<f64, [f64]>,
        x1,
        y1,
        x2,
        y2,
        dist,
        len,
    )
}

/// Same as [`getDistance`], but returns `PAIRDIST_ERR_NON_FINITE` if any
/// coordinate is NaN or infinite.
///
/// # Safety
/// Same requirements as [`getDistance`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn getDistanceChecked(
    x1: *const c_double,
    y1: *const c_double,
    x2: *const c_double,
    y2: *const c_double,
    dist: *mut c_double,
    len: c_int,
) -> c_int {
    run_distance(
        "getDistanceChecked",
        euclidean_finite_into,
        x1,
        y1,
        x2,
        y2,
        dist,
        len,
    )
}

/// Static description of a status code. The string must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn pairdist_status_message(status: c_int) -> *const c_char {
    let msg: &'static CStr = match status {
        PAIRDIST_OK => c"ok",
        PAIRDIST_ERR_NULL_POINTER => c"null pointer",
        PAIRDIST_ERR_NEGATIVE_LENGTH => c"negative length",
        PAIRDIST_ERR_NON_FINITE => c"non-finite coordinate",
        PAIRDIST_ERR_INVALID_INPUT => c"invalid input",
        _ => c"unknown status",
    };
    msg.as_ptr()
}

/// Install a stderr log subscriber.
///
/// `verbose != 0` logs every call at DEBUG, otherwise only rejected calls
/// are reported. Returns `1` if a global subscriber was already set.
#[unsafe(no_mangle)]
pub extern "C" fn pairdist_enable_logging(verbose: c_int) -> c_int {
    let level = if verbose != 0 {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_max_level(level)
        .try_init();

    match installed {
        Ok(()) => PAIRDIST_OK,
        Err(_) => 1,
    }
}
