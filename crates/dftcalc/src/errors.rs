//! Error handling and exit codes.

use dftcalc_core::constants::exit_codes;
use dftcalc_core::TransformError;

use crate::input::InputError;

/// Exit code for a transform error.
pub fn handle_error(err: &TransformError) -> i32 {
    match err {
        TransformError::Rejected(_) => exit_codes::ERROR_REJECTED,
        TransformError::UnknownTransform(_) => exit_codes::ERROR_CONFIG,
        TransformError::Engine(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error surfaced by `app::run`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(transform) = err.downcast_ref::<TransformError>() {
        handle_error(transform)
    } else if err.downcast_ref::<InputError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// [`exit_code`] narrowed to a process exit status.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    u8::try_from(exit_code(err)).unwrap_or(1)
}
