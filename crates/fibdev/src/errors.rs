//! Error handling and exit codes.

use fibdev_core::calculator::FibError;
use fibdev_core::constants::exit_codes;

/// Map a device error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Busy => exit_codes::ERROR_BUSY,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for an application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
