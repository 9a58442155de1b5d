use std::io;

/// Reads `errno` for the calling thread.
pub fn err_no() -> i32 {
    // Constructed from last_os_error, so raw_os_error is always populated.
    io::Error::last_os_error().raw_os_error().unwrap_or_default()
}
