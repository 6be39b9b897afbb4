//! Logging setup.

/// Installs `env_logger` as the `log` backend.
///
/// Respects `RUST_LOG`. Safe to call more than once; later calls do nothing.
///
/// # Example
///
/// ```no_run
/// meshdata::init_logging();
/// meshdata::init_logging(); // no-op
/// ```
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("meshdata logging initialized");
    }
}
