//! Initialization for floorsight.

/// Installs the `env_logger` backend for the `log` facade.
///
/// Safe to call more than once; later calls leave the existing logger in
/// place. Filtering follows `RUST_LOG` as usual.
///
/// # Example
///
/// ```no_run
/// floorsight::init();
/// let scene = floorsight::FloorplanScene::default();
/// assert!(scene.cameras().is_empty());
/// ```
pub fn init() {
    if env_logger::try_init().is_ok() {
        log::info!("floorsight initialized");
    }
}
