/// Global Tokio runtime for async HTTP operations
///
/// egui's update loop runs on the main thread, but reqwest requires a
/// tokio runtime. This static runtime bridges the two: `main` enters it
/// before handing control to eframe, so `tokio::spawn` works from UI
/// handlers, and results come back over the app's event channel.
///
/// Usage:
/// ```rust,no_run
/// use terminal::utils::runtime::TOKIO_RT;
///
/// let _guard = TOKIO_RT.enter();
/// // tokio::spawn(...) is now valid on this thread
/// ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
