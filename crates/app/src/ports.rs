//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the browser.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The panel runs on a single-threaded event loop, so no port requires
//! `Send`; futures returned by the browser adapter hold JS handles.

pub mod browser;
pub mod device;
pub mod scheduler;
pub mod view;

pub use browser::{Dialogs, Navigator, UploadControl};
pub use device::DeviceApi;
pub use scheduler::{LocalTask, MAX_TIMER_MS, Scheduler, timer_millis};
pub use view::{FormView, RelayView};
