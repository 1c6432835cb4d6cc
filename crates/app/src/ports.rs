//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Panel-side ports (`RelayApi`, `Presenter`, `Runtime`) run on a single
//! cooperative UI thread and carry no `Send` bounds. The node-side
//! `RelayDriver` is shared across request handlers and must be `Send + Sync`.

pub mod presenter;
pub mod relay_api;
pub mod relay_driver;
pub mod runtime;

pub use presenter::Presenter;
pub use relay_api::RelayApi;
pub use relay_driver::RelayDriver;
pub use runtime::Runtime;
