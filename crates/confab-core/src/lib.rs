pub mod composer;
pub mod constants;
pub mod emoji;
pub mod grouping;
pub mod models;
pub mod runtime;
pub mod seed;
pub mod store;
pub mod thread;
pub mod tracing_setup;

pub use runtime::ChatCore;
