pub mod config;
pub mod reconciler;
pub mod render;
pub mod scene;
pub mod sink;
pub mod telemetry;


pub use config::{validate_name, ClientConfig, ConfigError};
pub use reconciler::Reconciler;
pub use scene::{ElementId, Interface};
pub use sink::{ActionSink, SendError};
