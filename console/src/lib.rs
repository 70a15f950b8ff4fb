pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod http;
pub mod refresh;
pub mod store;

// Re-export commonly used types
pub use api::MonitoringApi;
pub use app::{App, AppConfig};
pub use config::{ConfigManager, ConsoleConfig};
pub use errors::ConsoleError;
pub use http::{initialize, ApiClient, ClientName, GlobalProperties};
pub use refresh::{AutoRefresher, Dashboard, RefreshHandle};
pub use store::{Flag, FlagStore, FlagsHandle, Truthy, UiFlags};
