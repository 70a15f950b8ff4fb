//! Fixed values shared by the client registry, the flag store and the refresher
//!
//! The backend groups its resources under `/api/v1`; every caller in the
//! console must reach them through exactly these base paths.

use std::time::Duration;

/// Base paths of the scoped clients
pub mod paths {
    /// Host information of the instance the console talks to
    pub const HOST: &str = "/api/v1/host";

    /// Aggregated information about every configured agent
    pub const AGENTS: &str = "/api/v1/agents";

    /// Generic API root (`mode` and friends)
    pub const API: &str = "/api/v1/";
}

/// Names the clients are published under in the global properties
pub mod properties {
    pub const RAW: &str = "$axios";
    pub const HOST: &str = "$host";
    pub const AGENTS: &str = "$agents";
    pub const API: &str = "$api";
}

/// Header values applied to every scoped client
pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const JSON: &str = "application/json";
}

/// Autorefresh timing
pub mod refresh {
    use super::Duration;

    /// Matches the backend's default polling rate of 5000 ms
    pub const DEFAULT_INTERVAL_MS: u64 = 5000;

    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(DEFAULT_INTERVAL_MS);
}
