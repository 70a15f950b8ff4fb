// File: console/src/api/mod.rs
pub mod models;
pub mod monitoring;

pub use models::{
    AgentReport, AgentState, AgentsOverview, HostReport, InstanceMode, ModeResponse,
};
pub use monitoring::MonitoringApi;
