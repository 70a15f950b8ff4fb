// File: console/src/api/monitoring.rs
use tracing::{debug, info};

use super::models::{AgentsOverview, HostReport, InstanceMode, ModeResponse};
use crate::errors::ConsoleError;
use crate::http::{ApiClient, GlobalProperties};

/// Typed access to the backend endpoints, issued through the scoped clients
#[derive(Debug, Clone)]
pub struct MonitoringApi {
    host: ApiClient,
    agents: ApiClient,
    api: ApiClient,
}

impl MonitoringApi {
    pub fn new(properties: &GlobalProperties) -> Result<Self, ConsoleError> {
        Ok(Self {
            host: properties.host()?.clone(),
            agents: properties.agents()?.clone(),
            api: properties.api()?.clone(),
        })
    }

    /// Whether the backend runs as an agent or as a monitor
    pub async fn mode(&self) -> Result<InstanceMode, ConsoleError> {
        let response: ModeResponse = self.api.get_json("mode").await?;
        let mode = InstanceMode::from(response);
        info!("Backend is running in {:?} mode", mode);
        Ok(mode)
    }

    pub async fn host_information(&self) -> Result<HostReport, ConsoleError> {
        let report: HostReport = self.host.get_json("").await?;
        debug!("Host report for {}: {}", report.host.host_name, report.message);
        Ok(report)
    }

    /// Backends in agent mode refuse this with a 400
    pub async fn agents_information(&self) -> Result<AgentsOverview, ConsoleError> {
        let overview: AgentsOverview = self.agents.get_json("").await?;
        debug!("Received information for {} agents", overview.agents().len());
        Ok(overview)
    }
}
