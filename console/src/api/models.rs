// File: console/src/api/models.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeResponse {
    /// `true` when the backend runs as an agent
    pub mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceMode {
    Agent,
    Monitor,
}

impl From<ModeResponse> for InstanceMode {
    fn from(response: ModeResponse) -> Self {
        if response.mode {
            InstanceMode::Agent
        } else {
            InstanceMode::Monitor
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub interface_name: String,
    pub ip: String,
    pub subnet_mask: String,
    pub mac: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostSection {
    pub host_name: String,
    pub domain_name: String,
    #[serde(default)]
    pub interfaces: Vec<NetworkInterface>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsSection {
    pub manufacturer: String,
    pub os: String,
    pub version: String,
    pub arch: String,
    pub uptime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuSection {
    pub model: String,
    pub x64: String,
    pub processes: u64,
    pub physical_cores: u32,
    pub logical_cores: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskSection {
    pub name: String,
    pub size: String,
    pub free: String,
    pub used: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryBank {
    pub bank: String,
    pub capacity: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySection {
    pub total: String,
    pub available: String,
    pub used: String,
    #[serde(default)]
    pub physical_memory: Vec<MemoryBank>,
}

/// Everything the backend knows about the machine it runs on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostReport {
    pub status: i64,
    pub message: String,
    pub host: HostSection,
    pub os: OsSection,
    pub cpu: CpuSection,
    #[serde(default)]
    pub disks: Vec<DiskSection>,
    pub memory: MemorySection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    Up,
    HostDown,
    AgentUnreachable,
    Unknown(i64),
}

impl From<i64> for AgentState {
    fn from(status: i64) -> Self {
        match status {
            0 => AgentState::Up,
            1 => AgentState::HostDown,
            2 => AgentState::AgentUnreachable,
            other => AgentState::Unknown(other),
        }
    }
}

/// One agent entry. Down or unreachable agents only carry status, message and address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReport {
    pub agent: String,
    pub status: i64,
    pub message: String,
    #[serde(default)]
    pub dialog: bool,
    pub host: Option<HostSection>,
    pub os: Option<OsSection>,
    pub cpu: Option<CpuSection>,
    #[serde(default)]
    pub disks: Vec<DiskSection>,
    pub memory: Option<MemorySection>,
}

impl AgentReport {
    pub fn state(&self) -> AgentState {
        AgentState::from(self.status)
    }

    pub fn is_up(&self) -> bool {
        self.state() == AgentState::Up
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgentsOverview {
    Reports { agents: Vec<AgentReport> },
    NotConfigured { status: i64, message: String },
}

impl AgentsOverview {
    pub fn agents(&self) -> &[AgentReport] {
        match self {
            AgentsOverview::Reports { agents } => agents,
            AgentsOverview::NotConfigured { .. } => &[],
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, AgentsOverview::Reports { .. })
    }
}
