//! Sample backend payloads and constants

use serde_json::{json, Value};

/// Common test agent addresses
pub mod agents {
    pub const AGENT_UP: &str = "http://10.0.0.4:8080";
    pub const AGENT_DOWN: &str = "http://10.0.0.5:8080";
    pub const AGENT_UNREACHABLE: &str = "http://10.0.0.6:8080";
}

pub const HOST_NAME: &str = "monitor-01";

/// Body served by `/api/v1/host`
pub fn host_report(host_name: &str) -> Value {
    json!({
        "status": 0,
        "message": "Everything in order.",
        "host": {
            "host_name": host_name,
            "domain_name": "lan",
            "interfaces": [
                {"interface_name": "eth0", "ip": "10.0.0.2", "subnet_mask": "24", "mac": "00:11:22:33:44:55"}
            ]
        },
        "os": {
            "manufacturer": "GNU/Linux",
            "os": "Debian GNU/Linux",
            "version": "12 (bookworm)",
            "arch": "64 bit",
            "uptime": "312 h"
        },
        "cpu": {
            "model": "AMD Ryzen 7 5800X",
            "x64": "true",
            "processes": 214,
            "physical_cores": 8,
            "logical_cores": 16
        },
        "disks": [
            {"name": "/dev/sda1 root", "size": "465 GB", "free": "201.37 GB", "used": "56.7 %"}
        ],
        "memory": {
            "total": "31.29 GB",
            "available": "20.04 GB",
            "used": "35.96 %",
            "physical_memory": [
                {"bank": "BANK 0", "capacity": "16.0 GB", "type": "DDR4"},
                {"bank": "BANK 1", "capacity": "16.0 GB", "type": "DDR4"}
            ]
        }
    })
}

/// Body served by `/api/v1/agents` with one healthy and two failing agents
pub fn agents_overview() -> Value {
    let mut healthy = host_report("agent-01");
    let fields = healthy.as_object_mut().unwrap();
    fields.insert("agent".to_string(), json!(agents::AGENT_UP));
    fields.insert("dialog".to_string(), json!(false));

    json!({
        "agents": [
            healthy,
            {"status": 1, "message": "Host down or unreachable.", "agent": agents::AGENT_DOWN},
            {"status": 2, "message": "Host up, but agent not reachable.", "agent": agents::AGENT_UNREACHABLE}
        ]
    })
}

/// Body served by `/api/v1/agents` when no agents are configured
pub fn agents_not_configured() -> Value {
    json!({
        "status": 1,
        "message": "Agents are not configured! Not retrieving information."
    })
}
