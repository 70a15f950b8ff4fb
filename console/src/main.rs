// File: console/src/main.rs
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use monitor_console::api::InstanceMode;
use monitor_console::{
    initialize, App, AutoRefresher, ConfigManager, Dashboard, FlagStore, MonitoringApi,
};

fn log_dashboard(dashboard: &Dashboard) {
    info!(
        "Host {} ({} {}): {}",
        dashboard.host.host.host_name,
        dashboard.host.os.os,
        dashboard.host.os.version,
        dashboard.host.message
    );

    match &dashboard.agents {
        Some(overview) if overview.is_configured() => {
            let agents = overview.agents();
            let up = agents.iter().filter(|agent| agent.is_up()).count();
            info!("Agents: {}/{} up", up, agents.len());
            for agent in agents.iter().filter(|agent| !agent.is_up()) {
                warn!("Agent {}: {}", agent.agent, agent.message);
            }
        }
        Some(_) => info!("No agents configured on the backend"),
        None => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("monitor_console=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting monitor console");

    let config_dir = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let config_manager = ConfigManager::new(config_dir).await?;
    let config = config_manager.get_current_config();

    let flags = FlagStore::with_flags(config.initial_flags());
    let mut app = App::new(config.origin()?).with_flags(flags);
    initialize(&mut app)?;
    info!("API clients installed for {}", app.origin());

    let api = MonitoringApi::new(app.global_properties()?)?;
    match api.mode().await {
        Ok(InstanceMode::Agent) => warn!("Backend runs as an agent, agents overview will be unavailable"),
        Ok(InstanceMode::Monitor) => {}
        Err(e) => warn!("Could not determine backend mode: {}", e),
    }

    let _flag_log = app.flags().subscribe(|flags| {
        info!(
            "UI flags: expandHost={} expandAgents={} autorefresh={}",
            flags.expand_host, flags.expand_agents, flags.autorefresh
        );
    });

    let refresher = AutoRefresher::spawn(api, app.flags(), config.refresh_interval());
    let mut updates = refresher.updates();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    warn!("Autorefresh loop ended");
                    break;
                }
                let latest = updates.borrow_and_update().clone();
                if let Some(dashboard) = latest {
                    log_dashboard(&dashboard);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down monitor console");
                break;
            }
        }
    }

    refresher.shutdown().await;
    Ok(())
}
