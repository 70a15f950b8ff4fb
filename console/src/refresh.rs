// File: console/src/refresh.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::api::{AgentsOverview, HostReport, MonitoringApi};
use crate::errors::ConsoleError;
use crate::store::{Flag, FlagStore};

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub host: HostReport,
    /// Absent when the backend refused or failed the agents request
    pub agents: Option<AgentsOverview>,
    pub fetched_at: DateTime<Utc>,
}

/// Fetch host and agent information in one go
pub async fn fetch_dashboard(api: &MonitoringApi) -> Result<Dashboard, ConsoleError> {
    let (host, agents) = tokio::join!(api.host_information(), api.agents_information());

    let agents = match agents {
        Ok(overview) => Some(overview),
        Err(e) => {
            warn!("Agents information unavailable: {}", e);
            None
        }
    };

    Ok(Dashboard {
        host: host?,
        agents,
        fetched_at: Utc::now(),
    })
}

pub struct AutoRefresher;

impl AutoRefresher {
    /// Poll the backend every `period` while the autorefresh flag is set.
    ///
    /// Switching the flag on refreshes right away; `refresh_now` refreshes
    /// regardless of the flag.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn spawn(api: MonitoringApi, store: &FlagStore, period: Duration) -> RefreshHandle {
        let (sender, latest) = watch::channel(None);
        let trigger = Arc::new(Notify::new());
        let task_trigger = trigger.clone();
        let mut flags = store.get_flags();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut autorefresh = flags.get(Flag::Autorefresh);
            let mut cycle = 0u64;

            info!("Autorefresh loop started, every {}ms (currently {})",
                  period.as_millis(), if autorefresh { "on" } else { "off" });

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if !autorefresh {
                            continue;
                        }
                    }
                    _ = task_trigger.notified() => {
                        debug!("Manual refresh requested");
                    }
                    changed = flags.changed() => {
                        let Some(current) = changed else {
                            info!("Flag store dropped, stopping autorefresh loop");
                            break;
                        };
                        let switched_on = current.autorefresh && !autorefresh;
                        autorefresh = current.autorefresh;
                        if !switched_on {
                            continue;
                        }
                        info!("Autorefresh switched on");
                        interval.reset();
                    }
                }

                cycle += 1;
                match fetch_dashboard(&api).await {
                    Ok(dashboard) => {
                        debug!("Refresh #{} completed for {}", cycle, dashboard.host.host.host_name);
                        sender.send_replace(Some(Arc::new(dashboard)));
                    }
                    Err(e) => warn!("Refresh #{} failed: {}", cycle, e),
                }
            }
        });

        RefreshHandle {
            latest,
            trigger,
            task,
        }
    }
}

pub struct RefreshHandle {
    latest: watch::Receiver<Option<Arc<Dashboard>>>,
    trigger: Arc<Notify>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn latest(&self) -> Option<Arc<Dashboard>> {
        self.latest.borrow().clone()
    }

    pub fn updates(&self) -> watch::Receiver<Option<Arc<Dashboard>>> {
        self.latest.clone()
    }

    pub fn refresh_now(&self) {
        self.trigger.notify_one();
    }

    pub async fn shutdown(self) {
        self.task.abort();
        let _ = self.task.await;
    }
}
