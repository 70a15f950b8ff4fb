// File: console/src/http/registry.rs
use std::collections::BTreeMap;
use tracing::info;

use super::client::{ApiClient, ClientDescriptor, ClientName};
use crate::app::App;
use crate::errors::{ConsoleError, RegistryError};

/// Clients published to every component, keyed by property name
#[derive(Debug, Clone, Default)]
pub struct GlobalProperties {
    entries: BTreeMap<&'static str, ApiClient>,
}

impl GlobalProperties {
    pub fn new() -> Self {
        Self::default()
    }

    fn install(&mut self, client: ApiClient) {
        self.entries.insert(client.defaults().name().property(), client);
    }

    pub fn get(&self, property: &str) -> Option<&ApiClient> {
        self.entries.get(property)
    }

    pub fn client(&self, name: ClientName) -> Result<&ApiClient, ConsoleError> {
        self.get(name.property()).ok_or_else(|| {
            RegistryError::NotInitialized {
                property: name.property().to_string(),
            }
            .into()
        })
    }

    pub fn raw(&self) -> Result<&ApiClient, ConsoleError> {
        self.client(ClientName::Raw)
    }

    pub fn host(&self) -> Result<&ApiClient, ConsoleError> {
        self.client(ClientName::Host)
    }

    pub fn agents(&self) -> Result<&ApiClient, ConsoleError> {
        self.client(ClientName::Agents)
    }

    pub fn api(&self) -> Result<&ApiClient, ConsoleError> {
        self.client(ClientName::Api)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the raw client and the three scoped clients and publish them on the app.
///
/// Running it again replaces the four entries. An app without a global
/// properties slot is an integration error and fails immediately.
pub fn initialize(app: &mut App) -> Result<(), ConsoleError> {
    let origin = app.origin().clone();

    let mut clients = Vec::with_capacity(ClientName::ALL.len());
    for name in ClientName::ALL {
        clients.push(ApiClient::new(ClientDescriptor::for_client(name), origin.clone())?);
    }

    let properties = app
        .config
        .global_properties
        .as_mut()
        .ok_or(RegistryError::MissingGlobalProperties)?;

    for client in clients {
        properties.install(client);
    }

    info!("Installed {} API clients against {}", properties.len(), origin);
    Ok(())
}
