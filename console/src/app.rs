// File: console/src/app.rs
use reqwest::Url;

use crate::errors::{ConsoleError, RegistryError};
use crate::http::{ApiClient, ClientName, GlobalProperties};
use crate::store::FlagStore;

/// Shared configuration slot of the running application
#[derive(Debug, Default)]
pub struct AppConfig {
    pub global_properties: Option<GlobalProperties>,
}

/// Handle to the running console, passed to every component that needs
/// the API clients or the UI flags.
#[derive(Debug)]
pub struct App {
    origin: Url,
    pub config: AppConfig,
    flags: FlagStore,
}

impl App {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            config: AppConfig {
                global_properties: Some(GlobalProperties::new()),
            },
            flags: FlagStore::new(),
        }
    }

    /// An app that exposes no global properties slot
    pub fn detached(origin: Url) -> Self {
        Self {
            origin,
            config: AppConfig::default(),
            flags: FlagStore::new(),
        }
    }

    pub fn with_flags(mut self, flags: FlagStore) -> Self {
        self.flags = flags;
        self
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    pub fn global_properties(&self) -> Result<&GlobalProperties, ConsoleError> {
        self.config
            .global_properties
            .as_ref()
            .ok_or_else(|| RegistryError::MissingGlobalProperties.into())
    }

    pub fn client(&self, name: ClientName) -> Result<&ApiClient, ConsoleError> {
        self.global_properties()?.client(name)
    }
}
