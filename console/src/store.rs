// File: console/src/store.rs
//! Shared UI toggle flags
//!
//! One record of booleans shared by every component holding a [`FlagStore`]
//! clone. Writers go through [`FlagStore::set_flag`] or the named setters,
//! which coerce any input to a strict `true`/`false`. Readers hold a
//! [`FlagsHandle`], which always reads the current record and can await the
//! next change.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::errors::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Flag {
    ExpandHost,
    ExpandAgents,
    Autorefresh,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::ExpandHost, Flag::ExpandAgents, Flag::Autorefresh];

    pub fn as_str(self) -> &'static str {
        match self {
            Flag::ExpandHost => "expandHost",
            Flag::ExpandAgents => "expandAgents",
            Flag::Autorefresh => "autorefresh",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flag {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| ConsoleError::Other(format!("Unknown UI flag '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiFlags {
    pub expand_host: bool,
    pub expand_agents: bool,
    pub autorefresh: bool,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            expand_host: false,
            expand_agents: false,
            autorefresh: true,
        }
    }
}

impl UiFlags {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::ExpandHost => self.expand_host,
            Flag::ExpandAgents => self.expand_agents,
            Flag::Autorefresh => self.autorefresh,
        }
    }

    fn slot_mut(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::ExpandHost => &mut self.expand_host,
            Flag::ExpandAgents => &mut self.expand_agents,
            Flag::Autorefresh => &mut self.autorefresh,
        }
    }
}

/// Loose truthiness used when a flag is set from an arbitrary value.
///
/// Zero, NaN, empty strings, `None`, `()` and JSON `null` are falsy.
/// Collections are truthy even when empty.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_truthy())
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V> Truthy for HashMap<K, V> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// The shared flag record. Clones write to and read from the same record.
#[derive(Debug, Clone)]
pub struct FlagStore {
    sender: Arc<watch::Sender<UiFlags>>,
}

impl Default for FlagStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagStore {
    pub fn new() -> Self {
        Self::with_flags(UiFlags::default())
    }

    pub fn with_flags(initial: UiFlags) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Store the truthiness of `value` in `flag`. Other flags are untouched.
    /// Subscribers are only notified when the stored value actually changes.
    pub fn set_flag(&self, flag: Flag, value: impl Truthy) {
        let value = value.is_truthy();
        let changed = self.sender.send_if_modified(|flags| {
            let slot = flags.slot_mut(flag);
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        });

        if changed {
            debug!("UI flag {} set to {}", flag, value);
        }
    }

    pub fn set_expand_host(&self, value: impl Truthy) {
        self.set_flag(Flag::ExpandHost, value);
    }

    pub fn set_expand_agents(&self, value: impl Truthy) {
        self.set_flag(Flag::ExpandAgents, value);
    }

    pub fn set_autorefresh(&self, value: impl Truthy) {
        self.set_flag(Flag::Autorefresh, value);
    }

    /// Live handle to the record, not a copy
    pub fn get_flags(&self) -> FlagsHandle {
        FlagsHandle {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn snapshot(&self) -> UiFlags {
        *self.sender.borrow()
    }

    /// Run `on_change` with the new record after every change.
    /// The task ends once every clone of the store is dropped.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn subscribe<F>(&self, mut on_change: F) -> JoinHandle<()>
    where
        F: FnMut(UiFlags) + Send + 'static,
    {
        let mut handle = self.get_flags();
        tokio::spawn(async move {
            while let Some(flags) = handle.changed().await {
                on_change(flags);
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct FlagsHandle {
    receiver: watch::Receiver<UiFlags>,
}

impl FlagsHandle {
    pub fn get(&self, flag: Flag) -> bool {
        self.receiver.borrow().get(flag)
    }

    pub fn snapshot(&self) -> UiFlags {
        *self.receiver.borrow()
    }

    /// Whether a write landed since this handle last waited for one
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Wait for the next change. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<UiFlags> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}
