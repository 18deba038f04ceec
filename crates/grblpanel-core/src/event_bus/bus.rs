//! Publish/subscribe hub.
//!
//! A dialog publishes on the bus handed to it by the owning application, so
//! two dialogs (or two tests) never see each other's events. Handlers run in
//! the order they subscribed, on the publishing thread, outside any lock: a
//! handler may publish or subscribe again without deadlocking.

use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = self.0.simple().to_string();
        write!(f, "subscription-{}", &id[..8])
    }
}

/// Which events a handler wants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Filter accepting a single category
    pub fn only(category: EventCategory) -> Self {
        Self::Categories(vec![category])
    }

    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            Self::All => true,
            Self::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type Handler = Arc<dyn Fn(AppEvent) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBusConfig {
    /// Buffered events per async receiver
    pub channel_capacity: usize,
    /// Number of published events kept for [`EventBus::history`]; 0 keeps none
    pub history_limit: usize,
}

impl EventBusConfig {
    /// Configuration that keeps the last `limit` events
    pub fn recording(limit: usize) -> Self {
        Self {
            history_limit: limit,
            ..Self::default()
        }
    }
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
            history_limit: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventBusError {
    /// Nothing was subscribed or receiving when the event was published
    #[error("No active subscribers")]
    NoSubscribers,
}

pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    handlers: RwLock<Vec<(SubscriptionId, EventFilter, Handler)>>,
    history: RwLock<VecDeque<AppEvent>>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            handlers: RwLock::new(Vec::new()),
            history: RwLock::new(VecDeque::with_capacity(config.history_limit)),
            config,
        }
    }

    /// Deliver `event` to every matching handler, then to async receivers.
    ///
    /// Returns how many handlers and receivers got the event. The event is
    /// recorded in the history even when nobody is listening.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        tracing::trace!("Publishing {}", event.description());
        self.record(&event);

        let matching: Vec<Handler> = self
            .handlers
            .read()
            .iter()
            .filter(|(_, filter, _)| filter.matches(&event))
            .map(|(_, _, handler)| Arc::clone(handler))
            .collect();

        for handler in &matching {
            handler(event.clone());
        }

        let received = self.sender.send(event).unwrap_or(0);
        match matching.len() + received {
            0 if self.subscriber_count() == 0 => Err(EventBusError::NoSubscribers),
            delivered => Ok(delivered),
        }
    }

    /// Register a handler called synchronously for every matching event
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.handlers.write().push((id, filter, Arc::new(handler)));
        tracing::debug!("{} registered", id);
        id
    }

    /// Receiver for consuming events from an async task
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Remove a handler. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|(existing, _, _)| *existing != id);
        let removed = handlers.len() != before;
        if removed {
            tracing::debug!("{} removed", id);
        }
        removed
    }

    /// Number of registered handlers
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Recorded events, oldest first
    pub fn history(&self) -> Vec<AppEvent> {
        self.history.read().iter().cloned().collect()
    }

    pub fn clear_history(&self) {
        self.history.write().clear();
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, event: &AppEvent) {
        if self.config.history_limit == 0 {
            return;
        }
        let mut history = self.history.write();
        if history.len() == self.config.history_limit {
            history.pop_front();
        }
        history.push_back(event.clone());
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.subscriber_count())
            .field("receivers", &self.sender.receiver_count())
            .field("config", &self.config)
            .finish()
    }
}
