// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing typed messages to listeners
//!
//! Dispatch is synchronous: `publish` calls every matching listener on the
//! caller's thread, in registration order, before returning. The registration
//! table is only locked long enough to snapshot the matching entries, so a
//! listener may publish, listen or cancel from inside its callback. A nested
//! publish runs to completion before the outer one moves on (depth-first).

use crate::channel::Channel;
use crate::config::{BusConfig, DeliveryPolicy};
use crate::envelope::Envelope;
use crate::subscription::{ListenParams, Subscription, SubscriptionId};
use crate::targets::{self, Targets};
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;
use tracing::{debug, error, trace};

/// Receiver side of a stream subscription
pub type EventReceiver<T> = mpsc::UnboundedReceiver<T>;

type Callback = Arc<dyn Fn(&Envelope<'_>) + Send + Sync>;

struct Registration {
    channel: Channel,
    targets: Targets,
    callback: Callback,
}

/// State shared by every clone of a bus
pub(crate) struct Shared {
    config: BusConfig,
    next_id: AtomicU64,
    registrations: RwLock<BTreeMap<SubscriptionId, Registration>>,
}

impl Shared {
    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        // Callback is dropped after the lock is released
        let removed = {
            let mut regs = self
                .registrations
                .write()
                .unwrap_or_else(|e| e.into_inner());
            regs.remove(&id)
        };

        if removed.is_some() {
            debug!(bus = %self.config.name, %id, "cancelled");
        }
        removed.is_some()
    }

    pub(crate) fn contains(&self, id: SubscriptionId) -> bool {
        self.registrations
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&id)
    }
}

/// The event bus routes published messages to matching listeners
///
/// Clones share the same registrations.
#[derive(Clone)]
pub struct EventBus {
    shared: Arc<Shared>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    pub fn with_config(config: BusConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                next_id: AtomicU64::new(1),
                registrations: RwLock::new(BTreeMap::new()),
            }),
        }
    }

    pub fn config(&self) -> &BusConfig {
        &self.shared.config
    }

    /// Broadcast a message to every listener on its channel
    pub fn publish<T: Any>(&self, payload: T) {
        self.publish_to(payload, Targets::none());
    }

    /// Publish a message addressed to `targets`
    ///
    /// An empty target list is a broadcast, same as [`EventBus::publish`].
    pub fn publish_to<T: Any>(&self, payload: T, targets: impl Into<Targets>) {
        let targets = targets.into();
        self.dispatch(&Envelope::new(&payload, &targets));
    }

    /// Listen on the channel for `T` without a target filter
    pub fn listen<T, F>(&self, callback: F) -> Subscription
    where
        T: Any,
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.listen_with(ListenParams::<T>::new(), callback)
    }

    /// Listen with explicit parameters
    pub fn listen_with<T, F>(&self, params: ListenParams<T>, callback: F) -> Subscription
    where
        T: Any,
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback = Arc::new(move |envelope: &Envelope<'_>| {
            if let Some(payload) = envelope.payload::<T>() {
                callback(payload);
            }
        });
        self.register(params.channel(), params.into_targets(), callback)
    }

    /// Listen by forwarding clones of matching payloads into an unbounded channel
    ///
    /// Messages are pushed synchronously during publish and read at the
    /// receiver's pace. Dropping the receiver does not cancel the subscription.
    pub fn listen_stream<T>(&self, params: ListenParams<T>) -> (Subscription, EventReceiver<T>)
    where
        T: Any + Send + Clone,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = self.listen_with(params, move |payload: &T| {
            let _ = tx.send(payload.clone());
        });
        (subscription, rx)
    }

    /// Get count of active subscriptions
    pub fn subscription_count(&self) -> usize {
        self.shared
            .registrations
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Count active subscriptions on one channel
    pub fn listener_count(&self, channel: Channel) -> usize {
        self.shared
            .registrations
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .filter(|reg| reg.channel == channel)
            .count()
    }

    /// List active subscription IDs in registration order
    pub fn list_subscriptions(&self) -> Vec<SubscriptionId> {
        self.shared
            .registrations
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .copied()
            .collect()
    }

    fn register(&self, channel: Channel, targets: Targets, callback: Callback) -> Subscription {
        let id = SubscriptionId(self.shared.next_id.fetch_add(1, Ordering::Relaxed));
        debug!(bus = %self.shared.config.name, %id, %channel, %targets, "listening");

        let mut regs = self
            .shared
            .registrations
            .write()
            .unwrap_or_else(|e| e.into_inner());
        regs.insert(
            id,
            Registration {
                channel,
                targets: targets.clone(),
                callback,
            },
        );

        Subscription::new(id, channel, targets, Arc::downgrade(&self.shared))
    }

    fn dispatch(&self, envelope: &Envelope<'_>) {
        let matching: Vec<(SubscriptionId, Callback)> = self
            .shared
            .registrations
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|(_, reg)| {
                reg.channel == envelope.channel() && targets::accepts(envelope.targets(), &reg.targets)
            })
            .map(|(id, reg)| (*id, Arc::clone(&reg.callback)))
            .collect();

        let mut delivered = 0usize;
        for (id, callback) in matching {
            // An earlier listener of this publish may have cancelled it
            if !self.shared.contains(id) {
                continue;
            }

            match self.shared.config.delivery {
                DeliveryPolicy::Propagate => callback(envelope),
                DeliveryPolicy::Isolate => {
                    let result = panic::catch_unwind(AssertUnwindSafe(|| callback(envelope)));
                    if let Err(panic) = result {
                        error!(
                            bus = %self.shared.config.name,
                            %id,
                            channel = %envelope.channel(),
                            error = panic_message(&*panic),
                            "listener panicked"
                        );
                        continue;
                    }
                }
            }
            delivered += 1;
        }

        trace!(
            bus = %self.shared.config.name,
            channel = %envelope.channel(),
            targets = envelope.targets().len(),
            delivered,
            "published"
        );
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
            .field("name", &self.shared.config.name)
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
