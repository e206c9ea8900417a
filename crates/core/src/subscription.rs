// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listen parameters and subscription handles

use crate::bus::Shared;
use crate::channel::Channel;
use crate::targets::Targets;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Weak;

/// Identifies a registration on a bus
///
/// Ids are handed out in increasing order per bus, so they also record
/// registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub(crate) u64);

impl SubscriptionId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Structured listen configuration: the channel type plus a target filter
///
/// The filter defaults to empty, which only admits broadcasts.
pub struct ListenParams<T> {
    targets: Targets,
    _channel: PhantomData<fn() -> T>,
}

impl<T: 'static> ListenParams<T> {
    pub fn new() -> Self {
        Self {
            targets: Targets::none(),
            _channel: PhantomData,
        }
    }

    /// Replace the target filter
    pub fn with_targets(mut self, targets: impl Into<Targets>) -> Self {
        self.targets = targets.into();
        self
    }

    /// Add one identifier to the target filter
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.targets.push(target);
        self
    }

    pub fn channel(&self) -> Channel {
        Channel::of::<T>()
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub(crate) fn into_targets(self) -> Targets {
        self.targets
    }
}

impl<T: 'static> Default for ListenParams<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Clone for ListenParams<T> {
    fn clone(&self) -> Self {
        Self {
            targets: self.targets.clone(),
            _channel: PhantomData,
        }
    }
}

impl<T: 'static> fmt::Debug for ListenParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenParams")
            .field("channel", &self.channel())
            .field("targets", &self.targets)
            .finish()
    }
}

/// Cancellation handle returned by `listen`
///
/// The handle owns the registration but refers to the bus weakly: once every
/// bus clone is dropped the registration is gone and `cancel` does nothing.
/// Dropping the handle leaves the registration in place.
pub struct Subscription {
    id: SubscriptionId,
    channel: Channel,
    targets: Targets,
    bus: Weak<Shared>,
}

impl Subscription {
    pub(crate) fn new(
        id: SubscriptionId,
        channel: Channel,
        targets: Targets,
        bus: Weak<Shared>,
    ) -> Self {
        Self {
            id,
            channel,
            targets,
            bus,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Stop receiving messages. Cancelling again is a no-op.
    pub fn cancel(&self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.remove(self.id);
        }
    }

    /// Whether the registration is still live on its bus
    pub fn is_active(&self) -> bool {
        self.bus
            .upgrade()
            .is_some_and(|bus| bus.contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("channel", &self.channel)
            .field("targets", &self.targets)
            .finish()
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
