// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! pico-event: an in-process publish/subscribe bus
//!
//! This crate provides:
//! - `EventBus` - synchronous delivery of typed messages to listeners
//! - `Channel` - routing key derived from the message type
//! - `Targets` - optional addressing that narrows delivery to listeners sharing a target
//! - `Subscription` - handle for cancelling a listener
//!
//! ```
//! use pico_event::{EventBus, ListenParams};
//!
//! struct Ping;
//!
//! let bus = EventBus::new();
//! let room = bus.listen_with(ListenParams::<Ping>::new().target("room-1"), |_| {
//!     println!("ping for room-1");
//! });
//!
//! bus.publish(Ping); // broadcast: every Ping listener
//! bus.publish_to(Ping, ["room-1"]); // only listeners filtering on room-1
//! room.cancel();
//! ```

pub mod bus;
pub mod channel;
pub mod config;
mod envelope;
pub mod error;
pub mod subscription;
pub mod targets;

// Re-exports
pub use bus::{EventBus, EventReceiver};
pub use channel::Channel;
pub use config::{BusConfig, DeliveryPolicy};
pub use error::ConfigError;
pub use subscription::{ListenParams, Subscription, SubscriptionId};
pub use targets::Targets;
