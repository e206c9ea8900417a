// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message envelope handed to registrations during dispatch

use crate::channel::Channel;
use crate::targets::Targets;
use std::any::Any;

/// A published message: channel, payload and targets
///
/// Lives only for the duration of one publish. Nothing keeps it afterwards.
#[derive(Clone, Copy)]
pub(crate) struct Envelope<'a> {
    channel: Channel,
    payload: &'a dyn Any,
    targets: &'a Targets,
}

impl<'a> Envelope<'a> {
    pub fn new<T: Any>(payload: &'a T, targets: &'a Targets) -> Self {
        Self {
            channel: Channel::of::<T>(),
            payload,
            targets,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn targets(&self) -> &'a Targets {
        self.targets
    }

    /// The payload, if the envelope carries a `T`
    pub fn payload<T: Any>(&self) -> Option<&'a T> {
        self.payload.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for Envelope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("channel", &self.channel)
            .field("targets", &self.targets)
            .finish_non_exhaustive()
    }
}
