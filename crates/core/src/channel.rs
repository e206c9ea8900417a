// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel identity derived from a message's type

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Routing key for a message type
///
/// Two channels are equal exactly when they were built from the same type.
/// The type name is kept for logs only and takes no part in comparison.
#[derive(Clone, Copy, Debug)]
pub struct Channel {
    id: TypeId,
    name: &'static str,
}

impl Channel {
    /// The channel carrying messages of type `T`
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Full type name of the message type
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
