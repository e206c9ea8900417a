// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target identifiers and the delivery matching rule
//!
//! Messages and subscriptions both carry a target list:
//!   - A message with no targets is a broadcast and reaches every listener
//!     on its channel, filtered or not.
//!   - A message with targets reaches only listeners whose filter shares at
//!     least one identifier with it. An empty filter shares nothing, so an
//!     unfiltered listener does not see targeted messages.

use std::fmt;

/// Ordered list of opaque target identifiers, possibly empty
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Targets(Vec<String>);

impl Targets {
    /// An empty list: broadcast on the message side, no filter on the listener side
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, target: &str) -> bool {
        self.0.iter().any(|t| t == target)
    }

    /// Whether at least one identifier appears in both lists
    pub fn intersects(&self, other: &Targets) -> bool {
        self.iter().any(|t| other.contains(t))
    }

    /// Append an identifier
    pub fn push(&mut self, target: impl Into<String>) {
        self.0.push(target.into());
    }
}

/// Decide whether a message addressed to `message` reaches a listener filtering on `filter`
pub fn accepts(message: &Targets, filter: &Targets) -> bool {
    if message.is_empty() {
        return true;
    }
    filter.intersects(message)
}

impl fmt::Display for Targets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

impl From<Vec<String>> for Targets {
    fn from(targets: Vec<String>) -> Self {
        Self(targets)
    }
}

impl From<&[&str]> for Targets {
    fn from(targets: &[&str]) -> Self {
        targets.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Targets {
    fn from(targets: [&str; N]) -> Self {
        targets.into_iter().collect()
    }
}

impl From<&str> for Targets {
    fn from(target: &str) -> Self {
        Self(vec![target.to_string()])
    }
}

impl From<String> for Targets {
    fn from(target: String) -> Self {
        Self(vec![target])
    }
}

impl<S: Into<String>> FromIterator<S> for Targets {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[path = "targets_tests.rs"]
mod tests;
