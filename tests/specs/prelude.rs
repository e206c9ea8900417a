//! Shared helpers for specs

pub use pico_event::{BusConfig, DeliveryPolicy, EventBus, ListenParams, Subscription, Targets};

use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
pub struct Ping;

#[derive(Clone, Debug, PartialEq)]
pub struct Chat {
    pub text: String,
}

impl Chat {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Ordered record of which listener saw what
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, line: impl Into<String>) {
        self.0.lock().unwrap().push(line.into());
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Listener that writes `name` every time it runs
    pub fn listener<T: 'static>(&self, name: &'static str) -> impl Fn(&T) + Send + Sync + 'static {
        let journal = self.clone();
        move |_: &T| journal.write(name)
    }
}

pub fn filtered<T: 'static>(targets: &[&str]) -> ListenParams<T> {
    ListenParams::new().with_targets(targets)
}

/// Journal lines a spec expects, in order
pub fn expected(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
