//! Dispatch order specs
//!
//! Listeners run in registration order; a publish from inside a listener
//! finishes before the outer publish continues.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn registration_order_is_invocation_order() {
    let bus = EventBus::new();
    let journal = Journal::new();

    let subs: Vec<Subscription> = ["s1", "s2", "s3", "s4"]
        .into_iter()
        .map(|name| bus.listen(journal.listener::<Ping>(name)))
        .collect();
    subs[1].cancel();
    let _s5 = bus.listen(journal.listener::<Ping>("s5"));

    bus.publish(Ping);

    assert_eq!(journal.lines(), expected(&["s1", "s3", "s4", "s5"]));
}

#[test]
fn nested_publish_interleaves_depth_first() {
    let bus = EventBus::new();
    let journal = Journal::new();

    let relay_bus = bus.clone();
    let relay_journal = journal.clone();
    let _relay = bus.listen(move |chat: &Chat| {
        relay_journal.write(format!("relay: {}", chat.text));
        relay_bus.publish(Ping);
    });
    let _chat = bus.listen(journal.listener::<Chat>("chat"));
    let _ping = bus.listen(journal.listener::<Ping>("ping"));

    bus.publish(Chat::new("hi"));

    assert_eq!(journal.lines(), expected(&["relay: hi", "ping", "chat"]));
}
