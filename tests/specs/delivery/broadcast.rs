//! Broadcast specs
//!
//! A message without targets reaches every listener on its channel.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn broadcast_reaches_all_listeners_once_in_order() {
    let bus = EventBus::new();
    let journal = Journal::new();

    let _first = bus.listen(journal.listener::<Ping>("first"));
    let _second = bus.listen(journal.listener::<Ping>("second"));

    bus.publish(Ping);

    assert_eq!(journal.lines(), expected(&["first", "second"]));
}

#[test]
fn broadcast_reaches_filtered_listeners_too() {
    let bus = EventBus::new();
    let journal = Journal::new();

    let _room1 = bus.listen_with(filtered::<Ping>(&["room-1"]), journal.listener::<Ping>("room-1"));
    let _room2 = bus.listen_with(filtered::<Ping>(&["room-2"]), journal.listener::<Ping>("room-2"));
    let _any = bus.listen(journal.listener::<Ping>("any"));

    bus.publish(Ping);

    assert_eq!(journal.lines(), expected(&["room-1", "room-2", "any"]));
}

#[test]
fn listeners_only_see_their_channel() {
    let bus = EventBus::new();
    let journal = Journal::new();

    let _ping = bus.listen(journal.listener::<Ping>("ping"));
    let chat_journal = journal.clone();
    let _chat = bus.listen(move |chat: &Chat| chat_journal.write(format!("chat: {}", chat.text)));

    bus.publish(Chat::new("hello"));
    bus.publish(Ping);
    bus.publish(Chat::new("bye"));

    assert_eq!(journal.lines(), expected(&["chat: hello", "ping", "chat: bye"]));
}

#[test]
fn publishing_to_an_empty_bus_does_nothing() {
    let bus = EventBus::new();
    bus.publish(Ping);
    bus.publish_to(Ping, ["room-1"]);
    assert_eq!(bus.subscription_count(), 0);
}

#[test]
fn listening_on_a_silent_channel_never_fires() {
    let bus = EventBus::new();
    let journal = Journal::new();

    let _chat = bus.listen(journal.listener::<Chat>("chat"));
    bus.publish(Ping);

    assert!(journal.lines().is_empty());
}
