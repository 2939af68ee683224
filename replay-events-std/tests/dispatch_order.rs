//! Ordering and routing behavior of `Dispatcher::dispatch`.

use replay_events_core::{Entry, EntryKind, SharedHandler};
use replay_events_std::{
    Delivered, Dispatcher,
    testing::{CountingHandler, Journal},
};

mod common;
use common::{chat, damage, entry, init_tracing, times};

#[test]
fn test_scenario_chat_then_pings() {
    init_tracing();
    let journal: Journal<Entry> = Journal::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.subscribe(EntryKind::Chat, journal.recorder("h1"));
    dispatcher.subscribe(EntryKind::Any, journal.recorder("h2"));

    let entries = [chat(0, "gl hf", 0.0), entry(EntryKind::Pings, 1.0)];
    dispatcher.dispatch(&entries).unwrap();

    let calls = journal.calls();
    let trace: Vec<(&str, f32)> = calls.iter().map(|c| (c.handler, c.entry.time)).collect();
    assert_eq!(trace, [("h1", 0.0), ("h2", 0.0), ("h2", 1.0)]);
    assert!(journal.entries_for("h1").iter().all(|e| e.is(EntryKind::Chat)));
}

#[test]
fn test_order_preserved_across_entries() {
    let journal: Journal<Entry> = Journal::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.subscribe(EntryKind::Damage, journal.recorder("dmg"));

    let entries = [
        damage("npc_dota_hero_axe", "npc_dota_creep_badguys_melee", 40, 3.0),
        entry(EntryKind::Heal, 4.0),
        damage("npc_dota_hero_lina", "npc_dota_hero_axe", 120, 5.0),
        entry(EntryKind::Gold, 6.0),
        damage("npc_dota_hero_axe", "npc_dota_hero_lina", 75, 7.0),
    ];
    dispatcher.dispatch(&entries).unwrap();

    assert_eq!(times(&journal.entries_for("dmg")), [3.0, 5.0, 7.0]);
}

#[test]
fn test_kind_handlers_precede_wildcards_for_each_entry() {
    let journal: Journal<Entry> = Journal::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    // Wildcards registered first still run after the kind-specific handlers.
    dispatcher.subscribe(EntryKind::Any, journal.recorder("any-1"));
    dispatcher.subscribe(EntryKind::Death, journal.recorder("death-1"));
    dispatcher.subscribe(EntryKind::Any, journal.recorder("any-2"));
    dispatcher.subscribe(EntryKind::Death, journal.recorder("death-2"));

    dispatcher
        .dispatch([entry(EntryKind::Death, 0.0), entry(EntryKind::Buyback, 1.0)])
        .unwrap();

    assert_eq!(
        journal.handlers(),
        ["death-1", "death-2", "any-1", "any-2", "any-1", "any-2"]
    );
}

#[test]
fn test_double_subscription_invokes_twice() {
    let counter = CountingHandler::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    let counter = dispatcher.subscribe(EntryKind::PickupRune, counter);
    dispatcher.subscribe(EntryKind::PickupRune, counter.clone());

    let delivered = dispatcher
        .dispatch(&[entry(EntryKind::PickupRune, 0.0), entry(EntryKind::TreeCut, 1.0)])
        .unwrap();

    assert_eq!(counter.count(), 2);
    assert_eq!(
        delivered,
        Delivered {
            entries: 2,
            invocations: 2
        }
    );
}

#[test]
fn test_same_handler_under_kind_and_wildcard() {
    let counter = CountingHandler::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.subscribe(EntryKind::Xp, counter.clone());
    dispatcher.subscribe(EntryKind::Any, counter.clone());

    dispatcher
        .dispatch(&[entry(EntryKind::Xp, 0.0), entry(EntryKind::Gold, 0.0)])
        .unwrap();

    // Xp reaches both registrations, Gold only the wildcard one.
    assert_eq!(counter.count(), 3);
}

#[test]
fn test_empty_registry_short_circuits() {
    let dispatcher: Dispatcher = Dispatcher::new();
    let entries: Vec<Entry> = EntryKind::iter().map(|k| entry(k, 0.0)).collect();

    let delivered = dispatcher.dispatch(&entries).unwrap();
    assert_eq!(delivered, Delivered::default());
    assert!(dispatcher.is_empty());
}

#[test]
fn test_unknown_kind_reaches_only_wildcards() {
    let journal: Journal<Entry> = Journal::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    for kind in EntryKind::iter().filter(|k| !k.is_wildcard()) {
        dispatcher.subscribe(kind, journal.recorder("specific"));
    }
    dispatcher.subscribe(EntryKind::Any, journal.recorder("wildcard"));

    dispatcher
        .dispatch(&[
            Entry::with_tag("DotaCombatlogFutureThing", 0.0),
            Entry::with_tag("12", 1.0),
        ])
        .unwrap();

    assert_eq!(journal.handlers(), ["wildcard", "wildcard"]);
}

#[test]
fn test_subscribe_returns_same_handler() {
    let mut dispatcher: Dispatcher = Dispatcher::new();
    let shared = SharedHandler::new(CountingHandler::new());

    let returned = dispatcher.subscribe(EntryKind::FirstBlood, shared.clone());
    assert!(SharedHandler::ptr_eq(&shared, &returned));

    // The registry holds one more reference to the same instance.
    assert_eq!(shared.strong_count(), 3);

    dispatcher
        .dispatch(&[entry(EntryKind::FirstBlood, 90.0)])
        .unwrap();
    assert_eq!(returned.count(), 1);
    assert_eq!(shared.count(), 1);
}

#[test]
fn test_subscribe_returns_recorder_unchanged() {
    let journal: Journal<Entry> = Journal::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    let recorder = journal.recorder("r");

    let returned = dispatcher.subscribe(EntryKind::Chat, recorder.clone());
    assert!(returned.same_as(&recorder));
}

#[test]
fn test_subscribe_between_dispatches() {
    let journal: Journal<Entry> = Journal::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.subscribe(EntryKind::Interval, journal.recorder("first"));
    dispatcher
        .dispatch(&[entry(EntryKind::Interval, 60.0)])
        .unwrap();

    dispatcher.subscribe(EntryKind::Interval, journal.recorder("second"));
    dispatcher
        .dispatch(&[entry(EntryKind::Interval, 120.0)])
        .unwrap();

    assert_eq!(journal.handlers(), ["first", "first", "second"]);
    assert_eq!(dispatcher.handler_count(EntryKind::Interval), 2);
    assert_eq!(dispatcher.len(), 2);
}

#[test]
fn test_dispatchers_do_not_share_registries() {
    let a_count = CountingHandler::new();
    let b_count = CountingHandler::new();

    let mut a: Dispatcher = Dispatcher::new();
    let mut b: Dispatcher = Dispatcher::new();
    a.subscribe(EntryKind::Any, a_count.clone());
    b.subscribe(EntryKind::Chat, b_count.clone());

    a.dispatch(&[entry(EntryKind::Chat, 0.0)]).unwrap();

    assert_eq!(a_count.count(), 1);
    assert_eq!(b_count.count(), 0);
    assert_eq!(b.handler_count(EntryKind::Any), 0);
}

#[test]
fn test_closure_handlers() {
    let mut dispatcher: Dispatcher = Dispatcher::new();
    let total = std::sync::Arc::new(std::sync::atomic::AtomicU32::new(0));
    {
        let total = total.clone();
        dispatcher.subscribe(EntryKind::Damage, move |e: &Entry| {
            total.fetch_add(e.value.unwrap_or(0), std::sync::atomic::Ordering::SeqCst);
        });
    }

    dispatcher
        .dispatch(&[
            damage("a", "b", 10, 0.0),
            damage("a", "b", 32, 1.0),
            entry(EntryKind::Heal, 2.0),
        ])
        .unwrap();

    assert_eq!(total.load(std::sync::atomic::Ordering::SeqCst), 42);
}

#[test]
fn test_literal_any_tag_reaches_wildcards_twice() {
    let counter = CountingHandler::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.subscribe(EntryKind::Any, counter.clone());

    let delivered = dispatcher
        .dispatch(&[Entry::with_tag("any", 0.0), entry(EntryKind::Chat, 1.0)])
        .unwrap();

    assert_eq!(counter.count(), 3);
    assert_eq!(delivered.invocations, 3);
}

/// Owns its state directly, so it is not `Clone`.
#[derive(Default)]
struct ChatLog {
    lines: std::sync::Mutex<Vec<String>>,
}

impl replay_events_core::Handler<Entry> for ChatLog {
    fn handle(&self, entry: &Entry) -> Result<(), replay_events_core::BoxError> {
        let line = entry.key.clone().ok_or("chat entry without text")?;
        self.lines.lock().unwrap().push(line);
        Ok(())
    }
}

#[test]
fn test_stateful_handler_subscribes_through_shared() {
    let mut dispatcher: Dispatcher = Dispatcher::new();
    let log = dispatcher.subscribe(EntryKind::Chat, SharedHandler::new(ChatLog::default()));

    dispatcher
        .dispatch(&[chat(0, "gl hf", 0.0), entry(EntryKind::Pings, 1.0), chat(5, "gg", 2.0)])
        .unwrap();

    assert_eq!(*log.lines.lock().unwrap(), ["gl hf", "gg"]);
}
