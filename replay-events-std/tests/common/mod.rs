#![allow(dead_code)]

use replay_events_core::{Entry, EntryKind};

// ============================================================================
// Test Entries
// ============================================================================

pub fn entry(kind: EntryKind, time: f32) -> Entry {
    Entry::new(kind, time)
}

pub fn chat(slot: i32, text: &str, time: f32) -> Entry {
    let mut e = Entry::new(EntryKind::Chat, time);
    e.slot = Some(slot);
    e.key = Some(text.to_string());
    e
}

pub fn damage(attacker: &str, target: &str, value: u32, time: f32) -> Entry {
    let mut e = Entry::new(EntryKind::Damage, time);
    e.attackername = Some(attacker.to_string());
    e.targetname = Some(target.to_string());
    e.value = Some(value);
    e
}

pub fn times(entries: &[Entry]) -> Vec<f32> {
    entries.iter().map(|e| e.time).collect()
}

// ============================================================================
// Logging
// ============================================================================

/// Route `tracing` output to the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
