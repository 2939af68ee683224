#![allow(dead_code)]

use replay_events::{Entry, EntryKind};

// ============================================================================
// Captures
// ============================================================================

/// A short teamfight as a JSON-lines capture.
pub const TEAMFIGHT: &[u8] = br#"{"type":"chat","time":-30,"slot":0,"key":"glhf"}
{"type":"DotaCombatlogDamage","time":600.5,"attackername":"npc_dota_hero_axe","targetname":"npc_dota_hero_lina","attackerhero":true,"targethero":true,"value":120}
{"type":"DotaCombatlogDamage","time":601,"attackername":"npc_dota_hero_axe","targetname":"npc_dota_creep_badguys_melee","attackerhero":true,"targethero":false,"value":90}
{"type":"DotaCombatlogDeath","time":602,"attackername":"npc_dota_hero_axe","targetname":"npc_dota_hero_lina","attackerhero":true,"targethero":true}
{"type":"DotaCombatlogFirstBlood","time":602}
{"type":"chatwheel","time":603,"slot":5,"key":"74"}
{"type":"DotaCombatlogBrandNew","time":604}
"#;

pub fn entry(kind: EntryKind, time: f32) -> Entry {
    Entry::new(kind, time)
}
