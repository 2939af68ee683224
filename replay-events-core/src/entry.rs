//! The decoded entry record.

use crate::{
    kind::EntryKind,
    message::{Message, Tagged},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One decoded record produced by a decoder.
///
/// `tag` is the only attribute the dispatcher reads. Every other field is
/// kind-specific payload and is left `None` when the decoder has nothing to
/// report for it; `None` fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// Seconds relative to the game clock start.
    pub time: f32,
    /// Wire tag, usually one of the [`EntryKind`] wire strings.
    #[serde(rename = "type")]
    pub tag: String,

    // Common
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_slot: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player1: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player2: Option<i32>,

    // Combat log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attackername: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targetname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targetsourcename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attackerhero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targethero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attackerillusion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targetillusion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilitylevel: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflictor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_reason: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_reason: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuename: Option<String>,

    // Interval snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lh: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<u16>,

    // Position (ward cells)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stuns: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itemslot: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_charges: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_state: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kills: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaths: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denies: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entityleft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ehandle: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obs_placed: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sen_placed: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creeps_stacked: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camps_stacked: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rune_pickups: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repicked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pred_vict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stun_duration: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_duration: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_death: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greevils_greed_stack: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_sourcename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstblood_claimed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teamfight_participation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub towers_killed: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roshans_killed: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observers_placed: Option<u8>,

    // Draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_order: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_active_team: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_extime0: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_extime1: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<u8>,
}

impl Entry {
    /// Create an empty entry of the given kind.
    pub fn new(kind: EntryKind, time: f32) -> Self {
        Self::with_tag(kind.wire(), time)
    }

    /// Create an empty entry with a raw wire tag, which need not be a known kind.
    pub fn with_tag(tag: impl Into<String>, time: f32) -> Self {
        Entry {
            time,
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Whether this entry is stamped with `kind`.
    pub fn is(&self, kind: EntryKind) -> bool {
        self.tag == kind.wire()
    }
}

impl Message for Entry {}

impl Tagged for Entry {
    fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
