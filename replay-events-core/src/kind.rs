//! # Entry Taxonomy
//!
//! The closed vocabulary of entry categories shared between the decoder and
//! the dispatcher.
//!
//! Every [`EntryKind`] is bound to exactly one wire string. The decoder stamps
//! each produced entry with one of these strings; the dispatcher uses the same
//! strings to find subscribers. [`EntryKind::Any`] is the only member that is
//! never emitted by a decoder: it selects the wildcard subscriber list.
//!
//! # Families
//!
//! | Family | Examples |
//! |--------|----------|
//! | [`Family::Gameplay`] | `chat`, `pings`, `obs`, `draft_start`, `interval` |
//! | [`Family::CombatLog`] | `DotaCombatlogDamage`, `DotaCombatlogDeath`, ... |
//! | [`Family::Wildcard`] | `any` |

use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when a wire string names no [`EntryKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown entry kind: `{0}`")]
pub struct UnknownKind(pub String);

/// Broad grouping of entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// The dispatcher-side wildcard selector.
    Wildcard,
    /// Match metadata and gameplay markers (chat, wards, draft, intervals).
    Gameplay,
    /// Entries mirroring the game's combat-log schema.
    CombatLog,
}

/// Prefix shared by every combat-log wire string.
const COMBAT_LOG_PREFIX: &str = "DotaCombatlog";

macro_rules! entry_kinds {
    ($($(#[$doc:meta])* $variant:ident => $wire:tt,)+) => {
        /// A symbolic entry category, bound 1:1 to its wire string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EntryKind {
            $($(#[$doc])* $variant,)+
        }

        impl EntryKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [EntryKind] = &[$(EntryKind::$variant,)+];

            /// The canonical wire string for this kind.
            pub const fn wire(self) -> &'static str {
                match self {
                    $(EntryKind::$variant => $wire,)+
                }
            }
        }

        static BY_WIRE: phf::Map<&'static str, EntryKind> = phf::phf_map! {
            $($wire => EntryKind::$variant,)+
        };
    };
}

entry_kinds! {
    /// Wildcard selector matching every entry.
    Any => "any",
    Cosmetics => "cosmetics",
    DotaPlus => "dotaplus",
    Epilogue => "epilogue",
    ChatWheel => "chatwheel",
    /// All-chat message.
    Chat => "chat",
    /// Observer ward placed.
    Obs => "obs",
    /// Observer ward expired or destroyed.
    ObsLeft => "obs_left",
    /// Sentry ward placed.
    Sen => "sen",
    /// Sentry ward expired or destroyed.
    SenLeft => "sen_left",
    Pings => "pings",
    Actions => "actions",
    DraftStart => "draft_start",
    DraftTimings => "draft_timings",
    PlayerSlot => "player_slot",
    /// Periodic per-player snapshot.
    Interval => "interval",
    StartingItems => "StartingItems",
    AbilityLevel => "DotaAbilityLevel",
    Invalid => "DotaCombatlogInvalid",
    Damage => "DotaCombatlogDamage",
    Heal => "DotaCombatlogHeal",
    ModifierAdd => "DotaCombatlogModifierAdd",
    ModifierRemove => "DotaCombatlogModifierRemove",
    Death => "DotaCombatlogDeath",
    Ability => "DotaCombatlogAbility",
    Item => "DotaCombatlogItem",
    Location => "DotaCombatlogLocation",
    Gold => "DotaCombatlogGold",
    GameState => "DotaCombatlogGameState",
    Xp => "DotaCombatlogXp",
    Purchase => "DotaCombatlogPurchase",
    Buyback => "DotaCombatlogBuyback",
    AbilityTrigger => "DotaCombatlogAbilityTrigger",
    Playerstats => "DotaCombatlogPlayerstats",
    Multikill => "DotaCombatlogMultikill",
    Killstreak => "DotaCombatlogKillstreak",
    TeamBuildingKill => "DotaCombatlogTeamBuildingKill",
    FirstBlood => "DotaCombatlogFirstBlood",
    ModifierStackEvent => "DotaCombatlogModifierStackEvent",
    NeutralCampStack => "DotaCombatlogNeutralCampStack",
    PickupRune => "DotaCombatlogPickupRune",
    RevealedInvisible => "DotaCombatlogRevealedInvisible",
    HeroSaved => "DotaCombatlogHeroSaved",
    ManaRestored => "DotaCombatlogManaRestored",
    HeroLevelup => "DotaCombatlogHeroLevelup",
    BottleHealAlly => "DotaCombatlogBottleHealAlly",
    EndgameStats => "DotaCombatlogEndgameStats",
    InterruptChannel => "DotaCombatlogInterruptChannel",
    AlliedGold => "DotaCombatlogAlliedGold",
    AegisTaken => "DotaCombatlogAegisTaken",
    ManaDamage => "DotaCombatlogManaDamage",
    PhysicalDamagePrevented => "DotaCombatlogPhysicalDamagePrevented",
    UnitSummoned => "DotaCombatlogUnitSummoned",
    AttackEvade => "DotaCombatlogAttackEvade",
    TreeCut => "DotaCombatlogTreeCut",
    SuccessfulScan => "DotaCombatlogSuccessfulScan",
    EndKillstreak => "DotaCombatlogEndKillstreak",
    BloodstoneCharge => "DotaCombatlogBloodstoneCharge",
    CriticalDamage => "DotaCombatlogCriticalDamage",
    SpellAbsorb => "DotaCombatlogSpellAbsorb",
    UnitTeleported => "DotaCombatlogUnitTeleported",
    KillEaterEvent => "DotaCombatlogKillEaterEvent",
    NeutralItemEarned => "DotaCombatlogNeutralItemEarned",
}

impl EntryKind {
    /// Look up the kind stamped with `wire`.
    ///
    /// Returns `None` for tags outside the taxonomy; callers treat those as
    /// "no kind-specific subscriber" rather than as an error.
    pub fn from_wire(wire: &str) -> Option<EntryKind> {
        BY_WIRE.get(wire).copied()
    }

    /// Whether this is the wildcard selector.
    pub const fn is_wildcard(self) -> bool {
        matches!(self, EntryKind::Any)
    }

    /// The family this kind belongs to.
    pub fn family(self) -> Family {
        if self.is_wildcard() {
            Family::Wildcard
        } else if self.wire().starts_with(COMBAT_LOG_PREFIX) {
            Family::CombatLog
        } else {
            Family::Gameplay
        }
    }

    /// Iterate over every kind, in declaration order.
    pub fn iter() -> impl Iterator<Item = EntryKind> {
        Self::ALL.iter().copied()
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl FromStr for EntryKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryKind::from_wire(s).ok_or_else(|| UnknownKind(s.to_owned()))
    }
}

impl AsRef<str> for EntryKind {
    fn as_ref(&self) -> &str {
        self.wire()
    }
}
