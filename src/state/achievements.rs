//! Achievement rules, unlock evaluation, and progress.
//!
//! SYSTEM CONTEXT
//! ==============
//! Definitions are static. Unlocks are persisted and permanent: once an id
//! is in the unlocked list it is never removed or re-checked.
//!
//! EVALUATION
//! ==========
//! One pass over the definitions in declaration order per change event. A
//! `Meta` rule sees unlocks made earlier in the same pass, so a meta rule
//! declared after its prerequisites unlocks immediately, while one declared
//! before them unlocks on the next event. Evaluation never recurses.

#[cfg(test)]
#[path = "achievements_test.rs"]
mod achievements_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::state::notice::{Notice, Notifier};
use crate::state::storage::LocalStore;
use crate::util::clock::Clock;

/// Unlock condition of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// At least `n` favorites saved.
    Favorites(u32),
    /// At least `n` distinct terms searched.
    Searches(u32),
    /// At least `n` non-meta achievements unlocked.
    Meta(u32),
}

impl Requirement {
    pub fn kind(self) -> AchievementKind {
        match self {
            Self::Favorites(_) => AchievementKind::Favorites,
            Self::Searches(_) => AchievementKind::Searches,
            Self::Meta(_) => AchievementKind::Meta,
        }
    }

    pub fn threshold(self) -> u32 {
        match self {
            Self::Favorites(n) | Self::Searches(n) | Self::Meta(n) => n,
        }
    }
}

/// Discriminator persisted as `type` on unlocked records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Favorites,
    Searches,
    Meta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Emoji shown on the badge.
    pub icon: &'static str,
    pub requirement: Requirement,
}

/// The canonical rule set, in evaluation order.
pub const ACHIEVEMENTS: [AchievementDefinition; 5] = [
    AchievementDefinition {
        id: "first_favorite",
        title: "Primera Receta Favorita",
        description: "Guardaste tu primera receta favorita",
        icon: "🍔",
        requirement: Requirement::Favorites(1),
    },
    AchievementDefinition {
        id: "recipe_collector",
        title: "Coleccionista de Recetas",
        description: "Guarda 10 recetas favoritas",
        icon: "📚",
        requirement: Requirement::Favorites(10),
    },
    AchievementDefinition {
        id: "master_chef",
        title: "Master Chef",
        description: "Guarda 25 recetas favoritas",
        icon: "👨‍🍳",
        requirement: Requirement::Favorites(25),
    },
    AchievementDefinition {
        id: "food_explorer",
        title: "Explorador Culinario",
        description: "Busca 15 recetas diferentes",
        icon: "🚚",
        requirement: Requirement::Searches(15),
    },
    AchievementDefinition {
        id: "recipe_master",
        title: "Maestro de las Recetas",
        description: "Completa todos los logros anteriores",
        icon: "🏅",
        requirement: Requirement::Meta(4),
    },
];

/// A satisfied definition plus when it was unlocked.
///
/// Records written by earlier releases of the app have no `icon` and store
/// `unlockedAt` as an RFC 3339 string; both shapes load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedAchievement {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub requirement: u32,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    /// Milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_unlocked_at")]
    pub unlocked_at: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTimestamp {
    Millis(f64),
    Text(String),
}

fn deserialize_unlocked_at<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match StoredTimestamp::deserialize(deserializer)? {
        StoredTimestamp::Millis(ms) => Ok(ms),
        StoredTimestamp::Text(text) => {
            parse_rfc3339_millis(&text).ok_or_else(|| D::Error::custom(format!("invalid timestamp {text:?}")))
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn parse_rfc3339_millis(text: &str) -> Option<f64> {
    let at = OffsetDateTime::parse(text, &Rfc3339).ok()?;
    Some((at.unix_timestamp_nanos() / 1_000_000) as f64)
}

impl UnlockedAchievement {
    fn from_definition(definition: &AchievementDefinition, unlocked_at: f64) -> Self {
        Self {
            id: definition.id.to_owned(),
            title: definition.title.to_owned(),
            description: definition.description.to_owned(),
            icon: definition.icon.to_owned(),
            requirement: definition.requirement.threshold(),
            kind: definition.requirement.kind(),
            unlocked_at,
        }
    }
}

/// Counters the rules are evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementInputs {
    pub favorites: usize,
    pub searches: usize,
}

#[derive(Debug, Clone)]
pub struct AchievementEngine {
    store: LocalStore,
    key: String,
    notifier: Notifier,
    clock: Clock,
    definitions: Vec<AchievementDefinition>,
    unlocked: Vec<UnlockedAchievement>,
}

impl AchievementEngine {
    /// Load unlocked achievements from `key` using the canonical rule set.
    pub fn load(store: LocalStore, key: &str, notifier: Notifier, clock: Clock) -> Self {
        Self::with_definitions(store, key, notifier, clock, ACHIEVEMENTS.to_vec())
    }

    /// Load unlocked achievements from `key` evaluated against `definitions`.
    pub fn with_definitions(
        store: LocalStore,
        key: &str,
        notifier: Notifier,
        clock: Clock,
        definitions: Vec<AchievementDefinition>,
    ) -> Self {
        let stored: Vec<UnlockedAchievement> = store.load(key, Vec::new());
        let mut unlocked: Vec<UnlockedAchievement> = Vec::with_capacity(stored.len());
        for entry in stored {
            if !unlocked.iter().any(|u| u.id == entry.id) {
                unlocked.push(entry);
            }
        }
        Self { store, key: key.to_owned(), notifier, clock, definitions, unlocked }
    }

    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    /// Unlocked achievements in unlock order.
    pub fn unlocked(&self) -> &[UnlockedAchievement] {
        &self.unlocked
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|u| u.id == id)
    }

    /// Unlock every newly satisfied definition. Returns the new unlocks.
    pub fn evaluate(&mut self, inputs: AchievementInputs) -> Vec<UnlockedAchievement> {
        let mut fresh = Vec::new();
        for index in 0..self.definitions.len() {
            let definition = self.definitions[index];
            if self.is_unlocked(definition.id) {
                continue;
            }
            if self.current_count(definition.requirement, inputs) < definition.requirement.threshold() {
                continue;
            }
            let entry = UnlockedAchievement::from_definition(&definition, (self.clock)());
            self.unlocked.push(entry.clone());
            fresh.push(entry);
        }

        if !fresh.is_empty() {
            self.store.save(&self.key, &self.unlocked);
            for entry in &fresh {
                self.notifier.notify(Notice::AchievementUnlocked {
                    title: entry.title.clone(),
                    description: entry.description.clone(),
                });
            }
        }
        fresh
    }

    /// Percent towards unlocking `id`, capped at 100. Unknown ids report 0.
    pub fn progress(&self, id: &str, inputs: AchievementInputs) -> f64 {
        let Some(definition) = self.definitions.iter().find(|d| d.id == id) else {
            return 0.0;
        };
        let threshold = definition.requirement.threshold();
        if threshold == 0 {
            return 100.0;
        }
        let current = self.current_count(definition.requirement, inputs);
        (100.0 * f64::from(current) / f64::from(threshold)).min(100.0)
    }

    fn current_count(&self, requirement: Requirement, inputs: AchievementInputs) -> u32 {
        let count = match requirement {
            Requirement::Favorites(_) => inputs.favorites,
            Requirement::Searches(_) => inputs.searches,
            Requirement::Meta(_) => self
                .definitions
                .iter()
                .filter(|d| d.requirement.kind() != AchievementKind::Meta && self.is_unlocked(d.id))
                .count(),
        };
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}
