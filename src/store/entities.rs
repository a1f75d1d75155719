use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

/// Glyph assigned to habits created without one.
pub const DEFAULT_EMOJI: &str = "✨";

/// The struct used for storing habits on disk. The completion map is sparse:
/// a day only gets a key once the user toggles it, and a second toggle keeps
/// the key with an explicit `false` instead of removing it. Absent keys count
/// as not done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntity {
    pub id: i64,
    pub name: Arc<str>,
    pub emoji: Arc<str>,
    #[serde(default)]
    pub completed: BTreeMap<String, bool>,
}

impl HabitEntity {
    pub fn new(id: i64, name: impl Into<Arc<str>>, emoji: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: emoji.into(),
            completed: BTreeMap::new(),
        }
    }

    pub fn is_done_on(&self, date_key: &str) -> bool {
        self.completed.get(date_key).copied().unwrap_or(false)
    }

    /// Flips the recorded state for a day. A missing key is treated as
    /// `false`, so the first toggle of a day always lands on `true`.
    pub fn toggle(&mut self, date_key: &str) {
        let next = !self.is_done_on(date_key);
        self.completed.insert(date_key.to_string(), next);
    }

    pub fn with_done(mut self, date_key: &str, done: bool) -> Self {
        self.completed.insert(date_key.to_string(), done);
        self
    }
}

/// Habits a fresh installation starts with.
pub fn default_habits() -> Vec<HabitEntity> {
    [
        (1, "Wake up at 05:00", "⏰"),
        (2, "Gym", "💪"),
        (3, "S", "🚫"),
        (4, "Reading / Learning", "📚"),
        (5, "Budget Tracking", "💰"),
        (6, "Project Work", "🧠"),
        (7, "No Alcohol", "🍺"),
        (8, "Social Media Detox", "🌿"),
        (9, "Goal Journaling", "📝"),
        (10, "Cold Shower", "❄️"),
    ]
    .into_iter()
    .map(|(id, name, emoji)| HabitEntity::new(id, name, emoji))
    .collect()
}
