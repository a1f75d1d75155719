use anyhow::{bail, Result};
use chrono::Utc;
use tracing::{error, info, warn};

use super::entities::{default_habits, HabitEntity, DEFAULT_EMOJI};
use super::habit_storage::HabitStorage;

/// In-memory habit collection with write-through persistence. Every mutation
/// is followed by a save through the injected [HabitStorage]; failed saves
/// are logged and the in-memory collection stays authoritative for the
/// session.
pub struct HabitStore<S: HabitStorage> {
    storage: S,
    habits: Vec<HabitEntity>,
}

impl<S: HabitStorage> HabitStore<S> {
    /// Loads the stored collection, seeding the default habits when the
    /// store is absent, empty or unreadable. The seed is written back so it
    /// only ever happens once per fresh storage state.
    pub async fn load_initial(storage: S) -> Self {
        match storage.load().await {
            Some(habits) if !habits.is_empty() => Self { storage, habits },
            _ => {
                info!("No stored habits found, seeding defaults");
                let store = Self {
                    storage,
                    habits: default_habits(),
                };
                store.persist().await;
                store
            }
        }
    }

    pub fn habits(&self) -> &[HabitEntity] {
        &self.habits
    }

    pub fn find(&self, habit_id: i64) -> Option<&HabitEntity> {
        self.habits.iter().find(|habit| habit.id == habit_id)
    }

    /// Appends a new habit. Rejects names that are empty after trimming
    /// before anything is mutated or written.
    pub async fn add(&mut self, name: &str, emoji: Option<&str>) -> Result<&HabitEntity> {
        let name = name.trim();
        if name.is_empty() {
            bail!("habit name must not be empty");
        }

        let id = self.allocate_id();
        self.habits
            .push(HabitEntity::new(id, name, emoji.unwrap_or(DEFAULT_EMOJI)));
        self.persist().await;
        Ok(self.habits.last().expect("habit was just appended"))
    }

    /// Flips one day of one habit. Unknown ids are a logged no-op and do not
    /// touch storage.
    pub async fn toggle_day(&mut self, habit_id: i64, date_key: &str) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == habit_id) else {
            warn!("Tried to toggle unknown habit {habit_id}");
            return false;
        };
        habit.toggle(date_key);
        self.persist().await;
        true
    }

    /// Removes a habit by id. Unknown ids are a logged no-op.
    pub async fn remove(&mut self, habit_id: i64) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != habit_id);
        if self.habits.len() == before {
            warn!("Tried to remove unknown habit {habit_id}");
            return false;
        }
        self.persist().await;
        true
    }

    /// Ids are derived from the wall clock, bumped past the current maximum
    /// so rapid additions never collide and ids keep increasing.
    fn allocate_id(&self) -> i64 {
        let candidate = Utc::now().timestamp_millis();
        match self.habits.iter().map(|habit| habit.id).max() {
            Some(max) if candidate <= max => max.saturating_add(1),
            _ => candidate,
        }
    }

    async fn persist(&self) {
        if let Err(e) = self.storage.save(&self.habits).await {
            error!("Failed to persist habits: {e:?}");
        }
    }
}
