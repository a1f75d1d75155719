//!  Habits are kept in a single JSON document, loaded once per command.
//!  The basic idea is:
//!   - [entities::HabitEntity] maps completion flags by `YYYY-MM-DD` key.
//!   - [habit_storage::JsonHabitStorage] owns the file and its locks.
//!   - [habit_store::HabitStore] holds the session collection and writes
//!     through after every mutation.

pub mod entities;
pub mod habit_storage;
pub mod habit_store;
