//! Read-only view models derived from the habit collection. Builders are
//! pure: the navigation cursor (year/month or week start) and `today` come
//! in as arguments, nothing is cached between calls.

pub mod month;
pub mod stats;
pub mod week;
