//! Simple to use cli for tracking daily habits. Habits live in a single
//! local JSON file, and progress can be viewed as a month grid, a week of
//! day cards, or monthly statistics straight from a terminal.
//!

pub mod cli;
pub mod store;
pub mod utils;
pub mod view;
