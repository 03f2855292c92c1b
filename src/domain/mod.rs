//! Domain layer - Day states, calendar arithmetic and week grouping

pub mod date;
pub mod day_state;
pub mod time_ref;
pub mod week;

pub use day_state::DayState;
pub use time_ref::DayReference;
pub use week::{build_weeks, WeekBlock, WeekRange};
