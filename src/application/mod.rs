//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod mark_day;
pub mod show_weeks;

pub use manage_config::ConfigService;
pub use mark_day::MarkDayService;
pub use show_weeks::OverviewService;
