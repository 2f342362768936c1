//! Storage-backed operations of the cost manager.
//!
//! The [`Engine`] validates and stores cost records, builds monthly
//! category reports and per-user totals, and manages the user registry.

pub use category::Category;
pub use costs::{Cost, NewCost};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use report::{CategoryBucket, MonthWindow, MonthlyReport, ReportEntry, month_window};
pub use team::{TeamMember, team_members};
pub use users::{NewUser, User, UserSummary};

mod category;
mod costs;
mod error;
mod ops;
mod report;
mod team;
mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
