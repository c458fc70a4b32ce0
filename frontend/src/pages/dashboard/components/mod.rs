pub mod charts;
pub mod recent_lists;
pub mod summary;
pub mod toolbar;

pub use charts::ChartsSection;
pub use recent_lists::RecentListsSection;
pub use summary::{BudgetSection, SummarySection};
pub use toolbar::DashboardToolbar;
