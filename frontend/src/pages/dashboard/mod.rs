pub mod charts;
pub mod components;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::{register, DashboardPage, DASHBOARD_ACTION_TAG};
pub use view_model::{DashboardController, DashboardDeps, DashboardState};
