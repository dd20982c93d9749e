pub mod conditions;
pub mod market;
pub mod planner;
pub mod resources;
pub mod settings;

pub use conditions::ConditionsPage;
pub use market::MarketPage;
pub use planner::PlannerPage;
pub use resources::ResourcesPage;
pub use settings::SettingsPage;
