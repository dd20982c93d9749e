pub mod badges;
pub mod kpi_card;
pub mod toast;
