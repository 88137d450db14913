pub mod delivery_table;
pub mod earnings_panel;
pub mod logs_panel;
pub mod partner_charts;
pub mod savings_panel;
pub mod sidebar;
