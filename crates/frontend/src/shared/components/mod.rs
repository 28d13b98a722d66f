pub mod alert_error;
pub mod search_input;
pub mod side_panel;
pub mod skeleton;
