pub mod category_select;
pub mod expenses;
pub mod filter_bar;
pub mod forms;
pub mod sidebar;
pub mod toaster;
