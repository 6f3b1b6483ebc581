pub mod use_create_expense;
pub mod use_expense_list;
pub mod use_toasts;
