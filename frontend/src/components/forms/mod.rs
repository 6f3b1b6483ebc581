pub mod create_expense_form;

pub use create_expense_form::CreateExpenseForm;
