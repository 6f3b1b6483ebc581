pub mod edit_expense_modal;
pub mod expense_ledger;
pub mod expense_table;

pub use edit_expense_modal::EditExpenseModal;
pub use expense_ledger::ExpenseLedger;
pub use expense_table::ExpenseTable;
