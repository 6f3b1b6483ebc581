pub mod dashboard;
pub mod view_expenses;

pub use dashboard::DashboardPage;
pub use view_expenses::ViewExpensesPage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    ViewExpenses,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Dashboard, Page::ViewExpenses];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::ViewExpenses => "View Expenses",
        }
    }
}
