//! Reusable UI components.

mod stat_card;
mod student_report;
mod submissions_modal;
mod todo_list;
mod work_item;

pub use stat_card::{StatCard, percent_label};
pub use student_report::StudentReportCard;
pub use submissions_modal::SubmissionsModal;
pub use todo_list::TodoListWidget;
pub use work_item::WorkItem;
