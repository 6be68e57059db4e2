mod alert;
mod header;
mod task_form;
mod task_row;

pub use alert::{Alert, AlertKind};
pub use header::Header;
pub use task_form::TaskForm;
pub use task_row::TaskRow;
