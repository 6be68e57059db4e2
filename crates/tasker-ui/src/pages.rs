mod add_task;
mod change_password;
mod completed;
mod forgot_password;
mod login;
mod profile;
mod register;
mod tasks;

pub use add_task::AddTaskPage;
pub use change_password::ChangePasswordPage;
pub use completed::CompletedPage;
pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use tasks::TasksPage;
