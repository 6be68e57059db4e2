pub mod auth;
pub mod profile;
pub mod session;
pub mod task;

pub use auth::{
    ApiMessage, ForgotPasswordRequest, LoginRequest, LoginResponse, ResetPasswordRequest,
    SignupRequest, SignupResponse, validate_registration,
};
pub use profile::{ProfileDto, ProfileUpdate};
pub use session::Session;
pub use task::{
    DEFAULT_DURATION_MINUTES, DEFAULT_PRIORITY, TaskCreate, TaskDto, TaskPatch, active_tasks,
    completed_tasks,
};
