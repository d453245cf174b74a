/// HTTP middleware.
pub mod session;

pub use session::{SessionGuard, SessionUser, SESSION_COOKIE};
