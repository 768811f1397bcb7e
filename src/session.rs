//! Per-page session checks and the credentials login provider.

mod guard;
pub use self::guard::{GuardOutcome, guard, guard_at};

mod provider;
pub use self::provider::{SessionUser, authorize};
