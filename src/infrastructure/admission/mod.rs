mod fixed_window_limiter;

pub use fixed_window_limiter::{FixedWindowLimiter, UnlimitedAdmission};
