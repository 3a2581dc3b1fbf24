use std::time::Duration;

use veilgate::application::ports::{AdmissionControl, Operation};
use veilgate::infrastructure::admission::{FixedWindowLimiter, UnlimitedAdmission};

#[tokio::test]
async fn given_limit_of_two_when_third_request_arrives_then_it_is_denied() {
    let limiter = FixedWindowLimiter::new(2, Duration::from_secs(60));

    assert!(limiter.allow("alice", Operation::Chat).await);
    assert!(limiter.allow("alice", Operation::Chat).await);
    assert!(!limiter.allow("alice", Operation::Chat).await);
}

#[tokio::test]
async fn given_exhausted_caller_when_other_caller_arrives_then_other_caller_is_allowed() {
    let limiter = FixedWindowLimiter::new(1, Duration::from_secs(60));

    assert!(limiter.allow("alice", Operation::Chat).await);
    assert!(!limiter.allow("alice", Operation::Chat).await);
    assert!(limiter.allow("bob", Operation::Chat).await);
}

#[tokio::test]
async fn given_exhausted_operation_when_other_operation_arrives_then_it_is_counted_separately() {
    let limiter = FixedWindowLimiter::new(1, Duration::from_secs(60));

    assert!(limiter.allow("alice", Operation::Chat).await);
    assert!(!limiter.allow("alice", Operation::Chat).await);
    assert!(limiter.allow("alice", Operation::UploadDocument).await);
}

#[tokio::test]
async fn given_elapsed_window_when_request_arrives_then_counter_resets() {
    let limiter = FixedWindowLimiter::new(1, Duration::from_millis(20));

    assert!(limiter.allow("alice", Operation::Chat).await);
    assert!(!limiter.allow("alice", Operation::Chat).await);

    tokio::time::sleep(Duration::from_millis(30)).await;

    assert!(limiter.allow("alice", Operation::Chat).await);
}

#[tokio::test]
async fn given_unlimited_admission_when_flooded_then_everything_is_allowed() {
    let admission = UnlimitedAdmission;

    for _ in 0..100 {
        assert!(admission.allow("anyone", Operation::CreateAgent).await);
    }
}
