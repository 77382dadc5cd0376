use super::*;
use std::time::Duration;

#[test]
fn can_start_time_budget_on_quota_creation() {
    let first = create_interruption_quota(Some(1));
    std::thread::sleep(Duration::from_millis(1100));
    let second = create_interruption_quota(Some(1));

    assert!(first.is_reached());
    assert!(!second.is_reached());
}

#[test]
fn can_create_quota_many_times_without_time_limit() {
    let quotas = (0..3).map(|_| create_interruption_quota(None)).collect::<Vec<_>>();

    assert!(quotas.iter().all(|quota| !quota.is_reached()));
}
