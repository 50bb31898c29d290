use super::*;

#[test]
fn submit_label_reflects_in_flight_state() {
    assert_eq!(submit_label(false), "전송하기 — 빠른 견적 요청");
    assert_eq!(submit_label(true), "전송 중...");
}

#[test]
fn banner_visibility_follows_the_phase() {
    // Failed shows the error banner only; Succeeded the success banner only.
    let failed = SubmitPhase::Failed("x".to_owned());
    assert!(failed.error().is_some());
    assert!(!failed.is_submitted());

    let succeeded = SubmitPhase::Succeeded;
    assert!(succeeded.error().is_none());
    assert!(succeeded.is_submitted());
}
