use crate::integration::{create_test_hub, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_playback_defaults_for_untouched_room() {
    init_tracing();

    let hub = create_test_hub();
    let mut alice = TestClient::connect(&hub);

    alice.join("r1", "alice").await.expect("Alice failed to join");

    alice.request_state("r1").await;
    let state = alice
        .expect_current_state()
        .await
        .expect("No state snapshot arrived");
    assert_eq!(state.position, 0.0);
    assert!(state.is_paused);
    assert_eq!(state.speed, 1.0);
}
