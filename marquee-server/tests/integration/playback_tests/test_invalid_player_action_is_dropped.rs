use crate::integration::{create_test_hub, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_invalid_player_action_is_dropped() {
    init_tracing();

    let hub = create_test_hub();
    let mut alice = TestClient::connect(&hub);
    let mut bob = TestClient::connect(&hub);

    alice.join("r1", "alice").await.expect("Alice failed to join");
    bob.join("r1", "bob").await.expect("Bob failed to join");
    alice
        .expect_join_of("bob")
        .await
        .expect("Alice saw no announcement");

    alice.send_player_action("r1", f64::NAN, false, 1.0).await;
    alice.send_player_action("r1", -3.0, false, 1.0).await;
    alice.send_player_action("r1", 10.0, false, 0.0).await;

    bob.expect_silence()
        .await
        .expect("Invalid actions must not be broadcast");

    // The room state stays untouched.
    bob.request_state("r1").await;
    let state = bob
        .expect_current_state()
        .await
        .expect("No state snapshot arrived");
    assert_eq!(state.position, 0.0);
    assert!(state.is_paused);
    assert_eq!(state.speed, 1.0);
}
