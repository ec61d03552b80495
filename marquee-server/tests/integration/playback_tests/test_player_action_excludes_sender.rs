use crate::integration::{create_test_hub, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_player_action_excludes_sender() {
    init_tracing();

    let hub = create_test_hub();
    let mut alice = TestClient::connect(&hub);
    let mut bob = TestClient::connect(&hub);

    alice
        .join("abc123", "alice")
        .await
        .expect("Alice failed to join");
    bob.join("abc123", "bob").await.expect("Bob failed to join");
    alice
        .expect_join_of("bob")
        .await
        .expect("Alice saw no announcement");

    alice.send_player_action("abc123", 42.5, false, 1.0).await;

    let update = bob
        .expect_player_update()
        .await
        .expect("Bob got no player update");
    assert_eq!(update.position, 42.5);
    assert!(!update.is_paused);
    assert_eq!(update.speed, 1.0);
    alice
        .expect_silence()
        .await
        .expect("Sender must not receive its own update");

    // A later snapshot reflects the applied action.
    let mut carol = TestClient::connect(&hub);
    carol
        .join("abc123", "carol")
        .await
        .expect("Carol failed to join");
    carol.request_state("abc123").await;
    let state = carol
        .expect_current_state()
        .await
        .expect("No state snapshot arrived");
    assert_eq!(state.position, 42.5);
    assert!(!state.is_paused);
}
