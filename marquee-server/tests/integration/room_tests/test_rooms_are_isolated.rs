use marquee_core::UserId;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_rooms_are_isolated() {
    init_tracing();

    let hub = create_test_hub();
    let mut alice = TestClient::connect(&hub);
    let mut bob = TestClient::connect(&hub);

    let r1_members = alice.join("r1", "alice").await.expect("Alice failed to join");
    let r2_members = bob.join("r2", "bob").await.expect("Bob failed to join");
    assert_eq!(r1_members, vec![UserId::from("alice")]);
    assert_eq!(r2_members, vec![UserId::from("bob")]);

    alice.send_chat("r1", "alice", "r1 only").await;
    alice
        .expect_chat_message()
        .await
        .expect("Sender must receive the echo");
    alice.send_player_action("r1", 5.0, false, 1.0).await;

    bob.expect_silence()
        .await
        .expect("Events must not cross room boundaries");

    // An event naming a room the sender never joined is dropped.
    bob.send_chat("r1", "bob", "smuggled").await;
    alice
        .expect_silence()
        .await
        .expect("Events for foreign rooms must be dropped");

    bob.request_state("r2").await;
    let state = bob
        .expect_current_state()
        .await
        .expect("No state snapshot arrived");
    assert_eq!(state.position, 0.0);
    assert!(state.is_paused);
}
