use serde_json::json;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_signal_to_absent_peer_is_dropped() {
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

    alice
        .send_signal("ghost", Some(json!({ "type": "offer" })), None)
        .await;

    alice
        .expect_silence()
        .await
        .expect("Undeliverable signal must not bounce back");
    bob.expect_silence()
        .await
        .expect("Undeliverable signal must not leak to others");

    // The room keeps working after the drop.
    alice.send_chat("r1", "alice", "still here").await;
    let message = bob
        .expect_chat_message()
        .await
        .expect("Bob got no chat message");
    assert_eq!(message.text, "still here");
}
