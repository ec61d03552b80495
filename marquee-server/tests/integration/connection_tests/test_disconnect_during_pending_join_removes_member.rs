use marquee_core::{UserId, UserProfile};

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_disconnect_during_pending_join_removes_member() {
    init_tracing();

    let hub = create_test_hub();
    let alice = TestClient::connect(&hub);

    // The join is still queued for the room actor when the connection drops.
    alice.send_join("r1", UserProfile::new("alice")).await;
    alice.disconnect().await;

    let mut bob = TestClient::connect(&hub);
    let members = bob.join("r1", "bob").await.expect("Bob failed to join");
    assert_eq!(members, vec![UserId::from("bob")]);

    bob.expect_silence()
        .await
        .expect("The dropped connection must leave no trace");
}
