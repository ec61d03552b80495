use marquee_core::UserProfile;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_chat_history_preserves_order() {
    init_tracing();

    let hub = create_test_hub();
    let mut alice = TestClient::connect(&hub);

    alice.join("r1", "alice").await.expect("Alice failed to join");

    for text in ["first", "second", "third"] {
        alice.send_chat("r1", "alice", text).await;
        alice
            .expect_chat_message()
            .await
            .expect("Echo not delivered");
    }

    let mut bob = TestClient::connect(&hub);
    bob.send_join("r1", UserProfile::new("bob")).await;
    bob.expect_members().await.expect("Bob got no member list");
    bob.expect_system_message()
        .await
        .expect("Bob got no join notice");

    let history = bob.expect_history().await.expect("Bob got no history");
    let texts: Vec<&str> = history.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
    assert!(
        history.windows(2).all(|w| w[0].created_at <= w[1].created_at),
        "History timestamps must be non-decreasing"
    );
}
