use marquee_core::UserProfile;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_join_while_bound_elsewhere_is_dropped() {
    init_tracing();

    let hub = create_test_hub();
    let mut alice = TestClient::connect(&hub);

    alice.join("r1", "alice").await.expect("Join failed");
    alice.send_join("r2", UserProfile::new("alice")).await;

    alice
        .expect_silence()
        .await
        .expect("Join into a second room must be ignored");
}
