use serde_json::json;

use crate::common::{TestApp, routes, shell_classifier};

const ALLOW_ORIGIN: &str = "access-control-allow-origin";
const FRONTEND: &str = "http://localhost:3000";

mod default_config {
    use super::*;

    #[tokio::test]
    async fn preflight_allows_any_origin() {
        let app = TestApp::spawn(shell_classifier("cat")).await;

        let res = app.preflight(routes::CLASSIFY, FRONTEND).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.header(ALLOW_ORIGIN), Some("*"));
        let methods = res.header("access-control-allow-methods").unwrap_or_default();
        assert!(methods.contains("POST"), "allow-methods: {methods}");
    }

    #[tokio::test]
    async fn cross_origin_classify_is_allowed() {
        let app = TestApp::spawn(shell_classifier("cat > /dev/null; printf 'Two Sum'")).await;

        let res = app
            .post_json_from(routes::CLASSIFY, "http://example.test", &json!({ "code": "x" }))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.header(ALLOW_ORIGIN), Some("*"));
        assert_eq!(res.body["problemName"], "Two Sum");
    }
}

mod allow_list {
    use super::*;

    #[tokio::test]
    async fn listed_origin_is_echoed() {
        let app = TestApp::spawn_with_origins(&[FRONTEND]).await;

        let res = app.preflight(routes::CLASSIFY, FRONTEND).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.header(ALLOW_ORIGIN), Some(FRONTEND));
    }

    #[tokio::test]
    async fn unlisted_origin_gets_no_allow_header() {
        let app = TestApp::spawn_with_origins(&[FRONTEND]).await;

        let res = app.preflight(routes::CLASSIFY, "http://evil.test").await;

        assert_eq!(res.header(ALLOW_ORIGIN), None);
    }

    #[tokio::test]
    async fn unlisted_origin_on_classify_gets_no_allow_header() {
        let app = TestApp::spawn_with_origins(&[FRONTEND]).await;

        let res = app
            .post_json_from(routes::CLASSIFY, "http://evil.test", &json!({ "code": "x" }))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.header(ALLOW_ORIGIN), None);
    }
}
