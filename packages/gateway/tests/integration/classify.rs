use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::common::{FailingClassifier, TestApp, routes, shell_classifier};

/// Number of classifier processes that appended to `counter`.
fn spawn_count(counter: &Path) -> usize {
    std::fs::read_to_string(counter)
        .map(|s| s.lines().count())
        .unwrap_or(0)
}

#[cfg(unix)]
mod success {
    use super::*;

    #[tokio::test]
    async fn returns_trimmed_classifier_output() {
        let app = TestApp::spawn(shell_classifier(
            "cat > /dev/null; printf '  Two Sum$Array$Hash Table\\n\\n'",
        ))
        .await;

        let res = app
            .post_json(routes::CLASSIFY, &json!({ "code": "class Solution {}" }))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({ "problemName": "Two Sum$Array$Hash Table" }));
    }

    #[tokio::test]
    async fn forwards_exact_submission_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let captured = dir.path().join("stdin.txt");
        let app = TestApp::spawn(shell_classifier(format!(
            "cat > '{}'; printf 'Two Sum'",
            captured.display()
        )))
        .await;

        let code = "  class Solution {\r\n    int[] twoSum(int[] nums, int t) { return null; }\n}\n\n";
        let res = app.post_json(routes::CLASSIFY, &json!({ "code": code })).await;

        assert_eq!(res.status, 200);
        assert_eq!(std::fs::read(&captured).unwrap(), code.as_bytes());
    }

    #[tokio::test]
    async fn spawns_one_process_per_request() {
        let dir = tempfile::tempdir().unwrap();
        let counter = dir.path().join("spawns");
        let app = TestApp::spawn(shell_classifier(format!(
            "echo spawned >> '{}'; cat > /dev/null; printf 'Two Sum'",
            counter.display()
        )))
        .await;

        for i in 0..3 {
            let res = app
                .post_json(routes::CLASSIFY, &json!({ "code": format!("int x = {i};") }))
                .await;
            assert_eq!(res.status, 200);
        }

        assert_eq!(spawn_count(&counter), 3);
    }

    #[tokio::test]
    async fn whitespace_only_code_is_forwarded() {
        let app = TestApp::spawn(shell_classifier(
            "cat > /dev/null; printf 'Solution does not compile yet...'",
        ))
        .await;

        let res = app.post_json(routes::CLASSIFY, &json!({ "code": "   \n" })).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["problemName"], "Solution does not compile yet...");
    }

    #[tokio::test]
    async fn concurrent_requests_each_get_their_own_process() {
        let app = Arc::new(TestApp::spawn(shell_classifier("cat")).await);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let app = Arc::clone(&app);
                tokio::spawn(async move {
                    app.post_json(routes::CLASSIFY, &json!({ "code": format!("problem-{i}") }))
                        .await
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let res = handle.await.unwrap();
            assert_eq!(res.status, 200);
            assert_eq!(res.body["problemName"], format!("problem-{i}"));
        }
    }
}

#[cfg(unix)]
mod validation {
    use super::*;

    #[tokio::test]
    async fn missing_code_is_rejected_without_spawning() {
        let dir = tempfile::tempdir().unwrap();
        let counter = dir.path().join("spawns");
        let app = TestApp::spawn(shell_classifier(format!(
            "echo spawned >> '{}'",
            counter.display()
        )))
        .await;

        let res = app.post_json(routes::CLASSIFY, &json!({})).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["error"], "No code provided");
        assert_eq!(spawn_count(&counter), 0);
    }

    #[tokio::test]
    async fn empty_and_null_code_are_rejected() {
        let app = TestApp::spawn(shell_classifier("cat")).await;

        for body in [json!({ "code": "" }), json!({ "code": null })] {
            let res = app.post_json(routes::CLASSIFY, &body).await;
            assert_eq!(res.status, 400);
            assert_eq!(res.body["error"], "No code provided");
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let app = TestApp::spawn(shell_classifier("cat")).await;

        let res = app.post_raw(routes::CLASSIFY, "{\"code\": ").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert!(res.body["error"].is_string());
    }

    #[tokio::test]
    async fn non_string_code_is_a_validation_error() {
        let app = TestApp::spawn(shell_classifier("cat")).await;

        let res = app.post_json(routes::CLASSIFY, &json!({ "code": 42 })).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod failure {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_a_generic_500() {
        let app = TestApp::spawn(shell_classifier(
            "cat > /dev/null; echo 'Exception in thread main: secret detail' >&2; exit 1",
        ))
        .await;

        let res = app
            .post_json(routes::CLASSIFY, &json!({ "code": "class Solution {}" }))
            .await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "INTERNAL_ERROR");
        assert_eq!(res.body["error"], "Error processing code");
        assert!(!res.text.contains("secret detail"));
    }

    #[tokio::test]
    async fn spawn_failure_is_a_generic_500() {
        let mut config = shell_classifier("unused");
        config.program = "/nonexistent/classifier-binary".into();
        let app = TestApp::spawn(config).await;

        let res = app.post_json(routes::CLASSIFY, &json!({ "code": "x" })).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["error"], "Error processing code");
    }

    #[tokio::test]
    async fn stream_failure_is_a_generic_500() {
        let app = TestApp::spawn_with_classifier(Arc::new(FailingClassifier)).await;

        let res = app.post_json(routes::CLASSIFY, &json!({ "code": "x" })).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "INTERNAL_ERROR");
        assert!(!res.text.contains("stream closed"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn timeout_is_a_generic_500() {
        let mut config = shell_classifier("sleep 5");
        config.timeout_secs = Some(1);
        let app = TestApp::spawn(config).await;

        let res = app.post_json(routes::CLASSIFY, &json!({ "code": "x" })).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["error"], "Error processing code");
    }
}
