use crate::common::{TestApp, routes, shell_classifier};

#[tokio::test]
async fn status_reports_running() {
    let app = TestApp::spawn(shell_classifier("cat")).await;

    let res = app.get(routes::STATUS).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["status"], "running");
    assert_eq!(res.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn editor_page_is_served_at_root() {
    let app = TestApp::spawn(shell_classifier("cat")).await;

    let res = app.get(routes::EDITOR).await;

    assert_eq!(res.status, 200);
    assert!(res.text.contains("<textarea"));
    assert!(res.text.contains("/classify"));
}

#[tokio::test]
async fn openapi_document_lists_classify() {
    let app = TestApp::spawn(shell_classifier("cat")).await;

    let res = app.get(routes::OPENAPI).await;

    assert_eq!(res.status, 200);
    assert!(res.body["paths"]["/classify"]["post"].is_object());
    assert!(res.body["paths"]["/status"]["get"].is_object());
}
