use axum::response::Html;

const EDITOR_PAGE: &str = include_str!("../../assets/index.html");

/// Single-page browser editor that calls `/classify` on the same origin.
pub async fn editor_page() -> Html<&'static str> {
    Html(EDITOR_PAGE)
}
