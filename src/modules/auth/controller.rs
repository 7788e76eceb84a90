use axum::response::Html;

/// Placeholder until the identity provider's hosted sign-in is wired in.
pub async fn signin_page() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>Sign in</title></head>\
         <body><h1>Sign in</h1><p>Continue with your identity provider.</p></body></html>",
    )
}
