use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::types::AuthState;

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<AuthState>,
) -> Html<&'static str> {
    let mut state = shared_state.lock().await;
    // Taking the sender makes any further redirect a no-op.
    let Some(sender) = state.take() else {
        return Html("<h4>Authorization already completed.</h4>");
    };

    if let Some(error) = params.get("error") {
        let _ = sender.send(Err(format!("authorization denied: {error}")));
        return Html("<h4>Authorization failed. You can close this window.</h4>");
    }

    match params.get("code") {
        Some(code) => {
            let _ = sender.send(Ok(code.clone()));
            Html("<h2>Authorization successful.</h2><p>You can close this browser window.</p>")
        }
        None => {
            let _ = sender.send(Err(String::from(
                "redirect did not contain an authorization code",
            )));
            Html("<h4>Missing authorization code.</h4>")
        }
    }
}
