use axum::response::Html;

use super::{LOGIN_PATH, views::IndexView};

pub async fn index() -> Html<String> {
    IndexView {
        login_path: LOGIN_PATH,
    }
    .render()
}
