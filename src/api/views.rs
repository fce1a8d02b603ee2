//! HTML views. Each route renders from its own typed view model.

use axum::response::Html;

pub struct IndexView<'a> {
    pub login_path: &'a str,
}

pub struct CallbackView<'a> {
    pub name: &'a str,
}

impl IndexView<'_> {
    pub fn render(&self) -> Html<String> {
        Html(page(
            "Spotify OAuth",
            &format!(
                "    <h1>Spotify OAuth</h1>\n    <a href=\"{}\">Login with Spotify</a>\n",
                escape(self.login_path)
            ),
        ))
    }
}

impl CallbackView<'_> {
    pub fn render(&self) -> Html<String> {
        Html(page(
            "Logged in",
            &format!(
                "    <h1>Hello, {}!</h1>\n    <p>You are logged in with Spotify.</p>\n    <a href=\"/\">Back</a>\n",
                escape(self.name)
            ),
        ))
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{}</title></head>
<body>
{}</body>
</html>"#,
        escape(title),
        body
    )
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
