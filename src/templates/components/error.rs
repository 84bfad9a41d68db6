use maud::{html, Markup, DOCTYPE};

/// Standalone error page; does not need application state to render.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                main class="container narrow" {
                    h1 { "Error " (status) }
                    p class="lead" { (message) }
                    p { a href="/" { "← Back to prices" } }
                }
            }
        }
    }
}
