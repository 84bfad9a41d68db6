use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, is_admin: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Agri Prices" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "🌾 Agri Prices" }
                    nav {
                        ul {
                            li { a href="/" { "Prices" } }
                            li { a href="/export/prices.xlsx" { "Download" } }
                            @if is_admin {
                                li { a href="/admin" { "Admin" } }
                            }
                        }
                    }
                    @if is_admin {
                        form action="/logout" method="post" class="inline" {
                            button type="submit" class="link" { "Sign out" }
                        }
                    } @else {
                        a href="/login" class="login-link" { "Admin login" }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "Prices are indicative market averages, not trading quotes." }
                }
            }
        }
    }
}
