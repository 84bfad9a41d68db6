use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Admin sign in",
        false,
        html! {
            main class="container narrow" {
                h1 { "Admin sign in" }
                p class="lead" { "Enter the desk passcode to edit prices." }

                @if let Some(msg) = error {
                    p class="alert" role="alert" { (msg) }
                }

                form method="post" action="/login" class="stack" {
                    label for="passcode" { "Passcode" }
                    input type="password" id="passcode" name="passcode" autocomplete="current-password" required;
                    button type="submit" class="primary" { "Sign in" }
                }
            }
        },
    )
}
