use crate::templates::base_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    base_layout(
        &format!("Error {status}"),
        html! {
            div class="alert alert-danger" role="alert" {
                h4 { "Error " (status) }
                p { (message) }
            }
            p { a href="/listings" { "← Back to listings" } }
        },
    )
}
