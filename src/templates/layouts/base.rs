use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Wanderlust" }
                link rel="stylesheet" href="/css/style.css";
            }
            body {
                header class="navbar" {
                    a class="brand" href="/listings" { "Wanderlust" }
                    nav {
                        ul {
                            li { a href="/listings" { "All Listings" } }
                            li { a href="/listings/new" { "Add New Listing" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer {
                    p { "© Wanderlust" }
                }
            }
        }
    }
}
