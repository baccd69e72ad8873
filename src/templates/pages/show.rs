use crate::domain::listing::{format_price, Listing};
use crate::templates::{base_layout, components::button};
use maud::{html, Markup};

pub fn show_page(listing: &Listing) -> Markup {
    base_layout(
        &listing.title,
        html! {
            h3 { (listing.title) }
            div class="card show-card" {
                img class="card-img-top show-img" src=(listing.image.url) alt=(listing.image.filename);
                div class="card-body" {
                    @if let Some(description) = &listing.description {
                        p class="card-text" { (description) }
                    }
                    @if let Some(price) = listing.price {
                        p class="card-text" { "$" (format_price(price)) }
                    }
                    @if let Some(location) = &listing.location {
                        p class="card-text" { (location) }
                    }
                    @if let Some(country) = &listing.country {
                        p class="card-text" { (country) }
                    }
                    @if !listing.reviews.is_empty() {
                        p class="card-text reviews" { (listing.reviews.len()) " reviews" }
                    }
                }
            }
            div class="btns" {
                a class="btn btn-dark" href=(format!("/listings/{}/edit", listing.id)) { "Edit" }
                form method="post" action=(format!("/listings/{}?_method=DELETE", listing.id)) {
                    (button("Delete", "btn btn-dark"))
                }
            }
        },
    )
}
