use crate::domain::listing::{format_price, Listing};
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        a class="listing-link" href=(format!("/listings/{}", listing.id)) {
            div class="card listing-card" {
                img class="card-img-top" src=(listing.image.url) alt=(listing.image.filename);
                div class="card-body" {
                    p class="card-text" {
                        b { (listing.title) }
                        br;
                        @if let Some(price) = listing.price {
                            "$" (format_price(price)) " / night"
                        }
                    }
                }
            }
        }
    }
}
