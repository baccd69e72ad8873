// templates/pages/index.rs

use crate::domain::Listing;
use crate::templates::{components::listing_card, base_layout};
use maud::{html, Markup};

pub fn index_page(listings: &[Listing]) -> Markup {
    base_layout(
        "All Listings",
        html! {
            h3 { "All Listings" }
            @if listings.is_empty() {
                p class="empty" { "No listings yet." }
            } @else {
                div class="listing-grid" {
                    @for listing in listings {
                        (listing_card(listing))
                    }
                }
            }
        },
    )
}
