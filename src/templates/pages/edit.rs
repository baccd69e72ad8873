use crate::domain::Listing;
use crate::templates::{
    base_layout,
    components::{listing_form, FormMode},
};
use maud::{html, Markup};

pub fn edit_page(listing: &Listing) -> Markup {
    base_layout(
        "Edit Listing",
        html! {
            h3 { "Edit your Listing" }
            (listing_form(FormMode::Edit(listing)))
        },
    )
}
