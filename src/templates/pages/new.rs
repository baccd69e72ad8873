use crate::templates::{
    base_layout,
    components::{listing_form, FormMode},
};
use maud::{html, Markup};

pub fn new_page() -> Markup {
    base_layout(
        "New Listing",
        html! {
            h3 { "Create a New Listing" }
            (listing_form(FormMode::Create))
        },
    )
}
