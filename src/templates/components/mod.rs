use maud::{html, Markup};

pub mod listing_card;
pub mod listing_form;

pub use listing_card::listing_card;
pub use listing_form::{listing_form, FormMode};

pub fn button(label: &str, class: &str) -> Markup {
    html! {
        button type="submit" class=(class) { (label) }
    }
}
