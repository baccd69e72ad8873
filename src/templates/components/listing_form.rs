use crate::domain::Listing;
use crate::templates::components::button;
use maud::{html, Markup};

pub enum FormMode<'a> {
    Create,
    Edit(&'a Listing),
}

/// Shared create/edit form. Edit posts with a `_method=PUT` override.
pub fn listing_form(mode: FormMode<'_>) -> Markup {
    let (action, submit, existing) = match mode {
        FormMode::Create => ("/listings".to_string(), "Add", None),
        FormMode::Edit(listing) => (
            format!("/listings/{}?_method=PUT", listing.id),
            "Edit",
            Some(listing),
        ),
    };

    let title = existing.map(|l| l.title.as_str()).unwrap_or_default();
    let description = existing
        .and_then(|l| l.description.as_deref())
        .unwrap_or_default();
    let image_url = existing.map(|l| l.image.url.as_str()).unwrap_or_default();
    // Exact value, so saving an untouched form keeps the stored price.
    let price = existing
        .and_then(|l| l.price)
        .map(|p| p.to_string())
        .unwrap_or_default();
    let location = existing
        .and_then(|l| l.location.as_deref())
        .unwrap_or_default();
    let country = existing
        .and_then(|l| l.country.as_deref())
        .unwrap_or_default();

    html! {
        form method="post" action=(action) class="listing-form" {
            div class="field" {
                label for="title" { "Title" }
                input id="title" name="title" type="text" value=(title) placeholder="Add a catchy title" required;
            }
            div class="field" {
                label for="description" { "Description" }
                textarea id="description" name="description" { (description) }
            }
            div class="field" {
                label for="image-url" { "Image Link" }
                input id="image-url" name="image[url]" type="text" value=(image_url) placeholder="Enter image URL";
            }
            div class="row" {
                div class="field" {
                    label for="price" { "Price" }
                    input id="price" name="price" type="number" min="0" step="any" value=(price) placeholder="1200";
                }
                div class="field" {
                    label for="country" { "Country" }
                    input id="country" name="country" type="text" value=(country) placeholder="India";
                }
            }
            div class="field" {
                label for="location" { "Location" }
                input id="location" name="location" type="text" value=(location) placeholder="Jaipur, Rajasthan";
            }
            (button(submit, "btn btn-primary"))
        }
    }
}
