use crate::domain::object_id::ObjectId;

pub const DEFAULT_IMAGE_FILENAME: &str = "listingimage";
pub const DEFAULT_IMAGE_URL: &str = "https://static.vecteezy.com/system/resources/previews/012/168/187/large_2x/beautiful-sunset-on-the-beach-with-palm-tree-for-travel-and-vacation-free-photo.JPG";

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub filename: String,
    pub url: String,
}

impl Default for Image {
    fn default() -> Self {
        Self {
            filename: DEFAULT_IMAGE_FILENAME.to_string(),
            url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ObjectId,
    pub title: String,
    pub description: Option<String>,
    pub image: Image,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub country: Option<String>,
    /// Review ids in attach order.
    pub reviews: Vec<ObjectId>,
}

/// Image fields as submitted; either may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageForm {
    pub filename: Option<String>,
    pub url: Option<String>,
}

/// A payload that passed the validation gate. Used for both create and
/// update: on update only the `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub description: Option<String>,
    pub image: ImageForm,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub country: Option<String>,
}

/// Empty urls revert to the placeholder instead of being stored.
pub fn normalize_image_url(url: &str) -> String {
    if url.is_empty() {
        DEFAULT_IMAGE_URL.to_string()
    } else {
        url.to_string()
    }
}

/// Optional text submitted empty is stored as absent.
fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

impl Listing {
    /// Builds a fresh record from a validated form, filling image defaults.
    pub fn from_form(id: ObjectId, form: ListingForm) -> Self {
        let image = Image {
            filename: form
                .image
                .filename
                .unwrap_or_else(|| DEFAULT_IMAGE_FILENAME.to_string()),
            url: form
                .image
                .url
                .as_deref()
                .map_or_else(|| DEFAULT_IMAGE_URL.to_string(), normalize_image_url),
        };

        Self {
            id,
            title: form.title,
            description: form.description.and_then(non_empty),
            image,
            price: form.price,
            location: form.location.and_then(non_empty),
            country: form.country.and_then(non_empty),
            reviews: Vec::new(),
        }
    }

    /// Partial replacement: fields absent from the form keep their value,
    /// optional text submitted empty is cleared.
    pub fn apply(&mut self, form: ListingForm) {
        self.title = form.title;
        if let Some(description) = form.description {
            self.description = non_empty(description);
        }
        if let Some(filename) = form.image.filename {
            self.image.filename = filename;
        }
        if let Some(url) = form.image.url {
            self.image.url = normalize_image_url(&url);
        }
        if let Some(price) = form.price {
            self.price = Some(price);
        }
        if let Some(location) = form.location {
            self.location = non_empty(location);
        }
        if let Some(country) = form.country {
            self.country = non_empty(country);
        }
    }
}

/// Renders prices without a trailing ".00" for whole amounts.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}
