// src/validation.rs
use crate::domain::ListingForm;
use crate::errors::ServerError;
use crate::forms::FormPayload;

/// Form key carrying the method override; never part of the listing.
pub const METHOD_OVERRIDE_KEY: &str = "_method";

/// (form key, label used in messages)
const TEXT_FIELDS: [(&str, &str); 6] = [
    ("title", "title"),
    ("description", "description"),
    ("image[url]", "image.url"),
    ("image[filename]", "image.filename"),
    ("location", "location"),
    ("country", "country"),
];
const PRICE_FIELD: &str = "price";

/// Checks a create/update payload. All violations are reported together,
/// joined with commas.
pub fn validate_listing(payload: &FormPayload) -> Result<ListingForm, ServerError> {
    let mut errors: Vec<String> = Vec::new();
    let mut form = ListingForm::default();

    let title = single_string(payload, "title", "title", &mut errors);
    match title {
        None if payload.values("title").is_empty() => errors.push(r#""title" is required"#.into()),
        Some(t) if t.is_empty() => errors.push(r#""title" is not allowed to be empty"#.into()),
        Some(t) => form.title = t,
        None => {}
    }

    let [_, description, image_url, image_filename, location, country] = TEXT_FIELDS;
    form.description = single_string(payload, description.0, description.1, &mut errors);
    form.image.url = single_string(payload, image_url.0, image_url.1, &mut errors);
    form.image.filename = single_string(payload, image_filename.0, image_filename.1, &mut errors);
    form.location = single_string(payload, location.0, location.1, &mut errors);
    form.country = single_string(payload, country.0, country.1, &mut errors);

    if let Some(raw) = single_string(payload, PRICE_FIELD, PRICE_FIELD, &mut errors) {
        form.price = parse_price(&raw, &mut errors);
    }

    for key in payload.keys() {
        let known = key == PRICE_FIELD
            || key == METHOD_OVERRIDE_KEY
            || TEXT_FIELDS.iter().any(|(k, _)| *k == key);
        if known {
            continue;
        }
        if key == "image" {
            errors.push(r#""image" must be of type object"#.into());
        } else {
            errors.push(format!("\"{key}\" is not allowed"));
        }
    }

    if errors.is_empty() {
        Ok(form)
    } else {
        tracing::debug!(violations = errors.len(), "listing payload rejected");
        Err(ServerError::Validation(errors.join(",")))
    }
}

/// The field's value if submitted exactly once.
fn single_string(
    payload: &FormPayload,
    key: &str,
    label: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match payload.values(key).as_slice() {
        [] => None,
        [one] => Some((*one).to_string()),
        _ => {
            errors.push(format!("\"{label}\" must be a string"));
            None
        }
    }
}

/// An empty price means "not given".
fn parse_price(raw: &str, errors: &mut Vec<String>) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(p) if !p.is_finite() => {
            errors.push(r#""price" must be a number"#.into());
            None
        }
        Ok(p) if p < 0.0 => {
            errors.push(r#""price" must be greater than or equal to 0"#.into());
            None
        }
        Ok(p) => Some(p),
        Err(_) => {
            errors.push(r#""price" must be a number"#.into());
            None
        }
    }
}
