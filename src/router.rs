use crate::db::{listings, Database};
use crate::domain::{Listing, ObjectId};
use crate::errors::{ResultResp, ServerError};
use crate::forms::{query_param, read_form};
use crate::responses::{error_to_response, html_response, redirect, text_response};
use crate::templates::pages;
use crate::validation::{validate_listing, METHOD_OVERRIDE_KEY};
use astra::{Request, Response};
use std::time::Instant;

pub const LISTING_NOT_FOUND: &str = "Listing not found";

/// One request through dispatch and the error page, logged.
pub fn respond(req: Request, db: &Database) -> Response {
    let started = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    };

    tracing::info!(
        method = %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = effective_method(&req);
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => text_response("Hi I am root"),

        ("GET", ["listings"]) => index(db),
        ("GET", ["listings", "new"]) => html_response(pages::new_page()),
        ("POST", ["listings"]) => create(&mut req, db),
        ("GET", ["listings", id]) => show(db, id),
        ("GET", ["listings", id, "edit"]) => edit(db, id),
        ("PUT", ["listings", id]) => update(&mut req, db, id),
        ("DELETE", ["listings", id]) => destroy(db, id),

        _ => Err(ServerError::RouteNotFound),
    }
}

/// POST with `?_method=PUT|DELETE` is dispatched as that verb.
fn effective_method(req: &Request) -> String {
    let method = req.method().as_str().to_ascii_uppercase();
    if method != "POST" {
        return method;
    }
    match query_param(req, METHOD_OVERRIDE_KEY).map(|m| m.to_ascii_uppercase()) {
        Some(over) if over == "PUT" || over == "DELETE" => over,
        _ => method,
    }
}

fn index(db: &Database) -> ResultResp {
    let all = db.with_conn(|conn| listings::find_all(conn))?;
    html_response(pages::index_page(&all))
}

fn create(req: &mut Request, db: &Database) -> ResultResp {
    let payload = read_form(req)?;
    let form = validate_listing(&payload)?;
    db.with_conn(|conn| listings::create(conn, form))?;
    redirect("/listings")
}

fn load_listing(db: &Database, raw_id: &str) -> Result<Listing, ServerError> {
    let id: ObjectId = raw_id.parse()?;
    db.with_conn(|conn| listings::find_by_id(conn, &id))?
        .ok_or(ServerError::NotFound(LISTING_NOT_FOUND))
}

fn show(db: &Database, raw_id: &str) -> ResultResp {
    let listing = load_listing(db, raw_id)?;
    html_response(pages::show_page(&listing))
}

fn edit(db: &Database, raw_id: &str) -> ResultResp {
    let listing = load_listing(db, raw_id)?;
    html_response(pages::edit_page(&listing))
}

fn update(req: &mut Request, db: &Database, raw_id: &str) -> ResultResp {
    let payload = read_form(req)?;
    let form = validate_listing(&payload)?;
    let id: ObjectId = raw_id.parse()?;

    let updated = db.with_conn(|conn| listings::update_by_id(conn, &id, form))?;
    match updated {
        Some(listing) => redirect(&format!("/listings/{}", listing.id)),
        None => Err(ServerError::NotFound(LISTING_NOT_FOUND)),
    }
}

fn destroy(db: &Database, raw_id: &str) -> ResultResp {
    let id: ObjectId = raw_id.parse()?;
    match db.with_conn(|conn| listings::delete_by_id(conn, &id))? {
        Some(_) => redirect("/listings"),
        None => Err(ServerError::NotFound(LISTING_NOT_FOUND)),
    }
}
