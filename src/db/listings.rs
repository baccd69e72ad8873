// src/db/listings.rs
use crate::db::{now_unix, reviews};
use crate::domain::{Image, Listing, ListingForm, ObjectId};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashMap;

const SELECT_LISTING: &str = r#"
    select id, title, description, image_filename, image_url, price, location, country
    from listings
"#;

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    Ok(Listing {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        image: Image {
            filename: row.get(3)?,
            url: row.get(4)?,
        },
        price: row.get(5)?,
        location: row.get(6)?,
        country: row.get(7)?,
        reviews: Vec::new(),
    })
}

fn review_ids_for(conn: &Connection, listing_id: &ObjectId) -> Result<Vec<ObjectId>, ServerError> {
    let mut stmt = conn.prepare(
        "select review_id from listing_reviews where listing_id = ?1 order by position",
    )?;
    let ids = stmt
        .query_map(params![listing_id], |row| row.get(0))?
        .collect::<Result<Vec<ObjectId>, _>>()?;
    Ok(ids)
}

/// All listings in insertion order.
pub fn find_all(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn.prepare(&format!("{SELECT_LISTING} order by rowid"))?;
    let mut listings = stmt
        .query_map([], listing_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    let mut links: HashMap<ObjectId, Vec<ObjectId>> = HashMap::new();
    let mut stmt =
        conn.prepare("select listing_id, review_id from listing_reviews order by listing_id, position")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, ObjectId>(0)?, row.get::<_, ObjectId>(1)?))
    })?;
    for row in rows {
        let (listing_id, review_id) = row?;
        links.entry(listing_id).or_default().push(review_id);
    }

    for listing in &mut listings {
        if let Some(ids) = links.remove(&listing.id) {
            listing.reviews = ids;
        }
    }
    Ok(listings)
}

pub fn find_by_id(conn: &Connection, id: &ObjectId) -> Result<Option<Listing>, ServerError> {
    let found = conn
        .query_row(
            &format!("{SELECT_LISTING} where id = ?1"),
            params![id],
            listing_from_row,
        )
        .optional()?;

    match found {
        Some(mut listing) => {
            listing.reviews = review_ids_for(conn, id)?;
            Ok(Some(listing))
        }
        None => Ok(None),
    }
}

pub fn create(conn: &Connection, form: ListingForm) -> Result<Listing, ServerError> {
    let listing = Listing::from_form(ObjectId::new(), form);

    conn.execute(
        r#"
        insert into listings (
            id, title, description, image_filename, image_url, price, location, country
        ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
        params![
            listing.id,
            listing.title,
            listing.description,
            listing.image.filename,
            listing.image.url,
            listing.price,
            listing.location,
            listing.country,
        ],
    )?;

    tracing::info!(listing_id = %listing.id, title = %listing.title, "listing created");
    Ok(listing)
}

/// Writes the fields present in `form`; returns the updated record.
pub fn update_by_id(
    conn: &mut Connection,
    id: &ObjectId,
    form: ListingForm,
) -> Result<Option<Listing>, ServerError> {
    let tx = conn.transaction()?;
    let Some(mut listing) = find_by_id(&tx, id)? else {
        return Ok(None);
    };

    listing.apply(form);

    tx.execute(
        r#"
        update listings set
            title = ?2,
            description = ?3,
            image_filename = ?4,
            image_url = ?5,
            price = ?6,
            location = ?7,
            country = ?8
        where id = ?1
        "#,
        params![
            listing.id,
            listing.title,
            listing.description,
            listing.image.filename,
            listing.image.url,
            listing.price,
            listing.location,
            listing.country,
        ],
    )?;
    tx.commit()?;

    tracing::info!(listing_id = %id, "listing updated");
    Ok(Some(listing))
}

/// Appends a review reference to a listing. Returns false if the listing
/// does not exist.
pub fn attach_review(
    conn: &Connection,
    listing_id: &ObjectId,
    review_id: &ObjectId,
) -> Result<bool, ServerError> {
    let exists: bool = conn.query_row(
        "select exists(select 1 from listings where id = ?1)",
        params![listing_id],
        |row| row.get(0),
    )?;
    if !exists {
        return Ok(false);
    }

    conn.execute(
        r#"
        insert into listing_reviews (listing_id, review_id, position)
        values (
            ?1, ?2,
            (select coalesce(max(position), -1) + 1 from listing_reviews where listing_id = ?1)
        )
        on conflict(listing_id, review_id) do nothing
        "#,
        params![listing_id, review_id],
    )?;
    Ok(true)
}

/// Deletes a listing, then its reviews.
///
/// The listing and its review links go in one transaction. The reviews go
/// in a second one after that commit; if it fails the listing stays
/// deleted and the review ids land in `review_cleanup_queue` for
/// `reviews::sweep_review_cleanups`.
pub fn delete_by_id(conn: &mut Connection, id: &ObjectId) -> Result<Option<Listing>, ServerError> {
    let tx = conn.transaction()?;
    let Some(listing) = find_by_id(&tx, id)? else {
        return Ok(None);
    };
    tx.execute("delete from listing_reviews where listing_id = ?1", params![id])?;
    tx.execute("delete from listings where id = ?1", params![id])?;
    tx.commit()?;

    tracing::info!(listing_id = %id, reviews = listing.reviews.len(), "listing deleted");

    cascade_reviews(conn, &listing);
    Ok(Some(listing))
}

fn cascade_reviews(conn: &mut Connection, listing: &Listing) {
    if listing.reviews.is_empty() {
        return;
    }

    match reviews::delete_reviews(conn, &listing.reviews) {
        Ok(removed) => {
            tracing::debug!(listing_id = %listing.id, removed, "cascaded review delete");
        }
        Err(err) => {
            tracing::warn!(
                listing_id = %listing.id,
                error = %err,
                "review cascade failed, queueing cleanup"
            );
            let queued = reviews::queue_review_cleanup(
                conn,
                &listing.id,
                &listing.reviews,
                &err.to_string(),
                now_unix(),
            );
            if let Err(e) = queued {
                tracing::error!(
                    listing_id = %listing.id,
                    error = %e,
                    orphaned = ?listing.reviews,
                    "could not queue review cleanup"
                );
            }
        }
    }
}
