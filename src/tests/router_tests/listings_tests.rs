use crate::db::listings::{attach_review, find_all, find_by_id};
use crate::db::now_unix;
use crate::db::reviews::{find_review_by_id, insert_review};
use crate::domain::listing::DEFAULT_IMAGE_URL;
use crate::tests::utils::{body_string, form_request, get, init_test_db, location, send};

#[test]
fn listing_lifecycle_end_to_end() {
    let db = init_test_db();

    // Create
    let resp = send(&db, form_request("POST", "/listings", "title=Cabin&price=100"));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");

    let resp = send(&db, get("/listings"));
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Cabin"));

    let id = db.with_conn(|conn| find_all(conn)).unwrap()[0].id;

    // Update through the form override
    let resp = send(
        &db,
        form_request("POST", &format!("/listings/{id}?_method=PUT"), "title=Cabin+v2"),
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), format!("/listings/{id}"));

    let resp = send(&db, get(&format!("/listings/{id}")));
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Cabin v2"));
    assert!(body.contains("$100"), "price survives a partial update");

    // Delete
    let resp = send(
        &db,
        form_request("POST", &format!("/listings/{id}?_method=DELETE"), ""),
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");

    let resp = send(&db, get(&format!("/listings/{id}")));
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Listing not found"));
}

#[test]
fn plain_put_and_delete_verbs_are_routed() {
    let db = init_test_db();
    send(&db, form_request("POST", "/listings", "title=Barn"));
    let id = db.with_conn(|conn| find_all(conn)).unwrap()[0].id;

    let resp = send(
        &db,
        form_request("PUT", &format!("/listings/{id}"), "title=Red+Barn&country=Sweden"),
    );
    assert_eq!(resp.status(), 302);
    let stored = db.with_conn(|conn| find_by_id(conn, &id)).unwrap().unwrap();
    assert_eq!(stored.title, "Red Barn");
    assert_eq!(stored.country.as_deref(), Some("Sweden"));

    let resp = send(&db, form_request("DELETE", &format!("/listings/{id}"), ""));
    assert_eq!(resp.status(), 302);
    assert!(db.with_conn(|conn| find_all(conn)).unwrap().is_empty());
}

#[test]
fn create_without_title_is_rejected_and_not_persisted() {
    let db = init_test_db();

    let resp = send(&db, form_request("POST", "/listings", "price=100&location=Goa"));

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("title"));
    assert!(db.with_conn(|conn| find_all(conn)).unwrap().is_empty());
}

#[test]
fn update_without_title_is_rejected() {
    let db = init_test_db();
    send(&db, form_request("POST", "/listings", "title=Cabin"));
    let id = db.with_conn(|conn| find_all(conn)).unwrap()[0].id;

    let resp = send(&db, form_request("PUT", &format!("/listings/{id}"), "title="));

    assert_eq!(resp.status(), 400);
    let stored = db.with_conn(|conn| find_by_id(conn, &id)).unwrap().unwrap();
    assert_eq!(stored.title, "Cabin");
}

#[test]
fn empty_image_url_is_stored_as_default() {
    let db = init_test_db();

    let resp = send(
        &db,
        form_request("POST", "/listings", "title=Villa&image%5Burl%5D="),
    );
    assert_eq!(resp.status(), 302);

    let listing = db.with_conn(|conn| find_all(conn)).unwrap().remove(0);
    assert_eq!(listing.image.url, DEFAULT_IMAGE_URL);
    assert_eq!(listing.image.filename, "listingimage");

    let id = listing.id;
    send(
        &db,
        form_request("PUT", &format!("/listings/{id}"), "title=Villa&image%5Burl%5D=https%3A%2F%2Fimg%2Fv.jpg"),
    );
    send(
        &db,
        form_request("PUT", &format!("/listings/{id}"), "title=Villa&image%5Burl%5D="),
    );
    let listing = db.with_conn(|conn| find_by_id(conn, &id)).unwrap().unwrap();
    assert_eq!(listing.image.url, DEFAULT_IMAGE_URL);
}

#[test]
fn deleting_a_listing_deletes_its_reviews() {
    let db = init_test_db();
    send(&db, form_request("POST", "/listings", "title=Cabin"));
    let id = db.with_conn(|conn| find_all(conn)).unwrap()[0].id;

    let (r1, r2) = db
        .with_conn(|conn| {
            let r1 = insert_review(conn, "Great stay", 5, now_unix())?;
            let r2 = insert_review(conn, "Cold at night", 3, now_unix())?;
            attach_review(conn, &id, &r1.id)?;
            attach_review(conn, &id, &r2.id)?;
            Ok((r1, r2))
        })
        .unwrap();

    let resp = send(&db, form_request("DELETE", &format!("/listings/{id}"), ""));
    assert_eq!(resp.status(), 302);

    for review in [r1, r2] {
        let found = db
            .with_conn(|conn| find_review_by_id(conn, &review.id))
            .unwrap();
        assert_eq!(found, None, "review {} should be gone", review.id);
    }
}

#[test]
fn new_and_edit_forms_render() {
    let db = init_test_db();

    let resp = send(&db, get("/listings/new"));
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"action="/listings""#));
    assert!(body.contains(r#"name="image[url]""#));

    send(&db, form_request("POST", "/listings", "title=Loft&location=Berlin"));
    let id = db.with_conn(|conn| find_all(conn)).unwrap()[0].id;

    let resp = send(&db, get(&format!("/listings/{id}/edit")));
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(&format!("/listings/{id}?_method=PUT")));
    assert!(body.contains(r#"value="Berlin""#));
}

#[test]
fn index_lists_in_insertion_order() {
    let db = init_test_db();
    for title in ["First", "Second", "Third"] {
        send(&db, form_request("POST", "/listings", &format!("title={title}")));
    }

    let body = body_string(send(&db, get("/listings")));

    let first = body.find("First").unwrap();
    let second = body.find("Second").unwrap();
    let third = body.find("Third").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn edit_form_prefills_exact_price() {
    let db = init_test_db();
    send(&db, form_request("POST", "/listings", "title=Cabin&price=99.999"));
    let id = db.with_conn(|conn| find_all(conn)).unwrap()[0].id;

    let body = body_string(send(&db, get(&format!("/listings/{id}/edit"))));
    assert!(body.contains(r#"value="99.999""#));

    // Resubmitting the untouched form keeps the price.
    let resp = send(
        &db,
        form_request("PUT", &format!("/listings/{id}"), "title=Cabin&price=99.999"),
    );
    assert_eq!(resp.status(), 302);
    let stored = db.with_conn(|conn| find_by_id(conn, &id)).unwrap().unwrap();
    assert_eq!(stored.price, Some(99.999));
}

#[test]
fn saving_edit_form_with_blank_fields_leaves_them_absent() {
    let db = init_test_db();
    send(&db, form_request("POST", "/listings", "title=Loft"));
    let id = db.with_conn(|conn| find_all(conn)).unwrap()[0].id;

    let resp = send(
        &db,
        form_request(
            "POST",
            &format!("/listings/{id}?_method=PUT"),
            "title=Loft&description=&image%5Burl%5D=&price=&country=&location=",
        ),
    );
    assert_eq!(resp.status(), 302);

    let stored = db.with_conn(|conn| find_by_id(conn, &id)).unwrap().unwrap();
    assert_eq!(stored.description, None);
    assert_eq!(stored.location, None);
    assert_eq!(stored.country, None);

    let body = body_string(send(&db, get(&format!("/listings/{id}"))));
    assert!(!body.contains(r#"<p class="card-text"></p>"#));
}
