mod common;

use common::{sample_book, TestApp};
use serde_json::json;

#[tokio::test]
async fn create_book_returns_201_and_the_book() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/books", app.address))
        .json(&sample_book())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["book"]["isbn"], "8748374297");
    assert_eq!(body["book"]["title"], "My nose");
    assert_eq!(body["book"]["pages"], 150);

    // Verify the row landed in the database.
    let stored = app
        .db
        .get_book("8748374297")
        .await
        .expect("Failed to query book")
        .expect("Book not found in DB");
    assert_eq!(stored.author, "Welly");
}

#[tokio::test]
async fn create_book_without_required_fields_returns_400() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/books", app.address))
        .json(&json!({ "author": "Welly", "page": "150" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn create_book_with_mistyped_fields_returns_400() {
    let app = TestApp::spawn().await;

    let mut payload = sample_book();
    payload["pages"] = json!("one hundred and fifty");

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/books", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn create_book_with_invalid_field_values_returns_400() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let mut negative_pages = sample_book();
    negative_pages["pages"] = json!(-5);
    let response = client
        .post(format!("{}/books", app.address))
        .json(&negative_pages)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(400, response.status().as_u16());

    let mut bad_url = sample_book();
    bad_url["amazon_url"] = json!("not a url");
    let response = client
        .post(format!("{}/books", app.address))
        .json(&bad_url)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn create_book_with_duplicate_isbn_returns_409() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/books", app.address))
        .json(&sample_book())
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, response.status().as_u16());

    let response = client
        .post(format!("{}/books", app.address))
        .json(&sample_book())
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(409, response.status().as_u16());
}

#[tokio::test]
async fn list_books_returns_all_stored_books() {
    let app = TestApp::spawn().await;
    let seeded_isbn = app.seed_book().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/books", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let books = body["books"].as_array().expect("books is not an array");
    assert_eq!(1, books.len());
    assert_eq!(books[0]["isbn"], seeded_isbn);
    assert!(books[0]["title"].is_string());

    // A second book shows up too.
    client
        .post(format!("{}/books", app.address))
        .json(&sample_book())
        .send()
        .await
        .expect("Failed to execute request.");

    let body: serde_json::Value = client
        .get(format!("{}/books", app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(2, body["books"].as_array().unwrap().len());
}

#[tokio::test]
async fn get_book_returns_the_matching_book() {
    let app = TestApp::spawn().await;
    let isbn = app.seed_book().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/books/{}", app.address, isbn))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["book"]["isbn"], isbn);
    assert!(body["book"]["title"].is_string());
}

#[tokio::test]
async fn get_unknown_isbn_returns_404() {
    let app = TestApp::spawn().await;
    app.seed_book().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/books/1000", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn update_book_overwrites_fields_and_returns_them() {
    let app = TestApp::spawn().await;
    let isbn = app.seed_book().await;

    let client = reqwest::Client::new();
    let response = client
        .put(format!("{}/books/{}", app.address, isbn))
        .json(&json!({
            "amazon_url": "https://amazon.com",
            "author": "Elsie",
            "language": "english",
            "pages": 300,
            "publisher": "Wabi Times",
            "title": "My awesome life",
            "year": 2018
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["book"]["author"], "Elsie");
    assert_eq!(body["book"]["pages"], 300);
    assert_eq!(body["book"]["isbn"], isbn);

    let stored = app
        .db
        .get_book(&isbn)
        .await
        .expect("Failed to query book")
        .expect("Book not found in DB");
    assert_eq!(stored.author, "Elsie");
    assert_eq!(stored.pages, 300);
}

#[tokio::test]
async fn update_unknown_isbn_returns_404() {
    let app = TestApp::spawn().await;

    let client = reqwest::Client::new();
    let response = client
        .put(format!("{}/books/1000", app.address))
        .json(&json!({
            "amazon_url": "https://amazon.com",
            "author": "Elsie",
            "language": "english",
            "pages": 300,
            "publisher": "Wabi Times",
            "title": "My awesome life",
            "year": 2018
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn update_book_rejects_isbn_in_payload() {
    let app = TestApp::spawn().await;
    let isbn = app.seed_book().await;

    let client = reqwest::Client::new();
    let response = client
        .put(format!("{}/books/{}", app.address, isbn))
        .json(&json!({
            "isbn": "0000000000",
            "amazon_url": "https://amazon.com",
            "author": "Elsie",
            "language": "english",
            "pages": 300,
            "publisher": "Wabi Times",
            "title": "My awesome life",
            "year": 2018
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());

    // The key must be unchanged.
    let stored = app
        .db
        .get_book(&isbn)
        .await
        .expect("Failed to query book");
    assert!(stored.is_some());
}

#[tokio::test]
async fn delete_book_returns_deleted_message() {
    let app = TestApp::spawn().await;
    let isbn = app.seed_book().await;

    let client = reqwest::Client::new();
    let response = client
        .delete(format!("{}/books/{}", app.address, isbn))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "message": "deleted" }));

    let stored = app
        .db
        .get_book(&isbn)
        .await
        .expect("Failed to query book");
    assert!(stored.is_none());
}

#[tokio::test]
async fn delete_previously_deleted_isbn_returns_404() {
    let app = TestApp::spawn().await;
    let isbn = app.seed_book().await;

    let client = reqwest::Client::new();
    let response = client
        .delete(format!("{}/books/{}", app.address, isbn))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let response = client
        .delete(format!("{}/books/{}", app.address, isbn))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());
}
