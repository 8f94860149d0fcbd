use actix_web::{http::StatusCode, test, App};
use pretty_assertions::assert_eq;
use serde_json::json;

use super::fake::FakeCatalog;
use super::send;
use crate::routes;

#[actix_web::test]
async fn test_categories_are_sorted_by_name() {
    let fake = FakeCatalog::new();
    fake.add_category("Mountains", "#16a34a");
    fake.add_category("Coast", "#0ea5e9");
    let app = test::init_service(App::new().app_data(fake.app_data()).configure(routes::config)).await;

    let req = test::TestRequest::get().uri("/categories").to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"][0]["name"], "Coast");
    assert_eq!(body["categories"][1]["name"], "Mountains");
}

#[actix_web::test]
async fn test_category_list_failure_offers_retry() {
    let fake = FakeCatalog::new();
    fake.fail();
    let app = test::init_service(App::new().app_data(fake.app_data()).configure(routes::config)).await;

    let req = test::TestRequest::get().uri("/categories").to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Failed to load categories.");
}

#[actix_web::test]
async fn test_create_category() {
    let fake = FakeCatalog::new();
    let app = test::init_service(App::new().app_data(fake.app_data()).configure(routes::config)).await;

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Waterfalls", "color": "#38bdf8" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "The category was created.");
    assert_eq!(body["category"]["name"], "Waterfalls");
    assert_eq!(fake.data().categories[0].color.as_deref(), Some("#38bdf8"));
}

#[actix_web::test]
async fn test_blank_category_name_is_rejected() {
    let fake = FakeCatalog::new();
    let app = test::init_service(App::new().app_data(fake.app_data()).configure(routes::config)).await;

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"], json!({ "name": "Name is required" }));
    assert_eq!(fake.data().writes, 0);
}

#[actix_web::test]
async fn test_duplicate_category_is_an_alert() {
    let fake = FakeCatalog::new();
    fake.add_category("Coast", "#0ea5e9");
    let app = test::init_service(App::new().app_data(fake.app_data()).configure(routes::config)).await;

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Coast" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["presentation"], "alert");
    assert_eq!(body["message"], "Failed to create category.");
    assert_eq!(fake.data().categories.len(), 1);
}

#[actix_web::test]
async fn test_update_category_clears_description() {
    let fake = FakeCatalog::new();
    let coast = fake.add_category("Coast", "#0ea5e9");
    fake.data().categories[0].description = Some("Sea views".to_string());
    let app = test::init_service(App::new().app_data(fake.app_data()).configure(routes::config)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/categories/{}", coast.id))
        .set_json(json!({ "description": null, "color": "#0284c7" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "The category was updated.");

    let data = fake.data();
    assert_eq!(data.categories[0].name, "Coast");
    assert_eq!(data.categories[0].description, None);
    assert_eq!(data.categories[0].color.as_deref(), Some("#0284c7"));
}

#[actix_web::test]
async fn test_update_category_rejects_blank_name() {
    let fake = FakeCatalog::new();
    let coast = fake.add_category("Coast", "#0ea5e9");
    let app = test::init_service(App::new().app_data(fake.app_data()).configure(routes::config)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/categories/{}", coast.id))
        .set_json(json!({ "name": "  " }))
        .to_request();
    let (status, _) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(fake.data().categories[0].name, "Coast");
}

#[actix_web::test]
async fn test_get_and_delete_category() {
    let fake = FakeCatalog::new();
    let coast = fake.add_category("Coast", "#0ea5e9");
    let app = test::init_service(App::new().app_data(fake.app_data()).configure(routes::config)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/categories/{}", coast.id))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"]["id"], coast.id);

    let req = test::TestRequest::delete()
        .uri(&format!("/categories/{}", coast.id))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "The category was deleted.");

    let req = test::TestRequest::get()
        .uri(&format!("/categories/{}", coast.id))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found.");
}
