//! End-to-end tests over the assembled router: session gate, login flow,
//! product upload, and the public read APIs.

use std::io::Cursor;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use tower::Service;

use jiyer_server::core::{Config, ServerState, build_router};

async fn test_state() -> (tempfile::TempDir, ServerState) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    config.admin_password = "test-secret".into();
    let state = ServerState::initialize(&config).await;
    (dir, state)
}

async fn body_json(response: http::Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_request(uri: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &mut Router, password: &str) -> http::Response<Body> {
    let req = form_request("/login", &format!("password={}", password), None);
    app.call(req).await.unwrap()
}

async fn admin_token(app: &mut Router) -> String {
    let response = login(app, "test-secret").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::new(2, 2);
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn multipart_body(
    boundary: &str,
    fields: &[(&str, &str)],
    files: &[(&str, &str, Vec<u8>)],
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, filename, data) in files {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

fn multipart_request(
    uri: &str,
    token: &str,
    fields: &[(&str, &str)],
    files: &[(&str, &str, Vec<u8>)],
) -> Request<Body> {
    let boundary = "test-boundary";
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(multipart_body(boundary, fields, files)))
        .unwrap()
}

#[tokio::test]
async fn anonymous_mutation_is_rejected_without_touching_the_store() {
    let (_dir, state) = test_state().await;
    let mut app = build_router(state.clone());

    // Seed a product directly
    let view = state
        .catalog
        .create_product(
            jiyer_server::db::models::ProductCreate {
                category: "Solar".into(),
                name: "Panel".into(),
                code: "SP-1".into(),
                description: "desc".into(),
            },
            vec![],
        )
        .await
        .unwrap();

    let response = app
        .call(form_request(
            "/delete_product",
            &format!("product_id={}", view.id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Store untouched
    assert!(state.catalog.get_product(view.id).await.is_ok());

    // A made-up token is rejected too
    let response = app
        .call(form_request(
            "/delete_product",
            &format!("product_id={}", view.id),
            Some("not-a-real-token"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(state.catalog.get_product(view.id).await.is_ok());
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let (_dir, state) = test_state().await;
    let mut app = build_router(state);

    let response = login(&mut app, "wrong").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_logout_lifecycle() {
    let (_dir, state) = test_state().await;
    let mut app = build_router(state.clone());

    let view = state
        .catalog
        .create_product(
            jiyer_server::db::models::ProductCreate {
                category: "Solar".into(),
                name: "Panel".into(),
                code: "SP-1".into(),
                description: "desc".into(),
            },
            vec![],
        )
        .await
        .unwrap();

    let token = admin_token(&mut app).await;

    // Authenticated mutation succeeds
    let response = app
        .call(form_request(
            "/delete_product",
            &format!("product_id={}", view.id),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.catalog.get_product(view.id).await.is_err());

    // Logout revokes the token
    let response = app
        .call(form_request("/logout", "", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .call(form_request("/delete_product", "product_id=1", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn add_product_upload_and_read_back() {
    let (_dir, state) = test_state().await;
    let mut app = build_router(state.clone());
    let token = admin_token(&mut app).await;

    let response = app
        .call(multipart_request(
            "/add_product",
            &token,
            &[
                ("category", "Solar"),
                ("name", "Panel X"),
                ("code", "SP-1"),
                ("description", "A very green panel"),
            ],
            &[
                ("images", "front.png", png_bytes()),
                ("images", "back.png", png_bytes()),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Public list shows the product with both images, primary first
    let response = app
        .call(Request::builder().uri("/api/products").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let products = json["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    let images = products[0]["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);

    // The stored file is served back with an image content type
    let first = images[0].as_str().unwrap().to_string();
    let response = app
        .call(
            Request::builder()
                .uri(format!("/api/image/{}", first))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("image/"));
}

#[tokio::test]
async fn set_primary_image_returns_success_json() {
    let (_dir, state) = test_state().await;
    let mut app = build_router(state.clone());
    let token = admin_token(&mut app).await;

    let response = app
        .call(multipart_request(
            "/add_product",
            &token,
            &[
                ("category", "Solar"),
                ("name", "Panel X"),
                ("code", "X1"),
                ("description", "desc"),
            ],
            &[
                ("images", "a.png", png_bytes()),
                ("images", "b.png", png_bytes()),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products = state.catalog.list_products().await.unwrap();
    let view = &products[0];
    let second_image = view.images[1].clone();

    let response = app
        .call(form_request(
            "/set_primary_image",
            &format!("product_id={}&image_path={}", view.id, second_image),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], serde_json::Value::Bool(true));
    assert!(json.get("error").is_none());

    // Subsequent reads lead with the new primary
    let after = state.catalog.get_product(view.id).await.unwrap();
    assert_eq!(after.images[0], second_image);
}

#[tokio::test]
async fn public_read_apis_serve_seeded_content() {
    let (_dir, state) = test_state().await;
    let mut app = build_router(state);

    let response = app
        .call(
            Request::builder()
                .uri("/api/company-info")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "JIYER");
    assert_eq!(json["founded"], 2020);

    let response = app
        .call(Request::builder().uri("/api/contact").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "info@jiyer.com");
    assert!(json["social_media"]["linkedin"].is_string());

    // Unknown product id is a structured 404
    let response = app
        .call(
            Request::builder()
                .uri("/api/products/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
