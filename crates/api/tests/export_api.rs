//! HTTP-level integration tests for `GET /save_to_excel`.

mod common;

use axum::http::StatusCode;
use catalog_entry_api::state::AppState;
use common::{body_json, build_test_app, get, post_form, post_json, test_state, urlencode};
use serde_json::json;

async fn seed_rows(state: &AppState) {
    post_json(build_test_app(state.clone()), "/add_color", json!({"color": "Navy"})).await;
    post_json(
        build_test_app(state.clone()),
        "/add_item_type",
        json!({"item_type": "Trousers"}),
    )
    .await;

    let response = post_form(
        build_test_app(state.clone()),
        "/save",
        &[
            ("model_code", "12"),
            ("model_description", "Slim Chino"),
            ("new_color", "Navy"),
            ("new_item_type", "Trousers"),
            ("upc", "0123456789"),
            ("size", "32"),
            ("size", "34"),
            ("size", "M"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

fn export_uri(path: &std::path::Path) -> String {
    format!(
        "/save_to_excel?file_path={}",
        urlencode(&path.display().to_string())
    )
}

#[tokio::test]
async fn exporting_empty_catalog_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.xlsx");

    let response = get(build_test_app(test_state()), &export_uri(&path)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "No items to save.");
    assert!(!path.exists());
}

#[tokio::test]
async fn empty_catalog_is_reported_before_missing_path() {
    let response = get(build_test_app(test_state()), "/save_to_excel").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "EMPTY_CATALOG");
}

#[tokio::test]
async fn missing_file_path_returns_400() {
    let state = test_state();
    seed_rows(&state).await;

    let response = get(build_test_app(state.clone()), "/save_to_excel").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No file path provided.");

    let response = get(build_test_app(state), "/save_to_excel?file_path=%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn exporting_csv_writes_one_line_per_saved_size() {
    let state = test_state();
    seed_rows(&state).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.csv");

    let response = get(build_test_app(state), &export_uri(&path)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4, "header plus three rows");
    assert_eq!(
        lines[0],
        "Item Code,Model Code,Model Description,Color Code,Color Description,\
         Item Type Code,Item Type Description,Size,UPC"
    );
    assert!(lines[1].starts_with("12"));
    assert!(lines[3].contains(",M,"));
}

#[tokio::test]
async fn exporting_xlsx_creates_workbook() {
    let state = test_state();
    seed_rows(&state).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.xlsx");

    let response = get(build_test_app(state), &export_uri(&path)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("3 rows"));
    assert!(path.exists());
}

#[tokio::test]
async fn unwritable_path_returns_500() {
    let state = test_state();
    seed_rows(&state).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("catalog.xlsx");

    let response = get(build_test_app(state), &export_uri(&path)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "EXPORT_FAILED");
    assert!(json["message"].is_string());
}
