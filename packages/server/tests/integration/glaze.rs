use serde_json::json;
use uuid::Uuid;

use crate::common::{TestApp, routes};

mod glaze_creation {
    use super::*;

    #[tokio::test]
    async fn create_returns_both_ids() {
        let app = TestApp::spawn().await;

        let (glaze_id, variant_id) = app.create_glaze("Floating Blue", 1220, 1260).await;

        let res = app.get(&routes::glaze(glaze_id)).await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["name"], "Floating Blue");
        assert_eq!(res.body["foodsafe"], true);
        assert_eq!(res.body["watertight"], true);
        assert_eq!(res.body["notes"], "Dip 3 seconds");
        assert_eq!(res.body["variants"][0]["id"], variant_id.to_string());
        assert_eq!(res.body["variants"][0]["photo"], false);
    }

    #[tokio::test]
    async fn foodsafe_defaults_to_unknown() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::GLAZES,
                &json!({
                    "name": "Test Tile",
                    "colour_code": "#abcdef",
                    "temp_min": 1000,
                    "temp_max": 1100,
                }),
            )
            .await;
        assert_eq!(res.status, 201, "{}", res.text);

        let glaze = app.get(&routes::glaze(res.uuid("glaze_id"))).await;
        assert!(glaze.body["foodsafe"].is_null());
        assert_eq!(glaze.body["watertight"], false);
        assert!(glaze.body["notes"].is_null());
        assert_eq!(glaze.body["variants"][0]["colour_code"], "#ABCDEF");
    }

    #[tokio::test]
    async fn invalid_colour_code_is_rejected() {
        let app = TestApp::spawn().await;

        for colour in ["red", "#12345", "#1234567", "#GGGGGG", "123456"] {
            let res = app
                .post(
                    routes::GLAZES,
                    &json!({
                        "name": "Bad",
                        "colour_code": colour,
                        "temp_min": 1000,
                        "temp_max": 1100,
                    }),
                )
                .await;
            assert_eq!(res.status, 400, "{colour} should be rejected");
            assert_eq!(res.error_code(), "VALIDATION_ERROR");
        }

        assert_eq!(app.glaze_count().await, 0);
    }

    #[tokio::test]
    async fn negative_temperature_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::GLAZES,
                &json!({
                    "name": "Cold",
                    "colour_code": "#000000",
                    "temp_min": -10,
                    "temp_max": 1100,
                }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_json_is_a_structured_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::GLAZES, "{\"name\": ").await;
        assert_eq!(res.status, 400);
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn overlong_name_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::GLAZES,
                &json!({
                    "name": "x".repeat(256),
                    "colour_code": "#000000",
                    "temp_min": 1000,
                    "temp_max": 1100,
                }),
            )
            .await;
        assert_eq!(res.status, 400);
    }
}

mod glaze_reads {
    use super::*;

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let app = TestApp::spawn().await;
        app.create_glaze("Tenmoku", 1240, 1280).await;
        app.create_glaze("Celadon", 1220, 1260).await;

        let res = app.get(routes::GLAZES).await;
        assert_eq!(res.status, 200);
        let names: Vec<_> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Celadon", "Tenmoku"]);
    }

    #[tokio::test]
    async fn empty_catalog_lists_nothing() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::GLAZES).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn unknown_glaze_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::glaze(Uuid::now_v7())).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.error_code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn malformed_id_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.get("/api/v1/glazes/not-a-uuid").await;
        assert_eq!(res.status, 400);
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
    }
}

mod glaze_updates {
    use super::*;

    #[tokio::test]
    async fn update_replaces_scalar_fields_and_keeps_variants() {
        let app = TestApp::spawn().await;
        let (glaze_id, variant_id) = app.create_glaze("Shino", 1240, 1280).await;

        let res = app
            .put(
                &routes::glaze(glaze_id),
                &json!({
                    "name": "  Carbon Trap Shino  ",
                    "foodsafe": false,
                    "watertight": false,
                    "notes": "   ",
                }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.uuid("id"), glaze_id);

        let glaze = app.get(&routes::glaze(glaze_id)).await;
        assert_eq!(glaze.body["name"], "Carbon Trap Shino");
        assert_eq!(glaze.body["foodsafe"], false);
        assert_eq!(glaze.body["watertight"], false);
        assert!(glaze.body["notes"].is_null());
        assert_eq!(glaze.body["variants"][0]["id"], variant_id.to_string());
    }

    #[tokio::test]
    async fn update_of_unknown_glaze_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app
            .put(&routes::glaze(Uuid::now_v7()), &json!({ "name": "Ghost" }))
            .await;
        assert_eq!(res.status, 404);
        assert_eq!(app.glaze_count().await, 0);
    }
}

mod glaze_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_removes_glaze_and_variants() {
        let app = TestApp::spawn().await;
        let (glaze_id, _) = app.create_glaze("Iron Red", 1240, 1280).await;
        app.add_variant(glaze_id, "#AA2200", 1200, 1240).await;

        let res = app.delete(&routes::glaze(glaze_id)).await;
        assert_eq!(res.status, 204);

        assert_eq!(app.get(&routes::glaze(glaze_id)).await.status, 404);
        assert_eq!(app.glaze_count().await, 0);
        assert_eq!(app.variant_count().await, 0);
    }

    #[tokio::test]
    async fn delete_of_unknown_glaze_succeeds() {
        let app = TestApp::spawn().await;

        let res = app.delete(&routes::glaze(Uuid::now_v7())).await;
        assert_eq!(res.status, 204);
    }
}
