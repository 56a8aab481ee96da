use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn chart_lists_glazes_with_minimal_variants() {
    let app = TestApp::spawn().await;
    let (glaze_id, _) = app.create_glaze("Tenmoku", 1240, 1280).await;

    let res = app.get(routes::CHART).await;
    assert_eq!(res.status, 200);
    assert_eq!(
        res.body,
        json!([{
            "id": glaze_id.to_string(),
            "name": "Tenmoku",
            "variants": [{ "colour_code": "#3A6EA5", "temp_min": 1240, "temp_max": 1280 }],
        }])
    );
}

#[tokio::test]
async fn empty_catalog_uses_fallback_axis() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::CHART_AXIS).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!({ "min": 800, "max": 1300 }));
}

#[tokio::test]
async fn axis_is_padded_to_the_grid() {
    let app = TestApp::spawn().await;
    let (glaze_id, _) = app.create_glaze("Celadon", 923, 1180).await;
    app.add_variant(glaze_id, "#A8C3A0", 1100, 1262).await;

    let res = app.get(routes::CHART_AXIS).await;
    assert_eq!(res.body, json!({ "min": 900, "max": 1300 }));
}
