use uuid::Uuid;

use crate::common::{TestApp, png, routes};

mod photo_upload {
    use super::*;

    #[tokio::test]
    async fn uploaded_photo_is_resized_and_served_as_jpeg() {
        let app = TestApp::spawn().await;
        let (glaze_id, variant_id) = app.create_glaze("Shino", 1240, 1280).await;

        let res = app.upload_photo(variant_id, png(2400, 1200)).await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["success"], true);

        let photo = app.get(&routes::photo(variant_id)).await;
        assert_eq!(photo.status, 200);
        assert_eq!(photo.header("content-type"), Some("image/jpeg"));
        assert_eq!(
            photo.header("cache-control"),
            Some("public, max-age=31536000, immutable")
        );
        let img = image::load_from_memory(&photo.bytes).expect("served photo should decode");
        assert_eq!((img.width(), img.height()), (2000, 1000));

        let glaze = app.get(&routes::glaze(glaze_id)).await;
        assert_eq!(glaze.body["variants"][0]["photo"], true);
    }

    #[tokio::test]
    async fn small_photos_are_not_upscaled() {
        let app = TestApp::spawn().await;
        let (_, variant_id) = app.create_glaze("Shino", 1240, 1280).await;

        app.upload_photo(variant_id, png(64, 48)).await;

        let photo = app.get(&routes::photo(variant_id)).await;
        let img = image::load_from_memory(&photo.bytes).unwrap();
        assert_eq!((img.width(), img.height()), (64, 48));
    }

    #[tokio::test]
    async fn missing_photo_field_is_rejected() {
        let app = TestApp::spawn().await;
        let (_, variant_id) = app.create_glaze("Shino", 1240, 1280).await;

        let form = reqwest::multipart::Form::new().text("caption", "no photo here");
        let res = app
            .client
            .put(format!("http://{}{}", app.addr, routes::photo(variant_id)))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 400);
    }

    #[tokio::test]
    async fn empty_photo_is_rejected() {
        let app = TestApp::spawn().await;
        let (_, variant_id) = app.create_glaze("Shino", 1240, 1280).await;

        let res = app.upload_photo(variant_id, Vec::new()).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn non_image_upload_is_a_decode_error() {
        let app = TestApp::spawn().await;
        let (_, variant_id) = app.create_glaze("Shino", 1240, 1280).await;

        let res = app
            .upload_photo(variant_id, b"definitely not an image".to_vec())
            .await;
        assert_eq!(res.status, 422);
        assert_eq!(res.error_code(), "DECODE_ERROR");

        assert_eq!(app.get(&routes::photo(variant_id)).await.status, 404);
    }

    #[tokio::test]
    async fn upload_to_unknown_variant_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.upload_photo(Uuid::now_v7(), png(16, 16)).await;
        assert_eq!(res.status, 404);
    }
}

mod photo_delivery {
    use super::*;

    #[tokio::test]
    async fn matching_etag_is_not_modified() {
        let app = TestApp::spawn().await;
        let (_, variant_id) = app.create_glaze("Shino", 1240, 1280).await;
        app.upload_photo(variant_id, png(32, 32)).await;

        let first = app.get(&routes::photo(variant_id)).await;
        let etag = first.header("etag").expect("ETag header").to_string();

        let second = app
            .get_with_header(&routes::photo(variant_id), "if-none-match", &etag)
            .await;
        assert_eq!(second.status, 304);
        assert!(second.bytes.is_empty());
    }

    #[tokio::test]
    async fn variant_without_photo_is_not_found() {
        let app = TestApp::spawn().await;
        let (_, variant_id) = app.create_glaze("Shino", 1240, 1280).await;

        let res = app.get(&routes::photo(variant_id)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.error_code(), "NOT_FOUND");
    }
}

mod photo_removal {
    use super::*;

    #[tokio::test]
    async fn deleting_a_photo_clears_it() {
        let app = TestApp::spawn().await;
        let (glaze_id, variant_id) = app.create_glaze("Shino", 1240, 1280).await;
        app.upload_photo(variant_id, png(16, 16)).await;

        let res = app.delete(&routes::photo(variant_id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["success"], true);

        assert_eq!(app.get(&routes::photo(variant_id)).await.status, 404);
        let glaze = app.get(&routes::glaze(glaze_id)).await;
        assert_eq!(glaze.body["variants"][0]["photo"], false);
    }

    #[tokio::test]
    async fn deleting_photo_of_unknown_variant_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.delete(&routes::photo(Uuid::now_v7())).await;
        assert_eq!(res.status, 404);
    }
}
