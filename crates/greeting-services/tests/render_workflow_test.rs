#[path = "helpers/mod.rs"]
mod helpers;

use greeting_core::{AssetRef, Background, BackgroundPreset, Configuration};
use greeting_processing::ImageRenderer;
use greeting_services::{BackgroundSource, SkipReason, Upload};
use greeting_storage::{AssetStore, ConfigSource};
use helpers::fixtures::{create_test_image, png_upload};
use helpers::setup_test_app;
use image::ImageFormat;

#[test]
fn test_first_run_renders_defaults() {
    let app = setup_test_app();

    let loaded = app.service.load_settings();
    assert_eq!(loaded.source, ConfigSource::Defaults);

    let page = app.service.render(&loaded.configuration);
    assert_eq!(page.configuration.recipient_name, "recipient");
    assert_eq!(page.configuration.age, 59);
    assert_eq!(
        page.background,
        BackgroundSource::Url(BackgroundPreset::FlowerField.url().to_string())
    );
    assert!(page.gallery.is_empty());
    assert!(page.gallery.skipped.is_empty());
}

#[test]
fn test_save_three_images_and_render_after_restart() {
    let app = setup_test_app();

    let mut config = Configuration::default();
    config.recipient_name = "Grandma".to_string();
    config.age = 80;
    config.image_size = 250;
    let uploads = vec![
        png_upload("a.png", 500, 250),
        png_upload("b.png", 100, 100),
        Upload::new("c.png", create_test_image(30, 70, ImageFormat::Jpeg)),
    ];

    let saved = app.service.save(config, &uploads).unwrap();
    assert_eq!(
        saved.image_paths,
        vec![
            AssetRef::new("a.png"),
            AssetRef::new("b.png"),
            AssetRef::new("c.png")
        ]
    );

    let service = app.restart();
    let loaded = service.load_settings();
    assert_eq!(loaded.source, ConfigSource::Saved);
    assert_eq!(loaded.configuration, saved);

    let page = service.render(&loaded.configuration);
    assert_eq!(page.gallery.images.len(), 3);
    assert!(page.gallery.skipped.is_empty());

    let expected_heights = [125, 250, 583];
    for (image, expected_height) in page.gallery.images.iter().zip(expected_heights) {
        assert_eq!(image.width, 250);
        assert_eq!(image.height, expected_height);
        assert!(image.data_uri.starts_with("data:image/png;base64,"));
        assert!(image.data_uri.len() > "data:image/png;base64,".len());
    }
    assert_eq!(page.gallery.images[0].reference.as_str(), "a.png");
    assert_eq!(page.gallery.images[2].reference.as_str(), "c.png");
}

#[test]
fn test_deleted_image_is_skipped_and_record_kept() {
    let app = setup_test_app();

    let saved = app
        .service
        .save(
            Configuration::default(),
            &[png_upload("keep.png", 50, 50), png_upload("ghost.png", 50, 50)],
        )
        .unwrap();
    std::fs::remove_file(app.asset_path("ghost.png")).unwrap();

    let loaded = app.service.load_settings();
    let page = app.service.render(&loaded.configuration);

    assert_eq!(page.gallery.images.len(), 1);
    assert_eq!(page.gallery.images[0].reference.as_str(), "keep.png");
    assert_eq!(page.gallery.skipped.len(), 1);
    assert_eq!(page.gallery.skipped[0].reference.as_str(), "ghost.png");
    assert_eq!(page.gallery.skipped[0].reason, SkipReason::NotFound);

    // Rendering never rewrites the record
    assert_eq!(app.service.load_settings().configuration, saved);
}

#[test]
fn test_custom_background_survives_restart() {
    let app = setup_test_app();

    let mut config = Configuration::default();
    let background = Upload::new("party.jpg", create_test_image(64, 36, ImageFormat::Jpeg));
    app.service
        .set_custom_background(&mut config, &background)
        .unwrap();
    app.service.save(config, &[]).unwrap();

    let service = app.restart();
    let page = service.render(&service.load_settings().configuration);

    let BackgroundSource::DataUri(uri) = page.background else {
        panic!("expected an inline background");
    };
    assert!(uri.starts_with("data:image/png;base64,"));
}

#[test]
fn test_undecodable_custom_background_falls_back() {
    let app = setup_test_app();

    let mut config = Configuration::default();
    app.service
        .set_custom_background(&mut config, &Upload::new("bg.png", b"nope".to_vec()))
        .unwrap();

    assert_eq!(
        app.service.resolve_background(&config),
        BackgroundSource::Url(BackgroundPreset::FlowerField.url().to_string())
    );
}

#[test]
fn test_legacy_path_references_resolve() {
    let app = setup_test_app();
    app.service
        .store_uploads(&[png_upload("old.png", 20, 10)])
        .unwrap();

    let json = r#"{
        "recipient_name": "Dad",
        "image_paths": ["saved_birthday_data/images/old.png"],
        "background": {"mode": "custom", "reference": "saved_birthday_data/images/old.png"}
    }"#;
    std::fs::write(app.config.config_path(), json).unwrap();

    let loaded = app.service.load_settings();
    assert_eq!(loaded.source, ConfigSource::Saved);
    assert_eq!(loaded.configuration.recipient_name, "Dad");

    let page = app.service.render(&loaded.configuration);
    assert_eq!(page.gallery.images.len(), 1);
    assert_eq!(page.gallery.images[0].height, 100);
    assert!(matches!(page.background, BackgroundSource::DataUri(_)));
}

#[test]
fn test_rendered_images_decode_at_reported_size() {
    let app = setup_test_app();
    let mut config = Configuration::default();
    config.image_size = 120;
    let saved = app
        .service
        .save(config, &[png_upload("wide.png", 900, 300)])
        .unwrap();

    let page = app.service.render(&saved);
    let image = &page.gallery.images[0];
    let encoded = image
        .data_uri
        .strip_prefix("data:image/png;base64,")
        .unwrap();
    assert!(!encoded.is_empty());
    assert_eq!((image.width, image.height), (120, 40));

    let resized = ImageRenderer::resize_to_width(&app_bytes(&app, "wide.png"), 120).unwrap();
    assert_eq!(
        ImageRenderer::dimensions(&resized.data).unwrap(),
        (120, 40)
    );
}

fn app_bytes(app: &helpers::TestApp, name: &str) -> Vec<u8> {
    std::fs::read(app.asset_path(name)).unwrap()
}

#[test]
fn test_preset_background_round_trips() {
    let app = setup_test_app();
    let mut config = Configuration::default();
    config.background = Background::Preset {
        key: BackgroundPreset::Balloons,
    };
    app.service.save(config, &[]).unwrap();

    let page = app
        .service
        .render(&app.service.load_settings().configuration);
    assert_eq!(
        page.background.as_css_url(),
        BackgroundPreset::Balloons.url()
    );
}

#[test]
fn test_never_stored_reference_is_not_found() {
    let app = setup_test_app();
    app.service
        .store_uploads(&[png_upload("a.png", 60, 30), png_upload("b.png", 30, 60)])
        .unwrap();

    let mut config = Configuration::default();
    config.image_paths = vec![
        AssetRef::new("a.png"),
        AssetRef::new("ghost.png"),
        AssetRef::new("b.png"),
    ];
    app.service.save(config, &[]).unwrap();

    let loaded = app.service.load_settings();
    assert_eq!(loaded.source, ConfigSource::Saved);
    assert!(!app.service.assets().exists(&AssetRef::new("ghost.png")).unwrap());

    let page = app.service.render(&loaded.configuration);
    let shown: Vec<&str> = page
        .gallery
        .images
        .iter()
        .map(|image| image.reference.as_str())
        .collect();
    assert_eq!(shown, vec!["a.png", "b.png"]);
    assert_eq!(page.gallery.skipped[0].reason, SkipReason::NotFound);
}

#[test]
fn test_record_with_label_background_renders() {
    let app = setup_test_app();
    app.service
        .store_uploads(&[png_upload("cake.png", 40, 30)])
        .unwrap();

    let json = r##"{
        "recipient_name": "Ann",
        "age": 61,
        "text_color": "#FF69B4",
        "background_type": "기본 배경",
        "background": "벚꽃",
        "image_size": 200,
        "image_paths": ["saved_birthday_data/images/cake.png"]
    }"##;
    std::fs::write(app.config.config_path(), json).unwrap();

    let loaded = app.service.load_settings();
    assert_eq!(loaded.source, ConfigSource::Saved);
    assert_eq!(loaded.configuration.recipient_name, "Ann");

    let page = app.service.render(&loaded.configuration);
    assert_eq!(
        page.background.as_css_url(),
        BackgroundPreset::CherryBlossom.url()
    );
    assert_eq!(page.gallery.images.len(), 1);
    assert_eq!(
        (page.gallery.images[0].width, page.gallery.images[0].height),
        (200, 150)
    );
}
