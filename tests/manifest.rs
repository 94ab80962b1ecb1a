use std::path::PathBuf;

use pretty_assertions::assert_eq;

use manifest_tags::{Manifest, ManifestError};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/manifest.json")
}

fn production() -> Manifest {
    Manifest::load(false, fixture(), "/dist/").unwrap()
}

fn lines(stream: &str) -> Vec<&str> {
    stream.split('\n').collect()
}

#[test]
fn creates_tags_in_dev_mode() {
    let manifest = Manifest::load(true, fixture(), "/dist/").unwrap();

    let tags = manifest.create_tags(&["main.js"]).unwrap();

    assert_eq!(tags.preload, "");
    assert_eq!(tags.css, "");
    assert_eq!(
        lines(&tags.js),
        vec![
            r#"<script type="module" src="/dist/@vite/client"></script>"#,
            r#"<script type="module" src="/dist/main.js"></script>"#,
        ]
    );
}

#[test]
fn creates_tags_in_production_mode() {
    let mut manifest = production();
    manifest.preload_images();

    let tags = manifest.create_tags(&["main.js"]).unwrap();

    assert_eq!(
        lines(&tags.preload),
        vec![
            r#"<link rel="modulepreload" href="/dist/assets/main.4889e940.js" />"#,
            r#"<link rel="preload" as="image" type="image/png" href="/dist/assets/asset.0ab0f9cd.png" />"#,
            r#"<link rel="modulepreload" href="/dist/assets/shared.83069a53.js" />"#,
        ]
    );
    assert_eq!(
        lines(&tags.css),
        vec![
            r#"<link rel="stylesheet" href="/dist/assets/main.b82dbe22.css" />"#,
            r#"<link rel="stylesheet" href="/dist/assets/shared.a834bfc3.css" />"#,
        ]
    );
    assert_eq!(
        lines(&tags.js),
        vec![r#"<script type="module" src="/dist/assets/main.4889e940.js"></script>"#]
    );
}

#[test]
fn creates_tags_for_multiple_entry_points() {
    let mut manifest = production();
    manifest.preload_images().preload_styles();

    let tags = manifest
        .create_tags(&[
            "main.js",
            "consent-banner.js",
            "public/scss/themes/admin/admin.scss",
            "public/css/plus.css",
            "public/img/favicon.ico",
        ])
        .unwrap();

    assert_eq!(
        lines(&tags.preload),
        vec![
            r#"<link rel="modulepreload" href="/dist/assets/main.4889e940.js" />"#,
            r#"<link rel="preload" as="image" type="image/png" href="/dist/assets/asset.0ab0f9cd.png" />"#,
            r#"<link rel="modulepreload" href="/dist/assets/shared.83069a53.js" />"#,
            r#"<link rel="modulepreload" href="/dist/assets/consent-banner.0e3b3b7b.js" />"#,
            r#"<link rel="preload" as="style" type="text/css" href="/dist/assets/admin-B8_LVhy3.css" />"#,
            r#"<link rel="preload" as="style" type="text/css" href="/dist/assets/plus-DwWFnKP0.css" />"#,
            r#"<link rel="preload" as="image" type="image/x-icon" href="/dist/assets/favicon-zR_S-YMI.ico" />"#,
        ]
    );
    assert_eq!(
        lines(&tags.css),
        vec![
            r#"<link rel="stylesheet" href="/dist/assets/main.b82dbe22.css" />"#,
            r#"<link rel="stylesheet" href="/dist/assets/shared.a834bfc3.css" />"#,
            r#"<link rel="stylesheet" href="/dist/assets/consent-banner.8ba40300.css" />"#,
            r#"<link rel="stylesheet" href="/dist/assets/admin-B8_LVhy3.css" />"#,
            r#"<link rel="stylesheet" href="/dist/assets/plus-DwWFnKP0.css" />"#,
        ]
    );
    assert_eq!(
        lines(&tags.js),
        vec![
            r#"<script type="module" src="/dist/assets/main.4889e940.js"></script>"#,
            r#"<script type="module" src="/dist/assets/consent-banner.0e3b3b7b.js"></script>"#,
        ]
    );
}

#[test]
fn never_preloads_dynamic_imports() {
    let tags = production().create_tags(&["main.js"]).unwrap();

    assert!(!tags.preload.contains("foo.869aea0d.js"));
    assert!(!tags.css.contains("foo.5ea1ac43.css"));
    assert!(!tags.js.contains("foo.869aea0d.js"));
}

#[test]
fn image_and_style_preloads_are_opt_in() {
    let tags = production()
        .create_tags(&["main.js", "public/css/plus.css", "public/img/favicon.ico"])
        .unwrap();

    assert!(!tags.preload.contains(r#"as="image""#));
    assert!(!tags.preload.contains(r#"as="style""#));
    assert!(tags
        .css
        .contains(r#"<link rel="stylesheet" href="/dist/assets/plus-DwWFnKP0.css" />"#));
}

#[test]
fn rejects_unknown_and_non_entry_chunks() {
    let mut manifest = production();
    manifest.preload_images();

    let err = manifest.create_tags(&["main.js", "does-not-exist.js"]).unwrap_err();
    assert!(matches!(err, ManifestError::EntryNotFound(_)));
    assert_eq!(err.to_string(), "Entry not found in manifest: does-not-exist.js");

    let err = manifest.create_tags(&["views/foo.js"]).unwrap_err();
    assert!(matches!(err, ManifestError::NotAnEntryPoint(_)));
    assert_eq!(err.to_string(), "Chunk is not an entry point: views/foo.js");
}

#[test]
fn creates_asset_urls() {
    assert_eq!(
        production().get_url("views/foo.js").unwrap(),
        "/dist/assets/foo.869aea0d.js"
    );

    let dev = Manifest::load(true, fixture(), "/dist/").unwrap();
    assert_eq!(dev.get_url("views/foo.js").unwrap(), "/dist/views/foo.js");
}

#[test]
fn repeated_calls_are_identical() {
    let mut manifest = production();
    manifest.preload_images().preload_styles();
    let entries = ["consent-banner.js", "main.js", "main.js"];

    let first = manifest.create_tags(&entries).unwrap();
    let second = manifest.create_tags(&entries).unwrap();

    assert_eq!(first, second);
    assert_eq!(lines(&first.js).len(), 2);
}

#[test]
fn lists_entry_points() {
    assert_eq!(
        production().entry_points(),
        vec![
            "consent-banner.js",
            "main.js",
            "public/css/plus.css",
            "public/img/favicon.ico",
            "public/scss/themes/admin/admin.scss",
        ]
    );
}
