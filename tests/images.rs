use steamart::images::{self, ImageVariant};

#[test]
fn test_image_urls_for_app() {
    let expected = vec![
        ("header", "https://cdn.cloudflare.steamstatic.com/steam/apps/570/header.jpg".to_string()),
        ("small_capsule", "https://cdn.cloudflare.steamstatic.com/steam/apps/570/capsule_sm_120.jpg".to_string()),
        ("main_capsule", "https://cdn.cloudflare.steamstatic.com/steam/apps/570/capsule_616x353.jpg".to_string()),
        ("hero", "https://cdn.cloudflare.steamstatic.com/steam/apps/570/library_hero.jpg".to_string()),
        ("library_portrait", "https://cdn.cloudflare.steamstatic.com/steam/apps/570/library_600x900.jpg".to_string()),
        ("logo", "https://cdn.cloudflare.steamstatic.com/steam/apps/570/logo.png".to_string()),
    ];
    let actual: Vec<(&str, String)> = ImageVariant::ALL
        .iter()
        .map(|v| (v.name(), images::app_image_url(570, *v)))
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_variant_names_from_untyped_input() {
    // e.g. kinds read from a query string or a config file
    let names = vec!["main_capsule", "library_portrait", "spotlight"];

    let urls: Vec<String> = names
        .into_iter()
        .map(|n| images::app_image_url(730, ImageVariant::parse(n)))
        .collect();

    assert_eq!(urls[0], "https://cdn.cloudflare.steamstatic.com/steam/apps/730/capsule_616x353.jpg");
    assert_eq!(urls[1], "https://cdn.cloudflare.steamstatic.com/steam/apps/730/library_600x900.jpg");
    // Unknown kinds resolve to the header image
    assert_eq!(urls[2], "https://cdn.cloudflare.steamstatic.com/steam/apps/730/header.jpg");
}

#[test]
fn test_icon_urls() {
    assert_eq!(
        images::app_icon_url(440, Some("e3f595a92552da3d664ad00277fad2107345f743")),
        "https://media.steampowered.com/steamcommunity/public/images/apps/440/e3f595a92552da3d664ad00277fad2107345f743.jpg"
    );
    assert_eq!(images::app_icon_url(440, None), "");
}
