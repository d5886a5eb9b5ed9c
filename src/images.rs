
use std::fmt;

use serde::{Deserialize, Serialize};

// Store assets (header, capsules, hero, portrait, logo) live under the app
// CDN; per-app icons are served from the community images host instead.
const APP_CDN_BASE: &str = "https://cdn.cloudflare.steamstatic.com/steam/apps";
const COMMUNITY_CDN_BASE: &str = "https://media.steampowered.com/steamcommunity/public/images";

/// The store and library image kinds addressable for a Steam app.
///
/// Deserialization goes through [`ImageVariant::parse`], so unknown names in
/// upstream data resolve to `Header` instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum ImageVariant {
    Header,
    SmallCapsule,
    MainCapsule,
    Hero,
    LibraryPortrait,
    Logo,
}

impl ImageVariant {
    pub const ALL: [ImageVariant; 6] = [
        Self::Header,
        Self::SmallCapsule,
        Self::MainCapsule,
        Self::Hero,
        Self::LibraryPortrait,
        Self::Logo,
    ];

    /// Filename of this image kind under an app's directory on the app CDN.
    pub fn filename(&self) -> &'static str {
        match self {
            Self::Header => "header.jpg",
            Self::SmallCapsule => "capsule_sm_120.jpg",
            Self::MainCapsule => "capsule_616x353.jpg",
            Self::Hero => "library_hero.jpg",
            Self::LibraryPortrait => "library_600x900.jpg",
            Self::Logo => "logo.png",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::SmallCapsule => "small_capsule",
            Self::MainCapsule => "main_capsule",
            Self::Hero => "hero",
            Self::LibraryPortrait => "library_portrait",
            Self::Logo => "logo",
        }
    }

    /// Resolve a variant from an untyped name, e.g. a query string or config
    /// value. Unrecognised names resolve to `Header` rather than erroring.
    pub fn parse(name: &str) -> ImageVariant {
        match name {
            "header" => Self::Header,
            "small_capsule" => Self::SmallCapsule,
            "main_capsule" => Self::MainCapsule,
            "hero" => Self::Hero,
            "library_portrait" => Self::LibraryPortrait,
            "logo" => Self::Logo,
            _ => Self::Header,
        }
    }
}

impl From<String> for ImageVariant {
    fn from(name: String) -> ImageVariant {
        ImageVariant::parse(&name)
    }
}

impl fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// URL of the given store/library image for an app.
///
/// The app id is embedded verbatim; nothing checks that the app (or the
/// image) exists, so the URL may 404 when dereferenced.
pub fn app_image_url(app_id: u32, variant: ImageVariant) -> String {
    format!("{}/{}/{}", APP_CDN_BASE, app_id, variant.filename())
}

/// URL of an app's icon on the community images host.
///
/// Icons are only addressable via the hash the Steam API reports for the app
/// (e.g. `img_icon_url` in GetOwnedGames); there is no reliable way to derive
/// one from the app id alone. Without a hash this returns `""` and callers
/// render their own placeholder.
pub fn app_icon_url(app_id: u32, hash: Option<&str>) -> String {
    match hash {
        Some(hash) if !hash.is_empty() => {
            format!("{}/apps/{}/{}.jpg", COMMUNITY_CDN_BASE, app_id, hash)
        }
        _ => String::new(),
    }
}

// Per-variant conveniences, each equivalent to app_image_url with the
// variant fixed.

pub fn app_header_url(app_id: u32) -> String {
    app_image_url(app_id, ImageVariant::Header)
}

pub fn app_small_capsule_url(app_id: u32) -> String {
    app_image_url(app_id, ImageVariant::SmallCapsule)
}

pub fn app_main_capsule_url(app_id: u32) -> String {
    app_image_url(app_id, ImageVariant::MainCapsule)
}

pub fn app_hero_url(app_id: u32) -> String {
    app_image_url(app_id, ImageVariant::Hero)
}

pub fn app_library_portrait_url(app_id: u32) -> String {
    app_image_url(app_id, ImageVariant::LibraryPortrait)
}

pub fn app_logo_url(app_id: u32) -> String {
    app_image_url(app_id, ImageVariant::Logo)
}
