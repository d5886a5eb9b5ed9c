//! URL builders for Steam store and community image assets.

pub mod images;
