use clap::Parser;
use serde_json::{json, Value};

use steamart::images;

#[derive(Debug, Parser)]
pub struct RunIcon {
    #[arg(help = "Steam app ID")]
    app_id: u32,
    #[arg(help = "Icon hash for the app, as reported by the Steam API (img_icon_url)")]
    hash: Option<String>,
    #[arg(long, help = "Print as JSON")]
    json: bool,
}

impl RunIcon {
    pub(super) fn run(&self) {
        let url = images::app_icon_url(self.app_id, self.hash.as_deref());

        if self.json {
            let url = if url.is_empty() { Value::Null } else { Value::String(url) };
            println!("{}", json!({ "url": url }));
            return;
        }

        if url.is_empty() {
            eprintln!("No icon hash given for app {}; icons cannot be addressed without one.", self.app_id);
        } else {
            println!("{}", url);
        }
    }
}
