use clap::Parser;
use serde_json::{Map, Value};

use steamart::images::{self, ImageVariant};

#[derive(Debug, Parser)]
pub struct RunImage {
    #[arg(help = "Steam app ID")]
    app_id: u32,
    #[arg(
      help = "Image kind: header, small_capsule, main_capsule, hero, library_portrait or logo; \
              omit to print all of them"
    )]
    variant: Option<String>,
    #[arg(long, help = "Print a JSON object keyed by image kind")]
    json: bool,
}

impl RunImage {
    pub(super) fn run(&self) {
        // Unrecognised kinds resolve to the header image rather than erroring
        let variants: Vec<ImageVariant> = match &self.variant {
            Some(name) => vec![ImageVariant::parse(name)],
            None => ImageVariant::ALL.to_vec(),
        };

        if self.json {
            let urls: Map<String, Value> = variants
                .iter()
                .map(|v| (v.name().to_string(), images::app_image_url(self.app_id, *v).into()))
                .collect();
            println!("{}", Value::Object(urls));
        } else {
            for variant in &variants {
                println!("{}: {}", variant, images::app_image_url(self.app_id, *variant));
            }
        }
    }
}
