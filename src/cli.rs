mod icon;
mod image;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "steamart")]
#[command(version = "0.1.0")]
enum Cli {
    Image(image::RunImage),
    Icon(icon::RunIcon),
}

impl Cli {
    fn run(&self) {
        match self {
            Self::Image(cmd) => cmd.run(),
            Self::Icon(cmd) => cmd.run(),
        }
    }
}

pub fn cli_main() {
    Cli::parse().run();
}
