mod cli;

fn main() {
    cli::cli_main();
}
