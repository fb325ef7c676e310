use clap::Parser;
use cpp2v_driver::{run, Cli};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter())).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error translating {}: {}", cli.input.display(), e);
        std::process::exit(1);
    }
}
