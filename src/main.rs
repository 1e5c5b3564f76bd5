mod app;

use env_logger::Env;

fn main() {
    // Diagnostics go to stderr; results own stdout. RUST_LOG overrides.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = app::run() {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
