/// Entry point for the `grebase` binary.
///
/// Initialises logging (`RUST_LOG`, default `warn`), delegates to the CLI
/// entry function, and exits with the returned code. If an error occurs,
/// exits with status code 1.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match grebase::cli::entry() {
        Ok(code) => std::process::exit(code),
        Err(_) => std::process::exit(1),
    }
}
