use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    // stdout carries the protocol; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    bitfork_chess::uci::uci_top::run_stdio_loop()
}
