use anyhow::Result;
use calgary_dogs::{app, Config};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // stdout belongs to the prompt and report, so logs go to stderr and
    // stay quiet unless RUST_LOG asks for more.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) run against the terminal ─────────────────────────────────
    let config = Config::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(&config, &mut stdin.lock(), &mut stdout.lock())?;

    info!("all done");
    Ok(())
}
