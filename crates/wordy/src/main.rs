use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordy::cli::{run, Wordy};
use wordy_cli_helpers::messages::fail;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Wordy::parse();

    let default_filter = if args.verbose {
        "wordy=debug,wordy_password=debug"
    } else {
        "wordy=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(args).await {
        tracing::debug!(target: wordy::TARGET, error = ?e, "run::failed");
        fail(e.to_string());
        std::process::exit(1);
    }
}
