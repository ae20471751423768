use anyhow::Result;
use clap::{CommandFactory, Parser};
use xicon::{Args, Input};

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("APPICON_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    let Some(path) = args.path.as_deref() else {
        Args::command().print_long_help()?;
        std::process::exit(1);
    };
    let input = Input::new(path)?;
    xicon::run(&input, args.filter, args.verbose)
}
