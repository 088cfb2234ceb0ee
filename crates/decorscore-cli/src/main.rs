use tracing_subscriber::EnvFilter;

mod command;
mod model;
mod util;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("decorscore=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    command::run()
}
