use clap::Parser;

mod app;
mod cli;
mod compile;
mod emit;
mod query;
mod store;

use emit::Emitter as _;
use store::StoreError;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the emitter.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    let emitter = emit::emitter(args.format);

    let output = match app::run_search(&args.database, &args.query) {
        Ok(app::Outcome::Empty) => emitter.empty(),
        Ok(app::Outcome::Bookmarks(bookmarks)) => emitter.results(&bookmarks),
        Err(StoreError::NotFound(path)) => {
            log::warn!("bookmark store missing at {}", path.display());
            emitter.error(
                "Cannot find the bookmark database, \
                 make sure the bookmarking application is installed",
            )
        }
        Err(StoreError::Query(detail)) => {
            log::error!("query execution failed: {detail}");
            emitter.error("There was an unknown error while querying the database")
        }
    };

    println!("{output}");
    Ok(())
}
