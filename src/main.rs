// src/main.rs

use dayplan::{cli, logging, run};

#[tokio::main]
async fn main() {
    let code = match run_main().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("dayplan error: {err:?}");
            1
        }
    };
    // The stdin reader may still be parked in a blocking read; exit without
    // waiting for the runtime to drain it.
    std::process::exit(code);
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
