mod cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let (config, action) = match cli::run() {
        cli::RunOutcome::Run(config, action) => (config, action),
        cli::RunOutcome::Exit(code) => std::process::exit(code),
    };
    let code = enlist::run(config, action).await;
    std::process::exit(code);
}
