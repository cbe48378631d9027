use clap::{Args, Parser, Subcommand};

pub(crate) enum RunOutcome {
    Run(enlist::config::AppConfig, enlist::Action),
    Exit(i32),
}

pub(crate) fn run() -> RunOutcome {
    outcome_from(Cli::parse())
}

fn outcome_from(cli: Cli) -> RunOutcome {
    let base_url = match reqwest::Url::parse(&cli.base_url) {
        Ok(url) => url,
        Err(err) => {
            eprintln!("error: invalid base URL '{}': {err}", cli.base_url);
            return RunOutcome::Exit(2);
        }
    };
    if base_url.cannot_be_a_base() {
        eprintln!("error: base URL must be an http(s) origin: {}", cli.base_url);
        return RunOutcome::Exit(2);
    }

    let action = match cli.command {
        Command::List => enlist::Action::List,
        Command::Render => enlist::Action::Render,
        Command::SignUp(target) => enlist::Action::SignUp {
            activity: target.activity,
            email: target.email,
        },
        Command::Remove(target) => enlist::Action::Remove {
            activity: target.activity,
            email: target.email,
        },
    };
    RunOutcome::Run(enlist::config::AppConfig { base_url }, action)
}

#[derive(Parser, Debug)]
#[command(
    name = "enlist",
    version,
    about = "Terminal client for an activity sign-up service"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    #[arg(long, env = "ENLIST_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the activities and print them
    List,
    /// Fetch the activities and print the HTML fragments for embedding
    Render,
    /// Sign an email up for an activity
    SignUp(TargetArgs),
    /// Remove a participant from an activity
    Remove(TargetArgs),
}

#[derive(Args, Debug)]
struct TargetArgs {
    #[arg(long)]
    activity: String,
    #[arg(long)]
    email: String,
}
