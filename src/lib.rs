pub mod activities;
pub mod adapters;
pub mod config;
pub mod controller;
pub mod ports;
pub mod surface;
mod templates;
pub mod view;

use adapters::{HttpActivityApi, TokioTimeProvider};
use config::AppConfig;
use controller::ViewSyncController;
use surface::{HtmlSurface, TerminalSurface};

pub enum Action {
    List,
    Render,
    SignUp { activity: String, email: String },
    Remove { activity: String, email: String },
}

/// Run one client action against the configured backend. Returns the process
/// exit code: 0 on success, 1 when a failure was rendered.
pub async fn run(config: AppConfig, action: Action) -> i32 {
    let api = HttpActivityApi::new(config.base_url);
    match action {
        Action::List => {
            let surface = TerminalSurface::default();
            let controller = ViewSyncController::new(api, surface.clone(), TokioTimeProvider);
            controller.load_activities().await;
            i32::from(surface.saw_failure())
        }
        Action::Render => {
            let surface = HtmlSurface::default();
            let controller = ViewSyncController::new(api, surface.clone(), TokioTimeProvider);
            controller.load_activities().await;
            if surface.load_failed() {
                eprintln!("{}", controller::LOAD_FAILURE_TEXT);
                return 1;
            }
            println!("{}", surface.activities_html());
            println!("{}", surface.options_html());
            0
        }
        Action::SignUp { activity, email } => {
            let surface = TerminalSurface::default();
            let controller = ViewSyncController::new(api, surface.clone(), TokioTimeProvider);
            controller.submit_signup(&activity, &email).await;
            i32::from(surface.saw_failure())
        }
        Action::Remove { activity, email } => {
            let surface = TerminalSurface::default();
            let controller = ViewSyncController::new(api, surface.clone(), TokioTimeProvider);
            controller.submit_removal(&activity, &email).await;
            i32::from(surface.saw_failure())
        }
    }
}
