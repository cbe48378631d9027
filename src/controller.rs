use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::error;

use crate::ports::{ActivityApi, ApiError, TimeProvider, ViewSurface};
use crate::view::{self, BannerKind};

pub const BANNER_TTL: Duration = Duration::from_secs(5);

pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";
const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
const SIGNUP_TRANSPORT_FALLBACK: &str = "Failed to sign up. Please try again.";
const REMOVAL_REJECTED_FALLBACK: &str = "Unable to remove participant";
const REMOVAL_TRANSPORT_FALLBACK: &str = "Failed to remove participant. Please try again.";

/// Fetches the activity collection, pushes it onto the surface, submits
/// mutations and re-fetches after every successful one. The client never
/// patches its copy of the collection; the server response is the only truth.
pub struct ViewSyncController<A, S, T> {
    api: A,
    surface: S,
    time: T,
    banner_timer: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<A, S, T> ViewSyncController<A, S, T>
where
    A: ActivityApi,
    S: ViewSurface,
    T: TimeProvider,
{
    pub fn new(api: A, surface: S, time: T) -> Self {
        Self {
            api,
            surface,
            time,
            banner_timer: Arc::new(Mutex::new(None)),
        }
    }

    /// Fetch the collection and replace the rendered view. Failures become a
    /// fixed message in place of the list; nothing is retried.
    pub async fn load_activities(&self) {
        match self.api.fetch_activities().await {
            Ok(collection) => {
                let cards = view::build_cards(&collection);
                self.surface.replace_activities(&cards);
            }
            Err(err) => {
                error!("failed to fetch activities: {err}");
                self.surface.replace_with_failure(LOAD_FAILURE_TEXT);
            }
        }
    }

    pub async fn submit_signup(&self, activity: &str, email: &str) {
        match self.api.sign_up(activity, email).await {
            Ok(message) => {
                self.load_activities().await;
                self.show_message(&message, BannerKind::Success);
                self.surface.reset_signup_form();
            }
            Err(ApiError::Rejected { detail, .. }) => {
                let text = detail.unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string());
                self.show_message(&text, BannerKind::Error);
            }
            Err(err) => {
                error!("failed to sign up: {err}");
                self.show_message(SIGNUP_TRANSPORT_FALLBACK, BannerKind::Error);
            }
        }
    }

    pub async fn submit_removal(&self, activity: &str, email: &str) {
        // Disabled for the whole request, re-enabled on every exit path.
        let _lock = RemovalLock::engage(&self.surface, activity, email);
        match self.api.remove_participant(activity, email).await {
            Ok(message) => {
                self.load_activities().await;
                self.show_message(&message, BannerKind::Success);
            }
            Err(ApiError::Rejected { detail, .. }) => {
                let text = detail.unwrap_or_else(|| REMOVAL_REJECTED_FALLBACK.to_string());
                self.show_message(&text, BannerKind::Error);
            }
            Err(err) => {
                error!("failed to remove participant: {err}");
                self.show_message(REMOVAL_TRANSPORT_FALLBACK, BannerKind::Error);
            }
        }
    }

    /// Show the banner and arm the hide timer. A newer message replaces the
    /// text and restarts the timer; the superseded timer is aborted so it
    /// cannot hide the newer message early.
    pub fn show_message(&self, text: &str, kind: BannerKind) {
        self.surface.show_banner(kind, text);
        let surface = self.surface.clone();
        let time = self.time.clone();
        let handle = tokio::spawn(async move {
            time.sleep(BANNER_TTL).await;
            surface.hide_banner();
        });
        let mut timer = self.banner_timer.lock().expect("banner timer lock");
        if let Some(previous) = timer.replace(handle) {
            previous.abort();
        }
    }

    #[cfg(test)]
    pub(crate) fn take_banner_timer(&self) -> Option<JoinHandle<()>> {
        self.banner_timer.lock().expect("banner timer lock").take()
    }
}

struct RemovalLock<'a, S: ViewSurface> {
    surface: &'a S,
    activity: &'a str,
    email: &'a str,
}

impl<'a, S: ViewSurface> RemovalLock<'a, S> {
    fn engage(surface: &'a S, activity: &'a str, email: &'a str) -> Self {
        surface.set_removal_enabled(activity, email, false);
        Self {
            surface,
            activity,
            email,
        }
    }
}

impl<S: ViewSurface> Drop for RemovalLock<'_, S> {
    fn drop(&mut self) {
        self.surface.set_removal_enabled(self.activity, self.email, true);
    }
}
