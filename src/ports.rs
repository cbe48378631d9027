use std::time::Duration;

use crate::activities::ActivityCollection;
use crate::view::{ActivityCard, BannerKind};

/// Failure of one API call. `Rejected` is an application-level refusal the
/// server explained (or declined to explain); `Transport` covers everything
/// that kept a decodable response from arriving.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request rejected ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
    #[error("transport failure: {0}")]
    Transport(String),
}

pub trait ActivityApi: Clone + Send + Sync + 'static {
    type FetchFut<'a>: Future<Output = Result<ActivityCollection, ApiError>> + Send + 'a
    where
        Self: 'a;
    type MutateFut<'a>: Future<Output = Result<String, ApiError>> + Send + 'a
    where
        Self: 'a;

    fn fetch_activities(&self) -> Self::FetchFut<'_>;

    /// On success resolves to the server's confirmation message.
    fn sign_up<'a>(&'a self, activity: &'a str, email: &'a str) -> Self::MutateFut<'a>;

    fn remove_participant<'a>(&'a self, activity: &'a str, email: &'a str) -> Self::MutateFut<'a>;
}

pub trait TimeProvider: Clone + Send + Sync + 'static {
    type Sleep<'a>: Future<Output = ()> + Send + 'a
    where
        Self: 'a;

    fn sleep<'a>(&'a self, duration: Duration) -> Self::Sleep<'a>;
}

/// Render targets of the controller. Implementations own whatever mutable
/// page state they need behind `&self`; the controller only pushes whole
/// states, never diffs.
pub trait ViewSurface: Clone + Send + Sync + 'static {
    /// Replace the activity list and the selection control in one step.
    fn replace_activities(&self, cards: &[ActivityCard]);

    /// Replace the activity list with a failure message. The selection
    /// control keeps whatever it last showed.
    fn replace_with_failure(&self, message: &str);

    fn show_banner(&self, kind: BannerKind, text: &str);

    fn hide_banner(&self);

    fn reset_signup_form(&self);

    /// Enable or disable the removal control for one (activity, email) pair.
    fn set_removal_enabled(&self, activity: &str, email: &str, enabled: bool);
}
