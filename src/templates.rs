use askama::Template;

/// Markup fragment for the `activities-list` container: one
/// `.activity-card` per activity, in server order.
#[derive(Template)]
#[template(path = "activity_list.html")]
pub(crate) struct ActivityListTemplate {
    pub(crate) cards: Vec<CardContext>,
}

pub(crate) struct CardContext {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) schedule: String,
    pub(crate) spots_left: i64,
    pub(crate) rows: Vec<ParticipantContext>,
}

pub(crate) struct ParticipantContext {
    pub(crate) email: String,
    pub(crate) disabled: bool,
}

/// Markup fragment for the `activity` select control.
#[derive(Template)]
#[template(path = "activity_options.html")]
pub(crate) struct ActivityOptionsTemplate {
    pub(crate) names: Vec<String>,
}
