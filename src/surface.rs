use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use askama::Template;

use crate::ports::ViewSurface;
use crate::templates::{
    ActivityListTemplate, ActivityOptionsTemplate, CardContext, ParticipantContext,
};
use crate::view::{ActivityCard, BannerKind};

/// Headless page: holds the rendered markup fragments, the banner, the
/// sign-up form fields and the disabled state of removal controls. Stands in
/// for the DOM the original markup contract targets.
#[derive(Clone, Default)]
pub struct HtmlSurface {
    state: Arc<Mutex<PageState>>,
}

#[derive(Default)]
struct PageState {
    cards: Vec<ActivityCard>,
    disabled: HashSet<(String, String)>,
    activities_html: String,
    options_html: String,
    banner: Option<(BannerKind, String)>,
    form_activity: String,
    form_email: String,
    load_failed: bool,
}

impl PageState {
    fn render(&mut self) {
        let cards = self
            .cards
            .iter()
            .map(|card| CardContext {
                name: card.name.clone(),
                description: card.description.clone(),
                schedule: card.schedule.clone(),
                spots_left: card.spots_left,
                rows: card
                    .participants
                    .iter()
                    .map(|email| ParticipantContext {
                        email: email.clone(),
                        disabled: self
                            .disabled
                            .contains(&(card.name.clone(), email.clone())),
                    })
                    .collect(),
            })
            .collect();
        let names = self.cards.iter().map(|card| card.name.clone()).collect();
        // Rendering plain string data cannot fail; a panic here means a
        // template bug, not bad server input.
        self.activities_html = ActivityListTemplate { cards }
            .render()
            .expect("render activity list");
        self.options_html = ActivityOptionsTemplate { names }
            .render()
            .expect("render activity options");
    }
}

impl HtmlSurface {
    pub fn activities_html(&self) -> String {
        self.state.lock().expect("page lock").activities_html.clone()
    }

    pub fn options_html(&self) -> String {
        self.state.lock().expect("page lock").options_html.clone()
    }

    pub fn banner(&self) -> Option<(BannerKind, String)> {
        self.state.lock().expect("page lock").banner.clone()
    }

    /// Form fields as the embedding page would hold them; submissions read
    /// them, a successful signup clears them.
    pub fn set_form(&self, activity: &str, email: &str) {
        let mut state = self.state.lock().expect("page lock");
        state.form_activity = activity.to_string();
        state.form_email = email.to_string();
    }

    pub fn form(&self) -> (String, String) {
        let state = self.state.lock().expect("page lock");
        (state.form_activity.clone(), state.form_email.clone())
    }

    /// True while the list shows the load-failure message instead of cards.
    pub fn load_failed(&self) -> bool {
        self.state.lock().expect("page lock").load_failed
    }
}

impl ViewSurface for HtmlSurface {
    fn replace_activities(&self, cards: &[ActivityCard]) {
        let mut state = self.state.lock().expect("page lock");
        state.cards = cards.to_vec();
        state.load_failed = false;
        state.render();
    }

    fn replace_with_failure(&self, message: &str) {
        let mut state = self.state.lock().expect("page lock");
        state.cards.clear();
        state.load_failed = true;
        // Only the list container is replaced; the select control keeps its
        // last contents, as the original page did.
        state.activities_html = format!("<p>{message}</p>");
    }

    fn show_banner(&self, kind: BannerKind, text: &str) {
        let mut state = self.state.lock().expect("page lock");
        state.banner = Some((kind, text.to_string()));
    }

    fn hide_banner(&self) {
        let mut state = self.state.lock().expect("page lock");
        state.banner = None;
    }

    fn reset_signup_form(&self) {
        let mut state = self.state.lock().expect("page lock");
        state.form_activity.clear();
        state.form_email.clear();
    }

    fn set_removal_enabled(&self, activity: &str, email: &str, enabled: bool) {
        let mut state = self.state.lock().expect("page lock");
        let key = (activity.to_string(), email.to_string());
        if enabled {
            state.disabled.remove(&key);
        } else {
            state.disabled.insert(key);
        }
        state.render();
    }
}

/// Prints render updates to stdout and remembers whether anything failed, so
/// the CLI can exit nonzero.
#[derive(Clone, Default)]
pub struct TerminalSurface {
    failed: Arc<Mutex<bool>>,
}

impl TerminalSurface {
    pub fn saw_failure(&self) -> bool {
        *self.failed.lock().expect("failed flag lock")
    }
}

impl ViewSurface for TerminalSurface {
    fn replace_activities(&self, cards: &[ActivityCard]) {
        for card in cards {
            println!("{}", card.name);
            println!("  {}", card.description);
            println!("  Schedule: {}", card.schedule);
            println!("  Availability: {} spots left", card.spots_left);
            if card.participants.is_empty() {
                println!("  Participants: none yet");
            } else {
                println!("  Participants:");
                for email in &card.participants {
                    println!("    - {email}");
                }
            }
        }
    }

    fn replace_with_failure(&self, message: &str) {
        *self.failed.lock().expect("failed flag lock") = true;
        println!("{message}");
    }

    fn show_banner(&self, kind: BannerKind, text: &str) {
        if kind == BannerKind::Error {
            *self.failed.lock().expect("failed flag lock") = true;
        }
        println!("[{}] {text}", kind.class_name());
    }

    fn hide_banner(&self) {}

    fn reset_signup_form(&self) {}

    fn set_removal_enabled(&self, _activity: &str, _email: &str, _enabled: bool) {}
}
