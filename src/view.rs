use crate::activities::ActivityCollection;

/// One rendered activity entry, in server order. Pure data: building cards
/// never touches the network or any render target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// Presentational class name on the message region.
    pub fn class_name(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

pub fn build_cards(collection: &ActivityCollection) -> Vec<ActivityCard> {
    collection
        .iter()
        .map(|(name, activity)| ActivityCard {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity.participants.clone(),
        })
        .collect()
}
