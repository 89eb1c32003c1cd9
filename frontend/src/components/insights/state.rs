//! Component state for the insights view.

use common::model::rfm::RfmCluster;

/// One line of the suggestions chat.
pub struct ChatLine {
    pub from_user: bool,
    pub text: String,
}

pub struct InsightsComponent {
    pub clusters: Vec<RfmCluster>,
    pub loading: bool,
    pub load_error: Option<String>,

    /// Chat transcript, oldest first. Bot replies are markdown.
    pub chat: Vec<ChatLine>,
    /// Current content of the chat input.
    pub draft: String,
    /// True while an interpretation request is outstanding.
    pub asking: bool,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl InsightsComponent {
    pub fn new() -> Self {
        Self {
            clusters: Vec::new(),
            loading: true,
            load_error: None,
            chat: vec![ChatLine {
                from_user: false,
                text: "Hi! Ask me for recommendations based on your results.".to_string(),
            }],
            draft: String::new(),
            asking: false,
            loaded: false,
        }
    }
}
