//! Component state for the intent inference view.

use gloo_net::eventsource::futures::EventSource;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InferenceMode {
    Full,
    Sample,
}

pub struct InferIntentsComponent {
    pub mode: Option<InferenceMode>,
    /// True from Start until the stream reports done/error or the user
    /// cancels.
    pub running: bool,
    /// Latest `(batch, total)` pair reported by the stream.
    pub progress: Option<(u32, u32)>,
    pub error: Option<String>,
    pub finished: bool,
    /// The open SSE connection. Taking and dropping it closes the socket.
    pub stream: Option<EventSource>,
}

impl InferIntentsComponent {
    pub fn new() -> Self {
        Self {
            mode: None,
            running: false,
            progress: None,
            error: None,
            finished: false,
            stream: None,
        }
    }
}
