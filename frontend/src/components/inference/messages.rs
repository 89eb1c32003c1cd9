use common::model::stream::InferenceEvent;

use super::state::InferenceMode;

pub enum Msg {
    SelectMode(InferenceMode),
    Start,
    StreamEvent(InferenceEvent),
    ConnectionError,
    Cancel,
}
