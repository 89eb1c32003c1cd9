use serde::{Deserialize, Serialize};

/// One server-sent event from the intent inference stream.
///
/// The backend emits `batch` events while mining, then exactly one `done`
/// or `error` event, after which the stream is finished and the client
/// should close the connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InferenceEvent {
    /// Progress: `batch` transactions out of `total` have been processed.
    Batch { batch: u32, total: u32 },
    /// Mining finished; results are ready server-side.
    Done {
        #[serde(default)]
        text: Option<String>,
    },
    /// Mining aborted server-side.
    Error {
        #[serde(default)]
        text: Option<String>,
    },
}

impl InferenceEvent {
    /// Whether this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, InferenceEvent::Done { .. } | InferenceEvent::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_events_parse_with_counts() {
        let event: InferenceEvent =
            serde_json::from_str(r#"{"type":"batch","batch":3,"total":12}"#).unwrap();
        match event {
            InferenceEvent::Batch { batch, total } => {
                assert_eq!((batch, total), (3, 12));
            }
            other => panic!("expected batch, got {other:?}"),
        }
        assert!(!event_is_terminal(r#"{"type":"batch","batch":3,"total":12}"#));
    }

    #[test]
    fn unknown_payloads_do_not_decode() {
        assert!(serde_json::from_str::<InferenceEvent>(r#"{"type":"ping"}"#).is_err());
        assert!(serde_json::from_str::<InferenceEvent>("not json").is_err());
    }

    #[test]
    fn done_and_error_parse_with_or_without_text() {
        assert!(event_is_terminal(r#"{"type":"done"}"#));
        assert!(event_is_terminal(r#"{"type":"error","text":"boom"}"#));

        let event: InferenceEvent =
            serde_json::from_str(r#"{"type":"error","text":"boom"}"#).unwrap();
        match event {
            InferenceEvent::Error { text } => assert_eq!(text.as_deref(), Some("boom")),
            other => panic!("expected error, got {other:?}"),
        }
    }

    fn event_is_terminal(json: &str) -> bool {
        serde_json::from_str::<InferenceEvent>(json).unwrap().is_terminal()
    }
}
