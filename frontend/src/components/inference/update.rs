//! Update function for the intent inference component.
//!
//! Starting a run opens an `EventSource` against the inference stream and
//! forwards each decoded event back into the component as a message. The
//! stream stays open until a terminal event, a connection error or an
//! explicit cancel, whichever comes first; all three paths close the
//! connection.

use futures_util::StreamExt;
use gloo_console::error;
use gloo_net::eventsource::futures::EventSource;
use yew::prelude::*;

use common::model::stream::InferenceEvent;

use crate::config;

use super::messages::Msg;
use super::state::{InferIntentsComponent, InferenceMode};

const SAMPLE_SIZE: u32 = 200;

pub fn update(
    component: &mut InferIntentsComponent,
    ctx: &Context<InferIntentsComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SelectMode(mode) => {
            if component.running {
                return false;
            }
            component.mode = Some(mode);
            true
        }
        Msg::Start => {
            if component.running {
                return false;
            }
            let mode = match component.mode {
                Some(mode) => mode,
                None => return false,
            };
            component.progress = None;
            component.error = None;
            component.finished = false;

            // TODO: take the dataset name from the upload flow once the
            // backend reports one back.
            let dataset = "my_dataset";
            let url = match mode {
                InferenceMode::Full => {
                    config::api_url(&format!("/intent/infer/stream?dataset={}", dataset))
                }
                InferenceMode::Sample => config::api_url(&format!(
                    "/intent/infer/stream?dataset={}&sample_size={}",
                    dataset, SAMPLE_SIZE
                )),
            };

            let mut source = match EventSource::new(&url) {
                Ok(source) => source,
                Err(err) => {
                    error!(format!("could not open inference stream: {:?}", err));
                    component.error = Some("Connection error".to_string());
                    return true;
                }
            };
            let mut events = match source.subscribe("message") {
                Ok(subscription) => subscription,
                Err(err) => {
                    error!(format!("could not subscribe to inference stream: {:?}", err));
                    component.error = Some("Connection error".to_string());
                    return true;
                }
            };

            component.running = true;
            component.stream = Some(source);

            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                while let Some(item) = events.next().await {
                    match item {
                        Ok((_, message)) => {
                            let raw = match message.data().as_string() {
                                Some(raw) => raw,
                                None => continue,
                            };
                            // Payloads that do not decode are ignored.
                            if let Ok(event) = serde_json::from_str::<InferenceEvent>(&raw) {
                                let terminal = event.is_terminal();
                                link.send_message(Msg::StreamEvent(event));
                                if terminal {
                                    break;
                                }
                            }
                        }
                        Err(_) => {
                            link.send_message(Msg::ConnectionError);
                            break;
                        }
                    }
                }
            });
            true
        }
        Msg::StreamEvent(event) => {
            match event {
                InferenceEvent::Batch { batch, total } => {
                    component.progress = Some((batch, total));
                }
                InferenceEvent::Done { .. } => {
                    component.running = false;
                    component.finished = true;
                    close_stream(component);
                }
                InferenceEvent::Error { text } => {
                    component.error =
                        Some(text.unwrap_or_else(|| "Unknown error".to_string()));
                    component.running = false;
                    close_stream(component);
                }
            }
            true
        }
        Msg::ConnectionError => {
            // A closed stream surfaces one last error event; after a cancel
            // or a terminal event it means nothing.
            if !component.running {
                return false;
            }
            component.error = Some("Connection error".to_string());
            component.running = false;
            close_stream(component);
            true
        }
        Msg::Cancel => {
            if !component.running {
                return false;
            }
            component.running = false;
            close_stream(component);
            true
        }
    }
}

fn close_stream(component: &mut InferIntentsComponent) {
    if let Some(stream) = component.stream.take() {
        stream.close();
    }
}
