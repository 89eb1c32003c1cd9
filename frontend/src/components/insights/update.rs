//! Update function for the insights component.

use gloo_console::error;
use yew::prelude::*;

use super::helpers;
use super::messages::Msg;
use super::state::{ChatLine, InsightsComponent};

pub fn update(
    component: &mut InsightsComponent,
    ctx: &Context<InsightsComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Clusters(clusters) => {
            component.loading = false;
            component.load_error = None;
            helpers::cache_clusters(&clusters);
            component.clusters = clusters;
            true
        }
        Msg::LoadFailed(message) => {
            component.loading = false;
            component.load_error = Some(message);
            true
        }
        Msg::SetDraft(text) => {
            component.draft = text;
            true
        }
        Msg::Send => {
            let question = component.draft.trim().to_string();
            if question.is_empty() || component.asking {
                return false;
            }
            component.chat.push(ChatLine {
                from_user: true,
                text: question,
            });
            component.draft.clear();

            if component.clusters.is_empty() {
                component.chat.push(ChatLine {
                    from_user: false,
                    text: "No RFM cluster data available yet. Upload a dataset first."
                        .to_string(),
                });
                return true;
            }

            component.asking = true;
            let clusters = component.clusters.clone();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match helpers::interpret_clusters(&clusters).await {
                    Ok(reply) => link.send_message(Msg::Reply(reply)),
                    Err(err) => {
                        error!(format!("interpretation request failed: {}", err));
                        link.send_message(Msg::AskFailed);
                    }
                }
            });
            true
        }
        Msg::Reply(text) => {
            component.asking = false;
            component.chat.push(ChatLine {
                from_user: false,
                text,
            });
            true
        }
        Msg::AskFailed => {
            component.asking = false;
            component.chat.push(ChatLine {
                from_user: false,
                text: "Sorry, the analyst service is unavailable right now.".to_string(),
            });
            true
        }
    }
}
