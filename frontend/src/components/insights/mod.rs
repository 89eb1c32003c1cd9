//! Insights: root module wiring the Yew `Component` implementation with
//! submodules for state, messages, update logic, view rendering, and
//! helpers.
//!
//! Responsibilities
//! - Re-export the component types (`Msg`, `InsightsComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, load the RFM clusters: from the local-storage cache
//!   if one exists, otherwise from the backend using the signed-in user id
//!   (caching the result for next time).

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::rfm::RfmInsights;

use crate::config;
use crate::identity;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::InsightsComponent;

impl Component for InsightsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        InsightsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(cached) = helpers::cached_clusters() {
                ctx.link().send_message(Msg::Clusters(cached));
                return;
            }

            match identity::signed_in_user() {
                Some(user_id) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let url =
                            config::api_url(&format!("/rfm-insights?user_id={}", user_id));
                        let response = Request::get(&url).send().await;

                        match response {
                            Ok(resp) if resp.ok() => match resp.json::<RfmInsights>().await {
                                Ok(insights) => match insights.error {
                                    Some(message) => {
                                        link.send_message(Msg::LoadFailed(message))
                                    }
                                    None => link.send_message(Msg::Clusters(insights.clusters)),
                                },
                                Err(err) => {
                                    error!(format!("bad RFM insights body: {}", err));
                                    link.send_message(Msg::LoadFailed(
                                        "Could not load RFM insights.".to_string(),
                                    ));
                                }
                            },
                            _ => link.send_message(Msg::LoadFailed(
                                "Could not load RFM insights.".to_string(),
                            )),
                        }
                    });
                }
                None => ctx.link().send_message(Msg::LoadFailed(
                    "Sign in to load RFM insights.".to_string(),
                )),
            }
        }
    }
}
