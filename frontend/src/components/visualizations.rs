//! Visualizations view: the published Looker Studio sales report, embedded
//! with the dataset parameter baked into the URL.

use yew::{html, Component, Context, Html};

use crate::embed;

pub struct VisualizationsComponent;

impl Component for VisualizationsComponent {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        VisualizationsComponent
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="report-card">
                <h2>{"Visualizations"}</h2>
                <iframe
                    width="900"
                    height="600"
                    src={embed::sales_report_url()}
                    sandbox={embed::EMBED_SANDBOX}
                ></iframe>
            </div>
        }
    }
}
