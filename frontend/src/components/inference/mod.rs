//! Intent inference: root module wiring the Yew `Component` implementation
//! with submodules for state, messages, update logic and view rendering.
//!
//! The user picks full-dataset or sample mode and starts a run; progress
//! arrives over a server-sent-event stream that the component owns and
//! closes when the run finishes, fails or is cancelled.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::InferIntentsComponent;

impl Component for InferIntentsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        InferIntentsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
