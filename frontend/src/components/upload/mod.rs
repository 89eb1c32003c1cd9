//! Staged dataset upload: root module wiring the Yew `Component`
//! implementation with submodules for state, messages, update logic, view
//! rendering, and helpers.
//!
//! Responsibilities
//! - Re-export the component types (`Msg`, `UploadDatasetComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//!
//! A dataset consists of three CSV files (orders, order_products,
//! products). Files are collected one at a time, each one is classified
//! into a slot and header-checked locally, and only when all three slots
//! hold a valid file is the whole set submitted to the backend in a single
//! multipart request.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::UploadDatasetComponent;

impl Component for UploadDatasetComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        UploadDatasetComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
