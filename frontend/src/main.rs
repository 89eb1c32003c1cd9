use crate::app::App;

mod app;
mod components;
mod config;
mod embed;
mod identity;
mod sheet;
mod storage;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
