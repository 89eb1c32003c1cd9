//! Application shell: view switching, the demo-session countdown and the
//! warning sheet.
//!
//! There is deliberately no router; the shell swaps one workspace view at a
//! time. The countdown deadline is persisted so a reload does not restart
//! the demo clock, and once the remaining time enters the warning window a
//! top sheet is opened exactly once per session.

use gloo_timers::callback::Interval;
use js_sys::Date;
use yew::html::Scope;
use yew::prelude::*;

use common::model::countdown::{CountdownPhase, DemoCountdown};

use crate::components::inference::InferIntentsComponent;
use crate::components::insights::InsightsComponent;
use crate::components::settings::SettingsComponent;
use crate::components::upload::UploadDatasetComponent;
use crate::components::visualizations::VisualizationsComponent;
use crate::sheet::{close_top_sheet, open_top_sheet, TopSheet};
use crate::storage;

const DEMO_DEADLINE_KEY: &str = "demoDeadline";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Upload,
    Inference,
    Insights,
    Visualizations,
    Settings,
}

pub enum Msg {
    Show(View),
    Tick,
    DismissWarning,
    RestartDemo,
}

pub struct App {
    view: View,
    countdown: DemoCountdown,
    warning_ref: NodeRef,
    warning_shown: bool,
    _ticker: Interval,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let countdown = match storage::get(DEMO_DEADLINE_KEY)
            .and_then(|raw| DemoCountdown::from_stored(&raw))
        {
            Some(countdown) => countdown,
            None => {
                let fresh = DemoCountdown::starting_at(now_ms());
                storage::set(DEMO_DEADLINE_KEY, &fresh.to_stored());
                fresh
            }
        };

        let link = ctx.link().clone();
        let ticker = Interval::new(1_000, move || link.send_message(Msg::Tick));

        Self {
            view: View::Upload,
            countdown,
            warning_ref: NodeRef::default(),
            warning_shown: false,
            _ticker: ticker,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show(view) => {
                self.view = view;
                true
            }
            Msg::Tick => {
                let phase = self.countdown.phase(now_ms());
                if phase != CountdownPhase::Running && !self.warning_shown {
                    self.warning_shown = true;
                    open_top_sheet(self.warning_ref.clone());
                }
                true
            }
            Msg::DismissWarning => {
                close_top_sheet(self.warning_ref.clone());
                false
            }
            Msg::RestartDemo => {
                self.countdown = DemoCountdown::starting_at(now_ms());
                storage::set(DEMO_DEADLINE_KEY, &self.countdown.to_stored());
                self.warning_shown = false;
                close_top_sheet(self.warning_ref.clone());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let now = now_ms();
        let phase = self.countdown.phase(now);
        let clock_class = match phase {
            CountdownPhase::Running => "demo-clock",
            _ => "demo-clock urgent",
        };

        html! {
            <div class="app-shell">
                <header class="app-header">
                    <span class="brand">{"IntentMiner"}</span>
                    <nav class="view-nav">
                        { nav_button(link, self.view, View::Upload, "Upload Dataset") }
                        { nav_button(link, self.view, View::Inference, "Infer Intents") }
                        { nav_button(link, self.view, View::Insights, "Insights") }
                        { nav_button(link, self.view, View::Visualizations, "Visualizations") }
                        { nav_button(link, self.view, View::Settings, "Settings") }
                    </nav>
                    <span class={clock_class} title="Demo session time remaining">
                        { self.countdown.format_remaining(now) }
                    </span>
                </header>

                <main class="workspace">
                    {
                        match self.view {
                            View::Upload => html! { <UploadDatasetComponent /> },
                            View::Inference => html! { <InferIntentsComponent /> },
                            View::Insights => html! { <InsightsComponent /> },
                            View::Visualizations => html! { <VisualizationsComponent /> },
                            View::Settings => html! { <SettingsComponent /> },
                        }
                    }
                </main>

                <TopSheet node_ref={self.warning_ref.clone()}>
                    <div class="sheet-body">
                        <h3>{"Demo session"}</h3>
                        {
                            if phase == CountdownPhase::Expired {
                                html! {
                                    <p>{"Your demo session has ended. Restart it to keep exploring."}</p>
                                }
                            } else {
                                html! {
                                    <p>
                                        {"Your demo session ends in "}
                                        <b>{ self.countdown.format_remaining(now) }</b>
                                        {"."}
                                    </p>
                                }
                            }
                        }
                        <div class="sheet-actions">
                            <button onclick={link.callback(|_| Msg::DismissWarning)}>
                                {"Dismiss"}
                            </button>
                            <button class="primary" onclick={link.callback(|_| Msg::RestartDemo)}>
                                {"Restart session"}
                            </button>
                        </div>
                    </div>
                </TopSheet>
            </div>
        }
    }
}

fn nav_button(link: &Scope<App>, current: View, target: View, label: &str) -> Html {
    let class = if current == target { "nav-btn active" } else { "nav-btn" };
    html! {
        <button class={class} onclick={link.callback(move |_| Msg::Show(target))}>
            { label }
        </button>
    }
}

fn now_ms() -> u64 {
    Date::now() as u64
}
