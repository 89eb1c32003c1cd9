//! Settings view: analysis preferences, persisted in local storage on
//! every change so they survive reloads. Only CSV uploads are implemented
//! today; the other choices are recorded for later.

use web_sys::{Event, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::prefs::{
    AnalysisPrefs, ANALYSIS_OPTIONS, DATASET_TYPES, UPLOAD_FORMATS, VISUAL_PLATFORMS,
};

use crate::storage;

const PREFS_KEY: &str = "analysisPrefs";

pub enum Msg {
    SetUploadFormat(String),
    SetVisualPlatform(String),
    SetDatasetType(String),
    ToggleAnalysis(&'static str),
}

pub struct SettingsComponent {
    prefs: AnalysisPrefs,
}

impl Component for SettingsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            prefs: storage::get_json(PREFS_KEY).unwrap_or_default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUploadFormat(value) => self.prefs.upload_format = value,
            Msg::SetVisualPlatform(value) => self.prefs.visual_platform = value,
            Msg::SetDatasetType(value) => self.prefs.dataset_type = value,
            Msg::ToggleAnalysis(option) => self.prefs.toggle_analysis(option),
        }
        storage::set_json(PREFS_KEY, &self.prefs);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="settings-card">
                <h2>{"Settings"}</h2>
                { build_select(
                    "Upload Format",
                    &UPLOAD_FORMATS,
                    &self.prefs.upload_format,
                    link.callback(|event: Event| Msg::SetUploadFormat(select_value(event))),
                ) }
                { build_select(
                    "Visualisation Platform",
                    &VISUAL_PLATFORMS,
                    &self.prefs.visual_platform,
                    link.callback(|event: Event| Msg::SetVisualPlatform(select_value(event))),
                ) }
                { build_select(
                    "Type of Dataset",
                    &DATASET_TYPES,
                    &self.prefs.dataset_type,
                    link.callback(|event: Event| Msg::SetDatasetType(select_value(event))),
                ) }
                { build_analysis_options(&self.prefs, link) }
            </div>
        }
    }
}

fn build_select(
    label: &str,
    options: &[&'static str],
    current: &str,
    onchange: Callback<Event>,
) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <select {onchange}>
                { for options.iter().map(|option| html! {
                    <option value={*option} selected={*option == current}>{ *option }</option>
                }) }
            </select>
        </label>
    }
}

fn build_analysis_options(prefs: &AnalysisPrefs, link: &Scope<SettingsComponent>) -> Html {
    html! {
        <fieldset class="field">
            <legend class="field-label">{"Analysis Preferences"}</legend>
            { for ANALYSIS_OPTIONS.iter().map(|option| {
                let option = *option;
                html! {
                    <label class="check-row">
                        <input
                            type="checkbox"
                            checked={prefs.has_analysis(option)}
                            onchange={link.callback(move |_| Msg::ToggleAnalysis(option))}
                        />
                        { option }
                    </label>
                }
            }) }
        </fieldset>
    }
}

fn select_value(event: Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}
