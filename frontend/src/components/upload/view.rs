//! View rendering for the staged dataset upload.
//!
//! One dropzone feeds all three slots; a slot list shows which logical
//! files have been validated, a progress block mirrors the workflow state,
//! and a single action button submits or resets the session.

use web_sys::{DragEvent, Event, FileList, HtmlInputElement, MouseEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::schema::DatasetKind;

use super::messages::Msg;
use super::state::UploadDatasetComponent;

pub fn view(component: &UploadDatasetComponent, ctx: &Context<UploadDatasetComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="upload-card">
            <h2>{"Upload Dataset"}</h2>
            { build_dropzone(component, link) }
            { build_slot_list(component) }
            { build_progress(component) }
            { build_actions(component, link) }
        </div>
    }
}

fn build_dropzone(
    component: &UploadDatasetComponent,
    link: &Scope<UploadDatasetComponent>,
) -> Html {
    let ondrop = link.batch_callback(|event: DragEvent| {
        event.prevent_default();
        let files = event
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .map(collect_files)
            .unwrap_or_default();
        if files.is_empty() {
            vec![]
        } else {
            vec![Msg::FilesChosen(files)]
        }
    });
    let ondragover = link.batch_callback(|event: DragEvent| {
        event.prevent_default();
        vec![]
    });
    let onchange = link.batch_callback(|event: Event| {
        let input = event.target_unchecked_into::<HtmlInputElement>();
        let files = input.files().map(collect_files).unwrap_or_default();
        if files.is_empty() {
            vec![]
        } else {
            vec![Msg::FilesChosen(files)]
        }
    });
    // The programmatic click on the input must not bubble back into the
    // dropzone's own click handler.
    let swallow_click = link.batch_callback(|event: MouseEvent| {
        event.stop_propagation();
        vec![]
    });

    html! {
        <div
            class="dropzone"
            {ondrop}
            {ondragover}
            onclick={link.callback(|_| Msg::OpenFilePicker)}
        >
            <input
                type="file"
                class="hidden-input"
                ref={component.picker_ref.clone()}
                accept=".csv,text/csv"
                multiple=true
                {onchange}
                onclick={swallow_click}
            />
            <i class="material-icons">{"cloud_upload"}</i>
            <span class="dropzone-title">{"Drag & drop or click to upload"}</span>
            <span class="dropzone-hint">
                {"Expected files: orders.csv, order_products.csv, products.csv"}
            </span>
        </div>
    }
}

fn build_slot_list(component: &UploadDatasetComponent) -> Html {
    html! {
        <ul class="slot-list">
            { for DatasetKind::ALL.iter().map(|kind| build_slot_row(component, *kind)) }
        </ul>
    }
}

fn build_slot_row(component: &UploadDatasetComponent, kind: DatasetKind) -> Html {
    let slot = component.session.slot(kind);
    let (icon, class) = if slot.valid {
        ("check_circle", "slot valid")
    } else if slot.error.is_some() {
        ("error", "slot invalid")
    } else {
        ("radio_button_unchecked", "slot empty")
    };

    html! {
        <li class={class}>
            <i class="material-icons">{icon}</i>
            <span class="slot-kind">{ kind.name() }</span>
            <span class="slot-file">
                { slot.file_name.clone().unwrap_or_else(|| "no file yet".to_string()) }
            </span>
            {
                match &slot.error {
                    Some(error) => html! { <span class="slot-error">{ error.clone() }</span> },
                    None => html! {},
                }
            }
        </li>
    }
}

fn build_progress(component: &UploadDatasetComponent) -> Html {
    html! {
        <div class="progress-block">
            <div class="progress-row">
                <span>{"Upload Progress"}</span>
                <span class="progress-value">{ format!("{}%", component.percent) }</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {}%;", component.percent)} />
            </div>
            <div class="status-line">{ component.session.status.clone() }</div>
        </div>
    }
}

fn build_actions(component: &UploadDatasetComponent, link: &Scope<UploadDatasetComponent>) -> Html {
    if component.session.completed {
        html! {
            <div class="action-row">
                <button class="primary" onclick={link.callback(|_| Msg::Reset)}>
                    {"Start a new dataset"}
                </button>
            </div>
        }
    } else {
        html! {
            <div class="action-row">
                <button
                    class="primary"
                    disabled={component.session.in_flight}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { if component.session.in_flight { "Uploading…" } else { "Submit dataset" } }
                </button>
            </div>
        }
    }
}

fn collect_files(list: FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|index| list.item(index)).collect()
}
