//! Update function for the staged dataset upload component.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render. Every
//! workflow decision (classification, header validation, readiness,
//! locking) goes through the `UploadSession` aggregate; this module adds
//! the browser side effects around it: reading file heads, the multipart
//! POST, toasts and the progress ticker.

use gloo_console::error;
use gloo_timers::callback::Interval;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::schema::{check_header, parse_header_line, DatasetKind};

use crate::config;
use crate::identity;
use crate::toast::show_toast;

use super::helpers::{self, format_count};
use super::messages::Msg;
use super::state::UploadDatasetComponent;

pub fn update(
    component: &mut UploadDatasetComponent,
    ctx: &Context<UploadDatasetComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::OpenFilePicker => {
            if let Some(input) = component.picker_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FilesChosen(files) => {
            if component.session.completed {
                show_toast("Dataset already submitted. Start a new one to upload again.");
                return false;
            }
            if component.session.in_flight {
                show_toast("Upload in progress. New files are ignored until it finishes.");
                return false;
            }
            // Slots claimed by earlier files of this selection; without it
            // every unhinted file of a multi-select would target the same
            // open slot, since header checks only land later.
            let mut claimed: Vec<DatasetKind> = Vec::new();
            for file in files {
                let name = file.name();
                match component.session.classify_batched(&name, &claimed) {
                    Some(kind) => {
                        claimed.push(kind);
                        component.session.status = format!("Checking {}…", name);
                        let link = ctx.link().clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            match helpers::read_header_line(&file).await {
                                Some(header) => {
                                    link.send_message(Msg::HeaderRead { kind, file, header })
                                }
                                None => link.send_message(Msg::HeaderUnreadable { name }),
                            }
                        });
                    }
                    None => {
                        show_toast(&format!("{} skipped: no dataset slot left for it.", name));
                    }
                }
            }
            // Clear the input so picking the same file again fires onchange.
            if let Some(input) = component.picker_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            true
        }
        Msg::HeaderRead { kind, file, header } => {
            if component.session.completed || component.session.in_flight {
                return false;
            }
            let name = file.name();
            let check = check_header(kind, &parse_header_line(&header));
            if component.session.accept(kind, &name, &check) {
                component.files.insert(kind, file);
                component.session.status = format!("{} validated as {}.", name, kind.name());
            } else {
                // The slot was overwritten with the failing file; the stale
                // handle must go with it.
                component.files.remove(&kind);
                component.session.status = format!("{} failed validation.", name);
            }
            component.percent = component.session.percent();
            true
        }
        Msg::HeaderUnreadable { name } => {
            component.session.status = format!("Could not read {}.", name);
            show_toast(&format!("Could not read {}.", name));
            true
        }
        Msg::Submit => {
            if component.session.in_flight || component.session.completed {
                return false;
            }
            let user_id = match identity::signed_in_user() {
                Some(id) => id,
                None => {
                    component.session.status = "Please sign in before uploading.".to_string();
                    show_toast("Please sign in before uploading.");
                    return true;
                }
            };
            if !component.session.ready() {
                let needed: Vec<&str> = component
                    .session
                    .pending_kinds()
                    .iter()
                    .map(|kind| kind.name())
                    .collect();
                component.session.status = format!("Still needed: {}.", needed.join(", "));
                return true;
            }

            component.session.begin_submit();
            component.percent = component.session.percent();
            component.session.status = "Uploading…".to_string();

            let link = ctx.link().clone();
            component.ticker = Some(Interval::new(300, move || {
                link.send_message(Msg::ProgressTick)
            }));

            let parts: Vec<(String, web_sys::File)> = DatasetKind::ALL
                .iter()
                .filter_map(|kind| {
                    component
                        .files
                        .get(kind)
                        .map(|file| (file.name(), file.clone()))
                })
                .collect();
            let url = config::api_url("/upload");
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match helpers::submit_dataset(&url, &parts, &user_id).await {
                    Ok(report) => link.send_message(Msg::Uploaded(report)),
                    Err(err) => {
                        error!(format!("dataset upload failed: {}", err));
                        link.send_message(Msg::UploadFailed);
                    }
                }
            });
            true
        }
        Msg::ProgressTick => {
            if component.session.in_flight && component.percent < 95 {
                component.percent += 2;
                true
            } else {
                false
            }
        }
        Msg::Uploaded(report) => {
            component.ticker = None;
            component.session.complete();
            component.percent = component.session.percent();
            component.session.status = format!(
                "Upload complete! Rows: {}, Columns: {}",
                format_count(report.rows),
                format_count(report.columns)
            );
            component.report = Some(report);
            show_toast("Dataset uploaded.");
            true
        }
        Msg::UploadFailed => {
            component.session.fail_submit();
            component.ticker = None;
            component.percent = 0;
            component.session.status = "Upload failed.".to_string();
            show_toast("Upload failed.");
            true
        }
        Msg::Reset => {
            component.session.reset();
            component.files.clear();
            component.report = None;
            component.percent = 0;
            component.ticker = None;
            if let Some(input) = component.picker_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            true
        }
    }
}
