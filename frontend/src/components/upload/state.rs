//! Component state for the staged dataset upload.

use std::collections::HashMap;

use gloo_timers::callback::Interval;
use web_sys::File;
use yew::prelude::*;

use common::model::upload::UploadReport;
use common::schema::DatasetKind;
use common::session::UploadSession;

/// State container for the `UploadDatasetComponent`.
///
/// The session aggregate carries everything the validation logic needs;
/// the browser `File` handles live alongside it because they are what the
/// eventual multipart body is built from. Both are written and cleared
/// together: a slot is valid if and only if `files` holds its handle.
pub struct UploadDatasetComponent {
    /// Slot/validation aggregate, the single source of truth for workflow
    /// state.
    pub session: UploadSession,

    /// Browser file handles for the currently valid slots.
    pub files: HashMap<DatasetKind, File>,

    /// Counts reported by the backend after a successful submission.
    pub report: Option<UploadReport>,

    /// Displayed progress percentage. Mirrors the session while collecting
    /// files; driven by the ticker while a submission is in flight.
    pub percent: u32,

    /// Reference to the hidden file input behind the dropzone.
    pub picker_ref: NodeRef,

    /// Ticker that nudges the progress bar during an in-flight submission.
    /// Dropping it stops the ticks.
    pub ticker: Option<Interval>,
}

impl UploadDatasetComponent {
    pub fn new() -> Self {
        Self {
            session: UploadSession::new(),
            files: HashMap::new(),
            report: None,
            percent: 0,
            picker_ref: NodeRef::default(),
            ticker: None,
        }
    }
}
