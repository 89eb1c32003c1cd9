use web_sys::File;

use common::model::upload::UploadReport;
use common::schema::DatasetKind;

pub enum Msg {
    OpenFilePicker,
    FilesChosen(Vec<File>),
    HeaderRead {
        kind: DatasetKind,
        file: File,
        header: String,
    },
    HeaderUnreadable {
        name: String,
    },
    Submit,
    ProgressTick,
    Uploaded(UploadReport),
    UploadFailed,
    Reset,
}
