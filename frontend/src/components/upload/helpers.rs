//! Async and formatting helpers for the staged dataset upload.

use gloo_file::futures::read_as_text;
use gloo_net::http::Request;
use num_format::{Locale, ToFormattedString};
use web_sys::{File, FormData};

use common::model::upload::UploadReport;

/// Initial window of leading bytes fetched to find the header row. The
/// window is widened when the first line has not ended within it, so a
/// wide header still parses; the data rows are never needed.
const HEADER_READ_LIMIT: u64 = 8 * 1024;

/// Reads the first line of `file` from a bounded slice of the blob,
/// growing the slice until it covers a line break or the whole file.
/// Returns `None` for empty or unreadable files.
pub async fn read_header_line(file: &File) -> Option<String> {
    let blob = gloo_file::Blob::from(file.clone());
    let size = blob.size();
    let mut end = size.min(HEADER_READ_LIMIT);
    loop {
        let head = blob.slice(0, end);
        let text = read_as_text(&head).await.ok()?;
        let whole_file = end == size;
        if let Some(line) = header_line_in(&text, whole_file) {
            return Some(line.to_string());
        }
        if whole_file {
            // Nothing to extract even with the entire blob in view.
            return None;
        }
        end = size.min(end.saturating_mul(2));
    }
}

/// Extracts the header line from a window of the file, but only when the
/// window is known to contain all of it: either the line break after it,
/// or the end of the file itself. A window that may have cut the line
/// short yields `None` so the caller fetches a wider one.
fn header_line_in(text: &str, reached_end: bool) -> Option<&str> {
    if text.contains('\n') || reached_end {
        text.lines().next()
    } else {
        None
    }
}

/// Submits all validated files in a single multipart request.
///
/// Each file goes into the repeated `files` field under its original
/// filename, plus one `user_id` field. Any non-2xx response counts as a
/// failure; the caller reduces every error to the same retryable outcome,
/// so errors come back as strings for logging only.
pub async fn submit_dataset(
    url: &str,
    parts: &[(String, File)],
    user_id: &str,
) -> Result<UploadReport, String> {
    let form = FormData::new().map_err(|err| format!("{:?}", err))?;
    for (name, file) in parts {
        form.append_with_blob_and_filename("files", file, name)
            .map_err(|err| format!("{:?}", err))?;
    }
    form.append_with_str("user_id", user_id)
        .map_err(|err| format!("{:?}", err))?;

    let response = Request::post(url)
        .body(form)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("upload endpoint returned {}", response.status()));
    }
    response
        .json::<UploadReport>()
        .await
        .map_err(|err| err.to_string())
}

/// Thousands-separated rendering for the reported counts.
pub fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_render_with_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(48521), "48,521");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn header_line_needs_a_line_break_or_the_whole_file() {
        assert_eq!(header_line_in("a,b,c\nrow1,1,1", false), Some("a,b,c"));
        assert_eq!(header_line_in("a,b,c", true), Some("a,b,c"));
        // A window ending mid-line may have cut the header short.
        assert_eq!(header_line_in("a,b,c", false), None);
        assert_eq!(header_line_in("", true), None);
    }
}
