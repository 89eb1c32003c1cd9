//! Staged upload session: three file slots that are filled and validated
//! independently, then submitted together.
//!
//! All state lives in the [`UploadSession`] value owned by the caller.
//! Nothing here touches the browser; accepting a file, computing readiness
//! and locking after a successful submit are plain data operations, which
//! keeps them testable off-wasm.

use crate::schema::{self, DatasetKind, HeaderCheck};

/// One of the three per-kind slots of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSlot {
    /// Name of the most recently offered file, whether or not it passed.
    pub file_name: Option<String>,
    /// True once a file with a conforming header occupies the slot.
    pub valid: bool,
    /// Header failure text for the current file, if it failed.
    pub error: Option<String>,
}

/// The whole upload workflow state for one dataset submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSession {
    slots: [FileSlot; 3],
    /// Free-form line shown under the dropzone ("Checking orders.csv…").
    pub status: String,
    /// Set while the submission request is outstanding; the slots are
    /// locked meanwhile so the server receives exactly what was shown.
    pub in_flight: bool,
    /// Set after a successful submit; the session is then read-only until
    /// [`UploadSession::reset`].
    pub completed: bool,
}

impl UploadSession {
    pub fn new() -> Self {
        UploadSession {
            slots: [FileSlot::default(), FileSlot::default(), FileSlot::default()],
            status: String::new(),
            in_flight: false,
            completed: false,
        }
    }

    pub fn slot(&self, kind: DatasetKind) -> &FileSlot {
        &self.slots[kind.index()]
    }

    /// First kind (in fixed order) whose slot does not yet hold a valid
    /// file. `None` when every slot is valid.
    pub fn first_pending(&self) -> Option<DatasetKind> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| !self.slot(*kind).valid)
    }

    /// Kinds still lacking a valid file, in fixed order.
    pub fn pending_kinds(&self) -> Vec<DatasetKind> {
        DatasetKind::ALL
            .into_iter()
            .filter(|kind| !self.slot(*kind).valid)
            .collect()
    }

    /// Decides which slot an incoming file is aimed at: the filename
    /// substring hint when there is one, otherwise the first slot still
    /// waiting for a valid file. `None` means every slot is already valid
    /// and the file has nowhere to go.
    pub fn classify(&self, file_name: &str) -> Option<DatasetKind> {
        self.classify_batched(file_name, &[])
    }

    /// Like [`UploadSession::classify`], but the fallback skips kinds
    /// already claimed by earlier files of the same selection. Header
    /// checks land asynchronously, so without the claimed list every
    /// unhinted file of one multi-select would fall through to the same
    /// open slot; with it a batch routes the way offering the files one
    /// at a time would.
    pub fn classify_batched(
        &self,
        file_name: &str,
        claimed: &[DatasetKind],
    ) -> Option<DatasetKind> {
        schema::classify_filename(file_name).or_else(|| {
            DatasetKind::ALL
                .into_iter()
                .find(|kind| !self.slot(*kind).valid && !claimed.contains(kind))
        })
    }

    /// Records the header check outcome for a file offered to `kind`.
    ///
    /// The slot is overwritten wholesale, so a failing file replaces a
    /// previously valid one and the slot must be re-earned. Returns whether
    /// the file was accepted as valid; always false while a submission is
    /// in flight or once the session is completed, which also leaves the
    /// slot untouched.
    pub fn accept(&mut self, kind: DatasetKind, file_name: &str, check: &HeaderCheck) -> bool {
        if self.in_flight || self.completed {
            return false;
        }
        let slot = &mut self.slots[kind.index()];
        slot.file_name = Some(file_name.to_string());
        slot.valid = check.is_valid();
        slot.error = check.error_message();
        slot.valid
    }

    /// True when the session can be submitted: all three slots valid, no
    /// submission outstanding, not already completed.
    pub fn ready(&self) -> bool {
        !self.in_flight
            && !self.completed
            && DatasetKind::ALL.iter().all(|kind| self.slot(*kind).valid)
    }

    /// Locks the slots for the duration of a submission.
    pub fn begin_submit(&mut self) {
        self.in_flight = true;
    }

    /// Unlocks after a failed submission; the validated slots stay as they
    /// are, so the user can retry without re-validating.
    pub fn fail_submit(&mut self) {
        self.in_flight = false;
    }

    /// Locks the session after a successful submit.
    pub fn complete(&mut self) {
        self.in_flight = false;
        self.completed = true;
    }

    /// Returns the session to its initial empty state.
    pub fn reset(&mut self) {
        *self = UploadSession::new();
    }

    /// Coarse progress for the slot indicator: 25% per valid slot while
    /// collecting files, pinned to 100 once the submit went through.
    pub fn percent(&self) -> u32 {
        if self.completed {
            return 100;
        }
        let valid = DatasetKind::ALL
            .iter()
            .filter(|kind| self.slot(**kind).valid)
            .count() as u32;
        valid * 25
    }
}

impl Default for UploadSession {
    fn default() -> Self {
        UploadSession::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::check_header;

    fn passing(kind: DatasetKind) -> HeaderCheck {
        let cols: Vec<String> = kind
            .expected_columns()
            .iter()
            .map(|c| c.to_string())
            .collect();
        check_header(kind, &cols)
    }

    fn failing(kind: DatasetKind) -> HeaderCheck {
        check_header(kind, &["wrong".to_string()])
    }

    #[test]
    fn fresh_session_points_at_orders_first() {
        let session = UploadSession::new();
        assert_eq!(session.first_pending(), Some(DatasetKind::Orders));
        assert_eq!(session.pending_kinds(), DatasetKind::ALL.to_vec());
        assert!(!session.ready());
        assert_eq!(session.percent(), 0);
    }

    #[test]
    fn unhinted_files_fall_through_to_the_first_open_slot() {
        let mut session = UploadSession::new();
        assert_eq!(session.classify("data.csv"), Some(DatasetKind::Orders));

        session.accept(DatasetKind::Orders, "data.csv", &passing(DatasetKind::Orders));
        assert_eq!(session.classify("more.csv"), Some(DatasetKind::OrderProducts));
    }

    #[test]
    fn filename_hint_beats_the_open_slot_fallback() {
        let session = UploadSession::new();
        // Orders slot is open, but the name says products.
        assert_eq!(session.classify("products.csv"), Some(DatasetKind::Products));
    }

    #[test]
    fn classify_returns_none_once_every_slot_is_valid() {
        let mut session = UploadSession::new();
        for kind in DatasetKind::ALL {
            session.accept(kind, "f.csv", &passing(kind));
        }
        assert_eq!(session.classify("mystery.csv"), None);
        // A hinted name still targets its slot for replacement.
        assert_eq!(session.classify("orders_v2.csv"), Some(DatasetKind::Orders));
    }

    #[test]
    fn failing_file_replaces_a_valid_slot_entirely() {
        let mut session = UploadSession::new();
        assert!(session.accept(
            DatasetKind::Orders,
            "orders.csv",
            &passing(DatasetKind::Orders)
        ));
        assert!(session.slot(DatasetKind::Orders).valid);

        assert!(!session.accept(
            DatasetKind::Orders,
            "orders_broken.csv",
            &failing(DatasetKind::Orders)
        ));
        let slot = session.slot(DatasetKind::Orders);
        assert!(!slot.valid);
        assert_eq!(slot.file_name.as_deref(), Some("orders_broken.csv"));
        assert!(slot.error.as_deref().is_some_and(|e| e.starts_with("Missing columns:")));
        assert!(!session.ready());
    }

    #[test]
    fn ready_only_when_all_three_slots_are_valid() {
        let mut session = UploadSession::new();
        session.accept(DatasetKind::Orders, "orders.csv", &passing(DatasetKind::Orders));
        session.accept(DatasetKind::Products, "products.csv", &passing(DatasetKind::Products));
        assert!(!session.ready());
        assert_eq!(session.pending_kinds(), vec![DatasetKind::OrderProducts]);
        assert_eq!(session.percent(), 50);

        session.accept(
            DatasetKind::OrderProducts,
            "order_products.csv",
            &passing(DatasetKind::OrderProducts),
        );
        assert!(session.ready());
        assert_eq!(session.percent(), 75);
    }

    #[test]
    fn batch_fallback_spreads_unhinted_files_across_slots() {
        let session = UploadSession::new();
        let mut claimed = Vec::new();
        let mut routes = Vec::new();
        for name in ["export_a.csv", "export_b.csv", "export_c.csv"] {
            let kind = session.classify_batched(name, &claimed);
            if let Some(kind) = kind {
                claimed.push(kind);
            }
            routes.push(kind);
        }
        let expected: Vec<_> = DatasetKind::ALL.into_iter().map(Some).collect();
        assert_eq!(routes, expected);
        // A fourth unhinted file has nowhere left to go.
        assert_eq!(session.classify_batched("export_d.csv", &claimed), None);
    }

    #[test]
    fn hinted_files_claim_their_slot_within_a_batch() {
        let session = UploadSession::new();
        let first = session.classify_batched("orders.csv", &[]);
        assert_eq!(first, Some(DatasetKind::Orders));
        // The unhinted sibling skips the claimed orders slot.
        assert_eq!(
            session.classify_batched("data.csv", &[DatasetKind::Orders]),
            Some(DatasetKind::OrderProducts)
        );
    }

    #[test]
    fn slots_lock_while_a_submission_is_in_flight() {
        let mut session = UploadSession::new();
        for kind in DatasetKind::ALL {
            session.accept(kind, "f.csv", &passing(kind));
        }
        assert!(session.ready());

        session.begin_submit();
        assert!(!session.ready());

        let before = session.clone();
        assert!(!session.accept(
            DatasetKind::Orders,
            "dropped_mid_flight.csv",
            &failing(DatasetKind::Orders)
        ));
        assert_eq!(session, before);

        session.complete();
        assert!(session.completed);
        assert!(!session.in_flight);
        assert_eq!(session.percent(), 100);
    }

    #[test]
    fn failed_submission_unlocks_for_retry() {
        let mut session = UploadSession::new();
        for kind in DatasetKind::ALL {
            session.accept(kind, "f.csv", &passing(kind));
        }
        session.begin_submit();
        session.fail_submit();
        assert!(!session.in_flight);
        assert!(session.ready());
    }

    #[test]
    fn completed_session_refuses_new_files_until_reset() {
        let mut session = UploadSession::new();
        for kind in DatasetKind::ALL {
            session.accept(kind, "f.csv", &passing(kind));
        }
        session.complete();
        assert!(session.completed);
        assert!(!session.ready());
        assert_eq!(session.percent(), 100);

        let before = session.clone();
        assert!(!session.accept(
            DatasetKind::Orders,
            "late.csv",
            &passing(DatasetKind::Orders)
        ));
        assert_eq!(session, before);

        session.reset();
        assert_eq!(session, UploadSession::new());
        assert_eq!(session.percent(), 0);
    }
}
