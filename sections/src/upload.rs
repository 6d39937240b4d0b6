//! Image upload completion for identity-card slots.
//!
//! The file dialog and the byte read happen outside this crate; what
//! arrives here is the completed read (or nothing, when the user cancelled
//! or the read failed). Completion replaces exactly one slot in a copy of
//! the three-slot image list and writes the full list back through the
//! store's override entrypoint.
//!
//! The contract is deliberately lenient: no file, a failed read, a bad slot
//! index, or a rejected store write all no-op silently. Overlapping uploads
//! to the same slot are last-write-wins - the later completion overwrites
//! whatever is in the list at that index when it fires.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::store::SettingsStore;
use crate::types::{IdentityData, Section};

/// A completed file read handed to [`on_file_selected`]. Only the first
/// selected file is ever passed along.
#[derive(Clone, Debug)]
pub struct FileUpload {
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// MIME type reported by the file input, e.g. `image/png`.
    pub mime: String,
}

impl FileUpload {
    /// Bundle raw bytes with their MIME type.
    pub fn new(bytes: impl Into<Vec<u8>>, mime: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime: mime.into(),
        }
    }
}

/// Encode a file as a `data:` URL suitable for an `img src` attribute.
pub fn encode_data_url(file: &FileUpload) -> String {
    format!("data:{};base64,{}", file.mime, STANDARD.encode(&file.bytes))
}

/// Apply an upload completion to `slot` of the identity-card block
/// `block_id`.
///
/// Replaces only `images[slot].url`; the other slots (and the slot's
/// shape) are untouched. `None` means the dialog was cancelled or the read
/// failed - a silent no-op.
pub fn on_file_selected(
    store: &mut SettingsStore,
    block_id: &str,
    slot: usize,
    file: Option<FileUpload>,
) {
    let Some(file) = file else {
        tracing::debug!(block = block_id, slot, "upload skipped: no file");
        return;
    };
    if file.bytes.is_empty() {
        tracing::debug!(block = block_id, slot, "upload skipped: empty read");
        return;
    }

    let Some(block) = store.block(block_id) else {
        return;
    };
    let Section::IdentityCard(ovr) = &block.section else {
        return;
    };

    let mut images = ovr
        .data
        .as_ref()
        .and_then(|d| d.images.clone())
        .unwrap_or_else(IdentityData::stock_images);
    if slot >= images.len() {
        return;
    }
    images[slot].url = encode_data_url(&file);

    match serde_json::to_value(&images) {
        Ok(value) => {
            if let Err(err) = store.set_local_override(block_id, "data.images", value) {
                tracing::debug!(block = block_id, slot, %err, "upload write rejected");
            }
        }
        Err(err) => tracing::debug!(block = block_id, slot, %err, "upload encode failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Block, DesignTokens, IdentityOverrides, Page};
    use pretty_assertions::assert_eq;

    fn store() -> SettingsStore {
        SettingsStore::new(
            DesignTokens::default(),
            Page {
                blocks: vec![Block {
                    id: "card-01".into(),
                    section: Section::IdentityCard(IdentityOverrides::default()),
                }],
            },
        )
    }

    fn images(store: &SettingsStore) -> Vec<crate::types::ImageSlot> {
        let Section::IdentityCard(ovr) = &store.block("card-01").unwrap().section else {
            panic!("expected identity card");
        };
        ovr.data
            .as_ref()
            .and_then(|d| d.images.clone())
            .unwrap_or_else(IdentityData::stock_images)
    }

    #[test]
    fn encodes_a_data_url() {
        let file = FileUpload::new(*b"abc", "image/png");
        assert_eq!(encode_data_url(&file), "data:image/png;base64,YWJj");
    }

    #[test]
    fn replaces_only_the_addressed_slot() {
        let mut store = store();
        let before = images(&store);

        on_file_selected(
            &mut store,
            "card-01",
            1,
            Some(FileUpload::new(*b"abc", "image/png")),
        );

        let after = images(&store);
        assert_eq!(after[1].url, "data:image/png;base64,YWJj");
        assert_eq!(after[1].shape, before[1].shape);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn no_file_is_a_no_op() {
        let mut store = store();
        let before = images(&store);
        on_file_selected(&mut store, "card-01", 1, None);
        assert_eq!(images(&store), before);
        // The override record itself stays sparse.
        let Section::IdentityCard(ovr) = &store.block("card-01").unwrap().section else {
            panic!("expected identity card");
        };
        assert!(ovr.data.is_none());
    }

    #[test]
    fn out_of_range_slot_is_a_no_op() {
        let mut store = store();
        on_file_selected(
            &mut store,
            "card-01",
            7,
            Some(FileUpload::new(*b"abc", "image/png")),
        );
        let Section::IdentityCard(ovr) = &store.block("card-01").unwrap().section else {
            panic!("expected identity card");
        };
        assert!(ovr.data.is_none());
    }

    #[test]
    fn later_completion_wins() {
        let mut store = store();
        on_file_selected(
            &mut store,
            "card-01",
            1,
            Some(FileUpload::new(*b"first", "image/png")),
        );
        on_file_selected(
            &mut store,
            "card-01",
            1,
            Some(FileUpload::new(*b"second", "image/png")),
        );
        let after = images(&store);
        assert_eq!(
            after[1].url,
            format!("data:image/png;base64,{}", STANDARD.encode(b"second"))
        );
    }

    #[test]
    fn unknown_block_is_a_silent_no_op() {
        let mut store = store();
        on_file_selected(
            &mut store,
            "missing",
            0,
            Some(FileUpload::new(*b"abc", "image/png")),
        );
        assert_eq!(images(&store), IdentityData::stock_images());
    }
}
