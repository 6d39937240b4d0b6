//! The settings store: design tokens, the viewport-mode flag, and the
//! page's per-block local overrides.
//!
//! Components never reach into the store - everything a render pass needs
//! is passed in as plain arguments. The store exists for the two parties
//! that mutate state: the designer-side editing UI and the upload handler,
//! both of which go through [`SettingsStore::set_local_override`], a
//! path-addressed partial update into one block's override record.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::resolve::ViewportMode;
use crate::types::{Block, DesignTokens, Page};

/// A rejected override write.
///
/// Resolution itself never errors; the store write is the one fallible
/// seam, and callers that inherit the lenient editing contract (the upload
/// handler) swallow these.
#[derive(Debug, Error)]
pub enum OverrideError {
    /// No block with the given id on the page.
    #[error("unknown block `{0}`")]
    UnknownBlock(String),
    /// An empty override path.
    #[error("override path is empty")]
    EmptyPath,
    /// A path segment ran through a scalar or array.
    #[error("`{path}` does not address an object")]
    NotAnObject {
        /// The prefix that failed to resolve.
        path: String,
    },
    /// The written value broke the block's override shape.
    #[error("override value rejected: {0}")]
    Rejected(#[from] serde_json::Error),
}

/// Owns the DNA tokens, the viewport-mode flag, and the page document.
#[derive(Clone, Debug, Default)]
pub struct SettingsStore {
    tokens: DesignTokens,
    viewport_mode: ViewportMode,
    page: Page,
}

impl SettingsStore {
    /// A store in auto viewport mode.
    pub fn new(tokens: DesignTokens, page: Page) -> Self {
        Self {
            tokens,
            viewport_mode: ViewportMode::Auto,
            page,
        }
    }

    /// The design tokens.
    pub fn tokens(&self) -> &DesignTokens {
        &self.tokens
    }

    /// The page document.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The viewport-mode flag.
    pub fn viewport_mode(&self) -> ViewportMode {
        self.viewport_mode
    }

    /// Set the viewport-mode flag.
    pub fn set_viewport_mode(&mut self, mode: ViewportMode) {
        self.viewport_mode = mode;
    }

    /// Find a block by id.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.page.block(id)
    }

    /// Write `value` at `dotted.path` inside the block's override record.
    ///
    /// Intermediate objects are created as needed; a path segment that runs
    /// through a non-object value is rejected, as is a final record that no
    /// longer deserializes into the block's override shape.
    pub fn set_local_override(
        &mut self,
        block_id: &str,
        path: &str,
        value: Value,
    ) -> Result<(), OverrideError> {
        if path.is_empty() {
            return Err(OverrideError::EmptyPath);
        }
        let idx = self
            .page
            .blocks
            .iter()
            .position(|b| b.id == block_id)
            .ok_or_else(|| OverrideError::UnknownBlock(block_id.to_string()))?;

        let mut record = serde_json::to_value(&self.page.blocks[idx])?;
        let mut cursor = &mut record;
        let mut walked = String::new();
        for segment in path.split('.') {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(segment);
            // A null sub-record ("inherit global") becomes an object the
            // moment something is written beneath it.
            if cursor.is_null() {
                *cursor = Value::Object(Map::new());
            }
            let obj = cursor
                .as_object_mut()
                .ok_or_else(|| OverrideError::NotAnObject {
                    path: walked.clone(),
                })?;
            cursor = obj
                .entry(segment.to_string())
                .or_insert(Value::Null);
        }
        *cursor = value;

        let updated: Block = serde_json::from_value(record)?;
        self.page.blocks[idx] = updated;
        tracing::debug!(block = block_id, path, "local override updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FooterOverrides, HeroOverrides, Section};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn store() -> SettingsStore {
        SettingsStore::new(
            DesignTokens::default(),
            Page {
                blocks: vec![
                    Block {
                        id: "hero-01".into(),
                        section: Section::Hero(HeroOverrides::default()),
                    },
                    Block {
                        id: "footer-01".into(),
                        section: Section::Footer(FooterOverrides::default()),
                    },
                ],
            },
        )
    }

    #[test]
    fn writes_through_a_dotted_path() {
        let mut store = store();
        store
            .set_local_override("hero-01", "style.title_color", json!("#18181B"))
            .unwrap();

        let Section::Hero(ovr) = &store.block("hero-01").unwrap().section else {
            panic!("expected hero");
        };
        assert_eq!(ovr.style.as_ref().unwrap().title_color.as_deref(), Some("#18181B"));
        // Sibling fields of the materialized sub-record stay unset.
        assert!(ovr.style.as_ref().unwrap().bg_fill.is_none());
        assert!(ovr.data.is_none());
    }

    #[test]
    fn unknown_block_is_an_error() {
        let mut store = store();
        let err = store
            .set_local_override("nope", "style.title_color", json!("#fff"))
            .unwrap_err();
        assert!(matches!(err, OverrideError::UnknownBlock(_)));
    }

    #[test]
    fn path_through_scalar_is_rejected() {
        let mut store = store();
        store
            .set_local_override("hero-01", "style.title_color", json!("#fff"))
            .unwrap();
        let err = store
            .set_local_override("hero-01", "style.title_color.deeper", json!(1))
            .unwrap_err();
        assert!(matches!(err, OverrideError::NotAnObject { .. }));
    }

    #[test]
    fn shape_mismatch_leaves_block_untouched() {
        let mut store = store();
        let err = store
            .set_local_override("hero-01", "btn_use_global", json!({"bad": "shape"}))
            .unwrap_err();
        assert!(matches!(err, OverrideError::Rejected(_)));

        let Section::Hero(ovr) = &store.block("hero-01").unwrap().section else {
            panic!("expected hero");
        };
        assert!(ovr.btn_use_global.is_none());
    }

    #[test]
    fn empty_path_is_rejected() {
        let mut store = store();
        let err = store
            .set_local_override("hero-01", "", json!(1))
            .unwrap_err();
        assert!(matches!(err, OverrideError::EmptyPath));
    }
}
