//! Photo Metadata Lookup
//!
//! Auxiliary labels for carousel items, keyed by item id. Unknown ids fall
//! back to the first entry so every frame always has a caption.

/// Labels shown alongside a photo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoMeta {
    /// Id of the item this describes
    pub id: String,
    /// Short caption
    pub caption: String,
    /// Gallery frame shape (`TALL`, `WIDE`, `STANDARD`)
    pub tag: String,
}

impl PhotoMeta {
    /// Create a metadata entry
    pub fn new(id: impl Into<String>, caption: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            caption: caption.into(),
            tag: tag.into(),
        }
    }
}

/// Ordered metadata table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataLookup {
    entries: Vec<PhotoMeta>,
}

impl MetadataLookup {
    /// Build a lookup from entries (first entry is the fallback)
    pub fn new(entries: Vec<PhotoMeta>) -> Self {
        Self { entries }
    }

    /// Metadata for `id`, or the first entry when `id` is unknown
    ///
    /// `None` only when the table is empty.
    pub fn lookup(&self, id: &str) -> Option<&PhotoMeta> {
        self.find(id).or_else(|| self.entries.first())
    }

    /// Exact match only
    pub fn find(&self, id: &str) -> Option<&PhotoMeta> {
        self.entries.iter().find(|meta| meta.id == id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
