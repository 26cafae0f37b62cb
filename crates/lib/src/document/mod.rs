//! Owned Automerge snapshots of USDJ scene documents.
//!
//! A [`Document`] is the root of every projection: it owns the Automerge
//! store, and all typed nodes borrow from it. This crate never mutates the
//! snapshot; merging and editing belong to Automerge itself, upstream of
//! this library.

use std::{fmt, fs, path::Path};

use automerge::{Automerge, ObjId, ROOT};

pub mod errors;

pub use errors::DocumentError;

/// An Automerge document holding one USDJ scene.
pub struct Document {
    doc: Automerge,
}

impl Document {
    /// Load a document from an Automerge binary file.
    ///
    /// # Errors
    /// Fails with [`DocumentError::ReadFailed`] when the file cannot be read
    /// and [`DocumentError::LoadFailed`] when the bytes are not a valid
    /// Automerge document.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DocumentError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_bytes(&bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Loaded scene document");
        Ok(document)
    }

    /// Decode a document from Automerge binary bytes.
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        let doc = Automerge::load(bytes).map_err(|source| DocumentError::LoadFailed { source })?;
        Ok(Document { doc })
    }

    /// Write the document back out as an Automerge binary file.
    pub fn save(&mut self, path: impl AsRef<Path>) -> crate::Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes();
        fs::write(path, &bytes).map_err(|source| DocumentError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Saved scene document");
        Ok(())
    }

    /// Encode the document as Automerge binary bytes.
    pub fn to_bytes(&mut self) -> Vec<u8> {
        self.doc.save()
    }

    /// The reference to the document's root object.
    pub fn root(&self) -> ObjId {
        ROOT
    }

    /// Borrow the underlying Automerge store, e.g. for node construction.
    pub fn automerge(&self) -> &Automerge {
        &self.doc
    }
}

impl From<Automerge> for Document {
    fn from(doc: Automerge) -> Self {
        Document { doc }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}
