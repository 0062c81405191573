//! Open-document tracking.

use std::sync::Arc;

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

use super::text::LineIndex;

/// State for a single open AutoIt document.
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub line_index: LineIndex,
    /// Document version from the client.
    pub version: i32,
}

impl DocumentState {
    pub fn new(source: String, version: i32) -> Self {
        Self {
            line_index: LineIndex::new(source),
            version,
        }
    }

    pub fn source(&self) -> &str {
        self.line_index.source()
    }
}

/// Thread-safe storage for open documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Arc<DocumentState>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open or replace a document with the given source text.
    pub fn open(&self, uri: Url, source: String, version: i32) -> Arc<DocumentState> {
        let state = Arc::new(DocumentState::new(source, version));
        self.documents.insert(uri, Arc::clone(&state));
        state
    }

    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    pub fn get(&self, uri: &Url) -> Option<Arc<DocumentState>> {
        self.documents.get(uri).map(|r| Arc::clone(&r))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> Url {
        Url::parse("file:///tmp/script.au3").unwrap()
    }

    #[test]
    fn open_get_close() {
        let store = DocumentStore::new();
        store.open(uri(), "_WinAPI_GetFocus()".to_string(), 1);
        let doc = store.get(&uri()).unwrap();
        assert_eq!(doc.version, 1);
        assert_eq!(doc.source(), "_WinAPI_GetFocus()");

        store.close(&uri());
        assert!(store.get(&uri()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn reopen_replaces_text() {
        let store = DocumentStore::new();
        store.open(uri(), "a".to_string(), 1);
        store.open(uri(), "b".to_string(), 2);
        assert_eq!(store.len(), 1);
        let doc = store.get(&uri()).unwrap();
        assert_eq!(doc.source(), "b");
        assert_eq!(doc.version, 2);
    }
}
