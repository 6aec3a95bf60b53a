//! URL fragment navigation.
//!
//! The fragment is the shareable pointer to the file that should be playing.
//! It holds the percent-encoded [`RelativePath`] (`#show%2Fe01.mkv`); older
//! bookmarks may carry a `path=` prefix, which is accepted on read.
//!
//! Browser back/forward changes the fragment, and the application replays
//! the same select-and-expand sequence as a click, without refetching the
//! tree.

use crate::config::LEGACY_FRAGMENT_PREFIX;
use crate::models::RelativePath;

/// Encode a path for the URL fragment (without the leading `#`).
pub fn encode_fragment(path: &RelativePath) -> String {
    urlencoding::encode(path.as_str()).into_owned()
}

/// Decode a raw fragment (with or without `#`) into a path.
///
/// Returns `None` for an empty fragment. A fragment that fails to decode is
/// used verbatim rather than rejected.
pub fn decode_fragment(raw: &str) -> Option<RelativePath> {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    let raw = raw.strip_prefix(LEGACY_FRAGMENT_PREFIX).unwrap_or(raw);
    if raw.is_empty() {
        return None;
    }
    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    };
    (!decoded.is_empty()).then(|| RelativePath::new(decoded))
}

/// Access to the page's URL fragment.
pub trait FragmentStore {
    /// Current fragment without the leading `#` (empty when absent).
    fn read(&self) -> String;
    /// Replace the fragment, creating a history entry.
    fn write(&self, encoded: &str);
    /// Remove the fragment from the URL entirely.
    fn clear(&self);
}

/// Keeps the URL fragment and the selection consistent.
#[derive(Clone, Debug, Default)]
pub struct NavigationBridge<F> {
    store: F,
}

impl<F: FragmentStore> NavigationBridge<F> {
    pub fn new(store: F) -> Self {
        Self { store }
    }

    /// Path the fragment currently points at.
    pub fn current(&self) -> Option<RelativePath> {
        decode_fragment(&self.store.read())
    }

    /// Point the fragment at `path`, or drop it when `path` is `None`/empty.
    pub fn publish(&self, path: Option<&RelativePath>) {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => {
                let encoded = encode_fragment(path);
                if self.store.read() != encoded {
                    self.store.write(&encoded);
                }
            }
            None => self.store.clear(),
        }
    }

    pub fn store(&self) -> &F {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemoryFragment {
        value: RefCell<String>,
        writes: RefCell<usize>,
    }

    impl FragmentStore for MemoryFragment {
        fn read(&self) -> String {
            self.value.borrow().clone()
        }
        fn write(&self, encoded: &str) {
            *self.value.borrow_mut() = encoded.to_string();
            *self.writes.borrow_mut() += 1;
        }
        fn clear(&self) {
            self.value.borrow_mut().clear();
        }
    }

    #[test]
    fn test_round_trip() {
        for raw in [
            "a.mp4",
            "b/c.mp4",
            "Shows/Season 01/Épisode #3 (final).mkv",
            "100% done?.webm",
            "映画/スペシャル.mp4",
        ] {
            let path = RelativePath::new(raw);
            assert_eq!(decode_fragment(&encode_fragment(&path)), Some(path));
        }
    }

    #[test]
    fn test_encode_escapes_separators() {
        assert_eq!(encode_fragment(&"b/c d.mp4".into()), "b%2Fc%20d.mp4");
    }

    #[test]
    fn test_decode_variants() {
        assert_eq!(decode_fragment(""), None);
        assert_eq!(decode_fragment("#"), None);
        assert_eq!(decode_fragment("#path="), None);
        assert_eq!(decode_fragment("#b%2Fc.mp4"), Some("b/c.mp4".into()));
        assert_eq!(decode_fragment("path=b%2Fc.mp4"), Some("b/c.mp4".into()));
        // Already-decoded fragments pass through
        assert_eq!(decode_fragment("b/c.mp4"), Some("b/c.mp4".into()));
    }

    #[test]
    fn test_decode_falls_back_to_raw() {
        // %FF is not valid UTF-8 once decoded
        assert_eq!(decode_fragment("bad%FFname"), Some("bad%FFname".into()));
    }

    #[test]
    fn test_publish_and_clear() {
        let bridge = NavigationBridge::new(MemoryFragment::default());
        let path = RelativePath::new("b/c.mp4");

        bridge.publish(Some(&path));
        assert_eq!(bridge.store().read(), "b%2Fc.mp4");
        assert_eq!(bridge.current(), Some(path.clone()));

        bridge.publish(Some(&path));
        assert_eq!(*bridge.store().writes.borrow(), 1);

        bridge.publish(None);
        assert_eq!(bridge.store().read(), "");
        assert_eq!(bridge.current(), None);
    }
}
