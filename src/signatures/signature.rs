//! Signature records and the lookup table built from them.
//!
//! These are documentation-only definitions: the call label as it is shown to
//! the user, a one-line description, and one entry per parameter. AutoIt
//! identifiers are case-insensitive, so lookups fold case.

use std::collections::HashMap;

/// Documentation for one parameter of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Parameter name as written in the label (e.g. "$hWnd")
    pub label: &'static str,
    /// Description, prefixed with `**[optional]**` for optional parameters
    pub documentation: &'static str,
}

/// Documentation for one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// One-line description of what the function does
    pub documentation: &'static str,
    /// Full call signature (e.g. "_WinAPI_Beep ( [$iFreq = 500 [, $iDuration = 1000]] )")
    pub label: &'static str,
    /// Parameters in the order they appear in `label`
    pub params: &'static [Param],
}

/// Ordered signature table with a case-insensitive name index.
#[derive(Debug, Default)]
pub struct SignatureTable {
    entries: Vec<(&'static str, Signature)>,
    index: HashMap<String, usize>,
    duplicates: Vec<&'static str>,
}

impl SignatureTable {
    /// Build a table from `(name, signature)` pairs.
    ///
    /// The first declaration of a name wins; later ones are recorded in
    /// [`duplicates`](Self::duplicates) and left out of the table.
    pub fn new(entries: impl IntoIterator<Item = (&'static str, Signature)>) -> Self {
        let mut table = Self::default();
        for (name, sig) in entries {
            let key = name.to_ascii_lowercase();
            if table.index.contains_key(&key) {
                tracing::warn!(name, "duplicate signature ignored");
                table.duplicates.push(name);
                continue;
            }
            table.index.insert(key, table.entries.len());
            table.entries.push((name, sig));
        }
        table
    }

    /// Look up a function by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.entry(name).map(|(_, sig)| sig)
    }

    /// Look up a function by name, ignoring case, returning its declared name.
    pub fn entry(&self, name: &str) -> Option<(&'static str, &Signature)> {
        let idx = *self.index.get(&name.to_ascii_lowercase())?;
        let (name, sig) = &self.entries[idx];
        Some((*name, sig))
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Signature)> + '_ {
        self.entries.iter().map(|(name, sig)| (*name, sig))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names that were declared more than once.
    pub fn duplicates(&self) -> &[&'static str] {
        &self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEEP: Signature = Signature {
        documentation: "Generates simple tones on the speaker",
        label: "_WinAPI_Beep ( [$iFreq = 500 [, $iDuration = 1000]] )",
        params: &[
            Param {
                label: "$iFreq",
                documentation: "**[optional]** The frequency of the sound",
            },
            Param {
                label: "$iDuration",
                documentation: "**[optional]** The duration of the sound",
            },
        ],
    };

    const CLOSE: Signature = Signature {
        documentation: "Closes an open object handle",
        label: "_WinAPI_CloseHandle ( $hObject )",
        params: &[Param {
            label: "$hObject",
            documentation: "Handle of object to close",
        }],
    };

    #[test]
    fn lookup_ignores_case() {
        let table = SignatureTable::new([("_WinAPI_Beep", BEEP), ("_WinAPI_CloseHandle", CLOSE)]);
        assert_eq!(table.get("_winapi_beep"), Some(&BEEP));
        assert_eq!(table.get("_WINAPI_CLOSEHANDLE"), Some(&CLOSE));
        assert_eq!(table.entry("_winapi_closehandle").unwrap().0, "_WinAPI_CloseHandle");
    }

    #[test]
    fn unknown_names_miss() {
        let table = SignatureTable::new([("_WinAPI_Beep", BEEP)]);
        assert!(table.get("_WinAPI_Boop").is_none());
        assert!(table.get("").is_none());
    }

    #[test]
    fn keeps_declaration_order() {
        let table = SignatureTable::new([("_WinAPI_CloseHandle", CLOSE), ("_WinAPI_Beep", BEEP)]);
        let names: Vec<_> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["_WinAPI_CloseHandle", "_WinAPI_Beep"]);
    }

    #[test]
    fn first_declaration_wins() {
        let table = SignatureTable::new([
            ("_WinAPI_Beep", BEEP),
            ("_WINAPI_BEEP", CLOSE),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("_WinAPI_Beep"), Some(&BEEP));
        assert_eq!(table.duplicates(), &["_WINAPI_BEEP"]);
    }

    #[test]
    fn empty_table() {
        let table = SignatureTable::new(std::iter::empty());
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
