//! AutoIt WinAPI signature table and the editor views derived from it.
//!
//! The table is declared once in [`winapi`] and built lazily into a
//! [`SignatureTable`]. Two derived views are computed from it on first use and
//! held for the lifetime of the process:
//! - [`hovers`]: function name -> hover contents
//! - [`completions`]: one completion item per function

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, Hover};

mod derive;
mod label;
mod signature;
mod winapi;

pub use derive::{signature_to_completion, signature_to_hover};
pub use label::{parse_label, LabelError, LabelParam, ParsedLabel};
pub use signature::{Param, Signature, SignatureTable};

/// Include directive every WinAPI function requires.
pub const INCLUDE: &str = "(Requires: `#include <WinAPI.au3>`)";

/// Completion kind attached to every WinAPI completion item.
pub const COMPLETION_KIND: CompletionItemKind = CompletionItemKind::FUNCTION;

static SIGNATURES: LazyLock<SignatureTable> =
    LazyLock::new(|| SignatureTable::new(winapi::WINAPI.iter().copied()));

static HOVERS: LazyLock<BTreeMap<&'static str, Hover>> =
    LazyLock::new(|| signature_to_hover(&SIGNATURES));

static COMPLETIONS: LazyLock<Vec<CompletionItem>> =
    LazyLock::new(|| signature_to_completion(&SIGNATURES, COMPLETION_KIND, INCLUDE));

/// The WinAPI signature table.
pub fn signatures() -> &'static SignatureTable {
    &SIGNATURES
}

/// Hover contents for every WinAPI function, keyed by canonical name.
pub fn hovers() -> &'static BTreeMap<&'static str, Hover> {
    &HOVERS
}

/// Completion items for every WinAPI function, in declaration order.
pub fn completions() -> &'static [CompletionItem] {
    &COMPLETIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicates() {
        assert!(
            signatures().duplicates().is_empty(),
            "duplicate signatures: {:?}",
            signatures().duplicates()
        );
        assert_eq!(signatures().len(), winapi::WINAPI.len());
    }

    #[test]
    fn every_label_contains_its_name() {
        for (name, sig) in signatures().iter() {
            assert!(sig.label.contains(name), "{name}: {}", sig.label);
            assert!(name.starts_with("_WinAPI_"), "{name}");
        }
    }

    #[test]
    fn every_label_parses_and_matches_params() {
        for (name, sig) in signatures().iter() {
            let parsed = parse_label(sig.label)
                .unwrap_or_else(|e| panic!("{name}: cannot parse label: {e}"));
            assert_eq!(parsed.name, name, "{name}: label names another function");
            assert_eq!(
                parsed.params.len(),
                sig.params.len(),
                "{name}: label has {} params, table documents {}",
                parsed.params.len(),
                sig.params.len()
            );
            for (from_label, documented) in parsed.params.iter().zip(sig.params) {
                assert_eq!(from_label.name, documented.label, "{name}: parameter order");
            }
        }
    }

    #[test]
    fn optional_params_are_marked() {
        for (name, sig) in signatures().iter() {
            let parsed = parse_label(sig.label).unwrap();
            for (from_label, documented) in parsed.params.iter().zip(sig.params) {
                let marked = documented.documentation.starts_with("**[optional]**");
                assert_eq!(
                    from_label.optional, marked,
                    "{name}: {} optional marker mismatch",
                    documented.label
                );
            }
        }
    }

    #[test]
    fn every_entry_is_documented() {
        for (name, sig) in signatures().iter() {
            assert!(!sig.documentation.is_empty(), "{name}");
            for param in sig.params {
                assert!(!param.documentation.is_empty(), "{name}: {}", param.label);
            }
        }
    }

    #[test]
    fn derived_views_are_one_to_one() {
        assert_eq!(hovers().len(), signatures().len());
        assert_eq!(completions().len(), signatures().len());
        for (name, _) in signatures().iter() {
            assert!(hovers().contains_key(name), "{name}");
        }
    }

    #[test]
    fn derivation_is_repeatable() {
        assert_eq!(&signature_to_hover(signatures()), hovers());
        assert_eq!(
            signature_to_completion(signatures(), COMPLETION_KIND, INCLUDE),
            completions()
        );
    }

    #[test]
    fn completions_carry_kind_and_include() {
        for item in completions() {
            assert_eq!(item.kind, Some(CompletionItemKind::FUNCTION));
            assert_eq!(item.detail.as_deref(), Some(INCLUDE));
        }
    }
}
