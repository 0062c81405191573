//! Editor views derived from a signature table.

use std::collections::BTreeMap;

use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, Hover, HoverContents, MarkedString,
};

use super::signature::{Signature, SignatureTable};

/// Fence a label as an AutoIt code block.
pub(crate) fn code_block(label: &str) -> String {
    format!("```autoit\n{}\n```", label)
}

/// Hover contents for a single signature: the description followed by the label.
pub(crate) fn hover_for(sig: &Signature) -> Hover {
    Hover {
        contents: HoverContents::Array(vec![
            MarkedString::String(sig.documentation.to_string()),
            MarkedString::String(code_block(sig.label)),
        ]),
        range: None,
    }
}

/// Build hover contents for every signature, keyed by function name.
pub fn signature_to_hover(signatures: &SignatureTable) -> BTreeMap<&'static str, Hover> {
    signatures
        .iter()
        .map(|(name, sig)| (name, hover_for(sig)))
        .collect()
}

/// Build one completion item per signature, in table order.
///
/// `kind` tags every item and `include` becomes its detail line.
pub fn signature_to_completion(
    signatures: &SignatureTable,
    kind: CompletionItemKind,
    include: &str,
) -> Vec<CompletionItem> {
    signatures
        .iter()
        .map(|(name, sig)| CompletionItem {
            label: name.to_string(),
            kind: Some(kind),
            detail: Some(include.to_string()),
            documentation: Some(Documentation::String(sig.documentation.to_string())),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signatures::Param;

    fn table() -> SignatureTable {
        SignatureTable::new([
            (
                "_WinAPI_GetFocus",
                Signature {
                    documentation: "Retrieves the handle of the window that has the keyboard focus",
                    label: "_WinAPI_GetFocus ( )",
                    params: &[],
                },
            ),
            (
                "_WinAPI_CloseHandle",
                Signature {
                    documentation: "Closes an open object handle",
                    label: "_WinAPI_CloseHandle ( $hObject )",
                    params: &[Param {
                        label: "$hObject",
                        documentation: "Handle of object to close",
                    }],
                },
            ),
        ])
    }

    #[test]
    fn hover_has_description_then_label() {
        let hovers = signature_to_hover(&table());
        let hover = &hovers["_WinAPI_CloseHandle"];
        assert_eq!(
            hover.contents,
            HoverContents::Array(vec![
                MarkedString::String("Closes an open object handle".to_string()),
                MarkedString::String(
                    "```autoit\n_WinAPI_CloseHandle ( $hObject )\n```".to_string()
                ),
            ])
        );
        assert!(hover.range.is_none());
    }

    #[test]
    fn completion_items_follow_table_order() {
        let items = signature_to_completion(&table(), CompletionItemKind::FUNCTION, "(Requires: x)");
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["_WinAPI_GetFocus", "_WinAPI_CloseHandle"]);
        assert_eq!(items[1].detail.as_deref(), Some("(Requires: x)"));
        assert_eq!(
            items[1].documentation,
            Some(Documentation::String("Closes an open object handle".to_string()))
        );
    }

    #[test]
    fn empty_table_derives_nothing() {
        let empty = SignatureTable::new(std::iter::empty());
        assert!(signature_to_hover(&empty).is_empty());
        assert!(signature_to_completion(&empty, CompletionItemKind::FUNCTION, "").is_empty());
    }
}
