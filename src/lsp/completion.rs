//! Completion support for WinAPI function names.
//!
//! Completion is offered while the user types an identifier that starts with
//! `_`, outside strings and comments; every WinAPI function whose name starts
//! with the part of the identifier before the cursor (ignoring case) is
//! returned. The edit replaces the whole identifier under the cursor so the
//! canonical casing wins and no stale suffix is left behind.

use tower_lsp::lsp_types::{CompletionItem, CompletionResponse, CompletionTextEdit, Position, TextEdit};

use super::scan::Scan;
use crate::document::DocumentState;
use crate::signatures::completions;

pub fn completion_at_position(
    state: &DocumentState,
    position: Position,
) -> Option<CompletionResponse> {
    let line_index = &state.line_index;
    let offset = line_index.position_to_offset(position)?;
    let span = line_index.identifier_at(offset)?;
    let prefix = &state.source()[span.start..offset];
    if !prefix.starts_with('_') || !Scan::new(state.source(), offset).in_code() {
        return None;
    }

    let range = line_index.span_to_range(&span);
    let items: Vec<CompletionItem> = completions()
        .iter()
        .filter(|item| starts_with_ignore_case(&item.label, prefix))
        .map(|item| CompletionItem {
            text_edit: Some(CompletionTextEdit::Edit(TextEdit::new(
                range,
                item.label.clone(),
            ))),
            ..item.clone()
        })
        .collect();

    tracing::trace!(prefix, count = items.len(), "completion");
    if items.is_empty() {
        None
    } else {
        Some(CompletionResponse::Array(items))
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signatures::INCLUDE;

    fn complete(source: &str) -> Vec<CompletionItem> {
        let state = DocumentState::new(source.to_string(), 0);
        let position = state.line_index.offset_to_position(source.len());
        match completion_at_position(&state, position) {
            Some(CompletionResponse::Array(items)) => items,
            Some(other) => panic!("unexpected response: {other:?}"),
            None => Vec::new(),
        }
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn completes_by_prefix() {
        let items = complete("$h = _WinAPI_GetWindowT");
        assert_eq!(
            labels(&items),
            vec![
                "_WinAPI_GetWindowText",
                "_WinAPI_GetWindowTextLength",
                "_WinAPI_GetWindowTheme",
                "_WinAPI_GetWindowThreadProcessId",
            ]
        );
        assert_eq!(items[0].detail.as_deref(), Some(INCLUDE));
    }

    #[test]
    fn prefix_ignores_case() {
        let items = complete("_winapi_closeh");
        assert_eq!(labels(&items), vec!["_WinAPI_CloseHandle"]);
        let Some(CompletionTextEdit::Edit(edit)) = &items[0].text_edit else {
            panic!("expected a text edit");
        };
        assert_eq!(edit.new_text, "_WinAPI_CloseHandle");
        assert_eq!(edit.range.start, Position::new(0, 0));
        assert_eq!(edit.range.end, Position::new(0, 14));
    }

    #[test]
    fn edit_replaces_whole_identifier() {
        let source = "_WinAPI_GetFocXYZ()";
        let state = DocumentState::new(source.to_string(), 0);
        let position = Position::new(0, "_WinAPI_GetFoc".len() as u32);
        let Some(CompletionResponse::Array(items)) = completion_at_position(&state, position) else {
            panic!("expected completions");
        };
        assert_eq!(labels(&items), vec!["_WinAPI_GetFocus"]);
        let Some(CompletionTextEdit::Edit(edit)) = &items[0].text_edit else {
            panic!("expected a text edit");
        };
        assert_eq!(edit.range.start, Position::new(0, 0));
        assert_eq!(edit.range.end, Position::new(0, "_WinAPI_GetFocXYZ".len() as u32));
    }

    #[test]
    fn nothing_in_strings_or_comments() {
        assert!(complete("$s = \"_WinAPI_Get").is_empty());
        assert!(complete("$s = '_WinAPI_Get").is_empty());
        assert!(complete("; _WinAPI_Get").is_empty());
        assert!(complete("#cs\n_WinAPI_Get").is_empty());
        assert!(complete("#comments-start\nfoo\n_WinAPI_Get").is_empty());
        assert!(!complete("#cs\n#ce\n_WinAPI_Get").is_empty());
        assert!(!complete("$s = \"x\" & _WinAPI_GetFo").is_empty());
    }

    #[test]
    fn underscore_offers_everything() {
        let items = complete("_");
        assert_eq!(items.len(), completions().len());
    }

    #[test]
    fn nothing_outside_function_names() {
        assert!(complete("").is_empty());
        assert!(complete("Local $_WinAPI").is_empty());
        assert!(complete("MsgB").is_empty());
        assert!(complete("_NotWinAPI").is_empty());
    }
}
