//! Signature help for WinAPI calls.
//!
//! The enclosing call is found by scanning the source up to the cursor (see
//! [`Scan`]) and taking the nearest open parenthesis. The name right before it
//! must be a plain function name.

use std::sync::LazyLock;

use regex::Regex;
use tower_lsp::lsp_types::{
    Documentation, MarkupContent, MarkupKind, ParameterInformation, ParameterLabel, Position,
    SignatureHelp, SignatureInformation,
};

use super::scan::Scan;
use crate::document::DocumentState;
use crate::signatures::{parse_label, signatures, Signature};

/// Function name directly before an opening parenthesis.
static CALLEE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([$@]?)([A-Za-z_][A-Za-z0-9_]*)\s*$").expect("valid regex"));

/// Innermost call around the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CallContext {
    pub name: String,
    /// Number of top-level commas between the `(` and the cursor.
    pub commas: usize,
}

/// Find the call whose argument list contains `offset`.
///
/// Brackets opened inside the call (`$a[`) do not hide it; the nearest
/// enclosing `(` decides the call and its comma count.
pub(crate) fn call_context(source: &str, offset: usize) -> Option<CallContext> {
    let scan = Scan::new(source, offset);
    if !scan.in_code() {
        return None;
    }
    let frame = scan.innermost_paren()?;

    let line_start = source[..frame.open].rfind('\n').map_or(0, |i| i + 1);
    let caps = CALLEE.captures(&source[line_start..frame.open])?;
    if !caps[1].is_empty() {
        // `$var(` and `@macro(` are not function calls.
        return None;
    }

    Some(CallContext {
        name: caps[2].to_string(),
        commas: frame.commas,
    })
}

/// Signature help for the WinAPI call around the cursor.
pub fn signature_help_at_position(
    state: &DocumentState,
    position: Position,
) -> Option<SignatureHelp> {
    let offset = state.line_index.position_to_offset(position)?;
    let context = call_context(state.source(), offset)?;
    let sig = signatures().get(&context.name)?;

    let active = match sig.params.len() {
        0 => 0,
        n => context.commas.min(n - 1) as u32,
    };

    Some(SignatureHelp {
        signatures: vec![signature_information(sig, active)],
        active_signature: Some(0),
        active_parameter: Some(active),
    })
}

fn signature_information(sig: &Signature, active: u32) -> SignatureInformation {
    // Offsets into the label let the client highlight `ByRef $x` or `$x = 0`
    // exactly as written; fall back to plain names if the label is irregular.
    let spans = parse_label(sig.label)
        .ok()
        .filter(|parsed| parsed.params.len() == sig.params.len())
        .map(|parsed| {
            parsed
                .params
                .into_iter()
                .map(|p| {
                    let start = utf16_len(&sig.label[..p.span.start]);
                    let end = start + utf16_len(&sig.label[p.span]);
                    [start, end]
                })
                .collect::<Vec<_>>()
        });

    let parameters = sig
        .params
        .iter()
        .enumerate()
        .map(|(i, param)| ParameterInformation {
            label: match &spans {
                Some(spans) => ParameterLabel::LabelOffsets(spans[i]),
                None => ParameterLabel::Simple(param.label.to_string()),
            },
            documentation: Some(Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: param.documentation.to_string(),
            })),
        })
        .collect();

    SignatureInformation {
        label: sig.label.to_string(),
        documentation: Some(Documentation::String(sig.documentation.to_string())),
        parameters: Some(parameters),
        active_parameter: Some(active),
    }
}

fn utf16_len(s: &str) -> u32 {
    s.chars().map(char::len_utf16).sum::<usize>() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(source: &str) -> Option<CallContext> {
        call_context(source, source.len())
    }

    fn help(source: &str) -> Option<SignatureHelp> {
        let state = DocumentState::new(source.to_string(), 0);
        let position = state.line_index.offset_to_position(source.len());
        signature_help_at_position(&state, position)
    }

    #[test]
    fn finds_call_and_counts_commas() {
        assert_eq!(
            ctx("_WinAPI_MoveWindow($h, 10, "),
            Some(CallContext {
                name: "_WinAPI_MoveWindow".to_string(),
                commas: 2
            })
        );
        assert_eq!(ctx("_WinAPI_GetFocus(").unwrap().commas, 0);
        assert_eq!(ctx("$x = _WinAPI_GetFocus (").unwrap().name, "_WinAPI_GetFocus");
    }

    #[test]
    fn nested_calls_use_innermost() {
        let c = ctx("_WinAPI_SetFocus(_WinAPI_GetDlgItem($hDlg, ").unwrap();
        assert_eq!(c.name, "_WinAPI_GetDlgItem");
        assert_eq!(c.commas, 1);

        let c = ctx("_WinAPI_MoveWindow($h, Max(1, 2), ").unwrap();
        assert_eq!(c.name, "_WinAPI_MoveWindow");
        assert_eq!(c.commas, 2);
    }

    #[test]
    fn commas_in_strings_arrays_and_comments_do_not_count() {
        assert_eq!(ctx("_WinAPI_ShowMsg(\"a, b\"").unwrap().commas, 0);
        assert_eq!(ctx("_WinAPI_ShowMsg('a, ''b'', c'").unwrap().commas, 0);
        assert_eq!(ctx("_WinAPI_LineTo($hDC, $a[1][2], ").unwrap().commas, 2);
        assert!(ctx("_WinAPI_ShowMsg(\"open").is_none());
        assert!(ctx("; _WinAPI_ShowMsg(").is_none());
    }

    #[test]
    fn statements_end_at_line_breaks() {
        assert!(ctx("_WinAPI_ShowMsg(\n").is_none());
        let c = ctx("_WinAPI_MoveWindow($h, _\n    10, ").unwrap();
        assert_eq!(c.name, "_WinAPI_MoveWindow");
        assert_eq!(c.commas, 2);
        let c = ctx("_WinAPI_MoveWindow($h, _ ; comment\n").unwrap();
        assert_eq!(c.commas, 1);
    }

    #[test]
    fn open_subscript_keeps_enclosing_call() {
        let c = ctx("_WinAPI_LineTo($hDC, $a[").unwrap();
        assert_eq!(c.name, "_WinAPI_LineTo");
        assert_eq!(c.commas, 1);
        assert_eq!(ctx("_WinAPI_LineTo($hDC, $a[1, ").unwrap().commas, 1);
        assert_eq!(help("_WinAPI_LineTo($hDC, $a[").unwrap().active_parameter, Some(1));
    }

    #[test]
    fn no_help_inside_block_comments() {
        assert!(ctx("#cs\n_WinAPI_LineTo($hDC, ").is_none());
        assert!(ctx("#comments-start\n_WinAPI_LineTo($hDC, ").is_none());
        assert!(help("#cs\n_WinAPI_LineTo($hDC, ").is_none());
        assert_eq!(ctx("#cs\n#ce\n_WinAPI_LineTo($hDC, ").unwrap().commas, 1);
    }

    #[test]
    fn outside_calls() {
        assert!(ctx("").is_none());
        assert!(ctx("_WinAPI_GetFocus()").is_none());
        assert!(ctx("$a[").is_none());
        assert!(ctx("$fn(").is_none());
        assert!(ctx("(1 + ").is_none());
    }

    #[test]
    fn help_highlights_active_parameter() {
        let help = help("_WinAPI_ReadFile($hFile, $pBuf, 10, ").unwrap();
        assert_eq!(help.active_parameter, Some(3));
        let sig = &help.signatures[0];
        assert_eq!(
            sig.label,
            "_WinAPI_ReadFile ( $hFile, $pBuffer, $iToRead, ByRef $iRead [, $tOverlapped = 0] )"
        );
        let params = sig.parameters.as_ref().unwrap();
        assert_eq!(params.len(), 5);
        let ParameterLabel::LabelOffsets([start, end]) = params[3].label else {
            panic!("expected offsets");
        };
        assert_eq!(&sig.label[start as usize..end as usize], "ByRef $iRead");
    }

    #[test]
    fn active_parameter_is_clamped() {
        let help = help("_WinAPI_CloseHandle($a, $b, ").unwrap();
        assert_eq!(help.active_parameter, Some(0));
        let help = help_no_params();
        assert_eq!(help.active_parameter, Some(0));
        assert!(help.signatures[0].parameters.as_ref().unwrap().is_empty());
    }

    fn help_no_params() -> SignatureHelp {
        help("_WinAPI_GetFocus(").unwrap()
    }

    #[test]
    fn no_help_for_unknown_functions() {
        assert!(help("MsgBox(0, ").is_none());
    }
}
