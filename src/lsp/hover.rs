//! Hover information for WinAPI calls.

use tower_lsp::lsp_types::{Hover, HoverContents, MarkedString, Position};

use crate::document::DocumentState;
use crate::settings::HoverSettings;
use crate::signatures::{hovers, signatures, INCLUDE};

/// Hover for the WinAPI function under the cursor.
pub fn hover_at_position(
    state: &DocumentState,
    position: Position,
    settings: &HoverSettings,
) -> Option<Hover> {
    let line_index = &state.line_index;
    let offset = line_index.position_to_offset(position)?;
    let span = line_index.identifier_at(offset)?;
    let word = &state.source()[span.clone()];

    let (name, _) = signatures().entry(word)?;
    let mut hover = hovers().get(name)?.clone();
    if settings.show_requires {
        if let HoverContents::Array(parts) = &mut hover.contents {
            parts.push(MarkedString::String(INCLUDE.to_string()));
        }
    }
    hover.range = Some(line_index.span_to_range(&span));
    Some(hover)
}

/// Render the hover for a function as plain markdown, ignoring case.
pub fn describe(name: &str) -> Option<String> {
    let (name, _) = signatures().entry(name)?;
    let HoverContents::Array(parts) = &hovers().get(name)?.contents else {
        return None;
    };

    let mut doc = parts
        .iter()
        .map(|part| match part {
            MarkedString::String(s) => s.clone(),
            MarkedString::LanguageString(ls) => format!("```{}\n{}\n```", ls.language, ls.value),
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    doc.push_str("\n\n");
    doc.push_str(INCLUDE);
    Some(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hover_at(source: &str, needle: &str, settings: &HoverSettings) -> Option<Hover> {
        let state = DocumentState::new(source.to_string(), 0);
        let offset = source.find(needle).expect("needle in source");
        let position = state.line_index.offset_to_position(offset);
        hover_at_position(&state, position, settings)
    }

    fn parts(hover: &Hover) -> Vec<String> {
        match &hover.contents {
            HoverContents::Array(parts) => parts
                .iter()
                .map(|p| match p {
                    MarkedString::String(s) => s.clone(),
                    MarkedString::LanguageString(ls) => ls.value.clone(),
                })
                .collect(),
            other => panic!("unexpected hover contents: {other:?}"),
        }
    }

    #[test]
    fn hover_on_known_function() {
        let source = "Local $hWnd = _WinAPI_GetForegroundWindow()";
        let hover = hover_at(source, "Foreground", &HoverSettings::default()).unwrap();
        let parts = parts(&hover);
        assert_eq!(parts[0], "Returns the handle of the foreground window");
        assert_eq!(parts[1], "```autoit\n_WinAPI_GetForegroundWindow ( )\n```");
        assert_eq!(parts.len(), 2);

        let range = hover.range.unwrap();
        assert_eq!(range.start, Position::new(0, 14));
        assert_eq!(range.end, Position::new(0, 41));
    }

    #[test]
    fn hover_ignores_case() {
        let hover = hover_at("_winapi_closehandle($h)", "close", &HoverSettings::default());
        let parts = parts(&hover.unwrap());
        assert!(parts[1].contains("_WinAPI_CloseHandle ( $hObject )"));
    }

    #[test]
    fn hover_can_show_requires() {
        let settings = HoverSettings {
            show_requires: true,
            ..Default::default()
        };
        let hover = hover_at("_WinAPI_Beep()", "Beep", &settings).unwrap();
        assert_eq!(parts(&hover).last().unwrap(), INCLUDE);
    }

    #[test]
    fn no_hover_for_unknown_or_variables() {
        let settings = HoverSettings::default();
        assert!(hover_at("_WinAPI_NotAThing()", "NotA", &settings).is_none());
        assert!(hover_at("$_WinAPI_Beep = 1", "Beep", &settings).is_none());
        assert!(hover_at("MsgBox(0, '', '')", "Box", &settings).is_none());
    }

    #[test]
    fn describe_renders_markdown() {
        let doc = describe("_winapi_getfocus").unwrap();
        assert!(doc.starts_with("Retrieves the handle of the window that has the keyboard focus"));
        assert!(doc.contains("```autoit\n_WinAPI_GetFocus ( )\n```"));
        assert!(doc.ends_with(INCLUDE));
        assert!(describe("nope").is_none());
    }
}
