use std::path::PathBuf;

use au3lsp::{
    completion_at_position, completions, describe, discover_settings, hover_at_position, hovers,
    signature_help_at_position, signatures, DocumentState, Settings,
};
use expect_test::expect;
use tower_lsp::lsp_types::{
    CompletionResponse, CompletionTextEdit, HoverContents, MarkedString, ParameterLabel, Position,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Split `source` at the `|` cursor marker.
fn document(source: &str) -> (DocumentState, Position) {
    let offset = source.find('|').expect("cursor marker");
    let text = source.replacen('|', "", 1);
    let state = DocumentState::new(text, 0);
    let position = state.line_index.offset_to_position(offset);
    (state, position)
}

fn format_hover(source: &str, settings: &Settings) -> String {
    let (state, position) = document(source);
    let Some(hover) = hover_at_position(&state, position, &settings.hover) else {
        return "no hover".to_string();
    };
    let HoverContents::Array(parts) = hover.contents else {
        return "unexpected contents".to_string();
    };

    let mut out = String::new();
    if let Some(range) = hover.range {
        out.push_str(&format!(
            "{}:{}-{}:{}\n",
            range.start.line, range.start.character, range.end.line, range.end.character
        ));
    }
    for part in parts {
        if let MarkedString::String(s) = part {
            out.push_str(&s);
            out.push('\n');
        }
    }
    out
}

fn format_completion(source: &str) -> String {
    let (state, position) = document(source);
    match completion_at_position(&state, position) {
        Some(CompletionResponse::Array(items)) => items
            .iter()
            .map(|i| format!("{}\n", i.label))
            .collect(),
        Some(_) => "unexpected response".to_string(),
        None => "no completions".to_string(),
    }
}

/// One line for the signature, then one per parameter with the active one starred.
fn format_signature_help(source: &str) -> String {
    let (state, position) = document(source);
    let Some(help) = signature_help_at_position(&state, position) else {
        return "no signature help".to_string();
    };
    let sig = &help.signatures[0];
    let active = help.active_parameter.unwrap_or(0) as usize;

    let mut out = format!("{}\n", sig.label);
    for (i, param) in sig.parameters.iter().flatten().enumerate() {
        let label = match &param.label {
            ParameterLabel::LabelOffsets([start, end]) => {
                sig.label[*start as usize..*end as usize].to_string()
            }
            ParameterLabel::Simple(s) => s.clone(),
        };
        let marker = if i == active { "*" } else { " " };
        out.push_str(&format!("{marker} {label}\n"));
    }
    out
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

// ---------------------------------------------------------------------------
// Tests: signature table
// ---------------------------------------------------------------------------

#[test]
fn derived_views_cover_every_signature() {
    assert!(signatures().len() >= 1000, "only {} signatures", signatures().len());
    for name in [
        "_WinAPI_ShellExecute",
        "_WinAPI_GetProcessName",
        "_WinAPI_RegisterClassEx",
        "_WinAPI_GetTickCount",
        "_WinAPI_AlphaBlend",
        "_WinAPI_DwmExtendFrameIntoClientArea",
    ] {
        assert!(hovers().contains_key(name), "{name} missing");
    }
    assert_eq!(hovers().len(), signatures().len());
    assert_eq!(completions().len(), signatures().len());
    assert!(signatures().duplicates().is_empty());
}

#[test]
fn describe_beep() {
    let actual = format!("{}\n", describe("_WinAPI_Beep").unwrap());
    let expected = expect![[r#"
        Generates simple tones on the speaker

        ```autoit
        _WinAPI_Beep ( [$iFreq = 500 [, $iDuration = 1000]] )
        ```

        (Requires: `#include <WinAPI.au3>`)
    "#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests: hover
// ---------------------------------------------------------------------------

#[test]
fn hover_on_second_line() {
    let source = "#include <WinAPI.au3>\nLocal $hDC = _WinAPI_GetD|C($hWnd)";
    let actual = format_hover(source, &Settings::default());
    let expected = expect![[r#"
        1:13-1:26
        Retrieves a handle of a display device context for the client area a window
        ```autoit
        _WinAPI_GetDC ( $hWnd )
        ```
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn hover_on_variable_is_empty() {
    let actual = format_hover("_WinAPI_GetDC($hW|nd)", &Settings::default());
    expect![[r#"no hover"#]].assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests: completion
// ---------------------------------------------------------------------------

#[test]
fn complete_get_window() {
    let actual = format_completion("$h = _WinAPI_GetWindow|");
    let expected = expect![[r#"
        _WinAPI_GetWindow
        _WinAPI_GetWindowDC
        _WinAPI_GetWindowDisplayAffinity
        _WinAPI_GetWindowExt
        _WinAPI_GetWindowFileName
        _WinAPI_GetWindowHeight
        _WinAPI_GetWindowInfo
        _WinAPI_GetWindowLong
        _WinAPI_GetWindowModuleFileName
        _WinAPI_GetWindowOrg
        _WinAPI_GetWindowPlacement
        _WinAPI_GetWindowRect
        _WinAPI_GetWindowRgn
        _WinAPI_GetWindowRgnBox
        _WinAPI_GetWindowsDirectory
        _WinAPI_GetWindowText
        _WinAPI_GetWindowTextLength
        _WinAPI_GetWindowTheme
        _WinAPI_GetWindowThreadProcessId
        _WinAPI_GetWindowWidth
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn complete_lowercase_prefix() {
    let actual = format_completion("_winapi_wait|");
    let expected = expect![[r#"
        _WinAPI_WaitForInputIdle
        _WinAPI_WaitForMultipleObjects
        _WinAPI_WaitForSingleObject
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn no_completion_in_variables() {
    let actual = format_completion("$_WinAPI|");
    expect![[r#"no completions"#]].assert_eq(&actual);
}

#[test]
fn no_completion_in_comments_or_strings() {
    let source = "#cs\n    _WinAPI_GetFoc|\n#ce";
    expect![[r#"no completions"#]].assert_eq(&format_completion(source));
    let source = "MsgBox(0, \"\", \"_WinAPI_GetFoc|\")";
    expect![[r#"no completions"#]].assert_eq(&format_completion(source));
}

#[test]
fn completion_replaces_rest_of_identifier() {
    let (state, position) = document("$h = _WinAPI_GetFoc|usX()");
    let Some(CompletionResponse::Array(items)) = completion_at_position(&state, position) else {
        panic!("expected completions");
    };
    let Some(CompletionTextEdit::Edit(edit)) = &items[0].text_edit else {
        panic!("expected a text edit");
    };
    let actual = format!(
        "{} @ {}:{}-{}:{}\n",
        edit.new_text,
        edit.range.start.line,
        edit.range.start.character,
        edit.range.end.line,
        edit.range.end.character
    );
    expect![[r#"
        _WinAPI_GetFocus @ 0:5-0:22
    "#]]
    .assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests: signature help
// ---------------------------------------------------------------------------

#[test]
fn signature_help_optional_param() {
    let actual = format_signature_help("_WinAPI_MoveWindow($hGUI, 10, 10, 200, 100, |)");
    let expected = expect![[r#"
        _WinAPI_MoveWindow ( $hWnd, $iX, $iY, $iWidth, $iHeight [, $bRepaint = True] )
          $hWnd
          $iX
          $iY
          $iWidth
          $iHeight
        * $bRepaint = True
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn signature_help_across_continuation() {
    let source = "_WinAPI_WriteFile($hFile, $pBuffer, _\n    $iToWrite, |";
    let actual = format_signature_help(source);
    let expected = expect![[r#"
        _WinAPI_WriteFile ( $hFile, $pBuffer, $iToWrite, ByRef $iWritten [, $tOverlapped = 0] )
          $hFile
          $pBuffer
          $iToWrite
        * ByRef $iWritten
          $tOverlapped = 0
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn signature_help_inside_subscript() {
    let actual = format_signature_help("_WinAPI_LineTo($hDC, $aX[|");
    let expected = expect![[r#"
        _WinAPI_LineTo ( $hDC, $iX, $iY )
          $hDC
        * $iX
          $iY
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn signature_help_skips_block_comments() {
    let actual = format_signature_help("#cs\n_WinAPI_LineTo($hDC, |\n#ce");
    expect![[r#"no signature help"#]].assert_eq(&actual);

    let actual = format_signature_help("#comments-start\n#comments-end\n_WinAPI_LineTo($hDC, |");
    let expected = expect![[r#"
        _WinAPI_LineTo ( $hDC, $iX, $iY )
          $hDC
        * $iX
          $iY
    "#]];
    expected.assert_eq(&actual);
}

#[test]
fn signature_help_outside_call() {
    let actual = format_signature_help("_WinAPI_GetFocus()|");
    expect![[r#"no signature help"#]].assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests: settings
// ---------------------------------------------------------------------------

#[test]
fn workspace_settings_are_discovered() {
    let root = fixture("workspace");
    let (settings, dir) = discover_settings(&root);
    assert_eq!(dir, root);
    assert!(settings.hover.show_requires);
    assert!(!settings.completion.enabled);
    assert!(settings.signature_help.enabled);

    let actual = format_hover("_WinAPI_ShowMsg|(\"hi\")", &settings);
    let expected = expect![[r#"
        0:0-0:15
        Displays an information message box
        ```autoit
        _WinAPI_ShowMsg ( $sText )
        ```
        (Requires: `#include <WinAPI.au3>`)
    "#]];
    expected.assert_eq(&actual);
}
