//! Parser for AutoIt call labels.
//!
//! A label looks like `_WinAPI_ReadFile ( $hFile, $pBuffer, $iToRead, ByRef $iRead [, $tOverlapped = 0] )`.
//! Parameters are separated by commas; anything inside `[...]` is optional and
//! brackets nest for each further optional parameter. Parameters may carry a
//! `ByRef` or `Const` prefix and a `= default` suffix.

use std::ops::Range;

use thiserror::Error;

/// Errors produced when a label does not follow the call-label grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("missing '(' in label")]
    MissingOpenParen,
    #[error("missing ')' in label")]
    MissingCloseParen,
    #[error("unbalanced optional brackets at byte {0}")]
    UnbalancedBrackets(usize),
    #[error("empty parameter at byte {0}")]
    EmptyParam(usize),
    #[error("unterminated string literal at byte {0}")]
    UnterminatedString(usize),
}

/// One parameter as it appears in a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelParam {
    /// Variable name, without `ByRef`/`Const` or default (e.g. "$iRead")
    pub name: String,
    /// True when the parameter sits inside `[...]`
    pub optional: bool,
    /// Byte range of the whole parameter token inside the label
    pub span: Range<usize>,
}

/// A label split into function name and parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLabel {
    pub name: String,
    pub params: Vec<LabelParam>,
}

/// Parse a call label into its function name and parameter list.
pub fn parse_label(label: &str) -> Result<ParsedLabel, LabelError> {
    let open = label.find('(').ok_or(LabelError::MissingOpenParen)?;
    let close = label.rfind(')').ok_or(LabelError::MissingCloseParen)?;
    if close < open {
        return Err(LabelError::MissingCloseParen);
    }

    let name = label[..open].trim().to_string();
    let mut params = Vec::new();

    let mut depth = 0usize;
    let mut quote: Option<(char, usize)> = None;
    // (start offset, bracket depth at start)
    let mut token: Option<(usize, usize)> = None;
    // Set after a comma until the next token starts
    let mut expect_token = false;

    let finish = |token: &mut Option<(usize, usize)>, end: usize, params: &mut Vec<LabelParam>| {
        if let Some((start, depth_at_start)) = token.take() {
            let text = label[start..end].trim_end();
            params.push(split_param(text, start, depth_at_start > 0));
        }
    };

    for (i, c) in label[open + 1..close].char_indices() {
        let i = i + open + 1;

        if let Some((q, _)) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                if token.is_none() {
                    token = Some((i, depth));
                    expect_token = false;
                }
                quote = Some((c, i));
            }
            '[' => {
                finish(&mut token, i, &mut params);
                depth += 1;
            }
            ']' => {
                finish(&mut token, i, &mut params);
                depth = depth
                    .checked_sub(1)
                    .ok_or(LabelError::UnbalancedBrackets(i))?;
            }
            ',' => {
                if token.is_none() && (expect_token || params.is_empty()) {
                    return Err(LabelError::EmptyParam(i));
                }
                finish(&mut token, i, &mut params);
                expect_token = true;
            }
            c if c.is_whitespace() => {}
            _ => {
                if token.is_none() {
                    token = Some((i, depth));
                    expect_token = false;
                }
            }
        }
    }

    if let Some((_, at)) = quote {
        return Err(LabelError::UnterminatedString(at));
    }
    finish(&mut token, close, &mut params);
    if expect_token {
        return Err(LabelError::EmptyParam(close));
    }
    if depth != 0 {
        return Err(LabelError::UnbalancedBrackets(close));
    }

    Ok(ParsedLabel { name, params })
}

/// Split a single parameter token into its parts.
fn split_param(text: &str, start: usize, optional: bool) -> LabelParam {
    let mut rest = text;
    while let Some(stripped) =
        strip_keyword(rest, "ByRef").or_else(move || strip_keyword(rest, "Const"))
    {
        rest = stripped;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name).trim();

    LabelParam {
        name: name.to_string(),
        optional,
        span: start..start + text.len(),
    }
}

/// Strip a leading keyword followed by whitespace, ignoring case.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    let tail = &text[keyword.len()..];
    if head.eq_ignore_ascii_case(keyword) && tail.starts_with(char::is_whitespace) {
        Some(tail.trim_start())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(parsed: &ParsedLabel) -> Vec<&str> {
        parsed.params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn no_params() {
        let parsed = parse_label("_WinAPI_GetFocus ( )").unwrap();
        assert_eq!(parsed.name, "_WinAPI_GetFocus");
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn required_params() {
        let parsed = parse_label("_WinAPI_LineTo ( $hDC, $iX, $iY )").unwrap();
        assert_eq!(names(&parsed), vec!["$hDC", "$iX", "$iY"]);
        assert!(parsed.params.iter().all(|p| !p.optional));
    }

    #[test]
    fn nested_optional_params() {
        let parsed = parse_label("_WinAPI_Beep ( [$iFreq = 500 [, $iDuration = 1000]] )").unwrap();
        assert_eq!(names(&parsed), vec!["$iFreq", "$iDuration"]);
        assert!(parsed.params.iter().all(|p| p.optional));
    }

    #[test]
    fn mixed_required_and_optional() {
        let parsed =
            parse_label("_WinAPI_ReadFile ( $hFile, $pBuffer, $iToRead, ByRef $iRead [, $tOverlapped = 0] )")
                .unwrap();
        assert_eq!(
            names(&parsed),
            vec!["$hFile", "$pBuffer", "$iToRead", "$iRead", "$tOverlapped"]
        );
        assert!(!parsed.params[3].optional);
        assert!(parsed.params[4].optional);
    }

    #[test]
    fn span_covers_whole_token() {
        let label = "_WinAPI_ScreenToClient ( $hWnd, ByRef $tPoint )";
        let parsed = parse_label(label).unwrap();
        assert_eq!(&label[parsed.params[0].span.clone()], "$hWnd");
        assert_eq!(&label[parsed.params[1].span.clone()], "ByRef $tPoint");

        let label = "_WinAPI_Beep ( [$iFreq = 500 [, $iDuration = 1000]] )";
        let parsed = parse_label(label).unwrap();
        assert_eq!(&label[parsed.params[0].span.clone()], "$iFreq = 500");
        assert_eq!(&label[parsed.params[1].span.clone()], "$iDuration = 1000");
    }

    #[test]
    fn quoted_defaults_may_contain_separators() {
        let label = "_WinAPI_Fake ( $sText [, $sSep = \", [x]\" [, $iFlag = 0]] )";
        let parsed = parse_label(label).unwrap();
        assert_eq!(names(&parsed), vec!["$sText", "$sSep", "$iFlag"]);
        assert_eq!(&label[parsed.params[1].span.clone()], "$sSep = \", [x]\"");
    }

    #[test]
    fn const_keyword() {
        let label = "_WinAPI_PolyBezier ( $hDC, Const ByRef $aPoint [, $iStart = 0 [, $iEnd = -1]] )";
        let parsed = parse_label(label).unwrap();
        assert_eq!(names(&parsed), vec!["$hDC", "$aPoint", "$iStart", "$iEnd"]);
        assert_eq!(&label[parsed.params[1].span.clone()], "Const ByRef $aPoint");

        let parsed = parse_label("_WinAPI_Fake ( Const $sPath [, Const $sDelim = @LF] )").unwrap();
        assert_eq!(names(&parsed), vec!["$sPath", "$sDelim"]);
        assert!(parsed.params[1].optional);
    }

    #[test]
    fn malformed_labels() {
        assert_eq!(parse_label("_WinAPI_Fake"), Err(LabelError::MissingOpenParen));
        assert_eq!(parse_label("_WinAPI_Fake ( $a"), Err(LabelError::MissingCloseParen));
        assert!(matches!(
            parse_label("_WinAPI_Fake ( [$a )"),
            Err(LabelError::UnbalancedBrackets(_))
        ));
        assert!(matches!(
            parse_label("_WinAPI_Fake ( $a] )"),
            Err(LabelError::UnbalancedBrackets(_))
        ));
        assert!(matches!(
            parse_label("_WinAPI_Fake ( $a, , $b )"),
            Err(LabelError::EmptyParam(_))
        ));
        assert!(matches!(
            parse_label("_WinAPI_Fake ( $a, )"),
            Err(LabelError::EmptyParam(_))
        ));
        assert!(matches!(
            parse_label("_WinAPI_Fake ( $a = \"x )"),
            Err(LabelError::UnterminatedString(_))
        ));
    }
}
