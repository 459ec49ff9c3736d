use crate::patcher::fragments::FragmentKind;
use derive_more::Display;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// How many lines past the page function's opening line are searched for a
/// hook insertion site (the opening line included).
pub const HOOK_SCAN_WINDOW: usize = 20;

/// Where a fragment goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPoint {
    /// Insert new lines before line `index` (0-based, `\n`-separated),
    /// each prefixed with `indent` spaces. `index == line count` appends.
    Line {
        /// Line the fragment is placed in front of.
        index: usize,
        /// Number of spaces prepended to every fragment line.
        indent: usize,
    },
    /// Insert the fragment verbatim at this byte offset.
    Offset(usize),
}

/// Why a locator gave up.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAnchor {
    /// No line starts with `import `.
    #[display("No imports found")]
    NoImportLine,
    /// No `export function XxxPage() {` declaration.
    #[display("Component function not found")]
    NoPageFunction,
    /// Page function found, but no hook or state declaration inside the window.
    #[display("Could not find insertion point for hook")]
    NoHookSite,
    /// No `</div> ); }` tail.
    #[display("Could not find closing pattern")]
    NoClosingBlock,
}

fn page_function_re() -> &'static Regex {
    static PAGE_FN_RE: OnceLock<Regex> = OnceLock::new();
    PAGE_FN_RE.get_or_init(|| Regex::new(r"export function \w+Page\(\) \{").expect("Invalid regex"))
}

fn hook_site_res() -> &'static [Regex; 2] {
    static HOOK_SITE_RES: OnceLock<[Regex; 2]> = OnceLock::new();
    HOOK_SITE_RES.get_or_init(|| {
        [
            // const data = useQuery(
            Regex::new(r"const \w+ = use\w+\(").expect("Invalid regex"),
            // const [value, setValue] = ...
            Regex::new(r"const \[\w+").expect("Invalid regex"),
        ]
    })
}

fn closing_block_re() -> &'static Regex {
    static CLOSING_RE: OnceLock<Regex> = OnceLock::new();
    CLOSING_RE.get_or_init(|| Regex::new(r"(\s+</div>)\s+\);\s+\}").expect("Invalid regex"))
}

/// Finds where the fragment of `kind` belongs in `content`.
pub fn locate(content: &str, kind: FragmentKind) -> Result<InsertionPoint, MissingAnchor> {
    match kind {
        FragmentKind::Imports => locate_imports(content),
        FragmentKind::Hook => locate_hook(content),
        FragmentKind::Component => locate_closing_block(content),
    }
}

/// Directly after the first line starting with `import `.
pub fn locate_imports(content: &str) -> Result<InsertionPoint, MissingAnchor> {
    content
        .split('\n')
        .position(|line| line.starts_with("import "))
        .map(|i| InsertionPoint::Line {
            index: i + 1,
            indent: 0,
        })
        .ok_or(MissingAnchor::NoImportLine)
}

/// Directly before the first hook or state declaration of the page function,
/// at that declaration's indentation.
pub fn locate_hook(content: &str) -> Result<InsertionPoint, MissingAnchor> {
    let func = page_function_re()
        .find(content)
        .ok_or(MissingAnchor::NoPageFunction)?;

    let start_line = content[..func.end()].matches('\n').count();

    content
        .split('\n')
        .enumerate()
        .skip(start_line)
        .take(HOOK_SCAN_WINDOW)
        .find(|(_, line)| hook_site_res().iter().any(|re| re.is_match(line)))
        .map(|(index, line)| InsertionPoint::Line {
            index,
            indent: line.chars().take_while(|c| c.is_whitespace()).count(),
        })
        .ok_or(MissingAnchor::NoHookSite)
}

/// At the whitespace run leading into the first `</div>` that is followed by
/// `);` and `}`.
pub fn locate_closing_block(content: &str) -> Result<InsertionPoint, MissingAnchor> {
    closing_block_re()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| InsertionPoint::Offset(m.start()))
        .ok_or(MissingAnchor::NoClosingBlock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_after_first_import_line() {
        let code = "// header\nimport React from 'react';\nimport { x } from './x';\n";
        assert_eq!(
            locate_imports(code),
            Ok(InsertionPoint::Line { index: 2, indent: 0 })
        );
    }

    #[test]
    fn test_imports_ignores_indented_import() {
        let code = "  import React from 'react';\nconst a = 1;";
        assert_eq!(locate_imports(code), Err(MissingAnchor::NoImportLine));
    }

    #[test]
    fn test_hook_before_first_state_line() {
        let code = "\
export function WordsPage() {
  const navigate = useNavigate();
  const [words, setWords] = useState([]);
";
        assert_eq!(
            locate_hook(code),
            Ok(InsertionPoint::Line { index: 1, indent: 2 })
        );
    }

    #[test]
    fn test_hook_matches_destructuring_and_keeps_indent() {
        let code = "\
import React from 'react';
export function AtlasPage() {
    let ready = false;
    const [zoom, setZoom] = useState(1);
";
        assert_eq!(
            locate_hook(code),
            Ok(InsertionPoint::Line { index: 3, indent: 4 })
        );
    }

    #[test]
    fn test_hook_without_page_function() {
        let code = "export default function Words() {\n  const [a, b] = useState(0);\n}";
        assert_eq!(locate_hook(code), Err(MissingAnchor::NoPageFunction));
    }

    #[test]
    fn test_hook_site_outside_window() {
        let mut code = String::from("export function LongPage() {\n");
        for i in 0..HOOK_SCAN_WINDOW {
            code.push_str(&format!("  let v{} = {};\n", i, i));
        }
        code.push_str("  const [a, setA] = useState(0);\n");
        assert_eq!(locate_hook(&code), Err(MissingAnchor::NoHookSite));
    }

    #[test]
    fn test_hook_site_on_last_window_line() {
        let mut code = String::from("export function LongPage() {\n");
        for i in 0..HOOK_SCAN_WINDOW - 2 {
            code.push_str(&format!("  let v{} = {};\n", i, i));
        }
        code.push_str("  const [a, setA] = useState(0);\n");
        assert_eq!(
            locate_hook(&code),
            Ok(InsertionPoint::Line {
                index: HOOK_SCAN_WINDOW - 1,
                indent: 2
            })
        );
    }

    #[test]
    fn test_closing_block_offset_starts_at_whitespace() {
        let code = "    <p>hi</p>\n    </div>\n  );\n}\n";
        let expected = code.find("\n    </div>").unwrap();
        assert_eq!(
            locate_closing_block(code),
            Ok(InsertionPoint::Offset(expected))
        );
    }

    #[test]
    fn test_closing_block_missing() {
        let code = "return <div />;\n}";
        assert_eq!(
            locate_closing_block(code),
            Err(MissingAnchor::NoClosingBlock)
        );
    }

    #[test]
    fn test_missing_anchor_messages() {
        assert_eq!(MissingAnchor::NoImportLine.to_string(), "No imports found");
        assert_eq!(
            MissingAnchor::NoClosingBlock.to_string(),
            "Could not find closing pattern"
        );
    }
}
