use crate::patcher::fragments::{FragmentKind, COMPONENT_SYMBOL, HOOK_SYMBOL};

/// Reports whether `content` already carries the fragment of `kind` for `tag`.
///
/// All checks are plain substring searches over the whole file. A tag that
/// happens to appear in a comment counts as present.
pub fn is_present(content: &str, kind: FragmentKind, tag: &str) -> bool {
    match kind {
        FragmentKind::Imports => {
            content.contains(HOOK_SYMBOL) && content.contains(COMPONENT_SYMBOL)
        }
        FragmentKind::Hook => {
            content.contains(&format!("useHelpPopup('{}')", tag))
                || content.contains(&format!("useHelpPopup(\"{}\")", tag))
        }
        FragmentKind::Component => {
            content.contains(&format!("pageKey=\"{}\"", tag))
                || content.contains(&format!("pageKey='{}'", tag))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_need_both_symbols() {
        assert!(!is_present("import { HelpPopup } from 'x';", FragmentKind::Imports, "t"));
        assert!(is_present(
            "const a = useHelpPopup; // HelpPopup",
            FragmentKind::Imports,
            "t"
        ));
    }

    #[test]
    fn test_hook_accepts_either_quote_style() {
        assert!(is_present("useHelpPopup('words')", FragmentKind::Hook, "words"));
        assert!(is_present("useHelpPopup(\"words\")", FragmentKind::Hook, "words"));
        assert!(!is_present("useHelpPopup('word-detail')", FragmentKind::Hook, "words"));
    }

    #[test]
    fn test_component_accepts_either_quote_style() {
        assert!(is_present("<HelpPopup pageKey=\"feed\" />", FragmentKind::Component, "feed"));
        assert!(is_present("<HelpPopup pageKey='feed' />", FragmentKind::Component, "feed"));
        assert!(!is_present("<HelpPopup pageKey={key} />", FragmentKind::Component, "feed"));
    }

    #[test]
    fn test_match_inside_comment_counts_as_present() {
        let code = "// wire useHelpPopup('atlas') once the copy is ready\nexport function AtlasPage() {}";
        assert!(is_present(code, FragmentKind::Hook, "atlas"));
    }
}
