use derive_more::Display;
use serde::Serialize;

/// First import line injected into every page.
pub const HOOK_IMPORT: &str = "import { useHelpPopup } from '../hooks/useHelpPopup';";

/// Second import line injected into every page.
pub const COMPONENT_IMPORT: &str = "import { HelpPopup } from '../components/HelpPopup';";

/// Symbol exported by the hook module.
pub const HOOK_SYMBOL: &str = "useHelpPopup";

/// Symbol exported by the component module.
pub const COMPONENT_SYMBOL: &str = "HelpPopup";

/// The three pieces of boilerplate a page receives.
///
/// Variants are declared in application order: imports first, then the hook
/// call inside the page function, then the closing JSX block.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    /// The two `import` declarations.
    #[display("imports")]
    Imports,
    /// The `useHelpPopup('<tag>')` call.
    #[display("hook")]
    Hook,
    /// The `<HelpPopup pageKey="<tag>" />` element.
    #[display("component")]
    Component,
}

impl FragmentKind {
    /// All kinds, in the fixed order they are applied to a file.
    pub const ALL: [FragmentKind; 3] = [
        FragmentKind::Imports,
        FragmentKind::Hook,
        FragmentKind::Component,
    ];
}

/// The import block, one declaration per line.
pub fn import_block() -> String {
    format!("{}\n{}", HOOK_IMPORT, COMPONENT_IMPORT)
}

/// The hook call statement, unindented.
pub fn hook_statement(tag: &str) -> String {
    format!("const helpPopup = useHelpPopup('{}');", tag)
}

/// The JSX element rendered before the page's closing `</div>`.
///
/// Starts with a blank-line separator and ends with a newline so the closing
/// markup that follows keeps its own line.
pub fn component_block(tag: &str) -> String {
    format!(
        "\n      {{/* Help Popup */}}\n      <HelpPopup\n        pageKey=\"{}\"\n        isOpen={{helpPopup.isOpen}}\n        onClose={{helpPopup.closePopup}}\n      />\n",
        tag
    )
}

/// Renders the fragment text for `kind`.
pub fn render(kind: FragmentKind, tag: &str) -> String {
    match kind {
        FragmentKind::Imports => import_block(),
        FragmentKind::Hook => hook_statement(tag),
        FragmentKind::Component => component_block(tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hook_statement_embeds_tag() {
        assert_eq!(
            hook_statement("word-detail"),
            "const helpPopup = useHelpPopup('word-detail');"
        );
    }

    #[test]
    fn test_component_block_layout() {
        let block = component_block("feed");
        let lines: Vec<&str> = block.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "",
                "      {/* Help Popup */}",
                "      <HelpPopup",
                "        pageKey=\"feed\"",
                "        isOpen={helpPopup.isOpen}",
                "        onClose={helpPopup.closePopup}",
                "      />",
                "",
            ]
        );
    }

    #[test]
    fn test_kind_order_and_display() {
        let names: Vec<String> = FragmentKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["imports", "hook", "component"]);
        assert!(FragmentKind::Imports < FragmentKind::Component);
    }
}
