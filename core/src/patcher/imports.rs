use crate::patcher::fragments::{COMPONENT_IMPORT, HOOK_IMPORT};

/// Drops repeated help-popup import lines, keeping the first of each.
///
/// Lines are matched by substring, so a trailing comment or missing
/// semicolon does not hide a duplicate. Every other line is left in place.
pub fn remove_duplicate_imports(source: &str) -> String {
    let hook_stmt = HOOK_IMPORT.trim_end_matches(';');
    let component_stmt = COMPONENT_IMPORT.trim_end_matches(';');

    let mut seen_hook = false;
    let mut seen_component = false;

    let kept: Vec<&str> = source
        .split('\n')
        .filter(|line| {
            if line.contains(hook_stmt) {
                if seen_hook {
                    return false;
                }
                seen_hook = true;
            }
            if line.contains(component_stmt) {
                if seen_component {
                    return false;
                }
                seen_component = true;
            }
            true
        })
        .collect();

    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_remove_duplicates_keeps_first() {
        let code = format!(
            "import React from 'react';\n{h}\n{c}\n{h}\n{c}\nexport function APage() {{}}\n",
            h = HOOK_IMPORT,
            c = COMPONENT_IMPORT
        );
        let res = remove_duplicate_imports(&code);
        assert_eq!(
            res,
            format!(
                "import React from 'react';\n{}\n{}\nexport function APage() {{}}\n",
                HOOK_IMPORT, COMPONENT_IMPORT
            )
        );
    }

    #[test]
    fn test_remove_duplicates_noop() {
        let code = format!("{}\nconst a = 1;\n", HOOK_IMPORT);
        assert_eq!(remove_duplicate_imports(&code), code);
    }
}
