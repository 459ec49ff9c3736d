use crate::patcher::locate::InsertionPoint;

/// Splices `fragment` into `content` at `point`, returning the new text.
///
/// For [`InsertionPoint::Line`] every line of `fragment` becomes its own line,
/// padded with the requested indentation. Lines are split and re-joined on
/// `\n` only, so `\r` and a trailing newline in `content` survive as-is.
/// For [`InsertionPoint::Offset`] the fragment is inserted verbatim.
pub fn inject(content: &str, point: &InsertionPoint, fragment: &str) -> String {
    match *point {
        InsertionPoint::Line { index, indent } => {
            let pad = " ".repeat(indent);
            let padded: Vec<String> = fragment
                .split('\n')
                .map(|line| format!("{}{}", pad, line))
                .collect();

            let mut lines: Vec<&str> = content.split('\n').collect();
            let index = index.min(lines.len());
            lines.splice(index..index, padded.iter().map(String::as_str));
            lines.join("\n")
        }
        InsertionPoint::Offset(at) => {
            let at = at.min(content.len());
            let mut new_source = String::with_capacity(content.len() + fragment.len());
            new_source.push_str(&content[..at]);
            new_source.push_str(fragment);
            new_source.push_str(&content[at..]);
            new_source
        }
    }
}
