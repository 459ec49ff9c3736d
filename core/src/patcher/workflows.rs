use crate::config::FragmentSet;
use crate::patcher::fragments::{render, FragmentKind};
use crate::patcher::guard::is_present;
use crate::patcher::inject::inject;
use crate::patcher::locate::{locate, MissingAnchor};
use derive_more::Display;
use serde::Serialize;

/// Result of one fragment step on one file.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum StepStatus {
    /// The fragment was spliced in.
    #[display("added")]
    Added,
    /// The guard found the fragment already there.
    #[display("already present")]
    AlreadyPresent,
    /// No insertion point; the fragment was skipped.
    #[display("{_0}")]
    AnchorNotFound(MissingAnchor),
}

/// One fragment step, as reported back to the batch runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Which fragment.
    pub kind: FragmentKind,
    /// What happened to it.
    pub status: StepStatus,
}

/// Output of [`patch_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePatch {
    /// The patched source.
    pub content: String,
    /// One entry per selected fragment, in application order.
    pub steps: Vec<StepReport>,
}

impl PagePatch {
    /// Whether any step changed the text.
    pub fn changed(&self) -> bool {
        self.steps.iter().any(|s| s.status == StepStatus::Added)
    }
}

/// Applies a single fragment: guard, then locate, then inject.
pub fn apply_fragment(content: &str, kind: FragmentKind, tag: &str) -> (String, StepStatus) {
    if is_present(content, kind, tag) {
        return (content.to_string(), StepStatus::AlreadyPresent);
    }

    match locate(content, kind) {
        Ok(point) => (
            inject(content, &point, &render(kind, tag)),
            StepStatus::Added,
        ),
        Err(missing) => (content.to_string(), StepStatus::AnchorNotFound(missing)),
    }
}

/// Runs the selected fragments over `source` in import → hook → component order.
///
/// Each step sees the output of the previous one. Steps whose anchor is
/// missing leave the text alone and do not stop later steps.
pub fn patch_page(source: &str, tag: &str, fragments: &FragmentSet) -> PagePatch {
    let mut current_source = source.to_string();
    let mut steps = Vec::new();

    for kind in fragments.iter() {
        let (next, status) = apply_fragment(&current_source, kind, tag);
        current_source = next;
        steps.push(StepReport { kind, status });
    }

    PagePatch {
        content: current_source,
        steps,
    }
}
