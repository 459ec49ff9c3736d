#![deny(missing_docs)]

//! # Batch Configuration
//!
//! The catalog of page files to patch and the immutable configuration handed
//! to the batch runner.

use crate::error::{AppError, AppResult};
use crate::patcher::FragmentKind;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default directory holding the page components, relative to the working directory.
pub const DEFAULT_ROOT: &str = "apps/web/src/pages";

/// Page file → page key table used when no catalog file is given.
const BUILTIN_PAGES: &[(&str, &str)] = &[
    ("RemindersPage.tsx", "reminders"),
    ("DashboardPage.tsx", "feed"),
    ("SynapseReviewPage.tsx", "review"),
    ("ReminderSchedulePage.tsx", "reminder-schedule"),
    ("WordsPage.tsx", "words"),
    ("WordDetailPage.tsx", "word-detail"),
    ("QuestionsPage.tsx", "questions"),
    ("QuestionDetailPage.tsx", "question-detail"),
    ("PersonBuilderPage.tsx", "people"),
    ("PersonDetailPage.tsx", "person-detail"),
    ("RelationshipGraphPage.tsx", "relationships"),
    ("LocationBuilderPage.tsx", "locations"),
    ("LocationMemoriesPage.tsx", "locations"),
    ("ImageBuilderPage.tsx", "images"),
    ("UrlBuilderPage.tsx", "urls"),
    ("YouTubeBuilderPage.tsx", "youtube-videos"),
    ("YouTubeVideoMemoriesPage.tsx", "youtube-videos"),
    ("TikTokVideosListPage.tsx", "tiktok-videos"),
    ("TikTokVideoDetailPage.tsx", "tiktok-videos"),
    ("TikTokBuilderPage.tsx", "tiktok-builder"),
    ("TwitterPostsListPage.tsx", "twitter-posts"),
    ("TwitterPostDetailPage.tsx", "twitter-posts"),
    ("ProjectsPage.tsx", "projects"),
    ("ProjectDetailPage.tsx", "project-detail"),
    ("TrainingsPage.tsx", "trainings"),
    ("TrainingDetailPage.tsx", "training-detail"),
    ("SlideDecksListPage.tsx", "slidedecks"),
    ("SlideDeckReminderSelectionPage.tsx", "slidedecks"),
    ("SlideDeckViewerPage.tsx", "slidedeck-viewer"),
    ("TrainingDecksListPage.tsx", "training-decks"),
    ("TrainingDeckViewerPage.tsx", "training-deck-viewer"),
    ("AtlasPage.tsx", "atlas"),
    ("UpgradePage.tsx", "upgrade"),
    ("AdminPanelPage.tsx", "admin"),
    ("AuditTrailPage.tsx", "audit-trail"),
    ("MemoryDetailPage.tsx", "memory-detail"),
    ("LinkMemoryPage.tsx", "memory-detail"),
];

/// One page file and the key its help content is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// File name, relative to the batch root.
    pub file: String,
    /// Page key passed to the hook and the component.
    pub tag: String,
}

/// Ordered list of entries with unique file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog from `(file, tag)` pairs, keeping their order.
    ///
    /// Fails on an empty file name or tag, or a file listed twice.
    pub fn new<I, F, T>(pairs: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (file, tag) in pairs {
            let file = file.into();
            let tag = tag.into();

            if file.trim().is_empty() {
                return Err(AppError::Catalog("empty file name".into()));
            }
            if tag.trim().is_empty() {
                return Err(AppError::Catalog(format!("empty tag for '{}'", file)));
            }
            if !seen.insert(file.clone()) {
                return Err(AppError::Catalog(format!("duplicate file '{}'", file)));
            }

            entries.push(CatalogEntry { file, tag });
        }

        Ok(Self { entries })
    }

    /// The table of pages shipped with the tool.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PAGES
                .iter()
                .map(|(file, tag)| CatalogEntry {
                    file: (*file).to_string(),
                    tag: (*tag).to_string(),
                })
                .collect(),
        }
    }

    /// Parses a YAML mapping of `file: tag`, in document order.
    pub fn from_yaml(yaml: &str) -> AppResult<Self> {
        let map: IndexMap<String, String> = serde_yaml::from_str(yaml)?;
        Self::new(map)
    }

    /// Reads a catalog file from disk.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("Failed to read catalog {:?}: {}", path, e))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Entries in processing order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which fragments a run applies. Always iterated in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSet {
    kinds: Vec<FragmentKind>,
}

impl FragmentSet {
    /// Imports, hook and component.
    pub fn all() -> Self {
        Self {
            kinds: FragmentKind::ALL.to_vec(),
        }
    }

    /// A subset; duplicates are dropped and order is normalized.
    pub fn from_kinds<I: IntoIterator<Item = FragmentKind>>(kinds: I) -> Self {
        let mut kinds: Vec<FragmentKind> = kinds.into_iter().collect();
        kinds.sort();
        kinds.dedup();
        Self { kinds }
    }

    /// Whether `kind` is selected.
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Selected kinds, in application order.
    pub fn iter(&self) -> impl Iterator<Item = FragmentKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl Default for FragmentSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Everything the batch runner needs, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory the catalog's file names are resolved against.
    pub root: PathBuf,
    /// Pages to process.
    pub catalog: Catalog,
    /// Fragments to apply to each page.
    pub fragments: FragmentSet,
}

impl BatchConfig {
    /// All fragments over `catalog` under `root`.
    pub fn new(root: impl Into<PathBuf>, catalog: Catalog) -> Self {
        Self {
            root: root.into(),
            catalog,
            fragments: FragmentSet::all(),
        }
    }

    /// Restricts the run to `fragments`.
    pub fn with_fragments(mut self, fragments: FragmentSet) -> Self {
        self.fragments = fragments;
        self
    }

    /// Full path of a catalog entry's file.
    pub fn path_of(&self, entry: &CatalogEntry) -> PathBuf {
        self.root.join(&entry.file)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, Catalog::builtin())
    }
}
