// ============================================================================
// vidcat-core/src/report.rs
// ============================================================================
//
// REPORT RENDERING: HTML Index Generation
//
// This module turns a grouped catalog into the HTML index document. Rendering
// is done by Handlebars with the template embedded at compile time; HTML
// escaping of every interpolated value is left on, so file and directory
// names containing markup characters are rendered as text.
//
// TEMPLATE CONTRACT:
// - groups:          [{ key, duration_secs, files: [{ name, href, duration_secs }] }]
// - directory_name:  display name of the scanned directory
// - total_duration:  grand total, already formatted as HH:MM:SS
// - file_count:      number of catalogued files
// - hms:             helper formatting seconds as HH:MM:SS
//
// LINKS:
// File links are resolved against the directory the index is written to, not
// the scan root. When the two share a filesystem root the link is a relative
// path (possibly climbing with `..`); otherwise it is an absolute `file://` URL.

// ---- Internal crate imports ----
use crate::catalog::{CatalogTotals, GroupedCatalog, VideoFile};
use crate::error::CoreResult;
use crate::format::format_hms;

// ---- External crate imports ----
use handlebars::{Handlebars, handlebars_helper};
use serde::Serialize;

// ---- Standard library imports ----
use std::path::{Component, Path, PathBuf};

const TEMPLATE_NAME: &str = "video_index";
const TEMPLATE_SOURCE: &str = include_str!("../templates/video_index.hbs");

handlebars_helper!(hms: |secs: u64| format_hms(secs));

// ============================================================================
// TEMPLATE DATA
// ============================================================================

#[derive(Debug, Serialize)]
struct FileView {
    name: String,
    href: String,
    duration_secs: u64,
}

#[derive(Debug, Serialize)]
struct GroupView {
    key: String,
    duration_secs: u64,
    files: Vec<FileView>,
}

#[derive(Debug, Serialize)]
struct IndexView {
    groups: Vec<GroupView>,
    directory_name: String,
    total_duration: String,
    file_count: usize,
}

impl FileView {
    fn new(file: &VideoFile, link_base: &Path) -> Self {
        Self {
            name: file.name.clone(),
            href: href_for(&link_base.join(&file.relative_path)),
            duration_secs: file.duration_secs,
        }
    }
}

// ============================================================================
// LINKS
// ============================================================================

/// Path of `root` as seen from `page_dir`, the directory holding the index.
///
/// Both directories must exist. The result is relative when they share a
/// filesystem root, and the canonical `root` otherwise.
pub fn root_link(root: &Path, page_dir: &Path) -> CoreResult<PathBuf> {
    let root = root.canonicalize()?;
    let page_dir = page_dir.canonicalize()?;
    Ok(relative_link(&root, &page_dir).unwrap_or(root))
}

/// `target` relative to `base`, climbing out of `base` with `..` as needed.
///
/// Returns `None` when no relative path exists, e.g. between two Windows
/// drives or between an absolute and a relative path.
fn relative_link(target: &Path, base: &Path) -> Option<PathBuf> {
    if target.is_absolute() != base.is_absolute() {
        return None;
    }

    let target: Vec<Component> =
        target.components().filter(|c| *c != Component::CurDir).collect();
    let base: Vec<Component> = base.components().filter(|c| *c != Component::CurDir).collect();

    let shared = target.iter().zip(&base).take_while(|(t, b)| t == b).count();

    // Anything left over other than plain names means the roots differ.
    let mut link = PathBuf::new();
    for component in &base[shared..] {
        match component {
            Component::Normal(_) => link.push(".."),
            _ => return None,
        }
    }
    for component in &target[shared..] {
        match component {
            Component::Normal(segment) => link.push(segment),
            Component::ParentDir => link.push(".."),
            _ => return None,
        }
    }
    Some(link)
}

/// Builds a link target with `/` separators and each segment percent-encoded,
/// so names with spaces, `#`, `?` or non UTF-8 bytes still resolve. Absolute
/// paths become `file://` URLs.
fn href_for(path: &Path) -> String {
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                segments.push(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::Normal(segment) => {
                segments.push(urlencoding::encode_binary(segment.as_encoded_bytes()).into_owned())
            }
            Component::ParentDir => segments.push("..".to_string()),
            Component::RootDir | Component::CurDir => {}
        }
    }

    let joined = segments.join("/");
    if path.has_root() {
        format!("file:///{}", joined)
    } else {
        joined
    }
}

// ============================================================================
// RENDERER
// ============================================================================

/// Renders HTML index documents from a grouped catalog.
pub struct ReportRenderer<'reg> {
    registry: Handlebars<'reg>,
}

impl ReportRenderer<'_> {
    /// Creates a renderer with the embedded index template and `hms` helper.
    pub fn new() -> CoreResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_helper("hms", Box::new(hms));
        registry.register_template_string(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
        Ok(Self { registry })
    }

    /// Renders the index for `catalog`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Groups to list, in display order
    /// * `totals` - Totals of the scan that produced `catalog`
    /// * `directory_name` - Display name of the scanned directory
    /// * `link_base` - The scan root as seen from the index's directory (see
    ///   [`root_link`]); empty when the index sits in the scan root
    pub fn render(
        &self,
        catalog: &GroupedCatalog,
        totals: &CatalogTotals,
        directory_name: &str,
        link_base: &Path,
    ) -> CoreResult<String> {
        let view = IndexView {
            groups: catalog
                .groups()
                .iter()
                .map(|group| GroupView {
                    key: group.key.clone(),
                    duration_secs: group.duration_secs(),
                    files: group
                        .files
                        .iter()
                        .map(|file| FileView::new(file, link_base))
                        .collect(),
                })
                .collect(),
            directory_name: directory_name.to_string(),
            total_duration: format_hms(totals.duration_secs),
            file_count: totals.file_count,
        };

        Ok(self.registry.render(TEMPLATE_NAME, &view)?)
    }
}

/// Renders the index with a freshly built [`ReportRenderer`].
pub fn render_index(
    catalog: &GroupedCatalog,
    totals: &CatalogTotals,
    directory_name: &str,
    link_base: &Path,
) -> CoreResult<String> {
    ReportRenderer::new()?.render(catalog, totals, directory_name, link_base)
}
