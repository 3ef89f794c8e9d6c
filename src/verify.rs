//! Consistency checks over a manifest and the sitemaps emitted from it.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use anyhow::Result;
use log::debug;
use serde::Serialize;

use crate::page::{Page, PageKey};
use crate::routes::parse_page_url;
use crate::sitemap::read_sitemap_locs;
use crate::{Locale, PageType};

/// One violated property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    EmptyUrl { index: usize },
    DuplicateUrl { url: String },
    /// The URL does not parse back into the page's structural key.
    KeyMismatch { url: String },
    PageTypeMismatch { url: String, page_type: PageType },
    MissingCounterpart { url: String, locale: Locale },
    NotInSitemap { sitemap: String, url: String },
    NotInManifest { sitemap: String, url: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::EmptyUrl { index } => write!(f, "page #{index} has an empty URL"),
            Issue::DuplicateUrl { url } => write!(f, "duplicate URL {url}"),
            Issue::KeyMismatch { url } => write!(f, "{url} does not match the page's slugs"),
            Issue::PageTypeMismatch { url, page_type } => {
                write!(f, "{url} is not a {page_type} URL")
            }
            Issue::MissingCounterpart { url, locale } => {
                write!(f, "{url} has no {locale} counterpart")
            }
            Issue::NotInSitemap { sitemap, url } => write!(f, "{url} is missing from {sitemap}"),
            Issue::NotInManifest { sitemap, url } => write!(f, "{sitemap} lists unknown URL {url}"),
        }
    }
}

/// Outcome of a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub pages: usize,
    pub sitemaps: usize,
    pub issues: Vec<Issue>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of issues matching a predicate.
    pub fn count(&self, predicate: impl Fn(&Issue) -> bool) -> usize {
        self.issues.iter().filter(|issue| predicate(issue)).count()
    }
}

/// Checks URL presence and uniqueness, the URL to key round trip and that
/// every page has a counterpart in the other locale.
pub fn verify_pages(pages: &[Page]) -> VerifyReport {
    let mut report = VerifyReport {
        pages: pages.len(),
        ..VerifyReport::default()
    };
    let mut seen = HashSet::with_capacity(pages.len());
    let keys: HashSet<PageKey> = pages.iter().map(Page::key).collect();

    for (index, page) in pages.iter().enumerate() {
        if page.url.trim().is_empty() {
            report.issues.push(Issue::EmptyUrl { index });
            continue;
        }
        if !seen.insert(page.url.as_str()) {
            report.issues.push(Issue::DuplicateUrl { url: page.url.clone() });
        }

        let key = page.key();
        if parse_page_url(&page.url).as_ref() != Some(&key) {
            report.issues.push(Issue::KeyMismatch { url: page.url.clone() });
        }
        if key.page_type() != page.page_type {
            report.issues.push(Issue::PageTypeMismatch {
                url: page.url.clone(),
                page_type: page.page_type,
            });
        }

        let alternate = page.locale.alternate();
        if !keys.contains(&key.with_locale(alternate)) {
            report.issues.push(Issue::MissingCounterpart {
                url: page.url.clone(),
                locale: alternate,
            });
        }
    }

    debug!("Verified {} pages, {} issues", pages.len(), report.issues.len());
    report
}

/// Compares the URLs of an emitted sitemap with the manifest pages it should list.
///
/// # Arguments
///
/// * `report` - Report receiving the issues
/// * `pages` - Manifest pages
/// * `path` - Sitemap file
/// * `locale` - Locale the sitemap holds, `None` for the master sitemap
///
/// # Errors
///
/// Returns an error if the sitemap cannot be read.
pub fn verify_sitemap(
    report: &mut VerifyReport,
    pages: &[Page],
    path: &Path,
    locale: Option<Locale>,
) -> Result<()> {
    let locs = read_sitemap_locs(path)?;
    let sitemap = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

    let listed: HashSet<&str> = locs.urls.iter().map(String::as_str).collect();
    let expected: HashSet<&str> = pages
        .iter()
        .filter(|page| locale.is_none_or(|locale| page.locale == locale))
        .map(|page| page.url.as_str())
        .collect();

    for page in pages {
        let url = page.url.as_str();
        if expected.contains(url) && !listed.contains(url) {
            report.issues.push(Issue::NotInSitemap {
                sitemap: sitemap.clone(),
                url: url.to_string(),
            });
        }
    }
    for url in &locs.urls {
        if !expected.contains(url.as_str()) {
            report.issues.push(Issue::NotInManifest {
                sitemap: sitemap.clone(),
                url: url.clone(),
            });
        }
    }

    report.sitemaps += 1;
    Ok(())
}
