//! XML sitemaps with hreflang alternates, and reading emitted sitemaps back.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use sitemap::reader::{SiteMapEntity, SiteMapReader};
use sitemap::structs::Location;

use crate::constants::{SITEMAP_FILE, SITEMAP_INDEX_FILE, SITEMAP_NS, XHTML_NS};
use crate::page::{Page, PageKey};
use crate::store::write_atomic;
use crate::{Locale, PageType};

/// Sitemap priority of a page type.
pub fn priority(page_type: PageType) -> f32 {
    match page_type {
        PageType::CityLanding => 0.8,
        PageType::TreatmentLanding => 0.7,
        PageType::Article => 0.6,
    }
}

/// Sitemap change frequency of a page type.
pub fn changefreq(page_type: PageType) -> &'static str {
    match page_type {
        PageType::CityLanding | PageType::TreatmentLanding => "weekly",
        PageType::Article => "monthly",
    }
}

/// File name of the sitemap holding one locale, e.g. `sitemap_en.xml`.
pub fn locale_sitemap_file(locale: Locale) -> String {
    format!("sitemap_{locale}.xml")
}

/// URL counts of a sitemap run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapSummary {
    pub per_locale: Vec<(Locale, usize)>,
    pub total: usize,
    pub missing_alternates: usize,
}

/// Lookup from page key to URL, used to resolve hreflang counterparts.
fn url_index(pages: &[Page]) -> HashMap<PageKey, &str> {
    pages.iter().map(|page| (page.key(), page.url.as_str())).collect()
}

fn text_element<W: std::io::Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn hreflang_link<W: std::io::Write>(
    writer: &mut Writer<W>,
    locale: Locale,
    href: &str,
) -> Result<()> {
    let link = BytesStart::new("xhtml:link").with_attributes([
        ("rel", "alternate"),
        ("hreflang", locale.as_str()),
        ("href", href),
    ]);
    writer.write_event(Event::Empty(link))?;
    Ok(())
}

/// Renders a `urlset` document for the given pages.
///
/// # Arguments
///
/// * `pages` - Pages to list, in output order
/// * `manifest` - Every known page, used to find hreflang counterparts
/// * `lastmod` - Date stamped on every entry
///
/// # Returns
///
/// The XML document and the number of pages whose counterpart is missing.
///
/// # Errors
///
/// Returns an error if the XML writer fails.
pub fn urlset_xml(
    pages: &[&Page],
    manifest: &[Page],
    lastmod: NaiveDate,
) -> Result<(String, usize)> {
    let urls = url_index(manifest);
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut missing = 0;

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let urlset = BytesStart::new("urlset")
        .with_attributes([("xmlns", SITEMAP_NS), ("xmlns:xhtml", XHTML_NS)]);
    writer.write_event(Event::Start(urlset))?;

    for page in pages {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &page.url)?;
        text_element(&mut writer, "priority", &format!("{:.1}", priority(page.page_type)))?;
        text_element(&mut writer, "changefreq", changefreq(page.page_type))?;
        text_element(&mut writer, "lastmod", &lastmod)?;

        hreflang_link(&mut writer, page.locale, &page.url)?;
        let alternate = page.locale.alternate();
        match urls.get(&page.key().with_locale(alternate)) {
            Some(href) => hreflang_link(&mut writer, alternate, href)?,
            None => {
                debug!("No {} counterpart for {}", alternate, page.url);
                missing += 1;
            }
        }

        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    let xml = String::from_utf8(writer.into_inner()).context("Sitemap is not valid UTF-8")?;
    Ok((xml, missing))
}

/// Renders a `sitemapindex` document referencing sitemap files under the site origin.
///
/// # Errors
///
/// Returns an error if the XML writer fails.
pub fn sitemap_index_xml(origin: &str, files: &[String], lastmod: NaiveDate) -> Result<String> {
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let origin = origin.trim_end_matches('/');

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("sitemapindex").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;

    for file in files {
        writer.write_event(Event::Start(BytesStart::new("sitemap")))?;
        text_element(&mut writer, "loc", &format!("{origin}/{file}"))?;
        text_element(&mut writer, "lastmod", &lastmod)?;
        writer.write_event(Event::End(BytesEnd::new("sitemap")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("sitemapindex")))?;
    String::from_utf8(writer.into_inner()).context("Sitemap index is not valid UTF-8")
}

/// Writes the per-locale sitemaps, the master sitemap and the sitemap index.
///
/// # Arguments
///
/// * `out_dir` - Directory receiving the files
/// * `origin` - Site origin the index points at
/// * `pages` - Manifest pages
/// * `lastmod` - Generation date
///
/// # Errors
///
/// Returns an error if a document cannot be rendered or written.
pub fn write_sitemaps(
    out_dir: &Path,
    origin: &str,
    pages: &[Page],
    lastmod: NaiveDate,
) -> Result<SitemapSummary> {
    let mut summary = SitemapSummary::default();
    let mut files = Vec::new();

    for locale in Locale::ALL {
        let selected: Vec<&Page> = pages.iter().filter(|page| page.locale == locale).collect();
        let (xml, missing) = urlset_xml(&selected, pages, lastmod)?;
        let file = locale_sitemap_file(locale);
        write_atomic(&out_dir.join(&file), xml.as_bytes())?;
        info!("Saved {} ({} URLs)", file, selected.len());

        summary.per_locale.push((locale, selected.len()));
        summary.missing_alternates += missing;
        files.push(file);
    }

    let all: Vec<&Page> = pages.iter().collect();
    let (xml, _) = urlset_xml(&all, pages, lastmod)?;
    write_atomic(&out_dir.join(SITEMAP_FILE), xml.as_bytes())?;
    info!("Saved {} ({} URLs)", SITEMAP_FILE, all.len());
    summary.total = all.len();

    let index = sitemap_index_xml(origin, &files, lastmod)?;
    write_atomic(&out_dir.join(SITEMAP_INDEX_FILE), index.as_bytes())?;
    info!("Saved {SITEMAP_INDEX_FILE}");

    if summary.missing_alternates > 0 {
        warn!(
            "{} pages have no counterpart in the other locale; their alternate link was omitted",
            summary.missing_alternates
        );
    }

    Ok(summary)
}

/// Locations listed by a sitemap file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapLocs {
    /// `<url>` locations.
    pub urls: Vec<String>,
    /// Nested `<sitemap>` locations of an index.
    pub sitemaps: Vec<String>,
}

/// Reads the locations listed in a sitemap or sitemap index file.
///
/// # Arguments
///
/// * `path` - Path of the sitemap file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_sitemap_locs(path: &Path) -> Result<SitemapLocs> {
    let content = fs::read(path).context(format!("Failed to read sitemap: {}", path.display()))?;
    let mut locs = SitemapLocs::default();

    for entity in SiteMapReader::new(content.as_slice()) {
        match entity {
            SiteMapEntity::Url(url_entry) => {
                if let Location::Url(ref url) = url_entry.loc {
                    locs.urls.push(url.to_string());
                }
            }
            SiteMapEntity::SiteMap(sitemap_entry) => {
                if let Location::Url(ref url) = sitemap_entry.loc {
                    locs.sitemaps.push(url.to_string());
                }
            }
            SiteMapEntity::Err(error) => {
                warn!("Skipping malformed sitemap entry in {}: {}", path.display(), error);
            }
        }
    }

    Ok(locs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::manifest::{ManifestScope, generate_manifest};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
    }

    #[test]
    fn urlset_lists_self_and_alternate_links() {
        let pages = generate_manifest(&Catalog::builtin(), &ManifestScope::default());
        let english: Vec<&Page> = pages
            .iter()
            .filter(|page| page.locale == Locale::En)
            .take(1)
            .collect();
        let (xml, missing) = urlset_xml(&english, &pages, date()).expect("xml renders");

        assert_eq!(missing, 0);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("xmlns:xhtml=\"http://www.w3.org/1999/xhtml\""));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.contains("<lastmod>2025-01-15</lastmod>"));
        assert!(xml.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"ar\" href=\"https://shifaalhind.com/ar/medical-tourism/united-arab-emirates/dubai/heart-surgery\"/>"
        ));
    }

    #[test]
    fn missing_counterpart_omits_alternate() {
        let pages: Vec<Page> = generate_manifest(&Catalog::builtin(), &ManifestScope::default())
            .into_iter()
            .filter(|page| page.locale == Locale::En)
            .collect();
        let selected: Vec<&Page> = pages.iter().collect();
        let (xml, missing) = urlset_xml(&selected, &pages, date()).expect("xml renders");

        assert_eq!(missing, pages.len());
        assert!(!xml.contains("hreflang=\"ar\""));
    }

    #[test]
    fn page_type_table() {
        assert_eq!(changefreq(PageType::TreatmentLanding), "weekly");
        assert_eq!(changefreq(PageType::Article), "monthly");
        assert_eq!(format!("{:.1}", priority(PageType::CityLanding)), "0.8");
    }
}
