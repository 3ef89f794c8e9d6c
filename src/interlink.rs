//! The interlink module derives the internal linking graph of a manifest.
//! Relations are resolved through `PageKey` lookups; anchor names come from
//! the catalog, or from the target page's H1 when the catalog lacks the slug.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::page::{Page, PageKey};
use crate::{Locale, PageType};

const MAX_TREATMENT_ARTICLES: usize = 5;
const MAX_SIBLING_ARTICLES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Navigation,
    RelatedTreatment,
    ParentPage,
    Breadcrumb,
    RelatedArticle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLink {
    pub url: String,
    pub anchor_text: String,
    pub link_type: LinkType,
}

/// Outgoing internal links of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    pub source_url: String,
    pub page_type: PageType,
    pub locale: Locale,
    pub internal_links: Vec<InternalLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterlinkSummary {
    pub pages: usize,
    pub links: usize,
    pub average: f64,
}

impl InterlinkSummary {
    pub fn of(graph: &[PageLinks]) -> Self {
        let pages = graph.len();
        let links: usize = graph.iter().map(|page| page.internal_links.len()).sum();
        let average = if pages == 0 { 0.0 } else { links as f64 / pages as f64 };
        Self { pages, links, average }
    }
}

/// Treatment name recovered from a treatment page H1 such as "IVF in India for Doha Patients".
pub fn treatment_name_from_h1(h1: &str, locale: Locale) -> &str {
    let marker = locale.pick(" in India", " في الهند");
    h1.split(marker).next().unwrap_or(h1)
}

/// City name recovered from a city page H1 such as "Medical Tourism from Doha to India".
pub fn city_name_from_h1(h1: &str, locale: Locale) -> String {
    let (marker, prefix) = locale.pick(
        (" to India", "Medical Tourism from "),
        (" إلى الهند", "السياحة العلاجية من "),
    );
    h1.split(marker).next().unwrap_or(h1).replace(prefix, "")
}

struct ManifestIndex<'p> {
    by_key: HashMap<PageKey, &'p Page>,
    treatments_by_city: HashMap<PageKey, Vec<&'p Page>>,
    articles_by_treatment: HashMap<PageKey, Vec<&'p Page>>,
}

impl<'p> ManifestIndex<'p> {
    fn new(pages: &'p [Page]) -> Self {
        let mut index = Self {
            by_key: HashMap::with_capacity(pages.len()),
            treatments_by_city: HashMap::new(),
            articles_by_treatment: HashMap::new(),
        };

        for page in pages {
            let key = page.key();
            match page.page_type {
                PageType::CityLanding => {}
                PageType::TreatmentLanding => {
                    index.treatments_by_city.entry(key.city_key()).or_default().push(page);
                }
                PageType::Article => {
                    if let Some(treatment_key) = key.treatment_key() {
                        index.articles_by_treatment.entry(treatment_key).or_default().push(page);
                    }
                }
            }
            index.by_key.entry(key).or_insert(page);
        }

        index
    }

    fn articles(&self, treatment_key: &PageKey) -> &[&'p Page] {
        self.articles_by_treatment
            .get(treatment_key)
            .map_or(&[], Vec::as_slice)
    }
}

fn treatment_anchor(catalog: &Catalog, target: &Page) -> String {
    target
        .treatment_slug
        .as_deref()
        .and_then(|slug| catalog.treatment(slug))
        .map_or_else(
            || treatment_name_from_h1(&target.h1, target.locale).to_string(),
            |treatment| treatment.display_name(target.locale).to_string(),
        )
}

fn city_anchor(catalog: &Catalog, target: &Page) -> String {
    catalog
        .city(&target.country_slug, &target.city_slug)
        .map_or_else(
            || city_name_from_h1(&target.h1, target.locale),
            |city| city.display_name(target.locale).to_string(),
        )
}

fn link(target: &Page, anchor_text: String, link_type: LinkType) -> InternalLink {
    InternalLink {
        url: target.url.clone(),
        anchor_text,
        link_type,
    }
}

/// Builds the outgoing links of every page, in manifest order.
///
/// # Arguments
///
/// * `catalog` - Source of anchor names
/// * `pages` - The full manifest
///
/// # Returns
///
/// One entry per page. Links whose target is not in the manifest are omitted.
pub fn build_interlinks(catalog: &Catalog, pages: &[Page]) -> Vec<PageLinks> {
    let index = ManifestIndex::new(pages);

    pages
        .iter()
        .map(|page| {
            let key = page.key();
            let locale = page.locale;
            let mut links = Vec::new();

            match page.page_type {
                PageType::CityLanding => {
                    links.push(InternalLink {
                        url: catalog.home_url(locale),
                        anchor_text: locale.pick("Home", "الرئيسية").to_string(),
                        link_type: LinkType::Navigation,
                    });
                    for treatment in index.treatments_by_city.get(&key).into_iter().flatten() {
                        let anchor = treatment_anchor(catalog, treatment);
                        links.push(link(treatment, anchor, LinkType::RelatedTreatment));
                    }
                }
                PageType::TreatmentLanding => {
                    if let Some(city) = index.by_key.get(&key.city_key()) {
                        let name = city_anchor(catalog, city);
                        let anchor = match locale {
                            Locale::En => format!("{name} Medical Tourism"),
                            Locale::Ar => format!("السياحة العلاجية {name}"),
                        };
                        links.push(link(city, anchor, LinkType::ParentPage));
                    }
                    for article in index.articles(&key).iter().take(MAX_TREATMENT_ARTICLES) {
                        links.push(link(article, article.h1.clone(), LinkType::RelatedArticle));
                    }
                }
                PageType::Article => {
                    let treatment_key = key.treatment_key();
                    let treatment = treatment_key.as_ref().and_then(|key| index.by_key.get(key));
                    if let Some(treatment) = treatment {
                        let anchor = treatment_anchor(catalog, treatment);
                        links.push(link(treatment, anchor, LinkType::ParentPage));
                    }
                    if let Some(city) = index.by_key.get(&key.city_key()) {
                        links.push(link(city, city_anchor(catalog, city), LinkType::Breadcrumb));
                    }
                    if let Some(treatment_key) = &treatment_key {
                        let siblings = index
                            .articles(treatment_key)
                            .iter()
                            .filter(|sibling| sibling.url != page.url)
                            .take(MAX_SIBLING_ARTICLES);
                        for sibling in siblings {
                            links.push(link(sibling, sibling.h1.clone(), LinkType::RelatedArticle));
                        }
                    }
                }
            }

            PageLinks {
                source_url: page.url.clone(),
                page_type: page.page_type,
                locale,
                internal_links: links,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ManifestScope, generate_manifest};

    #[test]
    fn h1_markers_recover_names() {
        assert_eq!(
            treatment_name_from_h1("Dental Implants in India for Doha Patients", Locale::En),
            "Dental Implants"
        );
        assert_eq!(
            treatment_name_from_h1("زراعة الأسنان في الهند لمرضى الدوحة", Locale::Ar),
            "زراعة الأسنان"
        );
        assert_eq!(city_name_from_h1("Medical Tourism from Doha to India", Locale::En), "Doha");
        assert_eq!(city_name_from_h1("السياحة العلاجية من الدوحة إلى الهند", Locale::Ar), "الدوحة");
        assert_eq!(city_name_from_h1("Unrelated heading", Locale::En), "Unrelated heading");
    }

    #[test]
    fn every_page_gets_an_entry() {
        let catalog = Catalog::builtin();
        let pages = generate_manifest(&catalog, &ManifestScope::Full);
        let graph = build_interlinks(&catalog, &pages);
        assert_eq!(graph.len(), pages.len());

        let summary = InterlinkSummary::of(&graph);
        assert_eq!(summary.pages, 980);
        // city: 1 + 8, treatment: 1 + 5, article: 1 + 1 + 3
        assert_eq!(summary.links, 20 * 9 + 160 * 6 + 800 * 5);
    }

    #[test]
    fn treatment_page_links_city_and_articles() {
        let catalog = Catalog::builtin();
        let pages = generate_manifest(&catalog, &ManifestScope::Full);
        let graph = build_interlinks(&catalog, &pages);

        let doha_ivf = "https://shifaalhind.com/ar/medical-tourism/qatar/doha/ivf";
        let entry = graph
            .iter()
            .find(|entry| entry.source_url == doha_ivf)
            .expect("doha ivf page");
        let first = entry.internal_links.first().expect("links");
        assert_eq!(first.link_type, LinkType::ParentPage);
        assert_eq!(first.anchor_text, "السياحة العلاجية الدوحة");
        assert!(entry.internal_links.iter().skip(1).all(|link| {
            link.link_type == LinkType::RelatedArticle
                && link.url.starts_with("https://shifaalhind.com/ar/blog/qatar/doha/ivf/")
        }));
    }

    #[test]
    fn unknown_treatment_anchor_falls_back_to_h1() {
        let catalog = Catalog::builtin();
        let mut pages = generate_manifest(&catalog, &ManifestScope::Full);
        pages.retain(|page| page.city_slug == "doha" && page.locale == Locale::En);
        for page in &mut pages {
            if page.treatment_slug.as_deref() == Some("ivf") {
                page.treatment_slug = Some("fertility".to_string());
            }
        }

        let graph = build_interlinks(&Catalog { treatments: Vec::new(), ..catalog }, &pages);
        let city = graph.first().expect("city entry");
        assert!(city
            .internal_links
            .iter()
            .any(|link| link.anchor_text == "IVF & Fertility Treatment"));
    }
}
