//! The manifest module fans the catalog out into page records: every city in
//! both locales, every treatment of every city, and the first articles of each
//! treatment.

use log::debug;
use serde::Serialize;

use crate::catalog::{Catalog, City, Country, Treatment, title_case};
use crate::constants::{ARTICLES_PER_TREATMENT, DEFAULT_SAMPLE_CITY};
use crate::jsonld::{article_json_ld, city_json_ld, treatment_json_ld};
use crate::page::{Page, PageKey};
use crate::routes::page_url;
use crate::sitemap::{changefreq, priority};
use crate::{Locale, PageType};

/// Which part of the catalog to turn into pages.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ManifestScope {
    /// Every city, treatment and article page.
    Full,
    /// Treatment landing pages of a single city.
    Sample { city: String },
}

impl Default for ManifestScope {
    fn default() -> Self {
        Self::Sample {
            city: DEFAULT_SAMPLE_CITY.to_string(),
        }
    }
}

/// Page counts a full manifest of a catalog produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManifestTotals {
    pub cities: usize,
    pub treatments: usize,
    pub city_pages: usize,
    pub treatment_pages: usize,
    pub article_pages: usize,
    pub grand_total: usize,
}

impl ManifestTotals {
    pub fn of(catalog: &Catalog) -> Self {
        let locales = Locale::ALL.len();
        let cities = catalog.city_count();
        let treatments = catalog.treatments.len();
        let articles_per_city: usize = catalog
            .treatments
            .iter()
            .map(|treatment| treatment.article_slugs().len().min(ARTICLES_PER_TREATMENT))
            .sum();

        let city_pages = cities * locales;
        let treatment_pages = cities * treatments * locales;
        let article_pages = cities * articles_per_city * locales;

        Self {
            cities,
            treatments,
            city_pages,
            treatment_pages,
            article_pages,
            grand_total: city_pages + treatment_pages + article_pages,
        }
    }
}

/// One row of the sitemap planning CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapPreviewRow {
    pub url: String,
    pub locale: Locale,
    pub page_type: PageType,
    pub priority: String,
    pub changefreq: &'static str,
}

/// Generates manifest pages for the given scope in catalog order.
///
/// # Arguments
///
/// * `catalog` - The catalog to fan out
/// * `scope` - Whether to build every page or the treatment pages of one city
///
/// # Returns
///
/// Pages ordered country, city, locale; treatments and articles nested below their city.
/// A sample scope naming an unknown city yields no pages.
pub fn generate_manifest(catalog: &Catalog, scope: &ManifestScope) -> Vec<Page> {
    let mut pages = Vec::new();

    match scope {
        ManifestScope::Full => {
            for (country, city) in catalog.cities() {
                for locale in Locale::ALL {
                    pages.push(city_page(catalog, country, city, locale));
                }

                for treatment in &catalog.treatments {
                    for locale in Locale::ALL {
                        pages.push(treatment_page(catalog, country, city, treatment, locale));
                    }

                    let articles = treatment.article_slugs();
                    for article in articles.iter().take(ARTICLES_PER_TREATMENT) {
                        for locale in Locale::ALL {
                            pages.push(article_page(
                                catalog, country, city, treatment, article, locale,
                            ));
                        }
                    }
                }
                debug!("Generated pages for {}", city.slug);
            }
        }
        ManifestScope::Sample { city } => {
            if let Some((country, city)) = catalog.find_city(city) {
                for treatment in &catalog.treatments {
                    for locale in Locale::ALL {
                        pages.push(treatment_page(catalog, country, city, treatment, locale));
                    }
                }
            }
        }
    }

    pages
}

/// City landing page metadata.
pub fn city_page(catalog: &Catalog, country: &Country, city: &City, locale: Locale) -> Page {
    let key = PageKey::city(locale, &country.slug, &city.slug);
    let name = city.display_name(locale);
    let brand = &catalog.brand.name;

    let (title, meta_desc, h1, keyword) = match locale {
        Locale::En => (
            format!("{name} to India Medical Tourism — Affordable Healthcare | {brand}"),
            format!(
                "Trusted medical tourism from {name} to India. Save 60-70%, JCI hospitals, Arabic support."
            ),
            format!("Medical Tourism from {name} to India"),
            format!("{name} medical tourism India"),
        ),
        Locale::Ar => (
            format!("السياحة العلاجية من {name} إلى الهند — رعاية صحية ميسورة | {brand}"),
            format!("السياحة العلاجية الموثوقة من {name} إلى الهند. وفر 60-70٪."),
            format!("السياحة العلاجية من {name} إلى الهند"),
            format!("السياحة العلاجية {name} الهند"),
        ),
    };

    let mut page = Page::draft(page_url(catalog.brand.origin(), &key), &key, title, meta_desc, h1);
    page.primary_keyword = Some(keyword);
    page.json_ld = Some(city_json_ld(catalog, country, city, locale));
    page
}

/// Treatment landing page metadata.
pub fn treatment_page(
    catalog: &Catalog,
    country: &Country,
    city: &City,
    treatment: &Treatment,
    locale: Locale,
) -> Page {
    let key = PageKey::city(locale, &country.slug, &city.slug).treatment(&treatment.slug);
    let city_name = city.display_name(locale);
    let name = treatment.display_name(locale);
    let brand = &catalog.brand.name;

    let (title, meta_desc, h1, keyword) = match locale {
        Locale::En => (
            format!("{city_name} {name} in India — Trusted & Affordable | {brand}"),
            format!("Get {name} in India from {city_name}. 60-70% savings, top hospitals."),
            format!("{name} in India for {city_name} Patients"),
            format!("{city_name} {name} India"),
        ),
        Locale::Ar => (
            format!("{name} في الهند من {city_name} — موثوق وبأسعار معقولة | {brand}"),
            format!("احصل على {name} في الهند من {city_name}. توفير 60-70٪."),
            format!("{name} في الهند لمرضى {city_name}"),
            format!("{name} {city_name} الهند"),
        ),
    };

    let mut page = Page::draft(page_url(catalog.brand.origin(), &key), &key, title, meta_desc, h1);
    page.primary_keyword = Some(keyword);
    page.json_ld = Some(treatment_json_ld(catalog, country, city, treatment, locale));
    page
}

/// Article page metadata. The headline is the title-cased slug in both locales.
pub fn article_page(
    catalog: &Catalog,
    country: &Country,
    city: &City,
    treatment: &Treatment,
    article: &str,
    locale: Locale,
) -> Page {
    let key = PageKey::city(locale, &country.slug, &city.slug)
        .treatment(&treatment.slug)
        .article(article);
    let city_name = city.display_name(locale);
    let name = treatment.display_name(locale);
    let brand = &catalog.brand.name;
    let headline = title_case(&article.replace('-', " "));

    let (title, meta_desc) = match locale {
        Locale::En => (
            format!("{headline} - {city_name} to India | {brand}"),
            format!("{name} guide for {city_name} patients. Costs, hospitals, process."),
        ),
        Locale::Ar => (
            format!("{headline} - من {city_name} إلى الهند | {brand}"),
            format!("دليل {name} لمرضى {city_name}."),
        ),
    };

    let url = page_url(catalog.brand.origin(), &key);
    let mut page = Page::draft(url, &key, title, meta_desc, headline);
    page.json_ld = Some(article_json_ld(catalog, city, treatment, article, locale));
    page
}

/// Sitemap planning rows for the given pages, in page order.
pub fn sitemap_preview(pages: &[Page]) -> Vec<SitemapPreviewRow> {
    pages
        .iter()
        .map(|page| SitemapPreviewRow {
            url: page.url.clone(),
            locale: page.locale,
            page_type: page.page_type,
            priority: format!("{:.1}", priority(page.page_type)),
            changefreq: changefreq(page.page_type),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::META_DESC_MAX_CHARS;
    use std::collections::HashSet;

    fn doha_ivf_catalog() -> Catalog {
        let mut catalog = Catalog::builtin();
        catalog.countries.retain(|country| country.slug == "qatar");
        catalog.treatments.retain(|treatment| treatment.slug == "ivf");
        catalog
    }

    #[test]
    fn builtin_catalog_totals_980_pages() {
        let catalog = Catalog::builtin();
        let totals = ManifestTotals::of(&catalog);
        assert_eq!(totals.city_pages, 20);
        assert_eq!(totals.treatment_pages, 160);
        assert_eq!(totals.article_pages, 800);
        assert_eq!(totals.grand_total, 980);
        assert_eq!(generate_manifest(&catalog, &ManifestScope::Full).len(), 980);
    }

    #[test]
    fn single_city_single_treatment_manifest() {
        let pages = generate_manifest(&doha_ivf_catalog(), &ManifestScope::Full);
        let count = |page_type| pages.iter().filter(|page| page.page_type == page_type).count();

        assert_eq!(count(PageType::CityLanding), 2);
        assert_eq!(count(PageType::TreatmentLanding), 2);
        assert_eq!(count(PageType::Article), 10);

        let first = pages.first().expect("manifest is not empty");
        assert_eq!(first.url, "https://shifaalhind.com/en/medical-tourism/qatar/doha");
        assert_eq!(
            first.title,
            "Doha to India Medical Tourism — Affordable Healthcare | Shifa AlHind"
        );

        let arabic_treatment = pages
            .iter()
            .find(|page| page.page_type == PageType::TreatmentLanding && page.locale == Locale::Ar)
            .expect("arabic treatment page");
        assert_eq!(arabic_treatment.h1, "التلقيح الصناعي وعلاج الخصوبة في الهند لمرضى الدوحة");
        assert!(arabic_treatment.needs_native_review);
        assert!(arabic_treatment.needs_medical_review);
    }

    #[test]
    fn urls_are_unique_and_descriptions_bounded() {
        let pages = generate_manifest(&Catalog::builtin(), &ManifestScope::Full);
        let urls: HashSet<&str> = pages.iter().map(|page| page.url.as_str()).collect();
        assert_eq!(urls.len(), pages.len());
        assert!(pages.iter().all(|page| page.meta_desc.chars().count() <= META_DESC_MAX_CHARS));
    }

    #[test]
    fn sample_scope_covers_one_city_treatments() {
        let pages = generate_manifest(&Catalog::builtin(), &ManifestScope::default());
        assert_eq!(pages.len(), 16);
        assert!(pages.iter().all(|page| page.city_slug == "dubai"));

        let unknown = ManifestScope::Sample {
            city: "atlantis".to_string(),
        };
        assert!(generate_manifest(&Catalog::builtin(), &unknown).is_empty());
    }

    #[test]
    fn preview_rows_follow_page_type_table() {
        let pages = generate_manifest(&doha_ivf_catalog(), &ManifestScope::Full);
        let rows = sitemap_preview(&pages);
        assert_eq!(rows.len(), pages.len());
        let first = rows.first().expect("rows");
        assert_eq!(first.priority, "0.8");
        assert_eq!(first.changefreq, "weekly");
        let last = rows.last().expect("rows");
        assert_eq!(last.priority, "0.6");
        assert_eq!(last.changefreq, "monthly");
    }
}
