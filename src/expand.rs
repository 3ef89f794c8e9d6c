//! The expand module grows previously generated content files with new cities
//! and treatments, and prepares the city listings of the per-country patient
//! pages.

use std::path::Path;

use anyhow::Result;
use log::{info, warn};
use serde::Serialize;

use crate::catalog::{Catalog, City, Country, Treatment, expansion_cities, expansion_treatments};
use crate::constants::{CONTENT_ARTICLES_FILE, CONTENT_CITIES_FILE, CONTENT_TREATMENTS_FILE};
use crate::content::{ContentGenerator, format_usd_range};
use crate::jsonld::{article_json_ld, city_json_ld, treatment_json_ld};
use crate::page::{Page, PageKey};
use crate::routes::page_url;
use crate::store::{MergeMode, MergeStats, load_pages, load_pages_or_empty, merge_pages, save_json};
use crate::Locale;

/// Localized texts of a template article. `{treatment}` and `{city}` are
/// replaced with the names of the page's locale.
pub struct ArticleTemplate {
    pub slug: &'static str,
    pub title: (&'static str, &'static str),
    pub h1: (&'static str, &'static str),
    pub meta_desc: (&'static str, &'static str),
}

impl ArticleTemplate {
    fn render(
        text: (&'static str, &'static str),
        locale: Locale,
        treatment: &str,
        city: &str,
    ) -> String {
        locale
            .pick(text.0, text.1)
            .replace("{treatment}", treatment)
            .replace("{city}", city)
    }
}

/// Articles written for every city and treatment an expansion adds.
pub const ARTICLE_TEMPLATES: [ArticleTemplate; 5] = [
    ArticleTemplate {
        slug: "complete-guide",
        title: (
            "Complete Guide to {treatment} in India for {city} Patients",
            "دليل كامل لـ {treatment} في الهند لمرضى {city}",
        ),
        h1: (
            "The Ultimate Guide to {treatment} for {city} Residents",
            "الدليل النهائي لـ {treatment} لسكان {city}",
        ),
        meta_desc: (
            "Comprehensive guide to {treatment} in India for {city} patients. Learn about top hospitals, costs, success rates, and complete travel assistance.",
            "دليل شامل لـ {treatment} في الهند لمرضى {city}. تعرف على أفضل المستشفيات والتكاليف ومعدلات النجاح والمساعدة الكاملة في السفر.",
        ),
    },
    ArticleTemplate {
        slug: "cost-comparison",
        title: (
            "Cost of {treatment} in India vs {city}: Detailed Comparison",
            "تكلفة {treatment} في الهند مقابل {city}: مقارنة تفصيلية",
        ),
        h1: (
            "{treatment} Cost Comparison: India vs {city}",
            "مقارنة تكلفة {treatment}: الهند مقابل {city}",
        ),
        meta_desc: (
            "Compare {treatment} costs between India and {city}. Save 60-70% with world-class treatment. Includes hospital fees, travel, and stay costs.",
            "قارن تكاليف {treatment} بين الهند و{city}. وفر 60-70٪ مع علاج عالمي المستوى. يشمل رسوم المستشفى والسفر والإقامة.",
        ),
    },
    ArticleTemplate {
        slug: "top-hospitals",
        title: (
            "Top 10 Hospitals for {treatment} in India - {city} Patient Guide",
            "أفضل 10 مستشفيات لـ {treatment} في الهند - دليل مرضى {city}",
        ),
        h1: (
            "Best Hospitals for {treatment} for {city} Patients",
            "أفضل المستشفيات لـ {treatment} لمرضى {city}",
        ),
        meta_desc: (
            "Discover the top 10 hospitals in India for {treatment}. JCI-accredited facilities, expert doctors, and complete support for {city} patients.",
            "اكتشف أفضل 10 مستشفيات في الهند لـ {treatment}. مرافق معتمدة من JCI وأطباء خبراء ودعم كامل لمرضى {city}.",
        ),
    },
    ArticleTemplate {
        slug: "success-stories",
        title: (
            "{city} Patient Success Stories: {treatment} in India",
            "قصص نجاح مرضى {city}: {treatment} في الهند",
        ),
        h1: (
            "Real {city} Patient Experiences with {treatment} in India",
            "تجارب حقيقية لمرضى {city} مع {treatment} في الهند",
        ),
        meta_desc: (
            "Read inspiring success stories from {city} patients who underwent {treatment} in India. Real experiences, results, and testimonials.",
            "اقرأ قصص نجاح ملهمة من مرضى {city} الذين خضعوا لـ {treatment} في الهند. تجارب حقيقية ونتائج وشهادات.",
        ),
    },
    ArticleTemplate {
        slug: "travel-guide",
        title: (
            "Travel Guide: {treatment} Medical Tourism from {city} to India",
            "دليل السفر: السياحة العلاجية لـ {treatment} من {city} إلى الهند",
        ),
        h1: (
            "Complete Travel Guide for {city} Patients Seeking {treatment}",
            "دليل السفر الكامل لمرضى {city} الباحثين عن {treatment}",
        ),
        meta_desc: (
            "Everything {city} patients need to know about traveling to India for {treatment}. Visa, flights, accommodation, and medical arrangements.",
            "كل ما يحتاج مرضى {city} معرفته عن السفر إلى الهند لـ {treatment}. التأشيرة والرحلات والإقامة والترتيبات الطبية.",
        ),
    },
];

/// Pages produced by an expansion, grouped by the content file they belong to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionPages {
    pub cities: Vec<Page>,
    pub treatments: Vec<Page>,
    pub articles: Vec<Page>,
}

impl ExpansionPages {
    pub fn len(&self) -> usize {
        self.cities.len() + self.treatments.len() + self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// City landing page of an expansion city.
pub fn expansion_city_page(
    catalog: &Catalog,
    country: &Country,
    city: &City,
    locale: Locale,
) -> Page {
    let key = PageKey::city(locale, &country.slug, &city.slug);
    let name = city.display_name(locale);
    let brand = catalog.brand.display_name(locale);

    let (title, meta_desc, h1) = match locale {
        Locale::En => (
            format!("Medical Tourism from {name} to India - {brand}"),
            format!(
                "Get world-class medical treatment from {name} to India. Save 60-70% on surgeries and treatments. 24/7 Arabic support and complete travel assistance."
            ),
            format!("Trusted Medical Tourism from {name} to India"),
        ),
        Locale::Ar => (
            format!("السياحة العلاجية من {name} إلى الهند - {brand}"),
            format!(
                "احصل على علاج طبي عالمي المستوى من {name} إلى الهند. وفر 60-70٪ على العمليات الجراحية والعلاجات. دعم عربي 24/7 ومساعدة كاملة في السفر."
            ),
            format!("السياحة العلاجية الموثوقة من {name} إلى الهند"),
        ),
    };

    let mut page = Page::draft(page_url(catalog.brand.origin(), &key), &key, title, meta_desc, h1);
    page.json_ld = Some(city_json_ld(catalog, country, city, locale));
    page
}

/// Treatment landing page of an expansion city or treatment.
pub fn expansion_treatment_page(
    catalog: &Catalog,
    country: &Country,
    city: &City,
    treatment: &Treatment,
    locale: Locale,
) -> Page {
    let key = PageKey::city(locale, &country.slug, &city.slug).treatment(&treatment.slug);
    let city_name = city.display_name(locale);
    let name = treatment.display_name(locale);
    let brand = catalog.brand.display_name(locale);
    let price = format_usd_range(treatment.cost_india);

    let (title, meta_desc, h1) = match locale {
        Locale::En => (
            format!("Best {name} in India for {city_name} Patients - {brand}"),
            format!(
                "Get {name} in India for {price}. JCI-accredited hospitals, 24/7 Arabic support for {city_name} patients."
            ),
            format!("Trusted {name} Packages for {city_name} Residents"),
        ),
        Locale::Ar => (
            format!("أفضل {name} في الهند لمرضى {city_name} - {brand}"),
            format!(
                "احصل على {name} في الهند بتكلفة {price}. مستشفيات معتمدة من JCI، دعم عربي 24/7 لمرضى {city_name}."
            ),
            format!("حزم {name} الموثوقة لسكان {city_name}"),
        ),
    };

    let mut page = Page::draft(page_url(catalog.brand.origin(), &key), &key, title, meta_desc, h1);
    page.json_ld = Some(treatment_json_ld(catalog, country, city, treatment, locale));
    page
}

/// Template article page of an expansion city or treatment.
pub fn template_article_page(
    catalog: &Catalog,
    country: &Country,
    city: &City,
    treatment: &Treatment,
    template: &ArticleTemplate,
    locale: Locale,
) -> Page {
    let key = PageKey::city(locale, &country.slug, &city.slug)
        .treatment(&treatment.slug)
        .article(template.slug);
    let (treatment_name, city_name) = (treatment.display_name(locale), city.display_name(locale));

    let mut page = Page::draft(
        page_url(catalog.brand.origin(), &key),
        &key,
        ArticleTemplate::render(template.title, locale, treatment_name, city_name),
        ArticleTemplate::render(template.meta_desc, locale, treatment_name, city_name),
        ArticleTemplate::render(template.h1, locale, treatment_name, city_name),
    );
    page.needs_medical_review = false;
    page.json_ld = Some(article_json_ld(catalog, city, treatment, template.slug, locale));
    page
}

/// A batch of cities crossed with treatments, applied on top of a base catalog.
pub struct Expansion {
    /// Base catalog plus the additions; bodies are written against it.
    pub catalog: Catalog,
    cities: Vec<(String, String)>,
    treatments: Vec<String>,
    city_pages: bool,
}

impl Expansion {
    /// New cities crossed with every treatment, including the new ones.
    /// Cities whose country is not in the base catalog are skipped.
    pub fn new_cities(base: &Catalog) -> Self {
        let additions = expansion_cities();
        let catalog = base
            .clone()
            .with_treatments(expansion_treatments())
            .with_cities(additions.clone());

        let cities: Vec<(String, String)> = additions
            .into_iter()
            .filter(|(country, city)| {
                let known = catalog.city(country, &city.slug).is_some();
                if !known {
                    warn!("Country {country} is not in the catalog, skipping {}", city.slug);
                }
                known
            })
            .map(|(country, city)| (country, city.slug))
            .collect();
        let treatments = catalog
            .treatments
            .iter()
            .map(|treatment| treatment.slug.clone())
            .collect();

        Self {
            catalog,
            cities,
            treatments,
            city_pages: true,
        }
    }

    /// New treatments crossed with the cities of the base catalog.
    pub fn new_treatments(base: &Catalog) -> Self {
        let additions = expansion_treatments();
        let treatments = additions.iter().map(|treatment| treatment.slug.clone()).collect();
        let cities = base
            .cities()
            .map(|(country, city)| (country.slug.clone(), city.slug.clone()))
            .collect();

        Self {
            catalog: base.clone().with_treatments(additions),
            cities,
            treatments,
            city_pages: false,
        }
    }

    /// Builds every page of the expansion with a generated body.
    ///
    /// # Arguments
    ///
    /// * `generator` - Body writer; must be built over `self.catalog`
    ///
    /// # Returns
    ///
    /// City, treatment and article pages in city, treatment, locale order.
    pub fn generate(&self, generator: &mut ContentGenerator<'_>) -> ExpansionPages {
        let mut pages = ExpansionPages::default();
        let catalog = &self.catalog;

        for (country_slug, city_slug) in &self.cities {
            let Some(country) = catalog.country(country_slug) else { continue };
            let Some(city) = catalog.city(country_slug, city_slug) else { continue };

            if self.city_pages {
                for locale in Locale::ALL {
                    let page = expansion_city_page(catalog, country, city, locale);
                    pages.cities.push(generator.enrich(&page));
                }
            }

            for treatment in self.treatments.iter().filter_map(|slug| catalog.treatment(slug)) {
                for locale in Locale::ALL {
                    let page = expansion_treatment_page(catalog, country, city, treatment, locale);
                    pages.treatments.push(generator.enrich(&page));
                }
                for template in &ARTICLE_TEMPLATES {
                    for locale in Locale::ALL {
                        let page = template_article_page(
                            catalog, country, city, treatment, template, locale,
                        );
                        pages.articles.push(generator.enrich(&page));
                    }
                }
            }
            info!("Expanded {}", city.name);
        }

        pages
    }
}

/// The three content files an expansion updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentFiles {
    pub cities: Vec<Page>,
    pub treatments: Vec<Page>,
    pub articles: Vec<Page>,
}

/// Merge counts per content file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionReport {
    pub cities: MergeStats,
    pub treatments: MergeStats,
    pub articles: MergeStats,
}

impl ContentFiles {
    /// Loads the content files of a directory. The city file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the treatment or article file is missing, or any file cannot be parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            cities: load_pages_or_empty(&dir.join(CONTENT_CITIES_FILE))?,
            treatments: load_pages(&dir.join(CONTENT_TREATMENTS_FILE))?,
            articles: load_pages(&dir.join(CONTENT_ARTICLES_FILE))?,
        })
    }

    /// Merges expansion pages into the loaded files.
    pub fn merge(&mut self, pages: ExpansionPages, mode: MergeMode) -> ExpansionReport {
        ExpansionReport {
            cities: merge_pages(&mut self.cities, pages.cities, mode),
            treatments: merge_pages(&mut self.treatments, pages.treatments, mode),
            articles: merge_pages(&mut self.articles, pages.articles, mode),
        }
    }

    /// Writes the files back. The city file is only written when it has pages.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<()> {
        if !self.cities.is_empty() {
            save_json(&dir.join(CONTENT_CITIES_FILE), &self.cities)?;
        }
        save_json(&dir.join(CONTENT_TREATMENTS_FILE), &self.treatments)?;
        save_json(&dir.join(CONTENT_ARTICLES_FILE), &self.articles)?;
        Ok(())
    }
}

/// Runs an expansion against the content files of `dir`.
///
/// # Arguments
///
/// * `dir` - Directory holding the content files
/// * `expansion` - Cities and treatments to add
/// * `generator` - Body writer over `expansion.catalog`
/// * `mode` - Upsert by URL or append
///
/// # Errors
///
/// Returns an error if a required content file is missing or a file cannot be written.
pub fn apply_expansion(
    dir: &Path,
    expansion: &Expansion,
    generator: &mut ContentGenerator<'_>,
    mode: MergeMode,
) -> Result<ExpansionReport> {
    let mut files = ContentFiles::load(dir)?;
    let pages = expansion.generate(generator);
    info!("Generated {} expansion pages", pages.len());

    let report = files.merge(pages, mode);
    files.save(dir)?;
    Ok(report)
}

/// A city listed on its country's patient page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientCity {
    pub slug: String,
    pub name: String,
    pub name_ar: String,
    pub population: Option<String>,
    pub flight_time: String,
}

/// City listing and keyword suggestions of one "for-{country}-patients" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientCountry {
    pub country_slug: String,
    pub name: String,
    pub name_ar: String,
    pub path: String,
    pub cities: Vec<PatientCity>,
    pub keywords: Vec<String>,
}

const PATIENT_KEYWORDS: [&str; 4] = [
    "{city} to India medical tourism",
    "{city} medical tourism",
    "{city} patients India",
    "{city} to Bangalore healthcare",
];

/// Patient page listings for every country of the catalog, in catalog order.
pub fn patient_cities(catalog: &Catalog) -> Vec<PatientCountry> {
    catalog
        .countries
        .iter()
        .map(|country| {
            let keywords = country
                .cities
                .iter()
                .zip(PATIENT_KEYWORDS.iter().cycle())
                .map(|(city, pattern)| pattern.replace("{city}", &city.name))
                .collect();

            PatientCountry {
                country_slug: country.slug.clone(),
                name: country.name.clone(),
                name_ar: country.name_ar.clone(),
                path: format!("for-{}-patients", country.slug),
                cities: country
                    .cities
                    .iter()
                    .map(|city| PatientCity {
                        slug: city.slug.clone(),
                        name: city.name.clone(),
                        name_ar: city.name_ar.clone(),
                        population: city.population.clone(),
                        flight_time: format!("{} hours", city.flight_hours()),
                    })
                    .collect(),
                keywords,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::META_DESC_MAX_CHARS;
    use crate::page::PageStatus;
    use crate::PageType;
    use std::collections::HashSet;

    fn qatar_only() -> Catalog {
        let mut catalog = Catalog::builtin();
        catalog.countries.retain(|country| country.slug == "qatar");
        catalog.treatments.retain(|treatment| treatment.slug == "ivf");
        catalog
    }

    #[test]
    fn new_cities_cover_every_treatment() {
        let expansion = Expansion::new_cities(&qatar_only());
        let mut generator = ContentGenerator::new(&expansion.catalog, Some(11));
        let pages = expansion.generate(&mut generator);

        // al-wakrah and al-khor, ivf plus six new treatments
        assert_eq!(pages.cities.len(), 2 * 2);
        assert_eq!(pages.treatments.len(), 2 * 7 * 2);
        assert_eq!(pages.articles.len(), 2 * 7 * 5 * 2);

        let city = pages.cities.first().expect("city page");
        assert_eq!(city.url, "https://shifaalhind.com/en/medical-tourism/qatar/al-wakrah");
        assert_eq!(city.h1, "Trusted Medical Tourism from Al Wakrah to India");
        assert_eq!(city.status, PageStatus::Generated);
        assert!(!city.needs_medical_review);
        assert!(city.full_content.is_some());

        let article = pages.articles.first().expect("article page");
        assert_eq!(article.article_slug.as_deref(), Some("complete-guide"));
        assert_eq!(
            article.title,
            "Complete Guide to IVF & Fertility Treatment in India for Al Wakrah Patients"
        );
        assert!(!article.needs_medical_review);
        assert!(pages.treatments.iter().all(|page| page.needs_medical_review));
    }

    #[test]
    fn arabic_pages_use_arabic_names() {
        let expansion = Expansion::new_cities(&qatar_only());
        let mut generator = ContentGenerator::new(&expansion.catalog, Some(2));
        let pages = expansion.generate(&mut generator);

        let arabic = pages
            .treatments
            .iter()
            .find(|page| page.locale == Locale::Ar)
            .expect("arabic treatment page");
        assert_eq!(
            arabic.title,
            "أفضل التلقيح الصناعي وعلاج الخصوبة في الهند لمرضى الوكرة - شفاء الهند"
        );
        assert!(arabic.needs_native_review);
        assert!(
            pages
                .articles
                .iter()
                .all(|page| page.meta_desc.chars().count() <= META_DESC_MAX_CHARS)
        );
    }

    #[test]
    fn treatment_meta_prices_use_thousands_separators() {
        let catalog = Catalog::extended();
        let qatar = catalog.country("qatar").expect("qatar");
        let doha = catalog.city("qatar", "doha").expect("doha");
        let transplant = catalog.treatment("organ-transplant").expect("organ transplant");

        let english = expansion_treatment_page(&catalog, qatar, doha, transplant, Locale::En);
        assert!(english.meta_desc.contains("$25,000-$80,000"), "{}", english.meta_desc);
        let arabic = expansion_treatment_page(&catalog, qatar, doha, transplant, Locale::Ar);
        assert!(arabic.meta_desc.contains("$25,000-$80,000"), "{}", arabic.meta_desc);
    }

    #[test]
    fn new_treatments_skip_city_pages() {
        let expansion = Expansion::new_treatments(&qatar_only());
        let mut generator = ContentGenerator::new(&expansion.catalog, Some(4));
        let pages = expansion.generate(&mut generator);

        assert!(pages.cities.is_empty());
        assert_eq!(pages.treatments.len(), 6 * 2);
        assert_eq!(pages.articles.len(), 6 * 5 * 2);
        assert!(pages.treatments.iter().all(|page| page.page_type == PageType::TreatmentLanding));
        assert!(pages.treatments.iter().all(|page| page.city_slug == "doha"));
    }

    #[test]
    fn rerun_with_upsert_keeps_urls_unique() {
        let expansion = Expansion::new_treatments(&qatar_only());
        let mut files = ContentFiles::default();

        for seed in [1, 2] {
            let mut generator = ContentGenerator::new(&expansion.catalog, Some(seed));
            files.merge(expansion.generate(&mut generator), MergeMode::Upsert);
        }

        let urls: HashSet<&str> = files.articles.iter().map(|page| page.url.as_str()).collect();
        assert_eq!(urls.len(), files.articles.len());
        assert_eq!(files.articles.len(), 60);
    }

    #[test]
    fn rerun_with_append_duplicates() {
        let expansion = Expansion::new_treatments(&qatar_only());
        let mut files = ContentFiles::default();

        let mut generator = ContentGenerator::new(&expansion.catalog, Some(1));
        files.merge(expansion.generate(&mut generator), MergeMode::Append);
        let report = files.merge(expansion.generate(&mut generator), MergeMode::Append);

        assert_eq!(report.treatments.added, 12);
        assert_eq!(files.treatments.len(), 24);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        save_json(&dir.path().join(CONTENT_TREATMENTS_FILE), &Vec::<Page>::new()).expect("saved");
        assert!(ContentFiles::load(dir.path()).is_err());

        save_json(&dir.path().join(CONTENT_ARTICLES_FILE), &Vec::<Page>::new()).expect("saved");
        let files = ContentFiles::load(dir.path()).expect("city file is optional");
        assert!(files.cities.is_empty());
    }

    #[test]
    fn patient_listing_cycles_keyword_patterns() {
        let countries = patient_cities(&Catalog::extended());
        let oman = countries
            .iter()
            .find(|country| country.country_slug == "oman")
            .expect("oman listing");

        assert_eq!(oman.path, "for-oman-patients");
        let names: Vec<&str> = oman.cities.iter().map(|city| city.name.as_str()).collect();
        assert_eq!(names, ["Muscat", "Sohar", "Salalah", "Nizwa"]);
        let flights: Vec<&str> = oman.cities.iter().map(|city| city.flight_time.as_str()).collect();
        assert_eq!(flights, ["3-4 hours", "3-4 hours", "4-5 hours", "3-4 hours"]);

        let kuwait = countries
            .iter()
            .find(|country| country.country_slug == "kuwait")
            .expect("kuwait listing");
        assert!(kuwait.cities.iter().all(|city| city.flight_time == "4-5 hours"));
        assert_eq!(
            oman.keywords,
            [
                "Muscat to India medical tourism",
                "Sohar medical tourism",
                "Salalah patients India",
                "Nizwa to Bangalore healthcare",
            ]
        );
    }
}
