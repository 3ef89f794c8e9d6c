//! The content module writes Markdown bodies for manifest pages. Every body is
//! assembled from independently randomized sections; the randomness comes from
//! a single seeded generator so a run can be reproduced exactly.

mod article;
mod landing;
mod phrases;

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, City, CostRange, Hospital, Treatment, title_case};
use crate::constants::DEFAULT_FLIGHT_HOURS;
use crate::page::Page;
use crate::{ContentTarget, PageType};

/// Names and figures a body is written about, resolved from the catalog.
pub(crate) struct PageContext<'a> {
    pub city: String,
    pub flight_hours: String,
    pub patient_names: Vec<String>,
    pub treatment: Cow<'a, Treatment>,
    pub headline: String,
}

impl<'a> PageContext<'a> {
    fn resolve(catalog: &'a Catalog, page: &Page) -> Self {
        let city = catalog.city(&page.country_slug, &page.city_slug).or_else(|| {
            catalog
                .find_city(&page.city_slug)
                .map(|(_, city)| city)
        });

        let treatment = match page.treatment_slug.as_deref() {
            Some(slug) => match catalog.treatment(slug) {
                Some(treatment) => Cow::Borrowed(treatment),
                None => {
                    warn!("Treatment {slug} is not in the catalog, using default costs");
                    Cow::Owned(Treatment::fallback(slug))
                }
            },
            None => Cow::Owned(Treatment::fallback("medical-treatment")),
        };

        let headline = page
            .article_slug
            .as_deref()
            .map(|slug| title_case(&slug.replace('-', " ")))
            .unwrap_or_else(|| page.h1.clone());

        Self {
            city: city.map_or_else(
                || title_case(&page.city_slug.replace('-', " ")),
                |city| city.name.clone(),
            ),
            flight_hours: city.map_or(DEFAULT_FLIGHT_HOURS, City::flight_hours).to_string(),
            patient_names: city
                .map(|city| city.patient_names.clone())
                .filter(|names| !names.is_empty())
                .unwrap_or_else(|| {
                    phrases::FALLBACK_PATIENT_NAMES
                        .iter()
                        .map(|name| name.to_string())
                        .collect()
                }),
            treatment,
            headline,
        }
    }

    fn treatment_name(&self) -> &str {
        &self.treatment.name
    }

    /// Substitutes the page placeholders in a phrase.
    fn fill(&self, phrase: &str) -> String {
        phrase
            .replace("{city}", &self.city)
            .replace("{treatment}", self.treatment_name())
            .replace("{flight}", &self.flight_hours)
    }
}

/// Writes page bodies with seeded randomness.
pub struct ContentGenerator<'a> {
    catalog: &'a Catalog,
    rng: StdRng,
    now: DateTime<Utc>,
}

impl<'a> ContentGenerator<'a> {
    /// Creates a generator. Without a seed the generator is seeded from system entropy.
    pub fn new(catalog: &'a Catalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog,
            rng,
            now: Utc::now(),
        }
    }

    /// Fixes the timestamp used for `generated_at` and "Last Updated".
    #[must_use]
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Writes the Markdown body of a page.
    pub fn generate(&mut self, page: &Page) -> String {
        let context = PageContext::resolve(self.catalog, page);
        match page.page_type {
            PageType::Article => article::render(self, &context),
            PageType::TreatmentLanding => landing::render_treatment(self, &context),
            PageType::CityLanding => landing::render_city(self, &context),
        }
    }

    /// Returns a copy of the page carrying a freshly generated body.
    pub fn enrich(&mut self, page: &Page) -> Page {
        let mut enriched = page.clone();
        enriched.apply_content(self.generate(page), self.now);
        enriched
    }

    /// Generates bodies for the pages selected by `target`, in manifest order.
    ///
    /// # Arguments
    ///
    /// * `pages` - Manifest pages
    /// * `target` - Which pages to write
    /// * `limit` - Maximum number of pages to write, `None` for all of them
    ///
    /// # Returns
    ///
    /// The selected pages with `full_content`, `word_count` and `generated_at` set.
    pub fn enrich_all(
        &mut self,
        pages: &[Page],
        target: &ContentTarget,
        limit: Option<usize>,
    ) -> Vec<Page> {
        let selected: Vec<&Page> = pages
            .iter()
            .filter(|page| match target {
                ContentTarget::All => true,
                ContentTarget::Type(page_type) => page.page_type == *page_type,
                ContentTarget::Page { url } => page.url == *url,
            })
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        let total = selected.len();
        let enriched: Vec<Page> = selected
            .into_iter()
            .enumerate()
            .map(|(index, page)| {
                debug!("[{}/{}] Generating {}", index + 1, total, page.url);
                self.enrich(page)
            })
            .collect();

        if let Some(average) = enriched
            .iter()
            .filter_map(|page| page.word_count)
            .sum::<usize>()
            .checked_div(enriched.len())
        {
            info!("Generated {} bodies, {} words on average", enriched.len(), average);
        }
        enriched
    }

    fn choose(&mut self, options: &[&'static str]) -> &'static str {
        options.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Picks a phrase and fills in the page placeholders.
    fn phrase(&mut self, options: &[&'static str], context: &PageContext<'_>) -> String {
        let phrase = self.choose(options);
        context.fill(phrase)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    /// Hospitals listed for a treatment: up to three specialty matches, else three at random.
    fn hospitals(&mut self, treatment_name: &str) -> Vec<&'a Hospital> {
        let matched = self.catalog.hospitals_for(treatment_name);
        if matched.is_empty() {
            self.catalog
                .hospitals
                .choose_multiple(&mut self.rng, 3)
                .collect()
        } else {
            matched.into_iter().take(3).collect()
        }
    }

    fn last_updated(&self) -> String {
        self.now.format("%B %Y").to_string()
    }

    fn brand_contacts(&self) -> (&'a str, &'a str) {
        (&self.catalog.brand.whatsapp, &self.catalog.brand.email)
    }

    fn brand_name(&self) -> &'a str {
        &self.catalog.brand.name
    }

    /// Numbered list of catalog treatments with their average saving.
    fn popular_treatments(&self) -> String {
        self.catalog
            .treatments
            .iter()
            .enumerate()
            .map(|(index, treatment)| {
                format!(
                    "{}. **{}** — Save {}+ on average compared to GCC prices",
                    index + 1,
                    treatment.name,
                    format_usd(average_savings(treatment))
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats whole dollars with thousands separators, e.g. `$15,000`.
pub fn format_usd(amount: u32) -> String {
    format!("${}", group_thousands(amount))
}

/// Formats a cost range as `$min-$max` with thousands separators.
pub fn format_usd_range(range: CostRange) -> String {
    format!("{}-{}", format_usd(range.min), format_usd(range.max))
}

/// Formats a number with comma thousands separators.
pub fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Average saving of the India range over the GCC range, using integer midpoints.
pub fn average_savings(treatment: &Treatment) -> u32 {
    treatment
        .cost_gcc
        .midpoint()
        .saturating_sub(treatment.cost_india.midpoint())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ManifestScope, generate_manifest};
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).single().expect("valid date")
    }

    #[test]
    fn usd_amounts_are_grouped() {
        assert_eq!(format_usd(500), "$500");
        assert_eq!(format_usd(15_000), "$15,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
        assert_eq!(format_usd_range(CostRange::new(25_000, 80_000)), "$25,000-$80,000");
    }

    #[test]
    fn savings_use_integer_midpoints() {
        let treatment = Treatment::fallback("unknown-procedure");
        assert_eq!(average_savings(&treatment), 16_500);

        let catalog = Catalog::builtin();
        let ivf = catalog.treatment("ivf").expect("ivf is builtin");
        assert_eq!(average_savings(ivf), 11_500 - 3_750);
    }

    #[test]
    fn same_seed_gives_same_bodies() {
        let catalog = Catalog::builtin();
        let pages = generate_manifest(&catalog, &ManifestScope::Full);
        let sample: Vec<Page> = pages.into_iter().take(40).collect();

        let first = ContentGenerator::new(&catalog, Some(7))
            .with_clock(fixed_clock())
            .enrich_all(&sample, &ContentTarget::All, None);
        let second = ContentGenerator::new(&catalog, Some(7))
            .with_clock(fixed_clock())
            .enrich_all(&sample, &ContentTarget::All, None);

        assert_eq!(first, second);
    }

    #[test]
    fn article_body_has_cost_table_and_footer() {
        let catalog = Catalog::builtin();
        let page = generate_manifest(&catalog, &ManifestScope::Full)
            .into_iter()
            .find(|page| page.page_type == PageType::Article && page.city_slug == "doha")
            .expect("doha article");

        let body = ContentGenerator::new(&catalog, Some(1))
            .with_clock(fixed_clock())
            .generate(&page);

        assert!(body.starts_with("# Understanding Cabg Procedure Costs Recovery"));
        assert!(body.contains("| Procedure Cost | $25,000-$50,000 | $5,000-$12,000 | 70-80% |"));
        assert!(body.contains("**Total Average Savings** | - | - | **$29,000+**"));
        assert!(body.contains("~3.5 hours"));
        assert!(body.contains("*Last Updated: March 2025*"));
    }

    #[test]
    fn unknown_treatment_falls_back_to_default_costs() {
        let catalog = Catalog::builtin();
        let mut page = generate_manifest(&catalog, &ManifestScope::default())
            .into_iter()
            .next()
            .expect("sample page");
        page.treatment_slug = Some("sleep-medicine".to_string());

        let body = ContentGenerator::new(&catalog, Some(3)).generate(&page);
        assert!(body.contains("$15,000-$30,000"));
        assert!(body.contains("Sleep Medicine"));
    }

    #[test]
    fn target_and_limit_select_pages() {
        let catalog = Catalog::builtin();
        let pages = generate_manifest(&catalog, &ManifestScope::Full);
        let mut generator = ContentGenerator::new(&catalog, Some(5));

        let target = ContentTarget::Type(PageType::Article);
        let articles = generator.enrich_all(&pages, &target, Some(10));
        assert_eq!(articles.len(), 10);
        assert!(articles.iter().all(|page| page.page_type == PageType::Article));
        assert!(articles.iter().all(|page| page.word_count.unwrap_or_default() > 500));

        let url = pages.first().map(|page| page.url.clone()).expect("pages");
        let single = generator.enrich_all(&pages, &ContentTarget::Page { url }, None);
        assert_eq!(single.len(), 1);
    }
}
