//! The catalog module holds the static geography, treatment and hospital tables
//! every generator works from. A catalog is built once per run and passed
//! explicitly; nothing in the crate keeps its own copy of these tables.

use anyhow::{Context, Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

use crate::constants::{DEFAULT_FLIGHT_HOURS, DEFAULT_GCC_COST, DEFAULT_INDIA_COST, DEFAULT_SAVINGS};
use crate::{CatalogSource, Locale};

static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("Failed to compile slug regex")
});

/// Inclusive USD price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
}

impl CostRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Integer midpoint of the range, rounded down.
    pub const fn midpoint(self) -> u32 {
        u32::midpoint(self.min, self.max)
    }
}

/// Brand identity stamped on titles, JSON-LD and calls to action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default = "default_brand_name_ar")]
    pub name_ar: String,
    pub domain: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Shifa AlHind".to_string(),
            name_ar: default_brand_name_ar(),
            domain: "https://shifaalhind.com".to_string(),
            phone: "+91-80-12345678".to_string(),
            whatsapp: "+91-80-1234-5678".to_string(),
            email: "care@shifaalhind.com".to_string(),
        }
    }
}

fn default_brand_name_ar() -> String {
    "شفاء الهند".to_string()
}

impl Brand {
    pub fn display_name(&self, locale: Locale) -> &str {
        locale.pick(self.name.as_str(), self.name_ar.as_str())
    }

    /// Domain without a trailing slash.
    pub fn origin(&self) -> &str {
        self.domain.trim_end_matches('/')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub slug: String,
    pub name: String,
    pub name_ar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    /// Flight time to Bangalore in hours, e.g. "4.5" or "3-4".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_hours: Option<String>,
    /// First names used in testimonials for patients from this city.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patient_names: Vec<String>,
}

impl City {
    pub fn display_name(&self, locale: Locale) -> &str {
        locale.pick(self.name.as_str(), self.name_ar.as_str())
    }

    pub fn flight_hours(&self) -> &str {
        self.flight_hours.as_deref().unwrap_or(DEFAULT_FLIGHT_HOURS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub slug: String,
    pub name: String,
    pub name_ar: String,
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
    pub cities: Vec<City>,
}

impl Country {
    pub fn display_name(&self, locale: Locale) -> &str {
        locale.pick(self.name.as_str(), self.name_ar.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub slug: String,
    pub name: String,
    pub name_ar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    pub cost_gcc: CostRange,
    pub cost_india: CostRange,
    pub savings_percent: String,
    /// Article slugs in publication order. Empty means "derive from the slug".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub articles: Vec<String>,
}

impl Treatment {
    pub fn display_name(&self, locale: Locale) -> &str {
        locale.pick(self.name.as_str(), self.name_ar.as_str())
    }

    pub fn description(&self, locale: Locale) -> Option<&str> {
        locale
            .pick(self.description.as_deref(), self.description_ar.as_deref())
            .or(self.description.as_deref())
    }

    /// Article slugs for this treatment, falling back to five generic slugs.
    pub fn article_slugs(&self) -> Vec<String> {
        if !self.articles.is_empty() {
            return self.articles.clone();
        }

        let slug = &self.slug;
        vec![
            format!("{slug}-complete-guide"),
            format!("best-{slug}-hospitals-india"),
            format!("{slug}-cost-comparison"),
            format!("{slug}-recovery-tips"),
            format!("{slug}-success-stories"),
        ]
    }

    /// Cost data used when a page references a treatment missing from the catalog.
    pub fn fallback(slug: &str) -> Self {
        let name = title_case(&slug.replace('-', " "));
        Self {
            slug: slug.to_string(),
            name_ar: name.clone(),
            name,
            description: None,
            description_ar: None,
            cost_gcc: CostRange::new(DEFAULT_GCC_COST.0, DEFAULT_GCC_COST.1),
            cost_india: CostRange::new(DEFAULT_INDIA_COST.0, DEFAULT_INDIA_COST.1),
            savings_percent: DEFAULT_SAVINGS.to_string(),
            articles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub name: String,
    pub specialties: Vec<String>,
    pub surgeries_per_year: u32,
    pub success_rate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctors: Option<u32>,
    pub jci_accredited: bool,
    pub arabic_staff: bool,
}

impl Hospital {
    /// Whether any specialty and the treatment name contain one another, ignoring case.
    pub fn treats(&self, treatment_name: &str) -> bool {
        let treatment = treatment_name.to_lowercase();
        self.specialties.iter().any(|specialty| {
            let specialty = specialty.to_lowercase();
            treatment.contains(&specialty) || specialty.contains(&treatment)
        })
    }
}

/// Immutable generation input: brand, geography, treatments and partner hospitals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub brand: Brand,
    pub countries: Vec<Country>,
    pub treatments: Vec<Treatment>,
    #[serde(default = "builtin_hospitals")]
    pub hospitals: Vec<Hospital>,
}

impl Catalog {
    /// Resolves a catalog from its source.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog file cannot be read, parsed or fails validation.
    pub fn load(source: &CatalogSource) -> Result<Self> {
        match source {
            CatalogSource::Builtin => Ok(Self::builtin()),
            CatalogSource::Extended => Ok(Self::extended()),
            CatalogSource::File { path } => Self::from_file(path),
        }
    }

    /// Reads and validates a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid catalog or fails validation.
    pub fn from_file(path: &str) -> Result<Self> {
        let content =
            fs::read_to_string(path).context(format!("Failed to read catalog file: {path}"))?;
        let catalog: Self = serde_json::from_str(&content)
            .context(format!("Failed to parse catalog file: {path}"))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks slug syntax, slug uniqueness and cost range ordering.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut city_slugs = HashSet::new();
        let mut country_slugs = HashSet::new();
        for country in &self.countries {
            check_slug(&country.slug)?;
            if !country_slugs.insert(country.slug.as_str()) {
                return Err(anyhow!("Duplicate country slug: {}", country.slug));
            }
            for city in &country.cities {
                check_slug(&city.slug)?;
                if !city_slugs.insert(city.slug.as_str()) {
                    return Err(anyhow!("Duplicate city slug: {}", city.slug));
                }
            }
        }

        let mut treatment_slugs = HashSet::new();
        for treatment in &self.treatments {
            check_slug(&treatment.slug)?;
            if !treatment_slugs.insert(treatment.slug.as_str()) {
                return Err(anyhow!("Duplicate treatment slug: {}", treatment.slug));
            }
            for range in [treatment.cost_gcc, treatment.cost_india] {
                if range.min > range.max {
                    return Err(anyhow!(
                        "Invalid cost range {}-{} for treatment {}",
                        range.min,
                        range.max,
                        treatment.slug
                    ));
                }
            }
            let mut article_slugs = HashSet::new();
            for article in &treatment.articles {
                check_slug(article)?;
                if !article_slugs.insert(article.as_str()) {
                    return Err(anyhow!(
                        "Duplicate article slug {article} for treatment {}",
                        treatment.slug
                    ));
                }
            }
        }

        Ok(())
    }

    /// All (country, city) pairs in catalog order.
    pub fn cities(&self) -> impl Iterator<Item = (&Country, &City)> {
        self.countries
            .iter()
            .flat_map(|country| country.cities.iter().map(move |city| (country, city)))
    }

    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|country| country.cities.len()).sum()
    }

    pub fn country(&self, slug: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.slug == slug)
    }

    pub fn city(&self, country_slug: &str, city_slug: &str) -> Option<&City> {
        self.country(country_slug)?
            .cities
            .iter()
            .find(|city| city.slug == city_slug)
    }

    /// Finds a city by slug regardless of its country.
    pub fn find_city(&self, city_slug: &str) -> Option<(&Country, &City)> {
        self.cities().find(|(_, city)| city.slug == city_slug)
    }

    pub fn treatment(&self, slug: &str) -> Option<&Treatment> {
        self.treatments.iter().find(|treatment| treatment.slug == slug)
    }

    /// Hospitals whose specialties match the treatment, in catalog order.
    pub fn hospitals_for(&self, treatment_name: &str) -> Vec<&Hospital> {
        self.hospitals
            .iter()
            .filter(|hospital| hospital.treats(treatment_name))
            .collect()
    }

    /// Locale home page URL, e.g. `https://shifaalhind.com/en`.
    pub fn home_url(&self, locale: Locale) -> String {
        format!("{}/{}", self.brand.origin(), locale)
    }

    /// Adds cities to existing countries, skipping cities whose slug already exists.
    pub fn with_cities(mut self, additions: Vec<(String, City)>) -> Self {
        for (country_slug, city) in additions {
            if self.find_city(&city.slug).is_some() {
                continue;
            }
            if let Some(country) = self
                .countries
                .iter_mut()
                .find(|country| country.slug == country_slug)
            {
                country.cities.push(city);
            }
        }
        self
    }

    /// Appends treatments, skipping slugs already present.
    pub fn with_treatments(mut self, additions: Vec<Treatment>) -> Self {
        for treatment in additions {
            if self.treatment(&treatment.slug).is_none() {
                self.treatments.push(treatment);
            }
        }
        self
    }

    /// The original six-country, ten-city, eight-treatment catalog.
    pub fn builtin() -> Self {
        Self {
            brand: Brand::default(),
            countries: builtin_countries(),
            treatments: builtin_treatments(),
            hospitals: builtin_hospitals(),
        }
    }

    /// The builtin catalog with every expansion city and treatment applied.
    pub fn extended() -> Self {
        Self::builtin()
            .with_cities(expansion_cities())
            .with_treatments(expansion_treatments())
    }
}

fn check_slug(slug: &str) -> Result<()> {
    if SLUG_REGEX.is_match(slug) {
        Ok(())
    } else {
        Err(anyhow!("Invalid slug: {slug:?}"))
    }
}

/// Capitalizes the first letter of every space separated word and lowercases the rest.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn city(
    slug: &str,
    name: &str,
    name_ar: &str,
    flight_hours: Option<&str>,
    population: Option<&str>,
    patient_names: &[&str],
) -> City {
    City {
        slug: slug.to_string(),
        name: name.to_string(),
        name_ar: name_ar.to_string(),
        population: population.map(str::to_string),
        flight_hours: flight_hours.map(str::to_string),
        patient_names: patient_names.iter().map(|name| name.to_string()).collect(),
    }
}

fn country(slug: &str, name: &str, name_ar: &str, code: &str, cities: Vec<City>) -> Country {
    Country {
        slug: slug.to_string(),
        name: name.to_string(),
        name_ar: name_ar.to_string(),
        code: code.to_string(),
        cities,
    }
}

fn treatment(
    (slug, name, name_ar): (&str, &str, &str),
    cost_gcc: CostRange,
    cost_india: CostRange,
    savings_percent: &str,
    articles: &[&str],
) -> Treatment {
    Treatment {
        slug: slug.to_string(),
        name: name.to_string(),
        name_ar: name_ar.to_string(),
        description: None,
        description_ar: None,
        cost_gcc,
        cost_india,
        savings_percent: savings_percent.to_string(),
        articles: articles.iter().map(|slug| slug.to_string()).collect(),
    }
}

fn builtin_countries() -> Vec<Country> {
    vec![
        country(
            "saudi-arabia",
            "Saudi Arabia",
            "المملكة العربية السعودية",
            "SA",
            vec![
                city(
                    "riyadh",
                    "Riyadh",
                    "الرياض",
                    Some("4.5"),
                    None,
                    &["Abdullah", "Fatima", "Mohammed"],
                ),
                city("jeddah", "Jeddah", "جدة", Some("5"), None, &["Ahmed", "Aisha", "Khalid"]),
                city("dammam", "Dammam", "الدمام", Some("4"), None, &["Omar", "Layla", "Saeed"]),
            ],
        ),
        country(
            "united-arab-emirates",
            "United Arab Emirates",
            "الإمارات العربية المتحدة",
            "AE",
            vec![
                city("dubai", "Dubai", "دبي", Some("3.5"), None, &["Hassan", "Mariam", "Ali"]),
                city(
                    "abu-dhabi",
                    "Abu Dhabi",
                    "أبو ظبي",
                    Some("3.5"),
                    None,
                    &["Rashid", "Noura", "Youssef"],
                ),
                city(
                    "sharjah",
                    "Sharjah",
                    "الشارقة",
                    Some("3.5"),
                    None,
                    &["Tariq", "Huda", "Majid"],
                ),
            ],
        ),
        country(
            "qatar",
            "Qatar",
            "قطر",
            "QA",
            vec![city("doha", "Doha", "الدوحة", Some("3.5"), None, &["Hamad", "Sara", "Nasser"])],
        ),
        country(
            "oman",
            "Oman",
            "عُمان",
            "OM",
            vec![city(
                "muscat",
                "Muscat",
                "مسقط",
                Some("3-4"),
                Some("1.7M"),
                &["Salim", "Latifa", "Ibrahim"],
            )],
        ),
        country(
            "kuwait",
            "Kuwait",
            "الكويت",
            "KW",
            vec![city(
                "kuwait-city",
                "Kuwait City",
                "مدينة الكويت",
                Some("4-5"),
                Some("4.3M"),
                &["Faisal", "Dalal", "Khaled"],
            )],
        ),
        country(
            "bahrain",
            "Bahrain",
            "البحرين",
            "BH",
            vec![city(
                "manama",
                "Manama",
                "المنامة",
                Some("4-5"),
                Some("640K"),
                &["Ebrahim", "Zahra", "Abdulla"],
            )],
        ),
    ]
}

fn builtin_treatments() -> Vec<Treatment> {
    let mut treatments = core_treatments();
    treatments.extend(specialty_treatments());
    treatments
}

fn core_treatments() -> Vec<Treatment> {
    vec![
        treatment(
            ("heart-surgery", "Heart Surgery", "جراحة القلب"),
            CostRange::new(25_000, 50_000),
            CostRange::new(5_000, 12_000),
            "70-80%",
            &[
                "understanding-cabg-procedure-costs-recovery",
                "best-heart-hospitals-india-gcc-patients",
                "heart-valve-replacement-complete-guide",
                "preparing-for-heart-surgery-india",
                "post-heart-surgery-care-recovery-tips",
            ],
        ),
        treatment(
            ("knee-replacement", "Knee Replacement", "استبدال الركبة"),
            CostRange::new(15_000, 30_000),
            CostRange::new(4_000, 8_000),
            "65-75%",
            &[
                "knee-replacement-surgery-complete-guide",
                "best-orthopedic-hospitals-india",
                "knee-replacement-recovery-timeline",
                "partial-vs-total-knee-replacement",
                "preparing-for-knee-surgery-india",
            ],
        ),
        treatment(
            ("ivf", "IVF & Fertility Treatment", "التلقيح الصناعي وعلاج الخصوبة"),
            CostRange::new(8_000, 15_000),
            CostRange::new(2_500, 5_000),
            "60-70%",
            &[
                "ivf-treatment-success-rates-india",
                "best-fertility-clinics-india-gcc",
                "ivf-cost-comparison-gcc-vs-india",
                "preparing-for-ivf-treatment-india",
                "ivf-success-stories-gcc-patients",
            ],
        ),
        treatment(
            ("dental-implants", "Dental Implants", "زراعة الأسنان"),
            CostRange::new(2_000, 5_000),
            CostRange::new(500, 1_500),
            "65-75%",
            &[
                "dental-implants-procedure-complete-guide",
                "best-dental-clinics-india",
                "dental-implants-cost-comparison",
                "all-on-4-dental-implants-guide",
                "dental-tourism-india-gcc-patients",
            ],
        ),
    ]
}

fn specialty_treatments() -> Vec<Treatment> {
    vec![
        treatment(
            ("hair-transplant", "Hair Transplant", "زراعة الشعر"),
            CostRange::new(5_000, 15_000),
            CostRange::new(1_500, 4_000),
            "65-75%",
            &[
                "fue-hair-transplant-complete-guide",
                "best-hair-transplant-clinics-india",
                "hair-transplant-cost-india-vs-gcc",
                "hair-transplant-recovery-timeline",
                "hair-transplant-success-stories",
            ],
        ),
        treatment(
            ("cosmetic-surgery", "Cosmetic Surgery", "الجراحة التجميلية"),
            CostRange::new(8_000, 20_000),
            CostRange::new(2_000, 6_000),
            "65-75%",
            &[
                "cosmetic-surgery-india-complete-guide",
                "best-plastic-surgeons-india",
                "rhinoplasty-nose-surgery-guide",
                "liposuction-procedure-costs-recovery",
                "cosmetic-surgery-safety-india",
            ],
        ),
        treatment(
            ("oncology-treatment", "Cancer Treatment", "علاج السرطان"),
            CostRange::new(30_000, 100_000),
            CostRange::new(8_000, 25_000),
            "70-80%",
            &[
                "cancer-treatment-india-complete-guide",
                "best-cancer-hospitals-india",
                "chemotherapy-radiation-india",
                "cancer-surgery-options-india",
                "cancer-treatment-costs-india-gcc",
            ],
        ),
        treatment(
            ("bariatric-surgery", "Bariatric Surgery", "جراحة السمنة"),
            CostRange::new(15_000, 30_000),
            CostRange::new(4_000, 8_000),
            "65-75%",
            &[
                "bariatric-surgery-weight-loss-guide",
                "gastric-bypass-vs-sleeve-gastrectomy",
                "best-bariatric-surgeons-india",
                "bariatric-surgery-recovery-tips",
                "bariatric-surgery-costs-india",
            ],
        ),
    ]
}

fn hospital(
    name: &str,
    specialties: [&str; 3],
    surgeries_per_year: u32,
    success_rate: &str,
    established: Option<u16>,
    doctors: Option<u32>,
) -> Hospital {
    Hospital {
        name: name.to_string(),
        specialties: specialties.iter().map(|specialty| specialty.to_string()).collect(),
        surgeries_per_year,
        success_rate: success_rate.to_string(),
        established,
        doctors,
        jci_accredited: true,
        arabic_staff: true,
    }
}

/// Partner hospitals in Bangalore.
pub fn builtin_hospitals() -> Vec<Hospital> {
    vec![
        hospital(
            "Narayana Health City",
            ["Cardiac Surgery", "Oncology", "Orthopedics"],
            12_000,
            "98.5%",
            Some(2001),
            Some(1_200),
        ),
        hospital(
            "Manipal Hospital",
            ["Fertility", "Cosmetic Surgery", "Bariatric Surgery"],
            8_500,
            "97.2%",
            Some(1991),
            Some(850),
        ),
        hospital(
            "Apollo Hospital",
            ["Heart Surgery", "Cancer Treatment", "Knee Replacement"],
            10_200,
            "98.1%",
            Some(1997),
            Some(950),
        ),
        hospital(
            "Fortis Hospital",
            ["Dental Implants", "IVF", "Hair Transplant"],
            6_800,
            "96.8%",
            Some(2006),
            Some(680),
        ),
        hospital(
            "Aster CMI Hospital",
            ["Orthopedics", "Oncology", "Cardiac Care"],
            7_500,
            "97.5%",
            None,
            None,
        ),
    ]
}

/// Cities added by the coverage expansion, paired with their country slug.
pub fn expansion_cities() -> Vec<(String, City)> {
    let uae = "united-arab-emirates";
    let saudi = "saudi-arabia";
    [
        (uae, city("ajman", "Ajman", "عجمان", None, Some("540K"), &[])),
        (uae, city("ras-al-khaimah", "Ras Al Khaimah", "رأس الخيمة", None, Some("400K"), &[])),
        (uae, city("fujairah", "Fujairah", "الفجيرة", None, Some("260K"), &[])),
        (uae, city("al-ain", "Al Ain", "العين", None, Some("850K"), &[])),
        (saudi, city("khobar", "Khobar", "الخبر", None, Some("730K"), &[])),
        (saudi, city("mecca", "Mecca", "مكة", None, Some("2.0M"), &[])),
        (saudi, city("medina", "Medina", "المدينة", None, Some("1.5M"), &[])),
        (saudi, city("taif", "Taif", "الطائف", None, Some("690K"), &[])),
        (saudi, city("tabuk", "Tabuk", "تبوك", None, Some("570K"), &[])),
        ("qatar", city("al-wakrah", "Al Wakrah", "الوكرة", None, Some("300K"), &[])),
        ("qatar", city("al-khor", "Al Khor", "الخور", None, Some("200K"), &[])),
        ("oman", city("sohar", "Sohar", "صحار", Some("3-4"), Some("230K"), &[])),
        ("oman", city("salalah", "Salalah", "صلالة", Some("4-5"), Some("330K"), &[])),
        ("oman", city("nizwa", "Nizwa", "نزوى", Some("3-4"), Some("100K"), &[])),
        ("kuwait", city("hawalli", "Hawalli", "حولي", Some("4-5"), Some("165K"), &[])),
        ("kuwait", city("salmiya", "Salmiya", "السالمية", Some("4-5"), Some("150K"), &[])),
        ("kuwait", city("farwaniya", "Farwaniya", "الفروانية", Some("4-5"), Some("900K"), &[])),
        ("bahrain", city("muharraq", "Muharraq", "المحرق", Some("4-5"), Some("230K"), &[])),
        ("bahrain", city("riffa", "Riffa", "الرفاع", Some("4-5"), Some("120K"), &[])),
    ]
    .into_iter()
    .map(|(country, city)| (country.to_string(), city))
    .collect()
}

fn priced_treatment(
    (slug, name, name_ar): (&str, &str, &str),
    (description, description_ar): (&str, &str),
    price_min: u32,
    price_max: u32,
) -> Treatment {
    Treatment {
        slug: slug.to_string(),
        name: name.to_string(),
        name_ar: name_ar.to_string(),
        description: Some(description.to_string()),
        description_ar: Some(description_ar.to_string()),
        cost_gcc: CostRange::new(price_max * 3, price_max * 4),
        cost_india: CostRange::new(price_min, price_max),
        savings_percent: DEFAULT_SAVINGS.to_string(),
        articles: Vec::new(),
    }
}

/// Treatments added by the missing-content generation. GCC prices are
/// three to four times the top of the India range.
pub fn expansion_treatments() -> Vec<Treatment> {
    vec![
        priced_treatment(
            ("neurology", "Neurology & Brain Care", "جراحة الأعصاب والمخ"),
            (
                "Advanced neurology and brain care treatments including brain surgery, spine surgery, stroke treatment, and neurological disorder management",
                "علاجات متقدمة للأعصاب والمخ تشمل جراحة الدماغ وجراحة العمود الفقري وعلاج السكتة الدماغية وإدارة الاضطرابات العصبية",
            ),
            6_000,
            18_000,
        ),
        priced_treatment(
            ("ophthalmology", "Eye Care & Ophthalmology", "طب وجراحة العيون"),
            (
                "Comprehensive eye care including LASIK, cataract surgery, retinal treatments, glaucoma management, and corneal transplants",
                "رعاية شاملة للعيون تشمل الليزك وجراحة الساد وعلاجات الشبكية وإدارة الجلوكوما وزرع القرنية",
            ),
            1_500,
            8_000,
        ),
        priced_treatment(
            ("gastroenterology", "Gastroenterology & Digestive Care", "أمراض الجهاز الهضمي"),
            (
                "Advanced treatments for digestive disorders including endoscopy, colonoscopy, liver disease treatment, IBD management, and GI surgery",
                "علاجات متقدمة لاضطرابات الجهاز الهضمي تشمل التنظير والتنظير القولوني وعلاج أمراض الكبد وإدارة IBD وجراحة الجهاز الهضمي",
            ),
            2_000,
            12_000,
        ),
        priced_treatment(
            ("organ-transplant", "Organ Transplant", "زراعة الأعضاء"),
            (
                "Life-saving organ transplant surgeries including kidney, liver, heart, and lung transplants with comprehensive pre and post-operative care",
                "جراحات زرع الأعضاء المنقذة للحياة بما في ذلك زرع الكلى والكبد والقلب والرئة مع رعاية شاملة قبل وبعد العملية",
            ),
            25_000,
            80_000,
        ),
        priced_treatment(
            ("ent-hearing", "ENT & Hearing Solutions", "الأنف والأذن والحنجرة والسمع"),
            (
                "Comprehensive ENT care including hearing loss treatment, cochlear implants, sinus surgery, throat disorders, and voice restoration",
                "رعاية شاملة للأنف والأذن والحنجرة تشمل علاج فقدان السمع وزراعة القوقعة وجراحة الجيوب الأنفية واضطرابات الحلق واستعادة الصوت",
            ),
            2_500,
            15_000,
        ),
        priced_treatment(
            ("ayurveda-wellness", "Ayurveda & Wellness", "الأيورفيدا والعافية"),
            (
                "Traditional Ayurvedic treatments and wellness programs including Panchakarma, rejuvenation therapies, chronic disease management, and holistic healing",
                "علاجات أيورفيدا التقليدية وبرامج العافية بما في ذلك بانشاكارما وعلاجات التجديد وإدارة الأمراض المزمنة والشفاء الشامل",
            ),
            1_000,
            5_000,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_ten_cities_and_eight_treatments() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.city_count(), 10);
        assert_eq!(catalog.treatments.len(), 8);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn extended_catalog_adds_expansion_entries() {
        let catalog = Catalog::extended();
        assert_eq!(catalog.city_count(), 29);
        assert_eq!(catalog.treatments.len(), 14);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn fallback_article_slugs_derive_from_treatment_slug() {
        let treatment = Treatment::fallback("neurology");
        assert_eq!(treatment.name, "Neurology");
        assert_eq!(
            treatment.article_slugs().first().map(String::as_str),
            Some("neurology-complete-guide")
        );
    }

    #[test]
    fn validate_rejects_inverted_cost_range() {
        let mut catalog = Catalog::builtin();
        if let Some(treatment) = catalog.treatments.first_mut() {
            treatment.cost_india = CostRange::new(9, 1);
        }
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn midpoint_of_large_valid_range_does_not_overflow() {
        let mut catalog = Catalog::builtin();
        if let Some(treatment) = catalog.treatments.first_mut() {
            treatment.cost_gcc = CostRange::new(3_000_000_000, 3_000_000_000);
            treatment.cost_india = CostRange::new(4_000_000_000, u32::MAX);
        }
        assert!(catalog.validate().is_ok());

        let treatment = catalog.treatments.first().expect("first treatment");
        assert_eq!(treatment.cost_gcc.midpoint(), 3_000_000_000);
        assert_eq!(treatment.cost_india.midpoint(), 4_147_483_647);
        assert_eq!(crate::content::average_savings(treatment), 0);
        assert_eq!(CostRange::new(5_000, 12_001).midpoint(), 8_500);
    }

    #[test]
    fn validate_rejects_bad_slug() {
        let mut catalog = Catalog::builtin();
        if let Some(country) = catalog.countries.first_mut() {
            country.slug = "Saudi Arabia".to_string();
        }
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn hospitals_match_specialty_substrings() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog
            .hospitals_for("Heart Surgery")
            .iter()
            .map(|hospital| hospital.name.as_str())
            .collect();
        assert_eq!(names, vec!["Apollo Hospital"]);
    }

    #[test]
    fn title_case_matches_slug_headlines() {
        assert_eq!(title_case("best dental clinics india"), "Best Dental Clinics India");
        assert_eq!(title_case("IVF cost"), "Ivf Cost");
    }
}
