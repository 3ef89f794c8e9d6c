//! The shifagen library generates bilingual (English/Arabic) medical-tourism
//! pages from a small catalog and derives SEO artifacts from them: keyword
//! matrices, XML sitemaps with hreflang alternates and an interlink graph.

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod constants;
pub mod content;
pub mod expand;
pub mod interlink;
pub mod jsonld;
pub mod keywords;
pub mod manifest;
pub mod page;
pub mod preview;
pub mod routes;
pub mod sitemap;
pub mod store;
pub mod verify;

/// Language of a generated page.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Both locales in generation order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// The other locale of the bilingual pair.
    pub fn alternate(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    pub fn is_ar(self) -> bool {
        self == Locale::Ar
    }

    /// Picks the English or Arabic variant of a value.
    pub fn pick<T>(self, en: T, ar: T) -> T {
        match self {
            Locale::En => en,
            Locale::Ar => ar,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            _ => Err(format!("Invalid locale: {}", input)),
        }
    }
}

/// Kind of generated page; drives templates, sitemap priority and interlink rules.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    CityLanding,
    TreatmentLanding,
    Article,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            PageType::CityLanding => "city_landing",
            PageType::TreatmentLanding => "treatment_landing",
            PageType::Article => "article",
        }
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageType {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "city_landing" | "city" => Ok(PageType::CityLanding),
            "treatment_landing" | "treatment" => Ok(PageType::TreatmentLanding),
            "article" => Ok(PageType::Article),
            _ => Err(format!("Invalid page type: {}", input)),
        }
    }
}

/// Enum representing the target for body generation.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum ContentTarget {
    /// Every page of the manifest.
    #[default]
    All,
    /// All pages of a single page type.
    Type(PageType),
    /// A page with specified URL.
    Page { url: String },
}

impl From<&str> for ContentTarget {
    fn from(value: &str) -> Self {
        match value {
            "all" => Self::All,
            other => match other.parse::<PageType>() {
                Ok(page_type) => Self::Type(page_type),
                Err(_) => Self::Page {
                    url: other.to_string(),
                },
            },
        }
    }
}

/// Enum representing where the catalog comes from.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum CatalogSource {
    /// The ten-city, eight-treatment catalog.
    #[default]
    Builtin,
    /// The builtin catalog plus every city and treatment added by the expansion commands.
    Extended,
    /// A JSON catalog file.
    File { path: String },
}

impl From<&str> for CatalogSource {
    fn from(value: &str) -> Self {
        match value {
            "builtin" => Self::Builtin,
            "extended" => Self::Extended,
            path => Self::File {
                path: path.to_string(),
            },
        }
    }
}

pub use catalog::Catalog;
pub use content::ContentGenerator;
pub use interlink::build_interlinks;
pub use manifest::{ManifestScope, generate_manifest};
pub use page::{Page, PageKey};
