//! The page module defines the central `Page` record written to manifests and
//! content files, and the structured `PageKey` every relation is resolved by.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::META_DESC_MAX_CHARS;
use crate::routes::parse_page_url;
use crate::{Locale, PageType};

/// Structured identity of a page: locale plus the catalog slugs it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub locale: Locale,
    pub country: String,
    pub city: String,
    pub treatment: Option<String>,
    pub article: Option<String>,
}

impl PageKey {
    pub fn city(locale: Locale, country: &str, city: &str) -> Self {
        Self {
            locale,
            country: country.to_string(),
            city: city.to_string(),
            treatment: None,
            article: None,
        }
    }

    /// Key of a treatment page below this key's city.
    pub fn treatment(&self, treatment: &str) -> Self {
        Self {
            treatment: Some(treatment.to_string()),
            article: None,
            ..self.clone()
        }
    }

    /// Key of an article page below this key's treatment.
    pub fn article(&self, article: &str) -> Self {
        Self {
            article: Some(article.to_string()),
            ..self.clone()
        }
    }

    pub fn page_type(&self) -> PageType {
        match (&self.treatment, &self.article) {
            (Some(_), Some(_)) => PageType::Article,
            (Some(_), None) => PageType::TreatmentLanding,
            _ => PageType::CityLanding,
        }
    }

    /// Same page in another locale.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            ..self.clone()
        }
    }

    /// Key of the city page this page belongs to.
    pub fn city_key(&self) -> Self {
        Self {
            treatment: None,
            article: None,
            ..self.clone()
        }
    }

    /// Key of the treatment page an article belongs to.
    pub fn treatment_key(&self) -> Option<Self> {
        self.treatment.as_ref().map(|_| Self {
            article: None,
            ..self.clone()
        })
    }
}

/// Review workflow state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    /// Metadata only, body not yet written.
    #[default]
    Draft,
    /// Body generated.
    Generated,
}

/// A generated page record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub url: String,
    pub locale: Locale,
    pub slug: String,
    pub page_type: PageType,
    #[serde(default)]
    pub country_slug: String,
    #[serde(default)]
    pub city_slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_slug: Option<String>,
    pub title: String,
    pub meta_desc: String,
    pub h1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<String>,
    pub needs_native_review: bool,
    #[serde(default)]
    pub needs_medical_review: bool,
    #[serde(default)]
    pub status: PageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Page {
    /// Creates a draft page for `key` with the structural fields filled in.
    pub fn draft(url: String, key: &PageKey, title: String, meta_desc: String, h1: String) -> Self {
        let page_type = key.page_type();
        let slug = match page_type {
            PageType::CityLanding => key.city.clone(),
            PageType::TreatmentLanding => key.treatment.clone().unwrap_or_default(),
            PageType::Article => key.article.clone().unwrap_or_default(),
        };

        Self {
            url,
            locale: key.locale,
            slug,
            page_type,
            country_slug: key.country.clone(),
            city_slug: key.city.clone(),
            treatment_slug: key.treatment.clone(),
            article_slug: key.article.clone(),
            title,
            meta_desc: truncate_chars(&meta_desc, META_DESC_MAX_CHARS),
            h1,
            primary_keyword: None,
            json_ld: None,
            needs_native_review: key.locale.is_ar(),
            needs_medical_review: page_type != PageType::CityLanding,
            status: PageStatus::Draft,
            full_content: None,
            word_count: None,
            generated_at: None,
        }
    }

    /// The structured key carried by this record.
    pub fn key(&self) -> PageKey {
        PageKey {
            locale: self.locale,
            country: self.country_slug.clone(),
            city: self.city_slug.clone(),
            treatment: self.treatment_slug.clone(),
            article: self.article_slug.clone(),
        }
    }

    /// Whether the structural key fields are populated.
    pub fn has_key(&self) -> bool {
        !self.country_slug.is_empty() && !self.city_slug.is_empty()
    }

    /// Fills missing structural keys from the URL, for records written before
    /// pages carried their keys. Returns false when the URL does not parse.
    pub fn resolve_key(&mut self) -> bool {
        if self.has_key() {
            return true;
        }

        match parse_page_url(&self.url) {
            Some(key) => {
                self.country_slug = key.country;
                self.city_slug = key.city;
                self.treatment_slug = key.treatment;
                self.article_slug = key.article;
                true
            }
            None => false,
        }
    }

    /// Attaches a generated body and marks the page as generated.
    pub fn apply_content(&mut self, content: String, generated_at: DateTime<Utc>) {
        self.word_count = Some(word_count(&content));
        self.full_content = Some(content);
        self.generated_at = Some(generated_at);
        self.status = PageStatus::Generated;
    }
}

/// Number of whitespace separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Cuts `text` to at most `max` characters without splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
