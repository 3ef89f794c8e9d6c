//! Keyword matrix: one row per city and treatment pair.

use serde::Serialize;

use crate::Locale;
use crate::catalog::Catalog;
use crate::page::PageKey;
use crate::routes::page_url;

/// Primary and secondary keywords of an English treatment page and its Arabic counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRow {
    pub url: String,
    pub primary_keyword_en: String,
    pub secondary_1_en: String,
    pub secondary_2_en: String,
    pub secondary_3_en: String,
    pub secondary_4_en: String,
    pub secondary_5_en: String,
    pub primary_keyword_ar: String,
    pub secondary_1_ar: String,
    pub secondary_2_ar: String,
    pub secondary_3_ar: String,
    pub secondary_4_ar: String,
    pub secondary_5_ar: String,
}

/// Builds the keyword matrix in catalog order.
pub fn keyword_matrix(catalog: &Catalog) -> Vec<KeywordRow> {
    let mut rows = Vec::with_capacity(catalog.city_count() * catalog.treatments.len());

    for (country, city) in catalog.cities() {
        for treatment in &catalog.treatments {
            let key =
                PageKey::city(Locale::En, &country.slug, &city.slug).treatment(&treatment.slug);
            let (city_en, city_ar) = (&city.name, &city.name_ar);
            let (name_en, name_ar) = (&treatment.name, &treatment.name_ar);

            rows.push(KeywordRow {
                url: page_url(catalog.brand.origin(), &key),
                primary_keyword_en: format!("{city_en} {name_en} India"),
                secondary_1_en: format!("{city_en} {name_en} cost"),
                secondary_2_en: format!("{city_en} medical visa {name_en}"),
                secondary_3_en: format!("{name_en} best hospital Bangalore"),
                secondary_4_en: format!("compare {name_en} {city_en} vs India"),
                secondary_5_en: format!("{name_en} Arabic support India"),
                primary_keyword_ar: format!("{name_ar} {city_ar} الهند"),
                secondary_1_ar: format!("تكلفة {name_ar} {city_ar}"),
                secondary_2_ar: format!("تأشيرة طبية {name_ar}"),
                secondary_3_ar: format!("أفضل مستشفى {name_ar} الهند"),
                secondary_4_ar: format!("{name_ar} دعم عربي الهند"),
                secondary_5_ar: format!("مقارنة {name_ar} {city_ar} الهند"),
            });
        }
    }

    rows
}
