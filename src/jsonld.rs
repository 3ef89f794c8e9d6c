//! schema.org structured data embedded in every manifest page.

use serde_json::{Value, json};

use crate::Locale;
use crate::catalog::{Catalog, City, Country, Treatment, title_case};
use crate::page::PageKey;
use crate::routes::page_url;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const ARTICLE_DATE: &str = "2025-01-01";

fn logo_url(catalog: &Catalog) -> String {
    format!("{}/logo.png", catalog.brand.origin())
}

fn breadcrumbs(items: &[(&str, String)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, (name, item))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": item,
            })
        })
        .collect();

    json!({
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// Organization plus breadcrumb graph for a city landing page.
pub fn city_json_ld(catalog: &Catalog, country: &Country, city: &City, locale: Locale) -> String {
    let key = PageKey::city(locale, &country.slug, &city.slug);
    let home = catalog.home_url(locale);
    let area_served: Vec<&str> = catalog
        .countries
        .iter()
        .map(|country| country.code.as_str())
        .collect();

    let value = json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": [
            {
                "@type": "Organization",
                "name": catalog.brand.name,
                "url": catalog.brand.domain,
                "logo": logo_url(catalog),
                "contactPoint": {
                    "@type": "ContactPoint",
                    "telephone": catalog.brand.phone,
                    "contactType": "Customer Service",
                    "areaServed": area_served,
                    "availableLanguage": ["en", "ar"],
                },
            },
            breadcrumbs(&[
                ("Home", home.clone()),
                ("Medical Tourism", format!("{home}/medical-tourism")),
                (city.display_name(locale), page_url(catalog.brand.origin(), &key)),
            ]),
        ],
    });
    value.to_string()
}

/// Medical procedure with its India price range plus a four step breadcrumb.
pub fn treatment_json_ld(
    catalog: &Catalog,
    country: &Country,
    city: &City,
    treatment: &Treatment,
    locale: Locale,
) -> String {
    let city_key = PageKey::city(locale, &country.slug, &city.slug);
    let treatment_key = city_key.treatment(&treatment.slug);
    let home = catalog.home_url(locale);
    let city_name = city.display_name(locale);
    let treatment_name = treatment.display_name(locale);

    let value = json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": [
            {
                "@type": "MedicalProcedure",
                "name": treatment_name,
                "description": format!("Affordable {treatment_name} in India for patients from {city_name}"),
                "procedureType": "Medical Procedure",
                "cost": {
                    "@type": "MonetaryAmount",
                    "currency": "USD",
                    "minValue": treatment.cost_india.min,
                    "maxValue": treatment.cost_india.max,
                },
            },
            breadcrumbs(&[
                ("Home", home.clone()),
                ("Medical Tourism", format!("{home}/medical-tourism")),
                (city_name, page_url(catalog.brand.origin(), &city_key)),
                (treatment_name, page_url(catalog.brand.origin(), &treatment_key)),
            ]),
        ],
    });
    value.to_string()
}

/// Article headline, author and publisher.
pub fn article_json_ld(
    catalog: &Catalog,
    city: &City,
    treatment: &Treatment,
    article_slug: &str,
    locale: Locale,
) -> String {
    let headline = title_case(&article_slug.replace('-', " "));
    let value = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": headline,
        "description": format!(
            "{} guide for {} patients",
            treatment.display_name(locale),
            city.display_name(locale)
        ),
        "author": {
            "@type": "Organization",
            "name": catalog.brand.name,
        },
        "publisher": {
            "@type": "Organization",
            "name": catalog.brand.name,
            "logo": {
                "@type": "ImageObject",
                "url": logo_url(catalog),
            },
        },
        "datePublished": ARTICLE_DATE,
        "dateModified": ARTICLE_DATE,
    });
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doha(catalog: &Catalog) -> (&Country, &City) {
        catalog.find_city("doha").expect("doha is builtin")
    }

    #[test]
    fn city_graph_has_organization_and_three_crumbs() {
        let catalog = Catalog::builtin();
        let (country, city) = doha(&catalog);
        let json = city_json_ld(&catalog, country, city, Locale::Ar);
        let value: Value = serde_json::from_str(&json).expect("valid json");

        let at = |pointer: &str| value.pointer(pointer).cloned().unwrap_or_default();
        assert_eq!(at("/@graph/0/@type"), "Organization");
        assert_eq!(at("/@graph/0/contactPoint/areaServed").as_array().map(Vec::len), Some(6));
        assert_eq!(at("/@graph/1/itemListElement/2/name"), "الدوحة");
        assert_eq!(
            at("/@graph/1/itemListElement/2/item"),
            "https://shifaalhind.com/ar/medical-tourism/qatar/doha"
        );
    }

    #[test]
    fn treatment_graph_carries_india_cost() {
        let catalog = Catalog::builtin();
        let (country, city) = doha(&catalog);
        let treatment = catalog.treatment("ivf").expect("ivf is builtin");
        let json = treatment_json_ld(&catalog, country, city, treatment, Locale::En);
        let value: Value = serde_json::from_str(&json).expect("valid json");

        let at = |pointer: &str| value.pointer(pointer).cloned().unwrap_or_default();
        assert_eq!(at("/@graph/0/cost/minValue"), 2_500);
        assert_eq!(at("/@graph/1/itemListElement").as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn article_headline_is_title_cased_slug() {
        let catalog = Catalog::builtin();
        let (_, city) = doha(&catalog);
        let treatment = catalog.treatment("ivf").expect("ivf is builtin");
        let value: Value = serde_json::from_str(&article_json_ld(
            &catalog,
            city,
            treatment,
            "preparing-for-ivf-treatment-india",
            Locale::En,
        ))
        .expect("valid json");

        assert_eq!(value["headline"], "Preparing For Ivf Treatment India");
        assert_eq!(value["description"], "IVF & Fertility Treatment guide for Doha patients");
    }
}
