//! URL layout of generated pages and its inverse.
//!
//! * city: `{origin}/{locale}/medical-tourism/{country}/{city}`
//! * treatment: `{origin}/{locale}/medical-tourism/{country}/{city}/{treatment}`
//! * article: `{origin}/{locale}/blog/{country}/{city}/{treatment}/{article}`

use url::Url;

use crate::page::PageKey;

const LANDING_SEGMENT: &str = "medical-tourism";
const BLOG_SEGMENT: &str = "blog";

/// Builds the absolute URL of a page.
pub fn page_url(origin: &str, key: &PageKey) -> String {
    let origin = origin.trim_end_matches('/');
    let PageKey {
        locale,
        country,
        city,
        treatment,
        article,
    } = key;

    match (treatment, article) {
        (Some(treatment), Some(article)) => {
            format!("{origin}/{locale}/{BLOG_SEGMENT}/{country}/{city}/{treatment}/{article}")
        }
        (Some(treatment), None) => {
            format!("{origin}/{locale}/{LANDING_SEGMENT}/{country}/{city}/{treatment}")
        }
        _ => format!("{origin}/{locale}/{LANDING_SEGMENT}/{country}/{city}"),
    }
}

fn key(
    locale: &str,
    country: &str,
    city: &str,
    treatment: Option<&str>,
    article: Option<&str>,
) -> Option<PageKey> {
    Some(PageKey {
        locale: locale.parse().ok()?,
        country: country.to_string(),
        city: city.to_string(),
        treatment: treatment.map(str::to_string),
        article: article.map(str::to_string),
    })
}

/// Recovers the page key from a page URL. Returns `None` for URLs outside the layout.
pub fn parse_page_url(url: &str) -> Option<PageKey> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [locale, LANDING_SEGMENT, country, city] => key(locale, country, city, None, None),
        [locale, LANDING_SEGMENT, country, city, treatment] => {
            key(locale, country, city, Some(treatment), None)
        }
        [locale, BLOG_SEGMENT, country, city, treatment, article] => {
            key(locale, country, city, Some(treatment), Some(article))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Locale;

    const ORIGIN: &str = "https://shifaalhind.com";

    fn article_key() -> PageKey {
        PageKey {
            locale: Locale::Ar,
            country: "qatar".to_string(),
            city: "doha".to_string(),
            treatment: Some("ivf".to_string()),
            article: Some("ivf-success-stories-gcc-patients".to_string()),
        }
    }

    #[test]
    fn article_url_layout() {
        assert_eq!(
            page_url(ORIGIN, &article_key()),
            "https://shifaalhind.com/ar/blog/qatar/doha/ivf/ivf-success-stories-gcc-patients"
        );
    }

    #[test]
    fn trailing_slash_on_origin_is_ignored() {
        let key = PageKey::city(Locale::En, "oman", "muscat");
        assert_eq!(
            page_url("https://shifaalhind.com/", &key),
            "https://shifaalhind.com/en/medical-tourism/oman/muscat"
        );
    }

    #[test]
    fn urls_parse_back_into_their_keys() {
        let city = PageKey::city(Locale::En, "oman", "muscat");
        let treatment = city.treatment("ivf");
        for key in [city, treatment, article_key()] {
            assert_eq!(parse_page_url(&page_url(ORIGIN, &key)), Some(key));
        }
    }

    #[test]
    fn foreign_urls_do_not_parse() {
        assert_eq!(parse_page_url("https://shifaalhind.com/en"), None);
        assert_eq!(parse_page_url("https://shifaalhind.com/fr/medical-tourism/oman/muscat"), None);
        assert_eq!(parse_page_url("not a url"), None);
    }
}
