use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use shifagen::catalog::{Brand, City, CostRange, Country, Treatment, builtin_hospitals};
use shifagen::{Catalog, Page};

/// Checks the number of pages of each type in a manifest.
#[macro_export]
macro_rules! assert_page_counts {
    (
        $pages:expr, $( $page_type:path => $count:expr ),+ $(,)?
    ) => {
        $(
            assert_that(&$pages.iter().filter(|page| page.page_type == $page_type).count())
                .named(stringify!($page_type))
                .is_equal_to($count);
        )+
    }
}

/// A single-country, single-city, single-treatment catalog.
pub fn doha_ivf_catalog() -> Catalog {
    Catalog {
        brand: Brand::default(),
        countries: vec![Country {
            slug: "qatar".to_string(),
            name: "Qatar".to_string(),
            name_ar: "قطر".to_string(),
            code: "QA".to_string(),
            cities: vec![City {
                slug: "doha".to_string(),
                name: "Doha".to_string(),
                name_ar: "الدوحة".to_string(),
                population: Some("2.4M".to_string()),
                flight_hours: Some("3.5".to_string()),
                patient_names: vec!["Hamad".to_string(), "Sara".to_string()],
            }],
        }],
        treatments: vec![Treatment {
            slug: "ivf".to_string(),
            name: "IVF & Fertility Treatment".to_string(),
            name_ar: "التلقيح الصناعي وعلاج الخصوبة".to_string(),
            description: None,
            description_ar: None,
            cost_gcc: CostRange::new(8_000, 15_000),
            cost_india: CostRange::new(2_500, 5_000),
            savings_percent: "65-70%".to_string(),
            articles: Vec::new(),
        }],
        hospitals: builtin_hospitals(),
    }
}

pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).single().expect("valid timestamp")
}

pub fn lastmod() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub fn urls(pages: &[Page]) -> Vec<String> {
    pages.iter().map(|page| page.url.clone()).collect()
}

/// Pairs each `<loc>` of a urlset with the href of its `hreflang="ar"` link.
pub fn arabic_alternates(xml: &str) -> Vec<(String, Option<String>)> {
    let mut reader = Reader::from_str(xml);
    let mut entries: Vec<(String, Option<String>)> = Vec::new();
    let mut in_loc = false;
    loop {
        match reader.read_event().expect("Failed to read sitemap XML") {
            Event::Start(tag) if tag.name().as_ref() == b"loc" => in_loc = true,
            Event::End(tag) if tag.name().as_ref() == b"loc" => in_loc = false,
            Event::Text(text) if in_loc => {
                let loc = text.unescape().expect("Failed to unescape loc").into_owned();
                entries.push((loc, None));
            }
            Event::Empty(tag) if tag.name().as_ref() == b"xhtml:link" => {
                let attribute = |key: &[u8]| {
                    tag.try_get_attribute(key)
                        .ok()
                        .flatten()
                        .and_then(|attr| attr.unescape_value().ok())
                        .map(|value| value.into_owned())
                };
                let hreflang = attribute(b"hreflang");
                if let (Some("ar"), Some(entry)) = (hreflang.as_deref(), entries.last_mut()) {
                    entry.1 = attribute(b"href");
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    entries
}
