use std::collections::HashSet;
use std::fs;

use crate::pipeline_extras::{arabic_alternates, doha_ivf_catalog, fixed_clock, lastmod, urls};
use shifagen::catalog::CostRange;
use shifagen::constants::{
    CONTENT_ARTICLES_FILE, CONTENT_CITIES_FILE, CONTENT_TREATMENTS_FILE, KEYWORD_MATRIX_FILE,
};
use shifagen::expand::{Expansion, apply_expansion};
use shifagen::interlink::LinkType;
use shifagen::keywords::keyword_matrix;
use shifagen::routes::parse_page_url;
use shifagen::sitemap::{read_sitemap_locs, write_sitemaps};
use shifagen::store::{MergeMode, load_pages, save_csv, save_json};
use shifagen::verify::{verify_pages, verify_sitemap};
use shifagen::{
    Catalog, ContentGenerator, ContentTarget, Locale, ManifestScope, PageType, build_interlinks,
    generate_manifest,
};
use spectral::assert_that;
use spectral::prelude::*;

mod pipeline_extras;

#[test]
fn single_city_manifest_has_expected_pages() {
    let pages = generate_manifest(&doha_ivf_catalog(), &ManifestScope::Full);

    assert_page_counts!(pages,
        PageType::CityLanding => 2,
        PageType::TreatmentLanding => 2,
        PageType::Article => 10,
    );
    let unique: HashSet<String> = urls(&pages).into_iter().collect();
    assert_that(&unique.len()).is_equal_to(pages.len());
    for page in &pages {
        assert_that(&parse_page_url(&page.url)).is_equal_to(Some(page.key()));
    }
}

#[test]
fn catalog_file_loads_and_validates() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    save_json(&path, &doha_ivf_catalog()).expect("Failed to save catalog");

    let loaded = Catalog::from_file(&path.to_string_lossy()).expect("Failed to load catalog");
    assert_that(&loaded).is_equal_to(doha_ivf_catalog());

    let mut broken = doha_ivf_catalog();
    if let Some(treatment) = broken.treatments.first_mut() {
        treatment.cost_india = CostRange::new(9_000, 1_000);
    }
    save_json(&path, &broken).expect("Failed to save catalog");
    assert_that(&Catalog::from_file(&path.to_string_lossy())).is_err();
}

#[test]
fn written_sitemaps_list_manifest_urls() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let catalog = doha_ivf_catalog();
    let pages = generate_manifest(&catalog, &ManifestScope::Full);

    let summary = write_sitemaps(dir.path(), catalog.brand.origin(), &pages, lastmod())
        .expect("Failed to write sitemaps");
    assert_that(&summary.total).is_equal_to(14);
    assert_that(&summary.missing_alternates).is_equal_to(0);

    let mut report = verify_pages(&pages);
    verify_sitemap(&mut report, &pages, &dir.path().join("sitemap_ar.xml"), Some(Locale::Ar))
        .expect("Failed to read sitemap");
    verify_sitemap(&mut report, &pages, &dir.path().join("sitemap.xml"), None)
        .expect("Failed to read sitemap");
    assert_that(&report.issues).is_empty();

    let index =
        read_sitemap_locs(&dir.path().join("sitemap_index.xml")).expect("Failed to read index");
    assert_that(&index.sitemaps).is_equal_to(vec![
        "https://shifaalhind.com/sitemap_en.xml".to_string(),
        "https://shifaalhind.com/sitemap_ar.xml".to_string(),
    ]);
}

#[test]
fn english_sitemap_alternates_are_arabic_manifest_urls() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::builtin();
    let pages = generate_manifest(&catalog, &ManifestScope::Full);
    write_sitemaps(dir.path(), catalog.brand.origin(), &pages, lastmod())
        .expect("Failed to write sitemaps");

    let known: HashSet<String> = urls(&pages).into_iter().collect();
    let english = pages.iter().filter(|page| page.locale == Locale::En).count();
    let xml =
        fs::read_to_string(dir.path().join("sitemap_en.xml")).expect("Failed to read sitemap");
    let entries = arabic_alternates(&xml);

    assert_that(&english).is_equal_to(490);
    assert_that(&entries.len()).is_equal_to(english);
    for (loc, href) in &entries {
        let href = href.clone().unwrap_or_default();
        assert_that(&known.contains(&href)).named(loc).is_true();
        assert_that(&href).is_equal_to(loc.replacen("/en/", "/ar/", 1));
    }
}

#[test]
fn interlinks_respect_caps() {
    let catalog = doha_ivf_catalog();
    let pages = generate_manifest(&catalog, &ManifestScope::Full);
    let graph = build_interlinks(&catalog, &pages);

    for entry in &graph {
        let related = entry
            .internal_links
            .iter()
            .filter(|link| link.link_type == LinkType::RelatedArticle)
            .count();
        let limit = if entry.page_type == PageType::Article { 3 } else { 5 };
        assert_that(&related).is_less_than_or_equal_to(limit);
        let links_itself = entry.internal_links.iter().any(|link| link.url == entry.source_url);
        assert_that(&links_itself).is_false();
    }

    let city = graph.first().expect("Expected a city entry");
    assert_that(&city.internal_links.len()).is_equal_to(2);
}

#[test]
fn same_seed_reproduces_bodies() {
    let catalog = doha_ivf_catalog();
    let pages = generate_manifest(&catalog, &ManifestScope::Full);
    let run = |seed| {
        ContentGenerator::new(&catalog, Some(seed))
            .with_clock(fixed_clock())
            .enrich_all(&pages, &ContentTarget::All, None)
    };

    let first = run(42);
    assert_that(&first).is_equal_to(run(42));
    assert_that(&first.len()).is_equal_to(14);
    assert_that(&first.iter().all(|page| page.full_content.is_some())).is_true();
}

#[test]
fn expansion_rerun_keeps_urls_unique() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let catalog = doha_ivf_catalog();
    let pages = generate_manifest(&catalog, &ManifestScope::Full);
    let of_type = |page_type: PageType| -> Vec<_> {
        pages.iter().filter(|page| page.page_type == page_type).cloned().collect()
    };
    save_json(&dir.path().join(CONTENT_TREATMENTS_FILE), &of_type(PageType::TreatmentLanding))
        .expect("Failed to save treatments");
    save_json(&dir.path().join(CONTENT_ARTICLES_FILE), &of_type(PageType::Article))
        .expect("Failed to save articles");

    let expansion = Expansion::new_treatments(&catalog);
    for seed in [1, 2] {
        let mut generator = ContentGenerator::new(&expansion.catalog, Some(seed));
        apply_expansion(dir.path(), &expansion, &mut generator, MergeMode::Upsert)
            .expect("Failed to apply expansion");
    }

    let treatments =
        load_pages(&dir.path().join(CONTENT_TREATMENTS_FILE)).expect("Failed to load treatments");
    let articles =
        load_pages(&dir.path().join(CONTENT_ARTICLES_FILE)).expect("Failed to load articles");
    assert_that(&treatments.len()).is_equal_to(2 + 6 * 2);
    assert_that(&articles.len()).is_equal_to(10 + 6 * 5 * 2);

    let unique: HashSet<String> = urls(&articles).into_iter().collect();
    assert_that(&unique.len()).is_equal_to(articles.len());
    assert_that(&dir.path().join(CONTENT_CITIES_FILE).exists()).is_false();
}

#[test]
fn expansion_requires_content_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let expansion = Expansion::new_cities(&doha_ivf_catalog());
    let mut generator = ContentGenerator::new(&expansion.catalog, Some(1));

    let result = apply_expansion(dir.path(), &expansion, &mut generator, MergeMode::Upsert);
    assert_that(&result).is_err();
}

#[test]
fn keyword_matrix_is_written_as_csv() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(KEYWORD_MATRIX_FILE);
    save_csv(&path, &keyword_matrix(&doha_ivf_catalog())).expect("Failed to save CSV");

    let content = fs::read_to_string(&path).expect("Failed to read CSV");
    let mut lines = content.lines();
    let header = lines.next().unwrap_or_default();
    let row = lines.next().unwrap_or_default();
    assert_that(&header.starts_with("url,primary_keyword_en,secondary_1_en")).is_true();
    assert_that(&row.contains("Doha IVF & Fertility Treatment India")).is_true();
    assert_that(&lines.next()).is_none();
}
