//! shifagen is a CLI tool that turns a medical-tourism catalog into bilingual
//! (English/Arabic) SEO pages and the artifacts built from them.
//!
//! The usual pipeline:
//! 1. `manifest --full` - Writes page metadata for every city, treatment and article
//! 2. `content` - Writes Markdown bodies for manifest pages
//! 3. `sitemaps` and `interlinks` - Derive sitemaps and the internal link graph
//! 4. `expand-cities` / `add-treatments` - Grow previously generated content files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, info, warn};

use shifagen::catalog::expansion_cities;
use shifagen::constants::{
    CONTENT_ARTICLES_FILE, CONTENT_CITIES_FILE, CONTENT_SAMPLE_FILE, CONTENT_TREATMENTS_FILE,
    DEFAULT_SAMPLE_CITY, INTERLINKS_FILE, KEYWORD_MATRIX_FILE, MANIFEST_FULL_FILE,
    MANIFEST_SAMPLE_FILE, PATIENT_PAGES_FILE, PREVIEW_DIR, SAMPLE_ARTICLE_COUNT, SEED_ENV_NAME,
    SITEMAP_FILE, SITEMAP_PREVIEW_FILE,
};
use shifagen::expand::{Expansion, apply_expansion, patient_cities};
use shifagen::interlink::InterlinkSummary;
use shifagen::keywords::keyword_matrix;
use shifagen::manifest::{ManifestTotals, sitemap_preview};
use shifagen::preview::write_preview;
use shifagen::sitemap::{locale_sitemap_file, write_sitemaps};
use shifagen::store::{MergeMode, load_pages, save_csv, save_json};
use shifagen::verify::{verify_pages, verify_sitemap};
use shifagen::{
    Catalog, CatalogSource, ContentGenerator, ContentTarget, Locale, ManifestScope, Page, PageType,
    build_interlinks, generate_manifest,
};

/// A CLI tool to generate bilingual medical-tourism pages, sitemaps and interlinks
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog to generate from: "builtin" (default), "extended" or a path to a JSON catalog
    #[arg(long, short, global = true, default_value = "builtin")]
    catalog: CatalogSource,

    /// Directory holding input and output files
    #[arg(long, short, global = true, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the number of pages a full manifest of the catalog holds
    Plan,
    /// Generate page metadata and the sitemap planning CSV
    Manifest {
        /// Generate every page instead of the treatment pages of one city
        #[arg(long)]
        full: bool,
        /// City of the sample manifest
        #[arg(long, default_value = DEFAULT_SAMPLE_CITY)]
        city: String,
    },
    /// Write the keyword matrix CSV
    Keywords,
    /// Generate Markdown bodies for pages of the full manifest
    Content {
        /// Target: "article" (default), "treatment", "city", "all" or a page URL
        #[arg(long, short = 't', default_value = "article")]
        target: ContentTarget,
        /// Generate every article instead of the sample
        #[arg(long)]
        full: bool,
        /// Seed of the phrase selection (default: $SHIFAGEN_SEED, else random)
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Write per-locale sitemaps, the master sitemap and the sitemap index
    Sitemaps,
    /// Write the internal link graph of the full manifest
    Interlinks,
    /// Render a generated page as HTML
    Preview {
        /// URL of the page to render (default: the first sample treatment page)
        #[arg(long, short)]
        url: Option<String>,
        /// Seed of the phrase selection (default: $SHIFAGEN_SEED, else random)
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Add the expansion cities to the content files
    ExpandCities {
        /// Seed of the phrase selection (default: $SHIFAGEN_SEED, else random)
        #[arg(long, short)]
        seed: Option<u64>,
        /// Append pages even when their URL is already present
        #[arg(long)]
        append: bool,
    },
    /// Add the expansion treatments to the content files
    AddTreatments {
        /// Seed of the phrase selection (default: $SHIFAGEN_SEED, else random)
        #[arg(long, short)]
        seed: Option<u64>,
        /// Append pages even when their URL is already present
        #[arg(long)]
        append: bool,
    },
    /// Write the city listings of the per-country patient pages
    PatientCities,
    /// Check the full manifest and the sitemaps written from it
    Verify,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let catalog = Catalog::load(&cli.catalog)?;
    let out_dir = cli.out_dir.as_path();

    match cli.command {
        Command::Plan => {
            handle_plan_command(&catalog);
            Ok(())
        }
        Command::Manifest { full, city } => handle_manifest_command(&catalog, out_dir, full, city),
        Command::Keywords => {
            let rows = keyword_matrix(&catalog);
            save_csv(&out_dir.join(KEYWORD_MATRIX_FILE), &rows)?;
            info!("Saved {} keyword rows to {}", rows.len(), KEYWORD_MATRIX_FILE);
            Ok(())
        }
        Command::Content { target, full, seed } => {
            handle_content_command(&catalog, out_dir, &target, full, resolve_seed(seed)?)
        }
        Command::Sitemaps => handle_sitemaps_command(&catalog, out_dir),
        Command::Interlinks => handle_interlinks_command(&catalog, out_dir),
        Command::Preview { url, seed } => {
            handle_preview_command(&catalog, out_dir, url, resolve_seed(seed)?)
        }
        Command::ExpandCities { seed, append } => {
            let expansion = Expansion::new_cities(&catalog);
            handle_expand_command(out_dir, &expansion, resolve_seed(seed)?, append)
        }
        Command::AddTreatments { seed, append } => {
            let expansion = Expansion::new_treatments(&catalog);
            handle_expand_command(out_dir, &expansion, resolve_seed(seed)?, append)
        }
        Command::PatientCities => {
            let listings = patient_cities(&catalog.with_cities(expansion_cities()));
            save_json(&out_dir.join(PATIENT_PAGES_FILE), &listings)?;
            for listing in &listings {
                info!("{}: {} cities", listing.path, listing.cities.len());
            }
            Ok(())
        }
        Command::Verify => handle_verify_command(out_dir),
    }
}

/// Seed from the command line, else from the environment.
fn resolve_seed(seed: Option<u64>) -> Result<Option<u64>> {
    if seed.is_some() {
        return Ok(seed);
    }
    match std::env::var(SEED_ENV_NAME) {
        Ok(value) => {
            let seed: u64 = value
                .trim()
                .parse()
                .context(format!("Invalid {SEED_ENV_NAME} value: {value}"))?;
            info!("Using seed {seed} from {SEED_ENV_NAME}");
            Ok(Some(seed))
        }
        Err(_) => Ok(None),
    }
}

fn load_full_manifest(out_dir: &Path) -> Result<Vec<Page>> {
    load_pages(&out_dir.join(MANIFEST_FULL_FILE))
        .context(format!("Run `shifagen manifest --full` to create {MANIFEST_FULL_FILE} first"))
}

fn handle_plan_command(catalog: &Catalog) {
    let totals = ManifestTotals::of(catalog);
    info!("Cities: {}", totals.cities);
    info!("Treatments: {}", totals.treatments);
    info!("City landing pages: {}", totals.city_pages);
    info!("Treatment landing pages: {}", totals.treatment_pages);
    info!("Article pages: {}", totals.article_pages);
    info!("Total pages: {}", totals.grand_total);
}

fn handle_manifest_command(
    catalog: &Catalog,
    out_dir: &Path,
    full: bool,
    city: String,
) -> Result<()> {
    let (scope, file) = if full {
        (ManifestScope::Full, MANIFEST_FULL_FILE)
    } else {
        (ManifestScope::Sample { city }, MANIFEST_SAMPLE_FILE)
    };

    let pages = generate_manifest(catalog, &scope);
    if pages.is_empty() {
        warn!("Scope {scope:?} produced no pages");
    }
    save_json(&out_dir.join(file), &pages)?;
    info!("Saved {} pages to {}", pages.len(), file);

    let planned = if full { pages } else { generate_manifest(catalog, &ManifestScope::Full) };
    save_csv(&out_dir.join(SITEMAP_PREVIEW_FILE), &sitemap_preview(&planned))?;
    info!("Saved {} rows to {}", planned.len(), SITEMAP_PREVIEW_FILE);
    Ok(())
}

fn handle_content_command(
    catalog: &Catalog,
    out_dir: &Path,
    target: &ContentTarget,
    full: bool,
    seed: Option<u64>,
) -> Result<()> {
    let manifest = load_full_manifest(out_dir)?;
    let mut generator = ContentGenerator::new(catalog, seed);

    let page_types: &[PageType] = match target {
        ContentTarget::Page { .. } => {
            let pages = generator.enrich_all(&manifest, target, None);
            if pages.is_empty() {
                return Err(anyhow!("No page in {MANIFEST_FULL_FILE} matches {target:?}"));
            }
            save_json(&out_dir.join(CONTENT_SAMPLE_FILE), &pages)?;
            info!("Saved {} to {}", pages.len(), CONTENT_SAMPLE_FILE);
            return Ok(());
        }
        ContentTarget::Type(page_type) => std::slice::from_ref(page_type),
        ContentTarget::All => &[
            PageType::Article,
            PageType::TreatmentLanding,
            PageType::CityLanding,
        ],
    };

    for &page_type in page_types {
        let (limit, file) = match page_type {
            PageType::Article if full => (None, CONTENT_ARTICLES_FILE),
            PageType::Article => (Some(SAMPLE_ARTICLE_COUNT), CONTENT_SAMPLE_FILE),
            PageType::TreatmentLanding => (None, CONTENT_TREATMENTS_FILE),
            PageType::CityLanding => (None, CONTENT_CITIES_FILE),
        };
        let pages = generator.enrich_all(&manifest, &ContentTarget::Type(page_type), limit);
        save_json(&out_dir.join(file), &pages)?;
        info!("Saved {} {} pages to {}", pages.len(), page_type, file);
    }
    Ok(())
}

fn handle_sitemaps_command(catalog: &Catalog, out_dir: &Path) -> Result<()> {
    let pages = load_full_manifest(out_dir)?;
    let today = Local::now().date_naive();
    let summary = write_sitemaps(out_dir, catalog.brand.origin(), &pages, today)?;
    for (locale, count) in &summary.per_locale {
        info!("{locale}: {count} URLs");
    }
    info!("Total: {} URLs", summary.total);
    Ok(())
}

fn handle_interlinks_command(catalog: &Catalog, out_dir: &Path) -> Result<()> {
    let pages = load_full_manifest(out_dir)?;
    let graph = build_interlinks(catalog, &pages);
    save_json(&out_dir.join(INTERLINKS_FILE), &graph)?;

    let summary = InterlinkSummary::of(&graph);
    info!(
        "Saved {} pages with {} links ({:.1} per page) to {}",
        summary.pages, summary.links, summary.average, INTERLINKS_FILE
    );
    Ok(())
}

fn handle_preview_command(
    catalog: &Catalog,
    out_dir: &Path,
    url: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let (page, file) = match url {
        Some(url) => {
            let page = generate_manifest(catalog, &ManifestScope::Full)
                .into_iter()
                .find(|page| page.url == url)
                .context(format!("No page of the catalog has URL {url}"))?;
            let file = format!("{}_{}_{}.html", page.page_type, page.slug, page.locale);
            (page, file)
        }
        None => {
            let page = generate_manifest(catalog, &ManifestScope::default())
                .into_iter()
                .find(|page| page.locale == Locale::En)
                .context(format!("Catalog has no {DEFAULT_SAMPLE_CITY} treatment pages"))?;
            (page, "treatment_sample_en.html".to_string())
        }
    };

    let page = ContentGenerator::new(catalog, seed).enrich(&page);
    write_preview(&out_dir.join(PREVIEW_DIR).join(file), &page)
}

fn handle_expand_command(
    out_dir: &Path,
    expansion: &Expansion,
    seed: Option<u64>,
    append: bool,
) -> Result<()> {
    let mode = if append { MergeMode::Append } else { MergeMode::Upsert };
    let mut generator = ContentGenerator::new(&expansion.catalog, seed);
    let report = apply_expansion(out_dir, expansion, &mut generator, mode)?;

    for (file, stats) in [
        (CONTENT_CITIES_FILE, report.cities),
        (CONTENT_TREATMENTS_FILE, report.treatments),
        (CONTENT_ARTICLES_FILE, report.articles),
    ] {
        info!("{file}: {} added, {} replaced", stats.added, stats.replaced);
    }
    Ok(())
}

fn handle_verify_command(out_dir: &Path) -> Result<()> {
    let pages = load_full_manifest(out_dir)?;
    let mut report = verify_pages(&pages);

    let sitemaps = Locale::ALL
        .into_iter()
        .map(|locale| (locale_sitemap_file(locale), Some(locale)))
        .chain([(SITEMAP_FILE.to_string(), None)]);
    for (file, locale) in sitemaps {
        let path = out_dir.join(&file);
        if path.exists() {
            verify_sitemap(&mut report, &pages, &path, locale)?;
        } else {
            info!("{file} not found, skipping");
        }
    }

    for issue in &report.issues {
        warn!("{issue}");
    }
    info!("Checked {} pages and {} sitemaps", report.pages, report.sitemaps);

    if report.is_ok() {
        Ok(())
    } else {
        Err(anyhow!("{} issues found", report.issues.len()))
    }
}
