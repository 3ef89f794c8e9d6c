pub const SEED_ENV_NAME: &str = "SHIFAGEN_SEED";

pub const ARTICLES_PER_TREATMENT: usize = 5;

pub const META_DESC_MAX_CHARS: usize = 160;

pub const SAMPLE_ARTICLE_COUNT: usize = 10;

pub const DEFAULT_SAMPLE_CITY: &str = "dubai";

pub const MANIFEST_FULL_FILE: &str = "content_manifest_full.json";
pub const MANIFEST_SAMPLE_FILE: &str = "content_manifest_sample.json";
pub const SITEMAP_PREVIEW_FILE: &str = "sitemap_master_preview.csv";
pub const KEYWORD_MATRIX_FILE: &str = "keyword_matrix.csv";
pub const INTERLINKS_FILE: &str = "interlink_structure.json";
pub const CONTENT_SAMPLE_FILE: &str = "content_full_sample.json";
pub const CONTENT_ARTICLES_FILE: &str = "content_articles_full.json";
pub const CONTENT_TREATMENTS_FILE: &str = "content_treatments_full.json";
pub const CONTENT_CITIES_FILE: &str = "content_cities_full.json";
pub const PATIENT_PAGES_FILE: &str = "patient_pages.json";
pub const PREVIEW_DIR: &str = "sample_previews";

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const SITEMAP_INDEX_FILE: &str = "sitemap_index.xml";

pub(crate) const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub(crate) const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

pub(crate) const DEFAULT_GCC_COST: (u32, u32) = (15_000, 30_000);
pub(crate) const DEFAULT_INDIA_COST: (u32, u32) = (4_000, 8_000);
pub(crate) const DEFAULT_SAVINGS: &str = "60-70%";
pub(crate) const DEFAULT_FLIGHT_HOURS: &str = "3.5-4";
