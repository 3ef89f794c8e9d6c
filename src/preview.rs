//! Standalone HTML rendering of a generated page, for reviewing copy in a browser.

use std::path::Path;

use anyhow::Result;
use log::info;
use pulldown_cmark::{Options, Parser, html};
use quick_xml::escape::escape;

use crate::page::Page;
use crate::store::write_atomic;

/// Converts a generated Markdown body into HTML, with pipe tables enabled.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders a full HTML document for a page. Pages without a body show only their metadata.
pub fn page_html(page: &Page) -> String {
    let direction = if page.locale.is_ar() { "rtl" } else { "ltr" };
    let body = page
        .full_content
        .as_deref()
        .map(markdown_to_html)
        .unwrap_or_else(|| format!("<h1>{}</h1>\n", escape(&page.h1)));

    format!(
        r#"<!DOCTYPE html>
<html lang="{locale}" dir="{direction}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="canonical" href="{url}">
</head>
<body>
<main>
{body}</main>
</body>
</html>
"#,
        locale = page.locale,
        title = escape(&page.title),
        description = escape(&page.meta_desc),
        url = escape(&page.url),
    )
}

/// Writes the HTML preview of a page.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_preview(path: &Path, page: &Page) -> Result<()> {
    write_atomic(path, page_html(page).as_bytes())?;
    info!("Saved preview of {} to {}", page.url, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::content::ContentGenerator;
    use crate::manifest::{ManifestScope, generate_manifest};


    #[test]
    fn markdown_blocks_become_html() {
        let html = markdown_to_html(
            "# Title\n\nSome **bold** text\nwrapped.\n\n- one\n- two\n\n1. first\n2. second\n",
        );
        assert!(html.starts_with("<h1>Title</h1>\n"));
        assert!(html.contains("<p>Some <strong>bold</strong> text"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li>second</li>"));
    }

    #[test]
    fn tables_and_emphasis_render_as_html() {
        let html = markdown_to_html(
            "| Expense | GCC |\n|---|---|\n| a | b |\n\n*Last Updated: March 2025*\n",
        );
        assert!(html.contains("<th>Expense</th>"));
        assert!(html.contains("<td>a</td>"));
        assert!(html.contains("<em>Last Updated: March 2025</em>"));
        assert!(!html.contains("*Last"));
        assert!(!html.contains("<td>Expense</td>"));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(markdown_to_html("a < b & c"), "<p>a &lt; b &amp; c</p>\n");
    }

    #[test]
    fn generated_page_renders() {
        let catalog = Catalog::builtin();
        let page = generate_manifest(&catalog, &ManifestScope::default())
            .into_iter()
            .next()
            .expect("sample page");
        let page = ContentGenerator::new(&catalog, Some(9)).enrich(&page);

        let html = page_html(&page);
        assert!(html.contains("<html lang=\"en\" dir=\"ltr\">"));
        assert!(html.contains("<title>Dubai Heart Surgery in India"));
        assert!(html.contains("<thead>"));
        assert!(html.contains("<em>Last Updated:"));
    }
}
