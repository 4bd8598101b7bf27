//! HTML rendering of the index page.

use crate::config::IndexConfig;
use crate::scan::MatchedFile;

/// Replace the five HTML-significant characters with their entities.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn render_list(config: &IndexConfig, files: &[MatchedFile]) -> String {
    if files.is_empty() {
        return format!(
            "<p>No {}s found.</p>",
            escape_html(&config.normalized_extension().to_uppercase())
        );
    }

    let items: Vec<String> = files
        .iter()
        .map(|file| {
            format!(
                "  <li>{} \u{2014} <a href=\"{}\" download>Download</a></li>",
                escape_html(file.file_name()),
                file.href()
            )
        })
        .collect();
    format!("<ul>\n{}\n</ul>", items.join("\n"))
}

/// Render the full page. `files` is listed in the order given.
pub fn render_index(config: &IndexConfig, files: &[MatchedFile]) -> String {
    let title = escape_html(&config.title);
    let list = render_list(config, files);
    format!(
        "<!doctype html>
<html lang=\"en\">
  <head>
    <meta charset=\"utf-8\" />
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />
    <title>{title}</title>
  </head>
  <body>
    <h1>{title}</h1>
    {list}
  </body>
</html>
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn file(rel: &str) -> MatchedFile {
        MatchedFile::from_relative_path(Path::new(rel)).unwrap()
    }

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"A&B<C>"it's".pdf"#),
            "A&amp;B&lt;C&gt;&quot;it&#39;s&quot;.pdf"
        );
    }

    #[test]
    fn empty_listing_renders_no_results_paragraph() {
        let html = render_index(&IndexConfig::default(), &[]);
        assert!(html.contains("<p>No PDFs found.</p>"));
        assert!(!html.contains("<ul>"));
        assert!(html.contains("<title>Records</title>"));
        assert!(html.contains("<h1>Records</h1>"));
    }

    #[test]
    fn entries_show_base_name_and_download_link() {
        let html = render_index(&IndexConfig::default(), &[file("b/A&B.pdf")]);
        assert!(html.contains(
            "  <li>A&amp;B.pdf \u{2014} <a href=\"b/A%26B.pdf\" download>Download</a></li>"
        ));
    }
}
