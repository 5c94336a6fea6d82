//! The fixed page stylesheet.

/// Return the page stylesheet.
pub fn page_css() -> String {
    PAGE_CSS.to_string()
}

/// Minify CSS using lightningcss.
pub fn minify(css: &str) -> Result<String, String> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| format!("CSS parse error: {}", e))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("CSS minify error: {}", e))?;

    Ok(minified.code)
}

const PAGE_CSS: &str = r#":root {
  --ink: #1f1f1f;
  --panel: #e9ecf2;
  --panel-border: #c6c9d1;
  --accent: #c2453a;
  --header-bg: #111111;
  --header-text: #f5f5f5;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: "Helvetica Neue", "Arial", sans-serif;
  color: var(--ink);
  background: #d9dde5;
}

.page {
  max-width: 980px;
  margin: 0 auto;
  padding: 24px 16px 40px;
}

.header {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 12px;
  background: var(--header-bg);
  color: var(--header-text);
  padding: 16px;
  font-size: 34px;
  letter-spacing: 3px;
  font-weight: 700;
}

.header-icon {
  width: 44px;
  height: 44px;
  filter: invert(1);
}

.menu-grid {
  margin-top: 18px;
  display: grid;
  gap: 18px;
}

.menu-section {
  background: var(--panel);
  border: 2px solid var(--panel-border);
  padding: 14px 14px 8px;
}

.section-title {
  color: var(--accent);
  font-weight: 700;
  letter-spacing: 1px;
  font-size: 14px;
  margin-bottom: 8px;
}

.menu-item {
  padding: 6px 0;
  border-top: 1px solid #b9bcc6;
}

.menu-item:first-child {
  border-top: 0;
}

.item-header {
  display: flex;
  justify-content: space-between;
  gap: 12px;
  font-weight: 700;
  font-size: 15px;
}

.item-description {
  margin-top: 2px;
  font-size: 13px;
  color: #444;
}

@media (min-width: 768px) {
  .menu-grid {
    grid-template-columns: 1fr 1fr;
  }
}
"#;
