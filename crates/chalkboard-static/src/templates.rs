//! Page template for rendering the menu document.

use minijinja::{context, Environment};

use chalkboard_menu::{Menu, Section};

/// Remotely hosted header icon, the only external asset the page references.
const ICON_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/3/37/Cib-coffeescript_%28CoreUI_Icons_v1.0.0%29.svg/250px-Cib-coffeescript_%28CoreUI_Icons_v1.0.0%29.svg.png";

/// A section ready for rendering.
#[derive(Debug, Clone, serde::Serialize)]
struct SectionContext {
    /// Upper-cased section name
    label: String,
    /// Items in document order
    items: Vec<ItemContext>,
}

/// An item ready for rendering.
#[derive(Debug, Clone, serde::Serialize)]
struct ItemContext {
    name: String,
    /// Pre-formatted price string
    price: String,
    /// `None` renders no description block at all
    description: Option<String>,
}

/// Template engine using minijinja.
pub struct PageTemplates {
    env: Environment<'static>,
}

impl PageTemplates {
    /// Create a new template engine with the built-in page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("menu.html".to_string(), MENU_TEMPLATE.to_string())
            .expect("Failed to add menu template");

        Self { env }
    }

    /// Render a validated menu into a complete HTML document.
    ///
    /// The title renders upper-cased in both the page `<title>` and the
    /// header bar. The inline stylesheet is the only value passed through
    /// unescaped.
    pub fn render(&self, menu: &Menu, css: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("menu.html")?;

        let sections: Vec<SectionContext> = menu.sections.iter().map(section_context).collect();

        tmpl.render(context! {
            title => menu.title.to_uppercase(),
            icon_url => ICON_URL,
            css => css,
            sections => sections,
        })
    }
}

impl Default for PageTemplates {
    fn default() -> Self {
        Self::new()
    }
}

fn section_context(section: &Section) -> SectionContext {
    SectionContext {
        label: section.name.to_uppercase(),
        items: section
            .items
            .iter()
            .map(|item| ItemContext {
                name: item.name.clone(),
                price: item.price.format(),
                description: item.description.clone(),
            })
            .collect(),
    }
}

const MENU_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ title }}</title>
    <style>
{{ css | safe }}
    </style>
  </head>
  <body>
    <div class="header">
      <img class="header-icon" src="{{ icon_url }}" alt="Coffee mug icon" />
      {{ title }}
    </div>
    <div class="page">
      <main class="menu-grid">
{% for section in sections %}        <section class="menu-section">
          <div class="section-title">{{ section.label }}</div>
          <div class="section-items">
{% for item in section.items %}            <div class="menu-item">
              <div class="item-header">
                <div class="item-name">{{ item.name }}</div>
                <div class="item-price">{{ item.price }}</div>
              </div>
{% if item.description %}              <div class="item-description">{{ item.description }}</div>
{% endif %}            </div>
{% endfor %}          </div>
        </section>
{% endfor %}      </main>
    </div>
  </body>
</html>
"##;
