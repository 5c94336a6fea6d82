//! Menu schema validation.
//!
//! Walks the untyped YAML tree depth-first, left-to-right, checking shape
//! before content and stopping at the first violation. On success the tree
//! is narrowed into the typed [`Menu`] model.

use serde_yaml::Value;

use crate::menu::{Item, Menu, Price, Section};

/// A schema violation.
///
/// The `Display` output of each variant is the complete user-facing
/// diagnostic. Section and item indexes are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("YAML root must be a mapping with a 'menu' key.")]
    Root,

    #[error("'menu.title' must be a non-empty string.")]
    Title,

    #[error("'menu.sections' must be an array.")]
    Sections,

    #[error("Section {index} must be a mapping.")]
    SectionNotMapping { index: usize },

    #[error("Section {index} is missing a 'name'.")]
    SectionMissingName { index: usize },

    #[error("Section '{section}' must have an 'items' array.")]
    SectionMissingItems { section: String },

    #[error("Item {index} in section '{section}' must be a mapping.")]
    ItemNotMapping { index: usize, section: String },

    #[error("Item {index} in section '{section}' is missing a 'name'.")]
    ItemMissingName { index: usize, section: String },

    #[error("Item '{item}' in section '{section}' has invalid price.")]
    ItemInvalidPrice { item: String, section: String },
}

/// Validate an untyped YAML tree against the menu schema.
///
/// Emptiness checks run on the trimmed form of each string, but the model
/// keeps the original untrimmed value.
pub fn validate(doc: &Value) -> Result<Menu, SchemaError> {
    let menu = match doc {
        Value::Mapping(root) => match root.get("menu") {
            Some(Value::Mapping(menu)) => menu,
            _ => return Err(SchemaError::Root),
        },
        _ => return Err(SchemaError::Root),
    };

    let title = non_empty_string(menu.get("title")).ok_or(SchemaError::Title)?;

    let sections = match menu.get("sections") {
        Some(Value::Sequence(sections)) if !sections.is_empty() => sections,
        _ => return Err(SchemaError::Sections),
    };

    let sections = sections
        .iter()
        .enumerate()
        .map(|(i, section)| validate_section(section, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Menu {
        title: title.to_string(),
        sections,
    })
}

fn validate_section(value: &Value, index: usize) -> Result<Section, SchemaError> {
    let Value::Mapping(section) = value else {
        return Err(SchemaError::SectionNotMapping { index });
    };

    let name =
        non_empty_string(section.get("name")).ok_or(SchemaError::SectionMissingName { index })?;

    let items = match section.get("items") {
        Some(Value::Sequence(items)) if !items.is_empty() => items,
        _ => {
            return Err(SchemaError::SectionMissingItems {
                section: name.to_string(),
            })
        }
    };

    let items = items
        .iter()
        .enumerate()
        .map(|(i, item)| validate_item(item, i + 1, name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Section {
        name: name.to_string(),
        items,
    })
}

fn validate_item(value: &Value, index: usize, section: &str) -> Result<Item, SchemaError> {
    let Value::Mapping(item) = value else {
        return Err(SchemaError::ItemNotMapping {
            index,
            section: section.to_string(),
        });
    };

    let name = non_empty_string(item.get("name")).ok_or_else(|| SchemaError::ItemMissingName {
        index,
        section: section.to_string(),
    })?;

    let price = validate_price(item.get("price")).ok_or_else(|| SchemaError::ItemInvalidPrice {
        item: name.to_string(),
        section: section.to_string(),
    })?;

    // Anything other than a non-blank string is treated as no description.
    let description = non_empty_string(item.get("description")).map(str::to_string);

    Ok(Item {
        name: name.to_string(),
        price,
        description,
    })
}

/// Check a price node against the price union: a non-blank string, or a
/// non-empty mapping of string sizes to non-blank string amounts.
fn validate_price(value: Option<&Value>) -> Option<Price> {
    match value {
        Some(Value::String(amount)) if !amount.trim().is_empty() => {
            Some(Price::Simple(amount.clone()))
        }
        Some(Value::Mapping(sizes)) if !sizes.is_empty() => {
            let mut pairs = Vec::with_capacity(sizes.len());
            for (size, amount) in sizes {
                let (Value::String(size), Value::String(amount)) = (size, amount) else {
                    return None;
                };
                if amount.trim().is_empty() {
                    return None;
                }
                pairs.push((size.clone(), amount.clone()));
            }
            Some(Price::Sized(pairs))
        }
        _ => None,
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn validates_complete_menu() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
          price: "$3.00"
    - name: Tea
      items:
        - name: Green Tea
          price: {Small: "$2.50", Large: "$3.50"}
          description: "Locally sourced"
"#,
        );

        let menu = validate(&doc).unwrap();

        assert_eq!(menu.title, "Morning Brew");
        assert_eq!(menu.sections.len(), 2);
        assert_eq!(menu.sections[0].name, "Coffee");
        assert_eq!(menu.sections[0].items[0].name, "Espresso");
        assert_eq!(
            menu.sections[0].items[0].price,
            Price::Simple("$3.00".to_string())
        );
        assert_eq!(menu.sections[0].items[0].description, None);
        assert_eq!(
            menu.sections[1].items[0].price,
            Price::Sized(vec![
                ("Small".to_string(), "$2.50".to_string()),
                ("Large".to_string(), "$3.50".to_string()),
            ])
        );
        assert_eq!(
            menu.sections[1].items[0].description,
            Some("Locally sourced".to_string())
        );
    }

    #[test]
    fn keeps_untrimmed_strings_in_model() {
        let doc = parse(
            r#"
menu:
  title: "  Morning Brew  "
  sections:
    - name: Coffee
      items:
        - name: "  Espresso  "
          price: "$3.00"
"#,
        );

        let menu = validate(&doc).unwrap();

        assert_eq!(menu.title, "  Morning Brew  ");
        assert_eq!(menu.sections[0].items[0].name, "  Espresso  ");
    }

    #[test]
    fn rejects_non_mapping_root() {
        let doc = parse("- just\n- a\n- list\n");

        let err = validate(&doc).unwrap_err();

        assert_eq!(
            err.to_string(),
            "YAML root must be a mapping with a 'menu' key."
        );
    }

    #[test]
    fn rejects_missing_menu_key() {
        let doc = parse("title: Morning Brew\n");

        assert_eq!(validate(&doc).unwrap_err(), SchemaError::Root);
    }

    #[test]
    fn rejects_non_mapping_menu_value() {
        let doc = parse("menu: just a string\n");

        assert_eq!(validate(&doc).unwrap_err(), SchemaError::Root);
    }

    #[test]
    fn rejects_blank_title() {
        let doc = parse("menu:\n  title: \"   \"\n  sections:\n    - name: Coffee\n");

        let err = validate(&doc).unwrap_err();

        assert_eq!(err.to_string(), "'menu.title' must be a non-empty string.");
    }

    #[test]
    fn rejects_missing_title() {
        let doc = parse("menu:\n  sections: []\n");

        assert_eq!(validate(&doc).unwrap_err(), SchemaError::Title);
    }

    #[test]
    fn rejects_empty_sections() {
        let doc = parse("menu:\n  title: Morning Brew\n  sections: []\n");

        let err = validate(&doc).unwrap_err();

        assert_eq!(err.to_string(), "'menu.sections' must be an array.");
    }

    #[test]
    fn rejects_non_sequence_sections() {
        let doc = parse("menu:\n  title: Morning Brew\n  sections: Coffee\n");

        assert_eq!(validate(&doc).unwrap_err(), SchemaError::Sections);
    }

    #[test]
    fn rejects_non_mapping_section_with_index() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
          price: "$3.00"
    - just a string
"#,
        );

        let err = validate(&doc).unwrap_err();

        assert_eq!(err.to_string(), "Section 2 must be a mapping.");
    }

    #[test]
    fn rejects_section_without_name() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - items:
        - name: Espresso
          price: "$3.00"
"#,
        );

        let err = validate(&doc).unwrap_err();

        assert_eq!(err.to_string(), "Section 1 is missing a 'name'.");
    }

    #[test]
    fn rejects_section_without_items() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
"#,
        );

        let err = validate(&doc).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Section 'Coffee' must have an 'items' array."
        );
    }

    #[test]
    fn rejects_section_with_empty_items() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items: []
"#,
        );

        assert_eq!(
            validate(&doc).unwrap_err(),
            SchemaError::SectionMissingItems {
                section: "Coffee".to_string()
            }
        );
    }

    #[test]
    fn rejects_non_mapping_item_with_index() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
          price: "$3.00"
        - just a string
"#,
        );

        let err = validate(&doc).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Item 2 in section 'Coffee' must be a mapping."
        );
    }

    #[test]
    fn rejects_item_without_name() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - price: "$3.00"
"#,
        );

        let err = validate(&doc).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Item 1 in section 'Coffee' is missing a 'name'."
        );
    }

    #[test]
    fn rejects_missing_price() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
"#,
        );

        let err = validate(&doc).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Item 'Espresso' in section 'Coffee' has invalid price."
        );
    }

    #[test]
    fn rejects_blank_price_string() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
          price: "  "
"#,
        );

        assert!(matches!(
            validate(&doc).unwrap_err(),
            SchemaError::ItemInvalidPrice { .. }
        ));
    }

    #[test]
    fn rejects_numeric_price() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
          price: 3.00
"#,
        );

        assert!(matches!(
            validate(&doc).unwrap_err(),
            SchemaError::ItemInvalidPrice { .. }
        ));
    }

    #[test]
    fn rejects_empty_price_mapping() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
          price: {}
"#,
        );

        assert!(matches!(
            validate(&doc).unwrap_err(),
            SchemaError::ItemInvalidPrice { .. }
        ));
    }

    #[test]
    fn rejects_price_mapping_with_blank_value() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
          price: {Small: "$3", Large: "  "}
"#,
        );

        assert!(matches!(
            validate(&doc).unwrap_err(),
            SchemaError::ItemInvalidPrice { .. }
        ));
    }

    #[test]
    fn rejects_price_mapping_with_non_string_value() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
          price: {Small: 3}
"#,
        );

        assert!(matches!(
            validate(&doc).unwrap_err(),
            SchemaError::ItemInvalidPrice { .. }
        ));
    }

    #[test]
    fn keeps_sized_price_in_document_order() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Tea
      items:
        - name: Green Tea
          price: {Large: "$3.50", Small: "$2.50", Medium: "$3.00"}
"#,
        );

        let menu = validate(&doc).unwrap();

        assert_eq!(
            menu.sections[0].items[0].price,
            Price::Sized(vec![
                ("Large".to_string(), "$3.50".to_string()),
                ("Small".to_string(), "$2.50".to_string()),
                ("Medium".to_string(), "$3.00".to_string()),
            ])
        );
    }

    #[test]
    fn ignores_blank_description() {
        let doc = parse(
            r#"
menu:
  title: Morning Brew
  sections:
    - name: Coffee
      items:
        - name: Espresso
          price: "$3.00"
          description: "   "
"#,
        );

        let menu = validate(&doc).unwrap();

        assert_eq!(menu.sections[0].items[0].description, None);
    }

    #[test]
    fn stops_at_first_violation() {
        // Both the title and the first section are invalid; the title check
        // runs first and wins.
        let doc = parse(
            r#"
menu:
  title: ""
  sections:
    - just a string
"#,
        );

        assert_eq!(validate(&doc).unwrap_err(), SchemaError::Title);
    }

    #[test]
    fn repeated_validation_yields_identical_diagnostic() {
        let doc = parse("menu:\n  title: Morning Brew\n  sections: []\n");

        let first = validate(&doc).unwrap_err().to_string();
        let second = validate(&doc).unwrap_err().to_string();

        assert_eq!(first, second);
        assert_eq!(first, "'menu.sections' must be an array.");
    }
}
