//! Typed menu model.

/// A validated menu document.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    /// Menu title, as written in the source document
    pub title: String,

    /// Sections in document order
    pub sections: Vec<Section>,
}

/// A named group of menu items.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section name; displayed upper-cased
    pub name: String,

    /// Items in document order
    pub items: Vec<Item>,
}

/// A single menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Item name
    pub name: String,

    /// Item pricing
    pub price: Price,

    /// Optional description; absent or blank descriptions render nothing
    pub description: Option<String>,
}

/// Item pricing.
///
/// Either a single formatted amount or an ordered set of size-to-amount
/// pairs, kept in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Price {
    /// A single formatted amount, rendered verbatim
    Simple(String),

    /// Size-label to amount pairs, in document order
    Sized(Vec<(String, String)>),
}

impl Price {
    /// Format the price for display.
    ///
    /// A simple price renders verbatim; a sized price renders its
    /// `"<size>: <value>"` pairs joined by `" / "`.
    pub fn format(&self) -> String {
        match self {
            Price::Simple(value) => value.clone(),
            Price::Sized(pairs) => pairs
                .iter()
                .map(|(size, value)| format!("{}: {}", size, value))
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }
}
