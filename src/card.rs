//! Chat card payload built from flattened key-value pairs.
//!
//! The payload follows the Google Chat "cards" message layout: a single card
//! with a fixed header and one section holding one key-value widget per
//! flattened entry.

use serde::Serialize;

use crate::flatten::FlattenedMap;

/// Title shown in the card header.
pub const CARD_TITLE: &str = "Flattened JSON Data";

/// Subtitle shown in the card header.
pub const CARD_SUBTITLE: &str = "Key-value pairs from nested JSON";

/// Top-level webhook message carrying the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPayload {
    cards: Vec<Card>,
}

/// A single card with a header and its sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Card header
    pub header: CardHeader,
    /// Card sections, in display order
    pub sections: Vec<Section>,
}

/// Card header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHeader {
    /// Header title
    pub title: String,
    /// Header subtitle
    pub subtitle: String,
}

/// A group of widgets within a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Widgets, in display order
    pub widgets: Vec<Widget>,
}

/// A card widget. Only the key-value kind is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    /// Labelled value
    KeyValue(KeyValue),
}

/// A label/content pair shown as one row of the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    /// Small label above the content (the flattened path)
    pub top_label: String,
    /// Main text (the rendered value)
    pub content: String,
}

impl Widget {
    /// Creates a key-value widget.
    #[must_use]
    pub fn key_value(top_label: impl Into<String>, content: impl Into<String>) -> Self {
        Self::KeyValue(KeyValue {
            top_label: top_label.into(),
            content: content.into(),
        })
    }
}

impl CardPayload {
    /// Wraps a single card into a payload.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self { cards: vec![card] }
    }

    /// Returns the card carried by this payload.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.cards[0]
    }

    /// Returns every widget of the card, across all sections.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.card().sections.iter().flat_map(|s| s.widgets.iter())
    }

    /// Serializes the payload to a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Builds the card payload for a flattened document.
///
/// One key-value widget is produced per entry, in map order. An empty map
/// yields a card with a header and an empty widget list.
#[must_use]
pub fn build_card(flat: &FlattenedMap) -> CardPayload {
    let widgets = flat
        .iter()
        .map(|(path, value)| Widget::key_value(path.as_str(), value.as_str()))
        .collect();

    CardPayload::new(Card {
        header: CardHeader {
            title: CARD_TITLE.to_string(),
            subtitle: CARD_SUBTITLE.to_string(),
        },
        sections: vec![Section { widgets }],
    })
}
