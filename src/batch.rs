use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::color::Color;
use crate::error::GridError;

/// One cell of a batch, naming its color by palette key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub x: u32,
    pub y: u32,
    pub color: String,
}

/// Many cells at once: a palette plus coordinates applied in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub colors: HashMap<String, Color>,
    pub coordinates: Vec<BatchEntry>,
}

impl BatchRequest {
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves every entry's palette key. Fails on the first key missing
    /// from `colors`.
    pub fn resolve(&self) -> Result<Vec<(u32, u32, Color)>, GridError> {
        self.coordinates
            .iter()
            .map(|entry| {
                self.colors
                    .get(&entry.color)
                    .map(|color| (entry.x, entry.y, *color))
                    .ok_or_else(|| GridError::UnknownPaletteKey(entry.color.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_resolves_in_order() {
        let request = BatchRequest::from_json(
            r##"{
                "colors": {"a": "#fff", "b": "#ff0000"},
                "coordinates": [
                    {"x": 1, "y": 1, "color": "a"},
                    {"x": 0, "y": 2, "color": "b"},
                    {"x": 1, "y": 1, "color": "b"}
                ]
            }"##,
        )
        .unwrap();

        let resolved = request.resolve().unwrap();
        assert_eq!(
            resolved,
            vec![
                (1, 1, Color::WHITE),
                (0, 2, Color::rgb(255, 0, 0)),
                (1, 1, Color::rgb(255, 0, 0)),
            ]
        );
    }

    #[test]
    fn missing_key_is_reported() {
        let request = BatchRequest::from_json(
            r##"{"colors": {"a": "#000"}, "coordinates": [{"x": 0, "y": 0, "color": "z"}]}"##,
        )
        .unwrap();
        assert!(matches!(request.resolve(), Err(GridError::UnknownPaletteKey(key)) if key == "z"));
    }

    #[test]
    fn negative_coordinates_do_not_parse() {
        let result = BatchRequest::from_json(
            r##"{"colors": {"a": "#000"}, "coordinates": [{"x": -1, "y": 0, "color": "a"}]}"##,
        );
        assert!(matches!(result, Err(GridError::Json(_))));
    }
}
