//! Class-name lookup tables used by block renderers.

use std::collections::BTreeMap;

use crate::blocks::{FontSize, FontWeight};

/// `fontSize -> class` and `fontWeight -> class` tables.
///
/// A value without an entry renders with no extra class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleClasses {
    font_size: BTreeMap<FontSize, String>,
    font_weight: BTreeMap<FontWeight, String>,
}

impl Default for StyleClasses {
    fn default() -> Self {
        let font_size = [
            (FontSize::Small, "text-sm"),
            (FontSize::Medium, "text-base"),
            (FontSize::Large, "text-lg"),
        ];
        let font_weight = [
            (FontWeight::Normal, "font-normal"),
            (FontWeight::Lighter, "font-light"),
        ];

        Self {
            font_size: font_size
                .into_iter()
                .map(|(size, class)| (size, class.to_string()))
                .collect(),
            font_weight: font_weight
                .into_iter()
                .map(|(weight, class)| (weight, class.to_string()))
                .collect(),
        }
    }
}

impl StyleClasses {
    /// Tables with no entries at all
    pub fn empty() -> Self {
        Self {
            font_size: BTreeMap::new(),
            font_weight: BTreeMap::new(),
        }
    }

    pub fn font_size_class(&self, size: FontSize) -> Option<&str> {
        self.font_size.get(&size).map(String::as_str)
    }

    pub fn font_weight_class(&self, weight: FontWeight) -> Option<&str> {
        self.font_weight.get(&weight).map(String::as_str)
    }

    /// Map `size` to `class`; an empty class removes the entry
    pub fn set_font_size_class(&mut self, size: FontSize, class: impl Into<String>) {
        let class = class.into();
        if class.trim().is_empty() {
            self.font_size.remove(&size);
        } else {
            self.font_size.insert(size, class);
        }
    }

    /// Map `weight` to `class`; an empty class removes the entry
    pub fn set_font_weight_class(&mut self, weight: FontWeight, class: impl Into<String>) {
        let class = class.into();
        if class.trim().is_empty() {
            self.font_weight.remove(&weight);
        } else {
            self.font_weight.insert(weight, class);
        }
    }

    /// Apply string-keyed overrides, as read from configuration.
    ///
    /// Returns the keys that name no font size or weight; they are skipped.
    pub fn apply_overrides<'a>(
        &mut self,
        font_size: impl IntoIterator<Item = (&'a str, &'a str)>,
        font_weight: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Vec<String> {
        let mut unknown = Vec::new();

        for (key, class) in font_size {
            match key.parse::<FontSize>() {
                Ok(size) => self.set_font_size_class(size, class),
                Err(key) => unknown.push(format!("font_size_classes.{key}")),
            }
        }
        for (key, class) in font_weight {
            match key.parse::<FontWeight>() {
                Ok(weight) => self.set_font_weight_class(weight, class),
                Err(key) => unknown.push(format!("font_weight_classes.{key}")),
            }
        }

        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(FontSize::Small, "text-sm")]
    #[case(FontSize::Medium, "text-base")]
    #[case(FontSize::Large, "text-lg")]
    fn test_default_font_size_classes(#[case] size: FontSize, #[case] class: &str) {
        assert_eq!(StyleClasses::default().font_size_class(size), Some(class));
    }

    #[test]
    fn test_default_weight_classes() {
        let styles = StyleClasses::default();
        assert_eq!(styles.font_weight_class(FontWeight::Normal), Some("font-normal"));
        assert_eq!(styles.font_weight_class(FontWeight::Lighter), Some("font-light"));
    }

    #[test]
    fn test_empty_tables_map_nothing() {
        let styles = StyleClasses::empty();
        assert_eq!(styles.font_size_class(FontSize::Small), None);
        assert_eq!(styles.font_weight_class(FontWeight::Normal), None);
    }

    #[test]
    fn test_overrides_replace_remove_and_report_unknown_keys() {
        let mut styles = StyleClasses::default();

        let unknown = styles.apply_overrides(
            [("large", "text-2xl"), ("medium", ""), ("huge", "text-6xl")],
            [("light", "font-thin")],
        );

        assert_eq!(styles.font_size_class(FontSize::Large), Some("text-2xl"));
        assert_eq!(styles.font_size_class(FontSize::Medium), None);
        assert_eq!(styles.font_size_class(FontSize::Small), Some("text-sm"));
        assert_eq!(
            unknown,
            vec![
                "font_size_classes.huge".to_string(),
                "font_weight_classes.light".to_string()
            ]
        );
    }
}
