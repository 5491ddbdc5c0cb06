// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu configuration.

use alloc::string::String;

use crate::error::{ConfigError, ConfigResult};
use crate::filter::DEFAULT_CUSTOM_VALUE_LABEL;
use crate::selection::SelectionMode;

/// Host-supplied configuration of one menu instance.
///
/// Fields are public and the struct implements [`Default`], so hosts override
/// only what they need:
///
/// ```rust
/// use understory_select_menu::{MenuConfig, SelectionMode};
///
/// let config = MenuConfig {
///     mode: SelectionMode::Multi,
///     enable_search: true,
///     allow_custom_value: true,
///     ..MenuConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MenuConfig {
    /// Single- or multi-select behavior.
    pub mode: SelectionMode,
    /// Shows the search box and enables filtering.
    pub enable_search: bool,
    /// Placeholder text for the search box.
    pub search_placeholder: String,
    /// Always render rows through the virtual list, even without a search.
    pub enable_virtualization: bool,
    /// Uniform row height used by the virtual list, in logical pixels.
    pub virtual_list_item_height: f64,
    /// Rows realized beyond each edge of the viewport.
    pub virtual_list_overscan: usize,
    /// Height of the scrollable list viewport, in logical pixels.
    pub viewport_height: f64,
    /// Distance from the end of the list at which more items are requested.
    pub end_reached_threshold: f64,
    /// Offer the search text as a selectable value when nothing matches it exactly.
    pub allow_custom_value: bool,
    /// Wording of the custom-value entry, rendered as `{label} "{query}"`.
    pub custom_value_label: String,
    /// Placeholder row shown when the menu has no items at all.
    pub empty_text: String,
    /// Placeholder row shown when the search matches nothing.
    pub no_results_text: String,
    /// Keyboard navigation wraps from the last row to the first and back.
    pub loop_focus: bool,
    /// Suppresses opening and selection.
    pub disabled: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            enable_search: false,
            search_placeholder: String::from("Search"),
            enable_virtualization: false,
            virtual_list_item_height: 36.0,
            virtual_list_overscan: 5,
            viewport_height: 320.0,
            end_reached_threshold: 100.0,
            allow_custom_value: false,
            custom_value_label: String::from(DEFAULT_CUSTOM_VALUE_LABEL),
            empty_text: String::from("No items available"),
            no_results_text: String::from("No results found"),
            loop_focus: false,
            disabled: false,
        }
    }
}

impl MenuConfig {
    /// Checks the numeric fields.
    pub fn validate(&self) -> ConfigResult<()> {
        let height = self.virtual_list_item_height;
        if !height.is_finite() || height <= 0.0 {
            return Err(ConfigError::InvalidItemHeight(height));
        }
        let viewport = self.viewport_height;
        if !viewport.is_finite() || viewport < 0.0 {
            return Err(ConfigError::InvalidViewportHeight(viewport));
        }
        let threshold = self.end_reached_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidEndReachedThreshold(threshold));
        }
        Ok(())
    }

    /// The custom-value template, when custom values are enabled and reachable.
    ///
    /// Custom values need a search box to type into.
    #[must_use]
    pub fn custom_value_template(&self) -> Option<&str> {
        (self.enable_search && self.allow_custom_value).then_some(self.custom_value_label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(MenuConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_numbers() {
        let config = MenuConfig {
            virtual_list_item_height: 0.0,
            ..MenuConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidItemHeight(0.0)));

        let config = MenuConfig {
            viewport_height: -1.0,
            ..MenuConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidViewportHeight(-1.0))
        );

        let config = MenuConfig {
            end_reached_threshold: f64::INFINITY,
            ..MenuConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndReachedThreshold(_))
        ));

        let config = MenuConfig {
            virtual_list_item_height: f64::NAN,
            ..MenuConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidItemHeight(_))
        ));
    }

    #[test]
    fn custom_values_need_search() {
        let config = MenuConfig {
            allow_custom_value: true,
            ..MenuConfig::default()
        };
        assert_eq!(config.custom_value_template(), None);

        let config = MenuConfig {
            enable_search: true,
            ..config
        };
        assert_eq!(config.custom_value_template(), Some("Specify"));
    }
}
