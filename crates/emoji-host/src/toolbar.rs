//! A toolbar of named buttons.

use std::collections::{BTreeMap, BTreeSet};

use emoji_palette::Toolbar;

/// Buttons by name, with their icon markup and click routing.
#[derive(Debug, Clone, Default)]
pub struct SimpleToolbar {
    buttons: BTreeMap<String, String>,
    handlers: BTreeSet<String>,
}

impl SimpleToolbar {
    /// A toolbar with one blank button per name.
    #[must_use]
    pub fn with_buttons<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            buttons: names.into_iter().map(|n| (n.to_string(), String::new())).collect(),
            handlers: BTreeSet::new(),
        }
    }

    /// Icon markup of a button.
    #[must_use]
    pub fn icon(&self, name: &str) -> Option<&str> {
        self.buttons.get(name).map(String::as_str)
    }

    /// True if clicks on `name` are routed to a module.
    #[must_use]
    pub fn handles(&self, name: &str) -> bool {
        self.handlers.contains(name)
    }

    /// Button names in order.
    pub fn buttons(&self) -> impl Iterator<Item = &str> {
        self.buttons.keys().map(String::as_str)
    }
}

impl Toolbar for SimpleToolbar {
    fn add_handler(&mut self, name: &str) {
        self.handlers.insert(name.to_string());
    }

    fn set_button_icon(&mut self, name: &str, markup: &str) -> bool {
        self.buttons.get_mut(name).is_some_and(|icon| {
            markup.clone_into(icon);
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_set_only_on_existing_button() {
        let mut tb = SimpleToolbar::with_buttons(["bold", "emoji"]);
        assert!(tb.set_button_icon("emoji", "<svg/>"));
        assert!(!tb.set_button_icon("italic", "<i/>"));
        assert_eq!(tb.icon("emoji"), Some("<svg/>"));
        assert_eq!(tb.icon("bold"), Some(""));
        assert_eq!(tb.icon("italic"), None);
    }

    #[test]
    fn handlers_route_by_name() {
        let mut tb = SimpleToolbar::with_buttons(["emoji"]);
        assert!(!tb.handles("emoji"));
        tb.add_handler("emoji");
        assert!(tb.handles("emoji"));
        assert!(!tb.handles("bold"));
    }

    #[test]
    fn buttons_sorted() {
        let tb = SimpleToolbar::with_buttons(["emoji", "bold"]);
        assert_eq!(tb.buttons().collect::<Vec<_>>(), vec!["bold", "emoji"]);
    }
}
