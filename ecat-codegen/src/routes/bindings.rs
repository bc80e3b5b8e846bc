use indexmap::IndexMap;

use super::ComponentRef;

/// Names bound by more than one import, in first-seen order.
pub fn duplicate_bindings(components: &[ComponentRef]) -> Vec<&str> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for component in components {
        *counts.entry(component.name.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str) -> ComponentRef {
        ComponentRef {
            name: name.to_string(),
            path: format!("{}/Index", name.to_lowercase()),
        }
    }

    #[test]
    fn test_no_duplicates() {
        let components = [component("List"), component("Edit")];
        assert!(duplicate_bindings(&components).is_empty());
    }

    #[test]
    fn test_duplicates_in_first_seen_order() {
        let components = [
            component("Edit"),
            component("List"),
            component("List"),
            component("Edit"),
            component("List"),
        ];

        assert_eq!(duplicate_bindings(&components), ["Edit", "List"]);
    }
}
