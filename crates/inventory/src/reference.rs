//! Built-in reference data for the default dashboard.

use crate::suggestions::SuggestionMatcher;

/// Recipe ideas keyed by product name, in display order.
pub const RECIPE_IDEAS: &[(&str, &str)] = &[
    ("mleko", "Zrób naleśniki lub koktajl owocowy"),
    ("jajka", "Ugotuj jajka na twardo lub zrób omlet"),
    ("chleb", "Zrób grzanki lub zapiekanki"),
    ("warzywa", "Przygotuj zupę krem lub warzywne curry"),
    ("ser", "Wykorzystaj do zapiekanek lub kanapek"),
    ("banany", "Zrób smoothie lub chlebek bananowy"),
];

pub const TIPS: &[&str] = &[
    "Planuj zakupy z listą i nie kupuj na zapas",
    "Sprawdzaj daty ważności i zużywaj produkty na czas",
    "Przechowuj żywność w odpowiednich warunkach",
    "Wykorzystuj resztki do tworzenia nowych potraw",
    "Zamrażaj nadmiar jedzenia, zanim się zepsuje",
];

pub fn recipe_matcher() -> SuggestionMatcher {
    SuggestionMatcher::new(RECIPE_IDEAS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_matcher_covers_every_idea() {
        let matcher = recipe_matcher();
        assert_eq!(matcher.len(), RECIPE_IDEAS.len());
        assert_eq!(
            matcher.suggest(["Mleko", "Banany"]),
            vec![
                "Zrób naleśniki lub koktajl owocowy",
                "Zrób smoothie lub chlebek bananowy"
            ]
        );
    }
}
