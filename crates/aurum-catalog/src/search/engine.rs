//! The filter engine.

use crate::catalog::Product;
use crate::search::FilterState;

/// Derive the visible products for a filter state.
///
/// Pure and total: `None` (nothing fetched yet) behaves like an empty slice,
/// the state is applied as given without repair, and the result keeps the
/// input's relative order. Returned references point into `products`.
pub fn derive_visible_products<'a>(
    products: Option<&'a [Product]>,
    state: &FilterState,
) -> Vec<&'a Product> {
    products
        .unwrap_or_default()
        .iter()
        .filter(|product| state.matches(product))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{CategorySelection, Facet, PriceRange};

    fn gold_and_silver() -> Vec<Product> {
        vec![
            Product::new("1", "Gold Ring", 1000, "rings"),
            Product::new("2", "Silver Chain", 50000, "necklaces"),
        ]
    }

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_absent_products_yield_empty() {
        assert!(derive_visible_products(None, &FilterState::new()).is_empty());
    }

    #[test]
    fn test_default_state_returns_everything_in_order() {
        let products = gold_and_silver();
        let visible = derive_visible_products(Some(&products), &FilterState::new());
        assert_eq!(names(&visible), vec!["Gold Ring", "Silver Chain"]);
        assert!(std::ptr::eq(visible[0], &products[0]));
    }

    #[test]
    fn test_case_insensitive_search() {
        let products = gold_and_silver();
        let state = FilterState::new().with_query("gold");
        assert_eq!(
            names(&derive_visible_products(Some(&products), &state)),
            vec!["Gold Ring"]
        );
    }

    #[test]
    fn test_price_range_filter() {
        let products = gold_and_silver();
        let state = FilterState::new().with_price_range(PriceRange::new(200, 10_000));
        assert_eq!(
            names(&derive_visible_products(Some(&products), &state)),
            vec!["Gold Ring"]
        );
    }

    #[test]
    fn test_inverted_price_range_is_empty() {
        let products = gold_and_silver();
        let state = FilterState::new().with_price_range(PriceRange::new(10_000, 200));
        assert!(derive_visible_products(Some(&products), &state).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let products = gold_and_silver();
        let state =
            FilterState::new().with_category(CategorySelection::from_slug("necklaces"));
        assert_eq!(
            names(&derive_visible_products(Some(&products), &state)),
            vec!["Silver Chain"]
        );
    }

    #[test]
    fn test_stone_filter_excludes_unset_stone() {
        let products = gold_and_silver();
        let state = FilterState::new().with_facet(Facet::Stone, "Diamond");
        assert!(derive_visible_products(Some(&products), &state).is_empty());
    }

    #[test]
    fn test_empty_stone_filter_keeps_unset_stone() {
        let products = gold_and_silver();
        let mut state = FilterState::new().with_facet(Facet::Stone, "Diamond");
        state.facet_filters.clear_facet(Facet::Stone);
        assert_eq!(derive_visible_products(Some(&products), &state).len(), 2);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut products = gold_and_silver();
        products[0].purity = Some("22K".to_string());
        products[1].purity = Some("22K".to_string());

        let state = FilterState::new()
            .with_facet(Facet::Purity, "22K")
            .with_query("chain")
            .with_price_range(PriceRange::new(0, 60_000));
        assert_eq!(
            names(&derive_visible_products(Some(&products), &state)),
            vec!["Silver Chain"]
        );
    }

    #[test]
    fn test_idempotent() {
        let products = gold_and_silver();
        let state = FilterState::new().with_query("r");
        let first = derive_visible_products(Some(&products), &state);
        let second = derive_visible_products(Some(&products), &state);
        assert_eq!(first.len(), second.len());
        assert!(first.iter().zip(&second).all(|(a, b)| std::ptr::eq(*a, *b)));
    }

    fn with_attribute(mut product: Product, facet: Facet, label: &str) -> Product {
        let slot = match facet {
            Facet::Purity => &mut product.purity,
            Facet::Weight => &mut product.weight,
            Facet::Stone => &mut product.stone,
            Facet::Gender => &mut product.gender,
            Facet::Occasion => &mut product.occasion,
        };
        *slot = Some(label.to_string());
        product
    }

    #[test]
    fn test_each_facet_filters_on_its_own_attribute() {
        for facet in Facet::ALL {
            let label = facet.options()[0];
            let products = vec![
                with_attribute(Product::new("1", "Tagged", 1000, "rings"), facet, label),
                Product::new("2", "Plain", 1000, "rings"),
            ];

            let mut state = FilterState::new().with_facet(facet, label);
            let names: Vec<&str> = derive_visible_products(Some(&products), &state)
                .iter()
                .map(|p| p.name.as_str())
                .collect();
            assert_eq!(names, vec!["Tagged"], "facet {}", facet);

            // The same label under any other facet matches nothing.
            for other in Facet::ALL.into_iter().filter(|f| *f != facet) {
                let crossed = FilterState::new().with_facet(other, label);
                assert!(
                    derive_visible_products(Some(&products), &crossed).is_empty(),
                    "facet {} read through {}",
                    facet,
                    other
                );
            }

            state.facet_filters.clear_facet(facet);
            assert_eq!(derive_visible_products(Some(&products), &state).len(), 2);
        }
    }
}
