use merch_core::Product;

use crate::{FilterConfig, SortKey};

/// Compute the visible catalog view: filter, then order.
///
/// Pure over its inputs; the full view is recomputed on every call and
/// no product is mutated. Ties under the sort key keep their catalog
/// order (`sort_by` is stable).
#[must_use]
pub fn visible_products<'a>(
    products: &'a [Product],
    filter: &FilterConfig,
    sort: SortKey,
) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products.iter().filter(|p| filter.matches(p)).collect();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

#[cfg(test)]
mod tests {
    use merch_core::default_catalog;
    use rust_decimal::Decimal;

    use super::*;

    fn ids(view: &[&Product]) -> Vec<u32> {
        view.iter().map(|p| p.id).collect()
    }

    #[test]
    fn unrestricted_filter_returns_every_product_name_sorted() {
        let catalog = default_catalog();
        let view = visible_products(&catalog, &FilterConfig::default(), SortKey::Name);
        assert_eq!(view.len(), catalog.len());

        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn every_product_is_visible_under_its_own_category() {
        let catalog = default_catalog();
        for product in &catalog {
            let mut filter = FilterConfig::default();
            filter.toggle_category(&product.category);
            let view = visible_products(&catalog, &filter, SortKey::Name);
            assert!(
                view.iter().any(|p| p.id == product.id),
                "product {} missing from its own category view",
                product.id
            );
        }
    }

    #[test]
    fn price_sorts_are_exact_reverses_without_ties() {
        let catalog = default_catalog();
        let filter = FilterConfig::default();
        let low = visible_products(&catalog, &filter, SortKey::PriceLow);
        let mut high = visible_products(&catalog, &filter, SortKey::PriceHigh);
        high.reverse();
        assert_eq!(ids(&low), ids(&high));
    }

    #[test]
    fn rating_sort_is_descending() {
        let catalog = default_catalog();
        let view = visible_products(&catalog, &FilterConfig::default(), SortKey::Rating);
        for pair in view.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn rating_ties_preserve_catalog_order() {
        let catalog = default_catalog();
        let view = visible_products(&catalog, &FilterConfig::default(), SortKey::Rating);
        // Tee (id 4) and Pin Set (id 10) are both rated 4.8; the tee is
        // earlier in the catalog.
        let tee = view.iter().position(|p| p.id == 4).unwrap();
        let pins = view.iter().position(|p| p.id == 10).unwrap();
        assert!(tee < pins);
    }

    #[test]
    fn category_filter_scenario_restores_order_when_cleared() {
        let catalog = vec![
            Product {
                id: 1,
                name: "Team Jersey".to_string(),
                category: "Apparel".to_string(),
                color: "Black".to_string(),
                price: Decimal::from(35u32),
                rating: 4.8,
                review_count: 20,
                sizes: vec!["M".to_string()],
                image_url: "https://example.com/1.jpg".to_string(),
                featured: false,
            },
            Product {
                id: 2,
                name: "Water Bottle".to_string(),
                category: "Accessories".to_string(),
                color: "Beige".to_string(),
                price: Decimal::from(45u32),
                rating: 4.5,
                review_count: 10,
                sizes: vec!["One Size".to_string()],
                image_url: "https://example.com/2.jpg".to_string(),
                featured: false,
            },
        ];

        let mut filter = FilterConfig::default();
        filter.toggle_category("Apparel");
        let narrowed = visible_products(&catalog, &filter, SortKey::Name);
        assert_eq!(ids(&narrowed), vec![1]);

        filter.toggle_category("Apparel");
        let restored = visible_products(&catalog, &filter, SortKey::Name);
        assert_eq!(ids(&restored), vec![1, 2]);
    }

    #[test]
    fn narrow_band_filters_by_price() {
        let catalog = default_catalog();
        let mut filter = FilterConfig::default();
        filter.set_price_range(Decimal::from(30u32), Decimal::from(45u32));
        let view = visible_products(&catalog, &filter, SortKey::PriceLow);
        // 30 (beanie), 35 (tee), 45 (tote)
        assert_eq!(ids(&view), vec![12, 4, 7]);
    }

    #[test]
    fn inverted_band_yields_empty_view() {
        let catalog = default_catalog();
        let mut filter = FilterConfig::default();
        filter.set_price_range(Decimal::from(60u32), Decimal::from(20u32));
        assert!(visible_products(&catalog, &filter, SortKey::Name).is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_view() {
        let view = visible_products(&[], &FilterConfig::default(), SortKey::Rating);
        assert!(view.is_empty());
    }
}
