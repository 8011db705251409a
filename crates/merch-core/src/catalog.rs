use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{CatalogError, Product};

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub products: Vec<Product>,
}

/// Load and validate the product catalog from a YAML file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: CatalogFile = serde_yaml::from_str(&content)?;

    validate_catalog(&catalog)?;

    tracing::debug!(products = catalog.products.len(), "catalog loaded");
    Ok(catalog)
}

fn validate_catalog(catalog: &CatalogFile) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();

    for product in &catalog.products {
        if product.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "product name must be non-empty".to_string(),
            ));
        }

        if !seen_ids.insert(product.id) {
            return Err(CatalogError::Validation(format!(
                "duplicate product id: {}",
                product.id
            )));
        }

        if product.price < Decimal::ZERO {
            return Err(CatalogError::Validation(format!(
                "product '{}' has negative price {}",
                product.name, product.price
            )));
        }

        if !(0.0..=5.0).contains(&product.rating) {
            return Err(CatalogError::Validation(format!(
                "product '{}' has rating {} outside [0, 5]",
                product.name, product.rating
            )));
        }

        if product.sizes.is_empty() {
            return Err(CatalogError::Validation(format!(
                "product '{}' has no sizes",
                product.name
            )));
        }
    }

    Ok(())
}

/// The embedded mock catalog the storefront ships with.
///
/// Order matches the original merchandising order; it is the tie-break
/// order for every catalog view.
#[must_use]
pub fn default_catalog() -> Vec<Product> {
    fn product(
        id: u32,
        name: &str,
        category: &str,
        color: &str,
        price: u32,
        rating: f64,
        review_count: u32,
        sizes: &[&str],
        image_url: &str,
        featured: bool,
    ) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            color: color.to_string(),
            price: Decimal::from(price),
            rating,
            review_count,
            sizes: sizes.iter().map(ToString::to_string).collect(),
            image_url: image_url.to_string(),
            featured,
        }
    }

    vec![
        product(
            4,
            "Classic Logo Tee",
            "Apparel",
            "Black",
            35,
            4.8,
            203,
            &["S", "M", "L", "XL"],
            "https://images.unsplash.com/photo-1583743814966-8936f5b7be1a?w=500&h=500&fit=crop",
            true,
        ),
        product(
            6,
            "Minimalist Hoodie",
            "Apparel",
            "Gray",
            75,
            4.9,
            150,
            &["M", "L", "XL"],
            "https://images.unsplash.com/photo-1509942774463-acf339cf87d5?w=500&h=500&fit=crop",
            true,
        ),
        product(
            8,
            "Signature Cap",
            "Apparel",
            "White",
            25,
            4.7,
            112,
            &["One Size"],
            "https://images.unsplash.com/photo-1588850561407-57c7b7493d83?w=500&h=500&fit=crop",
            true,
        ),
        product(
            7,
            "Canvas Tote Bag",
            "Accessories",
            "Beige",
            45,
            4.5,
            78,
            &["One Size"],
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500&h=500&fit=crop",
            false,
        ),
        product(
            9,
            "Logo Sticker Pack",
            "Accessories",
            "Multi",
            15,
            4.9,
            301,
            &["One Size"],
            "https://images.unsplash.com/photo-1621955931499-c34456a86834?w=500&h=500&fit=crop",
            false,
        ),
        product(
            10,
            "Enamel Pin Set",
            "Accessories",
            "Multi",
            20,
            4.8,
            95,
            &["One Size"],
            "https://images.unsplash.com/photo-1611542858935-441674c19235?w=500&h=500&fit=crop",
            false,
        ),
        product(
            11,
            "Graphic Sweatshirt",
            "Apparel",
            "White",
            65,
            4.7,
            132,
            &["S", "M", "L"],
            "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?w=500&h=500&fit=crop",
            false,
        ),
        product(
            12,
            "Beanie Hat",
            "Apparel",
            "Black",
            30,
            4.6,
            88,
            &["One Size"],
            "https://images.unsplash.com/photo-1576871335624-72750b6de3e2?w=500&h=500&fit=crop",
            false,
        ),
    ]
}
