//! Catalog inspection commands.

use hive_image_storefront::catalog::CATALOG;

/// Print the catalog as an aligned table.
pub fn list() {
    println!(
        "{:<4} {:<28} {:<12} {:>10} {:>7} {:>6}  {}",
        "ID", "Name", "Category", "Price", "Rating", "Stock", "Featured"
    );
    for product in CATALOG.products() {
        println!(
            "{:<4} {:<28} {:<12} {:>10} {:>7.1} {:>6}  {}",
            product.id,
            product.name,
            product.category.to_string(),
            format!("£{:.2}", product.price),
            product.rating,
            product.stock,
            if product.featured { "yes" } else { "" }
        );
    }
}

/// Print the catalog as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(CATALOG.products())?;
    println!("{json}");
    Ok(())
}
