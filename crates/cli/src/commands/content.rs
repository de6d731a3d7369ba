//! Content validation commands.

use std::path::Path;

use hive_image_storefront::content::ContentStore;

/// Load the content directory and list the pages it holds.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or a page fails to
/// parse.
pub fn check(dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = ContentStore::load(Path::new(dir))?;

    let mut slugs: Vec<&str> = store.get_all_pages().map(|p| p.slug.as_str()).collect();
    slugs.sort_unstable();

    if slugs.is_empty() {
        println!("No pages found under {dir}/pages");
    } else {
        println!("{} pages loaded from {dir}/pages:", slugs.len());
        for slug in slugs {
            println!("  /pages/{slug}");
        }
    }
    Ok(())
}
