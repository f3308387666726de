//! Synthetic product-draft generation.
//!
//! All randomness flows through an injected [`Rng`] so tests can seed it;
//! only the title suffix additionally reads the system clock. The color
//! palette and size list are shared constants that are never mutated -
//! per-product colors come from a pure sampling function.

use chrono::Utc;
use medusa_seed_core::{
    CategoryRef, CurrencyCode, ProductDraft, ProductImage, ProductOption, ProductStatus,
    ProductVariantDraft, SalesChannelRef, VariantOptions, VariantPrice,
};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::error::SeedError;

/// Adjective prefixes sampled for generated product titles.
const NAME_PREFIXES: [&str; 15] = [
    "Elegant",
    "Classic",
    "Modern",
    "Sleek",
    "Urban",
    "Vintage",
    "Premium",
    "Stylish",
    "Trendy",
    "Innovative",
    "Luxe",
    "Professional",
    "Casual",
    "Dynamic",
    "Refined",
];

/// Size axis every generated product offers.
const SIZES: [&str; 4] = ["S", "M", "L", "XL"];

/// Color palette per-product colors are drawn from.
const COLORS: [&str; 9] = [
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Black", "White", "Gray",
];

/// Distinct colors drawn per product.
const COLORS_PER_PRODUCT: usize = 2;

/// Placeholder image attached to every generated product.
const IMAGE_URL: &str =
    "https://medusa-public-images.s3.eu-west-1.amazonaws.com/tee-black-front.png";

const TOKEN_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LENGTH: usize = 6;

/// Generate a product title with a timestamp-plus-random suffix.
///
/// Collision probability is extremely low across calls within one run;
/// there is no cross-run uniqueness guarantee.
pub fn unique_title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = NAME_PREFIXES
        .choose(rng)
        .copied()
        .unwrap_or("Classic");
    let timestamp = Utc::now().timestamp_millis();
    let token = base36_token(rng);
    format!("{prefix} Unique Medusa Product #{timestamp}-{token}")
}

/// A short base-36 fragment drawn from the given RNG.
fn base36_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_CHARSET.len());
            // SAFETY: idx is always within bounds since random_range returns 0..len
            char::from(*TOKEN_CHARSET.get(idx).expect("idx within bounds"))
        })
        .collect()
}

/// Pick `count` distinct colors from the palette without mutating it.
pub fn sample_colors<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
    COLORS.choose_multiple(rng, count).copied().collect()
}

/// Generate `count` product drafts keyed off the existing-product count.
///
/// # Arguments
///
/// * `rng` - Random source; seed it for deterministic output
/// * `existing_count` - Number of products already in the store
/// * `sales_channel` - Channel every draft is attached to
/// * `categories` - Categories to sample from; must be non-empty
/// * `count` - Number of drafts to build
///
/// # Errors
///
/// Returns [`SeedError::NoCategories`] if the category list is empty.
pub fn generate_products<R: Rng + ?Sized>(
    rng: &mut R,
    existing_count: usize,
    sales_channel: &SalesChannelRef,
    categories: &[CategoryRef],
    count: usize,
) -> Result<Vec<ProductDraft>, SeedError> {
    if categories.is_empty() {
        return Err(SeedError::NoCategories);
    }

    let mut products = Vec::with_capacity(count);

    for i in 0..count {
        let category = categories.choose(rng).ok_or(SeedError::NoCategories)?;
        let colors = sample_colors(rng, COLORS_PER_PRODUCT);
        let serial = existing_count + i + 1;
        products.push(build_draft(rng, serial, category, &colors, sales_channel));
    }

    Ok(products)
}

/// Assemble one draft: 8 variants (2 colors x 4 sizes) plus product fields.
fn build_draft<R: Rng + ?Sized>(
    rng: &mut R,
    serial: usize,
    category: &CategoryRef,
    colors: &[&'static str],
    sales_channel: &SalesChannelRef,
) -> ProductDraft {
    let category_tag = category.name.to_uppercase();

    let mut variants = Vec::with_capacity(colors.len() * SIZES.len());
    for color in colors {
        for size in SIZES {
            variants.push(ProductVariantDraft {
                title: format!("{size} / {color}"),
                sku: format!("UNIQUE-{serial}-{category_tag}-{size}-{color}"),
                options: VariantOptions {
                    size: size.to_owned(),
                    color: (*color).to_owned(),
                },
                prices: vec![
                    VariantPrice {
                        amount: rng.random_range(10..=59),
                        currency_code: CurrencyCode::Eur,
                    },
                    VariantPrice {
                        amount: rng.random_range(15..=64),
                        currency_code: CurrencyCode::Usd,
                    },
                ],
            });
        }
    }

    ProductDraft {
        title: unique_title(rng),
        description: format!(
            "Unique and specially crafted {} product with exceptional quality.",
            category.name.to_lowercase()
        ),
        handle: format!("unique-product-{serial}"),
        weight: rng.random_range(300..=499),
        status: ProductStatus::Published,
        images: vec![ProductImage {
            url: IMAGE_URL.to_owned(),
        }],
        options: vec![
            ProductOption {
                title: "Size".to_owned(),
                values: SIZES.iter().map(|s| (*s).to_owned()).collect(),
            },
            ProductOption {
                title: "Color".to_owned(),
                values: colors.iter().map(|c| (*c).to_owned()).collect(),
            },
        ],
        variants,
        category_ids: vec![category.id.clone()],
        sales_channel_ids: vec![sales_channel.id.clone()],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashSet;

    use medusa_seed_core::{CategoryId, SalesChannelId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn shoes_category() -> CategoryRef {
        CategoryRef {
            id: CategoryId::new("cat_1"),
            name: "Shoes".to_owned(),
        }
    }

    fn default_channel() -> SalesChannelRef {
        SalesChannelRef {
            id: SalesChannelId::new("sc_01"),
            name: "Default Sales Channel".to_owned(),
        }
    }

    #[test]
    fn test_first_product_handle_and_category() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = generate_products(
            &mut rng,
            0,
            &default_channel(),
            &[shoes_category()],
            3,
        )
        .unwrap();

        assert_eq!(products[0].handle, "unique-product-1");
        assert_eq!(products[0].category_ids, vec![CategoryId::new("cat_1")]);
        assert_eq!(products[1].handle, "unique-product-2");
    }

    #[test]
    fn test_handles_continue_from_existing_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = generate_products(
            &mut rng,
            250,
            &default_channel(),
            &[shoes_category()],
            2,
        )
        .unwrap();

        assert_eq!(products[0].handle, "unique-product-251");
        assert_eq!(products[1].handle, "unique-product-252");
    }

    #[test]
    fn test_every_product_has_eight_variants_with_unique_skus() {
        let mut rng = StdRng::seed_from_u64(7);
        let products = generate_products(
            &mut rng,
            0,
            &default_channel(),
            &[shoes_category()],
            20,
        )
        .unwrap();

        let mut skus = HashSet::new();
        for product in &products {
            assert_eq!(product.variants.len(), 8);
            for variant in &product.variants {
                assert!(skus.insert(variant.sku.clone()), "duplicate sku {}", variant.sku);
            }
        }
    }

    #[test]
    fn test_sku_embeds_serial_category_size_and_color() {
        let mut rng = StdRng::seed_from_u64(9);
        let products =
            generate_products(&mut rng, 0, &default_channel(), &[shoes_category()], 1).unwrap();

        let sku = &products[0].variants[0].sku;
        assert!(sku.starts_with("UNIQUE-1-SHOES-"), "unexpected sku {sku}");
    }

    #[test]
    fn test_empty_categories_is_a_named_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_products(&mut rng, 0, &default_channel(), &[], 10);
        assert!(matches!(result, Err(SeedError::NoCategories)));
    }

    #[test]
    fn test_price_amounts_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let products = generate_products(
            &mut rng,
            0,
            &default_channel(),
            &[shoes_category()],
            50,
        )
        .unwrap();

        for variant in products.iter().flat_map(|p| &p.variants) {
            for price in &variant.prices {
                match price.currency_code {
                    CurrencyCode::Eur => {
                        assert!((10..=59).contains(&price.amount), "eur {}", price.amount);
                    }
                    CurrencyCode::Usd => {
                        assert!((15..=64).contains(&price.amount), "usd {}", price.amount);
                    }
                }
            }
        }
    }

    #[test]
    fn test_variant_colors_match_the_color_option_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let products =
            generate_products(&mut rng, 0, &default_channel(), &[shoes_category()], 10).unwrap();

        for product in &products {
            let color_option = product
                .options
                .iter()
                .find(|o| o.title == "Color")
                .expect("color option present");
            assert_eq!(color_option.values.len(), 2);
            for variant in &product.variants {
                assert!(color_option.values.contains(&variant.options.color));
            }
        }
    }

    #[test]
    fn test_sample_colors_returns_distinct_palette_members() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let colors = sample_colors(&mut rng, 2);
            assert_eq!(colors.len(), 2);
            assert_ne!(colors[0], colors[1]);
            assert!(COLORS.contains(&colors[0]));
            assert!(COLORS.contains(&colors[1]));
        }
    }

    #[test]
    fn test_unique_title_has_prefix_label_and_suffix() {
        let mut rng = StdRng::seed_from_u64(13);
        let title = unique_title(&mut rng);

        assert!(
            NAME_PREFIXES.iter().any(|p| title.starts_with(p)),
            "unexpected prefix in {title}"
        );
        assert!(title.contains(" Unique Medusa Product #"));

        let suffix = title.rsplit('#').next().unwrap();
        let (timestamp, token) = suffix.split_once('-').expect("timestamp-token suffix");
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(token.len(), TOKEN_LENGTH);
    }

    #[test]
    fn test_titles_do_not_repeat_across_runs() {
        let mut rng = rand::rng();
        let first: HashSet<String> = generate_products(
            &mut rng,
            0,
            &default_channel(),
            &[shoes_category()],
            10,
        )
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

        let second = generate_products(
            &mut rng,
            0,
            &default_channel(),
            &[shoes_category()],
            10,
        )
        .unwrap();

        for product in &second {
            assert!(!first.contains(&product.title));
        }
    }
}
