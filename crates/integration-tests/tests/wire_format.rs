//! JSON wire shapes for generated drafts.
//!
//! The Admin API is the sole owner of validation and persistence; the one
//! thing this toolkit must get right is the shape of what it sends.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use medusa_seed_client::seed::generator::generate_products;
use medusa_seed_core::{CategoryId, CategoryRef, SalesChannelId, SalesChannelRef};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_generated_draft_serializes_to_admin_api_shape() {
    let mut rng = StdRng::seed_from_u64(42);
    let category = CategoryRef {
        id: CategoryId::new("pcat_01"),
        name: "Shoes".to_owned(),
    };
    let channel = SalesChannelRef {
        id: SalesChannelId::new("sc_01"),
        name: "Default Sales Channel".to_owned(),
    };

    let products = generate_products(&mut rng, 0, &channel, &[category], 1).unwrap();
    let value = serde_json::to_value(&products[0]).unwrap();

    assert_eq!(value["handle"], "unique-product-1");
    assert_eq!(value["status"], "published");
    assert_eq!(value["category_ids"], serde_json::json!(["pcat_01"]));
    assert_eq!(value["sales_channel_ids"], serde_json::json!(["sc_01"]));

    let weight = value["weight"].as_i64().unwrap();
    assert!((300..=499).contains(&weight));

    assert_eq!(
        value["images"][0]["url"],
        "https://medusa-public-images.s3.eu-west-1.amazonaws.com/tee-black-front.png"
    );

    assert_eq!(value["options"][0]["title"], "Size");
    assert_eq!(
        value["options"][0]["values"],
        serde_json::json!(["S", "M", "L", "XL"])
    );
    assert_eq!(value["options"][1]["title"], "Color");
    assert_eq!(value["options"][1]["values"].as_array().unwrap().len(), 2);

    let variants = value["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 8);

    for variant in variants {
        // Variant titles follow "{size} / {color}"
        let title = variant["title"].as_str().unwrap();
        let (size, color) = title.split_once(" / ").unwrap();
        assert_eq!(variant["options"]["Size"], size);
        assert_eq!(variant["options"]["Color"], color);

        let prices = variant["prices"].as_array().unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0]["currency_code"], "eur");
        assert_eq!(prices[1]["currency_code"], "usd");
    }
}
