//! Shared test utilities and Mother pattern factories.
//!
//! Canned JSON payloads shaped like real responses from the assets API, so
//! decoding and client tests don't each carry their own copy.
#![allow(dead_code)]

use serde_json::{Value, json};

use crate::domain::Address;

pub const BAYC_CONTRACT: &str = "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d";
pub const HOLDER: &str = "0x8ba1f109551bd432803012645ac136ddd64dba72";

#[must_use]
pub fn bayc() -> Address {
    Address::parse(BAYC_CONTRACT).unwrap()
}

#[must_use]
pub fn holder() -> Address {
    Address::parse(HOLDER).unwrap()
}

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct AssetJsonMother;

impl AssetJsonMother {
    /// A fully populated asset.
    #[must_use]
    pub fn bored_ape() -> Value {
        json!({
            "id": 29411178,
            "num_sales": 3,
            "background_color": null,
            "image_url": "https://lh3.googleusercontent.com/ape1",
            "image_preview_url": "https://lh3.googleusercontent.com/ape1=s250",
            "image_thumbnail_url": "https://lh3.googleusercontent.com/ape1=s128",
            "image_original_url": "ipfs://QmPbxeGcXhYQQNgsC6a36dDyYUcHgMLnGKnF8pVFmGsvqi",
            "animation_url": null,
            "animation_original_url": null,
            "name": null,
            "description": null,
            "external_link": null,
            "asset_contract": {
                "address": "0xBC4CA0EdA7647A8aB7C2061c2E118A18a936f13D",
                "asset_contract_type": "non-fungible",
                "created_date": "2021-04-22T23:14:03.967940",
                "name": "BoredApeYachtClub",
                "nft_version": "2.0",
                "owner": 102_224,
                "schema_name": "ERC721",
                "symbol": "BAYC",
                "total_supply": "",
                "description": "The Bored Ape Yacht Club is a collection of 10,000 unique Bored Ape NFTs",
                "external_link": "http://www.boredapeyachtclub.com/",
                "image_url": "https://lh3.googleusercontent.com/bayc=s120"
            },
            "permalink": "https://opensea.io/assets/0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d/1",
            "collection": {
                "name": "Bored Ape Yacht Club",
                "slug": "boredapeyachtclub",
                "description": "The Bored Ape Yacht Club is a collection of 10,000 unique Bored Ape NFTs",
                "image_url": "https://lh3.googleusercontent.com/bayc=s120",
                "external_url": "http://www.boredapeyachtclub.com/",
                "stats": { "floor_price": 91.5 }
            },
            "decimals": 0,
            "token_metadata": "https://ipfs.io/ipfs/QmeSjSinHpPnmXmspMjwiXyN6zS4E9zccariGR3jxcaWtq/1",
            "owner": {
                "user": { "username": "apeholder" },
                "profile_img_url": "https://storage.googleapis.com/opensea-static/opensea-profile/1.png",
                "address": HOLDER,
                "config": ""
            },
            "traits": [
                {
                    "trait_type": "Eyes",
                    "value": "Robot",
                    "display_type": null,
                    "max_value": null,
                    "trait_count": 350,
                    "order": null
                },
                {
                    "trait_type": "Generation",
                    "value": 7,
                    "display_type": "number",
                    "max_value": null,
                    "trait_count": 0,
                    "order": null
                }
            ],
            "last_sale": {
                "total_price": "75000000000000000000",
                "payment_token": { "symbol": "ETH", "decimals": 18 }
            },
            "top_bid": null,
            "listing_date": null,
            "is_presale": false,
            "token_id": "1"
        })
    }

    /// An asset carrying little more than its token id.
    #[must_use]
    pub fn minimal(token_id: &str) -> Value {
        json!({
            "id": 1,
            "token_id": token_id,
            "num_sales": 0,
            "traits": []
        })
    }

    /// A listing page holding two assets and a next cursor.
    #[must_use]
    pub fn page() -> Value {
        json!({
            "next": "LXBrPTEyMzQ1",
            "previous": null,
            "assets": [Self::bored_ape(), Self::minimal("2")]
        })
    }

    /// The failure envelope returned alongside non-2xx statuses.
    #[must_use]
    pub fn failure() -> Value {
        json!({ "success": false })
    }
}
