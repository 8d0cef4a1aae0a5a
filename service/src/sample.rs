//! Built-in sample catalog.

use std::time::Duration;

use rust_decimal::Decimal;

use crate::domain::{
    property::{
        Area, Coordinates, Description, Details, Kind, Label, Price, Region,
        Title,
    },
    Property,
};

/// Returns the built-in sample catalog.
///
/// Served whenever the document store cannot be reached, returns nothing, or
/// is switched off via [`Config::force_sample_catalog`], so the site never
/// renders an empty listing page.
///
/// Ordered newest-first by creation time, same as store-fetched catalogs.
///
/// [`Config::force_sample_catalog`]: crate::Config::force_sample_catalog
#[expect(unsafe_code, reason = "literals are known to be valid")]
#[expect(clippy::too_many_lines, reason = "plain data")]
#[must_use]
pub fn properties() -> Vec<Property> {
    let now = crate::domain::property::CreationDateTime::now();
    let day = Duration::from_secs(24 * 60 * 60);

    // SAFETY: All the literals below are trimmed, non-empty, within the
    //         length limits, and the numeric ones are positive.
    unsafe {
        vec![
            Property {
                id: "sample-gouna-lagoon-villa".into(),
                details: Details {
                    title: Title::new_unchecked(
                        "Lagoon-Front Villa in El Gouna",
                    ),
                    label: Label::new_unchecked("Private Lagoon"),
                    description: Description::new_unchecked(
                        "Standalone four-bedroom villa on a private lagoon \
                         in the heart of El Gouna. Landscaped garden, heated \
                         pool and a dedicated berth for a small boat. Sold \
                         fully furnished.",
                    ),
                    region: Region::ElGouna,
                    kind: Kind::Villa,
                    for_rent: false,
                    for_sale: true,
                    is_featured: true,
                    price: Price::new_unchecked(Decimal::from(
                        24_500_000_u32,
                    )),
                    currency: "EGP".into(),
                    bedrooms: 4,
                    bathrooms: 3,
                    area: Area::new_unchecked(Decimal::from(320_u32)),
                    amenities: vec![
                        "Private pool".into(),
                        "Lagoon access".into(),
                        "Garden".into(),
                        "Air conditioning".into(),
                    ],
                    main_image: "/images/sample/gouna-lagoon-villa.jpg"
                        .into(),
                    gallery_images: vec![
                        "/images/sample/gouna-lagoon-villa-pool.jpg".into(),
                        "/images/sample/gouna-lagoon-villa-living.jpg"
                            .into(),
                    ],
                    coordinates: Some(Coordinates {
                        lat: 27.394,
                        lng: 33.678,
                    }),
                },
                created_at: now,
                updated_at: now.coerce(),
            },
            Property {
                id: "sample-sahl-hasheesh-villa".into(),
                details: Details {
                    title: Title::new_unchecked(
                        "Beachside Villa in Sahl Hasheesh",
                    ),
                    label: Label::new_unchecked("Steps to the Beach"),
                    description: Description::new_unchecked(
                        "Three-bedroom villa inside a gated bay community, \
                         two minutes on foot from a sandy beach. Large roof \
                         terrace with open sea view.",
                    ),
                    region: Region::SahlHasheesh,
                    kind: Kind::Villa,
                    for_rent: true,
                    for_sale: true,
                    is_featured: true,
                    price: Price::new_unchecked(Decimal::from(
                        18_900_000_u32,
                    )),
                    currency: "EGP".into(),
                    bedrooms: 3,
                    bathrooms: 3,
                    area: Area::new_unchecked(Decimal::from(240_u32)),
                    amenities: vec![
                        "Beach access".into(),
                        "Roof terrace".into(),
                        "Security 24/7".into(),
                    ],
                    main_image: "/images/sample/sahl-hasheesh-villa.jpg"
                        .into(),
                    gallery_images: vec![
                        "/images/sample/sahl-hasheesh-villa-terrace.jpg"
                            .into(),
                    ],
                    coordinates: Some(Coordinates {
                        lat: 27.046,
                        lng: 33.877,
                    }),
                },
                created_at: now - day,
                updated_at: (now - day).coerce(),
            },
            Property {
                id: "sample-hurghada-seaview-apartment".into(),
                details: Details {
                    title: Title::new_unchecked(
                        "Sea-View Apartment in Al Ahyaa",
                    ),
                    label: Label::new_unchecked("Sea View"),
                    description: Description::new_unchecked(
                        "Two-bedroom apartment on the fifth floor of a \
                         beachfront compound in northern Hurghada. Shared \
                         pools, finished and ready to move in.",
                    ),
                    region: Region::Hurghada,
                    kind: Kind::Apartment,
                    for_rent: true,
                    for_sale: true,
                    is_featured: true,
                    price: Price::new_unchecked(Decimal::from(
                        3_200_000_u32,
                    )),
                    currency: "EGP".into(),
                    bedrooms: 2,
                    bathrooms: 2,
                    area: Area::new_unchecked(Decimal::from(110_u32)),
                    amenities: vec![
                        "Shared pool".into(),
                        "Sea view".into(),
                        "Elevator".into(),
                    ],
                    main_image:
                        "/images/sample/hurghada-seaview-apartment.jpg"
                            .into(),
                    gallery_images: vec![
                        "/images/sample/hurghada-seaview-balcony.jpg".into(),
                    ],
                    coordinates: Some(Coordinates {
                        lat: 27.333,
                        lng: 33.747,
                    }),
                },
                created_at: now - day * 3,
                updated_at: (now - day * 3).coerce(),
            },
            Property {
                id: "sample-soma-bay-apartment".into(),
                details: Details {
                    title: Title::new_unchecked(
                        "Golf Apartment in Soma Bay",
                    ),
                    label: Label::new_unchecked("On the Fairway"),
                    description: Description::new_unchecked(
                        "Ground-floor two-bedroom apartment overlooking the \
                         championship golf course of Soma Bay, with a \
                         private garden and access to all resort \
                         facilities.",
                    ),
                    region: Region::SomaBay,
                    kind: Kind::Apartment,
                    for_rent: false,
                    for_sale: true,
                    is_featured: false,
                    price: Price::new_unchecked(Decimal::from(
                        6_750_000_u32,
                    )),
                    currency: "EGP".into(),
                    bedrooms: 2,
                    bathrooms: 2,
                    area: Area::new_unchecked(Decimal::from(130_u32)),
                    amenities: vec![
                        "Golf view".into(),
                        "Private garden".into(),
                        "Resort facilities".into(),
                    ],
                    main_image: "/images/sample/soma-bay-apartment.jpg"
                        .into(),
                    gallery_images: Vec::new(),
                    coordinates: Some(Coordinates {
                        lat: 26.846,
                        lng: 33.986,
                    }),
                },
                created_at: now - day * 6,
                updated_at: (now - day * 6).coerce(),
            },
            Property {
                id: "sample-hurghada-marina-studio".into(),
                details: Details {
                    title: Title::new_unchecked(
                        "Studio by the Hurghada Marina",
                    ),
                    label: Label::new_unchecked("Marina Life"),
                    description: Description::new_unchecked(
                        "Compact furnished studio a short walk from the \
                         Hurghada Marina promenade. Strong rental track \
                         record throughout the year.",
                    ),
                    region: Region::Hurghada,
                    kind: Kind::Studio,
                    for_rent: true,
                    for_sale: false,
                    is_featured: false,
                    price: Price::new_unchecked(Decimal::from(950_000_u32)),
                    currency: "EGP".into(),
                    bedrooms: 1,
                    bathrooms: 1,
                    area: Area::new_unchecked(Decimal::from(48_u32)),
                    amenities: vec![
                        "Furnished".into(),
                        "Air conditioning".into(),
                    ],
                    main_image: "/images/sample/hurghada-marina-studio.jpg"
                        .into(),
                    gallery_images: Vec::new(),
                    coordinates: None,
                },
                created_at: now - day * 9,
                updated_at: (now - day * 9).coerce(),
            },
            Property {
                id: "sample-hurghada-sheraton-shop".into(),
                details: Details {
                    title: Title::new_unchecked(
                        "Retail Shop on Sheraton Road",
                    ),
                    label: Label::new_unchecked("High Footfall"),
                    description: Description::new_unchecked(
                        "Street-level retail unit on Sheraton Road with a \
                         wide shopfront, storage mezzanine and three-phase \
                         power connection.",
                    ),
                    region: Region::Hurghada,
                    kind: Kind::Shop,
                    for_rent: true,
                    for_sale: true,
                    is_featured: false,
                    price: Price::new_unchecked(Decimal::from(
                        4_400_000_u32,
                    )),
                    currency: "EGP".into(),
                    bedrooms: 0,
                    bathrooms: 1,
                    area: Area::new_unchecked(Decimal::from(85_u32)),
                    amenities: vec![
                        "Street front".into(),
                        "Storage mezzanine".into(),
                    ],
                    main_image: "/images/sample/hurghada-sheraton-shop.jpg"
                        .into(),
                    gallery_images: Vec::new(),
                    coordinates: None,
                },
                created_at: now - day * 14,
                updated_at: (now - day * 14).coerce(),
            },
        ]
    }
}
