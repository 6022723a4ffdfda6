//! Static region profiles and the latitude band table that places them.
//!
//! Each band covers three grid rows. Within a band, `bounds` lists
//! `(x_percent, profile)` pairs in ascending order: a cell whose normalized
//! column `col / GRID_COLS` lies below `x_percent / 100` takes that profile.
//! Cells past the last bound take the band's `fallback`.

use aegis_types::{Climate, TerrainType};

use crate::geography::RegionProfile;

/// One horizontal slice of the map.
pub(crate) struct LatitudeBand {
    /// Ascending longitude cut-offs in percent of the map width.
    pub(crate) bounds: &'static [(u8, &'static RegionProfile)],
    /// Profile for cells east of every bound.
    pub(crate) fallback: &'static RegionProfile,
}

/// Grid rows covered by each band.
pub(crate) const ROWS_PER_BAND: u8 = 3;

macro_rules! region_profiles {
    (@sub) => {
        None
    };
    (@sub $sub:literal) => {
        Some($sub)
    };
    ($(
        $ident:ident: $name:literal $(/ $sub:literal)?, [$($country:literal),*],
            $climate:ident, $landscape:literal, $terrain:ident,
            ($threats:literal, $allies:literal, $bases:literal);
    )+) => {
        $(
            const $ident: RegionProfile = RegionProfile {
                name: $name,
                sub_region: region_profiles!(@sub $($sub)?),
                countries: &[$($country),*],
                climate: Climate::$climate,
                landscape: $landscape,
                terrain: TerrainType::$terrain,
                threats: $threats,
                allies: $allies,
                bases: $bases,
            };
        )+
    };
}

// name / sub-region, countries,
//     climate, landscape, terrain, (threats, allies, bases)
region_profiles! {
    AFGHANISTAN: "Afghanistan", ["Afghanistan"],
        Arid, "Mountains", Mountains, (8, 2, 1);
    ALASKA: "Alaska", ["USA"],
        Subarctic, "Tundra/Mountains", Tundra, (1, 4, 2);
    ALGERIA: "Algeria", ["Algeria", "Tunisia"],
        Arid, "Desert/Coast", Desert, (4, 2, 1);
    ANGOLA: "Angola & Zambia", ["Angola", "Zambia", "Zimbabwe"],
        Tropical, "Savanna/Plateau", Plains, (4, 2, 1);
    ARCTIC_CANADA: "Arctic Canada", ["Canada"],
        Polar, "Tundra", Tundra, (1, 2, 1);
    ARCTIC_OCEAN: "Arctic Ocean", [],
        Polar, "Ice Sheets", Ice, (0, 0, 0);
    ARGENTINA: "Argentina", ["Argentina", "Uruguay", "Paraguay"],
        Temperate, "Pampas/Patagonia", Plains, (2, 3, 1);
    AUSTRALIA_EAST: "Eastern Australia", ["Australia"],
        Temperate, "Coast/Outback", Coastal, (2, 5, 3);
    AUSTRALIA_WEST: "Western Australia", ["Australia"],
        Arid, "Desert/Coast", Desert, (1, 4, 2);
    BALKANS: "Balkans", ["Greece", "Serbia", "Bulgaria", "Romania", "Croatia"],
        Mediterranean, "Mountains", Mountains, (4, 4, 1);
    BANGLADESH: "Bangladesh & Myanmar", ["Bangladesh", "Myanmar"],
        Tropical, "Delta/Jungle", Swamp, (4, 2, 1);
    BRAZIL_NORTH: "Northern Brazil" / "Amazon Basin", ["Brazil"],
        Tropical, "Rainforest", Jungle, (4, 3, 1);
    BRAZIL_SOUTH: "Southern Brazil", ["Brazil"],
        Subtropical, "Coast/Plains", Coastal, (3, 4, 2);
    BRITISH_ISLES: "British Isles", ["UK", "Ireland"],
        Maritime, "Islands", Islands, (4, 8, 3);
    CARIBBEAN: "Caribbean", ["Cuba", "Jamaica", "Haiti", "Dominican Republic", "Puerto Rico"],
        Tropical, "Islands", Islands, (3, 2, 1);
    CENTRAL_AFRICA: "Central Africa", ["DRC", "Congo", "Central African Republic", "Gabon"],
        Tropical, "Rainforest", Jungle, (6, 2, 1);
    CENTRAL_AMERICA: "Central America", ["Guatemala", "Honduras", "Nicaragua", "Costa Rica", "Panama"],
        Tropical, "Jungle", Jungle, (3, 2, 1);
    CENTRAL_ASIA: "Central Asia", ["Kazakhstan", "Uzbekistan", "Turkmenistan", "Tajikistan", "Kyrgyzstan"],
        Arid, "Steppe/Desert", Plains, (4, 2, 1);
    CENTRAL_ATLANTIC: "Central Atlantic Ocean", [],
        Subtropical, "Ocean", Ocean, (1, 0, 0);
    CENTRAL_PACIFIC: "Central Pacific Ocean", [],
        Tropical, "Ocean", Ocean, (1, 0, 0);
    CENTRAL_RUSSIA: "Central Russia" / "Ural Region", ["Russia"],
        Continental, "Taiga", Forest, (4, 0, 0);
    CENTRAL_USA: "Central USA", ["USA"],
        Continental, "Plains", Plains, (3, 6, 3);
    CHILE: "Chile", ["Chile"],
        Varied, "Mountains/Coast", Mountains, (1, 2, 1);
    COLOMBIA: "Colombia", ["Colombia", "Ecuador"],
        Tropical, "Jungle/Mountains", Jungle, (5, 3, 1);
    EAST_AFRICA: "East Africa", ["Kenya", "Tanzania", "Uganda", "Rwanda"],
        Tropical, "Savanna/Lakes", Plains, (4, 3, 2);
    EASTERN_CANADA: "Eastern Canada", ["Canada"],
        Continental, "Forest/Lakes", Forest, (3, 6, 2);
    EASTERN_CHINA: "Eastern China", ["China"],
        Temperate, "Coast/Plains", Coastal, (7, 1, 0);
    EASTERN_EUROPE: "Eastern Europe", ["Ukraine", "Belarus", "Moldova"],
        Continental, "Plains", Plains, (6, 5, 2);
    EASTERN_USA: "Eastern USA", ["USA"],
        HumidSubtropical, "Coast/Urban", Urban, (5, 8, 4);
    EGYPT: "Egypt", ["Egypt"],
        Arid, "Desert/Nile Valley", Desert, (4, 4, 2);
    FINLAND: "Finland & Baltics", ["Finland", "Estonia", "Latvia", "Lithuania"],
        Subarctic, "Forest/Lakes", Forest, (3, 5, 1);
    FRANCE: "France", ["France", "Belgium", "Netherlands"],
        Temperate, "Plains/Coast", Plains, (3, 7, 2);
    GERMANY: "Central Europe", ["Germany", "Poland", "Czech Republic", "Austria", "Switzerland"],
        Temperate, "Plains/Forest", Plains, (3, 8, 3);
    GREENLAND: "Greenland", ["Denmark"],
        Polar, "Ice Cap", Ice, (0, 1, 0);
    HAWAII: "Hawaii", ["USA"],
        Tropical, "Islands", Islands, (1, 5, 3);
    IBERIA: "Iberian Peninsula", ["Spain", "Portugal"],
        Mediterranean, "Mountains/Coast", Coastal, (2, 5, 2);
    ICELAND: "Iceland", ["Iceland"],
        Subarctic, "Volcanic Island", Islands, (1, 3, 1);
    INDIA_NORTH: "Northern India", ["India"],
        Varied, "Himalayas/Plains", Plains, (4, 5, 2);
    INDIA_SOUTH: "Southern India", ["India", "Sri Lanka"],
        Tropical, "Peninsula/Coast", Coastal, (3, 4, 2);
    INDIAN_OCEAN: "Indian Ocean", [],
        Tropical, "Ocean", Ocean, (2, 1, 0);
    INDONESIA: "Indonesia", ["Indonesia"],
        Tropical, "Islands", Islands, (3, 2, 1);
    IRAN: "Iran", ["Iran"],
        Arid, "Mountains/Desert", Mountains, (7, 1, 0);
    IRAQ: "Iraq & Syria", ["Iraq", "Syria"],
        Arid, "Desert/River Valley", Desert, (8, 2, 1);
    ITALY: "Italy", ["Italy"],
        Mediterranean, "Peninsula/Mountains", Mountains, (3, 6, 2);
    JAPAN: "Japan", ["Japan"],
        Temperate, "Islands", Islands, (3, 7, 4);
    KOREA: "Korean Peninsula", ["South Korea", "North Korea"],
        Temperate, "Peninsula", Coastal, (6, 5, 2);
    LIBYA: "Libya", ["Libya"],
        Arid, "Desert", Desert, (5, 1, 0);
    MADAGASCAR: "Madagascar", ["Madagascar"],
        Tropical, "Island", Islands, (2, 2, 1);
    MEXICO: "Mexico", ["Mexico"],
        Tropical, "Mountains/Desert", Desert, (4, 3, 1);
    MONGOLIA: "Mongolia", ["Mongolia"],
        Continental, "Steppe/Desert", Plains, (2, 1, 0);
    MOROCCO: "Morocco", ["Morocco", "Western Sahara"],
        Arid, "Desert/Coast", Desert, (3, 3, 1);
    NEW_ZEALAND: "New Zealand", ["New Zealand"],
        Temperate, "Islands", Islands, (1, 4, 2);
    NORTH_ATLANTIC: "North Atlantic Ocean", [],
        Maritime, "Ocean", Ocean, (1, 0, 0);
    NORTH_PACIFIC: "North Pacific Ocean", [],
        Temperate, "Ocean", Ocean, (1, 0, 0);
    NORTHERN_CHINA: "Northern China", ["China"],
        Continental, "Plains/Desert", Plains, (5, 1, 0);
    PACIFIC_ISLANDS: "Pacific Islands", ["Fiji", "Samoa", "Tonga", "Various"],
        Tropical, "Islands/Ocean", Islands, (1, 1, 0);
    PACIFIC_NORTHWEST: "Pacific Northwest", ["USA"],
        Temperate, "Mountains/Coast", Coastal, (2, 5, 2);
    PAKISTAN: "Pakistan", ["Pakistan"],
        Arid, "Mountains/Plains", Mountains, (6, 3, 1);
    PAPUA_NEW_GUINEA: "Papua New Guinea", ["Papua New Guinea"],
        Tropical, "Jungle/Mountains", Jungle, (2, 1, 0);
    PERU: "Peru", ["Peru", "Bolivia"],
        Varied, "Andes/Coast", Mountains, (3, 2, 1);
    PHILIPPINES: "Philippines", ["Philippines"],
        Tropical, "Islands", Islands, (3, 4, 2);
    RUSSIAN_FAR_EAST: "Russian Far East", ["Russia"],
        Subarctic, "Mountains/Coast", Mountains, (4, 0, 0);
    SAHARA: "Sahara Desert", ["Mali", "Niger", "Chad", "Mauritania"],
        Arid, "Desert", Desert, (3, 1, 0);
    SAUDI_ARABIA: "Saudi Arabia", ["Saudi Arabia", "Yemen", "Oman"],
        Arid, "Desert", Desert, (6, 3, 2);
    SCANDINAVIA: "Scandinavia", ["Norway", "Sweden", "Denmark"],
        Subarctic, "Forest/Mountains", Forest, (2, 7, 2);
    SIBERIA: "Siberia", ["Russia"],
        Subarctic, "Taiga/Tundra", Tundra, (2, 0, 0);
    SOUTH_ATLANTIC: "South Atlantic Ocean", [],
        Temperate, "Ocean", Ocean, (0, 0, 0);
    SOUTH_PACIFIC: "South Pacific Ocean", [],
        Temperate, "Ocean", Ocean, (0, 0, 0);
    SOUTHERN_AFRICA: "Southern Africa", ["South Africa", "Namibia", "Botswana", "Mozambique"],
        Varied, "Desert/Savanna", Desert, (3, 4, 2);
    SOUTHERN_CHINA: "Southern China", ["China"],
        Subtropical, "Hills/Coast", Coastal, (5, 2, 1);
    SOUTHERN_OCEAN: "Southern Ocean", [],
        Polar, "Ocean/Ice", Ocean, (0, 0, 0);
    THAILAND: "Thailand & Indochina", ["Thailand", "Cambodia", "Laos"],
        Tropical, "Jungle/Plains", Jungle, (3, 4, 2);
    TURKEY: "Turkey", ["Turkey"],
        Mediterranean, "Mountains/Plateau", Mountains, (4, 5, 2);
    VENEZUELA: "Venezuela", ["Venezuela", "Guyana", "Suriname"],
        Tropical, "Jungle/Coast", Jungle, (5, 2, 0);
    VIETNAM: "Vietnam", ["Vietnam"],
        Tropical, "Jungle/Coast", Jungle, (3, 3, 1);
    WEST_AFRICA: "West Africa", ["Nigeria", "Ghana", "Senegal", "Ivory Coast", "Cameroon"],
        Tropical, "Savanna/Coast", Plains, (5, 2, 1);
    WESTERN_CANADA: "Western Canada", ["Canada"],
        Temperate, "Mountains/Forest", Mountains, (2, 5, 1);
    WESTERN_CHINA: "Western China" / "Xinjiang", ["China"],
        Arid, "Desert/Mountains", Desert, (5, 0, 0);
    WESTERN_RUSSIA: "Western Russia", ["Russia"],
        Continental, "Plains", Plains, (6, 1, 0);
    WESTERN_USA: "Western USA", ["USA"],
        Varied, "Mountains/Desert", Mountains, (3, 6, 3);
}

/// Bands from the Arctic (rows A--C) down to the southern temperate zone
/// (rows S--U). Rows below fall into [`FAR_SOUTH`].
pub(crate) static BANDS: [LatitudeBand; 7] = [
    LatitudeBand {
        bounds: &[
            (5, &ARCTIC_OCEAN),
            (12, &ALASKA),
            (32, &ARCTIC_CANADA),
            (40, &GREENLAND),
            (48, &ICELAND),
            (52, &ARCTIC_OCEAN),
            (58, &SCANDINAVIA),
            (68, &WESTERN_RUSSIA),
            (82, &SIBERIA),
            (92, &RUSSIAN_FAR_EAST),
        ],
        fallback: &ARCTIC_OCEAN,
    },
    LatitudeBand {
        bounds: &[
            (5, &NORTH_PACIFIC),
            (10, &ALASKA),
            (16, &WESTERN_CANADA),
            (28, &EASTERN_CANADA),
            (35, &NORTH_ATLANTIC),
            (40, &GREENLAND),
            (45, &ICELAND),
            (48, &BRITISH_ISLES),
            (52, &SCANDINAVIA),
            (58, &FINLAND),
            (68, &WESTERN_RUSSIA),
            (78, &CENTRAL_RUSSIA),
            (88, &SIBERIA),
            (95, &RUSSIAN_FAR_EAST),
        ],
        fallback: &NORTH_PACIFIC,
    },
    LatitudeBand {
        bounds: &[
            (5, &NORTH_PACIFIC),
            (10, &PACIFIC_NORTHWEST),
            (14, &WESTERN_USA),
            (18, &CENTRAL_USA),
            (24, &EASTERN_USA),
            (40, &NORTH_ATLANTIC),
            (44, &BRITISH_ISLES),
            (48, &FRANCE),
            (52, &GERMANY),
            (56, &EASTERN_EUROPE),
            (62, &WESTERN_RUSSIA),
            (70, &CENTRAL_ASIA),
            (76, &MONGOLIA),
            (82, &NORTHERN_CHINA),
            (88, &RUSSIAN_FAR_EAST),
            (92, &JAPAN),
        ],
        fallback: &NORTH_PACIFIC,
    },
    LatitudeBand {
        bounds: &[
            (5, &NORTH_PACIFIC),
            (10, &WESTERN_USA),
            (20, &MEXICO),
            (26, &CARIBBEAN),
            (40, &CENTRAL_ATLANTIC),
            (44, &IBERIA),
            (48, &FRANCE),
            (52, &ITALY),
            (56, &BALKANS),
            (60, &TURKEY),
            (64, &IRAN),
            (70, &AFGHANISTAN),
            (76, &WESTERN_CHINA),
            (82, &EASTERN_CHINA),
            (88, &KOREA),
            (92, &JAPAN),
        ],
        fallback: &NORTH_PACIFIC,
    },
    LatitudeBand {
        bounds: &[
            (5, &CENTRAL_PACIFIC),
            (10, &MEXICO),
            (15, &CENTRAL_AMERICA),
            (20, &CARIBBEAN),
            (26, &VENEZUELA),
            (40, &CENTRAL_ATLANTIC),
            (44, &MOROCCO),
            (48, &ALGERIA),
            (52, &LIBYA),
            (56, &EGYPT),
            (60, &SAUDI_ARABIA),
            (64, &IRAQ),
            (68, &PAKISTAN),
            (72, &INDIA_NORTH),
            (78, &BANGLADESH),
            (82, &SOUTHERN_CHINA),
            (86, &VIETNAM),
            (90, &PHILIPPINES),
            (95, &CENTRAL_PACIFIC),
        ],
        fallback: &HAWAII,
    },
    LatitudeBand {
        bounds: &[
            (10, &CENTRAL_PACIFIC),
            (14, &PERU),
            (18, &COLOMBIA),
            (32, &BRAZIL_NORTH),
            (40, &CENTRAL_ATLANTIC),
            (46, &SAHARA),
            (52, &WEST_AFRICA),
            (58, &CENTRAL_AFRICA),
            (64, &EAST_AFRICA),
            (70, &INDIAN_OCEAN),
            (76, &INDIA_SOUTH),
            (82, &THAILAND),
            (88, &INDONESIA),
            (94, &PAPUA_NEW_GUINEA),
        ],
        fallback: &PACIFIC_ISLANDS,
    },
    LatitudeBand {
        bounds: &[
            (10, &SOUTH_PACIFIC),
            (14, &CHILE),
            (24, &ARGENTINA),
            (30, &BRAZIL_SOUTH),
            (50, &SOUTH_ATLANTIC),
            (56, &ANGOLA),
            (62, &SOUTHERN_AFRICA),
            (68, &MADAGASCAR),
            (76, &INDIAN_OCEAN),
            (84, &AUSTRALIA_WEST),
            (90, &AUSTRALIA_EAST),
            (96, &NEW_ZEALAND),
        ],
        fallback: &SOUTH_PACIFIC,
    },
];

/// Rows V--X, approaching Antarctica.
pub(crate) static FAR_SOUTH: LatitudeBand = LatitudeBand {
    bounds: &[
        (15, &SOUTHERN_OCEAN),
        (25, &CHILE),
        (40, &SOUTH_ATLANTIC),
        (75, &SOUTHERN_OCEAN),
        (90, &AUSTRALIA_EAST),
    ],
    fallback: &SOUTHERN_OCEAN,
};
