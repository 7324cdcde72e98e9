/// Named card groups, checked in order. The first group containing a name wins.
pub const CATEGORY_GROUPS: &[(&str, &[&str])] = &[
    (
        "Dual Lands",
        &[
            "Tundra",
            "Underground Sea",
            "Badlands",
            "Taiga",
            "Savannah",
            "Scrubland",
            "Volcanic Island",
            "Bayou",
            "Plateau",
            "Tropical Island",
        ],
    ),
    (
        "Fetch Lands",
        &[
            "Flooded Strand",
            "Polluted Delta",
            "Bloodstained Mire",
            "Wooded Foothills",
            "Windswept Heath",
            "Marsh Flats",
            "Scalding Tarn",
            "Verdant Catacombs",
            "Arid Mesa",
            "Misty Rainforest",
            "Prismatic Vista",
        ],
    ),
    (
        "Shock Lands",
        &[
            "Hallowed Fountain",
            "Watery Grave",
            "Blood Crypt",
            "Stomping Ground",
            "Temple Garden",
            "Godless Shrine",
            "Steam Vents",
            "Overgrown Tomb",
            "Sacred Foundry",
            "Breeding Pool",
        ],
    ),
    (
        "Check Lands",
        &[
            "Glacial Fortress",
            "Drowned Catacomb",
            "Dragonskull Summit",
            "Rootbound Crag",
            "Sunpetal Grove",
            "Isolated Chapel",
            "Sulfur Falls",
            "Woodland Cemetery",
            "Clifftop Retreat",
            "Hinterland Harbor",
        ],
    ),
    (
        "Pain Lands",
        &[
            "Adarkar Wastes",
            "Underground River",
            "Sulfurous Springs",
            "Karplusan Forest",
            "Brushland",
            "Caves of Koilos",
            "Shivan Reef",
            "Llanowar Wastes",
            "Battlefield Forge",
            "Yavimaya Coast",
        ],
    ),
    (
        "Fast Lands",
        &[
            "Seachrome Coast",
            "Darkslick Shores",
            "Blackcleave Cliffs",
            "Copperline Gorge",
            "Razorverge Thicket",
            "Concealed Courtyard",
            "Spirebluff Canal",
            "Blooming Marsh",
            "Inspiring Vantage",
            "Botanical Sanctum",
        ],
    ),
    (
        "Triomes",
        &[
            "Savai Triome",
            "Ketria Triome",
            "Indatha Triome",
            "Raugrin Triome",
            "Zagoth Triome",
            "Spara's Headquarters",
            "Raffine's Tower",
            "Xander's Lounge",
            "Ziatora's Proving Ground",
            "Jetmir's Oasis",
        ],
    ),
];

/// Returns the group a card belongs to, or `None` when it is ungrouped.
/// Matching is exact and case-sensitive.
pub fn classify(name: &str) -> Option<&'static str> {
    CATEGORY_GROUPS
        .iter()
        .find(|(_, members)| members.contains(&name))
        .map(|(group, _)| *group)
}
