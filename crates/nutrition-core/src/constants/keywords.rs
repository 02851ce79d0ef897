// ABOUTME: Built-in keyword tables for liquid and allergen classification
// ABOUTME: Ordered tables; iteration order defines allergen output order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Default classifier tables.
//!
//! These are heuristics over food names, not authoritative allergen data.
//! Entries are lowercase. Every keyword is also matched with its spaces
//! removed against the space-free food name.

/// Name fragments that mark a food as a liquid
pub const LIQUID_KEYWORDS: &[&str] = &[
    "coffee",
    "tea",
    "juice",
    "milk",
    "smoothie",
    "shake",
    "beverage",
    "drink",
    "americano",
    "espresso",
    "latte",
    "cappuccino",
    "water",
    "soda",
    "beer",
    "wine",
    "cortado",
    "macchiato",
    "mocha",
    "frappuccino",
    "cold brew",
    "nitro",
    "lungo",
    "ristretto",
    "flat white",
    "affogato",
];

/// High-confidence allergen indicators, in output order
pub const DEFINITE_ALLERGEN_INDICATORS: &[(&str, &[&str])] = &[
    (
        "Dairy",
        &[
            "milk",
            "cheese",
            "yogurt",
            "butter",
            "chocolate",
            "latte",
            "cappuccino",
            "mocha",
            "hot chocolate",
        ],
    ),
    (
        "Nuts",
        &[
            "almond",
            "walnut",
            "pecan",
            "cashew",
            "pistachio",
            "hazelnut",
            "macadamia",
        ],
    ),
    ("Peanut", &["peanut", "peanuts"]),
    ("Fish", &["salmon", "tuna", "cod", "tilapia", "halibut"]),
    ("Shellfish", &["shrimp", "crab", "lobster"]),
    ("Egg", &["egg ", "eggs"]),
    ("Soy", &["tofu", "soya", "edamame"]),
    ("Wheat", &["wheat"]),
];

/// Weaker allergen indicators, in output order
pub const POSSIBLE_ALLERGEN_INDICATORS: &[(&str, &[&str])] = &[
    ("Dairy", &["cream", "whey", "casein", "lactose", "milky"]),
    ("Nuts", &["nut"]),
    (
        "Gluten",
        &["rye", "barley", "oats", "bread", "pasta", "flour", "cereal"],
    ),
    ("Soy", &["miso", "tempeh"]),
    ("Egg", &["mayonnaise", "meringue", "albumin"]),
    ("Fish", &["fish", "anchovy"]),
    ("Shellfish", &["prawn", "clam", "mussel", "oyster"]),
    ("Sesame", &["sesame", "tahini"]),
];

/// Words removed from a name before allergen matching
///
/// Each one contains an allergen keyword without being that food.
pub const ALLERGEN_NAME_EXCLUSIONS: &[&str] = &["eggplant"];
