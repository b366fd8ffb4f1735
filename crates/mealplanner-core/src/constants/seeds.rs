// ABOUTME: Seed data for the default food taxonomy and the default dietary tags
// ABOUTME: Listed in topological order so parents are always defined before children
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

/// Default category hierarchy as `(name, parents)` in definition order
pub const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    ("ANIMAL_PRODUCTS", &[]),
    ("PLANT_BASED", &[]),
    ("MEAT", &["ANIMAL_PRODUCTS"]),
    ("DAIRY", &["ANIMAL_PRODUCTS"]),
    ("EGGS", &["ANIMAL_PRODUCTS"]),
    ("FISH", &["ANIMAL_PRODUCTS"]),
    ("SHELLFISH", &["FISH"]),
    ("BEEF", &["MEAT"]),
    ("CHICKEN", &["MEAT"]),
    ("PORK", &["MEAT"]),
    ("CHEESE", &["DAIRY"]),
    ("MILK", &["DAIRY"]),
    ("YOGURT", &["DAIRY"]),
    ("SALMON", &["FISH"]),
    ("TUNA", &["FISH"]),
    ("NUTS", &["PLANT_BASED"]),
    ("GRAINS", &["PLANT_BASED"]),
    ("LEGUMES", &["PLANT_BASED"]),
    ("VEGETABLES", &["PLANT_BASED"]),
    ("FRUITS", &["PLANT_BASED"]),
    ("ALMOND", &["NUTS"]),
    ("PEANUT", &["NUTS"]),
    ("CASHEW", &["NUTS"]),
    ("WHEAT", &["GRAINS"]),
    ("RICE", &["GRAINS"]),
    ("OATS", &["GRAINS"]),
    ("GLUTEN", &["WHEAT"]),
    ("SOY", &["LEGUMES"]),
    ("TOFU", &["SOY"]),
    ("CUISINE", &[]),
    ("ASIAN", &["CUISINE"]),
    ("JAPANESE", &["ASIAN"]),
    ("CHINESE", &["ASIAN"]),
    ("ITALIAN", &["CUISINE"]),
    ("MEXICAN", &["CUISINE"]),
];

/// Tag category for ethically motivated diets
pub const ETHICAL: &str = "ethical";

/// Tag category for allergen avoidance
pub const ALLERGEN: &str = "allergen";

/// Default tags as `(name, excluded categories, tag category)` in registration order
pub const DEFAULT_TAGS: &[(&str, &[&str], &str)] = &[
    ("VEGAN", &["ANIMAL_PRODUCTS"], ETHICAL),
    ("VEGETARIAN", &["MEAT", "FISH", "SHELLFISH"], ETHICAL),
    ("PESCATARIAN", &["MEAT"], ETHICAL),
    ("MEAT-FREE", &["MEAT"], ETHICAL),
    ("NUT-FREE", &["NUTS"], ALLERGEN),
    ("DAIRY-FREE", &["DAIRY"], ALLERGEN),
    ("EGG-FREE", &["EGGS"], ALLERGEN),
    ("SHELLFISH-FREE", &["SHELLFISH"], ALLERGEN),
    ("FISH-FREE", &["FISH"], ALLERGEN),
    ("BEEF-FREE", &["BEEF"], ALLERGEN),
    ("GLUTEN-FREE", &["GLUTEN"], ALLERGEN),
    ("SOY-FREE", &["SOY"], ALLERGEN),
];
