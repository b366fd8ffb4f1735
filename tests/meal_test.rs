// ABOUTME: Integration tests for ingredients, meals, and people
// ABOUTME: Covers calorie validation, category closure, group compatibility, and tag-based people
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

mod common;

use std::collections::BTreeSet;
use std::error::Error as _;

use mealplanner::errors::{ErrorCode, ErrorKind};
use mealplanner::models::{Ingredient, Meal, Person, PersonSpec};
use mealplanner::restriction::DietaryRestriction;
use mealplanner::taxonomy::Taxonomy;

fn meal<'a>(meals: &'a [Meal], name: &str) -> &'a Meal {
    meals.iter().find(|meal| meal.name == name).unwrap()
}

// ============================================================================
// Ingredient
// ============================================================================

#[test]
fn test_ingredient_display() {
    let context = common::default_context();
    let mozzarella = common::ingredient(&context.taxonomy, "Mozzarella", "CHEESE", 200.0);
    assert_eq!(mozzarella.to_string(), "Mozzarella [CHEESE] - 200.0 kcal");

    let labelled = mozzarella.with_allergens(["milk", "casein"]);
    assert_eq!(
        labelled.to_string(),
        "Mozzarella [CHEESE] - 200.0 kcal (Allergens: casein, milk)"
    );
    assert_eq!(labelled.allergens().len(), 2);
}

#[test]
fn test_ingredient_rejects_invalid_calories() {
    let context = common::default_context();
    let rice = context.taxonomy.get("RICE").unwrap();

    let error = Ingredient::new("Rice", rice, -1.0).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(Ingredient::new("Rice", rice, f64::NAN).is_err());
    assert!(Ingredient::new("Water", rice, 0.0).is_ok());
}

#[test]
fn test_ingredient_keeps_category_name() {
    let context = common::default_context();
    let salmon = common::ingredient(&context.taxonomy, "Salmon", "salmon", 300.0);
    assert_eq!(salmon.name(), "Salmon");
    assert_eq!(salmon.category_name(), "SALMON");
    assert!((salmon.calories() - 300.0).abs() < f64::EPSILON);
    assert!(salmon.category(&context.taxonomy).unwrap().is_a("FISH"));
}

#[test]
fn test_ingredient_deserialization_validates_and_normalizes() {
    let context = common::default_context();

    let cheese: Ingredient = serde_json::from_str(
        r#"{"name":"Brie","category":" cheese ","calories":330.0,"allergens":["milk"]}"#,
    )
    .unwrap();
    assert_eq!(cheese.category_name(), "CHEESE");
    assert!(cheese.category(&context.taxonomy).unwrap().is_a("DAIRY"));
    assert!(cheese.allergens().contains("milk"));

    let plain: Ingredient =
        serde_json::from_str(r#"{"name":"Rice","category":"RICE","calories":0.0}"#).unwrap();
    assert!(plain.allergens().is_empty());

    let error = serde_json::from_str::<Ingredient>(
        r#"{"name":"Brie","category":"CHEESE","calories":-50.0}"#,
    )
    .unwrap_err();
    assert!(error.to_string().contains("invalid calories"));
}

#[test]
fn test_meal_deserialization_rejects_invalid_ingredient() {
    let json = r#"{"name":"Soup","ingredients":[
        {"name":"Stock","category":"VEGETABLES","calories":20.0},
        {"name":"Cream","category":"DAIRY","calories":-1.0}
    ]}"#;
    assert!(serde_json::from_str::<Meal>(json).is_err());
}

// ============================================================================
// Meal
// ============================================================================

#[test]
fn test_meal_totals_and_display() {
    let context = common::default_context();
    let meals = common::sample_meals(&context.taxonomy);
    let pizza = meal(&meals, "Cheese Pizza");

    assert!((pizza.total_calories() - 500.0).abs() < f64::EPSILON);
    assert_eq!(pizza.to_string(), "Meal(Cheese Pizza, 3 items, 500.0 kcal)");
    assert!((Meal::new("Empty", Vec::new()).total_calories()).abs() < f64::EPSILON);
}

#[test]
fn test_meal_categories_include_ancestors() {
    let context = common::default_context();
    let meals = common::sample_meals(&context.taxonomy);
    let expected: BTreeSet<String> = [
        "ANIMAL_PRODUCTS",
        "CHEESE",
        "DAIRY",
        "GRAINS",
        "PLANT_BASED",
        "VEGETABLES",
        "WHEAT",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect();

    assert_eq!(
        meal(&meals, "Cheese Pizza").categories(&context.taxonomy).unwrap(),
        expected
    );
}

#[test]
fn test_meal_compatibility_with_single_restriction() {
    let context = common::default_context();
    let taxonomy = &context.taxonomy;
    let meal = Meal::new(
        "Cheese Plate",
        vec![
            common::ingredient(taxonomy, "Brie", "CHEESE", 300.0),
            common::ingredient(taxonomy, "Almonds", "ALMOND", 160.0),
        ],
    );

    let vegan = common::restriction(&["ANIMAL_PRODUCTS"]);
    let nut_free = common::restriction(&["NUTS"]);
    let meat_free = common::restriction(&["MEAT"]);

    assert!(!meal.is_compatible_with(taxonomy, &vegan).unwrap());
    assert!(!meal.is_compatible_with(taxonomy, &nut_free).unwrap());
    assert!(meal.is_compatible_with(taxonomy, &meat_free).unwrap());
    assert!(meal
        .is_compatible_with(taxonomy, &DietaryRestriction::none())
        .unwrap());
}

#[test]
fn test_meal_compatibility_with_group() {
    let context = common::default_context();
    let meals = common::sample_meals(&context.taxonomy);
    let restrictions: Vec<DietaryRestriction> = common::sample_people()
        .into_iter()
        .map(|person| person.restriction)
        .collect();

    assert!(meal(&meals, "Nut-Free Salad")
        .is_compatible_with_group(&context.taxonomy, &restrictions)
        .unwrap());
    assert!(!meal(&meals, "Vegan Pasta")
        .is_compatible_with_group(&context.taxonomy, &restrictions)
        .unwrap());
    assert!(meal(&meals, "Vegan Pasta")
        .is_compatible_with_group(&context.taxonomy, &[])
        .unwrap());
}

#[test]
fn test_meal_with_category_missing_from_taxonomy() {
    let context = common::default_context();
    let meals = common::sample_meals(&context.taxonomy);
    let empty = Taxonomy::new();

    let error = meal(&meals, "Vegan Pasta")
        .is_compatible_with(&empty, &DietaryRestriction::none())
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

// ============================================================================
// Person
// ============================================================================

#[test]
fn test_person_from_each_spec() {
    let context = common::default_context();

    let direct = Person::new(
        "Dan",
        PersonSpec::Direct(common::restriction(&["NUTS"])),
        &context.tags,
    )
    .unwrap();
    assert_eq!(direct.restriction, common::restriction(&["NUTS"]));

    let tagged = Person::new("Bob", PersonSpec::ByTag("vegetarian".into()), &context.tags).unwrap();
    assert_eq!(
        tagged.restriction,
        common::restriction(&["MEAT", "FISH", "SHELLFISH"])
    );

    let open = Person::new("Eve", PersonSpec::Unrestricted, &context.tags).unwrap();
    assert!(open.restriction.is_empty());
}

#[test]
fn test_person_with_unknown_tag_fails() {
    let context = common::default_context();
    let error = Person::new("Kim", PersonSpec::ByTag("KETO".into()), &context.tags).unwrap_err();

    assert_eq!(error.code, ErrorCode::ConstructionFailed);
    assert_eq!(error.kind(), ErrorKind::Construction);
    assert_eq!(error.details["person"], "Kim");
    assert_eq!(error.details["tag"], "KETO");
    assert!(error.source().is_some());
}

#[test]
fn test_person_labels_use_canonical_tags() {
    let context = common::default_context();

    let alice = Person::with_restriction("Alice", common::restriction(&["ANIMAL_PRODUCTS"]));
    assert_eq!(alice.label(&context.tags), "Alice [VEGAN]");

    let zoe = Person::with_restriction(
        "Zoe",
        common::restriction(&["MEAT", "FISH", "SHELLFISH", "NUTS"]),
    );
    assert_eq!(zoe.label(&context.tags), "Zoe [VEGETARIAN | NUT-FREE]");

    assert_eq!(
        Person::unrestricted("Eve").label(&context.tags),
        "Eve [NO-RESTRICTIONS]"
    );
}
