use pocketlist_core::{CartRemovalPolicy, GroceryItem, RollNumber, Student};
use serde_json::json;

#[test]
fn student_serializes_with_numeric_roll_number() {
    let student = Student::new(RollNumber::new(7).unwrap(), "Shagun").unwrap();
    let value = serde_json::to_value(&student).unwrap();
    assert_eq!(value, json!({ "roll_number": 7, "name": "Shagun" }));

    let parsed: Student = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, student);
}

#[test]
fn zero_roll_number_is_rejected_on_deserialize() {
    let result = serde_json::from_value::<Student>(json!({ "roll_number": 0, "name": "X" }));
    assert!(result.is_err());
}

#[test]
fn grocery_item_uses_plain_string_id() {
    let item = GroceryItem::new("3", "Carrots", 40.0)
        .unwrap()
        .with_image("carrots.png");
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["id"], json!("3"));
    assert_eq!(value["image"], json!("carrots.png"));
}

#[test]
fn removal_policy_uses_snake_case() {
    assert_eq!(
        serde_json::to_value(CartRemovalPolicy::RemoveOneMatching).unwrap(),
        json!("remove_one_matching")
    );
}

#[test]
fn student_deserialize_trims_and_rejects_blank_names() {
    let parsed: Student =
        serde_json::from_value(json!({ "roll_number": 3, "name": "  Arpit Dogra " })).unwrap();
    assert_eq!(parsed.name, "Arpit Dogra");

    let result = serde_json::from_value::<Student>(json!({ "roll_number": 3, "name": "   " }));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("name must not be blank"));
}
