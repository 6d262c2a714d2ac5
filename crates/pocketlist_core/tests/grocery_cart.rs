use pocketlist_core::{
    CartRemovalPolicy, GroceryItem, GroceryItemId, GroceryService, GroceryServiceError,
    InMemoryCatalogRepository, EMPTY_CART_NOTICE,
};

fn id(value: &str) -> GroceryItemId {
    GroceryItemId::new(value).unwrap()
}

fn two_item_service(policy: CartRemovalPolicy) -> GroceryService<InMemoryCatalogRepository> {
    let catalog = InMemoryCatalogRepository::from_items([
        GroceryItem::new("1", "Apples", 80.0).unwrap(),
        GroceryItem::new("2", "Bananas", 50.0).unwrap(),
    ])
    .unwrap();
    GroceryService::new(catalog, policy)
}

#[test]
fn remove_all_matching_matches_documented_example() {
    let mut service = two_item_service(CartRemovalPolicy::RemoveAllMatching);
    service.add_to_cart(&id("1")).unwrap();
    service.add_to_cart(&id("1")).unwrap();
    service.add_to_cart(&id("2")).unwrap();
    assert_eq!(service.cart().len(), 3);
    assert_eq!(service.total(), 210.0);

    assert_eq!(service.remove_from_cart(&id("1")), 2);
    assert_eq!(service.cart().len(), 1);
    assert_eq!(service.cart().entries()[0].id, id("2"));
    assert_eq!(service.total(), 50.0);
}

#[test]
fn remove_one_matching_drops_single_unit() {
    let mut service = two_item_service(CartRemovalPolicy::RemoveOneMatching);
    service.add_to_cart(&id("1")).unwrap();
    service.add_to_cart(&id("1")).unwrap();
    service.add_to_cart(&id("2")).unwrap();

    assert_eq!(service.remove_from_cart(&id("1")), 1);
    assert_eq!(service.cart().len(), 2);
    assert_eq!(service.cart().quantity_of(&id("1")), 1);
    assert_eq!(service.total(), 130.0);
}

#[test]
fn cart_keeps_selection_order_and_duplicates() {
    let mut service = two_item_service(CartRemovalPolicy::default());
    for value in ["2", "1", "2"] {
        service.add_to_cart(&id(value)).unwrap();
    }
    let ids: Vec<&str> = service
        .cart()
        .entries()
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(ids, vec!["2", "1", "2"]);
}

#[test]
fn cart_changes_never_touch_catalog() {
    let mut service = two_item_service(CartRemovalPolicy::default());
    service.add_to_cart(&id("1")).unwrap();
    service.remove_from_cart(&id("1"));
    service.add_to_cart(&id("2")).unwrap();
    service.clear_cart();
    assert_eq!(service.filtered_catalog().len(), 2);
}

#[test]
fn add_unknown_item_is_rejected() {
    let mut service = two_item_service(CartRemovalPolicy::default());
    let err = service.add_to_cart(&id("99")).unwrap_err();
    assert_eq!(err, GroceryServiceError::ItemNotFound(id("99")));
    assert!(service.cart().is_empty());
}

#[test]
fn clear_cart_empties_unconditionally() {
    let mut service = two_item_service(CartRemovalPolicy::default());
    assert_eq!(service.clear_cart(), 0);
    service.add_to_cart(&id("1")).unwrap();
    service.add_to_cart(&id("2")).unwrap();
    assert_eq!(service.clear_cart(), 2);
    assert!(service.cart().is_empty());
    assert_eq!(service.total(), 0.0);
    assert_eq!(EMPTY_CART_NOTICE, "Cart is empty.");
}

#[test]
fn total_follows_every_mutation() {
    let mut service = GroceryService::with_demo_catalog(CartRemovalPolicy::default());
    let mut expected = 0.0;
    for value in ["1", "5", "7", "10"] {
        let item = service.add_to_cart(&id(value)).unwrap();
        expected += item.price;
        assert_eq!(service.total(), expected);
    }
    service.remove_from_cart(&id("7"));
    assert_eq!(service.total(), expected - 120.0);
}
