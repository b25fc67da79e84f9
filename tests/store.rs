use menulist::backend::Food;
use menulist::store::MenuStore;

fn food(id: i64, name: &str, price: &str) -> Food {
    Food {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        price: price.to_string(),
        available: true,
        image: format!("https://example.com/{name}.png"),
    }
}

#[test]
fn replace_all_mirrors_snapshot_order() {
    let mut store = MenuStore::new();
    store.append(food(99, "Stale", "1.00"));

    let snapshot = vec![food(1, "Pizza", "25.00"), food(2, "Soda", "3.00"), food(3, "Salad", "12.50")];
    store.replace_all(snapshot.clone());

    assert_eq!(store.as_slice(), snapshot.as_slice());
}

#[test]
fn append_keeps_existing_order() {
    let mut store = MenuStore::new();
    store.replace_all(vec![food(1, "Pizza", "25.00"), food(2, "Soda", "3.00")]);

    store.append(food(3, "Salad", "12.50"));

    let ids: Vec<i64> = store.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn replace_swaps_exactly_the_matching_record() {
    let mut store = MenuStore::new();
    let untouched = food(1, "Pizza", "25.00");
    store.replace_all(vec![untouched.clone(), food(2, "Soda", "3.00"), food(3, "Salad", "12.50")]);

    let updated = food(2, "Soda", "3.50");
    assert!(store.replace(updated.clone()));

    assert_eq!(store.as_slice()[0], untouched);
    assert_eq!(store.as_slice()[1], updated);
    assert_eq!(store.as_slice()[2].id, 3);
}

#[test]
fn replace_of_unknown_id_is_a_noop() {
    let mut store = MenuStore::new();
    let snapshot = vec![food(1, "Pizza", "25.00")];
    store.replace_all(snapshot.clone());

    assert!(!store.replace(food(42, "Ghost", "0.00")));
    assert_eq!(store.as_slice(), snapshot.as_slice());
}

#[test]
fn remove_preserves_order_of_the_rest() {
    let mut store = MenuStore::new();
    store.replace_all(vec![food(1, "Pizza", "25.00"), food(2, "Soda", "3.00"), food(3, "Salad", "12.50")]);

    let removed = store.remove(2);
    assert_eq!(removed.map(|f| f.id), Some(2));

    let ids: Vec<i64> = store.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn remove_of_unknown_id_returns_none() {
    let mut store = MenuStore::new();
    store.replace_all(vec![food(1, "Pizza", "25.00")]);

    assert!(store.remove(42).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn get_finds_by_id() {
    let mut store = MenuStore::new();
    store.replace_all(vec![food(1, "Pizza", "25.00"), food(2, "Soda", "3.00")]);

    assert_eq!(store.get(2).map(|f| f.name.as_str()), Some("Soda"));
    assert!(store.get(42).is_none());
    assert!(!store.is_empty());
}
