use packlist_core::{Item, ItemDraft, ItemError, ItemId, PackingList, PackingStats, SortOrder};

fn draft(description: &str, quantity: u32) -> ItemDraft {
    ItemDraft::new(description, quantity).unwrap()
}

fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.description.as_str()).collect()
}

#[test]
fn test_add_grows_list_by_one_and_starts_unpacked() {
    let mut list = PackingList::new();

    let id = list.add(draft("Towel", 2));

    assert_eq!(list.len(), 1);
    let item = list.get(id).unwrap();
    assert!(!item.packed);
    assert_eq!(item.description, "Towel");
    assert_eq!(item.quantity, 2);
}

#[test]
fn test_delete_existing_shrinks_by_one() {
    let mut list = PackingList::sample();
    let id = list.items()[0].id;

    assert!(list.remove(id));

    assert_eq!(list.len(), 1);
    assert!(list.get(id).is_none());
}

#[test]
fn test_delete_missing_leaves_list_unchanged() {
    let mut list = PackingList::sample();
    let before = list.items().to_vec();

    assert!(!list.remove(ItemId::new(1000)));

    assert_eq!(list.items(), before);
}

#[test]
fn test_toggle_is_idempotent_under_double_application() {
    let mut list = PackingList::sample();
    let id = list.items()[0].id;
    let other = list.items()[1].clone();

    list.toggle(id);
    list.toggle(id);

    assert!(!list.get(id).unwrap().packed);
    assert_eq!(list.items()[1], other);
}

#[test]
fn test_toggle_missing_is_noop() {
    let mut list = PackingList::sample();
    let before = list.items().to_vec();

    assert!(!list.toggle(ItemId::new(1000)));

    assert_eq!(list.items(), before);
}

#[test]
fn test_sorting_twice_is_idempotent() {
    let mut list = PackingList::new();
    list.add(draft("Charger", 1));
    list.add(draft("boots", 1));
    list.add(draft("Apples", 3));

    let once = SortOrder::Alphabetical.view(&list);
    let again = SortOrder::Alphabetical.view(&list);

    assert_eq!(once, again);
    assert_eq!(names(&once), ["Apples", "boots", "Charger"]);
}

#[test]
fn test_packed_items_always_after_unpacked() {
    let mut list = PackingList::new();
    let a = list.add(draft("Adapter", 9));
    list.add(draft("Zip ties", 1));
    list.toggle(a);

    for order in [SortOrder::Alphabetical, SortOrder::Quantity] {
        let view = order.view(&list);
        let first_packed = view.iter().position(|i| i.packed).unwrap();
        assert!(
            view[first_packed..].iter().all(|i| i.packed),
            "packed items must form the tail under {order}"
        );
    }
}

#[test]
fn test_stats_for_two_items_one_packed() {
    let mut list = PackingList::sample();
    list.toggle(list.items()[0].id);

    let stats = PackingStats::of(&list);
    assert_eq!(stats.percentage(), 50);
}

#[test]
fn test_stats_for_empty_list_do_not_divide_by_zero() {
    let stats = PackingStats::of(&PackingList::new());
    assert_eq!(stats.percentage(), 0);
    assert!(!stats.summary().is_empty());
}

#[test]
fn test_blank_description_is_rejected_before_the_store() {
    assert_eq!(ItemDraft::new("   \t ", 1), Err(ItemError::BlankDescription));
}

// The full walkthrough: seed with the starter items, add Socks, pack the
// shirt, and check both the storage order and the alphabetical view.
#[test]
fn test_pack_for_a_trip_scenario() {
    let mut list = PackingList::sample();
    assert_eq!(names(list.items()), ["Shirt", "Pants"]);

    list.add(draft("Socks", 1));
    assert_eq!(names(list.items()), ["Socks", "Shirt", "Pants"]);

    let shirt = list
        .items()
        .iter()
        .find(|i| i.description == "Shirt")
        .unwrap()
        .id;
    list.toggle(shirt);

    let view = SortOrder::Alphabetical.view(&list);
    assert_eq!(names(&view), ["Pants", "Socks", "Shirt"]);
    assert!(view.last().unwrap().packed);

    // Storage order is untouched by the derivation.
    assert_eq!(names(list.items()), ["Socks", "Shirt", "Pants"]);

    let stats = PackingStats::of(&list);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.packed, 1);
    assert_eq!(stats.percentage(), 33);
}
