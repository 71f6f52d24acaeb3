//! Registry handle and `Selectable` guards through the public API.

use marquee::{RegistryHandle, Selectable, SelectableId};

fn order(registry: &RegistryHandle<&'static str, u32>) -> Vec<&'static str> {
    registry.with(|r| r.ordered().into_iter().map(|(_, item)| *item).collect())
}

#[test]
fn test_handles_share_one_registry() {
    let registry: RegistryHandle<&'static str, u32> = RegistryHandle::new();
    let clone = registry.clone();

    clone.register(SelectableId::new("a"), 1, "A");

    assert!(registry.contains(&SelectableId::new("a")));
    assert!(registry.same_registry(&clone));
    assert!(!registry.same_registry(&RegistryHandle::new()));
}

#[test]
fn test_registration_order_is_first_insertion_order() {
    let registry = RegistryHandle::new();
    registry.register(SelectableId::new("a"), 1, "A");
    registry.register(SelectableId::new("b"), 2, "B");
    registry.register(SelectableId::new("c"), 3, "C");

    // Upsert keeps the slot; remove then add goes last
    registry.register(SelectableId::new("a"), 1, "A");
    registry.unregister(&SelectableId::new("b"));
    registry.register(SelectableId::new("b"), 2, "B");

    assert_eq!(order(&registry), vec!["A", "C", "B"]);
}

#[test]
fn test_selectables_unregister_on_drop() {
    let registry = RegistryHandle::new();
    let first = Selectable::mount(&registry, 1, "A");
    let second = Selectable::mount(&registry, 2, "B");
    assert_eq!(registry.len(), 2);
    assert_ne!(first.id(), second.id());

    drop(first);

    assert_eq!(order(&registry), vec!["B"]);
    drop(second);
    assert!(registry.is_empty());
}

#[test]
fn test_selectable_set_item_only_reregisters_on_change() {
    let registry = RegistryHandle::new();
    let mut child = Selectable::mount_with_id(&registry, SelectableId::new("row-1"), 1, "A");

    assert!(!child.set_item("A"));
    assert!(child.set_item("A2"));
    assert_eq!(child.item(), &"A2");
    assert_eq!(order(&registry), vec!["A2"]);
}

#[test]
fn test_selectable_element_swap_keeps_position() {
    let registry = RegistryHandle::new();
    let mut a = Selectable::mount(&registry, 1, "A");
    let _b = Selectable::mount(&registry, 2, "B");

    a.set_element(10);

    let elements: Vec<u32> = registry.with(|r| r.ordered().into_iter().map(|(e, _)| *e).collect());
    assert_eq!(elements, vec![10, 2]);
}

#[test]
fn test_generated_ids_have_prefix() {
    let id = SelectableId::generate();

    assert!(id.as_str().starts_with("selectable-"));
    assert_eq!(id.to_string(), id.as_str());
}
