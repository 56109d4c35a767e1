use std::collections::HashSet;

use proptest::prelude::*;

use mindkey_core::{forest_ids, forest_len, ForestStore, Node, NodeId};

/// Random tree shapes; ids are assigned afterwards so they are unique.
fn arb_shape() -> impl Strategy<Value = Node> {
    let leaf = "[a-z]{1,8}".prop_map(|text| Node::new(NodeId(0), text));
    leaf.prop_recursive(3, 20, 4, |inner| {
        ("[a-z]{1,8}", prop::collection::vec(inner, 0..4))
            .prop_map(|(text, children)| Node::with_children(NodeId(0), text, children))
    })
}

fn arb_forest() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(arb_shape(), 1..4).prop_map(assign_ids)
}

fn assign_ids(mut nodes: Vec<Node>) -> Vec<Node> {
    fn walk(node: &mut Node, next: &mut u64) {
        *next += 1;
        node.id = NodeId(*next);
        for child in &mut node.children {
            walk(child, next);
        }
    }
    let mut next = 0;
    for node in &mut nodes {
        walk(node, &mut next);
    }
    nodes
}

fn find_node<'a>(nodes: &'a [Node], id: NodeId) -> Option<&'a Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

proptest! {
    #[test]
    fn any_forest_round_trips_through_json(forest in arb_forest()) {
        let json = serde_json::to_string(&forest).unwrap();
        let back: Vec<Node> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, forest);
    }

    #[test]
    fn import_then_export_is_the_identity(forest in arb_forest()) {
        let store = ForestStore::from_nodes(forest.clone()).unwrap();
        prop_assert_eq!(store.len(), forest_len(&forest));
        prop_assert_eq!(store.export(), forest);
        store.validate_invariants().unwrap();
    }

    #[test]
    fn deleting_any_node_removes_its_subtree_and_nothing_else(
        forest in arb_forest(),
        pick in any::<prop::sample::Index>(),
    ) {
        let all_ids = forest_ids(&forest);
        let target = *pick.get(&all_ids);
        let subtree: HashSet<NodeId> =
            forest_ids(std::slice::from_ref(find_node(&forest, target).unwrap()))
                .into_iter()
                .collect();

        let mut store = ForestStore::from_nodes(forest.clone()).unwrap();
        let removed = store.delete(target).unwrap();

        prop_assert_eq!(removed, subtree.len());
        prop_assert_eq!(store.len(), all_ids.len() - subtree.len());
        for id in &all_ids {
            prop_assert_eq!(store.contains(*id), !subtree.contains(id));
        }
        store.validate_invariants().unwrap();
    }

    #[test]
    fn grown_forests_never_repeat_an_id(
        forest in arb_forest(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..40),
    ) {
        let mut store = ForestStore::from_nodes(forest.clone()).unwrap();
        let mut ids = forest_ids(&forest);

        for pick in picks {
            let parent = *pick.get(&ids);
            let child = store.add_child(parent).unwrap();
            ids.push(child);
        }

        let unique: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
        store.validate_invariants().unwrap();
    }

    #[test]
    fn renames_preserve_structure(
        forest in arb_forest(),
        pick in any::<prop::sample::Index>(),
        text in "[a-z ]{0,16}",
    ) {
        let all_ids = forest_ids(&forest);
        let target = *pick.get(&all_ids);

        let mut store = ForestStore::from_nodes(forest.clone()).unwrap();
        store.rename(target, text.clone()).unwrap();

        let exported = store.export();
        prop_assert_eq!(forest_ids(&exported), all_ids);
        prop_assert_eq!(find_node(&exported, target).unwrap().text.clone(), text);
    }
}
