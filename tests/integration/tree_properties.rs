use proptest::prelude::*;
use simplefs::error::{Limit, TreeError};
use simplefs::tree::{Limits, Namespace, NodeType, MAX_DEPTH, MAX_NAMELENGTH, MAX_NODES};
use simplefs::types::NodeId;
use std::collections::BTreeSet;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Build a random tree from (parent pick, name, is_dir) triples
fn build_tree(ops: &[(usize, String, bool)]) -> (Namespace, Vec<NodeId>) {
    let mut ns = Namespace::new();
    let mut dirs = vec![ns.root()];
    for (pick, name, is_dir) in ops {
        let parent = dirs[pick % dirs.len()];
        let node_type = if *is_dir {
            NodeType::Directory
        } else {
            NodeType::File
        };
        if let Ok(id) = ns.create(parent, name, node_type) {
            if *is_dir {
                dirs.push(id);
            }
        }
    }
    (ns, dirs)
}

fn ops_strategy() -> impl Strategy<Value = Vec<(usize, String, bool)>> {
    prop::collection::vec((any::<usize>(), name_strategy(), any::<bool>()), 0..60)
}

proptest! {
    #[test]
    fn create_then_lookup_returns_child_one_level_deeper(ops in ops_strategy(), name in name_strategy()) {
        let (mut ns, dirs) = build_tree(&ops);
        let parent = *dirs.last().unwrap();
        if ns.find_in_dir(parent, &name).unwrap().is_none() {
            let id = ns.create(parent, &name, NodeType::File).unwrap();
            prop_assert_eq!(ns.find_in_dir(parent, &name).unwrap(), Some(id));
            prop_assert_eq!(
                ns.node(id).unwrap().depth(),
                ns.node(parent).unwrap().depth() + 1
            );
        }
    }

    #[test]
    fn duplicate_create_fails_and_changes_nothing(ops in ops_strategy(), name in name_strategy()) {
        let (mut ns, _) = build_tree(&ops);
        let root = ns.root();
        let _ = ns.create(root, &name, NodeType::File);
        let before = ns.len();
        let err = ns.create(root, &name, NodeType::Directory).unwrap_err();
        prop_assert!(matches!(err, TreeError::AlreadyExists(_)));
        prop_assert_eq!(ns.len(), before);
    }

    #[test]
    fn recursive_delete_removes_exactly_the_subtree(ops in ops_strategy(), pick in any::<usize>()) {
        let (mut ns, dirs) = build_tree(&ops);
        prop_assume!(dirs.len() > 1);
        let target = dirs[1 + pick % (dirs.len() - 1)];
        let parent = ns.node(target).unwrap().parent().unwrap();
        let name = ns.node(target).unwrap().name().to_string();

        let before = ns.len();
        let size = ns.subtree_size(target).unwrap();
        prop_assert_eq!(ns.delete_recursive(target).unwrap(), size);
        prop_assert_eq!(ns.len(), before - size);
        prop_assert_eq!(ns.find_in_dir(parent, &name).unwrap(), None);
        prop_assert!(!ns.contains(target));
    }

    #[test]
    fn find_returns_each_match_once_in_sorted_order(ops in ops_strategy(), name in name_strategy()) {
        let (ns, _) = build_tree(&ops);
        let root = ns.root();
        let paths = ns.find_paths(root, &name).unwrap();

        let mut sorted = paths.clone();
        sorted.sort();
        prop_assert_eq!(&paths, &sorted);

        let unique: BTreeSet<&String> = paths.iter().collect();
        prop_assert_eq!(unique.len(), paths.len());

        for path in &paths {
            let suffix = format!("/{}", name);
            prop_assert!(path.ends_with(&suffix));
            let id = ns.lookup(root, path).unwrap();
            prop_assert_eq!(ns.node(id).unwrap().name(), name.as_str());
        }
        prop_assert_eq!(paths.len(), ns.find_by_name(root, &name).unwrap().len());
    }

    #[test]
    fn get_path_round_trips_through_lookup(ops in ops_strategy()) {
        let (ns, dirs) = build_tree(&ops);
        let root = ns.root();
        for id in dirs.into_iter().skip(1) {
            let path = ns.get_path(id).unwrap();
            prop_assert_eq!(ns.lookup(root, &path).unwrap(), id);
        }
    }
}

#[test]
fn get_path_of_nested_directories() {
    let mut ns = Namespace::new();
    let root = ns.root();
    let a = ns.create(root, "a", NodeType::Directory).unwrap();
    let b = ns.create(a, "b", NodeType::Directory).unwrap();
    assert_eq!(ns.get_path(a).unwrap(), "/a");
    assert_eq!(ns.get_path(b).unwrap(), "/a/b");
}

#[test]
fn non_recursive_delete_keeps_descendants() {
    let mut ns = Namespace::new();
    let root = ns.root();
    let a = ns.create(root, "a", NodeType::Directory).unwrap();
    let b = ns.create(a, "b", NodeType::Directory).unwrap();
    let c = ns.create(b, "c", NodeType::File).unwrap();

    assert!(matches!(ns.delete(a), Err(TreeError::NotEmpty(_))));
    assert_eq!(ns.len(), 4);
    assert_eq!(ns.lookup(root, "/a/b/c").unwrap(), c);
}

#[test]
fn default_name_length_boundary() {
    let mut ns = Namespace::new();
    let root = ns.root();
    let exact = "n".repeat(MAX_NAMELENGTH);
    let over = "n".repeat(MAX_NAMELENGTH + 1);
    assert!(ns.create(root, &exact, NodeType::File).is_ok());
    assert!(matches!(
        ns.create(root, &over, NodeType::File),
        Err(TreeError::CapacityExceeded {
            limit: Limit::NameLength,
            ..
        })
    ));
}

#[test]
fn default_children_boundary() {
    let mut ns = Namespace::new();
    let root = ns.root();
    for i in 0..MAX_NODES {
        ns.create(root, &format!("f{}", i), NodeType::File).unwrap();
    }
    assert!(matches!(
        ns.create(root, "one_more", NodeType::File),
        Err(TreeError::CapacityExceeded {
            limit: Limit::Children,
            ..
        })
    ));
}

#[test]
fn default_depth_boundary() {
    let mut ns = Namespace::with_limits(Limits::default());
    let mut current = ns.root();
    for _ in 1..MAX_DEPTH {
        current = ns.create(current, "d", NodeType::Directory).unwrap();
    }
    assert_eq!(ns.node(current).unwrap().depth(), MAX_DEPTH);
    assert!(matches!(
        ns.create(current, "d", NodeType::Directory),
        Err(TreeError::CapacityExceeded {
            limit: Limit::Depth,
            ..
        })
    ));

    let deepest = format!("/{}", vec!["d"; MAX_DEPTH - 1].join("/"));
    assert_eq!(ns.lookup(ns.root(), &deepest).unwrap(), current);
    assert_eq!(ns.delete_recursive(ns.lookup(ns.root(), "/d").unwrap()).unwrap(), MAX_DEPTH - 1);
    assert!(ns.is_empty());
}

#[test]
fn very_deep_chain_is_walked_iteratively() {
    const LEVELS: usize = 200_000;
    let mut ns = Namespace::with_limits(Limits {
        max_depth: 1_000_000,
        ..Limits::default()
    });
    let root = ns.root();
    let top = ns.create(root, "d", NodeType::Directory).unwrap();
    let mut current = top;
    for _ in 1..LEVELS {
        current = ns.create(current, "d", NodeType::Directory).unwrap();
    }
    ns.create(current, "leaf", NodeType::File).unwrap();

    assert_eq!(ns.node(current).unwrap().depth(), LEVELS + 1);
    assert!(ns.find_by_name(root, "zz").unwrap().is_empty());
    assert_eq!(ns.find_by_name(root, "d").unwrap().len(), LEVELS);
    assert_eq!(ns.find_paths(root, "leaf").unwrap().len(), 1);
    assert_eq!(ns.subtree_size(top).unwrap(), LEVELS + 1);

    let deepest = format!("/{}", vec!["d"; LEVELS].join("/"));
    assert_eq!(ns.lookup(root, &deepest).unwrap(), current);
    assert_eq!(ns.get_path(current).unwrap(), deepest);

    assert_eq!(ns.delete_recursive(top).unwrap(), LEVELS + 1);
    assert!(ns.is_empty());
}
