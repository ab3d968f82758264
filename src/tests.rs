use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::node::Node;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use super::*;

struct KeyGenerator {
    rng: StdRng,
    unique: HashSet<i32>,
    limit: i32,
}

impl KeyGenerator {
    fn new(seed: [u8; 32]) -> Self {
        const LIMIT: i32 = 100_000;
        Self {
            rng: SeedableRng::from_seed(seed),
            unique: HashSet::new(),
            limit: LIMIT,
        }
    }

    fn next(&mut self) -> i32 {
        self.rng.gen_range(-self.limit..self.limit)
    }

    fn next_unique(&mut self) -> i32 {
        let mut key = self.next();
        while self.unique.contains(&key) {
            key = self.next();
        }
        self.unique.insert(key);
        key
    }
}

impl<V, C> RbTree<i32, V, C>
where
    C: Comparator<i32>,
{
    /// 1. The root is black.
    /// 2. If a node is red, then both its children are black.
    /// 3. For each node, all simple paths from the node to descendant leaves contain the
    /// same number of black nodes.
    /// 4. An in-order walk yields strictly increasing keys.
    ///
    /// Parent links and the element count are checked as well.
    fn check_rb_properties(&self) {
        if let Some(root) = self.root {
            assert!(self.node_ref(root, Node::is_black));
            assert_eq!(self.node_ref(root, Node::parent), None);
        }
        self.check_children_color(self.root);
        let _ignore = self.check_black_height(self.root);
        self.check_parent_links(self.root);
        let keys: Vec<_> = self.keys().collect();
        for pair in keys.windows(2) {
            assert_eq!(self.cmp.compare(pair[0], pair[1]), Ordering::Less);
        }
        assert_eq!(keys.len(), self.len());
        assert_eq!(self.size(), self.len());
        assert_eq!(self.nodes.len(), self.len());
    }

    fn check_children_color(&self, x: Option<NodeIndex>) {
        let Some(x) = x else {
            return;
        };
        let left = self.node_ref(x, Node::left);
        let right = self.node_ref(x, Node::right);
        self.check_children_color(left);
        self.check_children_color(right);
        if self.node_ref(x, Node::is_red) {
            for child in [left, right].into_iter().flatten() {
                assert!(matches!(self.node_ref(child, Node::color), Color::Black));
            }
        }
    }

    fn check_black_height(&self, x: Option<NodeIndex>) -> usize {
        let Some(x) = x else {
            return 0;
        };
        let lefth = self.check_black_height(self.node_ref(x, Node::left));
        let righth = self.check_black_height(self.node_ref(x, Node::right));
        assert_eq!(lefth, righth);
        if self.node_ref(x, Node::is_black) {
            return lefth + 1;
        }
        lefth
    }

    fn check_parent_links(&self, x: Option<NodeIndex>) {
        let Some(x) = x else {
            return;
        };
        for child in [self.node_ref(x, Node::left), self.node_ref(x, Node::right)]
            .into_iter()
            .flatten()
        {
            assert_eq!(self.node_ref(child, Node::parent), Some(x));
            self.check_parent_links(Some(child));
        }
    }
}

fn with_tree_and_generator<V>(test_fn: impl Fn(RbTree<i32, V>, KeyGenerator)) {
    let seeds = vec![[0; 32], [1; 32], [2; 32]];
    for seed in seeds {
        let gen = KeyGenerator::new(seed);
        let tree = RbTree::new().with_observer(Silent);
        test_fn(tree, gen);
    }
}

#[derive(Debug, Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Event>>>);

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }
}

impl Observer for Recorder {
    fn on_event(&self, event: &Event) {
        self.0.lock().unwrap().push(*event);
    }
}

fn inorder<V, C>(tree: &RbTree<i32, V, C>) -> String {
    let mut visitor = InorderVisitor::default();
    tree.walk(&mut visitor);
    visitor.into_string()
}

/// The sample range tree: internal nodes repeat the key of the leaf holding
/// the largest key of their left subtree.
fn range_fixture() -> RbTree<i32, ()> {
    let leaf = |k| Layout::leaf(k, ());
    let node = |k| Layout::node(k, ());

    let node3 = node(3).with_left(leaf(3)).with_right(leaf(10));
    let node19 = node(19).with_left(leaf(19)).with_right(leaf(23));
    let node30 = node(30).with_left(leaf(30)).with_right(leaf(37));
    let node59 = node(59).with_left(leaf(59)).with_right(leaf(62));
    let node70 = node(70).with_left(leaf(70)).with_right(leaf(80));
    let node100 = node(100).with_left(leaf(100));

    let node10 = node(10).with_left(node3).with_right(node19);
    let node37 = node(37).with_left(node30).with_right(leaf(49));
    let node62 = node(62).with_left(node59).with_right(node70);
    let node89 = node(89).with_right(node100);

    let node23 = node(23).with_left(node10).with_right(node37);
    let node80 = node(80).with_left(node62).with_right(node89);

    RbTree::from_layout(node(49).with_left(node23).with_right(node80)).with_observer(Silent)
}

#[test]
fn red_black_tree_properties_is_satisfied() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in keys {
            tree.put(k, ()).unwrap();
        }
        tree.check_rb_properties();
    });
}

#[test]
fn properties_hold_after_every_operation() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(500)
            .collect();
        for &k in &keys {
            tree.put(k, k).unwrap();
            tree.check_rb_properties();
        }
        keys.shuffle(&mut gen.rng);
        let (removed, kept) = keys.split_at(300);
        for k in removed {
            assert_eq!(tree.delete(k), Some(*k));
            tree.check_rb_properties();
        }
        let mut expected = kept.to_vec();
        expected.sort_unstable();
        let remaining: Vec<_> = tree.keys().copied().collect();
        assert_eq!(remaining, expected);
        for k in kept {
            assert_eq!(tree.get(k), Some(k));
        }
    });
}

#[test]
fn interleaved_puts_and_deletes_keep_properties() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut present = HashSet::new();
        for _ in 0..2000 {
            let k = gen.rng.gen_range(0..200);
            if gen.rng.gen_bool(0.6) {
                let _ignore = tree.put(k, ()).unwrap();
                present.insert(k);
            } else {
                assert_eq!(tree.delete(&k).is_some(), present.remove(&k));
            }
            tree.check_rb_properties();
        }
        for k in 0..200 {
            assert_eq!(tree.has(&k), present.contains(&k));
        }
    });
}

#[test]
fn tree_len_will_update() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(100)
            .collect();
        for &k in &keys {
            tree.put(k, ()).unwrap();
        }
        assert_eq!(tree.len(), 100);
        assert_eq!(tree.size(), 100);
        for k in &keys {
            let _ignore = tree.delete(k);
        }
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.size(), 0);
        assert!(tree.root().is_none());
    });
}

#[test]
fn delete_non_exist_key_will_do_nothing() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in keys {
            tree.put(k, ()).unwrap();
        }
        let before = inorder(&tree);
        let to_delete: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in to_delete {
            assert_eq!(tree.delete(&k), None);
        }
        assert_eq!(tree.len(), 1000);
        assert_eq!(inorder(&tree), before);
    });
}

#[test]
fn iterate_through_tree_is_sorted() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .enumerate()
            .take(1000)
            .collect();
        for &(v, k) in &keys {
            tree.put(k, v).unwrap();
        }
        keys.sort_unstable_by(|a, b| a.1.cmp(&b.1));

        assert_eq!(tree.iter().count(), keys.len());
        for ((ek, ev), (v, k)) in tree.iter().zip(keys.iter()) {
            assert_eq!(ek, k);
            assert_eq!(ev, v);
        }
        let owned: Vec<_> = tree.into_iter().collect();
        let expected: Vec<_> = keys.into_iter().map(|(v, k)| (k, v)).collect();
        assert_eq!(owned, expected);
    });
}

#[test]
fn put_overwrites_existing_value() {
    let mut tree = RbTree::new();
    assert_eq!(tree.put(7, "a"), Ok(None));
    assert_eq!(tree.put(3, "b"), Ok(None));
    let before = inorder(&tree);
    assert_eq!(tree.put(7, "c"), Ok(Some("a")));
    assert_eq!(tree.get(&7), Some(&"c"));
    assert_eq!(tree.size(), 2);
    assert_eq!(inorder(&tree), before);
}

#[test]
fn get_mut_updates_in_place() {
    let mut tree = RbTree::new();
    tree.put(1, 10).unwrap();
    if let Some(v) = tree.get_mut(&1) {
        *v += 1;
    }
    assert_eq!(tree.get(&1), Some(&11));
    assert_eq!(tree.get_mut(&2), None);
}

#[test]
fn rejected_keys_leave_tree_untouched() {
    let recorder = Recorder::default();
    let mut tree = RbTree::new().with_observer(recorder.clone());
    tree.put(Some(2), "two").unwrap();
    tree.put(Some(1), "one").unwrap();

    assert_eq!(tree.put(None, "nil"), Err(Error::NilKey));
    assert_eq!(tree.len(), 2);
    assert!(!tree.has(&None));
    assert_eq!(tree.get(&None), None);
    assert_eq!(tree.delete(&None), None);
    let lookup = tree.get_parent(&None);
    assert_eq!((lookup.found, lookup.parent, lookup.dir), (false, None, None));
    assert_eq!(tree.len(), 2);

    let rejected: Vec<_> = recorder
        .events()
        .into_iter()
        .filter_map(|e| match e {
            Event::KeyRejected { op, error } => Some((op, error)),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejected,
        [
            ("put", Error::NilKey),
            ("has", Error::NilKey),
            ("get", Error::NilKey),
            ("delete", Error::NilKey),
            ("get_parent", Error::NilKey),
        ]
    );
}

#[test]
fn composite_keys_are_disallowed() {
    let mut tree = RbTree::new().with_observer(Silent);
    assert_eq!(
        tree.put(vec![1, 2], ()),
        Err(Error::DisallowedKeyKind(KeyKind::Sequence))
    );
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
}

#[test]
fn get_parent_reports_insertion_point() {
    let mut tree = RbTree::new();
    let empty = tree.get_parent(&5);
    assert_eq!((empty.found, empty.parent, empty.dir), (false, None, None));

    for k in [20, 10, 30] {
        tree.put(k, ()).unwrap();
    }
    let root = tree.root().unwrap().index();

    let lookup = tree.get_parent(&20);
    assert_eq!((lookup.found, lookup.parent, lookup.dir), (true, None, None));

    let lookup = tree.get_parent(&30);
    assert_eq!(
        (lookup.found, lookup.parent, lookup.dir),
        (true, Some(root), Some(Direction::Right))
    );

    let lookup = tree.get_parent(&5);
    assert!(!lookup.found);
    assert_eq!(lookup.dir, Some(Direction::Left));
    assert_eq!(lookup.parent.and_then(|p| tree.node(p)).map(|n| *n.key()), Some(10));

    let lookup = tree.get_parent(&25);
    assert!(!lookup.found);
    assert_eq!(lookup.dir, Some(Direction::Left));
    assert_eq!(lookup.parent.and_then(|p| tree.node(p)).map(|n| *n.key()), Some(30));
}

#[test]
fn first_node_becomes_black_root() {
    let recorder = Recorder::default();
    let mut tree = RbTree::new().with_observer(recorder.clone());
    tree.put(1, ()).unwrap();
    let root = tree.root().unwrap();
    assert_eq!(root.color(), Color::Black);
    assert!(root.parent().is_none());
    assert_eq!(recorder.events(), [Event::RootCreated { node: 0 }]);
}

#[test]
fn insert_fixup_rotates_on_outer_child() {
    let recorder = Recorder::default();
    let mut tree = RbTree::new().with_observer(recorder.clone());
    for k in [1, 2, 3] {
        tree.put(k, ()).unwrap();
    }
    assert_eq!(inorder(&tree), "((.1.)2(.3.))");
    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 2);
    assert!(root.is_black());
    assert!(root.left().unwrap().is_red());
    assert!(root.right().unwrap().is_red());
    assert!(recorder.events().contains(&Event::InsertCase {
        case: 3,
        side: Direction::Right,
    }));
    assert!(recorder.events().contains(&Event::Rotated {
        node: 0,
        dir: Direction::Left,
    }));
}

#[test]
fn insert_fixup_handles_inner_child() {
    let recorder = Recorder::default();
    let mut tree = RbTree::new().with_observer(recorder.clone());
    for k in [3, 1, 2] {
        tree.put(k, ()).unwrap();
    }
    assert_eq!(inorder(&tree), "((.1.)2(.3.))");
    let cases: Vec<_> = recorder
        .events()
        .into_iter()
        .filter(|e| matches!(e, Event::InsertCase { .. }))
        .collect();
    assert_eq!(
        cases,
        [
            Event::InsertCase {
                case: 2,
                side: Direction::Left,
            },
            Event::InsertCase {
                case: 3,
                side: Direction::Left,
            },
        ]
    );
    tree.check_rb_properties();
}

#[test]
fn inorder_serialization_reflects_shape() {
    let ascending: RbTree<i32, ()> = (1..=4).map(|k| (k, ())).collect();
    let descending: RbTree<i32, ()> = (1..=4).rev().map(|k| (k, ())).collect();
    assert_eq!(inorder(&ascending), "((.1.)2(.3(.4.)))");
    assert_eq!(inorder(&descending), "(((.1.)2.)3(.4.))");

    let again: RbTree<i32, ()> = (1..=4).map(|k| (k, ())).collect();
    let mut a = InorderVisitor::default();
    let mut b = InorderVisitor::default();
    ascending.walk(&mut a);
    again.walk(&mut b);
    assert_eq!(a, b);

    let mut c = InorderVisitor::default();
    descending.walk(&mut c);
    assert_ne!(a, c);

    assert_eq!(inorder(&RbTree::<i32, ()>::new()), ".");
}

#[test]
fn delete_two_children_splices_successor() {
    let mut tree = RbTree::new().with_observer(Silent);
    for k in [50, 30, 70, 20, 40, 60, 80, 65] {
        tree.put(k, k).unwrap();
    }
    tree.check_rb_properties();
    // 60 is the successor of 50 and has a right child
    assert_eq!(tree.delete(&50), Some(50));
    tree.check_rb_properties();
    assert_eq!(*tree.root().unwrap().key(), 60);
    assert!(!tree.has(&50));
    // 70 has two children, its successor 80 is its right child
    assert_eq!(tree.delete(&70), Some(70));
    tree.check_rb_properties();
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [20, 30, 40, 60, 65, 80]);
}

#[test]
fn delete_until_empty_from_root() {
    with_tree_and_generator(|mut tree, mut gen| {
        for _ in 0..300 {
            let _ignore = tree.put(gen.next_unique(), ());
        }
        while let Some(root) = tree.root() {
            let key = *root.key();
            assert!(tree.delete(&key).is_some());
            tree.check_rb_properties();
        }
        assert!(tree.is_empty());
    });
}

#[test]
fn delete_fixup_runs_all_cases() {
    let recorder = Recorder::default();
    let mut tree = RbTree::new().with_observer(recorder.clone());
    let mut gen = KeyGenerator::new([7; 32]);
    let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
        .take(2000)
        .collect();
    for &k in &keys {
        tree.put(k, ()).unwrap();
    }
    for k in &keys {
        let _ignore = tree.delete(k);
    }
    let events = recorder.events();
    for case in 1..=4 {
        for side in [Direction::Left, Direction::Right] {
            assert!(
                events.contains(&Event::DeleteCase { case, side }),
                "delete case {case} on the {side} never ran"
            );
        }
    }
    for case in 1..=3 {
        for side in [Direction::Left, Direction::Right] {
            assert!(events.contains(&Event::InsertCase { case, side }));
        }
    }
}

#[test]
fn rotations_preserve_order_and_invert() {
    let mut tree: RbTree<i32, ()> = (1..=7).map(|k| (k, ())).collect();
    let keys: Vec<_> = tree.keys().copied().collect();
    let before = inorder(&tree);
    let root = tree.root().unwrap().index();

    assert!(tree.rotate_left(root));
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), keys);
    assert_ne!(inorder(&tree), before);
    let new_root = tree.root().unwrap();
    assert_eq!(new_root.left().map(|n| n.index()), Some(root));
    assert!(new_root.parent().is_none());

    let new_root = new_root.index();
    assert!(tree.rotate_right(new_root));
    assert_eq!(inorder(&tree), before);
    tree.check_rb_properties();
}

#[test]
fn rotation_without_child_is_noop() {
    let recorder = Recorder::default();
    let mut tree = RbTree::new().with_observer(recorder.clone());
    tree.put(1, ()).unwrap();
    let root = tree.root().unwrap().index();
    assert!(!tree.rotate_left(root));
    assert!(!tree.rotate_right(root));
    assert!(!tree.rotate_left(NodeIndex::new(42)));
    assert_eq!(inorder(&tree), "(.1.)");
    let skipped: Vec<_> = recorder
        .events()
        .into_iter()
        .filter_map(|e| match e {
            Event::RotationSkipped { reason, .. } => Some(reason),
            _ => None,
        })
        .collect();
    assert_eq!(
        skipped,
        [
            SkipReason::MissingChild,
            SkipReason::MissingChild,
            SkipReason::MissingNode
        ]
    );
}

#[test]
fn custom_comparator_orders_keys() {
    let mut tree = RbTree::with_comparator(|a: &i32, b: &i32| b.cmp(a)).with_observer(Silent);
    for k in [5, 1, 9, 3] {
        tree.put(k, ()).unwrap();
    }
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [9, 5, 3, 1]);
    assert_eq!(tree.minimum().map(|(k, _)| *k), Some(9));
    assert_eq!(tree.maximum().map(|(k, _)| *k), Some(1));
    tree.check_rb_properties();
}

#[test]
fn byte_order_compares_strings() {
    let mut tree = RbTree::with_comparator(ByteOrder).with_observer(Silent);
    for k in ["pear", "Apple", "apple", ""] {
        tree.put(k.to_string(), k.len()).unwrap();
    }
    assert_eq!(
        tree.keys().map(String::as_str).collect::<Vec<_>>(),
        ["", "Apple", "apple", "pear"]
    );
    assert_eq!(tree.get(&"pear".to_string()), Some(&4));
}

#[test]
fn tree_clear_is_ok() {
    let mut tree = RbTree::new();
    tree.put(1, 1).unwrap();
    tree.put(2, 2).unwrap();
    tree.put(3, 3).unwrap();
    assert_eq!(tree.len(), 3);
    tree.clear();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert!(tree.nodes.is_empty());
    assert!(tree.root().is_none());
    tree.put(4, 4).unwrap();
    assert_eq!(tree.get(&4), Some(&4));
}

#[test]
fn range_query_fixture_is_pinned() {
    let tree = range_fixture();
    assert_eq!(tree.len(), 25);
    assert_eq!(tree.split_node(19, 77).map(|n| *n.key()), Some(49));
    assert_eq!(tree.values_in_range(19, 77), [37, 23, 19, 59, 70]);
}

#[test]
fn range_query_split_node_descends_left_first() {
    let tree = range_fixture();
    // 3 is met before anything else in range on the way down the left spine
    let split = tree.split_node(0, 5).unwrap();
    assert_eq!(*split.key(), 3);
    assert!(!split.is_leaf());
    assert_eq!(tree.values_in_range(0, 5), [3]);
    // 62 lies in range but sits off the left spine, so no split node is found
    assert!(tree.split_node(60, 65).is_none());
    assert!(tree.values_in_range(60, 65).is_empty());
}

#[test]
fn range_query_on_terminal_split_node() {
    let tree = RbTree::from_layout(Layout::leaf(4, ()));
    assert_eq!(tree.values_in_range(1, 9), [4]);
    assert!(tree.values_in_range(5, 9).is_empty());
    assert!(RbTree::<i32, ()>::new().values_in_range(0, 10).is_empty());
}

#[test]
fn range_query_on_balanced_tree_terminates() {
    with_tree_and_generator(|mut tree, mut gen| {
        for _ in 0..500 {
            tree.put(gen.next_unique(), ()).unwrap();
        }
        for _ in 0..100 {
            let lo = gen.next();
            let hi = lo + gen.rng.gen_range(0..20_000);
            for k in tree.values_in_range(lo, hi) {
                assert!(tree.has(&k));
            }
        }
    });
}
