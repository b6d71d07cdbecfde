use red_black_tree::RbTree;

fn build(keys: impl IntoIterator<Item = i32>) -> RbTree<i32, usize> {
    let tree = RbTree::new();
    for (i, k) in keys.into_iter().enumerate() {
        tree.insert(k, i).unwrap();
    }
    tree
}

fn printed(tree: &RbTree<i32, usize>) -> String {
    let mut out = String::new();
    tree.print(&mut out).unwrap();
    out
}

#[test]
fn print_empty_tree_matrix() {
    let tree = RbTree::<i32, usize>::new();
    assert_eq!(printed(&tree), "empty\n");
    assert_eq!(tree.to_string(), "empty\n");
}

#[test]
fn print_single_node_matrix() {
    let tree = build([1]);
    assert_eq!(printed(&tree), "1-0(BLACK)\n");
}

#[test]
fn print_ascending_run_matrix() {
    let tree = build(1..=10);
    let expected = concat!(
        "4-3(BLACK)\n",
        "|---L: 2-1(BLACK)\n",
        "|   |---L: 1-0(BLACK)\n",
        "|   `---R: 3-2(BLACK)\n",
        "`---R: 6-5(BLACK)\n",
        "    |---L: 5-4(BLACK)\n",
        "    `---R: 8-7(RED)\n",
        "        |---L: 7-6(BLACK)\n",
        "        `---R: 9-8(BLACK)\n",
        "            `---R: 10-9(RED)\n",
    );
    assert_eq!(printed(&tree), expected);
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn print_after_delete_matrix() {
    let tree = build(1..=10);
    tree.delete(&6).unwrap();
    let expected = concat!(
        "4-3(BLACK)\n",
        "|---L: 2-1(BLACK)\n",
        "|   |---L: 1-0(BLACK)\n",
        "|   `---R: 3-2(BLACK)\n",
        "`---R: 7-6(BLACK)\n",
        "    |---L: 5-4(BLACK)\n",
        "    `---R: 9-8(RED)\n",
        "        |---L: 8-7(BLACK)\n",
        "        `---R: 10-9(BLACK)\n",
    );
    assert_eq!(printed(&tree), expected);
}

#[test]
fn print_left_only_child_matrix() {
    let tree = build([2, 1]);
    assert_eq!(printed(&tree), "2-0(BLACK)\n`---L: 1-1(RED)\n");
}

#[test]
fn print_string_payloads_matrix() {
    let tree = RbTree::new();
    tree.insert("b", "beta").unwrap();
    tree.insert("a", "alpha").unwrap();
    tree.insert("c", "gamma").unwrap();
    assert_eq!(
        tree.to_string(),
        "b-beta(BLACK)\n|---L: a-alpha(RED)\n`---R: c-gamma(RED)\n"
    );
}
