use sssp_engine::data_structures::BinaryHeapWrapper;

#[test]
fn test_pops_in_ascending_priority() {
    let mut queue = BinaryHeapWrapper::new();
    queue.push("c", 30u32);
    queue.push("a", 10);
    queue.push("b", 20);

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some((&"a", 10)));
    assert_eq!(queue.pop(), Some(("a", 10)));
    assert_eq!(queue.pop(), Some(("b", 20)));
    assert_eq!(queue.pop(), Some(("c", 30)));
    assert!(queue.pop().is_none());
    assert!(queue.is_empty());
}

#[test]
fn test_ties_pop_in_insertion_order() {
    let mut queue = BinaryHeapWrapper::new();
    for label in ["first", "second", "third"] {
        queue.push(label, 5u32);
    }
    queue.push("early", 1);

    let order: Vec<&str> = std::iter::from_fn(|| queue.pop().map(|(v, _)| v)).collect();
    assert_eq!(order, vec!["early", "first", "second", "third"]);
}

#[test]
fn test_payload_needs_no_ordering() {
    #[derive(Debug, PartialEq)]
    struct Opaque(f64);

    let mut queue = BinaryHeapWrapper::new();
    queue.push(Opaque(0.5), 2u8);
    queue.push(Opaque(1.5), 1u8);

    assert_eq!(queue.pop(), Some((Opaque(1.5), 1)));
    queue.clear();
    assert!(queue.is_empty());
}
