use compact_storage::data::list::LinkedList;

#[test]
fn queue_usage() {
    let mut list = LinkedList::new();
    for value in 0..5 {
        list.push_back(value);
    }

    let mut drained = Vec::new();
    while let Some(value) = list.pop_front() {
        drained.push(value);
        if value == 2 {
            list.push_back(10);
        }
    }
    assert_eq!(drained, vec![0, 1, 2, 3, 4, 10]);
    assert!(list.is_empty());
}

#[test]
fn stack_usage() {
    let mut list = LinkedList::new();
    list.push_front("first".to_string());
    list.push_front("second".to_string());
    assert_eq!(list.pop_front().as_deref(), Some("second"));
    assert_eq!(list.back().map(String::as_str), Some("first"));
    assert_eq!(list.to_string(), "first -> NULL");
}

#[test]
fn iterators() {
    let list: LinkedList<_> = (1..=3).collect();
    assert_eq!((&list).into_iter().sum::<i32>(), 6);
    assert_eq!(list.iter().max(), Some(&3));
    assert_eq!(list.into_iter().map(|v| v * 2).collect::<Vec<_>>(), vec![2, 4, 6]);
}
