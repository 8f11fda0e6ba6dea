use super::*;

#[test]
fn can_keep_order_when_collecting_in_parallel() {
    let source = (0..1000).collect::<Vec<i32>>();

    let parallel = maybe_parallel_collect(source.as_slice(), true, |item| item * 2);
    let sequential = maybe_parallel_collect(source.as_slice(), false, |item| item * 2);

    assert_eq!(parallel, sequential);
    assert_eq!(parallel[999], 1998);
}
