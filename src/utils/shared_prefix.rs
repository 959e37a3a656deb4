/// Length of the longest common prefix of `a` and `b`.
pub fn common_prefix_len<T>(a: &[T], b: &[T]) -> usize
where
    T: PartialEq,
{
    a.iter().zip(b).take_while(|(a, b)| a == b).count()
}

/// Find the shared common starting sequence in two slices. The returned
/// slice borrows from `a`.
///
/// ## Example
///
/// ```not_rust
/// a: [0, 1, 9, 0]
/// b: [0, 1, 2]
/// ```
/// > results in [0, 1]
pub fn find_shared_prefix<'a, T>(a: &'a [T], b: &[T]) -> &'a [T]
where
    T: PartialEq,
{
    &a[..common_prefix_len(a, b)]
}
