/// Returns its argument unchanged.
///
/// This is the default iterator wherever one is optional, such as
/// [`every_truthy`](crate::collections::every_truthy).
pub const fn identity<T>(value: T) -> T {
    value
}
