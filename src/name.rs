/// Types that expose a comparable display name.
pub trait HasName {
    fn name(&self) -> &str;

    /// Case-insensitive substring test. The token must already be
    /// lowercased by the caller.
    fn name_contains(&self, lowercase_token: &str) -> bool {
        self.name().to_lowercase().contains(lowercase_token)
    }
}

// Delegate HasName through references and owning pointers
impl<T: HasName + ?Sized> HasName for &T {
    fn name(&self) -> &str {
        (*self).name()
    }
}
impl<T: HasName + ?Sized> HasName for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}
impl<T: HasName + ?Sized> HasName for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Sorting helpers for slices of `T: HasName`.
pub trait SortByName {
    /// Stable, ascending sort by `name()`.
    fn sort_by_name(&mut self);
}

impl<T: HasName> SortByName for [T] {
    fn sort_by_name(&mut self) {
        // `sort_by` is stable; compares &str by Unicode scalar values.
        self.sort_by(|a, b| a.name().cmp(b.name()));
    }
}
