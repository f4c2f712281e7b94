use once_cell::sync::Lazy;

/// Read-only source of the records behind a list page
pub trait DatasetProvider<T> {
    fn records(&self) -> &[T];
}

/// Dataset backed by a lazily built static mock array
pub struct StaticDataset<T: 'static> {
    source: &'static Lazy<Vec<T>>,
}

impl<T: 'static> StaticDataset<T> {
    pub const fn new(source: &'static Lazy<Vec<T>>) -> Self {
        Self { source }
    }

    /// Records with the static lifetime of the backing array
    pub fn all(self) -> &'static [T] {
        self.source.as_slice()
    }
}

impl<T: 'static> Clone for StaticDataset<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for StaticDataset<T> {}

impl<T: 'static> DatasetProvider<T> for StaticDataset<T> {
    fn records(&self) -> &[T] {
        self.source.as_slice()
    }
}

impl<T> DatasetProvider<T> for Vec<T> {
    fn records(&self) -> &[T] {
        self.as_slice()
    }
}
