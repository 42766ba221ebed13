//! View models handed to templates.

pub mod categories;
pub mod videos;

/// Number of cards shown per row on the home and category pages.
pub const ROW_SIZE: usize = 3;

/// Split `items` into consecutive rows of `size`; only the last row may be
/// shorter. A `size` of zero is treated as one.
pub fn chunked<T>(items: impl IntoIterator<Item = T>, size: usize) -> Vec<Vec<T>> {
    let size = size.max(1);
    let mut rows = Vec::new();
    let mut row = Vec::with_capacity(size);
    for item in items {
        row.push(item);
        if row.len() == size {
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(size)));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
