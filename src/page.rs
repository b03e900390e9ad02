//! Pagination of article listings. Page numbers are 1-indexed throughout.

/// One window of a paginated listing.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The 1-indexed page number.
    pub number: usize,

    /// The number of pages in the listing (at least 1).
    pub total_pages: usize,

    /// The items on this page.
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    /// The number of the previous page, if any.
    pub fn prev(&self) -> Option<usize> {
        match self.number {
            0 | 1 => None,
            n => Some(n - 1),
        }
    }

    /// The number of the next page, if any.
    pub fn next(&self) -> Option<usize> {
        match self.number < self.total_pages {
            true => Some(self.number + 1),
            false => None,
        }
    }
}

/// Returns the `page_number`th window of `page_size` items. Pages past the
/// end, page 0, and a page size of 0 all yield an empty slice.
pub fn paginate<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// The number of pages needed for `len` items. An empty listing still has one
/// (empty) page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    match len % page_size {
        0 => (len / page_size).max(1),
        _ => len / page_size + 1,
    }
}

/// Returns the [`Page`] numbered `page_number`, or `None` past the last page.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> Option<Page<'_, T>> {
    let total_pages = page_count(items.len(), page_size);
    if page_number == 0 || page_number > total_pages {
        return None;
    }
    Some(Page {
        number: page_number,
        total_pages,
        items: paginate(items, page_number, page_size),
    })
}

/// Splits `items` into consecutive [`Page`]s.
pub fn pages<T>(items: &[T], page_size: usize) -> impl Iterator<Item = Page<'_, T>> {
    let total_pages = page_count(items.len(), page_size);
    (1..=total_pages).map(move |number| Page {
        number,
        total_pages,
        items: paginate(items, number, page_size),
    })
}
