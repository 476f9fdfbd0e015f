//! Paginated, sorted and filtered list projections.
//!
//! [`build_page`] windows a lazily evaluated [`ListingSource`] into a single
//! [`Paginated`] page. Sources only record filters and orderings; nothing is
//! read until [`ListingSource::count`] and [`ListingSource::slice`] run, so a
//! database-backed source never realises more than one page of rows.

use std::cmp::Ordering;

use serde::Serialize;

use crate::repository::errors::RepositoryResult;

/// Number of records shown per page on the students index.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 3;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Number of pages needed for `total` records; never less than one.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

/// Normalises a caller supplied page number into `[1, total_pages]`.
///
/// Missing, zero and negative requests land on the first page, requests past
/// the end land on the last one.
pub fn clamp_page(requested: Option<i64>, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    match requested {
        Some(page) if page > 0 => usize::try_from(page).map_or(last, |page| page.min(last)),
        _ => 1,
    }
}

/// A single page of records plus what a template needs to draw navigation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page strip for navigation; `None` marks an elided run of pages.
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = current_page.clamp(1, total_pages);

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}

/// Sort direction shared by every sortable listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A closed set of orderings addressed by an external string token.
pub trait SortOrder: Copy {
    /// Maps a token to an ordering. Unknown tokens yield the default ordering.
    fn from_token(token: &str) -> Self;

    /// The token that selects this ordering.
    fn token(self) -> &'static str;
}

/// A queryable collection with deferred execution.
pub trait ListingSource: Sized {
    type Item;
    type Sort: SortOrder;

    /// Narrows the source to records containing `term`. Repeated calls
    /// combine with AND.
    fn filter(self, term: &str) -> Self;

    /// Orders the source. Records with equal keys keep whatever relative
    /// order the underlying store yields.
    fn order_by(self, sort: Self::Sort) -> Self;

    fn count(&self) -> RepositoryResult<usize>;

    /// Loads at most `limit` records after skipping `offset`.
    fn slice(&self, offset: usize, limit: usize) -> RepositoryResult<Vec<Self::Item>>;
}

/// Record types that can be listed from memory through [`MemorySource`].
pub trait ListingRecord: Clone {
    type Sort: SortOrder;

    /// Case-sensitive substring test against the searchable fields.
    fn matches(&self, term: &str) -> bool;

    /// Compares two records by the key and direction of `sort`.
    fn compare(&self, other: &Self, sort: Self::Sort) -> Ordering;
}

/// [`ListingSource`] over a borrowed slice.
///
/// Ordering uses a stable sort, so records with equal keys keep their slice
/// order. Only the records of the requested window are cloned.
pub struct MemorySource<'a, T: ListingRecord> {
    records: &'a [T],
    terms: Vec<String>,
    sort: Option<T::Sort>,
}

impl<'a, T: ListingRecord> MemorySource<'a, T> {
    pub fn new(records: &'a [T]) -> Self {
        Self {
            records,
            terms: Vec::new(),
            sort: None,
        }
    }

    fn matching(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.records
            .iter()
            .filter(|record| self.terms.iter().all(|term| record.matches(term)))
    }
}

impl<T: ListingRecord> ListingSource for MemorySource<'_, T> {
    type Item = T;
    type Sort = T::Sort;

    fn filter(mut self, term: &str) -> Self {
        self.terms.push(term.to_string());
        self
    }

    fn order_by(mut self, sort: Self::Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.matching().count())
    }

    fn slice(&self, offset: usize, limit: usize) -> RepositoryResult<Vec<T>> {
        let mut rows: Vec<&T> = self.matching().collect();
        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| a.compare(b, sort));
        }
        Ok(rows.into_iter().skip(offset).take(limit).cloned().collect())
    }
}

/// Computes one page of `source`.
///
/// The filter is applied first and the total is counted before slicing. The
/// requested page is clamped into range and the sort token is resolved with
/// [`SortOrder::from_token`], so neither a stale page number nor an unknown
/// token is ever an error. Failures of the source itself are returned as-is.
pub fn build_page<S>(
    source: S,
    sort_token: &str,
    filter_text: Option<&str>,
    requested_page: Option<i64>,
    per_page: usize,
) -> RepositoryResult<Paginated<S::Item>>
where
    S: ListingSource,
{
    let per_page = per_page.max(1);

    let filtered = match filter_text.filter(|term| !term.is_empty()) {
        Some(term) => source.filter(term),
        None => source,
    };

    let total = filtered.count()?;
    let total_pages = page_count(total, per_page);
    let page = clamp_page(requested_page, total_pages);

    let ordered = filtered.order_by(S::Sort::from_token(sort_token));
    let items = ordered.slice((page - 1) * per_page, per_page)?;

    Ok(Paginated::new(items, page, total_pages))
}
