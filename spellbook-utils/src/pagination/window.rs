//! Pure page-window math over a static entry list.

/// A bounded view of one page of a full entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow<'a> {
    /// Entries visible on this page, in original list order.
    pub items: &'a [String],
    /// Zero-based page index this window was computed for.
    pub page_index: usize,
    /// Maximum number of entries per page.
    pub page_size: usize,
    /// Total page count for the full list, always at least one.
    pub page_count: usize,
}

/// Index of the page containing the final element.
///
/// Floor semantics: `(len - 1) / page_size`, `0` for an empty list. This is
/// the single definition of the last-page boundary; callers clamp against it.
pub fn max_page_index(total_items: usize, page_size: usize) -> usize {
    if total_items == 0 {
        return 0;
    }

    (total_items - 1) / page_size.max(1)
}

/// Number of pages for the list. An empty list still renders one empty page.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    max_page_index(total_items, page_size) + 1
}

/// Slice the window for `page_index` out of `full_list`.
///
/// Does not clamp `page_index`; a past-the-end index yields an empty window.
pub fn compute_window(full_list: &[String], page_index: usize, page_size: usize) -> ListWindow<'_> {
    let safe_page_size = page_size.max(1);
    let start = page_index
        .saturating_mul(safe_page_size)
        .min(full_list.len());
    let end = start.saturating_add(safe_page_size).min(full_list.len());

    ListWindow {
        items: &full_list[start..end],
        page_index,
        page_size: safe_page_size,
        page_count: page_count(full_list.len(), safe_page_size),
    }
}
