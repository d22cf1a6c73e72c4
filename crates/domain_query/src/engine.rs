//! View derivation

use tracing::debug;

use core_kernel::Claim;

use crate::error::QueryError;
use crate::spec::{FilterSpec, PageSpec, SortSpec};
use crate::view::View;

/// Derives one page of the filtered, sorted claim sequence
///
/// Filtering is a full linear scan; the dataset is small and static, so no
/// index is maintained. Sorting is stable, ties keep source document order,
/// which makes pagination deterministic across repeated calls with the same
/// specs.
///
/// # Errors
///
/// - [`QueryError::InvalidPageSize`] when `page.size` is zero.
/// - [`QueryError::InvalidPage`] when `page.number` is outside
///   `1..=total_pages`. An empty match set still has one valid, empty page.
pub fn query(
    claims: &[Claim],
    filter: &FilterSpec,
    sort: Option<&SortSpec>,
    page: &PageSpec,
) -> Result<View, QueryError> {
    if page.size == 0 {
        return Err(QueryError::InvalidPageSize);
    }

    let mut matched: Vec<&Claim> = claims.iter().filter(|c| filter.matches(c)).collect();
    if let Some(sort) = sort {
        matched.sort_by(|a, b| sort.compare(a, b));
    }

    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page.size).max(1);
    if page.number < 1 || page.number > total_pages {
        return Err(QueryError::InvalidPage {
            requested: page.number,
            total_pages,
        });
    }

    debug!(
        total_matched,
        total_pages,
        page = page.number,
        "derived claim view"
    );

    let start = (page.number - 1) * page.size;
    let claims = matched
        .into_iter()
        .skip(start)
        .take(page.size)
        .cloned()
        .collect();

    Ok(View {
        claims,
        total_matched,
        total_pages,
        page_number: page.number,
    })
}
