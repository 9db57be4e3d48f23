use alloc::vec::Vec;
use core::future::Future;

use crate::ProviderError;
use crate::protocol::{CategoriesQuery, CategorySummary, ClueRecord, CluesQuery};

/// Remote source of categories and clues.
///
/// The board loader only needs these two reads; transport, authentication and
/// rate limiting are left to the implementation.
pub trait TriviaProvider {
    /// Lists category summaries, `query.count` at most, starting at `query.offset`.
    fn categories(
        &self,
        query: CategoriesQuery,
    ) -> impl Future<Output = Result<Vec<CategorySummary>, ProviderError>>;

    /// Lists every clue the provider holds for one category.
    fn clues(
        &self,
        query: CluesQuery,
    ) -> impl Future<Output = Result<Vec<ClueRecord>, ProviderError>>;
}

impl<P: TriviaProvider + ?Sized> TriviaProvider for &P {
    fn categories(
        &self,
        query: CategoriesQuery,
    ) -> impl Future<Output = Result<Vec<CategorySummary>, ProviderError>> {
        (**self).categories(query)
    }

    fn clues(
        &self,
        query: CluesQuery,
    ) -> impl Future<Output = Result<Vec<ClueRecord>, ProviderError>> {
        (**self).clues(query)
    }
}
