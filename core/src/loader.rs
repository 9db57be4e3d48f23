use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;
use futures_util::future::try_join_all;
use rand::prelude::*;

use crate::protocol::{CategoriesQuery, CategorySummary, ClueRecord, CluesQuery};
use crate::*;

/// Builds a fresh [`Board`] from a [`TriviaProvider`].
///
/// Picks categories at random from one page of the provider's listing, then
/// picks clues at random from each chosen category. Nothing is published
/// unless every step succeeds.
#[derive(Clone, Debug)]
pub struct BoardLoader<P> {
    provider: P,
    rng: SmallRng,
}

impl<P: TriviaProvider> BoardLoader<P> {
    /// How many category summaries to request as the candidate pool.
    pub const CATEGORY_POOL_SIZE: u32 = 100;

    /// Offsets into the provider's category listing that are known to be populated.
    pub const CATEGORY_OFFSETS: Range<u32> = 4..448;

    pub fn new(provider: P, seed: u64) -> Self {
        Self {
            provider,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub async fn load(&mut self, config: BoardConfig) -> core::result::Result<Board, LoadError> {
        let selected = self.select_categories(config).await?;

        let clue_lists = try_join_all(selected.iter().map(|summary| {
            self.provider.clues(CluesQuery {
                category: summary.id,
            })
        }))
        .await
        .inspect_err(|err| log::warn!("fetching clues failed: {}", err))?;

        let categories = selected
            .into_iter()
            .zip(clue_lists)
            .map(|(summary, records)| {
                self.build_category(summary, records, config)
            })
            .collect::<core::result::Result<Vec<_>, _>>()?;

        Ok(Board::new(categories)?)
    }

    async fn select_categories(
        &mut self,
        config: BoardConfig,
    ) -> core::result::Result<Vec<CategorySummary>, LoadError> {
        let query = CategoriesQuery {
            count: Self::CATEGORY_POOL_SIZE,
            offset: self.rng.random_range(Self::CATEGORY_OFFSETS),
        };
        log::debug!("requesting categories: {:?}", query);

        let pool = self
            .provider
            .categories(query)
            .await
            .inspect_err(|err| log::warn!("fetching categories failed: {}", err))?;

        let questions = u32::from(config.questions);
        let eligible: Vec<_> = pool
            .into_iter()
            .filter(|summary| match summary.clues_count {
                Some(count) if count < questions => {
                    log::debug!(
                        "skipping category {} with {} clues, {} needed",
                        summary.id,
                        count,
                        questions
                    );
                    false
                }
                _ => true,
            })
            .collect();

        let requested: usize = config.categories.into();
        let available = eligible.len();
        let selected = sample(&mut self.rng, eligible, requested).ok_or_else(|| {
            log::warn!("not enough categories: {} of {}", available, requested);
            LoadError::NotEnoughCategories {
                requested,
                available,
            }
        })?;
        log::debug!(
            "selected categories: {:?}",
            selected.iter().map(|summary| summary.id).collect::<Vec<_>>()
        );
        Ok(selected)
    }

    fn build_category(
        &mut self,
        summary: CategorySummary,
        records: Vec<ClueRecord>,
        config: BoardConfig,
    ) -> core::result::Result<Category, LoadError> {
        let title: String = match records.first().and_then(ClueRecord::category_title) {
            Some(title) => title.into(),
            None => summary.title,
        };
        if title.is_empty() {
            return Err(LoadError::MissingTitle {
                category_id: summary.id,
            });
        }

        let requested: usize = config.questions.into();
        let available = records.len();
        let picked = sample(&mut self.rng, records, requested).ok_or_else(|| {
            log::warn!(
                "not enough clues in category {}: {} of {}",
                summary.id,
                available,
                requested
            );
            LoadError::NotEnoughClues {
                category_id: summary.id,
                requested,
                available,
            }
        })?;

        let clues = picked.into_iter().map(Clue::from).collect();
        Ok(Category::new(title, clues))
    }
}

/// Picks `amount` distinct items uniformly at random, in the order they were picked.
///
/// Returns `None` instead of truncating when there are fewer than `amount` items.
fn sample<T>(rng: &mut SmallRng, mut items: Vec<T>, amount: usize) -> Option<Vec<T>> {
    let len = items.len();
    if amount > len {
        return None;
    }
    // partial Fisher-Yates: the first `amount` slots end up holding the sample
    for i in 0..amount {
        let j = rng.random_range(i..len);
        items.swap(i, j);
    }
    items.truncate(amount);
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::CategoryRef;
    use alloc::collections::BTreeSet;
    use alloc::format;
    use alloc::vec;
    use core::cell::RefCell;
    use futures_executor::block_on;

    /// In-memory provider that serves a fixed catalog and records its queries.
    #[derive(Default)]
    struct ScriptedProvider {
        categories: Vec<CategorySummary>,
        clues: Vec<(u64, Vec<ClueRecord>)>,
        fail_categories: Option<ProviderError>,
        fail_clues_for: Option<u64>,
        category_queries: RefCell<Vec<CategoriesQuery>>,
    }

    impl ScriptedProvider {
        fn with_catalog(categories: u64, clues_per_category: usize) -> Self {
            let mut provider = Self::default();
            for id in 1..=categories {
                provider.categories.push(CategorySummary {
                    id,
                    title: format!("summary {id}"),
                    clues_count: Some(clues_per_category as u32),
                });
                let records = (0..clues_per_category)
                    .map(|n| ClueRecord {
                        question: format!("q{id}.{n}"),
                        answer: format!("<i>a{id}.{n}</i>"),
                        category: Some(CategoryRef {
                            title: format!("CATEGORY {id}"),
                        }),
                    })
                    .collect();
                provider.clues.push((id, records));
            }
            provider
        }
    }

    impl TriviaProvider for ScriptedProvider {
        async fn categories(
            &self,
            query: CategoriesQuery,
        ) -> core::result::Result<Vec<CategorySummary>, ProviderError> {
            self.category_queries.borrow_mut().push(query);
            match &self.fail_categories {
                Some(err) => Err(err.clone()),
                None => Ok(self.categories.clone()),
            }
        }

        async fn clues(
            &self,
            query: CluesQuery,
        ) -> core::result::Result<Vec<ClueRecord>, ProviderError> {
            if self.fail_clues_for == Some(query.category) {
                return Err(ProviderError::Status(500));
            }
            Ok(self
                .clues
                .iter()
                .find(|(id, _)| *id == query.category)
                .map(|(_, records)| records.clone())
                .unwrap_or_default())
        }
    }

    fn load(
        provider: &ScriptedProvider,
        config: BoardConfig,
        seed: u64,
    ) -> core::result::Result<Board, LoadError> {
        let mut loader = BoardLoader::new(provider, seed);
        block_on(loader.load(config))
    }

    #[test]
    fn loaded_board_has_requested_shape_and_hidden_clues() {
        let provider = ScriptedProvider::with_catalog(20, 10);
        let config = BoardConfig::default();

        let board = load(&provider, config, 7).unwrap();

        assert_eq!(board.category_count(), 6);
        for category in board.categories() {
            assert_eq!(category.clues().len(), 5);
            for clue in category.clues() {
                assert_eq!(clue.showing(), RevealState::Hidden);
            }
        }
    }

    #[test]
    fn categories_and_clues_are_distinct() {
        let provider = ScriptedProvider::with_catalog(8, 6);

        let board = load(&provider, BoardConfig::new(8, 6), 1).unwrap();

        let titles: BTreeSet<_> = board.categories().iter().map(Category::title).collect();
        assert_eq!(titles.len(), 8);
        for category in board.categories() {
            let questions: BTreeSet<_> = category.clues().iter().map(Clue::question).collect();
            assert_eq!(questions.len(), 6);
        }
    }

    #[test]
    fn clues_stay_with_their_category() {
        let provider = ScriptedProvider::with_catalog(10, 5);

        let board = load(&provider, BoardConfig::new(4, 3), 99).unwrap();

        for category in board.categories() {
            let id = category.title().trim_start_matches("CATEGORY ");
            for clue in category.clues() {
                assert!(clue.question().starts_with(&format!("q{id}.")));
                assert!(clue.answer().starts_with(&format!("a{id}.")));
            }
        }
    }

    #[test]
    fn answers_are_unwrapped_on_load() {
        let provider = ScriptedProvider::with_catalog(3, 3);

        let board = load(&provider, BoardConfig::new(3, 3), 5).unwrap();

        assert!(
            board
                .iter_coords()
                .all(|coords| !board[coords].answer().contains("<i>"))
        );
    }

    #[test]
    fn same_seed_gives_same_board() {
        let provider = ScriptedProvider::with_catalog(30, 12);
        let config = BoardConfig::default();

        assert_eq!(load(&provider, config, 42), load(&provider, config, 42));
    }

    #[test]
    fn category_query_uses_pool_size_and_bounded_offset() {
        let provider = ScriptedProvider::with_catalog(6, 5);

        for seed in 0..20 {
            load(&provider, BoardConfig::default(), seed).unwrap();
        }

        let queries = provider.category_queries.borrow();
        assert_eq!(queries.len(), 20);
        for query in queries.iter() {
            assert_eq!(query.count, 100);
            assert!((4..448).contains(&query.offset));
        }
    }

    #[test]
    fn too_few_categories_fails_instead_of_truncating() {
        let provider = ScriptedProvider::with_catalog(4, 5);

        assert_eq!(
            load(&provider, BoardConfig::default(), 0),
            Err(LoadError::NotEnoughCategories {
                requested: 6,
                available: 4
            })
        );
    }

    #[test]
    fn thin_categories_are_not_candidates() {
        let mut provider = ScriptedProvider::with_catalog(7, 5);
        provider.categories[0].clues_count = Some(2);
        provider.categories[1].clues_count = Some(4);

        assert_eq!(
            load(&provider, BoardConfig::default(), 0),
            Err(LoadError::NotEnoughCategories {
                requested: 6,
                available: 5
            })
        );
    }

    #[test]
    fn too_few_clues_fails_the_whole_load() {
        let mut provider = ScriptedProvider::with_catalog(1, 5);
        provider.categories[0].clues_count = None;
        provider.clues[0].1.truncate(3);

        assert_eq!(
            load(&provider, BoardConfig::new(1, 5), 0),
            Err(LoadError::NotEnoughClues {
                category_id: 1,
                requested: 5,
                available: 3
            })
        );
    }

    #[test]
    fn provider_failures_abort_the_load() {
        let mut provider = ScriptedProvider::with_catalog(6, 5);
        provider.fail_categories = Some(ProviderError::Request("offline".into()));
        assert_eq!(
            load(&provider, BoardConfig::default(), 0),
            Err(ProviderError::Request("offline".into()).into())
        );

        let mut provider = ScriptedProvider::with_catalog(6, 5);
        provider.fail_clues_for = Some(3);
        assert_eq!(
            load(&provider, BoardConfig::default(), 0),
            Err(LoadError::Provider(ProviderError::Status(500)))
        );
    }

    #[test]
    fn title_falls_back_to_summary() {
        let mut provider = ScriptedProvider::with_catalog(1, 2);
        for record in &mut provider.clues[0].1 {
            record.category = None;
        }

        let board = load(&provider, BoardConfig::new(1, 2), 0).unwrap();
        assert_eq!(board.categories()[0].title(), "summary 1");

        provider.categories[0].title.clear();
        assert_eq!(
            load(&provider, BoardConfig::new(1, 2), 0),
            Err(LoadError::MissingTitle { category_id: 1 })
        );
    }

    #[test]
    fn empty_board_config_is_rejected() {
        let provider = ScriptedProvider::with_catalog(3, 3);

        assert_eq!(
            load(&provider, BoardConfig::new_unchecked(0, 3), 0),
            Err(LoadError::Board(BoardError::InvalidBoardShape))
        );
    }

    #[test]
    fn sample_rejects_oversized_requests() {
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(sample(&mut rng, vec![1, 2, 3], 4), None);
        assert_eq!(sample(&mut rng, Vec::<u8>::new(), 0), Some(vec![]));

        let mut picked = sample(&mut rng, vec![1, 2, 3], 3).unwrap();
        picked.sort();
        assert_eq!(picked, vec![1, 2, 3]);
    }
}
