use news_lexicon::constants::{HEADLINE_COLUMN, TOKENS_COLUMN, TOKENS_JOINED_COLUMN};
use news_lexicon::{
    Cell, Column, CorpusPreprocessor, Dataset, Error, FrequencyAnalyzer, FrequencyTable,
    NgramRange, Normalizer, StopwordSet,
};
use test_utils::{assert_missing_column, headline_dataset, ranked, text_dataset};

#[cfg(test)]
mod top_keywords_tests {
    use super::*;

    fn preprocess(headlines: &[&str], stopwords: &[&str]) -> Dataset {
        let normalizer = Normalizer::with_stopwords(StopwordSet::from_words(stopwords), true);

        CorpusPreprocessor::new(normalizer)
            .apply(&headline_dataset(headlines), HEADLINE_COLUMN)
            .expect("Failed to preprocess headlines")
    }

    #[test]
    fn test_top_keywords_ranks_by_count_then_term() {
        let dataset = preprocess(&["the cat sat", "the dog sat"], &["the"]);

        let keywords = FrequencyAnalyzer::default()
            .top_keywords(&dataset, TOKENS_COLUMN, 10)
            .unwrap();

        assert_eq!(keywords, ranked(&[("sat", 2), ("cat", 1), ("dog", 1)]));
    }

    #[test]
    fn test_top_keywords_accepts_raw_strings() {
        let dataset = text_dataset("text", &["cat sat", "dog  sat\tdown"]);

        let keywords = FrequencyAnalyzer::default()
            .top_keywords(&dataset, "text", 2)
            .unwrap();

        assert_eq!(keywords, ranked(&[("sat", 2), ("cat", 1)]));
    }

    #[test]
    fn test_top_keywords_accepts_mixed_cells() {
        let dataset = Dataset::from_columns(vec![Column::new(
            "text",
            vec![
                Cell::Tokens(vec!["apple".to_string(), "rally".to_string()]),
                Cell::Text("apple earnings".to_string()),
                Cell::Null,
                Cell::Integer(42),
            ],
        )])
        .unwrap();

        let keywords = FrequencyAnalyzer::default()
            .top_keywords(&dataset, "text", 10)
            .unwrap();

        assert_eq!(
            keywords,
            ranked(&[("apple", 2), ("earnings", 1), ("rally", 1)])
        );
    }

    #[test]
    fn test_top_keywords_returns_whole_vocabulary_when_n_is_large() {
        let dataset = preprocess(&["the cat sat", "the dog sat"], &["the"]);

        let keywords = FrequencyAnalyzer::default()
            .top_keywords(&dataset, TOKENS_COLUMN, 1000)
            .unwrap();

        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_top_keywords_zero_n_is_empty() {
        let dataset = preprocess(&["the cat sat"], &[]);

        let keywords = FrequencyAnalyzer::default()
            .top_keywords(&dataset, TOKENS_COLUMN, 0)
            .unwrap();

        assert!(keywords.is_empty());
    }

    #[test]
    fn test_top_keywords_missing_column() {
        let dataset = headline_dataset(&["the cat sat"]);

        let result = FrequencyAnalyzer::default().top_keywords(&dataset, TOKENS_COLUMN, 5);

        assert_missing_column(result, TOKENS_COLUMN);
    }

    #[test]
    fn test_missing_column_lists_available_columns() {
        let dataset = headline_dataset(&["the cat sat"]);

        let error = FrequencyAnalyzer::default()
            .top_keywords(&dataset, "body", 5)
            .unwrap_err();

        assert!(error.to_string().contains("body"));
        assert!(error.to_string().contains(HEADLINE_COLUMN));
    }
}

#[cfg(test)]
mod top_ngrams_tests {
    use super::*;

    fn bigrams() -> NgramRange {
        NgramRange::new(2, 2).unwrap()
    }

    #[test]
    fn test_top_bigrams_break_ties_lexically() {
        let dataset = text_dataset("text", &["new york times", "new york post"]);

        let ngrams = FrequencyAnalyzer::default()
            .top_ngrams(&dataset, "text", 10, bigrams(), &StopwordSet::empty())
            .unwrap();

        assert_eq!(
            ngrams,
            ranked(&[("new york", 2), ("york post", 1), ("york times", 1)])
        );
    }

    #[test]
    fn test_ngrams_across_window_lengths_do_not_merge() {
        let dataset = text_dataset("text", &["new york times"]);

        let ngrams = FrequencyAnalyzer::default()
            .top_ngrams(
                &dataset,
                "text",
                10,
                NgramRange::new(1, 3).unwrap(),
                &StopwordSet::empty(),
            )
            .unwrap();

        assert_eq!(
            ngrams,
            ranked(&[
                ("new", 1),
                ("new york", 1),
                ("new york times", 1),
                ("times", 1),
                ("york", 1),
                ("york times", 1)
            ])
        );
    }

    #[test]
    fn test_ngrams_do_not_cross_rows() {
        let dataset = text_dataset("text", &["alpha beta", "gamma delta"]);

        let table = FrequencyAnalyzer::default()
            .ngram_table(&dataset, "text", bigrams(), &StopwordSet::empty())
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("beta gamma"), 0);
    }

    #[test]
    fn test_ngrams_drop_stop_words_before_windowing() {
        let dataset = text_dataset("text", &["bank of america rallies"]);

        let ngrams = FrequencyAnalyzer::default()
            .top_ngrams(
                &dataset,
                "text",
                10,
                bigrams(),
                &StopwordSet::from_words(["of"]),
            )
            .unwrap();

        assert_eq!(
            ngrams,
            ranked(&[("america rallies", 1), ("bank america", 1)])
        );
    }

    #[test]
    fn test_ngrams_from_token_sequences() {
        let normalizer = Normalizer::with_stopwords(StopwordSet::empty(), true);
        let dataset = CorpusPreprocessor::new(normalizer)
            .apply(
                &headline_dataset(&["New York Times", "New-York Post"]),
                HEADLINE_COLUMN,
            )
            .unwrap();

        let analyzer = FrequencyAnalyzer::default();
        let from_tokens = analyzer
            .top_ngrams(&dataset, TOKENS_COLUMN, 10, bigrams(), &StopwordSet::empty())
            .unwrap();
        let from_joined = analyzer
            .top_ngrams(
                &dataset,
                TOKENS_JOINED_COLUMN,
                10,
                bigrams(),
                &StopwordSet::empty(),
            )
            .unwrap();

        assert_eq!(from_tokens, from_joined);
        assert_eq!(
            from_tokens,
            ranked(&[("new york", 1), ("newyork post", 1), ("york times", 1)])
        );
    }

    #[test]
    fn test_short_rows_produce_no_ngrams() {
        let dataset = text_dataset("text", &["solo", ""]);

        let ngrams = FrequencyAnalyzer::default()
            .top_ngrams(&dataset, "text", 10, bigrams(), &StopwordSet::empty())
            .unwrap();

        assert!(ngrams.is_empty());
    }

    #[test]
    fn test_invalid_ngram_ranges() {
        assert!(matches!(
            NgramRange::new(3, 2),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            NgramRange::new(0, 2),
            Err(Error::InvalidArgument(_))
        ));

        let dataset = text_dataset("text", &["new york times"]);
        let result = FrequencyAnalyzer::default().top_ngrams(
            &dataset,
            "text",
            10,
            NgramRange { min_n: 2, max_n: 1 },
            &StopwordSet::empty(),
        );

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_top_ngrams_missing_column() {
        let dataset = text_dataset("text", &["new york times"]);

        let result = FrequencyAnalyzer::default().top_ngrams(
            &dataset,
            "headline",
            10,
            bigrams(),
            &StopwordSet::empty(),
        );

        assert_missing_column(result, "headline");
    }
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;

    const HEADLINES: &[&str] = &[
        "Stocks That Hit 52-Week Highs On Friday",
        "Stocks That Hit 52-Week Highs On Wednesday",
        "71 Biggest Movers From Friday",
        "46 Stocks Moving In Friday's Mid-Day Session",
        "UBS Maintains Neutral on Agilent Technologies, Raises Price Target to $87",
        "CFRA Maintains Hold on Agilent Technologies, Lowers Price Target to $85",
        "Wells Fargo Maintains Overweight on Agilent Technologies",
    ];

    #[test]
    fn test_merged_partitions_equal_full_corpus() {
        let analyzer = FrequencyAnalyzer::sequential();

        let full = analyzer
            .keyword_table(&text_dataset("text", HEADLINES), "text")
            .unwrap();

        let (left, right) = HEADLINES.split_at(3);
        let left_table = analyzer
            .keyword_table(&text_dataset("text", left), "text")
            .unwrap();
        let right_table = analyzer
            .keyword_table(&text_dataset("text", right), "text")
            .unwrap();

        assert_eq!(left_table.clone().merge(right_table.clone()), full);
        assert_eq!(right_table.merge(left_table), full);
    }

    #[test]
    fn test_parallel_and_sequential_passes_agree() {
        let headlines: Vec<&str> = HEADLINES.iter().cycle().take(5_000).copied().collect();
        let dataset = text_dataset("text", &headlines);
        let range = NgramRange::new(1, 3).unwrap();
        let stopwords = StopwordSet::for_language("english").unwrap();

        let parallel = FrequencyAnalyzer { parallel: true };
        let sequential = FrequencyAnalyzer::sequential();

        assert_eq!(
            parallel.keyword_table(&dataset, "text").unwrap(),
            sequential.keyword_table(&dataset, "text").unwrap()
        );
        assert_eq!(
            parallel
                .ngram_table(&dataset, "text", range, &stopwords)
                .unwrap(),
            sequential
                .ngram_table(&dataset, "text", range, &stopwords)
                .unwrap()
        );
        assert_eq!(
            parallel.top_ngrams(&dataset, "text", 25, range, &stopwords).unwrap(),
            sequential.top_ngrams(&dataset, "text", 25, range, &stopwords).unwrap()
        );
    }

    #[test]
    fn test_frequency_table_counts() {
        let mut table = FrequencyTable::from_terms(["apple", "apple", "tesla"]);
        table.add_count("nvidia", 3);
        table.add("tesla");

        assert_eq!(table.get("apple"), 2);
        assert_eq!(table.get("tesla"), 2);
        assert_eq!(table.get("meta"), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 7);
        assert_eq!(
            table.ranked(2),
            ranked(&[("nvidia", 3), ("apple", 2)])
        );
    }
}
