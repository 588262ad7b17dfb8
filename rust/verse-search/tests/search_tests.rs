use verse_search::{PayloadRadix, VerseSearch, VerseSearchParams, reference};
use verse_testkit::{
    data_gen::{encode_payload, generate_postings_map},
    dirs::read_sample_index,
};

fn sample_engine() -> VerseSearch {
    let mut search = VerseSearch::with_params(VerseSearchParams {
        radix: Some(PayloadRadix::Base36),
    });
    for table in ["AllEng", "KJV-like", "Literal", "KJV", "ESV"] {
        let payload = read_sample_index(table).unwrap();
        search.load(&payload, table).unwrap();
    }
    search
}

#[test]
fn test_sample_queries() {
    let search = sample_engine();
    for version in ["KJV", "ESV"] {
        assert_eq!(
            search.search("Jesus wept", version, None),
            ["John 11:35", "Mark 8:27", "Titus 1:1"],
            "{version}"
        );
    }
    assert_eq!(search.search("elect", "KJV", None), ["Romans 8:33", "Titus 1:1"]);
    assert_eq!(search.search("scorneth", "KJV", None), ["Proverbs 19:28"]);
    assert!(search.search("scorneth", "ESV", None).is_empty());
    assert!(
        search
            .search("heaven", "KJV", None)
            .contains(&"Genesis 1:1".to_string())
    );
    // The KJV-like family table is not consulted for ESV.
    assert!(search.search("moved upon", "ESV", None).is_empty());
}

#[test]
fn test_umbrella_only_versions() {
    // AKJV has no table of its own loaded, but shares AllEng and KJV-like with KJV.
    let search = sample_engine();
    assert_eq!(
        search.search("moved upon the face", "AKJV", Some(1)),
        ["Genesis 1:2"]
    );
    assert!(search.search("scorneth", "AKJV", None).is_empty());
}

#[test]
fn test_query_without_terms() {
    let search = sample_engine();
    assert!(search.search("", "KJV", None).is_empty());
    assert!(search.search("3:16 -- !!", "KJV", None).is_empty());
    assert!(search.search("é", "KJV", None).is_empty());
}

#[test]
fn test_load_twice_keeps_entry_count() {
    let mut search = sample_engine();
    let stats = search.table_stats();
    let size = search.index_size();
    let payload = read_sample_index("KJV").unwrap();
    search.load(&payload, "KJV").unwrap();
    assert_eq!(search.table_stats(), stats);
    assert_eq!(search.index_size(), size);
}

#[test]
fn test_results_are_ranked_against_generated_index() {
    let map = generate_postings_map(90210, 300, 20);
    let mut search = VerseSearch::new();
    search
        .load(&encode_payload(&map, PayloadRadix::Decimal.radix()), "WEB")
        .unwrap();

    fastrand::seed(90210);
    let terms = map.keys().collect::<Vec<_>>();
    for _ in 0..50 {
        let picked = (0..fastrand::usize(1..4))
            .map(|_| terms[fastrand::usize(..terms.len())].as_str())
            .collect::<Vec<_>>();
        let query = picked.join(" ");
        let mut distinct = picked.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let hits = |loc: verse_common::Location| {
            distinct.iter().filter(|t| map[**t].contains(&loc)).count()
        };
        let ranked = search.search_locations(&query, "WEB", None);
        let exact = ranked.iter().take_while(|&&l| hits(l) == distinct.len()).count();
        assert!(ranked[exact..].iter().all(|&l| hits(l) < distinct.len()), "{query}");
        assert!(
            ranked[exact..].windows(2).all(|w| hits(w[0]) >= hits(w[1])),
            "{query}"
        );

        let mut expected = distinct
            .iter()
            .flat_map(|t| map[*t].iter().copied())
            .collect::<Vec<_>>();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(ranked.len(), expected.len(), "{query}");

        let rendered = search.search(&query, "WEB", Some(5));
        assert_eq!(rendered.len(), ranked.len().min(5));
        for (text, &loc) in rendered.iter().zip(&ranked) {
            assert_eq!(*text, reference::display(loc).unwrap());
        }
    }
}

#[test]
fn test_unload_then_search() {
    let mut search = sample_engine();
    search.unload("AllEng").unwrap();
    assert_eq!(search.search("Jesus wept", "KJV", None), Vec::<String>::new());
    assert_eq!(search.search("scorneth", "KJV", None), ["Proverbs 19:28"]);
}
