use verse_hash_index::{HashIndex, MAX_LOAD_FACTOR};
use verse_testkit::{
    data_gen::{encode_payload, generate_postings_map},
    dirs::read_sample_index,
};
use verse_text_index::{PayloadRadix, load_payload};

#[test]
fn test_generated_payload_loads_in_both_radixes() {
    let map = generate_postings_map(2985745485, 2000, 12);
    for radix in [PayloadRadix::Decimal, PayloadRadix::Base36] {
        let payload = encode_payload(&map, radix.radix());
        let mut table = HashIndex::new();
        let report = load_payload(&payload, radix, &mut table).unwrap();

        assert!(report.is_complete(), "{radix}: {:?}", report.malformed);
        assert_eq!(report.terms, map.len());
        assert_eq!(report.postings, map.values().map(Vec::len).sum::<usize>());
        assert_eq!(table.len(), map.len());
        assert!(table.load_factor() <= MAX_LOAD_FACTOR);
        for (term, postings) in &map {
            assert_eq!(table.get(term), Some(&postings[..]), "{radix}: {term}");
        }
    }
}

#[test]
fn test_truncated_payload_keeps_prefix() {
    let map = generate_postings_map(7, 200, 6);
    let payload = encode_payload(&map, 36);
    let cut = &payload[..payload.len() / 2];

    let mut table = HashIndex::new();
    let report = load_payload(cut, PayloadRadix::Base36, &mut table).unwrap();
    assert!(report.terms > 0 && report.terms < map.len());
    assert_eq!(table.len(), report.terms);

    // Every term that made it in carries its full postings list.
    for entry in table.iter() {
        assert_eq!(entry.postings(), &map[entry.key().as_str()][..]);
    }
}

#[test]
fn test_sample_index_files_decode() {
    for name in ["AllEng", "KJV-like", "KJV", "ESV", "Literal"] {
        let payload = read_sample_index(name).unwrap();
        let mut table = HashIndex::new();
        let report = load_payload(&payload, PayloadRadix::Base36, &mut table).unwrap();
        assert!(report.is_complete(), "{name}: {:?}", report.malformed);
        assert_eq!(table.len(), report.terms, "{name}");
    }
}
