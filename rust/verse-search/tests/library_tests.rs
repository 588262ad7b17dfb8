use verse_search::{IndexLibrary, IndexLibraryParams, registry};
use verse_testkit::dirs::{create_sample_data_dir, write_index_file};

#[test]
fn test_compressed_and_plain_directories_agree() {
    let plain = create_sample_data_dir(false).unwrap();
    let compressed = create_sample_data_dir(true).unwrap();
    let mut a = IndexLibrary::open(IndexLibraryParams::new(plain.path())).unwrap();
    let mut b = IndexLibrary::open(IndexLibraryParams::new(compressed.path())).unwrap();

    for (query, version) in [("Jesus wept", "KJV"), ("elect", "ESV"), ("the earth", "KJV")] {
        let expected = a.search(query, version, None).unwrap();
        assert!(!expected.is_empty(), "{query}");
        assert_eq!(b.search(query, version, None).unwrap(), expected, "{query}");
    }
    assert_eq!(a.loaded(), ["ESV", "KJV"]);
    assert_eq!(a.index_size(), b.index_size());
}

#[test]
fn test_preload_and_default_cap() {
    let dir = create_sample_data_dir(true).unwrap();
    let mut library = IndexLibrary::open(IndexLibraryParams {
        preload: vec!["ESV".to_string()],
        default_max_results: Some(2),
        ..IndexLibraryParams::new(dir.path())
    })
    .unwrap();
    assert_eq!(library.loaded(), ["ESV"]);
    assert_eq!(
        library.search("Jesus wept", "ESV", None).unwrap(),
        ["John 11:35", "Mark 8:27"]
    );
    assert_eq!(library.search("Jesus wept", "ESV", Some(10)).unwrap().len(), 3);
    assert!(library.search("wept", "NotAVersion", None).unwrap().is_empty());
}

#[test]
fn test_load_all_and_unload() {
    let dir = tempfile::TempDir::new().unwrap();
    for id in registry::TableId::all() {
        write_index_file(dir.path(), id.name(), "{}").unwrap();
    }
    write_index_file(dir.path(), "RV1960", r#"{"jesus":[plviz],"lloro":[plviz]}"#).unwrap();

    let mut library = IndexLibrary::open(IndexLibraryParams::new(dir.path())).unwrap();
    library.load_all().unwrap();
    assert_eq!(library.loaded().len(), library.versions().len());
    assert_eq!(
        library.search("Jesús lloró", "RV1960", None).unwrap(),
        Vec::<String>::new()
    );
    assert_eq!(library.search("Jesus lloro", "RV1960", None).unwrap(), ["John 11:35"]);

    library.unload("RV1960").unwrap();
    assert!(!library.is_loaded("RV1960"));
    assert!(library.unload("RV1960").unwrap_err().is_invalid_version());
    // Searching reloads it from disk.
    assert_eq!(library.search("lloro", "RV1960", None).unwrap(), ["John 11:35"]);
}
