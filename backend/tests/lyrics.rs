use bloom_backend::lyrics::LyricCatalog;

fn catalog_with_two_songs() -> (tempfile::TempDir, LyricCatalog) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Song 1.txt"), "one\ntwo\n").unwrap();
    std::fs::write(dir.path().join("Song 2.txt"), "three\r\nfour\r\nfive").unwrap();
    let catalog = LyricCatalog::new(
        dir.path(),
        vec!["Song 1.txt".to_string(), "Song 2.txt".to_string()],
    );
    (dir, catalog)
}

#[tokio::test]
async fn loads_lines_in_order() {
    let (_dir, catalog) = catalog_with_two_songs();
    let sheet = catalog.load(0).await.unwrap();
    assert_eq!(sheet.index, 0);
    assert_eq!(sheet.name, "Song 1.txt");
    assert_eq!(sheet.lines, vec!["one", "two"]);

    let sheet = catalog.load(1).await.unwrap();
    assert_eq!(sheet.lines, vec!["three", "four", "five"]);
}

#[tokio::test]
async fn index_wraps_around() {
    let (_dir, catalog) = catalog_with_two_songs();
    let sheet = catalog.load(5).await.unwrap();
    assert_eq!(sheet.index, 1);
    assert_eq!(sheet.name, "Song 2.txt");
    assert_eq!(catalog.resource(2), Some((0, "Song 1.txt")));
}

#[tokio::test]
async fn missing_file_gives_an_empty_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = LyricCatalog::new(dir.path(), vec!["gone.txt".to_string()]);
    let sheet = catalog.load(0).await.unwrap();
    assert_eq!(sheet.name, "gone.txt");
    assert!(sheet.lines.is_empty());
}

#[tokio::test]
async fn empty_catalog_has_nothing_to_load() {
    let catalog = LyricCatalog::new("/nowhere", Vec::new());
    assert!(catalog.is_empty());
    assert_eq!(catalog.resource(0), None);
    assert_eq!(catalog.load(0).await, None);
}
