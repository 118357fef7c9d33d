use chrono::{Local, TimeZone};
use filetime::FileTime;
use media_archiver::Archiver;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

fn create_media(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

fn set_mtime(path: &Path, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) {
    let datetime = Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
    let mtime = FileTime::from_system_time(SystemTime::from(datetime));
    filetime::set_file_mtime(path, mtime).unwrap();
}

#[test]
fn test_archive_run_integration() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("Raw");
    fs::create_dir_all(source.join("trip")).unwrap();

    create_media(&source, "IMG_0001.jpg", b"photo one");
    create_media(&source.join("trip"), "IMG_0002.heic", b"photo two");
    create_media(&source, "movie.mp4", b"video bytes");
    let unsupported = create_media(&source, "readme.txt", b"not media");

    let archive = temp.path().join("Archive");
    let summary = Archiver::new(&source, &archive).run().unwrap();

    println!("=== Summary ===");
    println!("archived: {}", summary.archived);
    println!("skipped:  {}", summary.skipped);

    assert_eq!(summary.archived, 3);
    assert_eq!(summary.skipped, 0);
    assert!(summary.duplicates.is_empty());

    // Source tree no longer contains the media files
    assert!(!source.join("IMG_0001.jpg").exists());
    assert!(!source.join("trip").join("IMG_0002.heic").exists());
    assert!(!source.join("movie.mp4").exists());

    // Unsupported files are never touched
    assert!(unsupported.exists());

    // Every archived file landed in a YYYY-MM partition
    let partitions: Vec<_> = fs::read_dir(&archive)
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert!(!partitions.is_empty());
    for partition in &partitions {
        let name = partition.file_name().to_string_lossy().into_owned();
        assert_eq!(name.len(), 7, "partition {} should be YYYY-MM", name);
        assert_eq!(&name[4..5], "-");
    }
}

#[test]
fn test_canonical_destination_layout() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("Raw");
    fs::create_dir_all(&source).unwrap();

    // Mixed-case extension, known content, fixed mtime
    let file = create_media(&source, "photo.JPG", b"ABC");
    set_mtime(&file, 2023, 10, 5, 14, 30, 0);

    let archive = temp.path().join("Archive");
    let summary = Archiver::new(&source, &archive).run().unwrap();

    assert_eq!(summary.archived, 1);
    let expected = archive
        .join("2023-10")
        .join("2023-10-05_143000_902fbdd2b1df0c4f70b4a5d23525e932.jpg");
    assert!(
        expected.exists(),
        "expected {} to exist",
        expected.display()
    );
    assert_eq!(fs::read(&expected).unwrap(), b"ABC");
}

#[test]
fn test_identical_files_deduplicate() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("Raw");
    fs::create_dir_all(source.join("copies")).unwrap();

    // Same content, same mtime to the second, same extension
    let first = create_media(&source, "original.jpg", b"identical bytes");
    let second = create_media(&source.join("copies"), "copy.jpg", b"identical bytes");
    set_mtime(&first, 2024, 6, 1, 12, 0, 0);
    set_mtime(&second, 2024, 6, 1, 12, 0, 0);

    let archive = temp.path().join("Archive");
    let summary = Archiver::new(&source, &archive).run().unwrap();

    // First to claim the canonical name wins; the other is reported
    assert_eq!(summary.archived, 1);
    assert_eq!(summary.duplicates.len(), 1);

    let dup = &summary.duplicates[0];
    assert!(dup.original == "original.jpg" || dup.original == "copy.jpg");
    assert!(
        dup.destination.starts_with("Archive"),
        "destination is relative to the archive's parent: {}",
        dup.destination
    );
    assert!(dup.destination.contains("2024-06"));

    // Exactly one file remains in the source tree, untouched
    let remaining = first.exists() as usize + second.exists() as usize;
    assert_eq!(remaining, 1);
}

#[test]
fn test_rerun_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("Raw");
    fs::create_dir_all(&source).unwrap();

    let file = create_media(&source, "holiday.png", b"png-ish content");
    set_mtime(&file, 2022, 3, 14, 9, 26, 53);

    let archive = temp.path().join("Archive");
    let first = Archiver::new(&source, &archive).run().unwrap();
    assert_eq!(first.archived, 1);

    // Second run over the now-empty source moves nothing
    let second = Archiver::new(&source, &archive).run().unwrap();
    assert_eq!(second.archived, 0);
    assert!(second.duplicates.is_empty());

    // Reintroduce the same content with the same mtime: detected as a
    // duplicate against the already-archived copy and left in place
    let reintroduced = create_media(&source, "holiday.png", b"png-ish content");
    set_mtime(&reintroduced, 2022, 3, 14, 9, 26, 53);

    let third = Archiver::new(&source, &archive).run().unwrap();
    assert_eq!(third.archived, 0);
    assert_eq!(third.duplicates.len(), 1);
    assert_eq!(third.duplicates[0].original, "holiday.png");
    assert!(reintroduced.exists());
}

#[test]
fn test_missing_source_never_creates_archive() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("Raw");
    let archive = temp.path().join("Archive");

    let result = Archiver::new(&source, &archive).run();

    assert!(result.is_err());
    assert!(!archive.exists());
}

#[test]
fn test_distinct_content_same_second_both_archive() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("Raw");
    fs::create_dir_all(&source).unwrap();

    // Same mtime and extension but different content: different
    // fingerprints, so both archive into the same partition
    let a = create_media(&source, "a.jpg", b"content A");
    let b = create_media(&source, "b.jpg", b"content B");
    set_mtime(&a, 2023, 10, 5, 14, 30, 0);
    set_mtime(&b, 2023, 10, 5, 14, 30, 0);

    let archive = temp.path().join("Archive");
    let summary = Archiver::new(&source, &archive).run().unwrap();

    assert_eq!(summary.archived, 2);
    assert!(summary.duplicates.is_empty());

    let partition = archive.join("2023-10");
    let archived: Vec<_> = fs::read_dir(&partition)
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(archived.len(), 2);
}
