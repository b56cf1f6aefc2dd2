use camlink_core::logbook::LogBook;

#[test]
fn new_book_carries_the_header_line() {
    let book = LogBook::new();
    assert_eq!(book.len(), 1);
    assert_eq!(book.contents(), "Log output:");
}

#[test]
fn append_preserves_insertion_order() {
    let book = LogBook::new();
    book.append("a");
    book.append("b");

    let contents = book.contents();
    let a = contents.find("a").expect("'a' should be present");
    let b = contents.find("b").expect("'b' should be present");
    assert!(a < b, "'a' must appear before 'b'");

    let entries = book.entries();
    assert_eq!(entries.len(), 3);
    assert!(entries.windows(2).all(|w| w[0].sequence < w[1].sequence));
}

#[test]
fn contents_is_idempotent() {
    let book = LogBook::new();
    book.append("once");
    assert_eq!(book.contents(), book.contents());
    assert_eq!(book.len(), 2);
}

#[test]
fn save_to_snapshots_contents_at_call_time() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("session.log");

    let book = LogBook::new();
    book.append("first attempt");
    book.save_to(&path)?;

    let saved_at_call_time = book.contents();
    book.append("second attempt");

    let on_disk = std::fs::read_to_string(&path)?;
    assert_eq!(on_disk, saved_at_call_time);
    assert!(!on_disk.contains("second attempt"));
    Ok(())
}

#[test]
fn save_to_unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let book = LogBook::new();
    // A directory is not a writable file destination.
    assert!(book.save_to(dir.path()).is_err());
}

#[tokio::test]
async fn concurrent_appends_all_land() {
    let book = LogBook::new();
    let mut handles = Vec::new();
    for task in 0..16 {
        let handle = book.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..10 {
                handle.append(&format!("task {} line {}", task, i));
            }
        }));
    }
    for h in handles {
        h.await.expect("append task should not panic");
    }

    assert_eq!(book.len(), 1 + 16 * 10);
    let entries = book.entries();
    assert!(entries.windows(2).all(|w| w[0].sequence + 1 == w[1].sequence));
}

#[test]
fn capped_book_evicts_oldest_first() {
    let book = LogBook::with_max_entries(3);
    for msg in ["a", "b", "c", "d", "e"] {
        book.append(msg);
    }

    assert_eq!(book.len(), 3);
    let entries = book.entries();
    assert_eq!(entries[0].text, "c");
    assert_eq!(entries[2].text, "e");
    // Sequence numbers keep counting across evictions.
    assert_eq!(entries[0].sequence, 3);
    assert_eq!(entries[2].sequence, 5);
}
