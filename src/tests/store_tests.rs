use super::*;

#[test]
fn memory_store_sets_gets_and_clears() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.get(), None);

    store.set("a.b.c");
    assert_eq!(store.get().as_deref(), Some("a.b.c"));

    store.set("d.e.f");
    assert_eq!(store.get().as_deref(), Some("d.e.f"));

    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn new_records_expire_one_day_out_and_are_secure() {
    let now = OffsetDateTime::now_utc();
    let record = new_record("t", now);
    let expires_at = OffsetDateTime::parse(&record.expires_at, &Rfc3339).unwrap();
    assert_eq!((expires_at - now).whole_hours(), 24);
    assert!(record.secure);
    assert!(record_is_live(&record, now));
    assert!(!record_is_live(&record, now + Duration::days(2)));
}

#[test]
fn file_store_round_trips_through_session_file() -> Result<()> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let store = FileTokenStore::new(dir.path());

    assert_eq!(store.get(), None);
    store.set("x.y.z");
    assert!(store.path().exists());
    assert_eq!(store.get().as_deref(), Some("x.y.z"));

    // A second handle on the same directory sees the same session.
    let other = FileTokenStore::new(dir.path());
    assert_eq!(other.get().as_deref(), Some("x.y.z"));

    other.clear();
    assert_eq!(store.get(), None);
    assert!(!store.path().exists());
    Ok(())
}

#[test]
fn file_store_drops_expired_records() -> Result<()> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let store = FileTokenStore::new(dir.path());
    let stale = new_record("old.token.sig", OffsetDateTime::now_utc() - Duration::days(3));
    store.write_record(&stale)?;

    assert_eq!(store.get(), None);
    assert!(!store.path().exists());
    Ok(())
}

#[test]
fn file_store_treats_corrupt_file_as_absent() -> Result<()> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let store = FileTokenStore::new(dir.path());
    fs::write(store.path(), b"not json").context("write corrupt session")?;
    assert_eq!(store.get(), None);
    Ok(())
}

#[test]
fn clearing_an_empty_store_is_harmless() -> Result<()> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let store = FileTokenStore::new(&dir.path().join("never-created"));
    store.clear();
    assert_eq!(store.get(), None);
    Ok(())
}
