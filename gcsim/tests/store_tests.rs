use gcsim::{BodyStore, Color, NVec3, SimError, Trail, TRAIL_CAPACITY};

fn store_with(n: usize) -> BodyStore {
    let mut store = BodyStore::new();
    for i in 0..n {
        store
            .add(NVec3::new(i as f64, 0.0, 0.0), NVec3::zeros(), 1.0, 0.5, Color(0x00ff00))
            .unwrap();
    }
    store
}

#[test]
fn add_keeps_insertion_order_and_distinct_ids() {
    let store = store_with(3);
    let snap = store.snapshot();

    assert_eq!(snap.len(), 3);
    assert_ne!(snap[0].id, snap[1].id);
    assert_ne!(snap[1].id, snap[2].id);
    for (i, b) in snap.iter().enumerate() {
        assert_eq!(b.x.x, i as f64);
        assert!(b.trail.is_empty());
        assert_eq!(b.color, Color(0x00ff00));
    }
}

#[test]
fn invalid_bodies_are_rejected() {
    let mut store = store_with(2);

    let cases = [(0.0, 1.0), (-1.0, 1.0), (1.0, 0.0), (1.0, -0.5), (f64::NAN, 1.0), (1.0, f64::INFINITY)];
    for (m, r) in cases {
        let err = store.add(NVec3::zeros(), NVec3::zeros(), m, r, Color::default());
        assert!(matches!(err, Err(SimError::InvalidBody { .. })), "accepted m = {m}, r = {r}");
    }

    assert_eq!(store.len(), 2);
    assert!(store.snapshot().iter().all(|b| b.m > 0.0 && b.radius > 0.0));
}

#[test]
fn remove_by_id_and_ignore_unknown() {
    let mut store = store_with(3);
    let ids: Vec<_> = store.snapshot().iter().map(|b| b.id).collect();

    let removed = store.remove(ids[1]).expect("present");
    assert_eq!(removed.id, ids[1]);
    assert_eq!(store.len(), 2);
    assert!(!store.contains(ids[1]));

    // second removal is a no-op
    assert!(store.remove(ids[1]).is_none());
    assert_eq!(store.len(), 2);

    // other handles still resolve to the same bodies
    assert_eq!(store.get(ids[2]).map(|b| b.x.x), Some(2.0));
}

#[test]
fn ids_are_not_reused() {
    let mut store = store_with(2);
    let old: Vec<_> = store.snapshot().iter().map(|b| b.id).collect();

    store.clear();
    assert!(store.is_empty());

    let fresh = store.add(NVec3::zeros(), NVec3::zeros(), 1.0, 1.0, Color::default()).unwrap();
    assert!(!old.contains(&fresh));
}

#[test]
fn snapshot_survives_replace() {
    let mut store = store_with(2);
    let before = store.snapshot();

    let mut next = before.to_vec();
    for b in &mut next {
        b.x += NVec3::new(0.0, 1.0, 0.0);
    }
    store.replace(next);

    assert_eq!(before[0].x.y, 0.0);
    assert_eq!(store.snapshot()[0].x.y, 1.0);
}

#[test]
fn trail_push_is_bounded() {
    let mut trail = Trail::new();

    for i in 0..(TRAIL_CAPACITY + 100) {
        trail.push(NVec3::new(i as f64, 0.0, 0.0));
    }

    let samples = trail.to_vec();
    assert_eq!(samples.len(), TRAIL_CAPACITY);
    assert_eq!(samples[0].x, 100.0);
    assert_eq!(samples[TRAIL_CAPACITY - 1].x, (TRAIL_CAPACITY + 99) as f64);
}

#[test]
fn trail_evicts_oldest_first() {
    let mut trail = Trail::new();
    for i in 0..3 {
        trail.push(NVec3::new(i as f64, 0.0, 0.0));
    }
    assert_eq!(trail.iter().map(|x| x.x).collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);

    trail.clear();
    assert!(trail.is_empty());
}
