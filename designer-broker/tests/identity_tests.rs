use designer_broker::{IdentityManager, Object, ObjectId};
use std::sync::Arc;

// ── Allocation and resolution ────────────────────────────────────

#[test]
fn first_id_is_one() {
    let identity = IdentityManager::new();
    assert_eq!(identity.peek_next_id(), ObjectId::new(1));

    let object = identity.register(Object::new("View"));
    assert_eq!(object.id(), ObjectId::new(1));
    assert!(object.is_registered());
    assert_eq!(identity.peek_next_id(), ObjectId::new(2));
}

#[test]
fn ids_are_never_reused() {
    let identity = IdentityManager::new();
    let first = identity.register(Object::new("View"));
    let first_id = first.id();
    assert!(identity.unregister(&first));
    drop(first);

    let second = identity.register(Object::new("View"));
    assert_ne!(second.id(), first_id);
    assert_eq!(second.id(), ObjectId::new(2));
}

#[test]
fn resolve_returns_same_allocation() {
    let identity = IdentityManager::new();
    let object = identity.register(Object::new("View"));
    let resolved = identity.resolve(object.id()).unwrap();
    assert!(Arc::ptr_eq(&object, &resolved));
}

#[test]
fn resolve_none_and_unknown() {
    let identity = IdentityManager::new();
    let _object = identity.register(Object::new("View"));
    assert!(identity.resolve(ObjectId::NONE).is_none());
    assert!(identity.resolve(ObjectId::new(42)).is_none());
}

#[test]
fn unregister_is_idempotent() {
    let identity = IdentityManager::new();
    let object = identity.register(Object::new("View"));
    assert!(identity.unregister(&object));
    assert!(!identity.unregister(&object));
    assert!(identity.resolve(object.id()).is_none());
}

#[test]
fn unregister_ignores_unregistered_object() {
    let identity = IdentityManager::new();
    let loose = Object::new("View");
    assert!(!identity.unregister(&loose));
}

#[test]
fn unregister_checks_identity_not_just_id() {
    let first = IdentityManager::new();
    let second = IdentityManager::new();
    let ours = first.register(Object::new("View"));
    let theirs = second.register(Object::new("View"));
    assert_eq!(ours.id(), theirs.id());

    assert!(!first.unregister(&theirs));
    assert!(first.resolve(ours.id()).is_some());
}

#[test]
fn dead_objects_drop_out_of_live_set() {
    let identity = IdentityManager::new();
    let kept = identity.register(Object::new("View"));
    let dropped = identity.register(Object::new("View"));
    let dropped_id = dropped.id();
    drop(dropped);

    assert_eq!(identity.live_count(), 1);
    assert_eq!(identity.live_ids(), vec![kept.id()]);
    assert!(identity.resolve(dropped_id).is_none());
}

#[test]
fn live_ids_are_sorted() {
    let identity = IdentityManager::with_capacity(8);
    let objects: Vec<_> = (0..5)
        .map(|_| identity.register(Object::new("View")))
        .collect();
    let expected: Vec<ObjectId> = objects.iter().map(|o| o.id()).collect();
    assert_eq!(identity.live_ids(), expected);
}

#[test]
fn dropped_without_unregister_are_swept_on_register() {
    let identity = IdentityManager::new();
    for _ in 0..1000 {
        drop(identity.register(Object::new("View")));
    }
    assert!(identity.tracked_count() <= 64, "{}", identity.tracked_count());

    let kept: Vec<_> = (0..10)
        .map(|_| identity.register(Object::new("View")))
        .collect();
    for object in &kept {
        assert!(identity.resolve(object.id()).is_some());
    }
}

#[test]
fn live_count_sweeps_dead_entries() {
    let identity = IdentityManager::new();
    let kept = identity.register(Object::new("View"));
    for _ in 0..20 {
        drop(identity.register(Object::new("View")));
    }
    assert_eq!(identity.tracked_count(), 21);

    assert_eq!(identity.live_count(), 1);
    assert_eq!(identity.tracked_count(), 1);
    assert_eq!(identity.live_ids(), vec![kept.id()]);
}

// ── Shutdown ─────────────────────────────────────────────────────

#[test]
fn shutdown_flag_set_once() {
    let identity = IdentityManager::new();
    assert!(!identity.is_quitting());
    assert!(identity.begin_shutdown());
    assert!(!identity.begin_shutdown());
    assert!(identity.is_quitting());
}

#[test]
fn unregister_after_shutdown_is_noop() {
    let identity = IdentityManager::new();
    let object = identity.register(Object::new("View"));
    identity.begin_shutdown();

    assert!(!identity.unregister(&object));
    assert_eq!(identity.live_count(), 1);
}

// ── Concurrency ──────────────────────────────────────────────────

#[test]
fn concurrent_registration_yields_unique_ids() {
    let identity = IdentityManager::new();
    let per_thread = 200;
    let threads = 8;

    let mut ids: Vec<u64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(|| {
                    (0..per_thread)
                        .map(|_| identity.register(Object::new("View")))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .map(|o| o.id().get())
            .collect()
    });

    ids.sort_unstable();
    let expected: Vec<u64> = (1..=(threads * per_thread) as u64).collect();
    assert_eq!(ids, expected);
}

#[test]
fn concurrent_register_and_unregister() {
    let identity = IdentityManager::new();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let object = identity.register(Object::new("View"));
                    assert!(identity.resolve(object.id()).is_some());
                    assert!(identity.unregister(&object));
                }
            });
        }
    });
    assert_eq!(identity.live_count(), 0);
    assert_eq!(identity.peek_next_id(), ObjectId::new(401));
}

#[test]
fn debug_reports_counter() {
    let identity = IdentityManager::default();
    let _object = identity.register(Object::new("View"));
    let debug = format!("{identity:?}");
    assert!(debug.contains("next_id: 2"));
    assert!(debug.contains("quitting: false"));
}
