//! Session snapshot integration tests

#[cfg(test)]
mod tests {
    use crate::common::{ProfileFactory, RoleFactory};
    use auzap_authz::auth::rbac::{AccessRequirement, RoleSnapshot, SessionAccess};
    use auzap_authz::config::RbacConfig;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    #[test]
    fn test_profile_lifecycle() {
        let session = SessionAccess::default();
        assert!(!session.gate(&AccessRequirement::Admin).is_granted());

        assert!(session.load_profile(ProfileFactory::with_role(&RoleFactory::admin())));
        assert!(session.gate(&AccessRequirement::Admin).is_granted());
        assert!(session.has_permission("clients.export"));

        assert!(!session.load_profile(ProfileFactory::without_role()));
        assert!(!session.has_permission("clients.export"));
        assert_eq!(
            session.gate(&AccessRequirement::Admin).denial_reason(),
            Some("role not loaded")
        );
    }

    #[test]
    fn test_snapshot_records_load_time() {
        let before = chrono::Utc::now();
        let snapshot = RoleSnapshot::new(RoleFactory::receptionist());
        assert!(snapshot.loaded_at() >= before);
        assert_eq!(snapshot.name(), "receptionist");
    }

    /// Readers racing with replacement must only ever observe one whole role
    #[test]
    fn test_concurrent_readers_never_see_a_mix() {
        let session = Arc::new(SessionAccess::new(RbacConfig::default()));
        let vet = RoleFactory::with_permissions("vet", &["pets.read", "pets.write"]);
        let billing = RoleFactory::with_permissions("billing", &["billing.read", "billing.write"]);
        session.replace(RoleSnapshot::new(vet.clone()));

        let stop = Arc::new(AtomicBool::new(false));
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let session = Arc::clone(&session);
                let stop = Arc::clone(&stop);
                thread::spawn(move || {
                    let mut observed = 0usize;
                    loop {
                        session.evaluate(|evaluator| {
                            let name = evaluator.role_name();
                            let pets = evaluator.has_all_permissions(&["pets.read", "pets.write"]);
                            let billing =
                                evaluator.has_all_permissions(&["billing.read", "billing.write"]);
                            match name {
                                Some("vet") => assert!(pets && !billing),
                                Some("billing") => assert!(billing && !pets),
                                other => panic!("unexpected role {other:?}"),
                            }
                        });
                        observed += 1;
                        if stop.load(Ordering::Relaxed) {
                            break observed;
                        }
                    }
                })
            })
            .collect();

        for i in 0..2_000 {
            let role = if i % 2 == 0 { &billing } else { &vet };
            session.replace(RoleSnapshot::new(role.clone()));
        }
        stop.store(true, Ordering::Relaxed);

        for reader in readers {
            assert!(reader.join().unwrap() > 0);
        }
    }

    #[test]
    fn test_session_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SessionAccess>();
        assert_send_sync::<RoleSnapshot>();
    }

    #[test]
    fn test_shared_config_applies_to_session() {
        let rbac = Arc::new(RbacConfig {
            super_admin_role: "owner".to_string(),
            admin_roles: vec!["owner".to_string()],
        });
        let session = SessionAccess::with_shared_config(Arc::clone(&rbac));
        session.replace(RoleSnapshot::new(RoleFactory::with_permissions("owner", &[])));

        assert!(session.gate(&AccessRequirement::SuperAdmin).is_granted());
        assert_eq!(session.rbac(), rbac.as_ref());
    }
}
