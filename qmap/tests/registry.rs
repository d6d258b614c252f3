use qmap::testing::CountingHandler;
use qmap::{HandlerEntry, HandlerProvider, Registry, RegistryBuildError, RegistryBuilder};

mod common;
use common::{ARTIST_SIMILARITY, TRAIN_MODEL, USER_ENTITY};

#[test]
fn duplicate_identifier_rejected() {
    let first = CountingHandler::new();
    let mut builder: RegistryBuilder<String, ()> = RegistryBuilder::new();
    builder.register(USER_ENTITY, first.clone()).unwrap();

    let err = builder
        .register(USER_ENTITY, CountingHandler::new())
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryBuildError::DuplicateIdentifier(ref q) if q == USER_ENTITY
    ));

    // The failed registration must not disturb the prior binding.
    let registry = builder.build();
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(USER_ENTITY));
}

#[tokio::test]
async fn duplicate_registration_keeps_original_handler() {
    let original = CountingHandler::new();
    let usurper = CountingHandler::new();

    let mut builder: RegistryBuilder<String, ()> = RegistryBuilder::new();
    builder.register(USER_ENTITY, original.clone()).unwrap();
    builder
        .register(USER_ENTITY, usurper.clone())
        .unwrap_err();

    let dispatcher = qmap::Dispatcher::new(builder.build());
    dispatcher
        .invoke(USER_ENTITY, "params".to_string())
        .await
        .unwrap();

    assert_eq!(original.count(), 1);
    assert_eq!(usurper.count(), 0);
}

#[test]
fn empty_identifier_rejected() {
    let mut builder: RegistryBuilder<String, ()> = RegistryBuilder::new();
    let err = builder.register("", CountingHandler::new()).unwrap_err();
    assert!(matches!(err, RegistryBuildError::EmptyIdentifier));
    assert!(builder.build().is_empty());
}

#[test]
fn lookup_is_stable_and_read_only() {
    let mut builder: RegistryBuilder<String, ()> = RegistryBuilder::new();
    builder.register(USER_ENTITY, CountingHandler::new()).unwrap();
    let registry = builder.build();

    let first = registry.get(USER_ENTITY).expect("registered");
    let second = registry.get(USER_ENTITY).expect("registered");
    assert!(std::sync::Arc::ptr_eq(first, second));

    assert!(registry.get("stats.user").is_none());
    assert!(registry.get("").is_none());
}

#[test]
fn identifiers_are_case_sensitive() {
    let mut builder: RegistryBuilder<String, ()> = RegistryBuilder::new();
    builder.register(USER_ENTITY, CountingHandler::new()).unwrap();
    let registry = builder.build();

    assert!(registry.contains(USER_ENTITY));
    assert!(!registry.contains("Stats.User.Entity"));
    assert!(!registry.contains("STATS.USER.ENTITY"));
}

#[test]
fn queries_lists_exactly_what_was_registered() {
    let mut builder: RegistryBuilder<String, ()> = RegistryBuilder::new();
    builder.register(USER_ENTITY, CountingHandler::new()).unwrap();
    builder
        .register(ARTIST_SIMILARITY, CountingHandler::new())
        .unwrap();
    let registry = builder.build();

    let mut queries: Vec<&str> = registry.queries().collect();
    queries.sort_unstable();
    assert_eq!(queries, vec![ARTIST_SIMILARITY, USER_ENTITY]);
    assert_eq!(registry.len(), 2);
}

struct StatsSubsystem;

impl HandlerProvider<String, ()> for StatsSubsystem {
    fn handlers(&self) -> Vec<HandlerEntry<String, ()>> {
        vec![
            HandlerEntry::new(USER_ENTITY, CountingHandler::new()),
            HandlerEntry::new("stats.user.listening_activity", CountingHandler::new()),
        ]
    }
}

struct RecommendationSubsystem;

impl HandlerProvider<String, ()> for RecommendationSubsystem {
    fn handlers(&self) -> Vec<HandlerEntry<String, ()>> {
        vec![HandlerEntry::new(TRAIN_MODEL, CountingHandler::new())]
    }
}

#[test]
fn providers_fold_into_one_registry() {
    let mut builder = Registry::builder();
    builder.install(&StatsSubsystem).unwrap();
    builder.install(&RecommendationSubsystem).unwrap();
    let registry = builder.build();

    assert_eq!(registry.len(), 3);
    assert!(registry.contains(USER_ENTITY));
    assert!(registry.contains("stats.user.listening_activity"));
    assert!(registry.contains(TRAIN_MODEL));
}

#[test]
fn colliding_providers_abort_assembly() {
    let mut builder = Registry::builder();
    builder.install(&StatsSubsystem).unwrap();

    // A second subsystem claiming an already-bound identifier must fail.
    let err = builder.install(&StatsSubsystem).unwrap_err();
    assert!(matches!(
        err,
        RegistryBuildError::DuplicateIdentifier(ref q) if q == USER_ENTITY
    ));
}
