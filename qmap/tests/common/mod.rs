#![allow(dead_code)]

use qmap::testing::CountingHandler;
use qmap::{Dispatcher, Registry};

// Identifiers from the production namespace, used across test files.
pub const USER_ENTITY: &str = "stats.user.entity";
pub const ARTIST_SIMILARITY: &str = "similarity.artist";
pub const TRAIN_MODEL: &str = "cf.recommendations.recording.train_model";

/// A dispatcher over two counting handlers, plus handles to their counters.
pub fn counting_dispatcher() -> (Dispatcher<String, ()>, CountingHandler, CountingHandler) {
    let stats = CountingHandler::new();
    let similarity = CountingHandler::new();

    let mut builder = Registry::builder();
    builder
        .register(USER_ENTITY, stats.clone())
        .expect("fresh identifier");
    builder
        .register(ARTIST_SIMILARITY, similarity.clone())
        .expect("fresh identifier");

    (Dispatcher::new(builder.build()), stats, similarity)
}
