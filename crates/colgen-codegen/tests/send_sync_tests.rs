//! Tests to verify that the generator types are Send + Sync.

use colgen_codegen::batch::{BatchOptions, BatchReport};
use colgen_codegen::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_engine_is_send_sync() {
    // One engine is shared by every generator in a batch
    assert_send_sync::<TemplateEngine>();
}

#[test]
fn test_generator_types_are_send_sync() {
    assert_send_sync::<CollectionGenerator<'static>>();
    assert_send_sync::<CollectionContext>();
    assert_send_sync::<DerivedParam>();
    assert_send_sync::<ReservedWords>();
}

#[test]
fn test_batch_types_are_send_sync() {
    assert_send_sync::<BatchOptions>();
    assert_send_sync::<BatchReport>();
}
