//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_facts;

use std::time::Duration;

use fact_counter::clock::ManualClock;
use fact_counter::counter::CounterAction;
use fact_counter::effects::Environment;
use fact_counter::facts::StubFactClient;
use fact_counter::store::Store;
use tokio::sync::broadcast;

/// One timer period in tests.
pub const TICK: Duration = Duration::from_secs(1);

/// Upper bound for waiting on an effect result. Only hit when a test fails.
pub const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Store wired to a manual clock and the given fact stub.
pub fn manual_store(facts: StubFactClient) -> (Store, ManualClock) {
    let clock = ManualClock::new();
    let env = Environment::new(clock.clone(), facts);
    (Store::new(env, TICK), clock)
}

/// Wait for the next reduced action and assert it equals `expected`.
pub async fn expect_action(
    actions: &mut broadcast::Receiver<CounterAction>,
    expected: CounterAction,
) {
    let received = tokio::time::timeout(RECV_TIMEOUT, actions.recv())
        .await
        .expect("timed out waiting for action")
        .expect("action stream closed");
    assert_eq!(received, expected);
}

/// Assert no further action was reduced.
///
/// Pushes a sentinel through the store queue; since processing is strictly
/// ordered, anything an effect enqueued earlier is observed first.
pub async fn expect_quiet(store: &Store, actions: &mut broadcast::Receiver<CounterAction>) {
    let before = store.state();
    store.send(CounterAction::Decrement).await.expect("store closed");
    expect_action(actions, CounterAction::Decrement).await;
    store.send(CounterAction::Increment).await.expect("store closed");
    expect_action(actions, CounterAction::Increment).await;
    assert_eq!(store.state().count, before.count);
}
