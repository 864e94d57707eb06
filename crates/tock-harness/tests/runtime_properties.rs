//! Property tests: the runtime is a faithful host for `App`.
//!
//! Whatever keys arrive, the state the runtime ends with and the state it
//! draws last must match feeding the same keys straight into `App::handle`.

use proptest::prelude::*;
use tock_app::{App, AppEvent, KeyInput, Runtime};
use tock_core::TimeOfDay;
use tock_harness::{InvariantRegistry, SimClock, SimDriver};

fn arb_key() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        Just(KeyInput::Left),
        Just(KeyInput::Right),
        Just(KeyInput::Up),
        Just(KeyInput::Down),
        Just(KeyInput::Enter),
        Just(KeyInput::Tab),
        prop::sample::select(vec!['h', 'H', 'x', ' ', '1']).prop_map(KeyInput::Char),
    ]
}

fn run_script(keys: &[Option<KeyInput>]) -> (App, SimDriver) {
    let driver = SimDriver::new().with_invariants(InvariantRegistry::standard());
    for key in keys {
        match key {
            Some(key) => driver.inject_key(*key),
            None => driver.inject_idle(),
        }
    }
    driver.inject_key(KeyInput::Char('q'));

    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let app = runtime
        .block_on(Runtime::new(driver.clone(), SimClock::new(TimeOfDay::MIDNIGHT)).run())
        .unwrap();
    (app, driver)
}

proptest! {
    #[test]
    fn runtime_matches_pure_model(keys in prop::collection::vec(prop::option::of(arb_key()), 0..40)) {
        let (app, driver) = run_script(&keys);

        let mut model = App::new();
        for key in keys.iter().flatten() {
            model.handle(AppEvent::Key(*key));
        }
        model.handle(AppEvent::Key(KeyInput::Char('q')));

        prop_assert_eq!(app.state(), model.state());
        prop_assert_eq!(driver.renders().len(), keys.len() + 1 + count_redraws(&keys));
        prop_assert_eq!(driver.stop_calls(), 1);
    }
}

/// Keys that change style or footer redraw once more before the next tick.
fn count_redraws(keys: &[Option<KeyInput>]) -> usize {
    keys.iter()
        .flatten()
        .filter(|key| {
            matches!(key, KeyInput::Left | KeyInput::Right | KeyInput::Char('h' | 'H'))
        })
        .count()
}
