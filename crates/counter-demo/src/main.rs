use anyhow::{Context, Result};
use counter::{
    counter_reducer, decrement_count, increment_count, reset_count, CounterAction, CounterState,
    CounterStore, IncrementPayload,
};
use counter_config::AppConfig;
use state_container::Store;
use std::path::Path;

mod logger;

fn main() -> Result<()> {
    let config = AppConfig::load();
    let log_file = logger::init(&config)?;

    log::info!("Starting counter-demo");
    log::debug!("Config: {:?}", config);

    let store = build_store(&config)?;
    println!("Logging to {}", log_file.display());
    println!("initial: {:?}", store.state());

    let observer = store.downgrade();
    let subscription = store.subscribe(move || {
        if let Some(state) = observer.state() {
            println!("state: {:?}", state);
        }
    });

    match std::env::args().nth(1) {
        Some(path) => {
            let applied = replay_file(&store, Path::new(&path))?;
            println!("Replayed {} action(s) from {}", applied, path);
        }
        None => run_walkthrough(&store),
    }

    // Unsubscribing stops notifications, the state keeps changing
    subscription.unsubscribe();
    store.dispatch(increment_count(None));
    println!("after unsubscribe: {:?}", store.state());

    log::info!("Exiting counter-demo");
    Ok(())
}

fn build_store(config: &AppConfig) -> Result<CounterStore> {
    Store::builder()
        .name(config.store_name.clone())
        .initial_state(CounterState::new(config.initial_count))
        .reducer(counter_reducer)
        .log_actions(config.log_actions)
        .build()
        .context("Failed to build counter store")
}

fn run_walkthrough(store: &CounterStore) {
    store.dispatch(increment_count(None));
    store.dispatch(increment_count(Some(IncrementPayload::by(5))));
    store.dispatch(reset_count());
    store.dispatch(decrement_count());
}

/// Dispatch every action in a JSON array file, skipping entries without a usable type
fn replay_file(store: &CounterStore, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read actions from {}", path.display()))?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array", path.display()))?;

    let mut applied = 0;
    for (index, value) in values.into_iter().enumerate() {
        match CounterAction::from_value(value) {
            Ok(action) => {
                store.dispatch(action);
                applied += 1;
            }
            Err(e) => log::warn!("Skipping action #{}: {}", index, e),
        }
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_store_from_config() {
        let config = AppConfig {
            store_name: "tally".to_string(),
            log_actions: false,
            initial_count: 3,
            log_level: "info".to_string(),
        };
        let store = build_store(&config).unwrap();
        assert_eq!(store.name(), "tally");
        assert_eq!(store.state().count, 3);
    }

    #[test]
    fn test_walkthrough_ends_at_minus_one() {
        let store = build_store(&AppConfig::default()).unwrap();
        run_walkthrough(&store);
        assert_eq!(store.state().count, -1);
    }

    #[test]
    fn test_replay_file_skips_untyped_entries() {
        let path =
            std::env::temp_dir().join(format!("counter-demo-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[
                {"type": "INCREMENT", "incrementBy": 4},
                {"incrementBy": 100},
                {"type": "INCREMENT", "incrementBy": "x"},
                {"type": "UNKNOWN"}
            ]"#,
        )
        .unwrap();

        let store = build_store(&AppConfig::default()).unwrap();
        let applied = replay_file(&store, &path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(applied, 3);
        assert_eq!(store.state().count, 5);
    }

    #[test]
    fn test_replay_missing_file_is_error() {
        let store = build_store(&AppConfig::default()).unwrap();
        let err = replay_file(&store, Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
