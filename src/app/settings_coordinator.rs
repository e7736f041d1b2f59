//! Preference persistence.
//!
//! Preferences are stored in eframe's key-value storage as JSON strings.

use serde::{Deserialize, Serialize};

use crate::app::{AppState, DemoKind};

const DEMO_KEY: &str = "demo";
const SCISSOR_ENABLED_KEY: &str = "scissor_enabled";

/// Loads and saves GUI preferences.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `default` when it is missing or
    /// fails to parse.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        storage
            .and_then(|storage| storage.get_string(key))
            .and_then(|json_str| serde_json::from_str(&json_str).ok())
            .unwrap_or(default)
    }

    /// Saves a setting as JSON. Values that fail to serialize are skipped.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => log::warn!("failed to serialize setting {}: {}", key, e),
        }
    }

    /// Restores the persisted demo and scissor flag.
    ///
    /// `demo_override` (from the command line) wins over the stored demo.
    pub fn load_app_state(
        storage: Option<&dyn eframe::Storage>,
        demo_override: Option<DemoKind>,
    ) -> AppState {
        let demo = demo_override
            .unwrap_or_else(|| Self::load_setting_or(storage, DEMO_KEY, DemoKind::default()));
        let scissor_enabled = Self::load_setting_or(storage, SCISSOR_ENABLED_KEY, true);
        AppState::with_preferences(demo, scissor_enabled)
    }

    /// Persists the current demo and scissor flag.
    pub fn save_app_state(storage: &mut dyn eframe::Storage, state: &AppState) {
        Self::save_setting(storage, DEMO_KEY, &state.demo);
        Self::save_setting(storage, SCISSOR_ENABLED_KEY, &state.scissor.is_enabled());
        storage.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_missing_setting_uses_default() {
        let storage = MockStorage::new();
        let loaded: u32 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 7);
        assert_eq!(loaded, 7);

        let loaded: u32 = SettingsCoordinator::load_setting_or(None, "missing", 9);
        assert_eq!(loaded, 9);
    }

    #[test]
    fn test_corrupt_setting_uses_default() {
        let mut storage = MockStorage::new();
        storage.data.insert(DEMO_KEY.to_string(), "not json".to_string());
        let demo = SettingsCoordinator::load_setting_or(Some(&storage), DEMO_KEY, DemoKind::LoadingThread);
        assert_eq!(demo, DemoKind::LoadingThread);
    }

    #[test]
    fn test_app_state_round_trip() {
        let mut storage = MockStorage::new();
        let mut state = AppState::with_demo(DemoKind::ScissorTest);
        state.scissor.toggle();

        SettingsCoordinator::save_app_state(&mut storage, &state);
        let restored = SettingsCoordinator::load_app_state(Some(&storage), None);

        assert_eq!(restored.demo, DemoKind::ScissorTest);
        assert!(!restored.scissor.is_enabled());
    }

    #[test]
    fn test_command_line_demo_wins() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_app_state(&mut storage, &AppState::with_demo(DemoKind::ScissorTest));

        let restored = SettingsCoordinator::load_app_state(Some(&storage), Some(DemoKind::LoadingThread));
        assert_eq!(restored.demo, DemoKind::LoadingThread);
    }
}
