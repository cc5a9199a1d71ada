// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Hotkey handling
//!
//! Maps physical keys to [`HotkeyAction`]s. Bindings come from the
//! `[hotkeys]` config table, where keys are named after winit `KeyCode`
//! variants (`"Escape"`, `"F12"`, `"KeyQ"`, ...).

use crate::core::config::{default_hotkeys, HotkeyAction};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Key → action lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyMap {
    bindings: HashMap<KeyCode, HotkeyAction>,
}

impl HotkeyMap {
    /// Build the table from config entries
    ///
    /// Unknown key names are skipped with a warning.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use trirast::core::config::HotkeyAction;
    /// use trirast::frontend::HotkeyMap;
    /// use winit::keyboard::KeyCode;
    ///
    /// let config = HashMap::from([("KeyQ".to_string(), HotkeyAction::Exit)]);
    /// let hotkeys = HotkeyMap::from_config(&config);
    /// assert_eq!(hotkeys.action_for(KeyCode::KeyQ), Some(HotkeyAction::Exit));
    /// ```
    pub fn from_config(hotkeys: &HashMap<String, HotkeyAction>) -> Self {
        let mut bindings = HashMap::new();

        for (name, &action) in hotkeys {
            match string_to_keycode(name) {
                Some(key) => {
                    bindings.insert(key, action);
                }
                None => log::warn!("Unknown key name in hotkey config: {}", name),
            }
        }

        Self { bindings }
    }

    /// Action bound to `key`, if any
    pub fn action_for(&self, key: KeyCode) -> Option<HotkeyAction> {
        self.bindings.get(&key).copied()
    }

    pub fn bind(&mut self, key: KeyCode, action: HotkeyAction) {
        self.bindings.insert(key, action);
    }

    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Keys bound to `action`, sorted by name
    pub fn keys_for(&self, action: HotkeyAction) -> Vec<KeyCode> {
        let mut keys: Vec<_> = self
            .bindings
            .iter()
            .filter(|&(_, &a)| a == action)
            .map(|(&key, _)| key)
            .collect();
        keys.sort_by_key(|&key| keycode_to_string(key));
        keys
    }

    /// Table in config form, for saving
    pub fn to_config(&self) -> HashMap<String, HotkeyAction> {
        self.bindings
            .iter()
            .map(|(&key, &action)| (keycode_to_string(key), action))
            .collect()
    }
}

impl Default for HotkeyMap {
    fn default() -> Self {
        Self::from_config(&default_hotkeys())
    }
}

/// Config name of a key (the `KeyCode` variant name)
pub fn keycode_to_string(key: KeyCode) -> String {
    format!("{:?}", key)
}

/// Parse a config key name
pub fn string_to_keycode(s: &str) -> Option<KeyCode> {
    let key = match s {
        // Letters
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,

        // Digits
        "Digit0" => KeyCode::Digit0,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        "Digit5" => KeyCode::Digit5,
        "Digit6" => KeyCode::Digit6,
        "Digit7" => KeyCode::Digit7,
        "Digit8" => KeyCode::Digit8,
        "Digit9" => KeyCode::Digit9,

        // Function keys
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "F6" => KeyCode::F6,
        "F7" => KeyCode::F7,
        "F8" => KeyCode::F8,
        "F9" => KeyCode::F9,
        "F10" => KeyCode::F10,
        "F11" => KeyCode::F11,
        "F12" => KeyCode::F12,

        // Navigation and editing
        "Escape" => KeyCode::Escape,
        "Enter" => KeyCode::Enter,
        "Space" => KeyCode::Space,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        "Insert" => KeyCode::Insert,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "PrintScreen" => KeyCode::PrintScreen,
        _ => return None,
    };
    Some(key)
}
