//! Interface strings, loaded from JSON bundles embedded at compile time.
//! Unknown languages fall back to English; a key missing from a bundle
//! falls back to the English text for that key.

use std::collections::HashMap;

const EN: &str = include_str!("locales/en.json");
const ZH: &str = include_str!("locales/zh.json");

/// Every user-visible string in the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    NoTasks,
    PromptAdd,
    PromptEdit,
    Added,
    Edited,
    Toggled,
    Deleted,
    Promoted,
    Demoted,
    CannotPromote,
    CannotDemote,
    CannotMove,
    SaveFailed,
    HintsList,
    HintsInput,
}

impl Msg {
    /// JSON key in the locale bundles
    fn key(self) -> &'static str {
        match self {
            Msg::NoTasks => "no_tasks",
            Msg::PromptAdd => "prompt_add",
            Msg::PromptEdit => "prompt_edit",
            Msg::Added => "added",
            Msg::Edited => "edited",
            Msg::Toggled => "toggled",
            Msg::Deleted => "deleted",
            Msg::Promoted => "promoted",
            Msg::Demoted => "demoted",
            Msg::CannotPromote => "cannot_promote",
            Msg::CannotDemote => "cannot_demote",
            Msg::CannotMove => "cannot_move",
            Msg::SaveFailed => "save_failed",
            Msg::HintsList => "hints_list",
            Msg::HintsInput => "hints_input",
        }
    }
}

/// A resolved message catalog for one language
#[derive(Debug, Clone)]
pub struct Messages {
    map: HashMap<String, String>,
}

impl Messages {
    /// Load the catalog for `lang`. Starts from English and overlays the
    /// requested bundle, so partial translations degrade per key.
    pub fn load(lang: &str) -> Self {
        let mut map = parse_bundle(EN);
        if lang == "zh" {
            map.extend(parse_bundle(ZH));
        }
        Messages { map }
    }

    /// Plain message text. Falls back to the key itself if somehow absent.
    pub fn text(&self, msg: Msg) -> &str {
        self.map
            .get(msg.key())
            .map(String::as_str)
            .unwrap_or(msg.key())
    }

    /// Message text with `{name}` placeholders substituted.
    pub fn format(&self, msg: Msg, params: &[(&str, &str)]) -> String {
        let mut text = self.text(msg).to_string();
        for (name, value) in params {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

fn parse_bundle(json: &str) -> HashMap<String, String> {
    // The bundles are compiled into the binary; a parse failure is a build
    // defect, not a runtime condition.
    serde_json::from_str(json).expect("embedded locale bundle is valid JSON")
}
