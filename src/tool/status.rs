use super::Configuration;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Visual treatment of a status badge: text, background, and border colors
/// as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusStyle {
    pub text: String,
    pub bg: String,
    pub border: String,
}

/// A fully-resolved display treatment for one outcome status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    /// The normalized key the display was resolved under.
    pub key: String,
    pub label: String,
    pub style: StatusStyle,
}

const DEFAULT_STATUSES: [(&str, &str, &str, &str, &str); 3] = [
    ("ok", "Recommended", "#065f46", "#ecfdf5", "#a7f3d0"),
    ("no", "Not recommended", "#991b1b", "#fef2f2", "#fecaca"),
    (
        "restrict",
        "Recommended with restriction",
        "#9a3412",
        "#fff7ed",
        "#fed7aa",
    ),
];

fn builtin(key: &str) -> Option<(&'static str, StatusStyle)> {
    DEFAULT_STATUSES
        .iter()
        .find(|(k, ..)| *k == key)
        .map(|(_, label, text, bg, border)| {
            (
                *label,
                StatusStyle {
                    text: (*text).to_string(),
                    bg: (*bg).to_string(),
                    border: (*border).to_string(),
                },
            )
        })
}

fn fallback_style() -> StatusStyle {
    // The "not recommended" treatment doubles as the generic fallback.
    builtin("no").map(|(_, style)| style).unwrap_or_else(|| StatusStyle {
        text: "#111111".to_string(),
        bg: "#ffffff".to_string(),
        border: "#cccccc".to_string(),
    })
}

/// Folds a status key into the registry's canonical form: lowercase, with
/// every byte outside `[a-z0-9_]` replaced by `_` and the result trimmed of
/// underscores. Normalization happens exactly here, the single boundary
/// where keys are first read; rule outcomes keep their authored spelling.
pub fn normalize_status_key(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    folded.trim_matches('_').to_string()
}

/// Validates a hex color of 3, 6, or 8 digits. Returns `None` for anything
/// else so callers can substitute a default channel.
pub fn sanitize_color(raw: &str) -> Option<String> {
    let color = raw.trim();
    let hex = color.strip_prefix('#')?;
    if matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(color.to_string())
    } else {
        None
    }
}

/// Maps normalized status keys to display labels and styles.
///
/// The registry always carries the built-in `ok`/`no`/`restrict` entries;
/// configuration overrides extend or replace them. Lookups never fail: an
/// unrecognized key resolves to the `no` treatment.
#[derive(Debug, Clone)]
pub struct StatusRegistry {
    entries: AHashMap<String, (String, StatusStyle)>,
}

impl StatusRegistry {
    pub fn with_defaults() -> Self {
        let mut entries = AHashMap::new();
        for (key, label, text, bg, border) in DEFAULT_STATUSES {
            entries.insert(
                key.to_string(),
                (
                    label.to_string(),
                    StatusStyle {
                        text: text.to_string(),
                        bg: bg.to_string(),
                        border: border.to_string(),
                    },
                ),
            );
        }
        Self { entries }
    }

    /// Builds a registry from the defaults plus a configuration's label and
    /// style overrides.
    pub fn from_configuration(config: &Configuration) -> Self {
        let mut registry = Self::with_defaults();

        for (key, style) in &config.status_styles {
            let normalized = normalize_status_key(key);
            if normalized.is_empty() {
                continue;
            }
            let label = config
                .status_labels
                .get(key)
                .cloned()
                .or_else(|| registry.label_of(&normalized))
                .unwrap_or_else(|| normalized.clone());
            registry.insert(&normalized, label, style.clone());
        }

        // Label-only overrides keep whatever style is already registered.
        for (key, label) in &config.status_labels {
            let normalized = normalize_status_key(key);
            if normalized.is_empty() {
                continue;
            }
            let style = registry
                .style_of(&normalized)
                .unwrap_or_else(fallback_style);
            registry.insert(&normalized, label.clone(), style);
        }

        registry
    }

    /// Registers a status. The key is normalized and each color channel is
    /// sanitized, falling back to the default treatment's channel.
    pub fn insert(&mut self, key: &str, label: impl Into<String>, style: StatusStyle) {
        let normalized = normalize_status_key(key);
        if normalized.is_empty() {
            return;
        }
        let fallback = fallback_style();
        let sanitized = StatusStyle {
            text: sanitize_color(&style.text).unwrap_or(fallback.text),
            bg: sanitize_color(&style.bg).unwrap_or(fallback.bg),
            border: sanitize_color(&style.border).unwrap_or(fallback.border),
        };
        self.entries.insert(normalized, (label.into(), sanitized));
    }

    /// Resolves a status key to its display treatment. Unknown keys fall
    /// back to the `no` entry; rendering must never be blocked by an
    /// unrecognized status.
    pub fn display(&self, key: &str) -> StatusDisplay {
        let normalized = normalize_status_key(key);
        if let Some((label, style)) = self.entries.get(&normalized) {
            return StatusDisplay {
                key: normalized,
                label: label.clone(),
                style: style.clone(),
            };
        }
        let (label, style) = self
            .entries
            .get("no")
            .cloned()
            .unwrap_or_else(|| ("Not recommended".to_string(), fallback_style()));
        StatusDisplay {
            key: "no".to_string(),
            label,
            style,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_status_key(key))
    }

    fn label_of(&self, normalized: &str) -> Option<String> {
        self.entries.get(normalized).map(|(label, _)| label.clone())
    }

    fn style_of(&self, normalized: &str) -> Option<StatusStyle> {
        self.entries.get(normalized).map(|(_, style)| style.clone())
    }
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
