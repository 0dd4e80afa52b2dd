//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.SHELTER_UI_CONFIG` (if present) so a page can
//! change the log level, the theme storage key or the lightbox gallery scopes
//! without rebuilding the bundle.

/// Gallery containers, nearest-ancestor wins. Order matters when scopes nest.
pub const DEFAULT_GALLERY_SCOPES: &[&str] = &[".media-grid", ".detail-photo", "main"];
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    pub log_level: String,
    pub theme_storage_key: String,
    pub gallery_scopes: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            gallery_scopes: DEFAULT_GALLERY_SCOPES
                .iter()
                .map(|scope| (*scope).to_string())
                .collect(),
        }
    }
}

impl UiConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        let build = RuntimeConfig {
            log_level: option_env!("SHELTER_UI_LOG_LEVEL").and_then(normalize_runtime_value),
            theme_storage_key: option_env!("SHELTER_UI_THEME_KEY")
                .and_then(normalize_runtime_value),
            gallery_scopes: option_env!("SHELTER_UI_GALLERY_SCOPES").and_then(parse_scopes),
        };
        apply_runtime_overrides(&mut config, build);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Selector list handed to `closest`, e.g. `.media-grid, .detail-photo, main`.
    pub fn gallery_selector(&self) -> String {
        self.gallery_scopes.join(", ")
    }
}

#[derive(Default)]
struct RuntimeConfig {
    log_level: Option<String>,
    theme_storage_key: Option<String>,
    gallery_scopes: Option<Vec<String>>,
}

fn apply_runtime_overrides(config: &mut UiConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
    if let Some(value) = runtime.theme_storage_key {
        config.theme_storage_key = value;
    }
    if let Some(value) = runtime.gallery_scopes {
        config.gallery_scopes = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SHELTER_UI_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        log_level: read_runtime_value(&object, "log_level")
            .and_then(|value| normalize_runtime_value(&value)),
        theme_storage_key: read_runtime_value(&object, "theme_storage_key")
            .and_then(|value| normalize_runtime_value(&value)),
        gallery_scopes: read_runtime_value(&object, "gallery_scopes")
            .and_then(|value| parse_scopes(&value)),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_scopes(value: &str) -> Option<Vec<String>> {
    let scopes: Vec<String> = value.split(',').filter_map(normalize_runtime_value).collect();
    if scopes.is_empty() {
        None
    } else {
        Some(scopes)
    }
}
