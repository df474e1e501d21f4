//! Browser bindings for the theme controller.

use crate::core::config::ThemeSettings;
use crate::core::theme::{EnvironmentError, ThemeEnvironment};
use gloo::console;
use gloo::utils::window;
use wasm_bindgen::JsValue;
use web_sys::{Element, Storage};

/// `localStorage`, `matchMedia`, and the root element's class list.
pub(crate) struct BrowserThemeEnvironment {
    settings: ThemeSettings,
}

impl BrowserThemeEnvironment {
    pub(crate) const fn new(settings: ThemeSettings) -> Self {
        Self { settings }
    }

    fn storage() -> Result<Storage, EnvironmentError> {
        window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(EnvironmentError::StorageUnavailable)
    }

    fn root() -> Result<Element, EnvironmentError> {
        window()
            .document()
            .and_then(|document| document.document_element())
            .ok_or(EnvironmentError::DocumentUnavailable)
    }
}

impl ThemeEnvironment for BrowserThemeEnvironment {
    fn read_preference(&self) -> Result<Option<String>, EnvironmentError> {
        let key = &self.settings.storage_key;
        Self::storage()?
            .get_item(key)
            .map_err(|err| EnvironmentError::StorageRead {
                key: key.clone(),
                detail: js_detail(&err),
            })
    }

    fn system_prefers_dark(&self) -> Result<bool, EnvironmentError> {
        let query = &self.settings.media_query;
        window()
            .match_media(query)
            .ok()
            .flatten()
            .map(|media| media.matches())
            .ok_or_else(|| EnvironmentError::MediaQueryUnavailable {
                query: query.clone(),
            })
    }

    fn write_preference(&mut self, value: &str) -> Result<(), EnvironmentError> {
        let key = &self.settings.storage_key;
        Self::storage()
            .and_then(|storage| {
                storage
                    .set_item(key, value)
                    .map_err(|err| EnvironmentError::StorageWrite {
                        key: key.clone(),
                        detail: js_detail(&err),
                    })
            })
            .inspect_err(|err| log_environment_error("write_preference", err))
    }

    fn set_dark_flag(&mut self, dark: bool) -> Result<(), EnvironmentError> {
        let class = &self.settings.dark_class;
        Self::root()
            .and_then(|root| {
                let classes = root.class_list();
                let applied = if dark {
                    classes.add_1(class)
                } else {
                    classes.remove_1(class)
                };
                applied.map_err(|err| EnvironmentError::ClassList {
                    class: class.clone(),
                    detail: js_detail(&err),
                })
            })
            .inspect_err(|err| log_environment_error("set_dark_flag", err))
    }
}

fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn log_environment_error(operation: &'static str, err: &EnvironmentError) {
    console::error!("theme environment operation failed", operation, err.to_string());
}
