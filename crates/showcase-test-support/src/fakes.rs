//! In-memory stand-ins for browser state.

use std::cell::Cell;

use showcase_ui::core::theme::{EnvironmentError, ThemeEnvironment};

/// Theme environment backed by plain fields, with switchable failures.
#[derive(Debug, Default)]
pub struct FakeThemeEnvironment {
    stored: Option<String>,
    prefers_dark: bool,
    dark_flag: bool,
    storage_available: bool,
    document_available: bool,
    media_query_available: bool,
    system_reads: Cell<usize>,
    writes: Vec<String>,
}

impl FakeThemeEnvironment {
    /// Empty storage, light OS preference, everything available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage_available: true,
            document_available: true,
            media_query_available: true,
            ..Self::default()
        }
    }

    /// Seed the persisted choice.
    #[must_use]
    pub fn with_stored(mut self, value: &str) -> Self {
        self.stored = Some(value.to_string());
        self
    }

    /// Set the OS dark preference.
    #[must_use]
    pub const fn with_system_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    /// Make storage reads and writes fail.
    #[must_use]
    pub const fn without_storage(mut self) -> Self {
        self.storage_available = false;
        self
    }

    /// Make style flag updates fail.
    #[must_use]
    pub const fn without_document(mut self) -> Self {
        self.document_available = false;
        self
    }

    /// Make the OS preference query fail.
    #[must_use]
    pub const fn without_media_query(mut self) -> Self {
        self.media_query_available = false;
        self
    }

    /// Simulate a page reload: storage and OS preference survive, the
    /// document style flag starts cleared and the write log is reset.
    #[must_use]
    pub fn reloaded(&self) -> Self {
        Self {
            stored: self.stored.clone(),
            prefers_dark: self.prefers_dark,
            ..Self::new()
        }
    }

    /// Currently persisted value.
    #[must_use]
    pub fn stored(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    /// Whether the dark style flag is present.
    #[must_use]
    pub const fn dark_flag(&self) -> bool {
        self.dark_flag
    }

    /// Number of times the OS preference was read.
    #[must_use]
    pub fn system_reads(&self) -> usize {
        self.system_reads.get()
    }

    /// Every value written to storage, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl ThemeEnvironment for FakeThemeEnvironment {
    fn read_preference(&self) -> Result<Option<String>, EnvironmentError> {
        if !self.storage_available {
            return Err(EnvironmentError::StorageUnavailable);
        }
        Ok(self.stored.clone())
    }

    fn system_prefers_dark(&self) -> Result<bool, EnvironmentError> {
        self.system_reads.set(self.system_reads.get() + 1);
        if !self.media_query_available {
            return Err(EnvironmentError::MediaQueryUnavailable {
                query: "(prefers-color-scheme: dark)".to_string(),
            });
        }
        Ok(self.prefers_dark)
    }

    fn write_preference(&mut self, value: &str) -> Result<(), EnvironmentError> {
        if !self.storage_available {
            return Err(EnvironmentError::StorageUnavailable);
        }
        self.stored = Some(value.to_string());
        self.writes.push(value.to_string());
        Ok(())
    }

    fn set_dark_flag(&mut self, dark: bool) -> Result<(), EnvironmentError> {
        if !self.document_available {
            return Err(EnvironmentError::DocumentUnavailable);
        }
        self.dark_flag = dark;
        Ok(())
    }
}
