//! Light/dark theme resolution and persistence.
//!
//! # Design
//! - The resolved mode is decided once at initialisation: an explicit stored
//!   choice wins, otherwise the OS preference is read a single time. Later OS
//!   changes are not observed.
//! - Every change is written to the persisted key and mirrored onto the global
//!   style flag before control returns to the caller.
//! - Environment failures degrade the write, never the in-memory mode.
//! - One live controller per UI thread owns the shared state; a second
//!   construction fails with [`ThemeError::AlreadyActive`].

use std::cell::Cell;

use thiserror::Error;
use tracing::{debug, warn};

/// Label announced by the toggle while dark mode is active.
pub const SWITCH_TO_LIGHT_LABEL: &str = "Switch to light mode";
/// Label announced by the toggle while light mode is active.
pub const SWITCH_TO_DARK_LABEL: &str = "Switch to dark mode";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// Value written to the persisted key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Mode for a resolved dark flag.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Interpret a stored value. Empty values count as no choice; anything
    /// other than `"dark"` resolves to light.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        Some(Self::from_dark(value == Self::Dark.as_str()))
    }

    /// Whether this is [`ThemeMode::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for a control that switches away from this mode.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => SWITCH_TO_DARK_LABEL,
            Self::Dark => SWITCH_TO_LIGHT_LABEL,
        }
    }
}

/// A single environment capability failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    /// No persistent storage is available.
    #[error("persistent storage is unavailable")]
    StorageUnavailable,
    /// Storage rejected a read.
    #[error("failed to read '{key}' from storage: {detail}")]
    StorageRead {
        /// Key being read.
        key: String,
        /// Environment-provided detail.
        detail: String,
    },
    /// Storage rejected a write.
    #[error("failed to write '{key}' to storage: {detail}")]
    StorageWrite {
        /// Key being written.
        key: String,
        /// Environment-provided detail.
        detail: String,
    },
    /// The OS preference query could not be evaluated.
    #[error("media query '{query}' could not be evaluated")]
    MediaQueryUnavailable {
        /// Query that failed.
        query: String,
    },
    /// No document root to carry the style flag.
    #[error("document root is unavailable")]
    DocumentUnavailable,
    /// The class list rejected the mutation.
    #[error("failed to update class '{class}': {detail}")]
    ClassList {
        /// Class being toggled.
        class: String,
        /// Environment-provided detail.
        detail: String,
    },
}

/// Shared state the theme controller reads and writes.
pub trait ThemeEnvironment {
    /// Read the persisted choice, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when storage cannot be read.
    fn read_preference(&self) -> Result<Option<String>, EnvironmentError>;

    /// Whether the OS prefers a dark presentation.
    ///
    /// # Errors
    ///
    /// Returns an error when the preference signal is unavailable.
    fn system_prefers_dark(&self) -> Result<bool, EnvironmentError>;

    /// Persist `value` under the theme key.
    ///
    /// # Errors
    ///
    /// Returns an error when storage is unavailable or rejects the write.
    fn write_preference(&mut self, value: &str) -> Result<(), EnvironmentError>;

    /// Add (`true`) or remove (`false`) the global dark style flag.
    ///
    /// # Errors
    ///
    /// Returns an error when the document or its class list is unavailable.
    fn set_dark_flag(&mut self, dark: bool) -> Result<(), EnvironmentError>;
}

/// Resolve the initial mode: stored choice first, then the OS preference.
///
/// Unreadable storage counts as no stored choice and an unreadable OS signal
/// resolves to light.
#[must_use]
pub fn resolve_initial(env: &impl ThemeEnvironment) -> ThemeMode {
    let stored = env.read_preference().unwrap_or_else(|err| {
        warn!(error = %err, "theme preference unreadable; treating as unset");
        None
    });
    if let Some(mode) = stored.as_deref().and_then(ThemeMode::from_stored) {
        debug!(mode = mode.as_str(), "theme resolved from stored choice");
        return mode;
    }
    let prefers_dark = env.system_prefers_dark().unwrap_or_else(|err| {
        warn!(error = %err, "system theme preference unreadable; defaulting to light");
        false
    });
    let mode = ThemeMode::from_dark(prefers_dark);
    debug!(mode = mode.as_str(), "theme resolved from system preference");
    mode
}

/// Which side effects of the last write succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncReport {
    /// The persisted key holds the current mode.
    pub persisted: bool,
    /// The global style flag matches the current mode.
    pub styled: bool,
}

impl SyncReport {
    /// Both side effects landed.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.persisted && self.styled
    }
}

/// Construction of a theme controller failed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// Another live controller already owns the shared theme state.
    #[error("another theme controller already owns the shared theme state")]
    AlreadyActive,
}

thread_local! {
    static CONTROLLER_ACTIVE: Cell<bool> = const { Cell::new(false) };
}

#[derive(Debug)]
struct InstanceClaim;

impl InstanceClaim {
    fn acquire() -> Result<Self, ThemeError> {
        CONTROLLER_ACTIVE.with(|active| {
            if active.replace(true) {
                Err(ThemeError::AlreadyActive)
            } else {
                Ok(Self)
            }
        })
    }
}

impl Drop for InstanceClaim {
    fn drop(&mut self) {
        CONTROLLER_ACTIVE.with(|active| active.set(false));
    }
}

/// Owner of the resolved theme mode for the running application.
#[derive(Debug)]
pub struct ThemePreferenceController<E: ThemeEnvironment> {
    env: E,
    mode: ThemeMode,
    last_sync: SyncReport,
    _claim: InstanceClaim,
}

impl<E: ThemeEnvironment> ThemePreferenceController<E> {
    /// Resolve the initial mode from `env` and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::AlreadyActive`] while another controller is alive on
    /// this thread.
    pub fn initialize(env: E) -> Result<Self, ThemeError> {
        let claim = InstanceClaim::acquire()?;
        let mode = resolve_initial(&env);
        let mut controller = Self {
            env,
            mode,
            last_sync: SyncReport {
                persisted: false,
                styled: false,
            },
            _claim: claim,
        };
        controller.sync();
        Ok(controller)
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether dark mode is active.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Outcome of the most recent environment write.
    #[must_use]
    pub const fn last_sync(&self) -> SyncReport {
        self.last_sync
    }

    /// Accessible label for the toggle control.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        self.mode.toggle_label()
    }

    /// Environment the controller writes to.
    #[must_use]
    pub const fn environment(&self) -> &E {
        &self.env
    }

    /// Set the mode from a dark flag and write it through.
    pub fn set_dark(&mut self, dark: bool) -> SyncReport {
        self.set_mode(ThemeMode::from_dark(dark))
    }

    /// Set the mode and write it through.
    pub fn set_mode(&mut self, mode: ThemeMode) -> SyncReport {
        self.mode = mode;
        self.sync()
    }

    /// Switch to the opposite mode.
    pub fn toggle(&mut self) -> SyncReport {
        self.set_mode(self.mode.toggled())
    }

    fn sync(&mut self) -> SyncReport {
        let mode = self.mode;
        let persisted = match self.env.write_preference(mode.as_str()) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, mode = mode.as_str(), "theme preference not persisted");
                false
            }
        };
        let styled = match self.env.set_dark_flag(mode.is_dark()) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, mode = mode.as_str(), "theme style flag not applied");
                false
            }
        };
        let report = SyncReport { persisted, styled };
        debug!(mode = mode.as_str(), ?report, "theme mode applied");
        self.last_sync = report;
        report
    }
}
