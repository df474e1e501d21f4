//! Open/closed state for a single collapsible section.
//!
//! # Design
//! - The controller owns `open` privately; only [`DisclosureController::toggle`]
//!   changes it.
//! - Header and content ids are derived once from the identity and never change.
//! - Collapsed content is gated out entirely: renderers mount the region body
//!   only while [`RegionAttributes::visible`] is `true`.

use tracing::debug;

use crate::core::ids::{IdGenerator, UuidIds};

const HEADER_SUFFIX: &str = "-header";
const CONTENT_SUFFIX: &str = "-content";

/// Construction inputs for a [`DisclosureController`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureOptions {
    /// Initial open state.
    pub default_open: bool,
    /// Rejects toggles when set.
    pub disabled: bool,
    /// Caller-supplied identity. Blank values fall back to a generated one.
    pub id: Option<String>,
}

impl DisclosureOptions {
    /// Options for a section that starts open.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            default_open: true,
            disabled: false,
            id: None,
        }
    }

    /// Set the caller-supplied identity.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// The two states of a disclosure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureState {
    /// Content region hidden and unmounted.
    Closed,
    /// Content region rendered.
    Open,
}

impl DisclosureState {
    const fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Whether the state is [`DisclosureState::Open`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Events a renderer dispatches to a controller, applied in dispatch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureAction {
    /// User activated the trigger.
    Toggle,
    /// The owning section's disabled prop changed.
    SetDisabled(bool),
}

/// Element a set of attributes is derived for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureRole {
    /// The button that toggles the section.
    Trigger,
    /// The content region controlled by the trigger.
    Region,
}

/// Attributes for the trigger button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerAttributes {
    /// Element id (`{identity}-header`).
    pub id: String,
    /// Mirrors the open state (`aria-expanded`).
    pub expanded: bool,
    /// Id of the controlled region (`aria-controls`).
    pub controls: String,
    /// Disabled flag, rendered as both `disabled` and `aria-disabled`.
    pub disabled: bool,
}

impl TriggerAttributes {
    /// Whether the disclosure indicator should be drawn rotated.
    #[must_use]
    pub const fn indicator_rotated(&self) -> bool {
        self.expanded
    }

    /// ARIA attribute pairs in render order.
    #[must_use]
    pub fn aria(&self) -> [(&'static str, String); 3] {
        [
            ("aria-expanded", self.expanded.to_string()),
            ("aria-controls", self.controls.clone()),
            ("aria-disabled", self.disabled.to_string()),
        ]
    }
}

/// Attributes for the content region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionAttributes {
    /// Element id (`{identity}-content`).
    pub id: String,
    /// Id of the labelling trigger (`aria-labelledby`).
    pub labelled_by: String,
    /// Whether the region body is present at all.
    pub visible: bool,
}

impl RegionAttributes {
    /// ARIA role for the region element.
    pub const ROLE: &'static str = "region";

    /// ARIA attribute pairs in render order.
    #[must_use]
    pub fn aria(&self) -> [(&'static str, String); 2] {
        [
            ("role", Self::ROLE.to_string()),
            ("aria-labelledby", self.labelled_by.clone()),
        ]
    }
}

/// Attributes derived for one [`DisclosureRole`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisclosureAttributes {
    /// Trigger button attributes.
    Trigger(TriggerAttributes),
    /// Content region attributes.
    Region(RegionAttributes),
}

/// State holder for one collapsible section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureController {
    state: DisclosureState,
    disabled: bool,
    identity: String,
    header_id: String,
    content_id: String,
}

impl DisclosureController {
    /// Build a controller, generating a UUID-backed identity when none is supplied.
    #[must_use]
    pub fn new(options: DisclosureOptions) -> Self {
        Self::with_generator(options, &mut UuidIds::default())
    }

    /// Build a controller, drawing a generated identity from `ids` when needed.
    #[must_use]
    pub fn with_generator(options: DisclosureOptions, ids: &mut impl IdGenerator) -> Self {
        let identity = match options.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => ids.generate(),
        };
        let header_id = format!("{identity}{HEADER_SUFFIX}");
        let content_id = format!("{identity}{CONTENT_SUFFIX}");
        Self {
            state: DisclosureState::from_open(options.default_open),
            disabled: options.disabled,
            identity,
            header_id,
            content_id,
        }
    }

    /// Flip the open state. A disabled controller ignores the call.
    pub fn toggle(&mut self) -> DisclosureState {
        if self.disabled {
            debug!(identity = %self.identity, "toggle ignored on disabled disclosure");
            return self.state;
        }
        self.state = DisclosureState::from_open(!self.state.is_open());
        debug!(identity = %self.identity, state = ?self.state, "disclosure toggled");
        self.state
    }

    /// Update the disabled flag. The open state is left untouched.
    pub const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Apply a dispatched action to the current state.
    pub fn apply(&mut self, action: DisclosureAction) -> DisclosureState {
        match action {
            DisclosureAction::Toggle => self.toggle(),
            DisclosureAction::SetDisabled(disabled) => {
                self.set_disabled(disabled);
                self.state
            }
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> DisclosureState {
        self.state
    }

    /// Whether the content region is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether toggles are rejected.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Identity the element ids derive from.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Id of the trigger element.
    #[must_use]
    pub fn header_id(&self) -> &str {
        &self.header_id
    }

    /// Id of the content region.
    #[must_use]
    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    /// Attributes for `role`, derived from current state without side effects.
    #[must_use]
    pub fn attributes_for(&self, role: DisclosureRole) -> DisclosureAttributes {
        match role {
            DisclosureRole::Trigger => DisclosureAttributes::Trigger(self.trigger()),
            DisclosureRole::Region => DisclosureAttributes::Region(self.region()),
        }
    }

    /// Trigger attributes.
    #[must_use]
    pub fn trigger(&self) -> TriggerAttributes {
        TriggerAttributes {
            id: self.header_id.clone(),
            expanded: self.is_open(),
            controls: self.content_id.clone(),
            disabled: self.disabled,
        }
    }

    /// Region attributes.
    #[must_use]
    pub fn region(&self) -> RegionAttributes {
        RegionAttributes {
            id: self.content_id.clone(),
            labelled_by: self.header_id.clone(),
            visible: self.is_open(),
        }
    }
}
