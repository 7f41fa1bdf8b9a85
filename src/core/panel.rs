// View-model for the login/register panel.
//
// The page only ever shows one of two panels. Which one is visible is a
// single boolean, mirrored onto the container's class list by the view.
// Nothing here touches the DOM so it can be exercised on the host.

use crate::constants::{
    ACTIVE_CLASS, CONTAINER_ID, LOGIN_BUTTON_ID, LOGIN_LINK_ID, REGISTER_BUTTON_ID,
    REGISTER_LINK_ID,
};
use crate::error::ToggleError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Login,
    Register,
}

impl Panel {
    #[inline]
    pub fn from_class_present(present: bool) -> Self {
        if present {
            Panel::Register
        } else {
            Panel::Login
        }
    }

    #[inline]
    pub fn has_active_class(self) -> bool {
        self == Panel::Register
    }

    pub fn name(self) -> &'static str {
        match self {
            Panel::Login => "login",
            Panel::Register => "register",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    RegisterButton,
    LoginButton,
    RegisterLink,
    LoginLink,
}

impl Trigger {
    pub const ALL: [Trigger; 4] = [
        Trigger::RegisterButton,
        Trigger::LoginButton,
        Trigger::RegisterLink,
        Trigger::LoginLink,
    ];

    /// Panel shown after this trigger fires, regardless of the current one.
    #[inline]
    pub fn target(self) -> Panel {
        match self {
            Trigger::RegisterButton | Trigger::RegisterLink => Panel::Register,
            Trigger::LoginButton | Trigger::LoginLink => Panel::Login,
        }
    }

    pub fn element_id(self, config: &ToggleConfig) -> &str {
        match self {
            Trigger::RegisterButton => &config.register_button_id,
            Trigger::LoginButton => &config.login_button_id,
            Trigger::RegisterLink => &config.register_link_id,
            Trigger::LoginLink => &config.login_link_id,
        }
    }
}

/// Ids the controller resolves at mount time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleConfig {
    pub container_id: String,
    pub register_button_id: String,
    pub login_button_id: String,
    pub register_link_id: String,
    pub login_link_id: String,
    pub active_class: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_string(),
            register_button_id: REGISTER_BUTTON_ID.to_string(),
            login_button_id: LOGIN_BUTTON_ID.to_string(),
            register_link_id: REGISTER_LINK_ID.to_string(),
            login_link_id: LOGIN_LINK_ID.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub panel: Panel,
    pub changed: bool,
}

type Subscriber = Box<dyn FnMut(Panel)>;

/// Single observable flag: is the register panel active.
pub struct PanelModel {
    register_active: bool,
    subscribers: Vec<Subscriber>,
}

impl PanelModel {
    pub fn new(initial: Panel) -> Self {
        Self {
            register_active: initial.has_active_class(),
            subscribers: Vec::new(),
        }
    }

    #[inline]
    pub fn panel(&self) -> Panel {
        Panel::from_class_present(self.register_active)
    }

    /// Subscribers run after every change, never on a no-op dispatch.
    pub fn subscribe(&mut self, subscriber: impl FnMut(Panel) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply a click. The returned panel is always the trigger's target,
    /// so the view can be written on every click even when the flag held.
    pub fn dispatch(&mut self, trigger: Trigger) -> Transition {
        let panel = trigger.target();
        let changed = panel.has_active_class() != self.register_active;
        if changed {
            self.register_active = panel.has_active_class();
            for s in self.subscribers.iter_mut() {
                s(panel);
            }
        }
        Transition { panel, changed }
    }
}

impl Default for PanelModel {
    fn default() -> Self {
        Self::new(Panel::default())
    }
}

impl std::fmt::Debug for PanelModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelModel")
            .field("panel", &self.panel())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Outcome of attaching the trigger listeners.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wiring {
    attached: Vec<Trigger>,
    failed: Vec<ToggleError>,
}

impl Wiring {
    pub fn attached(&self) -> &[Trigger] {
        &self.attached
    }

    /// One error per trigger whose listener could not be attached.
    pub fn failed(&self) -> &[ToggleError] {
        &self.failed
    }

    pub fn into_result(self) -> Result<Vec<Trigger>, ToggleError> {
        match self.failed.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(self.attached),
        }
    }
}

/// Attach every trigger in [`Trigger::ALL`] order. A failure only skips
/// that trigger; the rest are still attached.
pub fn wire_triggers(
    config: &ToggleConfig,
    mut attach: impl FnMut(Trigger, &str) -> Result<(), ToggleError>,
) -> Wiring {
    let mut wiring = Wiring::default();
    for trigger in Trigger::ALL {
        match attach(trigger, trigger.element_id(config)) {
            Ok(()) => wiring.attached.push(trigger),
            Err(e) => wiring.failed.push(e),
        }
    }
    wiring
}
