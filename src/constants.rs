/// Element ids and class name shared with the auth page markup.
///
/// The page template owns these ids; keep them in sync with it.
pub const CONTAINER_ID: &str = "container";
pub const REGISTER_BUTTON_ID: &str = "register";
pub const LOGIN_BUTTON_ID: &str = "login";
pub const REGISTER_LINK_ID: &str = "register-link";
pub const LOGIN_LINK_ID: &str = "login-link";

// Present on the container while the register panel is shown
pub const ACTIVE_CLASS: &str = "active";

// DOM event names
pub const CLICK_EVENT: &str = "click";
pub const DOM_READY_EVENT: &str = "DOMContentLoaded";
