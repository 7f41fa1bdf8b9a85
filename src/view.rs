use crate::core::Panel;
use web_sys as web;

/// The container element whose class list shows which panel is visible.
#[derive(Clone, Debug)]
pub struct ContainerView {
    el: web::Element,
    active_class: String,
}

impl ContainerView {
    pub fn new(el: web::Element, active_class: &str) -> Self {
        Self {
            el,
            active_class: active_class.to_string(),
        }
    }

    #[inline]
    pub fn current(&self) -> Panel {
        Panel::from_class_present(self.el.class_list().contains(&self.active_class))
    }

    // DOMTokenList add/remove are no-ops when the class is already in that state
    pub fn render(&self, panel: Panel) {
        let cl = self.el.class_list();
        let res = if panel.has_active_class() {
            cl.add_1(&self.active_class)
        } else {
            cl.remove_1(&self.active_class)
        };
        if let Err(e) = res {
            log::error!("[panel] class update failed: {:?}", e);
        }
    }
}
