use crate::core::{wire_triggers, Panel, PanelModel, ToggleConfig, Trigger, Wiring};
use crate::dom;
use crate::error::ToggleError;
use crate::view::ContainerView;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Binds the four trigger elements to the container's `active` class.
pub struct PanelToggleController {
    model: Rc<RefCell<PanelModel>>,
    wiring: Wiring,
}

impl PanelToggleController {
    /// Resolve the container and wire every trigger found in `document`.
    ///
    /// A missing container is an error. A missing trigger only skips that
    /// trigger's listener; the failure is kept in the returned wiring.
    pub fn mount(document: &web::Document, config: ToggleConfig) -> Result<Self, ToggleError> {
        let container = dom::element(document, &config.container_id)?;
        let view = ContainerView::new(container, &config.active_class);

        let model = Rc::new(RefCell::new(PanelModel::new(view.current())));
        model
            .borrow_mut()
            .subscribe(|panel| log::debug!("[panel] now showing {}", panel.name()));

        let wiring = wire_triggers(&config, |trigger, id| {
            let model = model.clone();
            let view = view.clone();
            dom::add_click_listener(document, id, move || {
                // classList is written on every click, not only on a change
                let t = model.borrow_mut().dispatch(trigger);
                view.render(t.panel);
            })
        });
        for e in wiring.failed() {
            log::warn!("[panel] skipping listener: {}", e);
        }

        log::info!(
            "[panel] mounted on #{} (panel={}, listeners={}/{})",
            config.container_id,
            model.borrow().panel().name(),
            wiring.attached().len(),
            Trigger::ALL.len()
        );
        Ok(Self { model, wiring })
    }

    #[inline]
    pub fn panel(&self) -> Panel {
        self.model.borrow().panel()
    }

    /// Fails with the first trigger that could not be wired.
    pub fn into_result(self) -> Result<Self, ToggleError> {
        self.wiring.clone().into_result()?;
        Ok(self)
    }
}
