//! Control panel: one labeled speed slider per planet, plus the three
//! buttons. Sliders and readouts carry ids derived from `Planet::key()`, so
//! reset re-syncs them by id rather than by DOM position.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use orrery_core::{Command, Planet, SolarSim, SPEED_MAX, SPEED_MIN, SPEED_STEP};

use crate::constants::{CONTROLS_ID, LIGHT_THEME_CLASS, PAUSE_BTN_ID, RESET_BTN_ID, THEME_BTN_ID};
use crate::dom;
use crate::labels;

pub fn build_controls(
    document: &web::Document,
    sim: &Rc<RefCell<SolarSim>>,
) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(CONTROLS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTROLS_ID))?;

    for planet in Planet::ALL {
        let cfg = planet.config();

        let group = dom::create_element(document, "div")?;
        group.set_class_name("planet-control");

        let label = dom::create_element(document, "div")?;
        label.set_class_name("planet-label");
        label.set_text_content(Some(cfg.name));
        let _ = label.set_attribute("style", &format!("color:{}", labels::color_hex(cfg.color)));

        let slider: web::HtmlInputElement = dom::create_element(document, "input")?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("input element cast"))?;
        slider.set_type("range");
        slider.set_class_name("speed-slider");
        slider.set_id(&labels::slider_id(planet.key()));
        slider.set_min(&labels::format_speed(SPEED_MIN));
        slider.set_max(&labels::format_speed(SPEED_MAX));
        slider.set_step(&labels::format_speed(SPEED_STEP));
        slider.set_value(&labels::format_speed(cfg.speed));

        let readout = dom::create_element(document, "div")?;
        readout.set_class_name("speed-value");
        readout.set_id(&labels::readout_id(planet.key()));
        readout.set_text_content(Some(&labels::format_speed(cfg.speed)));

        {
            let sim = sim.clone();
            let slider_in = slider.clone();
            let readout_in = readout.clone();
            dom::add_input_listener(&slider, move || {
                let Ok(value) = slider_in.value().parse::<f32>() else {
                    return;
                };
                sim.borrow_mut().apply(Command::SetSpeed(planet, value));
                readout_in.set_text_content(Some(&labels::format_speed(value)));
            });
        }

        group.append_child(&label).map_err(dom::js_err)?;
        group.append_child(&slider).map_err(dom::js_err)?;
        group.append_child(&readout).map_err(dom::js_err)?;
        container.append_child(&group).map_err(dom::js_err)?;
    }
    Ok(())
}

/// Push the simulation's current speeds back into sliders and readouts.
pub fn sync_controls(document: &web::Document, sim: &SolarSim) {
    for planet in Planet::ALL {
        let value = labels::format_speed(sim.speed(planet));
        if let Some(el) = document.get_element_by_id(&labels::slider_id(planet.key())) {
            if let Some(slider) = el.dyn_ref::<web::HtmlInputElement>() {
                slider.set_value(&value);
            }
        }
        dom::set_text(document, &labels::readout_id(planet.key()), &value);
    }
}

pub fn wire_buttons(document: &web::Document, sim: &Rc<RefCell<SolarSim>>) {
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_click_listener(document, PAUSE_BTN_ID, move || {
            let paused = {
                let mut s = sim.borrow_mut();
                s.apply(Command::TogglePause);
                s.paused
            };
            dom::set_text(&doc, PAUSE_BTN_ID, labels::pause_button_label(paused));
        });
    }
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_click_listener(document, RESET_BTN_ID, move || {
            sim.borrow_mut().apply(Command::Reset);
            sync_controls(&doc, &sim.borrow());
        });
    }
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_click_listener(document, THEME_BTN_ID, move || {
            let light = {
                let mut s = sim.borrow_mut();
                s.apply(Command::ToggleTheme);
                s.light_theme
            };
            if let Some(body) = doc.body() {
                let classes = body.class_list();
                let _ = if light {
                    classes.add_1(LIGHT_THEME_CLASS)
                } else {
                    classes.remove_1(LIGHT_THEME_CLASS)
                };
            }
            dom::set_text(&doc, THEME_BTN_ID, labels::theme_button_label(light));
        });
    }
}
