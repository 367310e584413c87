// src/gui/components/filter_bar.rs
//
// Top toolbar: region/category selectors, Fetch and Animate, spinner
// plus status line. Selections write straight into app state; nothing
// fires until Fetch is clicked.

use eframe::egui::{self, ComboBox, widgets::Spinner};

use crate::{catalog, gui::actions, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        {
            let fetch_opts = &mut app.state.options.fetch;

            ComboBox::from_label("State")
                .selected_text(fetch_opts.region.as_deref().unwrap_or("All states"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut fetch_opts.region, None, "All states");
                    for name in catalog::REGIONS {
                        ui.selectable_value(&mut fetch_opts.region, Some(name.to_string()), name);
                    }
                });

            ComboBox::from_label("Type")
                .selected_text(fetch_opts.category.as_deref().unwrap_or("Any type"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut fetch_opts.category, None, "Any type");
                    for tag in catalog::CATEGORIES {
                        ui.selectable_value(&mut fetch_opts.category, Some(tag.to_string()), tag);
                    }
                });
        }

        ui.separator();

        // Stays clickable while a fetch runs; overlapping requests are
        // allowed and the newest generation wins.
        if ui.button("Fetch Breweries").clicked() {
            actions::fetch(app, ui.ctx());
        }

        if ui.button("Animate Cards").clicked() {
            actions::animate(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(status);
    });
}
