// src/gui/components/card_grid.rs
//
// Draws the results area: a grid of animated cards, or the no-results
// and error messages in its place. Card transforms (offset, scale,
// opacity) come from motion state ticked in App::update; this
// component only reads values and reports hover edges.

use eframe::egui::{
    self, Align, Layout, Pos2, Rect, RichText, Sense, Stroke, StrokeKind, UiBuilder, Vec2,
};

use crate::{
    config::consts::{CARD_GAP, CARD_HEIGHT, CARD_WIDTH, MSG_FETCH_ERROR, MSG_NO_RESULTS},
    gui::app::{App, CardSlot, ResultsView},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let hover_armed = app.hover_armed();

    match &mut app.view {
        ResultsView::Blank => {}
        ResultsView::NoResults => {
            center_message(ui, RichText::new(MSG_NO_RESULTS));
        }
        ResultsView::Failed => {
            let color = ui.visuals().error_fg_color;
            center_message(ui, RichText::new(MSG_FETCH_ERROR).color(color));
        }
        ResultsView::Cards(slots) => grid(ui, slots, hover_armed),
    }
}

fn center_message(ui: &mut egui::Ui, text: RichText) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(text.size(15.0));
    });
}

fn grid(ui: &mut egui::Ui, slots: &mut [CardSlot], hover_armed: bool) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let avail = ui.available_width();
            let cols = (((avail + CARD_GAP) / (CARD_WIDTH + CARD_GAP)) as usize).max(1);
            let rows = slots.len().div_ceil(cols);

            // Reserve layout space for the grid at rest; the transforms
            // below are purely visual and never move layout.
            let origin = ui.cursor().min;
            ui.allocate_space(Vec2::new(
                avail,
                rows as f32 * (CARD_HEIGHT + CARD_GAP),
            ));

            for (i, slot) in slots.iter_mut().enumerate() {
                let home = Rect::from_min_size(
                    Pos2::new(
                        origin.x + (i % cols) as f32 * (CARD_WIDTH + CARD_GAP),
                        origin.y + (i / cols) as f32 * (CARD_HEIGHT + CARD_GAP),
                    ),
                    Vec2::new(CARD_WIDTH, CARD_HEIGHT),
                );
                card(ui, slot, home, i, hover_armed);
            }
        });
}

fn card(ui: &mut egui::Ui, slot: &mut CardSlot, home: Rect, index: usize, hover_armed: bool) {
    let opacity = slot.motion.opacity();
    if opacity <= 0.0 {
        return; // still waiting out its stagger window
    }

    // Entrance offset shifts the card down; scale works about the
    // center, like a CSS transform.
    let center = home.center() + Vec2::new(0.0, slot.motion.offset_y());
    let visual = Rect::from_center_size(center, home.size() * slot.motion.scale());

    let resp = ui.interact(visual, ui.id().with("card").with(index), Sense::hover());
    if hover_armed {
        slot.motion.set_hovered(resp.hovered());
    }

    // Chrome fades in with the content.
    let visuals = ui.visuals();
    let fill = visuals.extreme_bg_color.linear_multiply(opacity);
    let border = if hover_armed && resp.hovered() {
        visuals.widgets.hovered.bg_stroke
    } else {
        visuals.widgets.noninteractive.bg_stroke
    };
    let painter = ui.painter();
    painter.rect_filled(visual, 6.0, fill);
    painter.rect_stroke(
        visual,
        6.0,
        Stroke::new(border.width, border.color.linear_multiply(opacity)),
        StrokeKind::Inside,
    );

    let mut content = ui.new_child(
        UiBuilder::new()
            .id_salt(("card_body", index))
            .max_rect(visual.shrink(10.0))
            .layout(Layout::top_down(Align::Min)),
    );
    content.set_clip_rect(visual.intersect(ui.clip_rect()));
    content.set_opacity(opacity);

    content.label(RichText::new(&slot.card.title).strong().size(16.0));
    content.label(
        RichText::new(&slot.card.category)
            .small()
            .background_color(content.visuals().faint_bg_color),
    );
    content.add_space(4.0);
    content.label(format!("📍 {}", slot.card.location));
    if let Some(street) = &slot.card.street {
        content.label(format!("🏠 {street}"));
    }
    if let Some(phone) = &slot.card.phone {
        content.label(format!("📞 {phone}"));
    }
    if let Some(url) = &slot.card.website {
        content.horizontal(|ui| {
            ui.label("🌐");
            ui.hyperlink_to("Website", url);
        });
    }
}
