use eframe::egui::{Label, RichText, Spinner, Ui};

use crate::controller::WeatherLabels;

const TEMPERATURE_SIZE: f32 = 75.0;
const MESSAGE_SIZE: f32 = 30.0;
const GLYPH_SIZE: f32 = 100.0;
const DESCRIPTION_SIZE: f32 = 50.0;

pub(crate) fn show(ui: &mut Ui, labels: &WeatherLabels) {
    let temperature_size = if labels.is_error { MESSAGE_SIZE } else { TEMPERATURE_SIZE };
    ui.add(Label::new(RichText::new(&labels.temperature).size(temperature_size)).wrap());

    if !labels.glyph.is_empty() {
        ui.label(RichText::new(labels.glyph).size(GLYPH_SIZE));
    }

    if !labels.description.is_empty() {
        let response =
            ui.add(Label::new(RichText::new(&labels.description).size(DESCRIPTION_SIZE)).wrap());
        if let Some(observed_at) = &labels.observed_at {
            response.on_hover_text(format!("Observed {observed_at}"));
        }
    }

    if !labels.status.is_empty() {
        ui.horizontal(|ui| {
            ui.add(Spinner::new());
            ui.label(labels.status);
        });
    }
}
