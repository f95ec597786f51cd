use eframe::egui::{Align, Button, ComboBox, FontId, Key, RichText, TextEdit, Ui};

use crate::action::{Action, ActionRequestQueue};

const HISTORY_PLACEHOLDER: &str = "Search History";

/// Widget state that lives across frames but is not part of the lookup flow.
#[derive(Debug, Default)]
pub(crate) struct SearchPanelState {
    selected_history: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct SearchPanelViewModel<'a> {
    history: &'a [String],
    fetching: bool,
}

impl<'a> SearchPanelViewModel<'a> {
    pub(crate) fn new(history: &'a [String], fetching: bool) -> Self {
        Self { history, fetching }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &SearchPanelViewModel<'_>,
    input: &mut String,
    state: &mut SearchPanelState,
    action_queue: &mut ActionRequestQueue,
) {
    let width = ui.available_width().min(420.0);

    ui.label(RichText::new("Enter city name:").size(40.0).italics());

    let response = ui.add_enabled(
        !vm.fetching,
        TextEdit::singleline(input)
            .font(FontId::proportional(40.0))
            .horizontal_align(Align::Center)
            .desired_width(width),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
        request_submit(state, action_queue);
    }

    ui.add_space(8.0);
    ComboBox::from_id_salt("search_history")
        .width(width)
        .selected_text(state.selected_history.as_deref().unwrap_or(HISTORY_PLACEHOLDER))
        .show_ui(ui, |ui| {
            for city in vm.history {
                let clicked = ui
                    .selectable_value(
                        &mut state.selected_history,
                        Some(city.clone()),
                        city.as_str(),
                    )
                    .clicked();
                if clicked {
                    action_queue.request(Action::SelectHistory(city.clone()));
                }
            }
        });

    ui.add_space(8.0);
    let button = Button::new(RichText::new("Get Weather").size(30.0).strong());
    if ui.add_enabled(!vm.fetching, button).clicked() {
        request_submit(state, action_queue);
    }
}

/// A typed submission no longer matches the picked entry, so the selector
/// falls back to its placeholder.
fn request_submit(state: &mut SearchPanelState, action_queue: &mut ActionRequestQueue) {
    state.selected_history = None;
    action_queue.request(Action::Submit);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_resets_history_selection() {
        let mut state = SearchPanelState {
            selected_history: Some("Pune".into()),
        };
        let mut queue = ActionRequestQueue::default();

        request_submit(&mut state, &mut queue);

        assert_eq!(state.selected_history, None);
        assert_eq!(queue.take_all(), [Action::Submit]);
    }
}
