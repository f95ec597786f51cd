use eframe::egui::{Align, Layout, Ui};

use crate::{action::ActionRequestQueue, controller::WeatherLabels};

pub(crate) mod search_panel;
pub(crate) mod weather_view;

#[derive(Debug, Clone)]
pub(crate) struct WeatherScreenViewModel<'a> {
    history: &'a [String],
    fetching: bool,
    labels: &'a WeatherLabels,
}

impl<'a> WeatherScreenViewModel<'a> {
    pub(crate) fn new(history: &'a [String], fetching: bool, labels: &'a WeatherLabels) -> Self {
        Self { history, fetching, labels }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &WeatherScreenViewModel<'_>,
    input: &mut String,
    panel_state: &mut search_panel::SearchPanelState,
    action_queue: &mut ActionRequestQueue,
) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        let panel_vm = search_panel::SearchPanelViewModel::new(vm.history, vm.fetching);
        search_panel::show(ui, &panel_vm, input, panel_state, action_queue);

        ui.add_space(16.0);
        weather_view::show(ui, vm.labels);
    });
}
