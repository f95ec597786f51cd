use std::sync::Arc;

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use weather_core::FetchWorker;

use crate::{
    action::ActionRequestQueue,
    controller::WeatherController,
    ui::{self, WeatherScreenViewModel, search_panel::SearchPanelState},
};

#[derive(Debug)]
pub struct WeatherApp {
    controller: WeatherController,
    search_panel: SearchPanelState,
}

impl WeatherApp {
    pub fn new(cc: &CreationContext<'_>, worker: FetchWorker, country_code: String) -> Self {
        let ctx = cc.egui_ctx.clone();
        let worker = worker.with_notifier(Arc::new(move || ctx.request_repaint()));

        Self {
            controller: WeatherController::new(worker, country_code),
            search_panel: SearchPanelState::default(),
        }
    }

    fn handle_all(&mut self, action_queue: &mut ActionRequestQueue) {
        for action in action_queue.take_all() {
            self.controller.handle(action);
        }
    }
}

impl App for WeatherApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.controller.poll();

        let labels = self.controller.labels();
        let history = self.controller.history().to_vec();
        let vm = WeatherScreenViewModel::new(&history, self.controller.is_fetching(), &labels);

        CentralPanel::default().show(ctx, |ui| {
            ui::show(
                ui,
                &vm,
                &mut self.controller.input,
                &mut self.search_panel,
                &mut action_queue,
            );
        });

        self.handle_all(&mut action_queue);
    }
}
