//! Tileslide application shell.
//!
//! # Design Notes
//! - One board in the central panel, game info and controls in a right sidebar.
//! - Mouse input presses tiles; arrow keys slide them.
//! - All state changes go through the action queue so UI code never mutates
//!   state directly.
//! - Settings and best scores are persisted through eframe storage. The session
//!   itself is not, so a restart always begins with a fresh board.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, SidePanel},
};
use tileslide_game::MemoryScoreStore;

use crate::{
    action::{self, Action, ActionRequestQueue},
    persistence::storage,
    state::{AppState, Settings, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct TileslideApp {
    app_state: AppState,
    ui_state: UiState,
}

impl TileslideApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let app_state = if let Some(storage) = cc.storage {
            storage::load_state(storage)
        } else {
            log::warn!("persistent storage unavailable, best scores will not be kept");
            AppState::new(Settings::default(), MemoryScoreStore::new())
        };
        Self {
            app_state,
            ui_state: UiState::new(),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }

    // The timer advances by wall-clock time between frames while playing, and
    // a repaint is scheduled for the next whole second so the display keeps up.
    fn advance_timer(&mut self, ctx: &Context, action_queue: &mut ActionRequestQueue) {
        let game = &self.app_state.game;
        if !game.status().is_playing() {
            self.ui_state.last_tick = None;
            return;
        }

        let now = ctx.input(|i| i.time);
        if let Some(last) = self.ui_state.last_tick {
            let dt = (now - last).max(0.0);
            action_queue.request(Action::Tick(Duration::from_secs_f64(dt)));
        }
        self.ui_state.last_tick = Some(now);

        let until_next_second = 1.0 - game.elapsed().as_secs_f64().fract();
        ctx.request_repaint_after(Duration::from_secs_f64(until_next_second));
    }
}

impl App for TileslideApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| {
            ui::input::handle_input(i, &mut action_queue);
        });
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        self.advance_timer(ctx, &mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let sidebar_vm = view_model_builder::build_sidebar_view_model(&self.app_state);
        SidePanel::right("sidebar")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui::sidebar::show(ui, &sidebar_vm, &mut action_queue);
            });

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        // Again after UI input so the frame with the first move starts the clock.
        self.advance_timer(ctx, &mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.apply_persistence(frame);
    }
}
