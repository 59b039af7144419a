use std::{mem, time::Duration};

use tileslide_core::{Difficulty, Direction};

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, Clone)]
pub(crate) enum Action {
    PressTile(usize),
    Slide(Direction),
    SetDifficulty(Difficulty),
    NewGame,
    RequestHint,
    ClearBestScores,
    UpdateSettings(Settings),
    Tick(Duration),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
