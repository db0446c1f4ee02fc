//! Scripted input for headless runs
//!
//! Replays the `controls` list of a scenario file: every entry fires at the
//! start of its tick, entries for the same tick in file order.

use crate::configuration::config::ControlConfig;
use crate::simulation::control::InputEvent;

use super::frame_loop::InputSource;

#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<(u64, InputEvent)>, // sorted by tick, stable
    next: usize,
}

impl ScriptedInput {
    pub fn new(mut script: Vec<(u64, InputEvent)>) -> Self {
        script.sort_by_key(|(tick, _)| *tick);
        Self { script, next: 0 }
    }

    pub fn from_config(controls: &[ControlConfig]) -> Self {
        Self::new(controls.iter().map(|c| (c.tick, c.action.into())).collect())
    }

    /// Events not yet delivered
    pub fn remaining(&self) -> usize {
        self.script.len() - self.next
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, tick: u64, events: &mut Vec<InputEvent>) {
        // entries scheduled for a tick that already passed are delivered late
        // rather than dropped
        while let Some(&(at, event)) = self.script.get(self.next) {
            if at > tick {
                break;
            }
            events.push(event);
            self.next += 1;
        }
    }
}
