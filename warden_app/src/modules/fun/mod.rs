use super::prelude::*;

mod slashies;

pub struct Module;

impl super::Module for Module {
    fn enabled(&self, _config: &WBotConfig) -> bool {
        true
    }

    fn commands(&self, _config: &WBotConfig) -> Vec<WCommand> {
        vec![slashies::inspiro(), slashies::meme(), slashies::tft()]
    }
}
