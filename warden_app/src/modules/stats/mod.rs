use super::prelude::*;

mod slashies;

pub struct Module;

impl super::Module for Module {
    fn enabled(&self, config: &WBotConfig) -> bool {
        config.credentials.r6stats_key.is_some()
    }

    fn commands(&self, _config: &WBotConfig) -> Vec<WCommand> {
        vec![slashies::rainbow6()]
    }

    fn validate(&self, _config: &WBotConfig) -> WResult {
        log::info!("Player stats are enabled.");
        Ok(())
    }
}
