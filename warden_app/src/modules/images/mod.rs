use super::prelude::*;

mod slashies;

pub struct Module;

impl super::Module for Module {
    fn enabled(&self, config: &WBotConfig) -> bool {
        let credentials = &config.credentials;
        credentials.image_search_key.is_some() || credentials.giphy_key.is_some()
    }

    fn commands(&self, config: &WBotConfig) -> Vec<WCommand> {
        let credentials = &config.credentials;
        let mut commands = Vec::new();

        if credentials.image_search_key.is_some() {
            commands.push(slashies::bird());
            commands.push(slashies::bunny());
        }

        if credentials.giphy_key.is_some() {
            commands.push(slashies::cuddle());
        }

        commands
    }

    fn validate(&self, config: &WBotConfig) -> WResult {
        log::info!(
            "Images are enabled: {} command(s)",
            self.commands(config).len()
        );
        Ok(())
    }
}
