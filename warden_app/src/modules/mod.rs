use serenity::prelude::*;

use crate::prelude::*;

pub mod admin;
pub mod fun;
pub mod images;
pub mod queries;
pub mod stats;
pub mod voice_log;

mod prelude {
    pub use serenity::prelude::*;

    pub use super::Module as _;
    pub use crate::config::WBotConfig;
    pub use crate::prelude::*;
}

/// Run an expression against every module.
///
/// Syntax is:
///
/// ```ignore
/// for_each_module!(&config, |m| do_stuff(m));
/// ```
macro_rules! for_each_module {
    (@inner $module:expr, $config:expr, |$var:ident| $body:expr) => {{
        let $var = $module;
        if $crate::modules::Module::enabled(&$var, $config) {
            $body
        }
    }};
    ($config:expr, |$var:ident| $body:expr) => {{
        $crate::modules::for_each_module!(@inner $crate::modules::images::Module, $config, |$var| $body);
        $crate::modules::for_each_module!(@inner $crate::modules::fun::Module, $config, |$var| $body);
        $crate::modules::for_each_module!(@inner $crate::modules::stats::Module, $config, |$var| $body);
        $crate::modules::for_each_module!(@inner $crate::modules::queries::Module, $config, |$var| $body);
        $crate::modules::for_each_module!(@inner $crate::modules::admin::Module, $config, |$var| $body);
        $crate::modules::for_each_module!(@inner $crate::modules::voice_log::Module, $config, |$var| $body);
    }};
}

pub(crate) use for_each_module;

pub trait Module: Sized {
    /// Whether the module is enabled.
    fn enabled(&self, config: &config::WBotConfig) -> bool;

    /// The intents needed.
    fn intents(&self, config: &config::WBotConfig) -> GatewayIntents {
        _ = config;
        GatewayIntents::empty()
    }

    /// Commands for this module.
    fn commands(&self, config: &config::WBotConfig) -> Vec<WCommand> {
        _ = config;
        Vec::new()
    }

    /// Validates that the config is good.
    fn validate(&self, config: &config::WBotConfig) -> WResult {
        _ = config;
        Ok(())
    }

    /// Initializes the module's database collections.
    async fn db_init(&self, db: &mongodb::Database) -> WResult {
        _ = db;
        Ok(())
    }
}
