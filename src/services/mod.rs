// StartPage services
// Services provide supporting functionality: id generation, search URLs, settings, localization.

pub mod id_generator;
pub mod localization_engine;
pub mod search_engine;
pub mod settings_engine;
