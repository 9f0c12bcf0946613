pub mod list;
pub mod start;
pub mod stations;
pub mod subscribe;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Seat Alert Bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot and open the subscription form")]
    Start,
    #[command(rename = "from", description = "Suggest stations matching a name, e.g. /from Mosc")]
    Stations { prefix: String },
    #[command(description = "Subscribe: /subscribe origin, destination, date, place type")]
    Subscribe { args: String },
    #[command(description = "Show your subscriptions")]
    List,
}
