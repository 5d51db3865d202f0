use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::config::Config;
use crate::handlers::{help, start};

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "show the main menu.")]
    Start,
    #[command(description = "display this text.")]
    Help,
}

impl Command {
    pub async fn dispatch(self, bot: Bot, msg: Message, cfg: Config) -> Result<()> {
        match self {
            Command::Start => start(bot, msg, cfg).await?,
            Command::Help => help(bot, msg).await?,
        }
        Ok(())
    }
}
