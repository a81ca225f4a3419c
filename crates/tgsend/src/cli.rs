use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tgsend")]
#[command(about = "Send messages and files through the Telegram Bot API")]
pub struct Cli {
    /// Bot token (falls back to TELEGRAM_BOT_TOKEN)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Operations for bots
    Bot(BotArgs),
}

#[derive(Args)]
pub struct BotArgs {
    #[command(subcommand)]
    pub command: BotCommand,
}

#[derive(Subcommand)]
pub enum BotCommand {
    /// Check that the token is valid and print the bot's identity
    Auth,
    /// Sending operations
    Send(SendArgs),
}

#[derive(Args)]
pub struct SendArgs {
    /// Chat id of the receiver
    #[arg(short = 'r', long)]
    pub receiver: i64,

    #[command(subcommand)]
    pub command: SendCommand,
}

#[derive(Subcommand)]
pub enum SendCommand {
    /// Send a text message
    Message {
        /// The message to send
        text: String,
    },
    /// Send a file as a document
    Document(FileArgs),
    /// Send a photo
    Photo(FileArgs),
    /// Send a video
    Video(FileArgs),
    /// Send an audio file
    Audio(FileArgs),
    /// Send a poll
    Poll {
        /// The question to ask
        question: String,

        /// An answer option (repeat 2 to 10 times)
        #[arg(short = 'o', long = "option")]
        options: Vec<String>,
    },
    /// Send a location
    Location {
        /// Latitude of the location
        #[arg(short = 'x', long, allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude of the location
        #[arg(short = 'y', long, allow_negative_numbers = true)]
        longitude: f64,
    },
}

#[derive(Args, Clone)]
pub struct FileArgs {
    /// The file to upload
    pub file: PathBuf,

    /// Caption for the file
    #[arg(short = 'm', long, default_value = "")]
    pub message: String,
}
