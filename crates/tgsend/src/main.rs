mod cli;

use std::{fs::File, path::Path, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tgsend_core::{
    api::{
        ApiRequest, GetMeRequest, SendFileRequest, SendLocationRequest, SendMessageRequest,
        SendPollRequest,
    },
    config::Config,
    domain::{ChatId, MediaType},
    session::BotSession,
};
use tgsend_http::HttpTransport;

use crate::cli::{BotCommand, Cli, Command, FileArgs, SendCommand};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tgsend_core::logging::init("tgsend");

    let cfg = Config::load(cli.token)?;
    let transport = Arc::new(HttpTransport::new(cfg.request_timeout)?);

    let mut session = BotSession::new(cfg.bot_token)?.with_api_root(cfg.api_root);
    session.mount("https", transport.clone());
    session.mount("http", transport);

    match cli.command {
        Command::Bot(bot) => match bot.command {
            BotCommand::Auth => {
                let identity = GetMeRequest::new(&session).execute().await?;
                println!("{identity:#}");
            }
            BotCommand::Send(send) => {
                let chat_id = ChatId(send.receiver);
                let result = match send.command {
                    SendCommand::Message { text } => {
                        info!("sending message");
                        SendMessageRequest::new(&session, chat_id, text)?
                            .execute()
                            .await?
                    }
                    SendCommand::Document(args) => {
                        send_file(&session, chat_id, &args, MediaType::Document).await?
                    }
                    SendCommand::Photo(args) => {
                        send_file(&session, chat_id, &args, MediaType::Photo).await?
                    }
                    SendCommand::Video(args) => {
                        send_file(&session, chat_id, &args, MediaType::Video).await?
                    }
                    SendCommand::Audio(args) => {
                        send_file(&session, chat_id, &args, MediaType::Audio).await?
                    }
                    SendCommand::Poll { question, options } => {
                        info!("sending poll");
                        SendPollRequest::new(&session, chat_id, question, options)?
                            .execute()
                            .await?
                    }
                    SendCommand::Location {
                        latitude,
                        longitude,
                    } => {
                        info!("sending location");
                        SendLocationRequest::new(&session, chat_id, latitude, longitude)
                            .execute()
                            .await?
                    }
                };
                if let Some(message_id) = result.get("message_id") {
                    info!(%message_id, "sent");
                }
            }
        },
    }

    Ok(())
}

async fn send_file(
    session: &BotSession,
    chat_id: ChatId,
    args: &FileArgs,
    media_type: MediaType,
) -> Result<serde_json::Value> {
    info!(file = %args.file.display(), ?media_type, "sending file");

    let file = File::open(&args.file)
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    let request = SendFileRequest::new(session, chat_id, &file, args.message.clone(), media_type)
        .with_file_name(display_name(&args.file));
    let result = request.execute().await?;
    Ok(result)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string())
}
