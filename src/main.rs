mod cli;
mod config;
mod http;
mod logger;
mod storage;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use storage::StorageClient;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let cli = Cli::parse();
    let config = Config::load().await.context("Cannot load config file")?;

    run(cli, StorageClient::new(config)).await
}

async fn run(cli: Cli, client: StorageClient) -> Result<()> {
    if cli.upload {
        if cli.src.is_empty() {
            log::error!("src parameter is missing");
            return Ok(());
        }

        log::info!("Uploading");
        let uploaded = client
            .upload(&cli.src, &cli.dst, &cli.message, None)
            .await
            .context("Cannot upload the file")?;
        log::info!("Uploaded {}", uploaded.content.path);
    } else if cli.retrieve && cli.dst.is_empty() {
        log::info!("Retrieving");
        let files = client
            .retrieve_files()
            .await
            .context("Cannot list the storage folder")?;
        for file in files {
            log::info!("{}", file.name);
        }
        log::info!("Retrieved");
    } else {
        if cli.dst.is_empty() {
            log::error!("dst parameter is missing");
            return Ok(());
        }

        // every mutation commits against the sha fetched here
        let Some(file) = client
            .retrieve_file(&cli.dst)
            .await
            .context("Cannot retrieve the file")?
        else {
            log::warn!("File not found {}", cli.dst);
            return Ok(());
        };

        if cli.retrieve {
            log::info!("Retrieving");
            let content = file
                .decoded_content()
                .context("Cannot decode the file content")?;
            log::info!("{}", content);
            log::info!("Retrieved");
        } else if cli.delete {
            log::info!("Deleting");
            let response = client
                .delete_file(&cli.dst, &file.sha, &cli.message)
                .await
                .context("Cannot delete the file")?;
            log::info!("Deleted {}", response);
        } else if cli.update {
            if cli.src.is_empty() {
                log::error!("src parameter is missing");
                return Ok(());
            }

            log::info!("Updating");
            let uploaded = client
                .upload(&cli.src, &cli.dst, &cli.message, Some(file.sha))
                .await
                .context("Cannot update the file")?;
            log::info!("Updated {}", uploaded.content.path);
        } else {
            log::error!("Wrong parameters");
        }
    }

    Ok(())
}
