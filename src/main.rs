use anyhow::{Context, Result};
use review_balancer::config::Config;
use review_balancer::github_client::GithubClient;
use review_balancer::refresh::{handle_result, Refresher};
use review_balancer::snapshot::SnapshotStore;
use review_balancer::{logging, render};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;
    logging::init(config.log_level);

    let client = GithubClient::new(&config.token, &config.graphql_url, &config.owner, &config.name)
        .context("Failed to build GitHub client")?;
    let (refresher, mut results) = Refresher::new(client);
    let mut store = SnapshotStore::default();

    println!(
        "Watching {}/{} every {}s. Press Enter to refresh, 'q' then Enter to quit.",
        config.owner,
        config.name,
        config.refresh_interval.as_secs()
    );

    let mut ticker = time::interval(config.refresh_interval);
    ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
    let mut stdin = Some(BufReader::new(tokio::io::stdin()).lines());

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresher.spawn_cycle();
            }
            line = async { stdin.as_mut()?.next_line().await.transpose() }, if stdin.is_some() => {
                match line {
                    Some(Ok(input)) if input.trim().eq_ignore_ascii_case("q") => break,
                    Some(Ok(_)) => {
                        refresher.spawn_cycle();
                    }
                    Some(Err(e)) => {
                        log::warn!("Stopped reading stdin: {}", e);
                        stdin = None;
                    }
                    None => stdin = None,
                }
            }
            Some(result) = results.recv() => {
                if let Some(snapshot) = handle_result(&mut store, result) {
                    print!("{}", render::reviewer_table(&snapshot));
                }
            }
        }
    }

    Ok(())
}
