use chrono::{Duration, Utc};
use meteomatics::{Coordinates, DateRange, MeteomaticsClient, MeteomaticsError};

#[tokio::main]
async fn main() -> Result<(), MeteomaticsError> {
    env_logger::init();

    let today = Utc::now().date_naive();
    let client = MeteomaticsClient::from_env(
        Coordinates::new(46.5547, 7.3785),
        DateRange::new(today, today + Duration::days(2)),
    )?;

    for outcome in client.all_settled(2000).await {
        match outcome.result {
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                println!("{} [{}]: {}", outcome.metric.name(), status, body);
            }
            Err(e) => println!("{} failed: {}", outcome.metric.name(), e),
        }
    }

    Ok(())
}
