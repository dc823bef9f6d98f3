//! Background acquisition.
//!
//! The worker runs facade calls on spawned tokio tasks and delivers results over
//! an `mpsc` channel, so a UI thread never waits on the network. Each call
//! returns the task's `JoinHandle`; aborting it cancels the acquisition.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

use fundpulse_market_data::RankKind;

use crate::market::client::FundDataClient;
use crate::market::model::AcquisitionEvent;

const RANK_KINDS: [RankKind; 3] = [RankKind::DayGain, RankKind::DayLoss, RankKind::InflowGrowth];

#[derive(Clone)]
pub struct AcquisitionWorker {
    client: Arc<FundDataClient>,
    events: mpsc::Sender<AcquisitionEvent>,
}

impl AcquisitionWorker {
    pub fn new(client: Arc<FundDataClient>, events: mpsc::Sender<AcquisitionEvent>) -> Self {
        Self { client, events }
    }

    /// Creates a worker together with the receiving end of its event channel.
    pub fn channel(
        client: Arc<FundDataClient>,
        buffer: usize,
    ) -> (Self, mpsc::Receiver<AcquisitionEvent>) {
        let (sender, receiver) = mpsc::channel(buffer);
        (Self::new(client, sender), receiver)
    }

    /// Fetches the index board, sentiment and all three leaderboards.
    pub fn refresh_market(&self) -> JoinHandle<()> {
        let worker = self.clone();
        tokio::spawn(async move {
            worker.run_market_refresh().await;
        })
    }

    /// Fetches overviews and estimates for the given funds.
    pub fn refresh_funds(&self, codes: Vec<String>) -> JoinHandle<()> {
        let worker = self.clone();
        tokio::spawn(async move {
            worker.run_fund_refresh(&codes).await;
        })
    }

    /// Refreshes the market on a fixed period until the receiver is dropped.
    ///
    /// The first refresh runs immediately.
    pub fn spawn_periodic(&self, period: Duration) -> JoinHandle<()> {
        let worker = self.clone();
        tokio::spawn(async move {
            info!("Market refresh scheduler started ({:?} interval)", period);
            let mut ticker = interval(period);

            loop {
                ticker.tick().await;
                if !worker.run_market_refresh().await {
                    info!("Event receiver dropped, stopping market refresh scheduler");
                    break;
                }
            }
        })
    }

    /// Returns false once the receiver is gone.
    async fn run_market_refresh(&self) -> bool {
        let indices = self.client.get_indices().await;
        if !self.send(AcquisitionEvent::Indices(indices)).await {
            return false;
        }

        let sentiment = self.client.get_sentiment().await;
        if !self.send(AcquisitionEvent::Sentiment(sentiment)).await {
            return false;
        }

        for kind in RANK_KINDS {
            let entries = self.client.get_rank(kind).await;
            if !self.send(AcquisitionEvent::Rank { kind, entries }).await {
                return false;
            }
        }
        true
    }

    async fn run_fund_refresh(&self, codes: &[String]) -> bool {
        let overviews = self.client.get_fund_overviews(codes).await;
        if !self.send(AcquisitionEvent::FundOverviews(overviews)).await {
            return false;
        }

        for code in codes {
            let value = self.client.estimate_profit(code).await;
            let event = AcquisitionEvent::Estimate {
                code: code.clone(),
                value,
            };
            if !self.send(event).await {
                return false;
            }
        }
        true
    }

    async fn send(&self, event: AcquisitionEvent) -> bool {
        match self.events.send(event).await {
            Ok(()) => true,
            Err(_) => {
                debug!("Acquisition event dropped: receiver closed");
                false
            }
        }
    }
}
