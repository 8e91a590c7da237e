//! Loads both overlay feeds into a [`MapContext`].
//!
//! The two requests run concurrently and each result is applied as soon as it
//! arrives, in whatever order they complete. A feed that fails to download or
//! parse is logged and its layer simply stays empty.

use crate::{
    core::{
        config::FeedConfig,
        context::{MapContext, OverlayKind},
    },
    data::feed::FeedClient,
    Error,
};
use futures::stream::{FuturesUnordered, StreamExt};

/// What happened to one overlay feed
#[derive(Debug)]
pub enum FeedOutcome {
    /// Feed applied; the layer now holds this many features
    Loaded(usize),
    Failed(Error),
}

impl FeedOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FeedOutcome::Loaded(_))
    }
}

/// Per-overlay results of one loading pass, in completion order
#[derive(Debug, Default)]
pub struct LoadReport {
    pub outcomes: Vec<(OverlayKind, FeedOutcome)>,
}

impl LoadReport {
    pub fn outcome(&self, kind: OverlayKind) -> Option<&FeedOutcome> {
        self.outcomes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| outcome)
    }

    pub fn all_loaded(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_loaded())
    }
}

pub struct OverlayLoader<C: FeedClient> {
    client: C,
    sources: Vec<(OverlayKind, String)>,
}

impl<C: FeedClient> OverlayLoader<C> {
    /// Loader for the earthquake and plate feeds named in `feeds`
    pub fn new(client: C, feeds: &FeedConfig) -> Self {
        Self {
            client,
            sources: vec![
                (OverlayKind::Earthquakes, feeds.earthquakes_url.clone()),
                (OverlayKind::TectonicPlates, feeds.plates_url.clone()),
            ],
        }
    }

    pub fn sources(&self) -> &[(OverlayKind, String)] {
        &self.sources
    }

    /// Fetches every source and applies each result to `context` as it
    /// completes.
    pub async fn load_into(&self, context: &mut MapContext) -> LoadReport {
        let mut pending: FuturesUnordered<_> = self
            .sources
            .iter()
            .map(|(kind, url)| async move { (*kind, url.as_str(), self.client.fetch(url).await) })
            .collect();

        let mut report = LoadReport::default();
        while let Some((kind, url, fetched)) = pending.next().await {
            let outcome = match fetched.and_then(|data| context.apply_feed(kind, &data)) {
                Ok(count) => FeedOutcome::Loaded(count),
                Err(e) => {
                    log::warn!("{} feed from {} not loaded: {}", kind, url, e);
                    FeedOutcome::Failed(e)
                }
            };
            report.outcomes.push((kind, outcome));
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::QuakeMapConfig;
    use crate::data::geojson::GeoJson;
    use crate::Result;
    use async_trait::async_trait;

    struct FailingClient;

    #[async_trait]
    impl FeedClient for FailingClient {
        async fn fetch(&self, url: &str) -> Result<GeoJson> {
            Err(Error::ParseError(format!("no data at {}", url)))
        }
    }

    #[tokio::test]
    async fn test_failed_feeds_leave_layers_empty() {
        let config = QuakeMapConfig::default();
        let mut context = MapContext::new(config.clone()).unwrap();
        let loader = OverlayLoader::new(FailingClient, &config.feeds);

        let report = loader.load_into(&mut context).await;

        assert_eq!(report.outcomes.len(), 2);
        assert!(!report.all_loaded());
        assert!(matches!(
            report.outcome(OverlayKind::Earthquakes),
            Some(FeedOutcome::Failed(_))
        ));
        assert!(context.earthquakes().unwrap().is_empty());
        assert!(context.plates().unwrap().is_empty());
    }

    #[test]
    fn test_sources_follow_config() {
        let feeds = FeedConfig {
            earthquakes_url: "http://localhost/q.json".to_string(),
            plates_url: "http://localhost/p.json".to_string(),
            ..FeedConfig::default()
        };
        let loader = OverlayLoader::new(FailingClient, &feeds);
        assert_eq!(
            loader.sources(),
            &[
                (OverlayKind::Earthquakes, "http://localhost/q.json".to_string()),
                (OverlayKind::TectonicPlates, "http://localhost/p.json".to_string()),
            ]
        );
    }
}
