use engine_logging::{engine_debug, engine_info, engine_warn};
use headlines_core::{Article, Effect, FetchOutcome, FetchRequest, Msg};
use headlines_engine::{ArticleRecord, EngineEvent, EngineHandle, HeadlinesQuery};

/// Receives article urls activated by the user.
pub trait Navigator {
    fn open(&mut self, url: &str);
}

/// Executes core effects: fetches go to the engine, selections to the navigator.
pub struct EffectRunner<N> {
    engine: EngineHandle,
    navigator: N,
}

impl<N: Navigator> EffectRunner<N> {
    pub fn new(engine: EngineHandle, navigator: N) -> Self {
        Self { engine, navigator }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch {
                    request_id,
                    request,
                } => {
                    engine_info!(
                        "Fetch request_id={} country={} page={} page_size={}",
                        request_id,
                        request.country,
                        request.page,
                        request.page_size
                    );
                    self.engine.fetch(request_id, to_query(request));
                }
                Effect::OpenArticle { url } => {
                    engine_info!("OpenArticle url={}", url);
                    self.navigator.open(&url);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Drains finished fetches as core messages.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }
}

fn to_query(request: FetchRequest) -> HeadlinesQuery {
    HeadlinesQuery {
        country: request.country,
        page: request.page,
        page_size: request.page_size,
    }
}

/// Normalizes every engine failure into `FetchOutcome::Failure`; the core does not
/// distinguish failure kinds.
pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { request_id, result } => {
            let outcome = match result {
                Ok(page) => {
                    engine_debug!(
                        "Fetch {} done: {} articles of {}",
                        request_id,
                        page.articles.len(),
                        page.total_results
                    );
                    FetchOutcome::Success {
                        articles: page.articles.into_iter().map(to_article).collect(),
                        total_results: page.total_results,
                    }
                }
                Err(err) => {
                    engine_warn!("Fetch {} failed: {}", request_id, err);
                    FetchOutcome::Failure {
                        reason: err.to_string(),
                    }
                }
            };
            Msg::FetchDone {
                request_id,
                outcome,
            }
        }
    }
}

fn to_article(record: ArticleRecord) -> Article {
    Article {
        title: record.title,
        url: record.url,
        image_url: record.image_url,
        source_name: record.source_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headlines_engine::{FailureKind, FetchError, HeadlinesPage};

    #[test]
    fn successful_page_becomes_success_outcome() {
        let msg = event_to_msg(EngineEvent::FetchCompleted {
            request_id: 4,
            result: Ok(HeadlinesPage {
                articles: vec![ArticleRecord {
                    title: "T".to_string(),
                    url: "https://news.example.com/t".to_string(),
                    image_url: None,
                    source_name: Some("Wire".to_string()),
                }],
                total_results: 12,
            }),
        });

        assert_eq!(
            msg,
            Msg::FetchDone {
                request_id: 4,
                outcome: FetchOutcome::Success {
                    articles: vec![Article {
                        title: "T".to_string(),
                        url: "https://news.example.com/t".to_string(),
                        image_url: None,
                        source_name: Some("Wire".to_string()),
                    }],
                    total_results: 12,
                },
            }
        );
    }

    #[test]
    fn every_failure_kind_becomes_failure_with_reason() {
        let msg = event_to_msg(EngineEvent::FetchCompleted {
            request_id: 9,
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(503),
                message: "503 Service Unavailable".to_string(),
            }),
        });

        assert_eq!(
            msg,
            Msg::FetchDone {
                request_id: 9,
                outcome: FetchOutcome::Failure {
                    reason: "http status 503: 503 Service Unavailable".to_string(),
                },
            }
        );
    }
}
