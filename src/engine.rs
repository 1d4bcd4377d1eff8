// Runs analysis and topic modeling on tokio's blocking pool so an async caller
// never stalls for the full computation. The work itself is synchronous and
// cannot be interrupted mid-run; aborting or timing out only detaches it.
use tokio::task::{self, JoinError, JoinHandle};

use crate::error::{EngineError, Result};
use crate::nlp::lda::{run_topic_model, LdaConfig, TopicReport};
use crate::report::{analyze, AnalysisReport};

pub fn spawn_analysis(text: String) -> JoinHandle<AnalysisReport> {
    task::spawn_blocking(move || analyze(&text))
}

pub fn spawn_topic_model(text: String, config: LdaConfig) -> JoinHandle<Result<TopicReport>> {
    task::spawn_blocking(move || run_topic_model(&text, &config))
}

pub async fn analyze_async(text: String) -> Result<AnalysisReport> {
    spawn_analysis(text).await.map_err(interrupted)
}

pub async fn topic_model_async(text: String, config: LdaConfig) -> Result<TopicReport> {
    // Reject bad parameters before occupying a blocking thread.
    config.validate()?;
    spawn_topic_model(text, config).await.map_err(interrupted)?
}

fn interrupted(err: JoinError) -> EngineError {
    if err.is_cancelled() {
        EngineError::Interrupted("task was cancelled".into())
    } else {
        EngineError::Interrupted(err.to_string())
    }
}
