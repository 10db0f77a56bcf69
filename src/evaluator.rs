//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::Criterion;
use crate::types::{PasswordEvaluation, PasswordScore};

/// Evaluates password strength against the five criteria.
///
/// Total over every input, the empty string included: it never fails and
/// has no side effects beyond optional debug tracing of the outcome.
///
/// # Returns
/// A `PasswordEvaluation` with one point per satisfied criterion and the
/// feedback for each unmet one, in criterion order.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let mut feedback = Vec::new();
    let mut met: u8 = 0;

    // Orchestrator: feedback follows Criterion::ALL order
    for criterion in Criterion::ALL {
        let section_fn = criterion.section();
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(criterion = %criterion, "criterion unmet");
                feedback.push(reason);
            }
            None => met += 1,
        }
    }

    let evaluation = PasswordEvaluation {
        score: PasswordScore::new(met),
        feedback,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score.value(),
        strength = %evaluation.strength(),
        "password evaluated"
    );

    evaluation
}

/// Debounced live evaluation: waits for the configured delay, then sends
/// the evaluation via channel unless `token` was cancelled first.
///
/// Hosts cancel the previous token on every keystroke so only the latest
/// input gets evaluated. The delay comes from [`crate::get_debounce_delay`].
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    let delay = crate::config::get_debounce_delay();
    evaluate_password_strength_debounced(password, delay, token, tx).await;
}

/// Same as [`evaluate_password_strength_tx`] with an explicit delay.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_debounced(
    password: &SecretString,
    delay: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before it ran");
            return;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
