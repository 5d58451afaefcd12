//! Driver loop tests with a scripted backend and a scripted predictor.

use std::sync::Mutex;

use async_trait::async_trait;
use upitnik_types::{
    Answers, NumberQuestion, Prediction, Question, QuestionKind, Section, SelectQuestion,
};
use upitnik_wizard::{
    FALLBACK_ERROR_MESSAGE, FormWizard, PredictError, Predictor, ResultReply, SectionReply,
    TestBackend, WizardError, entries, run,
};

fn yes_no() -> QuestionKind {
    QuestionKind::Select(SelectQuestion::with_placeholder_option(["Da", "Ne"]))
}

fn wizard() -> FormWizard {
    FormWizard::new(vec![
        Section::new(vec![
            Question::new(
                "age",
                "Godine",
                QuestionKind::Number(NumberQuestion::with_bounds(1.0, 18.0)),
            ),
            Question::new("gender", "Spol", yes_no()),
        ]),
        Section::new(vec![Question::new("q1", "Izbjegava kontakt očima?", yes_no())]),
        Section::new(vec![Question::new("q2", "Voli igrati samo?", yes_no())]),
    ])
}

/// A predictor that replays scripted results and records what it was sent.
#[derive(Default)]
struct ScriptedPredictor {
    results: Mutex<Vec<Result<Prediction, PredictError>>>,
    received: Mutex<Vec<Answers>>,
}

impl ScriptedPredictor {
    fn returning(results: Vec<Result<Prediction, PredictError>>) -> Self {
        Self {
            results: Mutex::new(results),
            received: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Predictor for ScriptedPredictor {
    async fn predict(&self, answers: &Answers) -> Result<Prediction, PredictError> {
        self.received.lock().unwrap().push(answers.clone());
        self.results.lock().unwrap().remove(0)
    }
}

#[tokio::test]
async fn full_run_shows_formatted_probability() {
    let mut wizard = wizard();
    let mut backend = TestBackend::new()
        .then_section(SectionReply::forward(entries([
            ("age", "10"),
            ("gender", "Muško"),
        ])))
        .then_section(SectionReply::forward(entries([("q1", "Da")])))
        .then_section(SectionReply::forward(entries([("q2", "Ne")])))
        .then_result(ResultReply::Finish);
    let predictor =
        ScriptedPredictor::returning(vec![Ok(Prediction { probability: 73.456 })]);

    run(&mut wizard, &mut backend, &predictor).await.unwrap();

    assert_eq!(backend.presented_results().len(), 1);
    assert_eq!(backend.presented_results()[0].formatted(), "73.46%");
    assert!(backend.notified_errors().is_empty());

    // The predictor received one key per question across all sections.
    let sent = &predictor.received.lock().unwrap()[0];
    assert_eq!(sent.len(), 4);
    assert_eq!(sent.get("age"), Some("10"));
    assert_eq!(sent.get("q2"), Some("Ne"));
}

#[tokio::test]
async fn service_error_is_surfaced_verbatim_and_state_preserved() {
    let mut wizard = wizard();
    let mut backend = TestBackend::new()
        .then_section(SectionReply::forward(entries([
            ("age", "10"),
            ("gender", "Muško"),
        ])))
        .then_section(SectionReply::forward(entries([("q1", "Da")])))
        .then_section(SectionReply::forward(entries([("q2", "Ne")])))
        // Re-presented final section after the error; leave the wizard.
        .then_section(SectionReply::cancel());
    let predictor = ScriptedPredictor::returning(vec![Err(PredictError::Service(
        "Invalid input".to_string(),
    ))]);

    let outcome = run(&mut wizard, &mut backend, &predictor).await;
    assert!(matches!(outcome, Err(WizardError::Cancelled)));

    assert_eq!(backend.notified_errors(), ["Invalid input"]);
    assert!(backend.presented_results().is_empty());

    // Still on the final section with the answers intact for retry.
    let last = backend.presented_sections().last().unwrap();
    assert_eq!(last.index, 2);
    assert_eq!(wizard.answers().get("q2"), Some("Ne"));
}

#[tokio::test]
async fn transport_error_falls_back_to_generic_message() {
    let mut wizard = wizard();
    let mut backend = TestBackend::new()
        .then_section(SectionReply::forward(entries([
            ("age", "10"),
            ("gender", "Muško"),
        ])))
        .then_section(SectionReply::forward(entries([("q1", "Da")])))
        .then_section(SectionReply::forward(entries([("q2", "Ne")])))
        .then_section(SectionReply::cancel());
    let predictor = ScriptedPredictor::returning(vec![Err(PredictError::Transport(
        anyhow::anyhow!("connection refused"),
    ))]);

    let outcome = run(&mut wizard, &mut backend, &predictor).await;
    assert!(matches!(outcome, Err(WizardError::Cancelled)));
    assert_eq!(backend.notified_errors(), [FALLBACK_ERROR_MESSAGE]);
}

#[tokio::test]
async fn invalid_final_section_is_represented_without_predicting() {
    let mut wizard = wizard();
    let mut backend = TestBackend::new()
        .then_section(SectionReply::forward(entries([
            ("age", "10"),
            ("gender", "Muško"),
        ])))
        .then_section(SectionReply::forward(entries([("q1", "Da")])))
        // Placeholder left selected on the final section.
        .then_section(SectionReply::forward(entries([("q2", "")])))
        .then_section(SectionReply::cancel());
    let predictor = ScriptedPredictor::returning(vec![]);

    let outcome = run(&mut wizard, &mut backend, &predictor).await;
    assert!(matches!(outcome, Err(WizardError::Cancelled)));

    assert!(predictor.received.lock().unwrap().is_empty());
    let represented = backend.presented_sections().last().unwrap();
    assert_eq!(represented.index, 2);
    assert!(represented.fields[0].invalid);
}

#[tokio::test]
async fn back_then_forward_keeps_prefilled_values() {
    let mut wizard = wizard();
    let mut backend = TestBackend::new()
        .then_section(SectionReply::forward(entries([
            ("age", "10"),
            ("gender", "Muško"),
        ])))
        .then_section(SectionReply::back())
        .then_section(SectionReply::cancel());
    let predictor = ScriptedPredictor::returning(vec![]);

    let outcome = run(&mut wizard, &mut backend, &predictor).await;
    assert!(matches!(outcome, Err(WizardError::Cancelled)));

    let revisited = backend.presented_sections().last().unwrap();
    assert_eq!(revisited.index, 0);
    assert_eq!(revisited.fields[0].value, "10");
    assert_eq!(revisited.fields[1].value, "Muško");
}

#[tokio::test]
async fn restart_returns_to_a_blank_first_section() {
    let mut wizard = wizard();
    let mut backend = TestBackend::new()
        .then_section(SectionReply::forward(entries([
            ("age", "10"),
            ("gender", "Muško"),
        ])))
        .then_section(SectionReply::forward(entries([("q1", "Da")])))
        .then_section(SectionReply::forward(entries([("q2", "Ne")])))
        .then_result(ResultReply::Restart)
        .then_section(SectionReply::cancel());
    let predictor =
        ScriptedPredictor::returning(vec![Ok(Prediction { probability: 12.3 })]);

    let outcome = run(&mut wizard, &mut backend, &predictor).await;
    assert!(matches!(outcome, Err(WizardError::Cancelled)));

    let fresh = backend.presented_sections().last().unwrap();
    assert_eq!(fresh.index, 0);
    assert!(fresh.fields.iter().all(|f| f.value.is_empty()));
    assert!(wizard.answers().is_empty());
}
