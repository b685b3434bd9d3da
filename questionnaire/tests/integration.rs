//! Integration tests for questionnaire

use std::io;
use std::sync::{Arc, Mutex};

use example_questionnaire::{DIFFICULTY, FAVOURITE_LANGUAGE, LIKES, programming_config};
use questionnaire::{
    Affordance, ChoiceOption, Question, QuestionCatalog, QuestionId, QuestionnaireConfig,
    QuestionRenderer, QuestionnaireSession, SessionError, TestRenderer,
};

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn id_of(session: &QuestionnaireSession, text: &str) -> QuestionId {
    session
        .catalog()
        .all()
        .iter()
        .find(|q| q.text() == text)
        .map(Question::id)
        .unwrap()
}

#[test]
fn test_controls_follow_catalog_order() {
    let session = QuestionnaireSession::new(programming_config());
    let controls = session.controls();

    let labels: Vec<_> = controls.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, [FAVOURITE_LANGUAGE, LIKES, DIFFICULTY]);
    assert!(matches!(
        &controls[1].affordance,
        Affordance::TextField { placeholder: Some(p) } if p == "Your answer"
    ));
}

#[test]
fn test_full_run_with_test_renderer() {
    let mut session = QuestionnaireSession::new(programming_config());
    let language = id_of(&session, FAVOURITE_LANGUAGE);
    let likes = id_of(&session, LIKES);
    let difficulty = id_of(&session, DIFFICULTY);

    let renderer = TestRenderer::new()
        .with_selection(language, 2)
        .typing(likes, "Solving puzzles")
        .with_typed_selection(difficulty, 3, "Tough but fun");

    session.run(&renderer).unwrap();

    let answers = session.answers();
    assert_eq!(answers.value(language), Some("C++"));
    assert_eq!(answers.value(likes), Some("Solving puzzles"));
    assert_eq!(answers.value(difficulty), Some("Tough but fun"));
    assert!(session.is_complete());
}

#[test]
fn test_cleared_text_field_keeps_answer() {
    let mut session = QuestionnaireSession::new(programming_config());
    let likes = id_of(&session, LIKES);

    session
        .run(&TestRenderer::new().typing(likes, "Rust").with_text(likes, ""))
        .unwrap();

    assert_eq!(session.answers().value(likes), Some("Rust"));
}

#[test]
fn test_optional_answers_do_not_complete() {
    let mut session = QuestionnaireSession::new(programming_config());
    let language = id_of(&session, FAVOURITE_LANGUAGE);
    let difficulty = id_of(&session, DIFFICULTY);

    session.run(&TestRenderer::new().with_selection(language, 0)).unwrap();

    assert!(!session.is_complete());
    assert_eq!(session.missing_required(), vec![difficulty]);
    assert!(matches!(
        session.submission(),
        Err(SessionError::Incomplete { .. })
    ));
}

#[test]
fn test_renderer_failure_surfaces() {
    let mut session = QuestionnaireSession::new(programming_config());
    let likes = id_of(&session, LIKES);

    let result = session.run(&TestRenderer::new().with_selection(likes, 0));
    assert!(matches!(result, Err(SessionError::Renderer(_))));
}

#[test]
fn test_unknown_ids_from_renderer_are_dropped() {
    let stranger = Question::text_filling("Not in the catalog", None, false);
    let stranger_id = stranger.id();
    let other_catalog = QuestionCatalog::new(vec![stranger]).unwrap();

    // A renderer built against another catalog reports ids this session doesn't know.
    struct Rogue(Vec<questionnaire::Control>, TestRenderer);
    impl QuestionRenderer for Rogue {
        type Error = questionnaire::TestRendererError;
        fn present(
            &self,
            _controls: &[questionnaire::Control],
            on_answer: &mut dyn FnMut(QuestionId, &str),
        ) -> Result<(), Self::Error> {
            self.1.present(&self.0, on_answer)
        }
    }

    let other = QuestionnaireSession::new(QuestionnaireConfig::new(other_catalog));
    let rogue = Rogue(
        other.controls(),
        TestRenderer::new().with_text(stranger_id, "sneaky"),
    );

    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer({
            let logs = logs.clone();
            move || logs.clone()
        })
        .with_ansi(false)
        .with_env_filter("questionnaire=warn")
        .finish();

    let mut session = QuestionnaireSession::new(programming_config());
    tracing::subscriber::with_default(subscriber, || session.run(&rogue)).unwrap();

    assert!(session.answers().is_empty());
    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("unknown question"), "{output}");
    assert!(output.contains(&stranger_id.to_string()), "{output}");
}

#[test]
fn test_submission_body_is_flat_object() {
    let mut session = QuestionnaireSession::new(
        programming_config().with_answers_url("https://example.org/answers"),
    );
    let difficulty = id_of(&session, DIFFICULTY);
    session.select_option(difficulty, 1, None).unwrap();

    let submission = session.submission().unwrap();
    assert_eq!(submission.url, "https://example.org/answers");

    let body: serde_json::Value = serde_json::from_str(&submission.to_json().unwrap()).unwrap();
    assert_eq!(body.as_object().map(|o| o.len()), Some(1));
    assert_eq!(body[difficulty.to_string()], "Normal");
}

#[test]
fn test_catalog_from_json_drives_session() {
    let json = serde_json::to_string(&vec![Question::multiple_choice(
        "How was the assignment?",
        vec![ChoiceOption::plain("Easy"), ChoiceOption::text_filling("Other", None)],
        true,
    )])
    .unwrap();

    let catalog = QuestionCatalog::from_json(&json).unwrap();
    let id = catalog.all()[0].id();
    let mut session = QuestionnaireSession::new(QuestionnaireConfig::new(catalog));

    session.run(&TestRenderer::new().with_typed_selection(id, 1, "Meh")).unwrap();
    assert_eq!(session.answers().value(id), Some("Meh"));
}
