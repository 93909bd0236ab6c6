use std::time::Duration;

use mockpanel_application::engine::PanelEngine;
use mockpanel_application::random::{SequenceRandom, ThreadRandom};
use mockpanel_core::config::{EngineConfig, Pacing};
use mockpanel_core::persona::default_panel;
use mockpanel_core::session::{Message, SessionPhase, USER_SENDER_ID};

fn engine_with(config: EngineConfig) -> PanelEngine {
    PanelEngine::new(config, Box::new(SequenceRandom::first())).expect("valid config")
}

fn engine() -> PanelEngine {
    engine_with(EngineConfig::default())
}

fn started() -> PanelEngine {
    let mut engine = engine();
    assert!(engine.start());
    engine.flush();
    engine
}

fn lines(transcript: &[Message]) -> Vec<(u32, String)> {
    transcript
        .iter()
        .map(|m| (m.sender_id, m.content.clone()))
        .collect()
}

#[test]
fn test_start_produces_welcome_introductions_ready_and_question() {
    let engine = started();
    let panel = default_panel();
    let transcript = engine.transcript();

    assert_eq!(transcript.len(), 8);
    assert_eq!(engine.phase(), SessionPhase::AwaitingAnswer);
    assert_eq!(engine.active_persona_index(), 0);

    // welcome, then one introduction per persona in panel order
    assert_eq!(transcript[0].sender_id, panel[0].id);
    for (i, persona) in panel.iter().enumerate() {
        assert_eq!(transcript[i + 1].sender_id, persona.id);
        assert_eq!(transcript[i + 1].content, persona.introduction);
    }
    assert_eq!(
        engine.session().introduced_persona_ids.len(),
        panel.len(),
        "every persona is tagged as introduced"
    );

    // ready line and first question, both from the first persona
    assert_eq!(transcript[6].sender_id, panel[0].id);
    assert_eq!(transcript[7].content, panel[0].question_bank[0]);
    assert!(transcript.iter().all(|m| !m.is_from_user));
}

#[test]
fn test_reply_rotates_and_asks_next_persona() {
    let mut engine = started();
    let panel = default_panel();
    let config = EngineConfig::default();

    assert!(engine.submit_reply("I focus on root-causing via logs and bisection."));
    assert_eq!(engine.phase(), SessionPhase::AdvancingTurn);
    assert_eq!(engine.active_persona_index(), 1);

    let reply = &engine.transcript()[8];
    assert!(reply.is_from_user);
    assert_eq!(reply.sender_id, USER_SENDER_ID);
    assert_eq!(reply.content, "I focus on root-causing via logs and bisection.");

    engine.flush();

    let transcript = engine.transcript();
    assert_eq!(transcript.len(), 11);
    assert_eq!(engine.phase(), SessionPhase::AwaitingAnswer);
    assert_eq!(transcript[9].sender_id, panel[1].id);
    assert_eq!(transcript[9].content, config.transition_phrases[0]);
    assert_eq!(transcript[10].sender_id, panel[1].id);
    assert_eq!(transcript[10].content, panel[1].question_bank[0]);
}

#[test]
fn test_reply_is_trimmed() {
    let mut engine = started();
    assert!(engine.submit_reply("   padded answer \n"));
    assert_eq!(engine.transcript()[8].content, "padded answer");
}

#[test]
fn test_invalid_replies_are_ignored() {
    let mut engine = engine();
    assert!(!engine.submit_reply("too early"));

    engine.start();
    assert!(!engine.submit_reply("still introducing"));
    engine.flush();

    assert!(!engine.submit_reply(""));
    assert!(!engine.submit_reply("   \t"));
    assert_eq!(engine.transcript().len(), 8);

    assert!(engine.submit_reply("real answer"));
    assert!(!engine.submit_reply("double submit while advancing"));
    assert_eq!(engine.transcript().len(), 9);
}

#[test]
fn test_active_index_follows_reply_count() {
    let mut engine = started();
    let persona_count = engine.registry().len();

    for n in 1..=3 {
        assert!(engine.submit_reply("answer"));
        assert_eq!(engine.active_persona_index(), n % persona_count);
        engine.flush();
    }
}

#[test]
fn test_threshold_completes_instead_of_asking() {
    let mut engine = started();
    let threshold = engine.registry().len() * 3;

    engine.submit_reply("one");
    engine.flush();
    engine.submit_reply("two");
    engine.flush();
    assert_eq!(engine.transcript().len(), 14);
    assert_eq!(engine.phase(), SessionPhase::AwaitingAnswer);

    engine.submit_reply("three");
    assert_eq!(engine.transcript().len(), threshold);
    engine.flush();

    assert_eq!(engine.phase(), SessionPhase::Complete);
    assert_eq!(engine.transcript().len(), threshold + 1, "only the closing message");
    assert!(!engine.session().timer_running);
    let closing = engine.transcript().last().unwrap();
    assert_eq!(closing.content, EngineConfig::default().templates.closing);
}

#[test]
fn test_complete_is_idempotent() {
    let mut engine = started();

    assert!(engine.complete());
    let length = engine.transcript().len();
    assert!(!engine.complete());

    assert_eq!(engine.transcript().len(), length);
    assert_eq!(length, 9);
    assert_eq!(engine.phase(), SessionPhase::Complete);
}

#[test]
fn test_complete_cancels_pending_steps() {
    let mut engine = engine();
    engine.start();
    assert!(engine.pending_steps() > 0);

    engine.complete();
    assert_eq!(engine.pending_steps(), 0);

    engine.advance(Duration::from_secs(60));
    engine.flush();
    assert_eq!(engine.transcript().len(), 2, "welcome + closing");
}

#[test]
fn test_reset_after_complete() {
    let mut engine = started();
    engine.advance(Duration::from_secs(30));
    engine.complete();

    engine.reset();

    assert_eq!(engine.phase(), SessionPhase::NotStarted);
    assert!(engine.transcript().is_empty());
    assert_eq!(engine.remaining_seconds(), 600);
    assert_eq!(engine.active_persona_index(), 0);
    assert!(engine.session().introduced_persona_ids.is_empty());
    assert!(!engine.session().timer_running);
}

#[test]
fn test_stale_steps_do_not_leak_into_new_session() {
    let mut engine = engine();
    engine.start();
    engine.reset();
    engine.start();

    engine.advance(Duration::from_secs(20));

    assert_eq!(engine.transcript().len(), 8);
    assert_eq!(engine.transcript()[0].id, 1);
}

#[test]
fn test_stale_tick_is_dropped() {
    let mut engine = engine();
    engine.start();
    let stale = engine.generation();

    engine.reset();
    engine.start();
    engine.on_tick(stale);
    assert_eq!(engine.remaining_seconds(), 600);

    let current = engine.generation();
    engine.on_tick(current);
    assert_eq!(engine.remaining_seconds(), 599);
}

#[test]
fn test_timer_expiry_completes_mid_answer() {
    let mut engine = started();
    engine.advance(Duration::from_secs(599));
    assert_eq!(engine.remaining_seconds(), 1);
    assert_eq!(engine.phase(), SessionPhase::AwaitingAnswer);

    engine.advance(Duration::from_secs(1));
    assert_eq!(engine.remaining_seconds(), 0);
    assert_eq!(engine.phase(), SessionPhase::Complete);
    assert_eq!(engine.transcript().len(), 9);

    // In-flight reply is discarded.
    assert!(!engine.submit_reply("late answer"));
    engine.advance(Duration::from_secs(10));
    assert_eq!(engine.transcript().len(), 9);
    assert_eq!(engine.remaining_seconds(), 0);
}

#[test]
fn test_timer_expiry_during_introductions() {
    let mut config = EngineConfig::default();
    config.timer_budget_seconds = 2;
    let mut engine = engine_with(config);

    engine.start();
    engine.advance(Duration::from_secs(2));

    assert_eq!(engine.phase(), SessionPhase::Complete);
    // welcome, first introduction at 1.5s, closing at 2s
    assert_eq!(engine.transcript().len(), 3);
    assert_eq!(engine.pending_steps(), 0);
}

#[test]
fn test_remaining_seconds_never_increases_while_running() {
    let mut engine = started();
    let mut last = engine.remaining_seconds();
    for _ in 0..50 {
        engine.advance(Duration::from_millis(700));
        assert!(engine.remaining_seconds() <= last);
        last = engine.remaining_seconds();
    }
    assert_eq!(last, 600 - 35);
}

#[test]
fn test_collapsed_and_paced_runs_match() {
    let mut paced = engine();
    paced.start();
    paced.advance(Duration::from_secs(14));
    paced.submit_reply("first answer");
    paced.advance(Duration::from_secs(4));
    paced.submit_reply("second answer");
    paced.advance(Duration::from_secs(4));

    let mut config = EngineConfig::default();
    config.pacing = Pacing::immediate();
    let mut collapsed = engine_with(config);
    collapsed.start();
    collapsed.advance(Duration::ZERO);
    collapsed.submit_reply("first answer");
    collapsed.advance(Duration::ZERO);
    collapsed.submit_reply("second answer");
    collapsed.advance(Duration::ZERO);

    assert_eq!(lines(paced.transcript()), lines(collapsed.transcript()));
    assert_eq!(paced.phase(), collapsed.phase());
    assert_eq!(paced.active_persona_index(), collapsed.active_persona_index());
    assert_eq!(collapsed.remaining_seconds(), 600);
}

#[test]
fn test_transcript_is_append_only() {
    let mut engine = PanelEngine::new(
        EngineConfig::default(),
        Box::new(ThreadRandom::seeded(11)),
    )
    .unwrap();
    let mut previous: Vec<(u32, String)> = Vec::new();

    engine.start();
    for step in 0..40 {
        engine.advance(Duration::from_millis(900));
        if step % 3 == 0 {
            engine.submit_reply("an answer");
        }
        let current = lines(engine.transcript());
        assert!(current.len() >= previous.len());
        assert_eq!(&current[..previous.len()], previous.as_slice());
        previous = current;
    }
    assert_eq!(engine.phase(), SessionPhase::Complete);
}

#[test]
fn test_single_persona_panel() {
    let mut config = EngineConfig::default();
    config.personas.truncate(1);
    let mut engine = engine_with(config);

    engine.start();
    engine.flush();
    // welcome, intro, ready, question already exceed the threshold of 3
    assert_eq!(engine.transcript().len(), 4);
    assert_eq!(engine.phase(), SessionPhase::AwaitingAnswer);

    engine.submit_reply("answer");
    assert_eq!(engine.active_persona_index(), 0);
    engine.flush();
    assert_eq!(engine.phase(), SessionPhase::Complete);
}
