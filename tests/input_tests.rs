use memory_match::{parse_action, Action, InputSource, ScriptedInput, Step};
use tokio::time::{Duration, Instant};

#[test]
fn test_parse_commands() {
    assert_eq!(parse_action("start", 4), Ok(Action::Start));
    assert_eq!(parse_action("  QUIT ", 4), Ok(Action::Quit));
    assert_eq!(parse_action("q", 4), Ok(Action::Quit));
}

#[test]
fn test_parse_index_and_coordinate() {
    assert_eq!(parse_action("5", 4), Ok(Action::Flip(5)));
    assert_eq!(parse_action("flip 15", 4), Ok(Action::Flip(15)));
    assert_eq!(parse_action("A1", 4), Ok(Action::Flip(0)));
    assert_eq!(parse_action("b3", 4), Ok(Action::Flip(9)));
    assert_eq!(parse_action("flip D4", 4), Ok(Action::Flip(15)));
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(parse_action("", 4).is_err());
    assert!(parse_action("16", 4).is_err());
    assert!(parse_action("E1", 4).is_err());
    assert!(parse_action("A0", 4).is_err());
    assert!(parse_action("A5", 4).is_err());
    assert!(parse_action("?1", 4).is_err());
    assert!(parse_action("jump 3", 4).is_err());
}

#[tokio::test(start_paused = true)]
async fn test_scripted_input_waits_then_delivers() {
    let mut input = ScriptedInput::new([
        Step::Act(Action::Flip(1)),
        Step::Wait(Duration::from_millis(1500)),
        Step::Act(Action::Start),
    ]);
    let begin = Instant::now();
    assert_eq!(input.next_action().await.unwrap(), Some(Action::Flip(1)));
    assert_eq!(input.next_action().await.unwrap(), Some(Action::Start));
    assert!(begin.elapsed() >= Duration::from_millis(1500));
    assert_eq!(input.next_action().await.unwrap(), None);
    assert_eq!(input.remaining(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_scripted_wait_survives_cancellation() {
    let mut input = ScriptedInput::new([
        Step::Wait(Duration::from_millis(1000)),
        Step::Act(Action::Quit),
    ]);
    let begin = Instant::now();
    let first = tokio::time::timeout(Duration::from_millis(600), input.next_action()).await;
    assert!(first.is_err());
    assert_eq!(input.next_action().await.unwrap(), Some(Action::Quit));
    let waited = begin.elapsed();
    assert!(waited >= Duration::from_millis(1000));
    assert!(waited < Duration::from_millis(1600));
}
