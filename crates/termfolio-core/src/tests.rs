//! End-to-end scenarios driven through `Shell` with input events.

use std::time::Duration;

use termfolio_platform::{TimeService, WallTime};
use termfolio_types::config::TerminalConfig;
use termfolio_types::content::Portfolio;
use termfolio_types::error::Result;
use termfolio_types::input::{ClickTarget, InputEvent, Key};
use termfolio_vfs::Filesystem;

use crate::overlay::OverlayState;
use crate::session::{EntryKind, REFERENCE_NOTICE};
use crate::shell::{Cue, Shell};

struct FixedClock;

impl TimeService for FixedClock {
    fn now(&self) -> Result<WallTime> {
        // 2026-02-13 09:30:05 UTC
        Ok(WallTime::from_unix_secs(1_770_975_005))
    }

    fn uptime_secs(&self) -> Result<u64> {
        Ok(125)
    }
}

fn shell() -> Shell {
    let portfolio = Portfolio::builtin().unwrap();
    Shell::new(portfolio, &TerminalConfig::default())
        .with_time_service(Some(Box::new(FixedClock)))
}

fn type_line(shell: &mut Shell, line: &str) -> Vec<Cue> {
    let mut cues = Vec::new();
    for ch in line.chars() {
        cues.extend(shell.handle_event(&InputEvent::TextInput(ch)));
    }
    cues.extend(shell.handle_event(&InputEvent::KeyPress(Key::Enter)));
    cues
}

fn texts(shell: &Shell) -> Vec<String> {
    shell
        .session()
        .transcript()
        .iter()
        .map(|e| e.content.plain_text())
        .collect()
}

fn open_reference(shell: &mut Shell) {
    shell.submit("?");
    assert_eq!(shell.overlay_state(), OverlayState::Open { remaining: 15 });
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[test]
fn typed_command_echoes_then_outputs() {
    let mut sh = shell();
    let cues = type_line(&mut sh, "cat bio.txt");
    assert_eq!(cues.len(), "cat bio.txt".len() + 2);
    assert_eq!(&cues[cues.len() - 2..], &[Cue::Enter, Cue::Success]);

    let transcript = sh.session().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].kind, EntryKind::Command);
    assert_eq!(transcript[0].command.as_deref(), Some("cat bio.txt"));
    assert_eq!(transcript[1].kind, EntryKind::Output);
    let bio = sh.fs().read_file("bio.txt").unwrap();
    assert_eq!(transcript[1].content.plain_text(), bio);
    assert_eq!(sh.session().input(), "");
}

#[test]
fn unknown_command_is_an_error_entry() {
    let mut sh = shell();
    assert_eq!(sh.submit("frobnicate"), vec![Cue::Enter, Cue::Error]);
    let last = sh.session().transcript().last().unwrap();
    assert_eq!(last.kind, EntryKind::Error);
    assert!(last.content.plain_text().contains("frobnicate"));
}

#[test]
fn blank_enter_changes_nothing() {
    let mut sh = shell();
    sh.handle_event(&InputEvent::TextInput(' '));
    let cues = sh.handle_event(&InputEvent::KeyPress(Key::Enter));
    assert!(cues.is_empty());
    assert!(sh.session().transcript().is_empty());
    assert!(sh.session().history().is_empty());
}

#[test]
fn clear_wipes_transcript_but_keeps_history() {
    let mut sh = shell();
    sh.submit("about");
    sh.submit("skills");
    assert_eq!(sh.submit("clear"), vec![Cue::Enter]);
    assert!(sh.session().transcript().is_empty());
    assert_eq!(sh.session().history(), ["about", "skills", "clear"]);
}

#[test]
fn transcript_ids_keep_increasing_across_clears() {
    let mut sh = shell();
    sh.submit("pwd");
    let before = sh.session().transcript().last().unwrap().id;
    sh.submit("clear");
    sh.submit("pwd");
    assert!(sh.session().transcript()[0].id > before);
}

#[test]
fn destructive_rm_is_refused_and_fs_unchanged() {
    let mut sh = shell();
    let home_before = sh.fs().list_entries("~").unwrap().to_vec();
    assert_eq!(sh.submit("rm -rf /"), vec![Cue::Enter, Cue::Error]);
    let errors: Vec<_> = sh
        .session()
        .transcript()
        .iter()
        .filter(|e| e.kind == EntryKind::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].content.plain_text().contains("PERMISSION DENIED"));
    assert_eq!(sh.fs().list_entries("~").unwrap(), home_before.as_slice());
}

#[test]
fn history_command_lists_session_lines() {
    let mut sh = shell();
    sh.submit("whoami");
    sh.submit("ls");
    sh.submit("history");
    let out = texts(&sh).pop().unwrap();
    assert_eq!(out, "    1  whoami\n    2  ls\n    3  history");
}

#[test]
fn date_uses_installed_clock() {
    let mut sh = shell();
    sh.submit("date");
    assert!(texts(&sh).pop().unwrap().contains("2026"));

    let mut unclocked = shell().with_time_service(None);
    unclocked.submit("date");
    assert!(texts(&unclocked).pop().unwrap().contains("[SIMULATED]"));
}

#[test]
fn dispatch_leaves_session_untouched() {
    let sh = shell();
    let out = sh.dispatch("pwd");
    assert!(!out.is_error());
    assert!(sh.session().transcript().is_empty());
    assert!(sh.session().history().is_empty());
}

// ---------------------------------------------------------------------------
// Recall and completion
// ---------------------------------------------------------------------------

#[test]
fn up_and_down_walk_history() {
    let mut sh = shell();
    sh.submit("about");
    sh.submit("skills");
    sh.submit("contact");

    let up = InputEvent::KeyPress(Key::Up);
    let down = InputEvent::KeyPress(Key::Down);
    sh.handle_event(&up);
    assert_eq!(sh.session().input(), "contact");
    sh.handle_event(&up);
    sh.handle_event(&up);
    sh.handle_event(&up);
    assert_eq!(sh.session().input(), "about");
    sh.handle_event(&down);
    assert_eq!(sh.session().input(), "skills");
    sh.handle_event(&down);
    sh.handle_event(&down);
    assert_eq!(sh.session().input(), "");
    assert_eq!(sh.session().cursor(), None);
}

#[test]
fn tab_completes_command_name() {
    let mut sh = shell();
    for ch in "pro".chars() {
        sh.handle_event(&InputEvent::TextInput(ch));
    }
    let cues = sh.handle_event(&InputEvent::KeyPress(Key::Tab));
    assert_eq!(cues, vec![Cue::Type]);
    assert_eq!(sh.session().input(), "projects");
}

#[test]
fn tab_without_match_is_silent() {
    let mut sh = shell();
    sh.handle_event(&InputEvent::TextInput('q'));
    assert!(sh.handle_event(&InputEvent::KeyPress(Key::Tab)).is_empty());
    assert_eq!(sh.session().input(), "q");
}

#[test]
fn backspace_cue_only_when_something_removed() {
    let mut sh = shell();
    assert!(sh.handle_event(&InputEvent::Backspace).is_empty());
    sh.handle_event(&InputEvent::TextInput('l'));
    assert_eq!(sh.handle_event(&InputEvent::Backspace), vec![Cue::Backspace]);
    assert_eq!(sh.session().input(), "");
}

#[test]
fn ctrl_l_clears_with_success_cue() {
    let mut sh = shell();
    sh.submit("about");
    let cues = sh.handle_event(&InputEvent::KeyPress(Key::ClearScreen));
    assert_eq!(cues, vec![Cue::Success]);
    assert!(sh.session().transcript().is_empty());
    assert_eq!(sh.session().history(), ["about"]);
}

// ---------------------------------------------------------------------------
// Reference overlay
// ---------------------------------------------------------------------------

#[test]
fn question_mark_opens_reference() {
    let mut sh = shell();
    let cues = type_line(&mut sh, "?");
    assert_eq!(cues, vec![Cue::Type, Cue::Enter]);
    assert_eq!(sh.overlay_state(), OverlayState::Open { remaining: 15 });
    assert_eq!(sh.session().history(), ["?"]);
    assert_eq!(texts(&sh), ["?", REFERENCE_NOTICE]);
    assert!(!sh.reference().is_empty());
}

#[test]
fn reference_expires_and_releases_timers() {
    let mut sh = shell();
    open_reference(&mut sh);
    sh.advance(Duration::from_secs(1));
    assert_eq!(sh.overlay_state(), OverlayState::Open { remaining: 14 });
    sh.advance(Duration::from_secs(14));
    assert_eq!(sh.overlay_state(), OverlayState::Closed);
    assert_eq!(sh.pending_timers(), 0);
}

#[test]
fn long_advance_expires_overlay_in_one_step() {
    let mut sh = shell();
    open_reference(&mut sh);
    sh.advance(Duration::from_secs(20));
    assert_eq!(sh.overlay_state(), OverlayState::Closed);
    assert_eq!(sh.pending_timers(), 0);
    sh.advance(Duration::from_secs(5));
    assert_eq!(sh.overlay_state(), OverlayState::Closed);
}

#[test]
fn key_during_grace_is_ignored_by_overlay() {
    let mut sh = shell();
    open_reference(&mut sh);
    sh.advance(Duration::from_millis(50));
    sh.handle_event(&InputEvent::TextInput('a'));
    assert!(matches!(sh.overlay_state(), OverlayState::Open { .. }));
    assert_eq!(sh.session().input(), "a");
}

#[test]
fn key_after_grace_closes_and_reaches_prompt() {
    let mut sh = shell();
    open_reference(&mut sh);
    sh.advance(Duration::from_millis(100));
    let cues = sh.handle_event(&InputEvent::TextInput('l'));
    assert_eq!(cues, vec![Cue::Type]);
    assert_eq!(sh.overlay_state(), OverlayState::Closed);
    assert_eq!(sh.pending_timers(), 0);
    assert_eq!(sh.session().input(), "l");
}

#[test]
fn clicks_inside_keep_overlay_open() {
    let mut sh = shell();
    open_reference(&mut sh);
    sh.handle_event(&InputEvent::Click(ClickTarget::OverlayContent));
    assert!(matches!(sh.overlay_state(), OverlayState::Open { .. }));
    sh.handle_event(&InputEvent::Click(ClickTarget::Outside));
    assert_eq!(sh.overlay_state(), OverlayState::Closed);
    assert_eq!(sh.pending_timers(), 0);
}

#[test]
fn resubmitting_question_mark_restarts_countdown() {
    let mut sh = shell();
    open_reference(&mut sh);
    sh.advance(Duration::from_secs(6));
    assert_eq!(sh.overlay_state(), OverlayState::Open { remaining: 9 });
    sh.submit("?");
    assert_eq!(sh.overlay_state(), OverlayState::Open { remaining: 15 });
    assert_eq!(sh.pending_timers(), 2);
}

#[test]
fn custom_overlay_duration_from_config() {
    let config = TerminalConfig::from_toml("[overlay]\nduration_secs = 3\n").unwrap();
    let mut sh = Shell::new(Portfolio::builtin().unwrap(), &config);
    sh.submit("?");
    assert_eq!(sh.overlay_state(), OverlayState::Open { remaining: 3 });
    sh.advance(Duration::from_secs(3));
    assert_eq!(sh.overlay_state(), OverlayState::Closed);
}
