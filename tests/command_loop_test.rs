use parking_registry::core::session::LoopState;
use parking_registry::CommandLoop;
use std::io::Cursor;

fn run_script(script: &str) -> (CommandLoop, Vec<String>) {
    let mut session = CommandLoop::new();
    let mut output = Vec::new();
    session
        .run(Cursor::new(script.to_string()), &mut output)
        .expect("in-memory streams never fail");

    let text = String::from_utf8(output).expect("reports are UTF-8");
    let lines = text.lines().map(str::to_string).collect();
    (session, lines)
}

#[test]
fn test_full_lot_scenario() {
    let (_, lines) = run_script(
        "create 2\n\
         park AB1234 Red\n\
         park CD5678 Blue\n\
         park EF9999 Green\n\
         status\n\
         exit\n",
    );

    assert_eq!(
        lines,
        vec![
            "Created a parking lot with 2 spots.",
            "Red car parked in spot 1.",
            "Blue car parked in spot 2.",
            "Sorry, the parking lot is full.",
            "1 AB1234 Red",
            "2 CD5678 Blue",
        ]
    );
}

#[test]
fn test_leave_empty_spot_is_not_an_error() {
    let (session, lines) = run_script("create 1\nleave 1\nstatus\n");

    assert_eq!(
        lines,
        vec![
            "Created a parking lot with 1 spots.",
            "There is no car in spot 1.",
            "Parking lot is empty.",
        ]
    );
    assert_eq!(session.lot().occupied_count(), 0);
}

#[test]
fn test_commands_before_create_are_rejected() {
    let (session, lines) = run_script(
        "park AB1234 Red\n\
         status\n\
         reg_by_color red\n\
         spot_by_color red\n\
         spot_by_reg AB\n\
         leave 1\n\
         exit\n",
    );

    assert_eq!(lines.len(), 6);
    assert!(lines
        .iter()
        .all(|line| line == "Sorry, a parking lot has not been created."));
    assert_eq!(session.lot().capacity(), 0);
}

#[test]
fn test_queries_after_parking() {
    let (_, lines) = run_script(
        "create 4\n\
         park KA-01-HH-1234 White\n\
         park KA-01-HH-9999 red\n\
         park KA-01-BB-0001 RED\n\
         reg_by_color Red\n\
         spot_by_color red\n\
         spot_by_color Pink\n\
         spot_by_reg HH\n\
         spot_by_reg hh\n",
    );

    assert_eq!(
        lines[4..],
        [
            "KA-01-HH-9999, KA-01-BB-0001",
            "2, 3",
            "No cars with color Pink were found.",
            "1",
            "No cars with registration number hh were found.",
        ]
    );
}

#[test]
fn test_freed_spot_is_reused_first() {
    let (_, lines) = run_script(
        "create 5\n\
         park A1 Red\n\
         park B2 Blue\n\
         park C3 Green\n\
         leave 2\n\
         park D4 Black\n",
    );

    assert_eq!(lines[4], "Spot 2 is free.");
    assert_eq!(lines[5], "Black car parked in spot 2.");
}

#[test]
fn test_malformed_lines_keep_the_loop_running() {
    let (session, lines) = run_script(
        "create 3\n\
         \n\
         park A1\n\
         drive A1 Red\n\
         leave one\n\
         create -4\n\
         park A1 Red\n",
    );

    assert_eq!(
        lines,
        vec![
            "Created a parking lot with 3 spots.",
            "Wrong input!",
            "Wrong input!",
            "Wrong input!",
            "Wrong input!",
            "Wrong input!",
            "Red car parked in spot 1.",
        ]
    );
    assert_eq!(session.state(), LoopState::Running);
}

#[test]
fn test_create_replaces_the_lot() {
    let (session, lines) = run_script("create 2\npark A1 Red\ncreate 3\nstatus\n");

    assert_eq!(lines[3], "Parking lot is empty.");
    assert_eq!(session.lot().capacity(), 3);
}

#[test]
fn test_input_after_exit_is_ignored() {
    let (session, lines) = run_script("create 1\nEXIT\npark A1 Red\n");

    assert_eq!(lines, vec!["Created a parking lot with 1 spots."]);
    assert_eq!(session.state(), LoopState::Terminated);
    assert_eq!(session.lot().occupied_count(), 0);
}

#[test]
fn test_invalid_utf8_line_is_malformed_input() {
    let mut session = CommandLoop::new();
    let mut output = Vec::new();
    session
        .run(
            Cursor::new(b"create 1\n\xff\xfe\npark A1 Red\nstatus\n".to_vec()),
            &mut output,
        )
        .expect("undecodable bytes do not stop the loop");

    let text = String::from_utf8(output).expect("reports are UTF-8");
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "Created a parking lot with 1 spots.",
            "Wrong input!",
            "Red car parked in spot 1.",
            "1 A1 Red",
        ]
    );
}

#[test]
fn test_oversized_create_keeps_the_loop_running() {
    let (session, lines) = run_script(
        "create 1000000000000000000\n\
         park A1 Red\n\
         create 1\n\
         park A1 Red\n",
    );

    assert_eq!(
        lines,
        vec![
            "Unable to create a parking lot with 1000000000000000000 spots.",
            "Sorry, a parking lot has not been created.",
            "Created a parking lot with 1 spots.",
            "Red car parked in spot 1.",
        ]
    );
    assert_eq!(session.state(), LoopState::Running);
}

#[test]
fn test_crlf_line_endings() {
    let (_, lines) = run_script("create 1\r\npark A1 Red\r\nspot_by_color red\r\n");

    assert_eq!(lines[2], "1");
}
