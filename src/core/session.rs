use crate::core::command::{Command, CommandLine};
use crate::core::registry::ParkingLot;
use crate::core::report;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LotError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Read-evaluate-report loop that owns the current parking lot.
pub struct CommandLoop {
    lot: ParkingLot,
    state: LoopState,
    show_lot_after_change: bool,
    initial_capacity: Option<usize>,
}

impl CommandLoop {
    pub fn new() -> Self {
        Self {
            lot: ParkingLot::default(),
            state: LoopState::Running,
            show_lot_after_change: false,
            initial_capacity: None,
        }
    }

    pub fn with_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            show_lot_after_change: config.show_lot_after_change(),
            initial_capacity: config.initial_capacity(),
            ..Self::new()
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    /// Processes one input line and returns the lines to print.
    /// Rule violations and malformed input become a single message line.
    pub fn execute(&mut self, line: &str) -> Vec<String> {
        let result = self.dispatch(line);
        self.report(line, result)
    }

    fn report(&self, line: &str, result: Result<Vec<String>>) -> Vec<String> {
        match result {
            Ok(lines) => lines,
            Err(e) => {
                if let LotError::MalformedInput { reason } = &e {
                    tracing::debug!(line, reason = %reason, "malformed input");
                }
                if e.is_recoverable() {
                    tracing::warn!("❌ Command rejected: {}", e);
                } else {
                    tracing::error!("❌ Command failed: {}", e);
                }
                vec![e.user_message()]
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Vec<String>> {
        let parsed = CommandLine::tokenize(line)?;
        // "not created" wins over argument-shape errors.
        if parsed.keyword.requires_lot() && !self.lot.is_created() {
            return Err(LotError::NotCreated);
        }
        let command = parsed.into_command()?;
        self.apply(command)
    }

    fn apply(&mut self, command: Command) -> Result<Vec<String>> {
        let mutates = matches!(
            command,
            Command::Create { .. } | Command::Park { .. } | Command::Leave { .. }
        );

        let mut lines = match command {
            Command::Create { capacity } => {
                self.lot.create(capacity)?;
                vec![report::created(capacity)]
            }
            Command::Park { car } => vec![self.lot.add_first_free(car)?.to_string()],
            Command::Leave { spot } => vec![self.lot.remove_by_spot(spot)?.to_string()],
            Command::Status => report::occupancy(&self.lot.occupied_listing()?),
            Command::RegByColor { color } => {
                let registrations = self.lot.registrations_by_color(&color)?;
                vec![report::registrations_by_color(&color, &registrations)]
            }
            Command::SpotByColor { color } => {
                let spots = self.lot.spots_by_color(&color)?;
                vec![report::spots_by_color(&color, &spots)]
            }
            Command::SpotByReg { registration } => {
                let spot = self.lot.spot_by_registration_substring(&registration)?;
                vec![report::spot_by_registration(&registration, spot)]
            }
            Command::Exit => {
                self.state = LoopState::Terminated;
                tracing::info!("command loop terminated");
                return Ok(Vec::new());
            }
        };

        if mutates && self.show_lot_after_change && self.lot.is_created() {
            lines.extend(report::full_listing(&self.lot.full_listing()?));
        }
        Ok(lines)
    }

    /// Reads lines until `exit` or end of input, writing each report to `output`.
    /// Bytes that are not UTF-8 are replaced, so such a line is reported as malformed.
    /// Only failures of the streams themselves end the loop with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        if let Some(capacity) = self.initial_capacity.take() {
            let result = self.apply(Command::Create { capacity });
            let lines = self.report("--capacity", result);
            write_lines(&mut output, &lines)?;
        }

        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            let lines = self.execute(line.trim_end_matches(['\n', '\r']));
            write_lines(&mut output, &lines)?;

            if self.state == LoopState::Terminated {
                return Ok(());
            }
        }

        tracing::info!("end of input reached");
        Ok(())
    }
}

impl Default for CommandLoop {
    fn default() -> Self {
        Self::new()
    }
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    output.flush()?;
    Ok(())
}
