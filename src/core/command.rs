use crate::domain::model::Car;
use crate::utils::error::{LotError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Create,
    Park,
    Leave,
    Status,
    RegByColor,
    SpotByColor,
    SpotByReg,
    Exit,
}

impl Keyword {
    /// Case-insensitive lookup of a command word.
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "create" => Some(Self::Create),
            "park" => Some(Self::Park),
            "leave" => Some(Self::Leave),
            "status" => Some(Self::Status),
            "reg_by_color" => Some(Self::RegByColor),
            "spot_by_color" => Some(Self::SpotByColor),
            "spot_by_reg" => Some(Self::SpotByReg),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Self::Status | Self::Exit => 0,
            Self::Create | Self::Leave | Self::RegByColor | Self::SpotByColor | Self::SpotByReg => 1,
            Self::Park => 2,
        }
    }

    /// Everything but `create` and `exit` needs an existing lot.
    pub fn requires_lot(self) -> bool {
        !matches!(self, Self::Create | Self::Exit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { capacity: usize },
    Park { car: Car },
    Leave { spot: i64 },
    Status,
    RegByColor { color: String },
    SpotByColor { color: String },
    SpotByReg { registration: String },
    Exit,
}

/// A tokenized input line whose first word is a known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub keyword: Keyword,
    pub args: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    pub fn tokenize(line: &'a str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let word = tokens
            .next()
            .ok_or_else(|| LotError::malformed("empty line"))?;
        let keyword = Keyword::parse(word)
            .ok_or_else(|| LotError::malformed(format!("unknown command '{}'", word)))?;

        Ok(Self {
            keyword,
            args: tokens.collect(),
        })
    }

    /// Checks the argument count and integer arguments for the keyword.
    pub fn into_command(self) -> Result<Command> {
        if self.args.len() != self.keyword.arity() {
            return Err(LotError::malformed(format!(
                "{:?} expects {} argument(s), got {}",
                self.keyword,
                self.keyword.arity(),
                self.args.len()
            )));
        }

        let command = match (self.keyword, self.args.as_slice()) {
            (Keyword::Create, [capacity]) => Command::Create {
                capacity: parse_number(capacity)?,
            },
            (Keyword::Park, [registration, color]) => Command::Park {
                car: Car::new(*registration, *color),
            },
            (Keyword::Leave, [spot]) => Command::Leave {
                spot: parse_number(spot)?,
            },
            (Keyword::Status, []) => Command::Status,
            (Keyword::RegByColor, [color]) => Command::RegByColor {
                color: color.to_string(),
            },
            (Keyword::SpotByColor, [color]) => Command::SpotByColor {
                color: color.to_string(),
            },
            (Keyword::SpotByReg, [registration]) => Command::SpotByReg {
                registration: registration.to_string(),
            },
            (Keyword::Exit, []) => Command::Exit,
            (keyword, args) => {
                return Err(LotError::malformed(format!(
                    "unexpected arguments for {:?}: {:?}",
                    keyword, args
                )))
            }
        };

        Ok(command)
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| LotError::malformed(format!("'{}' is not a valid number", value)))
}
