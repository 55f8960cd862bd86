//! Interactive Session Service
//!
//! Prompt loop that reads trade names, generates their orders, and writes
//! them to the order sink. Driven as an explicit state machine over any
//! `BufRead` / `Write` pair so it can run against a terminal or a script.

use std::io::{BufRead, Write};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::{OrderSinkPort, QuoteProviderPort, TradeCatalogPort, WriteMode};
use crate::application::use_cases::GenerateOrderUseCase;
use crate::domain::option_chain::OptionChainRaw;
use crate::domain::order_entry::OrderLine;
use crate::domain::trade_structure::TradeStructure;
use crate::error::{GeneratorError, UserInputError};

const TRADE_PROMPT: &str = "Enter trade name (type m for menu, q to quit): ";
const CONTINUE_PROMPT: &str = "\nAdd another trade [y/n]? ";
const BAD_DATA_WARNING: &str =
    "\nWarning - Bad option data from the quote provider detected. Please try again later.\n";
const NOT_FOUND_MESSAGE: &str = "Trade not found in trade_structures file. Please try again.\n";
const WRITTEN_MESSAGE: &str = "The following order was written to the file:";
const UNHANDLED_INPUT_MESSAGE: &str = "Unhandled input entered. Please try again.";

/// Where the session is in handling one command.
#[derive(Debug)]
enum SessionState {
    /// Waiting for a trade name or command.
    AwaitInput,
    /// Fetching a chain for `trade`.
    Fetching {
        trade: TradeStructure,
        attempt: u32,
    },
    /// Checking a fetched chain.
    Validating {
        trade: TradeStructure,
        chain: OptionChainRaw,
        attempt: u32,
    },
    /// Selecting contracts and building order lines.
    Assembling {
        trade: TradeStructure,
        chain: OptionChainRaw,
        attempt: u32,
    },
    /// Persisting the order lines.
    Writing { lines: Vec<OrderLine> },
    /// Asking whether to add another trade.
    Prompting,
    /// Session finished.
    Done,
}

/// What a command typed at the trade prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Menu,
    Quit,
    Trade(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input {
            "m" | "M" => Self::Menu,
            "q" | "Q" => Self::Quit,
            name => Self::Trade(name.to_string()),
        }
    }
}

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Trades whose orders were written.
    pub trades_written: usize,
    /// Order lines written across all trades.
    pub lines_written: usize,
    /// Commands that ended in an error message.
    pub failures: usize,
}

/// Interactive order generation session.
pub struct InteractiveSession<P, C, S>
where
    P: QuoteProviderPort,
    C: TradeCatalogPort,
    S: OrderSinkPort,
{
    use_case: GenerateOrderUseCase<P>,
    catalog: Arc<C>,
    sink: Arc<S>,
    clock: fn() -> DateTime<Utc>,
    summary: SessionSummary,
}

impl<P, C, S> InteractiveSession<P, C, S>
where
    P: QuoteProviderPort,
    C: TradeCatalogPort,
    S: OrderSinkPort,
{
    /// Create a new session.
    pub fn new(use_case: GenerateOrderUseCase<P>, catalog: Arc<C>, sink: Arc<S>) -> Self {
        Self {
            use_case,
            catalog,
            sink,
            clock: Utc::now,
            summary: SessionSummary::default(),
        }
    }

    /// Measure days-to-expiration from `clock` instead of the system time.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Run until the user quits, declines another trade, or input ends.
    ///
    /// Errors from a single command are reported on `output` and the loop
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns `Console` if reading `input` or writing `output` fails.
    pub async fn run<R, W>(mut self, mut input: R, mut output: W) -> Result<SessionSummary, GeneratorError>
    where
        R: BufRead,
        W: Write,
    {
        let mut state = SessionState::AwaitInput;

        loop {
            state = match state {
                SessionState::AwaitInput => self.await_input(&mut input, &mut output).await?,
                SessionState::Fetching { trade, attempt } => {
                    self.fetch(trade, attempt, &mut output).await?
                }
                SessionState::Validating {
                    trade,
                    chain,
                    attempt,
                } => self.validate(trade, chain, attempt, &mut output)?,
                SessionState::Assembling {
                    trade,
                    chain,
                    attempt,
                } => self.assemble(&trade, &chain, attempt, &mut output)?,
                SessionState::Writing { lines } => self.write(lines, &mut output).await?,
                SessionState::Prompting => Self::prompt(&mut input, &mut output)?,
                SessionState::Done => break,
            };
        }

        output.flush()?;
        tracing::info!(
            trades_written = self.summary.trades_written,
            lines_written = self.summary.lines_written,
            failures = self.summary.failures,
            "Session ended"
        );
        Ok(self.summary)
    }

    async fn await_input<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionState, GeneratorError> {
        write!(output, "{TRADE_PROMPT}")?;
        output.flush()?;

        let Some(line) = read_trimmed(input)? else {
            return Ok(SessionState::Done);
        };

        let command = Command::parse(&line);
        if command == Command::Quit {
            return Ok(SessionState::Done);
        }

        let catalog = match self.catalog.load().await {
            Ok(catalog) => catalog,
            Err(e) => {
                self.report(output, &GeneratorError::from(e))?;
                return Ok(SessionState::AwaitInput);
            }
        };

        match command {
            Command::Menu => {
                writeln!(output, "\nTrade Menu:")?;
                for name in catalog.names() {
                    writeln!(output, "{name}")?;
                }
                writeln!(output, "\n")?;
                Ok(SessionState::AwaitInput)
            }
            Command::Trade(name) => match catalog.find(&name) {
                Ok(trade) => Ok(SessionState::Fetching {
                    trade: trade.clone(),
                    attempt: 1,
                }),
                Err(e) => {
                    self.report(output, &GeneratorError::from(e))?;
                    Ok(SessionState::AwaitInput)
                }
            },
            Command::Quit => Ok(SessionState::Done),
        }
    }

    async fn fetch<W: Write>(
        &mut self,
        trade: TradeStructure,
        attempt: u32,
        output: &mut W,
    ) -> Result<SessionState, GeneratorError> {
        tracing::debug!(trade = %trade.trade_name, attempt, "Fetching option chain");

        match self.use_case.fetch_chain().await {
            Ok(chain) => Ok(SessionState::Validating {
                trade,
                chain,
                attempt,
            }),
            Err(e) => {
                self.report(output, &GeneratorError::from(e))?;
                Ok(SessionState::AwaitInput)
            }
        }
    }

    fn validate<W: Write>(
        &mut self,
        trade: TradeStructure,
        chain: OptionChainRaw,
        attempt: u32,
        output: &mut W,
    ) -> Result<SessionState, GeneratorError> {
        match self.use_case.validate_chain(&chain) {
            Ok(()) => Ok(SessionState::Assembling {
                trade,
                chain,
                attempt,
            }),
            Err(e) => self.refetch_or_report(trade, attempt, &GeneratorError::from(e), output),
        }
    }

    fn assemble<W: Write>(
        &mut self,
        trade: &TradeStructure,
        chain: &OptionChainRaw,
        attempt: u32,
        output: &mut W,
    ) -> Result<SessionState, GeneratorError> {
        let as_of = (self.clock)();

        match self.use_case.assemble_trade(trade, chain, as_of) {
            Ok(lines) => Ok(SessionState::Writing { lines }),
            Err(e @ GeneratorError::Chain(_)) => {
                self.refetch_or_report(trade.clone(), attempt, &e, output)
            }
            Err(e) => {
                self.report(output, &e)?;
                Ok(SessionState::AwaitInput)
            }
        }
    }

    async fn write<W: Write>(
        &mut self,
        lines: Vec<OrderLine>,
        output: &mut W,
    ) -> Result<SessionState, GeneratorError> {
        let mode = if self.summary.trades_written == 0 {
            WriteMode::Overwrite
        } else {
            WriteMode::Append
        };

        if let Err(e) = self.sink.write(&lines, mode).await {
            self.report(output, &GeneratorError::from(e))?;
            return Ok(SessionState::AwaitInput);
        }

        writeln!(output, "\n\n{WRITTEN_MESSAGE}")?;
        for line in &lines {
            writeln!(output, "{line}")?;
        }

        self.summary.trades_written += 1;
        self.summary.lines_written += lines.len();
        tracing::info!(
            location = %self.sink.location(),
            mode = ?mode,
            lines = lines.len(),
            "Order written"
        );

        Ok(SessionState::Prompting)
    }

    fn prompt<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionState, GeneratorError> {
        write!(output, "{CONTINUE_PROMPT}")?;
        output.flush()?;

        Ok(match read_trimmed(input)?.as_deref() {
            None | Some("n" | "N") => SessionState::Done,
            Some("y" | "Y") => SessionState::AwaitInput,
            Some(_) => {
                writeln!(output, "{UNHANDLED_INPUT_MESSAGE}")?;
                SessionState::Prompting
            }
        })
    }

    fn refetch_or_report<W: Write>(
        &mut self,
        trade: TradeStructure,
        attempt: u32,
        error: &GeneratorError,
        output: &mut W,
    ) -> Result<SessionState, GeneratorError> {
        if attempt < self.use_case.max_fetch_attempts() {
            tracing::warn!(
                error = %error,
                attempt,
                max_attempts = self.use_case.max_fetch_attempts(),
                "Unusable option chain, refetching"
            );
            return Ok(SessionState::Fetching {
                trade,
                attempt: attempt + 1,
            });
        }

        self.report(output, error)?;
        Ok(SessionState::AwaitInput)
    }

    fn report<W: Write>(&mut self, output: &mut W, error: &GeneratorError) -> std::io::Result<()> {
        self.summary.failures += 1;
        tracing::warn!(code = %error.code(), error = %error, "Command failed");

        match error {
            GeneratorError::UserInput(UserInputError::TradeNotFound { .. }) => {
                write!(output, "{NOT_FOUND_MESSAGE}")
            }
            GeneratorError::Chain(_) => write!(output, "{BAD_DATA_WARNING}"),
            other => writeln!(output, "\nError: {other}\n"),
        }
    }
}

/// Next input line without surrounding whitespace, or `None` at end of input.
fn read_trimmed<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("m", Command::Menu)]
    #[test_case("M", Command::Menu)]
    #[test_case("q", Command::Quit)]
    #[test_case("Q", Command::Quit)]
    #[test_case("Iron Condor", Command::Trade("Iron Condor".to_string()) ; "trade name")]
    #[test_case("mm", Command::Trade("mm".to_string()) ; "not a command")]
    fn command_parse(input: &str, expected: Command) {
        assert_eq!(Command::parse(input), expected);
    }

    #[test]
    fn read_trimmed_strips_line_endings() {
        let mut input = std::io::Cursor::new("  put spread \r\nnext\n");
        assert_eq!(read_trimmed(&mut input).unwrap().as_deref(), Some("put spread"));
        assert_eq!(read_trimmed(&mut input).unwrap().as_deref(), Some("next"));
        assert_eq!(read_trimmed(&mut input).unwrap(), None);
    }
}
