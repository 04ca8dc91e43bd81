/// Interactive REPL shell for Concourse
///
/// Provides a user-friendly interface with line editing, history,
/// autocomplete, and meta-commands on top of a connected driver handle.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use concourse_client::{
    AddArgs, AuditArgs, BrowseArgs, Concourse, DescribeArgs, GetArgs, Keys, Records, RemoveArgs,
    SetArgs, Timestamp, Value, VerifyArgs,
};
use rustyline::error::ReadlineError;
use rustyline::{
    completion::{Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Helper,
};

use crate::render::{self, OutputFormat};

/// Autocomplete helper for operations and meta-commands
#[derive(Clone)]
struct CashCompleter {
    meta_commands: Vec<String>,
    operations: Vec<String>,
}

impl CashCompleter {
    fn new() -> Self {
        Self {
            meta_commands: vec![
                ".help".to_string(),
                ".exit".to_string(),
                ".quit".to_string(),
                ".format".to_string(),
                ".timer".to_string(),
                ".clear".to_string(),
            ],
            operations: vec![
                "abort".to_string(),
                "add".to_string(),
                "audit".to_string(),
                "browse".to_string(),
                "commit".to_string(),
                "describe".to_string(),
                "exit".to_string(),
                "get".to_string(),
                "ping".to_string(),
                "remove".to_string(),
                "set".to_string(),
                "stage".to_string(),
                "time".to_string(),
                "verify".to_string(),
                "version".to_string(),
            ],
        }
    }

    fn complete_meta(&self, line: &str) -> Vec<Pair> {
        self.meta_commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect()
    }

    fn complete_operation(&self, word: &str) -> Vec<Pair> {
        self.operations
            .iter()
            .filter(|op| op.starts_with(word))
            .map(|op| Pair {
                display: op.clone(),
                replacement: op.clone(),
            })
            .collect()
    }
}

impl Completer for CashCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_prefix = &line[..pos];

        // Complete meta-commands if line starts with '.'
        if line_prefix.starts_with('.') {
            let candidates = self.complete_meta(line_prefix);
            return Ok((0, candidates));
        }

        // Only the leading word is an operation name
        if line_prefix.contains(|c: char| c == '(' || c.is_whitespace()) {
            return Ok((pos, Vec::new()));
        }

        let candidates = self.complete_operation(line_prefix);
        Ok((0, candidates))
    }
}

impl Hinter for CashCompleter {
    type Hint = String;
}

impl Highlighter for CashCompleter {}

impl Validator for CashCompleter {}

impl Helper for CashCompleter {}

/// One parsed shell command
#[derive(Debug)]
enum Command {
    Add(AddArgs),
    Audit(AuditArgs),
    Browse(BrowseArgs),
    Describe(DescribeArgs),
    Get(GetArgs),
    Ping(i64),
    Remove(RemoveArgs),
    Set(SetArgs),
    Verify(VerifyArgs),
    Stage,
    Abort,
    Commit,
    Time(Option<String>),
    Version,
}

/// A single parsed argument token
#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    IntList(Vec<i64>),
    StrList(Vec<String>),
}

/// Parse one shell command line.
///
/// Commands are written in call style, `add("name", "jeff", 1)`, with
/// the parentheses optional: `describe 1` works too. Quoted strings are
/// strings, bare integers are record ids or microsecond timestamps
/// depending on position, and brackets build lists.
fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim().trim_end_matches(';').trim();
    if input.is_empty() {
        bail!("empty command");
    }

    let (verb, rest) = match input.find(|c: char| c == '(' || c.is_whitespace()) {
        Some(idx) => {
            let (verb, rest) = input.split_at(idx);
            (verb, rest.trim())
        }
        None => (input, ""),
    };
    let args = parse_arguments(rest)?;

    match verb {
        "add" => Ok(Command::Add(add_args(&args)?)),
        "audit" => Ok(Command::Audit(audit_args(&args)?)),
        "browse" => Ok(Command::Browse(browse_args(&args)?)),
        "describe" => Ok(Command::Describe(describe_args(&args)?)),
        "get" => Ok(Command::Get(get_args(&args)?)),
        "ping" => match &args[..] {
            [Arg::Int(record)] => Ok(Command::Ping(*record)),
            _ => bail!("usage: ping(record)"),
        },
        "remove" => Ok(Command::Remove(remove_args(&args)?)),
        "set" => Ok(Command::Set(set_args(&args)?)),
        "verify" => Ok(Command::Verify(verify_args(&args)?)),
        "stage" => no_args(&args, "stage").map(|_| Command::Stage),
        "abort" => no_args(&args, "abort").map(|_| Command::Abort),
        "commit" => no_args(&args, "commit").map(|_| Command::Commit),
        "version" => no_args(&args, "version").map(|_| Command::Version),
        "time" => match &args[..] {
            [] => Ok(Command::Time(None)),
            [Arg::Str(phrase)] => Ok(Command::Time(Some(phrase.clone()))),
            _ => bail!("usage: time  or  time(\"phrase\")"),
        },
        other => bail!("unknown command: {} (type .help for a list)", other),
    }
}

fn no_args(args: &[Arg], verb: &str) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        bail!("{} takes no arguments", verb)
    }
}

/// Strip the optional parentheses and split the argument text into
/// parsed tokens.
fn parse_arguments(rest: &str) -> Result<Vec<Arg>> {
    let rest = rest.trim();
    let inner = if rest.starts_with('(') {
        if !rest.ends_with(')') {
            bail!("unbalanced parentheses");
        }
        &rest[1..rest.len() - 1]
    } else {
        rest
    };
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    split_top_level(inner)?
        .iter()
        .map(|token| parse_arg(token))
        .collect()
}

/// Split on top-level commas, respecting quotes and brackets.
fn split_top_level(input: &str) -> Result<Vec<String>> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    current.push(c);
                }
                '[' => {
                    depth += 1;
                    current.push(c);
                }
                ']' => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        anyhow::anyhow!("unbalanced brackets")
                    })?;
                    current.push(c);
                }
                ',' if depth == 0 => {
                    parts.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(c),
            },
        }
    }
    if quote.is_some() {
        bail!("unterminated string");
    }
    if depth != 0 {
        bail!("unbalanced brackets");
    }
    parts.push(current.trim().to_string());
    Ok(parts)
}

fn parse_arg(token: &str) -> Result<Arg> {
    let token = token.trim();
    if token.is_empty() {
        bail!("empty argument");
    }

    if (token.starts_with('"') && token.ends_with('"') && token.len() >= 2)
        || (token.starts_with('\'') && token.ends_with('\'') && token.len() >= 2)
    {
        let inner = &token[1..token.len() - 1];
        return Ok(Arg::Str(unescape(inner)));
    }

    if token.starts_with('[') {
        if !token.ends_with(']') {
            bail!("unbalanced brackets");
        }
        return parse_list(&token[1..token.len() - 1]);
    }

    match token {
        "true" => return Ok(Arg::Bool(true)),
        "false" => return Ok(Arg::Bool(false)),
        _ => {}
    }
    if let Ok(n) = token.parse::<i64>() {
        return Ok(Arg::Int(n));
    }
    if let Ok(d) = token.parse::<f64>() {
        return Ok(Arg::Float(d));
    }

    // Bare words read as strings, so unquoted keys work
    Ok(Arg::Str(token.to_string()))
}

fn parse_list(inner: &str) -> Result<Arg> {
    if inner.trim().is_empty() {
        bail!("empty list");
    }
    let items: Vec<Arg> = split_top_level(inner)?
        .iter()
        .map(|token| parse_arg(token))
        .collect::<Result<_>>()?;

    if items.iter().all(|item| matches!(item, Arg::Int(_))) {
        let records = items
            .iter()
            .filter_map(|item| match item {
                Arg::Int(n) => Some(*n),
                _ => None,
            })
            .collect();
        return Ok(Arg::IntList(records));
    }
    if items.iter().all(|item| matches!(item, Arg::Str(_))) {
        let keys = items
            .into_iter()
            .filter_map(|item| match item {
                Arg::Str(s) => Some(s),
                _ => None,
            })
            .collect();
        return Ok(Arg::StrList(keys));
    }
    bail!("lists must hold all record ids or all keys")
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

// ----------------------------------------------------------------------
// Argument token -> driver argument bag
// ----------------------------------------------------------------------

fn key_arg(arg: &Arg) -> Result<String> {
    match arg {
        Arg::Str(key) => Ok(key.clone()),
        _ => bail!("expected a key"),
    }
}

fn keys_arg(arg: &Arg) -> Result<Keys> {
    match arg {
        Arg::Str(key) => Ok(Keys::from(key.clone())),
        Arg::StrList(keys) => Ok(Keys::from(keys.clone())),
        _ => bail!("expected a key or a list of keys"),
    }
}

fn records_arg(arg: &Arg) -> Result<Records> {
    match arg {
        Arg::Int(record) => Ok(Records::from(*record)),
        Arg::IntList(records) => Ok(Records::from(records.clone())),
        _ => bail!("expected a record id or a list of record ids"),
    }
}

fn record_arg(arg: &Arg) -> Result<i64> {
    match arg {
        Arg::Int(record) => Ok(*record),
        _ => bail!("expected a record id"),
    }
}

fn value_arg(arg: &Arg) -> Result<Value> {
    match arg {
        Arg::Str(s) => Ok(Value::string(s.clone())),
        Arg::Int(n) => Ok(Value::integer(*n)),
        Arg::Float(d) => Ok(Value::double(*d)),
        Arg::Bool(b) => Ok(Value::boolean(*b)),
        _ => bail!("expected a single value, found a list"),
    }
}

/// Bare integers are microsecond instants, quoted strings are phrases
fn timestamp_arg(arg: &Arg) -> Result<Timestamp> {
    match arg {
        Arg::Int(micros) => Ok(Timestamp::from(*micros)),
        Arg::Str(phrase) => Ok(Timestamp::from(phrase.clone())),
        _ => bail!("expected a timestamp (micros or phrase)"),
    }
}

fn add_args(args: &[Arg]) -> Result<AddArgs> {
    match args {
        [key, value] => Ok(AddArgs::new().key(key_arg(key)?).value(value_arg(value)?)),
        [key, value, records] => Ok(AddArgs::new()
            .key(key_arg(key)?)
            .value(value_arg(value)?)
            .records(records_arg(records)?)),
        _ => bail!("usage: add(key, value[, record(s)])"),
    }
}

fn remove_args(args: &[Arg]) -> Result<RemoveArgs> {
    match args {
        [key, value, records] => Ok(RemoveArgs::new()
            .key(key_arg(key)?)
            .value(value_arg(value)?)
            .records(records_arg(records)?)),
        _ => bail!("usage: remove(key, value, record(s))"),
    }
}

fn set_args(args: &[Arg]) -> Result<SetArgs> {
    match args {
        [key, value] => Ok(SetArgs::new().key(key_arg(key)?).value(value_arg(value)?)),
        [key, value, records] => Ok(SetArgs::new()
            .key(key_arg(key)?)
            .value(value_arg(value)?)
            .records(records_arg(records)?)),
        _ => bail!("usage: set(key, value[, record(s)])"),
    }
}

fn get_args(args: &[Arg]) -> Result<GetArgs> {
    match args {
        [keys, records] => Ok(GetArgs::new()
            .keys(keys_arg(keys)?)
            .records(records_arg(records)?)),
        [keys, records, time] => Ok(GetArgs::new()
            .keys(keys_arg(keys)?)
            .records(records_arg(records)?)
            .time(timestamp_arg(time)?)),
        _ => bail!("usage: get(key(s), record(s)[, timestamp])"),
    }
}

fn browse_args(args: &[Arg]) -> Result<BrowseArgs> {
    match args {
        [keys] => Ok(BrowseArgs::new().keys(keys_arg(keys)?)),
        [keys, time] => Ok(BrowseArgs::new()
            .keys(keys_arg(keys)?)
            .time(timestamp_arg(time)?)),
        _ => bail!("usage: browse(key(s)[, timestamp])"),
    }
}

fn describe_args(args: &[Arg]) -> Result<DescribeArgs> {
    match args {
        [record] => Ok(DescribeArgs::new().record(record_arg(record)?)),
        [record, time] => Ok(DescribeArgs::new()
            .record(record_arg(record)?)
            .time(timestamp_arg(time)?)),
        _ => bail!("usage: describe(record[, timestamp])"),
    }
}

fn audit_args(args: &[Arg]) -> Result<AuditArgs> {
    match args {
        [Arg::Int(record)] => Ok(AuditArgs::new().record(*record)),
        [Arg::Str(key), Arg::Int(record)] => {
            Ok(AuditArgs::new().key(key.clone()).record(*record))
        }
        [Arg::Int(record), start] => Ok(AuditArgs::new()
            .record(*record)
            .start(timestamp_arg(start)?)),
        [Arg::Str(key), Arg::Int(record), start] => Ok(AuditArgs::new()
            .key(key.clone())
            .record(*record)
            .start(timestamp_arg(start)?)),
        [Arg::Int(record), start, end] => Ok(AuditArgs::new()
            .record(*record)
            .start(timestamp_arg(start)?)
            .end(timestamp_arg(end)?)),
        [Arg::Str(key), Arg::Int(record), start, end] => Ok(AuditArgs::new()
            .key(key.clone())
            .record(*record)
            .start(timestamp_arg(start)?)
            .end(timestamp_arg(end)?)),
        _ => bail!("usage: audit(record[, start[, end]])  or  audit(key, record[, start[, end]])"),
    }
}

fn verify_args(args: &[Arg]) -> Result<VerifyArgs> {
    match args {
        [key, value, record] => Ok(VerifyArgs::new()
            .key(key_arg(key)?)
            .value(value_arg(value)?)
            .record(record_arg(record)?)),
        [key, value, record, time] => Ok(VerifyArgs::new()
            .key(key_arg(key)?)
            .value(value_arg(value)?)
            .record(record_arg(record)?)
            .time(timestamp_arg(time)?)),
        _ => bail!("usage: verify(key, value, record[, timestamp])"),
    }
}

// ----------------------------------------------------------------------
// Execution
// ----------------------------------------------------------------------

async fn dispatch(db: &mut Concourse, command: Command, format: OutputFormat) -> Result<()> {
    match command {
        Command::Add(args) => println!("{}", render::add_result(&db.add(args).await?)),
        Command::Remove(args) => println!("{}", render::remove_result(&db.remove(args).await?)),
        Command::Set(args) => println!("{}", render::set_result(db.set(args).await?)),
        Command::Get(args) => println!("{}", render::get_result(&db.get(args).await?, format)),
        Command::Browse(args) => {
            println!("{}", render::browse_result(&db.browse(args).await?, format))
        }
        Command::Audit(args) => println!("{}", render::audit_log(&db.audit(args).await?)),
        Command::Describe(args) => {
            println!("{}", render::describe_keys(&db.describe(args).await?))
        }
        Command::Verify(args) => println!("{}", db.verify(args).await?),
        Command::Ping(record) => println!("{}", db.ping(record).await?),
        Command::Stage => {
            db.stage().await?;
            println!("Transaction staged");
        }
        Command::Abort => {
            db.abort().await?;
            println!("Transaction aborted");
        }
        Command::Commit => {
            if db.commit().await? {
                println!("Transaction committed");
            } else {
                println!("Nothing to commit");
            }
        }
        Command::Time(None) => {
            let micros = db.time().await?;
            println!("{}  {}", micros, render::format_micros(micros));
        }
        Command::Time(Some(phrase)) => {
            let micros = db.time_phrase(phrase).await?;
            println!("{}  {}", micros, render::format_micros(micros));
        }
        Command::Version => println!("{}", db.server_version().await?),
    }
    Ok(())
}

/// Execute one command against a connected driver, then log out.
pub async fn run_once(mut db: Concourse, input: &str) -> Result<()> {
    let command = parse_command(input)?;
    dispatch(&mut db, command, OutputFormat::Table).await?;
    db.exit().await?;
    Ok(())
}

/// Interactive shell session state
pub struct Shell {
    db: Concourse,
    editor: rustyline::Editor<CashCompleter, rustyline::history::FileHistory>,
    format: OutputFormat,
    show_timing: bool,
}

impl Shell {
    /// Create a new shell session over a connected driver
    pub fn new(db: Concourse) -> Result<Self> {
        let completer = CashCompleter::new();
        let mut editor = rustyline::Editor::new().context("Failed to initialize line editor")?;
        editor.set_helper(Some(completer));

        let history_path = history_path();
        if history_path.exists() {
            let _ = editor.load_history(&history_path);
        }

        Ok(Self {
            db,
            editor,
            format: OutputFormat::Table,
            show_timing: true,
        })
    }

    /// Run the interactive REPL until exit, then close the session
    pub async fn run(mut self) -> Result<()> {
        let version = self
            .db
            .server_version()
            .await
            .unwrap_or_else(|_| "unknown".to_string());
        self.print_welcome(&version);

        loop {
            let environment = if self.db.environment().is_empty() {
                "default".to_string()
            } else {
                self.db.environment().to_string()
            };
            let prompt = format!("{} ", format!("[{}] concourse>", environment).green().bold());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    if matches!(line, ".exit" | ".quit" | "exit" | "quit") {
                        break;
                    }

                    if let Err(e) = self.execute(line).await {
                        eprintln!("{} {}", "Error:".red().bold(), e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - cancel current input
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D - exit
                    break;
                }
                Err(err) => {
                    eprintln!("Error reading line: {}", err);
                    break;
                }
            }
        }

        self.print_goodbye();
        self.save_history()?;
        self.db.exit().await?;

        Ok(())
    }

    /// Execute a command or meta-command
    async fn execute(&mut self, input: &str) -> Result<()> {
        if input.starts_with('.') {
            return self.execute_meta(input);
        }

        let command = parse_command(input)?;
        let start = std::time::Instant::now();
        dispatch(&mut self.db, command, self.format).await?;

        if self.show_timing {
            println!(
                "{}",
                format!("({:.2}ms)", start.elapsed().as_secs_f64() * 1000.0).dimmed()
            );
        }
        Ok(())
    }

    /// Execute a meta-command (dot-command)
    fn execute_meta(&mut self, command: &str) -> Result<()> {
        let parts: Vec<&str> = command.split_whitespace().collect();
        let cmd = parts.first().unwrap_or(&"");

        match *cmd {
            ".help" => self.show_help(),
            ".format" => {
                if parts.len() < 2 {
                    println!("Usage: .format <table|json>");
                    println!("Current format: {:?}", self.format);
                } else {
                    self.set_format(parts[1]);
                }
            }
            ".timer" => {
                if parts.len() < 2 {
                    println!("Usage: .timer <on|off>");
                    println!("Current: {}", if self.show_timing { "on" } else { "off" });
                } else {
                    self.set_timer(parts[1]);
                }
            }
            ".clear" => {
                print!("\x1B[2J\x1B[1;1H");
            }
            _ => {
                println!("{} {}", "Unknown command:".yellow(), cmd);
                println!("Type .help for available commands");
            }
        }
        Ok(())
    }

    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold());
        println!("\n  {}", "Meta-commands:".cyan());
        println!("    .help                  Show this help message");
        println!("    .exit, .quit           Exit the shell");
        println!("    .format <table|json>   Set output format");
        println!("    .timer <on|off>        Toggle command timing display");
        println!("    .clear                 Clear the screen");

        println!("\n  {}", "Writes:".cyan());
        println!("    add(\"name\", \"jeff\")              Append into a new record");
        println!("    add(\"name\", \"jeff\", 1)           Append into record 1");
        println!("    set(\"name\", \"jeff\", [1, 2])      Overwrite in records 1 and 2");
        println!("    remove(\"name\", \"jeff\", 1)        Remove from record 1");

        println!("\n  {}", "Reads:".cyan());
        println!("    get(\"name\", 1)                   Value stored for a key");
        println!("    get([\"name\", \"age\"], [1, 2])     Fan out over keys and records");
        println!("    get(\"name\", 1, \"last week\")      As of a past timestamp");
        println!("    browse(\"age\")                    Index of values to records");
        println!("    describe(1)                      Keys with data in a record");
        println!("    audit(1)                         Revision log of a record");
        println!("    verify(\"name\", \"jeff\", 1)        Check a stored value");
        println!("    ping(1)                          Whether a record holds data");

        println!("\n  {}", "Transactions:".cyan());
        println!("    stage                            Start a transaction");
        println!("    commit                           Apply the staged writes");
        println!("    abort                            Discard the staged writes");

        println!("\n  {}", "Server:".cyan());
        println!("    time                             Server clock in micros");
        println!("    time(\"3 days ago\")               Resolve a phrase to micros");
        println!("    version                          Server version");
        println!();
    }

    fn set_format(&mut self, format: &str) {
        self.format = match format.to_lowercase().as_str() {
            "table" => OutputFormat::Table,
            "json" => OutputFormat::Json,
            _ => {
                println!("{} {}. Use: table or json", "Invalid format:".red(), format);
                return;
            }
        };
        println!("Output format set to: {:?}", self.format);
    }

    fn set_timer(&mut self, value: &str) {
        self.show_timing = match value.to_lowercase().as_str() {
            "on" | "true" | "1" => true,
            "off" | "false" | "0" => false,
            _ => {
                println!("{} {}. Use: on or off", "Invalid value:".red(), value);
                return;
            }
        };
        println!(
            "Timer {}",
            if self.show_timing { "enabled" } else { "disabled" }
        );
    }

    /// Print welcome banner
    fn print_welcome(&self, version: &str) {
        let address = format!("{}:{}", self.db.host(), self.db.port());
        println!();
        println!("{}", "╔═══════════════════════════════════════════════════╗".cyan());
        println!("{}", "║           Concourse Action SHell (cash)           ║".cyan().bold());
        println!("{}", "║                                                   ║".cyan());
        println!("{}", format!("║  Connected to: {:<35} ║", truncate(&address, 35)).cyan());
        println!("{}", format!("║  Server version: {:<33} ║", truncate(version, 33)).cyan());
        println!("{}", "║                                                   ║".cyan());
        println!("{}", "║  Type .help for commands, .exit to leave          ║".cyan());
        println!("{}", "╚═══════════════════════════════════════════════════╝".cyan());
        println!();
    }

    /// Print goodbye message
    fn print_goodbye(&self) {
        println!();
        println!("{}", "Goodbye.".green().bold());
    }

    /// Save command history
    fn save_history(&mut self) -> Result<()> {
        self.editor
            .save_history(&history_path())
            .context("Failed to save command history")?;
        Ok(())
    }
}

fn history_path() -> std::path::PathBuf {
    dirs::home_dir()
        .map(|p| p.join(".cash_history"))
        .unwrap_or_else(|| ".cash_history".into())
}

/// Truncate a string to fit in the welcome banner
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_arguments() {
        assert_eq!(parse_arg("\"jeff\"").unwrap(), Arg::Str("jeff".to_string()));
        assert_eq!(parse_arg("'jeff'").unwrap(), Arg::Str("jeff".to_string()));
        assert_eq!(parse_arg("17").unwrap(), Arg::Int(17));
        assert_eq!(parse_arg("-3").unwrap(), Arg::Int(-3));
        assert_eq!(parse_arg("3.5").unwrap(), Arg::Float(3.5));
        assert_eq!(parse_arg("true").unwrap(), Arg::Bool(true));
        assert_eq!(parse_arg("false").unwrap(), Arg::Bool(false));
        // bare words are strings
        assert_eq!(parse_arg("name").unwrap(), Arg::Str("name".to_string()));
    }

    #[test]
    fn test_parse_lists() {
        assert_eq!(parse_arg("[1, 2, 3]").unwrap(), Arg::IntList(vec![1, 2, 3]));
        assert_eq!(
            parse_arg("[\"name\", \"age\"]").unwrap(),
            Arg::StrList(vec!["name".to_string(), "age".to_string()])
        );
        assert!(parse_arg("[1, \"name\"]").is_err());
        assert!(parse_arg("[]").is_err());
    }

    #[test]
    fn test_split_respects_quotes_and_brackets() {
        let parts = split_top_level("\"a, b\", [1, 2], 3").unwrap();
        assert_eq!(parts, vec!["\"a, b\"", "[1, 2]", "3"]);
    }

    #[test]
    fn test_quoted_strings_keep_spaces_and_escapes() {
        assert_eq!(
            parse_arg("\"jeff jr\"").unwrap(),
            Arg::Str("jeff jr".to_string())
        );
        assert_eq!(
            parse_arg(r#""say \"hi\"""#).unwrap(),
            Arg::Str("say \"hi\"".to_string())
        );
    }

    #[test]
    fn test_parse_call_style_commands() {
        assert!(matches!(
            parse_command("add(\"name\", \"jeff\", 1)").unwrap(),
            Command::Add(_)
        ));
        assert!(matches!(
            parse_command("get([\"name\", \"age\"], [1, 2])").unwrap(),
            Command::Get(_)
        ));
        assert!(matches!(
            parse_command("verify(\"name\", \"jeff\", 1, \"last week\")").unwrap(),
            Command::Verify(_)
        ));
        assert!(matches!(
            parse_command("audit(\"name\", 1, 123, 456)").unwrap(),
            Command::Audit(_)
        ));
    }

    #[test]
    fn test_parse_parenless_commands() {
        assert!(matches!(
            parse_command("describe 1").unwrap(),
            Command::Describe(_)
        ));
        assert!(matches!(
            parse_command("time \"3 days ago\"").unwrap(),
            Command::Time(Some(_))
        ));
        assert!(matches!(
            parse_command("browse name").unwrap(),
            Command::Browse(_)
        ));
    }

    #[test]
    fn test_parse_bare_commands() {
        assert!(matches!(parse_command("stage").unwrap(), Command::Stage));
        assert!(matches!(parse_command("commit").unwrap(), Command::Commit));
        assert!(matches!(parse_command("abort").unwrap(), Command::Abort));
        assert!(matches!(parse_command("time").unwrap(), Command::Time(None)));
        assert!(matches!(
            parse_command("version").unwrap(),
            Command::Version
        ));
    }

    #[test]
    fn test_trailing_semicolon_is_ignored() {
        assert!(matches!(
            parse_command("ping(1);").unwrap(),
            Command::Ping(1)
        ));
    }

    #[test]
    fn test_unknown_and_malformed_commands_error() {
        assert!(parse_command("frobnicate(1)").is_err());
        assert!(parse_command("add(\"name\")").is_err());
        assert!(parse_command("remove(\"name\", \"jeff\")").is_err());
        assert!(parse_command("ping(\"one\")").is_err());
        assert!(parse_command("stage(1)").is_err());
        assert!(parse_command("add(\"name\", \"unterminated)").is_err());
    }
}
