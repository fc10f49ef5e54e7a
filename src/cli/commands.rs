//! Demo commands and the top-level command execution.

use tracing::{debug, instrument};

use crate::application::{
    DispatchStatus, Dispatcher, Execute, HandlerResult, RegistrationError, RegistryBuilder,
};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{Command, CommandSchema, OptionSpec};

/// `test1 -s <i32> [-p <i32>]`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestCommand {
    pub int_prop: i32,
    pub second_property: i32,
}

impl Command for TestCommand {
    fn schema() -> CommandSchema<Self> {
        CommandSchema::<Self>::new("test1")
            .help("this is help")
            .option(OptionSpec::new('p', "prop").help("help"), |c, v: i32| {
                c.int_prop = v
            })
            .option(
                OptionSpec::new('s', "second").help("help").required(),
                |c, v: i32| c.second_property = v,
            )
    }
}

impl Execute for TestCommand {
    fn execute(self) -> HandlerResult {
        output::info(&format!(
            "prop: {}, second: {}",
            self.int_prop, self.second_property
        ));
        Ok(())
    }
}

/// `greet -n <name> [-t <times>] [-l <bool>]`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GreetCommand {
    pub name: String,
    pub times: Option<u8>,
    pub loud: bool,
}

impl Command for GreetCommand {
    fn schema() -> CommandSchema<Self> {
        CommandSchema::<Self>::new("greet")
            .help("Print a greeting")
            .option(
                OptionSpec::new('n', "name").help("who to greet").required(),
                |c, v: String| c.name = v,
            )
            .option(
                OptionSpec::new('t', "times").help("repeat count (default 1)"),
                |c, v: Option<u8>| c.times = v,
            )
            .option(
                OptionSpec::new('l', "loud").help("true to shout"),
                |c, v: bool| c.loud = v,
            )
    }
}

impl GreetCommand {
    pub fn lines(&self) -> Vec<String> {
        let greeting = format!("Hello, {}!", self.name);
        let greeting = if self.loud {
            greeting.to_uppercase()
        } else {
            greeting
        };
        vec![greeting; usize::from(self.times.unwrap_or(1))]
    }
}

impl Execute for GreetCommand {
    fn execute(self) -> HandlerResult {
        if self.times == Some(0) {
            return Err("times must be at least 1".into());
        }
        for line in self.lines() {
            output::info(&line);
        }
        Ok(())
    }
}

/// Registry with all demo commands, frozen.
pub fn build_dispatcher() -> Result<Dispatcher, RegistrationError> {
    Ok(RegistryBuilder::new()
        .register_executable::<TestCommand>()?
        .register_executable::<GreetCommand>()?
        .freeze())
}

#[instrument(level = "debug", skip(settings))]
pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    if cli.config_template {
        output::info(&Settings::template());
        return Ok(());
    }
    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let dispatcher = build_dispatcher()?;

    if let Some(verb) = &cli.options {
        let rows = dispatcher
            .option_rows(verb)
            .ok_or_else(|| CliError::Usage(verb.clone()))?;
        output::header(verb);
        output::table(&rows, &settings.render);
        return Ok(());
    }
    if cli.list {
        output::table(&dispatcher.help_rows(), &settings.render);
        return Ok(());
    }

    match dispatcher.dispatch(cli.args.as_slice())? {
        DispatchStatus::NoVerb => {
            output::warning("no verb given, available verbs:");
            output::table(&dispatcher.help_rows(), &settings.render);
        }
        DispatchStatus::Handled(verb) => debug!("handled '{}'", verb),
    }
    Ok(())
}
