//! Command registry and dispatch
//!
//! Commands are registered on a [`RegistryBuilder`]; [`RegistryBuilder::freeze`]
//! turns it into a read-only [`Dispatcher`] that can be shared across threads.

use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::application::error::{DispatchError, DispatchResult, HandlerError, RegistrationError};
use crate::application::report::ReportRow;
use crate::application::services::Binder;
use crate::domain::{
    tokenize, Command, CommandSchema, ConverterRegistry, OptionDescriptor, ParsedArguments,
};

/// What a handler returns.
pub type HandlerResult = Result<(), HandlerError>;

type Handler<C> = Box<dyn Fn(C) -> HandlerResult + Send + Sync>;

/// Command types that carry their own handler.
pub trait Execute {
    fn execute(self) -> HandlerResult;
}

/// A registered command: its schema plus the handler for bound instances.
pub struct CommandDescriptor<C> {
    schema: CommandSchema<C>,
    handler: Handler<C>,
}

impl<C> CommandDescriptor<C> {
    pub fn schema(&self) -> &CommandSchema<C> {
        &self.schema
    }
}

/// Type-erased view of a [`CommandDescriptor`].
trait Registered: Send + Sync {
    fn verb(&self) -> &str;

    fn help(&self) -> Option<&str>;

    fn descriptors(&self) -> Vec<&OptionDescriptor>;

    /// Bind, then call the handler once if binding succeeded.
    fn run(&self, binder: Binder<'_>, parsed: &ParsedArguments) -> DispatchResult<()>;
}

impl<C: Default + Send + 'static> Registered for CommandDescriptor<C> {
    fn verb(&self) -> &str {
        self.schema.verb()
    }

    fn help(&self) -> Option<&str> {
        self.schema.help_text()
    }

    fn descriptors(&self) -> Vec<&OptionDescriptor> {
        self.schema.descriptors().collect()
    }

    fn run(&self, binder: Binder<'_>, parsed: &ParsedArguments) -> DispatchResult<()> {
        let command = binder.bind(&self.schema, parsed).map_err(DispatchError::Bind)?;
        debug!("run: invoking handler for '{}'", self.verb());
        (self.handler)(command).map_err(|source| DispatchError::Handler {
            verb: self.verb().to_string(),
            source,
        })
    }
}

/// Mutable setup phase of the command registry.
pub struct RegistryBuilder {
    converters: ConverterRegistry,
    commands: IndexMap<String, Box<dyn Registered>>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Builder using the built-in converter rules.
    pub fn new() -> Self {
        Self::with_converters(ConverterRegistry::builtin())
    }

    pub fn with_converters(converters: ConverterRegistry) -> Self {
        Self {
            converters,
            commands: IndexMap::new(),
        }
    }

    /// Register `C` under the verb from its schema.
    pub fn register<C, H>(self, handler: H) -> Result<Self, RegistrationError>
    where
        C: Command,
        H: Fn(C) -> HandlerResult + Send + Sync + 'static,
    {
        self.register_schema(C::schema(), handler)
    }

    /// Register a command type that handles itself.
    pub fn register_executable<C>(self) -> Result<Self, RegistrationError>
    where
        C: Command + Execute,
    {
        self.register::<C, _>(C::execute)
    }

    /// Register an explicitly built schema.
    ///
    /// Fails on an invalid schema, a verb that is already taken, or an option
    /// whose value kind the converter registry cannot resolve to one rule.
    pub fn register_schema<C, H>(
        mut self,
        schema: CommandSchema<C>,
        handler: H,
    ) -> Result<Self, RegistrationError>
    where
        C: Default + Send + 'static,
        H: Fn(C) -> HandlerResult + Send + Sync + 'static,
    {
        schema.validate()?;
        let verb = schema.verb().to_string();
        if self.commands.contains_key(&verb) {
            return Err(RegistrationError::DuplicateVerb(verb));
        }
        for descriptor in schema.descriptors() {
            self.converters
                .resolve(descriptor.kind)
                .map_err(|source| RegistrationError::Converter {
                    verb: verb.clone(),
                    option: descriptor.signature(),
                    source,
                })?;
        }

        debug!(
            "register: '{}' with {} option(s)",
            verb,
            schema.options().len()
        );
        let descriptor = CommandDescriptor {
            schema,
            handler: Box::new(handler),
        };
        self.commands.insert(verb, Box::new(descriptor));
        Ok(self)
    }

    /// End the setup phase. The returned dispatcher is read-only.
    pub fn freeze(self) -> Dispatcher {
        debug!("freeze: {} command(s)", self.commands.len());
        Dispatcher {
            converters: self.converters,
            commands: self.commands,
        }
    }
}

/// Frozen registry: looks up the verb, tokenizes, binds, runs the handler.
pub struct Dispatcher {
    converters: ConverterRegistry,
    commands: IndexMap<String, Box<dyn Registered>>,
}

impl Dispatcher {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Dispatch a full argument list whose first element is the verb.
    ///
    /// The handler runs at most once, and only when every option bound.
    /// An empty argument list does nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn dispatch<S>(&self, args: &[S]) -> DispatchResult<DispatchStatus>
    where
        S: AsRef<str> + std::fmt::Debug,
    {
        let Some((verb, rest)) = args.split_first() else {
            debug!("dispatch: no verb given");
            return Ok(DispatchStatus::NoVerb);
        };
        let verb = verb.as_ref();

        let command = self
            .commands
            .get(verb)
            .ok_or_else(|| DispatchError::UnknownVerb(verb.to_string()))?;
        let parsed = tokenize(rest)?;
        command.run(Binder::new(&self.converters), &parsed)?;

        Ok(DispatchStatus::Handled(verb.to_string()))
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.commands.contains_key(verb)
    }

    /// Verbs in registration order.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    /// One row per verb with its help text.
    pub fn help_rows(&self) -> Vec<ReportRow> {
        self.commands
            .values()
            .map(|command| ReportRow::new(command.verb(), command.help().unwrap_or_default()))
            .collect()
    }

    /// One row per option of `verb`, `None` if the verb is unknown.
    pub fn option_rows(&self, verb: &str) -> Option<Vec<ReportRow>> {
        let command = self.commands.get(verb)?;
        let rows = command
            .descriptors()
            .into_iter()
            .map(|d| {
                let mut help = d.help.clone().unwrap_or_default();
                if d.required {
                    help = format!("(required) {help}").trim_end().to_string();
                }
                ReportRow::new(d.signature(), help)
            })
            .collect();
        Some(rows)
    }
}

/// What a successful dispatch call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchStatus {
    /// No arguments at all; nothing ran.
    NoVerb,
    /// The handler for this verb ran once.
    Handled(String),
}
